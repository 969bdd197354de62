use thiserror::Error;

/// Errors surfaced by the core to the console.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Schema or key configuration is missing or malformed.
    #[error("config error: {0}")]
    Config(String),

    /// Data or settings payload has the wrong shape.
    #[error("payload error: {0}")]
    Payload(String),

    /// A row does not match the schema length under the strict policy.
    #[error("row {row} has {found} values, schema expects {expected}")]
    RowShape {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl CoreError {
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::Config(_) => "config",
            CoreError::Payload(_) => "payload",
            CoreError::RowShape { .. } => "row_shape",
        }
    }
}
