#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    ConfigKeys,
    LanguagesReduce,
    LanguagesValidateCodes,
    RowsReduce,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "config.keys" => Command::ConfigKeys,
            "languages.reduce" => Command::LanguagesReduce,
            "languages.validate_codes" => Command::LanguagesValidateCodes,
            "rows.reduce" => Command::RowsReduce,
            _ => Command::Unknown,
        }
    }
}
