pub mod language_code;
pub mod languages;
pub mod rows;
