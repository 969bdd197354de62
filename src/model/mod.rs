pub mod keys;
pub mod record;
pub mod schema;
pub mod site_languages;
