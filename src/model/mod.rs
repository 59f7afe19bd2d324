pub mod language;
pub mod record;
