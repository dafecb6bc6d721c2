pub mod analyzer_error;
pub mod commands;
