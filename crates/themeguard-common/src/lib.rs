pub mod errors;

pub use errors::{ConfigError, SanitizeError, ThemeGuardError, ValidationError};

pub type Result<T> = std::result::Result<T, ThemeGuardError>;
