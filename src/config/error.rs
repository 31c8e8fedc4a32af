//! Configuration errors.
//!
//! Validation and env loading both report through [`ConfigError`].

use std::fmt;

/// Errors produced when building or validating configuration.
///
/// # Variants
///
/// - **Validation**: A value is out of range (e.g. `sequence_length == 0`).
///   *When*: After building a `Config` and calling `validate()`.
///   *Recovery*: Fix the value named in the message.
///
/// - **EnvVar**: An environment variable could not be read (e.g. invalid Unicode).
///
/// - **Parse**: An environment variable was set but does not parse into the expected type
///   (e.g. `CHAR_BPTT_HIDDEN_DIM=ten`). Unset it to fall back to the default.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Configuration validation failed.
    Validation(String),

    /// Failed to read an environment variable.
    EnvVar {
        /// The full environment variable name that was read.
        key: String,
        /// Underlying cause (e.g. NotUnicode).
        message: String,
    },

    /// Environment variable was set but could not be parsed into the expected type.
    Parse {
        /// The full environment variable name.
        key: String,
        /// The raw value that failed to parse.
        value: String,
        /// Parse failure reason.
        message: String,
    },
}

impl ConfigError {
    /// Returns a short message suitable for logging or user display.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ConfigError::Validation(m) => m,
            ConfigError::EnvVar { message, .. } | ConfigError::Parse { message, .. } => message,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Validation(m) => write!(f, "config validation: {m}"),
            ConfigError::EnvVar { key, message } => write!(f, "env var {key}: {message}"),
            ConfigError::Parse {
                key,
                value,
                message,
            } => write!(f, "env var {key}={value:?}: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}
