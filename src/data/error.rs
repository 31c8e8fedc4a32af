//! Errors produced when loading training data.

use std::fmt;

/// Errors produced by the data loading module.
///
/// # Variants
///
/// - **Io**: The file could not be read (missing, unreadable, not UTF-8).
///   *Recovery*: Check the path in `CHAR_BPTT_INPUT_PATH`.
///
/// - **EmptyFile**: The source was read but contains no characters.
///   *Recovery*: Provide non-empty training text.
#[derive(Debug)]
pub enum DataError {
    /// I/O error while reading the input file.
    Io(std::io::Error),

    /// The input yields no characters.
    EmptyFile,
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "data io: {e}"),
            DataError::EmptyFile => write!(f, "data: input is empty"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io(e) => Some(e),
            DataError::EmptyFile => None,
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e)
    }
}
