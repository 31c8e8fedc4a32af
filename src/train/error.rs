//! Errors raised before or around the training loop.

use std::fmt;

use crate::tokenizer::TokenizerError;

/// Errors produced by the training module.
///
/// # Variants
///
/// - **DataTooShort**: The stream cannot fill one window plus its shifted target.
///   *Recovery*: Use more data or a shorter `sequence_length`.
///
/// - **Tokenizer**: An index produced during training had no character (vocabulary mismatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainError {
    /// `len` characters cannot hold a window of `sequence_length` plus one target.
    DataTooShort { len: usize, sequence_length: usize },

    /// Decoding a predicted index failed.
    Tokenizer(TokenizerError),
}

impl fmt::Display for TrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainError::DataTooShort {
                len,
                sequence_length,
            } => write!(
                f,
                "train: data has {len} characters, need more than sequence_length ({sequence_length})"
            ),
            TrainError::Tokenizer(e) => write!(f, "train: {e}"),
        }
    }
}

impl std::error::Error for TrainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrainError::Tokenizer(e) => Some(e),
            TrainError::DataTooShort { .. } => None,
        }
    }
}

impl From<TokenizerError> for TrainError {
    fn from(e: TokenizerError) -> Self {
        TrainError::Tokenizer(e)
    }
}
