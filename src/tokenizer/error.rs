//! Errors produced when encoding or decoding with a tokenizer.

use std::fmt;

/// Errors produced by the tokenizer module.
///
/// # Variants
///
/// - **UnknownSymbol**: A character is not in the vocabulary.
///   *When*: During encode, for text the tokenizer was not built from.
///
/// - **InvalidId**: An index is outside `[0, vocab_size)`.
///   *When*: During decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    /// A character not in the vocabulary was encountered during encode.
    UnknownSymbol(char),

    /// An index is out of range during decode.
    InvalidId(usize),
}

impl fmt::Display for TokenizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizerError::UnknownSymbol(c) => write!(f, "tokenizer: unknown symbol {c:?}"),
            TokenizerError::InvalidId(id) => write!(f, "tokenizer: invalid id {id}"),
        }
    }
}

impl std::error::Error for TokenizerError {}
