//! Vocabulary and character ↔ index encoding.
//!
//! This module defines the **trait** ([`Tokenizer`]) and **error** ([`TokenizerError`]).
//! [`CharTokenizer`] builds its [`Vocab`] once from the distinct characters of the
//! training stream, sorted so indices do not depend on corpus order.

mod error;
mod impls;
mod vocab;

pub use error::TokenizerError;
pub use impls::CharTokenizer;
pub use vocab::Vocab;

/// Trait for tokenizers: map characters to dense indices and back.
pub trait Tokenizer {
    /// Index of a single character.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::UnknownSymbol`] if `c` is not in the vocabulary.
    fn encode_char(&self, c: char) -> Result<usize, TokenizerError>;

    /// Character for a single index.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::InvalidId`] if `id` is out of range.
    fn decode_id(&self, id: usize) -> Result<char, TokenizerError>;

    /// Vocabulary size (number of distinct characters).
    fn vocab_size(&self) -> usize;

    /// Encodes every character of `chars`.
    fn encode_chars(&self, chars: &[char]) -> Result<Vec<usize>, TokenizerError> {
        chars.iter().map(|&c| self.encode_char(c)).collect()
    }

    /// Encodes a string into indices.
    fn encode(&self, s: &str) -> Result<Vec<usize>, TokenizerError> {
        s.chars().map(|c| self.encode_char(c)).collect()
    }

    /// Decodes indices into a string.
    fn decode(&self, ids: &[usize]) -> Result<String, TokenizerError> {
        ids.iter().map(|&id| self.decode_id(id)).collect()
    }
}
