//! [`Data`]: the ordered character stream training windows are sliced from.

use std::fmt;

use super::DataError;

/// A non-empty, ordered sequence of characters.
///
/// Construction fails with [`DataError::EmptyFile`] on an empty stream.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Data(pub(super) Vec<char>);

impl Data {
    /// Builds [`Data`] from a character sequence.
    ///
    /// # Errors
    ///
    /// - [`DataError::EmptyFile`] when `chars` is empty.
    pub fn new(chars: Vec<char>) -> Result<Self, DataError> {
        if chars.is_empty() {
            return Err(DataError::EmptyFile);
        }
        Ok(Data(chars))
    }

    /// Builds [`Data`] from the characters of `text`, in order.
    ///
    /// # Errors
    ///
    /// - [`DataError::EmptyFile`] when `text` is empty.
    pub fn from_text(text: &str) -> Result<Self, DataError> {
        Self::new(text.chars().collect())
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed [`Data`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.0
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
