//! [`DataLoader`](super::super::DataLoader) over in-memory text, plus the default alphabet corpus.

use super::super::{Data, DataError, DataLoader};

/// The default training stream: the 26 lowercase letters in order.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Loads data from a string held in memory.
#[derive(Clone, Debug)]
pub struct TextLoader<S>(pub S);

impl<S> TextLoader<S>
where
    S: AsRef<str>,
{
    #[must_use]
    pub fn new(text: S) -> Self {
        TextLoader(text)
    }
}

impl<S> DataLoader for TextLoader<S>
where
    S: AsRef<str>,
{
    fn load(&self) -> Result<Data, DataError> {
        Data::from_text(self.0.as_ref())
    }
}

/// The [`ALPHABET`] corpus as [`Data`].
#[must_use]
pub fn alphabet() -> Data {
    Data(ALPHABET.chars().collect())
}
