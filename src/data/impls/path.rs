//! [`DataLoader`](super::super::DataLoader) that reads a UTF-8 file as one character stream.

use std::fs;
use std::path::Path;

use super::super::{Data, DataError, DataLoader};

/// Loads the whole file, newlines included, as the training stream.
#[derive(Clone, Debug)]
pub struct PathLoader<P>(pub P);

impl<P> PathLoader<P>
where
    P: AsRef<Path>,
{
    #[must_use]
    pub fn new(path: P) -> Self {
        PathLoader(path)
    }
}

impl<P> DataLoader for PathLoader<P>
where
    P: AsRef<Path>,
{
    fn load(&self) -> Result<Data, DataError> {
        let content = fs::read_to_string(self.0.as_ref())?;
        Data::from_text(&content)
    }
}

/// Convenience: load data from a path using [`PathLoader`].
///
/// # Errors
///
/// - [`DataError::Io`] when the path cannot be read or is not valid UTF-8.
/// - [`DataError::EmptyFile`] when the file is empty.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Data, DataError> {
    PathLoader::new(path).load()
}
