//! Training data: the raw character stream the training loop slices windows from.
//!
//! This module defines the **trait** ([`DataLoader`]), the **model** ([`Data`]) and the
//! **error** ([`DataError`]). Sources live in the `impls` submodule: [`PathLoader`] for files,
//! [`TextLoader`] for in-memory text, and [`alphabet`] for the default corpus.

mod error;
mod impls;
mod types;

pub use error::DataError;
pub use impls::{alphabet, load_from_path, PathLoader, TextLoader, ALPHABET};
pub use types::Data;

/// Trait for loading the training stream.
pub trait DataLoader {
    /// Loads data. Returns [`Data`] or a [`DataError`].
    fn load(&self) -> Result<Data, DataError>;
}
