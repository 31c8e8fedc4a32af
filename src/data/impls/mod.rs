//! Implementations of [`DataLoader`](super::DataLoader).
//!
//! One file per source: [`path`] for files, [`text`] for in-memory strings.

mod path;
mod text;

pub use path::{load_from_path, PathLoader};
pub use text::{alphabet, TextLoader, ALPHABET};
