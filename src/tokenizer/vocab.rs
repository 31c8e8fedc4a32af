//! Vocabulary: bidirectional mapping between characters and dense indices `0..len`.

use std::collections::HashMap;

/// Maps indices to characters and back. Indices are contiguous from `0` to `len - 1`.
#[derive(Clone, Debug)]
pub struct Vocab {
    index_to_char: Vec<char>,
    char_to_index: HashMap<char, usize>,
}

impl Vocab {
    /// Builds a vocab with the given characters in order. Duplicates are skipped (first wins).
    #[must_use]
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut index_to_char = Vec::new();
        let mut char_to_index = HashMap::new();
        for c in chars {
            if char_to_index.contains_key(&c) {
                continue;
            }
            char_to_index.insert(c, index_to_char.len());
            index_to_char.push(c);
        }
        Vocab {
            index_to_char,
            char_to_index,
        }
    }

    /// Number of characters (vocab size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.index_to_char.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index_to_char.is_empty()
    }

    /// Returns the character for `index`, or `None` if out of range.
    #[must_use]
    pub fn get_char(&self, index: usize) -> Option<char> {
        self.index_to_char.get(index).copied()
    }

    /// Returns the index of `c`, or `None` if not in the vocab.
    #[must_use]
    pub fn get_index(&self, c: char) -> Option<usize> {
        self.char_to_index.get(&c).copied()
    }

    /// Characters in index order.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.index_to_char
    }
}
