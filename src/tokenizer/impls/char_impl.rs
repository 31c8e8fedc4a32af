//! Character-level tokenizer: one index per distinct character, sorted for determinism.

use std::collections::BTreeSet;

use super::super::Vocab;
use super::super::{Tokenizer, TokenizerError};

/// Character-level tokenizer built from the distinct characters of a corpus.
#[derive(Clone, Debug)]
pub struct CharTokenizer {
    vocab: Vocab,
}

impl CharTokenizer {
    /// Builds the vocab from `corpus`: distinct characters in ascending order.
    #[must_use]
    pub fn from_corpus(corpus: impl IntoIterator<Item = char>) -> Self {
        let distinct: BTreeSet<char> = corpus.into_iter().collect();
        CharTokenizer {
            vocab: Vocab::new(distinct),
        }
    }

    #[must_use]
    pub fn vocab(&self) -> &Vocab {
        &self.vocab
    }
}

impl Tokenizer for CharTokenizer {
    fn encode_char(&self, c: char) -> Result<usize, TokenizerError> {
        self.vocab
            .get_index(c)
            .ok_or(TokenizerError::UnknownSymbol(c))
    }

    fn decode_id(&self, id: usize) -> Result<char, TokenizerError> {
        self.vocab.get_char(id).ok_or(TokenizerError::InvalidId(id))
    }

    fn vocab_size(&self) -> usize {
        self.vocab.len()
    }
}
