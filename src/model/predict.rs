//! Greedy character generation.

use crate::tokenizer::{Tokenizer, TokenizerError};

use super::forward::{cell_step, output_logits};
use super::matrix::{argmax, one_hot, softmax};
use super::params::Params;

/// Seed character and its greedy continuation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prediction {
    pub seed: char,
    pub predicted: Vec<char>,
}

impl Prediction {
    /// The continuation as a string.
    #[must_use]
    pub fn predicted_string(&self) -> String {
        self.predicted.iter().collect()
    }
}

/// Starting from `inputs[seed_index]` and `hidden`, feeds back the argmax character
/// `num_predictions` times.
///
/// `hidden` is copied; the caller's state and the parameters are left untouched.
///
/// # Errors
///
/// [`TokenizerError::InvalidId`] if an index has no character in `tokenizer`.
///
/// # Panics
///
/// If `seed_index` is outside `inputs`.
pub fn predict<T: Tokenizer + ?Sized>(
    params: &Params,
    tokenizer: &T,
    seed_index: usize,
    inputs: &[usize],
    hidden: &[f64],
    num_predictions: usize,
) -> Result<Prediction, TokenizerError> {
    let vocab_size = params.dim_input();
    let seed_id = inputs[seed_index];
    let seed = tokenizer.decode_id(seed_id)?;

    let mut x = one_hot(seed_id, vocab_size);
    let mut h = hidden.to_vec();
    let mut predicted = Vec::with_capacity(num_predictions);
    for _ in 0..num_predictions {
        h = cell_step(params, &x, &h);
        let p = softmax(&output_logits(params, &h));
        let next = argmax(&p);
        predicted.push(tokenizer.decode_id(next)?);
        x = one_hot(next, vocab_size);
    }
    Ok(Prediction { seed, predicted })
}
