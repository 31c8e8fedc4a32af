//! # char-bptt
//!
//! Character-level recurrent network trained with truncated back-propagation-through-time,
//! where the replay window and the backprop window are the same length (k1 = k2).
//!
//! Pipeline: [`data`] → [`tokenizer`] → [`model`] → [`train`], wired together by [`run`].

pub mod config;
pub mod data;
pub mod model;
pub mod tokenizer;
pub mod train;

use rand::{rngs::StdRng, SeedableRng};

use config::Config;
use data::{alphabet, load_from_path};
use model::{Bptt, Prediction};
use tokenizer::{CharTokenizer, Tokenizer};
use train::{fit, Reporter, TrainingHistory};

/// What a full [`run`] produces.
#[derive(Clone, Debug)]
pub struct RunOutput {
    pub model: Bptt,
    pub tokenizer: CharTokenizer,
    pub history: TrainingHistory,
    /// Greedy continuation of the last training window, from its carried-in hidden state.
    pub final_prediction: Prediction,
}

/// Loads data, builds the vocabulary, trains, and predicts once more from the last window.
///
/// # Errors
///
/// Invalid configuration, unreadable or too-short data, or a vocabulary mismatch.
pub fn run<R: Reporter + ?Sized>(
    config: &Config,
    reporter: &mut R,
) -> Result<RunOutput, Box<dyn std::error::Error>> {
    config.validate()?;

    let data = match &config.input_path {
        Some(path) => load_from_path(path)?,
        None => alphabet(),
    };
    let tokenizer = CharTokenizer::from_corpus(data.chars().iter().copied());
    let encoded = tokenizer.encode_chars(data.chars())?;
    tracing::info!(
        data_len = data.len(),
        vocab_size = tokenizer.vocab_size(),
        source = ?config.input_path,
        "loaded training data"
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut model = Bptt::new(config.model_config(tokenizer.vocab_size()), &mut rng);
    let history = fit(
        &mut model,
        &encoded,
        &tokenizer,
        reporter,
        config.report_every,
    )?;

    let final_prediction = model.predict(
        &tokenizer,
        0,
        &history.input_indices,
        history.last_trace.hidden_before(0),
        config.sequence_length,
    )?;

    Ok(RunOutput {
        model,
        tokenizer,
        history,
        final_prediction,
    })
}
