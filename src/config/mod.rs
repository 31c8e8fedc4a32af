//! Configuration for the training run: model size, schedule, seed and input source.
//!
//! Load from environment via [`from_env`] and validate with [`Config::validate`].
//! Default values and env key names are centralized in the `constants` submodule.
//! The numeric core never reads this type directly; [`Config::model_config`] turns it
//! into the explicit [`ModelConfig`] the model is constructed from.

mod builder;
mod constants;
mod error;

use std::path::PathBuf;

use constants::{
    DEFAULT_HIDDEN_DIM, DEFAULT_LEARNING_RATE, DEFAULT_NUM_TRAINING_ITERATIONS,
    DEFAULT_REPORT_EVERY, DEFAULT_SEED, DEFAULT_SEQUENCE_LENGTH,
};

use crate::model::ModelConfig;

pub use builder::{env_key, env_parsed, env_string, from_env};
pub use error::ConfigError;

/// Application-level configuration.
///
/// Use [`from_env`] to build from environment variables and [`Config::validate`] before use.
#[derive(Clone, Debug)]
pub struct Config {
    /// Seed for the parameter-initialization RNG.
    pub seed: u64,
    /// Training text file. `None` trains on the lowercase alphabet.
    pub input_path: Option<PathBuf>,

    /// Hidden state dimension (H).
    pub hidden_dim: usize,
    /// Number of training iterations; the loop runs this many plus one.
    pub num_training_iterations: usize,
    /// Gradient descent step size.
    pub learning_rate: f64,
    /// Truncation window T (both replay and backprop depth).
    pub sequence_length: usize,
    /// Report progress and a greedy prediction every this many iterations.
    pub report_every: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            input_path: None,
            hidden_dim: DEFAULT_HIDDEN_DIM,
            num_training_iterations: DEFAULT_NUM_TRAINING_ITERATIONS,
            learning_rate: DEFAULT_LEARNING_RATE,
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            report_every: DEFAULT_REPORT_EVERY,
        }
    }
}

impl Config {
    /// Validates configuration. Returns `Ok(())` if valid, or a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hidden_dim == 0 {
            return Err(ConfigError::Validation(
                "hidden_dim must be greater than 0".to_string(),
            ));
        }
        if self.sequence_length == 0 {
            return Err(ConfigError::Validation(
                "sequence_length must be greater than 0".to_string(),
            ));
        }
        if self.report_every == 0 {
            return Err(ConfigError::Validation(
                "report_every must be greater than 0".to_string(),
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    /// Builds the model constructor arguments for a vocabulary of `vocab_size` characters.
    ///
    /// Input and output dimensions both equal the vocabulary size.
    #[must_use]
    pub fn model_config(&self, vocab_size: usize) -> ModelConfig {
        ModelConfig {
            dim_input: vocab_size,
            dim_hidden: self.hidden_dim,
            dim_output: vocab_size,
            num_training_iterations: self.num_training_iterations,
            learning_rate: self.learning_rate,
            sequence_length: self.sequence_length,
        }
    }
}
