//! Central place for all configuration constants.
//!
//! Default values and environment variable key names used by the config builder.
//! The defaults reproduce the reference run: the 26-letter alphabet, 10 hidden units,
//! 10 000 iterations, learning rate 0.01 and a 25-character window.

/// Environment variable prefix for char-bptt (e.g. `CHAR_BPTT_HIDDEN_DIM`).
pub(crate) const ENV_PREFIX: &str = "CHAR_BPTT_";

// --- Env key suffixes (full key = ENV_PREFIX + suffix) ---

pub(crate) const ENV_SEED: &str = "SEED";
pub(crate) const ENV_INPUT_PATH: &str = "INPUT_PATH";
pub(crate) const ENV_HIDDEN_DIM: &str = "HIDDEN_DIM";
pub(crate) const ENV_NUM_TRAINING_ITERATIONS: &str = "NUM_TRAINING_ITERATIONS";
pub(crate) const ENV_LEARNING_RATE: &str = "LEARNING_RATE";
pub(crate) const ENV_SEQUENCE_LENGTH: &str = "SEQUENCE_LENGTH";
pub(crate) const ENV_REPORT_EVERY: &str = "REPORT_EVERY";

// --- Default values ---

pub(crate) const DEFAULT_SEED: u64 = 42;
pub(crate) const DEFAULT_HIDDEN_DIM: usize = 10;
pub(crate) const DEFAULT_NUM_TRAINING_ITERATIONS: usize = 10_000;
pub(crate) const DEFAULT_LEARNING_RATE: f64 = 0.01;
pub(crate) const DEFAULT_SEQUENCE_LENGTH: usize = 25;
pub(crate) const DEFAULT_REPORT_EVERY: usize = 100;
