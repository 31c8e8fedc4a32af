//! Build [`Config`] from `CHAR_BPTT_*` environment variables.

use std::path::PathBuf;

use super::constants::{
    ENV_HIDDEN_DIM, ENV_INPUT_PATH, ENV_LEARNING_RATE, ENV_NUM_TRAINING_ITERATIONS, ENV_PREFIX,
    ENV_REPORT_EVERY, ENV_SEED, ENV_SEQUENCE_LENGTH,
};
use super::Config;
use super::ConfigError;

/// Returns the full environment variable key for a suffix (`SEED` → `CHAR_BPTT_SEED`).
#[must_use]
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Reads an environment variable as a string.
///
/// `Ok(None)` when unset, `Err(ConfigError::EnvVar)` when set but not valid Unicode.
pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(s) => Ok(Some(s)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Reads an environment variable and parses it into `T`.
///
/// Returns `Ok(None)` if unset and `Err(ConfigError::Parse)` if set but unparsable.
pub fn env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(s) = env_string(key)? else {
        return Ok(None);
    };
    match s.trim().parse() {
        Ok(t) => Ok(Some(t)),
        Err(e) => Err(ConfigError::Parse {
            key: key.to_string(),
            value: s,
            message: e.to_string(),
        }),
    }
}

/// Builds [`Config`] from environment variables; unset values fall back to [`Config::default`].
///
/// Does not validate; call [`Config::validate`] on the result.
pub fn from_env() -> Result<Config, ConfigError> {
    let default = Config::default();

    let seed = env_parsed::<u64>(&env_key(ENV_SEED))?.unwrap_or(default.seed);
    let input_path = env_string(&env_key(ENV_INPUT_PATH))?
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
        .or(default.input_path);
    let hidden_dim =
        env_parsed::<usize>(&env_key(ENV_HIDDEN_DIM))?.unwrap_or(default.hidden_dim);
    let num_training_iterations = env_parsed::<usize>(&env_key(ENV_NUM_TRAINING_ITERATIONS))?
        .unwrap_or(default.num_training_iterations);
    let learning_rate =
        env_parsed::<f64>(&env_key(ENV_LEARNING_RATE))?.unwrap_or(default.learning_rate);
    let sequence_length =
        env_parsed::<usize>(&env_key(ENV_SEQUENCE_LENGTH))?.unwrap_or(default.sequence_length);
    let report_every =
        env_parsed::<usize>(&env_key(ENV_REPORT_EVERY))?.unwrap_or(default.report_every);

    Ok(Config {
        seed,
        input_path,
        hidden_dim,
        num_training_iterations,
        learning_rate,
        sequence_length,
        report_every,
    })
}
