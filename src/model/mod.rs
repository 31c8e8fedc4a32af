//! The recurrent model: parameter store, forward and backward evaluators, update rule
//! and greedy predictor.
//!
//! The forward pass produces a [`ForwardTrace`]; the backward pass consumes it. The two are
//! kept as separate stages so each can be checked on its own, and [`Bptt::loss_and_gradients`]
//! fuses them for the training loop.

mod backward;
mod forward;
mod matrix;
mod params;
mod predict;
#[cfg(test)]
mod tests;

use rand::Rng;

use crate::tokenizer::{Tokenizer, TokenizerError};

pub use backward::{backward, backward_unclipped};
pub use forward::{cell_step, forward, output_logits, ForwardTrace};
pub use matrix::{argmax, clip, one_hot, softmax, Matrix};
pub use params::{Gradients, ParamName, Params};
pub use predict::{predict, Prediction};

/// Weight matrices are drawn from N(0, 1) and multiplied by this.
pub const INIT_SCALE: f64 = 0.01;

/// Gradients are clamped element-wise to `[-GRAD_CLIP, GRAD_CLIP]` after every backward pass.
pub const GRAD_CLIP: f64 = 5.0;

/// Constructor arguments. Every field is required.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelConfig {
    pub dim_input: usize,
    pub dim_hidden: usize,
    pub dim_output: usize,
    pub num_training_iterations: usize,
    pub learning_rate: f64,
    /// Truncation window T, used for both forward replay and backward depth.
    pub sequence_length: usize,
}

/// Result of one fused forward + backward pass.
#[derive(Clone, Debug)]
pub struct StepOutput {
    pub loss: f64,
    /// Clipped gradients.
    pub grads: Gradients,
    pub trace: ForwardTrace,
}

impl StepOutput {
    /// Hidden state to carry into the next window.
    #[must_use]
    pub fn final_hidden(&self) -> &[f64] {
        self.trace.final_hidden()
    }
}

/// Character-level RNN trained with truncated BPTT (k1 = k2 = `sequence_length`).
#[derive(Clone, Debug)]
pub struct Bptt {
    config: ModelConfig,
    params: Params,
}

impl Bptt {
    /// Randomly initialized model: weights `N(0, 1) * INIT_SCALE`, zero biases.
    pub fn new<R: Rng + ?Sized>(config: ModelConfig, rng: &mut R) -> Self {
        let params = Params::random(
            config.dim_input,
            config.dim_hidden,
            config.dim_output,
            INIT_SCALE,
            rng,
        );
        Bptt { config, params }
    }

    /// Model with explicit starting parameters.
    ///
    /// # Panics
    ///
    /// If the parameter shapes disagree with `config`.
    #[must_use]
    pub fn from_params(config: ModelConfig, params: Params) -> Self {
        assert_eq!(
            params.dim_input(),
            config.dim_input,
            "from_params: input dim"
        );
        assert_eq!(
            params.dim_hidden(),
            config.dim_hidden,
            "from_params: hidden dim"
        );
        assert_eq!(
            params.dim_output(),
            config.dim_output,
            "from_params: output dim"
        );
        Bptt { config, params }
    }

    #[must_use]
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    #[must_use]
    pub fn sequence_length(&self) -> usize {
        self.config.sequence_length
    }

    #[must_use]
    pub fn num_training_iterations(&self) -> usize {
        self.config.num_training_iterations
    }

    #[must_use]
    pub fn dim_hidden(&self) -> usize {
        self.config.dim_hidden
    }

    /// Forward pass over one window of exactly `sequence_length` steps; see [`forward`].
    ///
    /// # Panics
    ///
    /// In debug builds, if `inputs.len()` differs from the configured `sequence_length`.
    #[must_use]
    pub fn forward(&self, h_prev: &[f64], inputs: &[usize], targets: &[usize]) -> ForwardTrace {
        debug_assert_eq!(
            inputs.len(),
            self.config.sequence_length,
            "Bptt::forward: window must be sequence_length long"
        );
        forward(&self.params, h_prev, inputs, targets)
    }

    /// Clipped gradients for a trace produced by [`Bptt::forward`].
    #[must_use]
    pub fn backward(&self, trace: &ForwardTrace) -> Gradients {
        backward(&self.params, trace, GRAD_CLIP)
    }

    /// Forward then backward; the parameters are not touched.
    #[must_use]
    pub fn loss_and_gradients(
        &self,
        h_prev: &[f64],
        inputs: &[usize],
        targets: &[usize],
    ) -> StepOutput {
        let trace = self.forward(h_prev, inputs, targets);
        let grads = self.backward(&trace);
        StepOutput {
            loss: trace.loss,
            grads,
            trace,
        }
    }

    /// `param -= learning_rate * grad` for all five tensors.
    pub fn update(&mut self, grads: &Gradients) {
        self.params.apply_gradients(grads, self.config.learning_rate);
    }

    /// Greedy continuation of `inputs[seed_index]`; see [`predict`].
    pub fn predict<T: Tokenizer + ?Sized>(
        &self,
        tokenizer: &T,
        seed_index: usize,
        inputs: &[usize],
        hidden: &[f64],
        num_predictions: usize,
    ) -> Result<Prediction, TokenizerError> {
        predict(
            &self.params,
            tokenizer,
            seed_index,
            inputs,
            hidden,
            num_predictions,
        )
    }
}
