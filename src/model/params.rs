//! Parameter store and the matching gradient accumulators.

use std::fmt;

use rand::Rng;

use super::matrix::{clip, descend, Matrix};

/// Names of the five trainable tensors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamName {
    /// `W_ih`, H×V.
    InputHidden,
    /// `W_hh`, H×H.
    HiddenHidden,
    /// `W_ho`, V×H.
    HiddenOutput,
    /// `b_h`, H.
    BiasHidden,
    /// `b_o`, V.
    BiasOutput,
}

impl ParamName {
    pub const ALL: [ParamName; 5] = [
        ParamName::InputHidden,
        ParamName::HiddenHidden,
        ParamName::HiddenOutput,
        ParamName::BiasHidden,
        ParamName::BiasOutput,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ParamName::InputHidden => "w_input_hidden",
            ParamName::HiddenHidden => "w_hidden_hidden",
            ParamName::HiddenOutput => "w_hidden_output",
            ParamName::BiasHidden => "bias_hidden",
            ParamName::BiasOutput => "bias_output",
        }
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weights and biases of the recurrent cell and its output layer.
///
/// Shapes are fixed at construction: `w_input_hidden` H×V, `w_hidden_hidden` H×H,
/// `w_hidden_output` V×H, `bias_hidden` H, `bias_output` V.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub w_input_hidden: Matrix,
    pub w_hidden_hidden: Matrix,
    pub w_hidden_output: Matrix,
    pub bias_hidden: Vec<f64>,
    pub bias_output: Vec<f64>,
}

impl Params {
    /// Weights from N(0, 1) times `scale`, biases zero.
    pub fn random<R: Rng + ?Sized>(
        dim_input: usize,
        dim_hidden: usize,
        dim_output: usize,
        scale: f64,
        rng: &mut R,
    ) -> Self {
        Params {
            w_input_hidden: Matrix::randn(dim_hidden, dim_input, scale, rng),
            w_hidden_hidden: Matrix::randn(dim_hidden, dim_hidden, scale, rng),
            w_hidden_output: Matrix::randn(dim_output, dim_hidden, scale, rng),
            bias_hidden: vec![0.0; dim_hidden],
            bias_output: vec![0.0; dim_output],
        }
    }

    #[must_use]
    pub fn dim_input(&self) -> usize {
        self.w_input_hidden.cols()
    }

    #[must_use]
    pub fn dim_hidden(&self) -> usize {
        self.w_hidden_hidden.rows()
    }

    #[must_use]
    pub fn dim_output(&self) -> usize {
        self.w_hidden_output.rows()
    }

    /// Total number of scalars across all five tensors.
    #[must_use]
    pub fn num_params(&self) -> usize {
        ParamName::ALL.iter().map(|&n| self.get(n).len()).sum()
    }

    /// Flat view of one tensor.
    #[must_use]
    pub fn get(&self, name: ParamName) -> &[f64] {
        match name {
            ParamName::InputHidden => self.w_input_hidden.as_slice(),
            ParamName::HiddenHidden => self.w_hidden_hidden.as_slice(),
            ParamName::HiddenOutput => self.w_hidden_output.as_slice(),
            ParamName::BiasHidden => &self.bias_hidden,
            ParamName::BiasOutput => &self.bias_output,
        }
    }

    pub fn get_mut(&mut self, name: ParamName) -> &mut [f64] {
        match name {
            ParamName::InputHidden => self.w_input_hidden.as_mut_slice(),
            ParamName::HiddenHidden => self.w_hidden_hidden.as_mut_slice(),
            ParamName::HiddenOutput => self.w_hidden_output.as_mut_slice(),
            ParamName::BiasHidden => &mut self.bias_hidden,
            ParamName::BiasOutput => &mut self.bias_output,
        }
    }

    /// Plain gradient descent: `p -= learning_rate * g` for every tensor.
    pub fn apply_gradients(&mut self, grads: &Gradients, learning_rate: f64) {
        for name in ParamName::ALL {
            descend(self.get_mut(name), grads.get(name), learning_rate);
        }
    }
}

/// Per-parameter gradient accumulators, same shapes as [`Params`].
#[derive(Clone, Debug, PartialEq)]
pub struct Gradients {
    pub w_input_hidden: Matrix,
    pub w_hidden_hidden: Matrix,
    pub w_hidden_output: Matrix,
    pub bias_hidden: Vec<f64>,
    pub bias_output: Vec<f64>,
}

impl Gradients {
    /// Zero accumulators shaped like `params`.
    #[must_use]
    pub fn zeros_like(params: &Params) -> Self {
        Gradients {
            w_input_hidden: params.w_input_hidden.zeros_like(),
            w_hidden_hidden: params.w_hidden_hidden.zeros_like(),
            w_hidden_output: params.w_hidden_output.zeros_like(),
            bias_hidden: vec![0.0; params.bias_hidden.len()],
            bias_output: vec![0.0; params.bias_output.len()],
        }
    }

    #[must_use]
    pub fn get(&self, name: ParamName) -> &[f64] {
        match name {
            ParamName::InputHidden => self.w_input_hidden.as_slice(),
            ParamName::HiddenHidden => self.w_hidden_hidden.as_slice(),
            ParamName::HiddenOutput => self.w_hidden_output.as_slice(),
            ParamName::BiasHidden => &self.bias_hidden,
            ParamName::BiasOutput => &self.bias_output,
        }
    }

    fn get_mut(&mut self, name: ParamName) -> &mut [f64] {
        match name {
            ParamName::InputHidden => self.w_input_hidden.as_mut_slice(),
            ParamName::HiddenHidden => self.w_hidden_hidden.as_mut_slice(),
            ParamName::HiddenOutput => self.w_hidden_output.as_mut_slice(),
            ParamName::BiasHidden => &mut self.bias_hidden,
            ParamName::BiasOutput => &mut self.bias_output,
        }
    }

    /// Clamp every accumulator element-wise into `[-limit, limit]`.
    pub fn clip(&mut self, limit: f64) {
        for name in ParamName::ALL {
            clip(self.get_mut(name), limit);
        }
    }

    /// Largest absolute element across all accumulators.
    #[must_use]
    pub fn max_abs(&self) -> f64 {
        ParamName::ALL
            .iter()
            .flat_map(|&n| self.get(n).iter())
            .fold(0.0_f64, |m, v| m.max(v.abs()))
    }
}
