//! Forward evaluation over one window: hidden states, output distributions and loss.

use super::matrix::{add_assign, one_hot, softmax};
use super::params::Params;

/// Everything the backward pass needs from one forward window.
///
/// `hidden[t]` is `h[t]`; the carried-in `h[-1]` lives in `initial_hidden`, so no
/// timestep index ever goes negative.
#[derive(Clone, Debug, Default)]
pub struct ForwardTrace {
    pub initial_hidden: Vec<f64>,
    pub input_patterns: Vec<Vec<f64>>,
    pub hidden: Vec<Vec<f64>>,
    pub logits: Vec<Vec<f64>>,
    pub probs: Vec<Vec<f64>>,
    pub targets: Vec<usize>,
    /// Summed cross-entropy over the window.
    pub loss: f64,
}

impl ForwardTrace {
    /// Number of timesteps (T).
    #[must_use]
    pub fn len(&self) -> usize {
        self.hidden.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty()
    }

    /// `h[t - 1]`: the carried-in state for `t == 0`.
    #[must_use]
    pub fn hidden_before(&self, t: usize) -> &[f64] {
        if t == 0 {
            &self.initial_hidden
        } else {
            &self.hidden[t - 1]
        }
    }

    /// `h[T - 1]`, or the carried-in state for an empty window.
    #[must_use]
    pub fn final_hidden(&self) -> &[f64] {
        self.hidden.last().unwrap_or(&self.initial_hidden)
    }
}

/// `tanh(W_ih · x + W_hh · h_prev + b_h)`.
#[must_use]
pub fn cell_step(params: &Params, x: &[f64], h_prev: &[f64]) -> Vec<f64> {
    let mut h = params.w_input_hidden.matvec(x);
    add_assign(&mut h, &params.w_hidden_hidden.matvec(h_prev));
    add_assign(&mut h, &params.bias_hidden);
    for v in &mut h {
        *v = v.tanh();
    }
    h
}

/// Raw scores `W_ho · h + b_o`.
#[must_use]
pub fn output_logits(params: &Params, h: &[f64]) -> Vec<f64> {
    let mut o = params.w_hidden_output.matvec(h);
    add_assign(&mut o, &params.bias_output);
    o
}

/// Runs the recurrence over `inputs` starting from `h_prev`, scoring each step against `targets`.
///
/// The loss is non-finite if any target gets zero probability; that value is returned as-is.
///
/// # Panics
///
/// If `inputs` and `targets` differ in length, `h_prev` is not H long, or an index is outside
/// the vocabulary.
#[must_use]
pub fn forward(
    params: &Params,
    h_prev: &[f64],
    inputs: &[usize],
    targets: &[usize],
) -> ForwardTrace {
    assert_eq!(
        inputs.len(),
        targets.len(),
        "forward: inputs and targets must have the same length"
    );
    assert_eq!(
        h_prev.len(),
        params.dim_hidden(),
        "forward: h_prev must have hidden dimension"
    );
    let vocab_size = params.dim_input();
    let steps = inputs.len();

    let mut trace = ForwardTrace {
        initial_hidden: h_prev.to_vec(),
        input_patterns: Vec::with_capacity(steps),
        hidden: Vec::with_capacity(steps),
        logits: Vec::with_capacity(steps),
        probs: Vec::with_capacity(steps),
        targets: targets.to_vec(),
        loss: 0.0,
    };

    for (t, (&input, &target)) in inputs.iter().zip(targets).enumerate() {
        let x = one_hot(input, vocab_size);
        let h = cell_step(params, &x, trace.hidden_before(t));
        let o = output_logits(params, &h);
        let p = softmax(&o);
        trace.loss += -p[target].ln();

        trace.input_patterns.push(x);
        trace.hidden.push(h);
        trace.logits.push(o);
        trace.probs.push(p);
    }
    trace
}
