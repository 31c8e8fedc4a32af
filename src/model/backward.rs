//! Reverse-time gradient accumulation over a [`ForwardTrace`].

use super::forward::ForwardTrace;
use super::matrix::add_assign;
use super::params::{Gradients, Params};

/// Gradients of the summed window loss with respect to every parameter, before clipping.
#[must_use]
pub fn backward_unclipped(params: &Params, trace: &ForwardTrace) -> Gradients {
    let mut grads = Gradients::zeros_like(params);
    let mut dh_next = vec![0.0; params.dim_hidden()];

    for t in (0..trace.len()).rev() {
        let h = &trace.hidden[t];

        // softmax + cross-entropy
        let mut d_out = trace.probs[t].clone();
        d_out[trace.targets[t]] -= 1.0;

        grads.w_hidden_output.add_outer(&d_out, h);
        add_assign(&mut grads.bias_output, &d_out);

        let mut dh = params.w_hidden_output.transpose_matvec(&d_out);
        add_assign(&mut dh, &dh_next);

        let dh_raw: Vec<f64> = h
            .iter()
            .zip(&dh)
            .map(|(hv, dv)| (1.0 - hv * hv) * dv)
            .collect();

        grads
            .w_hidden_hidden
            .add_outer(&dh_raw, trace.hidden_before(t));
        add_assign(&mut grads.bias_hidden, &dh_raw);
        grads
            .w_input_hidden
            .add_outer(&dh_raw, &trace.input_patterns[t]);

        dh_next = params.w_hidden_hidden.transpose_matvec(&dh_raw);
    }
    grads
}

/// [`backward_unclipped`] followed by element-wise clipping to `[-clip_limit, clip_limit]`.
#[must_use]
pub fn backward(params: &Params, trace: &ForwardTrace, clip_limit: f64) -> Gradients {
    let mut grads = backward_unclipped(params, trace);
    grads.clip(clip_limit);
    grads
}
