//! Training loop: slide a T-character window over the encoded stream, run forward + backward,
//! update, and report a greedy prediction every `report_every` iterations.

mod error;
mod report;
mod window;

use crate::model::{Bptt, ForwardTrace};
use crate::tokenizer::Tokenizer;

pub use error::TrainError;
pub use report::{ConsoleReporter, Progress, RecordingReporter, Reporter};
pub use window::{RollingWindow, WindowState};

/// Progress is reported on every iteration divisible by this (iteration 0 included).
pub const REPORT_EVERY: usize = 100;

/// Output of [`fit`].
#[derive(Clone, Debug, Default)]
pub struct TrainingHistory {
    /// One summed window loss per iteration; `num_training_iterations + 1` entries.
    pub losses: Vec<f64>,
    /// Trace of the last window (its hidden states in particular).
    pub last_trace: ForwardTrace,
    pub input_indices: Vec<usize>,
    pub target_indices: Vec<usize>,
}

impl TrainingHistory {
    /// `h[t]` for every timestep of the last window.
    #[must_use]
    pub fn hidden_states(&self) -> &[Vec<f64>] {
        &self.last_trace.hidden
    }
}

/// Trains `model` on `data` (already encoded with `tokenizer`) for
/// `num_training_iterations + 1` iterations.
///
/// # Errors
///
/// - [`TrainError::DataTooShort`] if `data` cannot hold one window and its target.
/// - [`TrainError::Tokenizer`] if a predicted index has no character in `tokenizer`.
pub fn fit<T, R>(
    model: &mut Bptt,
    data: &[usize],
    tokenizer: &T,
    reporter: &mut R,
    report_every: usize,
) -> Result<TrainingHistory, TrainError>
where
    T: Tokenizer + ?Sized,
    R: Reporter + ?Sized,
{
    let sequence_length = model.sequence_length();
    let num_training_iterations = model.num_training_iterations();
    if sequence_length == 0 || data.len() <= sequence_length {
        return Err(TrainError::DataTooShort {
            len: data.len(),
            sequence_length,
        });
    }

    tracing::info!(
        data_len = data.len(),
        vocab_size = tokenizer.vocab_size(),
        dim_hidden = model.dim_hidden(),
        num_params = model.params().num_params(),
        sequence_length,
        num_training_iterations,
        "starting training"
    );

    let mut window = RollingWindow::new(sequence_length, model.dim_hidden());
    let mut history = TrainingHistory {
        losses: Vec::with_capacity(num_training_iterations + 1),
        ..TrainingHistory::default()
    };
    let mut saw_non_finite = false;

    for iteration in 0..=num_training_iterations {
        if window.prepare(data.len()) == WindowState::Reset {
            tracing::trace!(iteration, "window reset");
        }
        let inputs = window.inputs(data);
        let targets = window.targets(data);

        let step = model.loss_and_gradients(window.hidden(), inputs, targets);
        history.losses.push(step.loss);
        model.update(&step.grads);

        if !step.loss.is_finite() && !saw_non_finite {
            saw_non_finite = true;
            tracing::warn!(iteration, loss = step.loss, "loss is no longer finite");
        }
        tracing::debug!(
            iteration,
            pointer = window.pointer(),
            loss = step.loss,
            max_grad = step.grads.max_abs(),
            "training step"
        );

        if report_every > 0 && iteration % report_every == 0 {
            let prediction = model.predict(
                tokenizer,
                0,
                inputs,
                step.trace.hidden_before(0),
                sequence_length,
            )?;
            reporter.progress(&Progress {
                iteration,
                num_training_iterations,
                loss: step.loss,
                sequence_length,
                prediction,
            });
        }

        window.advance(step.final_hidden());
        history.input_indices = inputs.to_vec();
        history.target_indices = targets.to_vec();
        history.last_trace = step.trace;
    }

    tracing::info!(
        iterations = history.losses.len(),
        final_loss = history.losses.last().copied().unwrap_or(f64::NAN),
        "training finished"
    );
    reporter.finish(&history.losses);
    Ok(history)
}

impl Bptt {
    /// Convenience wrapper around [`fit`].
    ///
    /// # Errors
    ///
    /// See [`fit`].
    pub fn fit<T, R>(
        &mut self,
        data: &[usize],
        tokenizer: &T,
        reporter: &mut R,
    ) -> Result<TrainingHistory, TrainError>
    where
        T: Tokenizer + ?Sized,
        R: Reporter + ?Sized,
    {
        fit(self, data, tokenizer, reporter, REPORT_EVERY)
    }
}
