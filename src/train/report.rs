//! Reporting sink for periodic progress and the final loss history.

use crate::model::Prediction;

/// One progress checkpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Progress {
    pub iteration: usize,
    pub num_training_iterations: usize,
    pub loss: f64,
    pub sequence_length: usize,
    pub prediction: Prediction,
}

impl Progress {
    /// `iteration i/N - train loss: x.xxxx`
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "iteration {}/{} - train loss: {:.4}",
            self.iteration, self.num_training_iterations, self.loss
        )
    }
}

/// Receives progress checkpoints during training and the loss history at the end.
pub trait Reporter {
    fn progress(&mut self, progress: &Progress);

    fn finish(&mut self, _losses: &[f64]) {}
}

/// Prints checkpoints to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn progress(&mut self, progress: &Progress) {
        println!("{}", "=".repeat(progress.sequence_length));
        println!("{}", progress.summary_line());
        println!("input:            {}", progress.prediction.seed);
        println!(
            "next predictions: {}",
            progress.prediction.predicted_string()
        );
    }

    fn finish(&mut self, losses: &[f64]) {
        let (Some(first), Some(last)) = (losses.first(), losses.last()) else {
            return;
        };
        let best = losses.iter().copied().fold(f64::INFINITY, f64::min);
        println!(
            "\n--- loss history: {} iterations | first {first:.4} | last {last:.4} | best {best:.4} ---",
            losses.len()
        );
    }
}

/// Keeps every checkpoint in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingReporter {
    pub checkpoints: Vec<Progress>,
    pub losses: Option<Vec<f64>>,
}

impl Reporter for RecordingReporter {
    fn progress(&mut self, progress: &Progress) {
        self.checkpoints.push(progress.clone());
    }

    fn finish(&mut self, losses: &[f64]) {
        self.losses = Some(losses.to_vec());
    }
}
