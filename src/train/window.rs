//! Rolling training window: where the next slice starts and which hidden state it inherits.

/// What [`RollingWindow::prepare`] did before handing out the next slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowState {
    /// Pointer rewound to 0 and hidden state zeroed.
    Reset,
    /// Continuing from the previous window.
    Active,
}

/// Window pointer plus the hidden state carried between consecutive windows.
#[derive(Clone, Debug)]
pub struct RollingWindow {
    sequence_length: usize,
    pointer: usize,
    hidden: Vec<f64>,
    started: bool,
}

impl RollingWindow {
    #[must_use]
    pub fn new(sequence_length: usize, dim_hidden: usize) -> Self {
        RollingWindow {
            sequence_length,
            pointer: 0,
            hidden: vec![0.0; dim_hidden],
            started: false,
        }
    }

    /// Resets on the first call, and whenever the window plus its shifted target would
    /// run past `data_len`.
    pub fn prepare(&mut self, data_len: usize) -> WindowState {
        if !self.started || self.pointer + self.sequence_length >= data_len {
            self.started = true;
            self.pointer = 0;
            self.hidden.fill(0.0);
            WindowState::Reset
        } else {
            WindowState::Active
        }
    }

    /// `data[pointer .. pointer + T]`.
    #[must_use]
    pub fn inputs<'a>(&self, data: &'a [usize]) -> &'a [usize] {
        &data[self.pointer..self.pointer + self.sequence_length]
    }

    /// The inputs shifted one position right: next-character targets.
    #[must_use]
    pub fn targets<'a>(&self, data: &'a [usize]) -> &'a [usize] {
        &data[self.pointer + 1..self.pointer + self.sequence_length + 1]
    }

    /// Carries `final_hidden` into the next window and moves the pointer by T.
    pub fn advance(&mut self, final_hidden: &[f64]) {
        self.hidden.clear();
        self.hidden.extend_from_slice(final_hidden);
        self.pointer += self.sequence_length;
    }

    #[must_use]
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    #[must_use]
    pub fn hidden(&self) -> &[f64] {
        &self.hidden
    }
}
