//! Dense row-major matrix and the handful of vector kernels the recurrence needs.
//!
//! Column vectors (hidden states, biases, one-hot patterns) are plain `Vec<f64>` / `&[f64]`.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Row-major `rows × cols` matrix of `f64`.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// All-zero matrix.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Entries drawn from N(0, 1), each multiplied by `scale`.
    pub fn randn<R: Rng + ?Sized>(rows: usize, cols: usize, scale: f64, rng: &mut R) -> Self {
        let data = (0..rows * cols)
            .map(|_| {
                let z: f64 = StandardNormal.sample(rng);
                z * scale
            })
            .collect();
        Matrix { rows, cols, data }
    }

    /// Builds a matrix from row-major data.
    ///
    /// # Panics
    ///
    /// If `data.len() != rows * cols`.
    #[must_use]
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "from_vec: data.len() must equal rows * cols"
        );
        Matrix { rows, cols, data }
    }

    /// Zero matrix with the same shape as `self`.
    #[must_use]
    pub fn zeros_like(&self) -> Self {
        Self::zeros(self.rows, self.cols)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Flat row-major view.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// `self · x`.
    #[must_use]
    pub fn matvec(&self, x: &[f64]) -> Vec<f64> {
        assert_eq!(x.len(), self.cols, "matvec: x.len() must equal cols");
        if self.cols == 0 {
            return vec![0.0; self.rows];
        }
        self.data
            .chunks_exact(self.cols)
            .map(|row| dot(row, x))
            .collect()
    }

    /// `selfᵀ · y`.
    #[must_use]
    pub fn transpose_matvec(&self, y: &[f64]) -> Vec<f64> {
        assert_eq!(
            y.len(),
            self.rows,
            "transpose_matvec: y.len() must equal rows"
        );
        let mut out = vec![0.0; self.cols];
        if self.cols == 0 {
            return out;
        }
        for (row, &yi) in self.data.chunks_exact(self.cols).zip(y) {
            for (o, &w) in out.iter_mut().zip(row) {
                *o += w * yi;
            }
        }
        out
    }

    /// `self += a · bᵀ`.
    pub fn add_outer(&mut self, a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), self.rows, "add_outer: a.len() must equal rows");
        assert_eq!(b.len(), self.cols, "add_outer: b.len() must equal cols");
        if self.cols == 0 {
            return;
        }
        for (row, &ai) in self.data.chunks_exact_mut(self.cols).zip(a) {
            for (r, &bj) in row.iter_mut().zip(b) {
                *r += ai * bj;
            }
        }
    }
}

#[must_use]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// `a += b`, element-wise.
pub fn add_assign(a: &mut [f64], b: &[f64]) {
    assert_eq!(a.len(), b.len(), "add_assign: length mismatch");
    for (x, y) in a.iter_mut().zip(b) {
        *x += y;
    }
}

/// `x -= rate * g`, element-wise.
pub fn descend(x: &mut [f64], g: &[f64], rate: f64) {
    assert_eq!(x.len(), g.len(), "descend: length mismatch");
    for (p, d) in x.iter_mut().zip(g) {
        *p -= rate * d;
    }
}

/// Clamp every element into `[-limit, limit]`.
pub fn clip(x: &mut [f64], limit: f64) {
    for v in x {
        *v = v.clamp(-limit, limit);
    }
}

/// Length-`size` vector with a 1 at `index`.
///
/// # Panics
///
/// If `index >= size`.
#[must_use]
pub fn one_hot(index: usize, size: usize) -> Vec<f64> {
    assert!(index < size, "one_hot: index {index} out of range {size}");
    let mut v = vec![0.0; size];
    v[index] = 1.0;
    v
}

/// Index of the largest element; first one wins on ties.
#[must_use]
pub fn argmax(x: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in x.iter().enumerate() {
        if v > x[best] {
            best = i;
        }
    }
    best
}

/// `exp(y) / Σ exp(y)`.
///
/// No max-subtraction: logits around ±710 overflow to `inf` and the result turns into NaN.
#[must_use]
pub fn softmax(y: &[f64]) -> Vec<f64> {
    let exps: Vec<f64> = y.iter().map(|v| v.exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}
