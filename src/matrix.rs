//! Dense row-major matrix used for weights and momentum.

use rand::Rng;
use rand::distributions::{Distribution, Uniform};

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    /// Row-major buffer with shape (rows, cols).
    data: Vec<f64>,
}

impl Matrix {
    #[inline]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Matrix filled with independent draws from `U[-1, 1)`.
    pub fn random_uniform<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let dist = Uniform::new(-1.0_f64, 1.0_f64);
        let data = (0..rows * cols).map(|_| dist.sample(rng)).collect();
        Self { rows, cols, data }
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        Error::check_len("matrix buffer", rows * cols, data.len())?;
        Ok(Self { rows, cols, data })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at `(r, c)`.
    ///
    /// Panics if out of bounds.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> f64 {
        assert!(
            r < self.rows && c < self.cols,
            "index ({r}, {c}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[r * self.cols + c]
    }

    #[inline]
    pub fn row(&self, r: usize) -> &[f64] {
        let start = r * self.cols;
        &self.data[start..start + self.cols]
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// `out[c] = sum_r x[r] * self[r][c]`, i.e. `x^T * M`.
    ///
    /// Shape contract:
    /// - `x.len() == self.rows()`
    /// - `out.len() <= self.cols()` (trailing columns are skipped)
    #[inline]
    pub(crate) fn weighted_sums_into(&self, x: &[f64], out: &mut [f64]) {
        debug_assert_eq!(x.len(), self.rows);
        debug_assert!(out.len() <= self.cols);

        for (c, slot) in out.iter_mut().enumerate() {
            let mut sum = 0.0_f64;
            for (r, &xv) in x.iter().enumerate() {
                sum = self.data[r * self.cols + c].mul_add(xv, sum);
            }
            *slot = sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_uniform_is_in_half_open_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random_uniform(16, 16, &mut rng);
        assert_eq!(m.as_slice().len(), 256);
        assert!(m.as_slice().iter().all(|&v| (-1.0..1.0).contains(&v)));
    }

    #[test]
    fn from_vec_validates_length() {
        assert!(Matrix::from_vec(2, 3, vec![0.0; 6]).is_ok());
        let err = Matrix::from_vec(2, 3, vec![0.0; 5]).unwrap_err();
        assert!(matches!(
            err,
            Error::InputSizeMismatch {
                expected: 6,
                actual: 5,
                ..
            }
        ));
    }

    #[test]
    fn weighted_sums_use_column_weights() {
        // [[1, 2],
        //  [3, 4],
        //  [5, 6]]
        let m = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let mut out = [0.0; 2];
        m.weighted_sums_into(&[1.0, 0.5, 2.0], &mut out);
        assert_eq!(out, [1.0 + 1.5 + 10.0, 2.0 + 2.0 + 12.0]);
        assert_eq!(m.row(1), &[3.0, 4.0]);
        assert_eq!(m.get(2, 1), 6.0);

        // Fewer outputs than columns skips the trailing column.
        let mut first = [0.0; 1];
        m.weighted_sums_into(&[1.0, 1.0, 1.0], &mut first);
        assert_eq!(first, [9.0]);
    }

    #[test]
    fn zero_sized_matrices_are_valid() {
        let m = Matrix::zeros(3, 0);
        assert_eq!(m.as_slice().len(), 0);
        let mut out: [f64; 0] = [];
        m.weighted_sums_into(&[1.0, 2.0, 3.0], &mut out);
    }
}
