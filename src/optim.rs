//! Momentum-weighted weight updates.
//!
//! Both weight matrices are updated by the same rule. For every `(r, c)`:
//!
//! - `change = deltas[c] * sources[r]`
//! - `w[r][c] += learning_rate * change + momentum * prev[r][c]`
//! - `prev[r][c] = change`
//!
//! `prev` stores the raw `change` of the last step, not the scaled update.

use crate::matrix::Matrix;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
/// Step size and momentum factor for one backward pass.
pub struct Hyperparams {
    pub learning_rate: f64,
    pub momentum: f64,
}

impl Default for Hyperparams {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            momentum: 0.1,
        }
    }
}

impl Hyperparams {
    pub fn new(learning_rate: f64, momentum: f64) -> Self {
        Self {
            learning_rate,
            momentum,
        }
    }

    /// Validate hyperparameters.
    pub fn validate(self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "learning rate must be finite and > 0, got {}",
                self.learning_rate
            )));
        }
        if !(self.momentum.is_finite() && self.momentum >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "momentum must be finite and >= 0, got {}",
                self.momentum
            )));
        }
        Ok(())
    }
}

/// Apply one momentum step to `weights`, recording this step's changes in `prev`.
///
/// Shape contract:
/// - `weights` and `prev` have identical shapes
/// - `sources.len() == weights.rows()`
/// - `deltas.len() == weights.cols()`
pub(crate) fn momentum_step(
    weights: &mut Matrix,
    prev: &mut Matrix,
    sources: &[f64],
    deltas: &[f64],
    hp: Hyperparams,
) {
    debug_assert_eq!(weights.rows(), prev.rows());
    debug_assert_eq!(weights.cols(), prev.cols());
    debug_assert_eq!(sources.len(), weights.rows());
    debug_assert_eq!(deltas.len(), weights.cols());

    let cols = weights.cols();
    let w = weights.as_mut_slice();
    let p = prev.as_mut_slice();

    for (r, &src) in sources.iter().enumerate() {
        let row = r * cols;
        for (c, &delta) in deltas.iter().enumerate() {
            let idx = row + c;
            let change = delta * src;
            w[idx] += hp.learning_rate * change + hp.momentum * p[idx];
            p[idx] = change;
        }
    }
}
