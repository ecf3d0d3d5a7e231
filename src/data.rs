//! Contiguous dataset helpers.
//!
//! Training walks examples in order and hands slices to the network, so inputs and
//! targets are stored as validated, row-major buffers instead of nested vectors.

use crate::{Error, Result};

/// Training examples as two row-major buffers of equal row count.
///
/// Every input row has `input_dim` values and every target row `target_dim` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    inputs: Vec<f64>,
    targets: Vec<f64>,
    len: usize,
    input_dim: usize,
    target_dim: usize,
}

impl Dataset {
    /// Build a dataset from flat buffers.
    ///
    /// `inputs` is `(len, input_dim)` and `targets` is `(len, target_dim)`. Empty
    /// buffers give an empty dataset with the stated dims.
    pub fn from_flat(
        inputs: Vec<f64>,
        targets: Vec<f64>,
        input_dim: usize,
        target_dim: usize,
    ) -> Result<Self> {
        if input_dim == 0 {
            return Err(Error::InvalidData("input_dim must be > 0".to_owned()));
        }
        if target_dim == 0 {
            return Err(Error::InvalidData("target_dim must be > 0".to_owned()));
        }
        if inputs.len() % input_dim != 0 {
            return Err(Error::InvalidData(format!(
                "inputs length {} is not divisible by input_dim {}",
                inputs.len(),
                input_dim
            )));
        }

        let len = inputs.len() / input_dim;
        if targets.len() != len * target_dim {
            return Err(Error::InvalidData(format!(
                "targets length {} does not match len * target_dim ({} * {})",
                targets.len(),
                len,
                target_dim
            )));
        }

        Ok(Self {
            inputs,
            targets,
            len,
            input_dim,
            target_dim,
        })
    }

    /// Copy nested rows into flat storage. Rows must all share one length per side.
    pub fn from_rows(inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<Self> {
        if inputs.len() != targets.len() {
            return Err(Error::InvalidData(format!(
                "inputs/targets length mismatch: {} vs {}",
                inputs.len(),
                targets.len()
            )));
        }
        if inputs.is_empty() {
            return Err(Error::InvalidData("dataset must not be empty".to_owned()));
        }

        let input_dim = inputs[0].len();
        let target_dim = targets[0].len();

        let mut inputs_flat = Vec::with_capacity(inputs.len() * input_dim);
        let mut targets_flat = Vec::with_capacity(targets.len() * target_dim);
        for (i, (x, y)) in inputs.iter().zip(targets).enumerate() {
            if x.len() != input_dim {
                return Err(Error::InvalidData(format!(
                    "input row {i} has len {}, expected {input_dim}",
                    x.len()
                )));
            }
            if y.len() != target_dim {
                return Err(Error::InvalidData(format!(
                    "target row {i} has len {}, expected {target_dim}",
                    y.len()
                )));
            }
            inputs_flat.extend_from_slice(x);
            targets_flat.extend_from_slice(y);
        }

        Self::from_flat(inputs_flat, targets_flat, input_dim, target_dim)
    }

    /// Build a dataset from `(input, target)` pairs.
    pub fn from_pairs(pairs: &[(Vec<f64>, Vec<f64>)]) -> Result<Self> {
        let (inputs, targets): (Vec<Vec<f64>>, Vec<Vec<f64>>) = pairs.iter().cloned().unzip();
        Self::from_rows(&inputs, &targets)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Values per input row.
    #[inline]
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Values per target row.
    #[inline]
    pub fn target_dim(&self) -> usize {
        self.target_dim
    }

    /// `(input, target)` rows in insertion order. Cheap to clone, so a training loop
    /// can restart it every iteration.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], &[f64])> + Clone + '_ {
        self.inputs
            .chunks_exact(self.input_dim)
            .zip(self.targets.chunks_exact(self.target_dim))
    }
}
