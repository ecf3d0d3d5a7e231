use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matrix::Matrix;
use crate::optim::{self, Hyperparams};
use crate::{Activation, Error, Result, loss};

/// A feed-forward network with one hidden layer.
///
/// The network owns every piece of numeric state: node activations, both weight
/// matrices, and the momentum buffers that shadow them. `predict` and
/// `back_propagate` mutate this state in place, so a `Network` is meant to be
/// driven from one thread at a time. Independent models are independent values.
///
/// Layer sizes include one bias unit on the input and hidden layers. The bias
/// activations are held at `1.0` and never overwritten.
#[derive(Debug, Clone)]
pub struct Network {
    input_size: usize,
    hidden_size: usize,
    output_size: usize,
    output_activation: Activation,

    input_activations: Vec<f64>,
    hidden_activations: Vec<f64>,
    output_activations: Vec<f64>,

    /// Shape (input_size, hidden_size).
    input_weights: Matrix,
    /// Shape (hidden_size, output_size).
    output_weights: Matrix,

    // Last step's raw changes, same shapes as the weights.
    input_momentum: Matrix,
    output_momentum: Matrix,

    // Backprop intermediates, reused across steps.
    output_deltas: Vec<f64>,
    hidden_deltas: Vec<f64>,
}

impl Network {
    /// Build a network with weights drawn from the thread-local RNG.
    pub fn new(
        input_count: usize,
        hidden_count: usize,
        output_count: usize,
        regression: bool,
    ) -> Self {
        Self::new_with_rng(
            input_count,
            hidden_count,
            output_count,
            regression,
            &mut rand::thread_rng(),
        )
    }

    pub fn new_with_seed(
        input_count: usize,
        hidden_count: usize,
        output_count: usize,
        regression: bool,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new_with_rng(input_count, hidden_count, output_count, regression, &mut rng)
    }

    pub fn new_with_rng<R: Rng + ?Sized>(
        input_count: usize,
        hidden_count: usize,
        output_count: usize,
        regression: bool,
        rng: &mut R,
    ) -> Self {
        let input_size = input_count + 1;
        let hidden_size = hidden_count + 1;
        let input_weights = Matrix::random_uniform(input_size, hidden_size, rng);
        let output_weights = Matrix::random_uniform(hidden_size, output_count, rng);
        Self::from_parts(input_weights, output_weights, regression)
    }

    /// Build a network from explicit row-major weight buffers.
    ///
    /// `input_weights` has shape `(input_count + 1, hidden_count + 1)` and
    /// `output_weights` has shape `(hidden_count + 1, output_count)`. The last row of
    /// each holds the bias weights.
    pub fn from_weights(
        input_count: usize,
        hidden_count: usize,
        output_count: usize,
        regression: bool,
        input_weights: Vec<f64>,
        output_weights: Vec<f64>,
    ) -> Result<Self> {
        let input_size = input_count + 1;
        let hidden_size = hidden_count + 1;
        Error::check_len(
            "input weights",
            input_size * hidden_size,
            input_weights.len(),
        )?;
        Error::check_len(
            "output weights",
            hidden_size * output_count,
            output_weights.len(),
        )?;

        let wi = Matrix::from_vec(input_size, hidden_size, input_weights)?;
        let wo = Matrix::from_vec(hidden_size, output_count, output_weights)?;
        Ok(Self::from_parts(wi, wo, regression))
    }

    fn from_parts(input_weights: Matrix, output_weights: Matrix, regression: bool) -> Self {
        let input_size = input_weights.rows();
        let hidden_size = input_weights.cols();
        let output_size = output_weights.cols();
        debug_assert_eq!(output_weights.rows(), hidden_size);

        tracing::debug!(
            inputs = input_size - 1,
            hidden = hidden_size - 1,
            outputs = output_size,
            regression,
            "network constructed"
        );

        Self {
            input_size,
            hidden_size,
            output_size,
            output_activation: Activation::for_output(regression),
            input_activations: vec![1.0; input_size],
            hidden_activations: vec![1.0; hidden_size],
            output_activations: vec![1.0; output_size],
            input_momentum: Matrix::zeros(input_size, hidden_size),
            output_momentum: Matrix::zeros(hidden_size, output_size),
            input_weights,
            output_weights,
            output_deltas: vec![0.0; output_size],
            hidden_deltas: vec![0.0; hidden_size],
        }
    }

    /// Number of user inputs (excluding the bias unit).
    #[inline]
    pub fn input_count(&self) -> usize {
        self.input_size - 1
    }

    /// Number of hidden units (excluding the bias unit).
    #[inline]
    pub fn hidden_count(&self) -> usize {
        self.hidden_size - 1
    }

    #[inline]
    pub fn output_count(&self) -> usize {
        self.output_size
    }

    #[inline]
    pub fn is_regression(&self) -> bool {
        self.output_activation == Activation::Identity
    }

    #[inline]
    pub fn output_activation(&self) -> Activation {
        self.output_activation
    }

    /// Output activations from the most recent forward pass.
    #[inline]
    pub fn output(&self) -> &[f64] {
        &self.output_activations
    }

    /// Hidden activations, bias unit last.
    #[inline]
    pub fn hidden_activations(&self) -> &[f64] {
        &self.hidden_activations
    }

    /// Input activations, bias unit last.
    #[inline]
    pub fn input_activations(&self) -> &[f64] {
        &self.input_activations
    }

    #[inline]
    pub fn input_weights(&self) -> &Matrix {
        &self.input_weights
    }

    #[inline]
    pub fn output_weights(&self) -> &Matrix {
        &self.output_weights
    }

    #[inline]
    pub fn input_momentum(&self) -> &Matrix {
        &self.input_momentum
    }

    #[inline]
    pub fn output_momentum(&self) -> &Matrix {
        &self.output_momentum
    }

    /// Forward pass for a single sample.
    ///
    /// Returns the output activations. The slice borrows the network and is
    /// overwritten by the next forward pass.
    ///
    /// Fails with [`Error::InputSizeMismatch`] if `inputs.len() != self.input_count()`;
    /// no activation is touched in that case.
    pub fn predict(&mut self, inputs: &[f64]) -> Result<&[f64]> {
        Error::check_len("inputs", self.input_count(), inputs.len())?;

        let n_in = self.input_count();
        self.input_activations[..n_in].copy_from_slice(inputs);

        let n_hidden = self.hidden_count();
        let hidden = &mut self.hidden_activations[..n_hidden];
        self.input_weights
            .weighted_sums_into(&self.input_activations, hidden);
        for h in hidden.iter_mut() {
            *h = Activation::Sigmoid.forward(*h);
        }

        self.output_weights
            .weighted_sums_into(&self.hidden_activations, &mut self.output_activations);
        let act = self.output_activation;
        for o in self.output_activations.iter_mut() {
            *o = act.forward(*o);
        }

        Ok(self.output_activations.as_slice())
    }

    /// Backward pass for the sample of the most recent `predict`.
    ///
    /// Updates both weight matrices with momentum and returns
    /// `0.5 * sum((target - output)^2)` for the outputs produced by that forward pass.
    ///
    /// Fails with [`Error::InputSizeMismatch`] if `targets.len() != self.output_count()`;
    /// no weight or momentum entry is touched in that case.
    pub fn back_propagate(
        &mut self,
        targets: &[f64],
        learning_rate: f64,
        momentum: f64,
    ) -> Result<f64> {
        self.backward(targets, Hyperparams::new(learning_rate, momentum))
    }

    pub(crate) fn backward(&mut self, targets: &[f64], hp: Hyperparams) -> Result<f64> {
        Error::check_len("targets", self.output_size, targets.len())?;

        // Activations are not touched below, so this is the pre-update error.
        let error = loss::half_sse(&self.output_activations, targets);

        let act = self.output_activation;
        for ((delta, &y), &t) in self
            .output_deltas
            .iter_mut()
            .zip(&self.output_activations)
            .zip(targets)
        {
            *delta = act.grad_from_output(y) * (t - y);
        }

        // Includes the hidden bias unit; its delta is always 0 since sigmoid'(1) == 0.
        for (h, delta) in self.hidden_deltas.iter_mut().enumerate() {
            let mut e = 0.0_f64;
            for (&w, &od) in self.output_weights.row(h).iter().zip(&self.output_deltas) {
                e = od.mul_add(w, e);
            }
            *delta = Activation::Sigmoid.grad_from_output(self.hidden_activations[h]) * e;
        }

        optim::momentum_step(
            &mut self.output_weights,
            &mut self.output_momentum,
            &self.hidden_activations,
            &self.output_deltas,
            hp,
        );
        optim::momentum_step(
            &mut self.input_weights,
            &mut self.input_momentum,
            &self.input_activations,
            &self.hidden_deltas,
            hp,
        );

        Ok(error)
    }
}
