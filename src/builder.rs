//! Network builder.
//!
//! `NetworkBuilder` names each dimension instead of relying on the positional
//! arguments of [`Network::new`]. Both produce identical networks for the same RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Network;

#[derive(Debug, Clone, Copy)]
/// Builder for a `Network`.
///
/// Example:
///
/// ```rust
/// use bpnn::NetworkBuilder;
///
/// let net = NetworkBuilder::new(2)
///     .hidden(3)
///     .outputs(1)
///     .build_with_seed(0);
/// assert_eq!(net.hidden_count(), 3);
/// assert!(!net.is_regression());
/// ```
pub struct NetworkBuilder {
    input_count: usize,
    hidden_count: usize,
    output_count: usize,
    regression: bool,
}

impl NetworkBuilder {
    /// Start building a network that accepts inputs of length `input_count`.
    ///
    /// Defaults to one hidden unit, one output and classification mode.
    pub fn new(input_count: usize) -> Self {
        Self {
            input_count,
            hidden_count: 1,
            output_count: 1,
            regression: false,
        }
    }

    /// Number of hidden units, not counting the bias unit.
    pub fn hidden(mut self, hidden_count: usize) -> Self {
        self.hidden_count = hidden_count;
        self
    }

    pub fn outputs(mut self, output_count: usize) -> Self {
        self.output_count = output_count;
        self
    }

    /// Use linear outputs instead of sigmoid outputs.
    pub fn regression(mut self, regression: bool) -> Self {
        self.regression = regression;
        self
    }

    /// Build using the thread-local RNG.
    pub fn build(self) -> Network {
        self.build_with_rng(&mut rand::thread_rng())
    }

    /// Build using a deterministic seed.
    pub fn build_with_seed(self, seed: u64) -> Network {
        let mut rng = StdRng::seed_from_u64(seed);
        self.build_with_rng(&mut rng)
    }

    /// Build using the provided RNG.
    pub fn build_with_rng<R: Rng + ?Sized>(self, rng: &mut R) -> Network {
        Network::new_with_rng(
            self.input_count,
            self.hidden_count,
            self.output_count,
            self.regression,
            rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_matches_positional_constructor() {
        let a = NetworkBuilder::new(3)
            .hidden(4)
            .outputs(2)
            .regression(true)
            .build_with_seed(11);
        let b = Network::new_with_seed(3, 4, 2, true, 11);

        assert_eq!(a.input_weights(), b.input_weights());
        assert_eq!(a.output_weights(), b.output_weights());
        assert!(a.is_regression());
        assert_eq!(a.output_count(), 2);
    }

    #[test]
    fn unseeded_builds_have_the_requested_shape() {
        let net = NetworkBuilder::new(5).hidden(2).build();
        assert_eq!(net.input_count(), 5);
        assert_eq!(net.hidden_count(), 2);
        assert_eq!(net.output_count(), 1);
    }
}
