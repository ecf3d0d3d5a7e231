//! Activation functions.
//!
//! Every unit computes a weighted sum `z` of the previous layer and then applies an
//! activation element-wise: `y = activation(z)`.
//!
//! Hidden units are always logistic. The output layer is logistic for classification
//! and the identity for regression. Backprop only ever needs the derivative expressed
//! in terms of the cached post-activation output `y`, so no `z` buffer is kept.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Element-wise activation function.
pub enum Activation {
    /// Logistic sigmoid, `1 / (1 + e^-x)`.
    Sigmoid,
    /// Linear output, used in regression mode.
    Identity,
}

impl Activation {
    /// The output activation for a network in the given mode.
    #[inline]
    pub fn for_output(regression: bool) -> Self {
        if regression {
            Activation::Identity
        } else {
            Activation::Sigmoid
        }
    }

    #[inline]
    pub fn forward(self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => sigmoid(x),
            Activation::Identity => x,
        }
    }

    /// Derivative of the activation with respect to its input, expressed in terms
    /// of the cached post-activation output `y`.
    #[inline]
    pub fn grad_from_output(self, y: f64) -> f64 {
        match self {
            Activation::Sigmoid => y * (1.0 - y),
            Activation::Identity => 1.0,
        }
    }
}

#[inline]
pub(crate) fn sigmoid(x: f64) -> f64 {
    // Numerically stable sigmoid.
    if x >= 0.0 {
        let z = (-x).exp();
        1.0 / (1.0 + z)
    } else {
        let z = x.exp();
        z / (1.0 + z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_basic_values() {
        let y0 = Activation::Sigmoid.forward(0.0);
        assert!((y0 - 0.5).abs() < 1e-12);

        let y_pos = Activation::Sigmoid.forward(10.0);
        let y_neg = Activation::Sigmoid.forward(-10.0);
        assert!(y_pos > 0.9999);
        assert!(y_neg < 0.0001);

        // Both branches agree with the textbook form.
        for x in [-3.0_f64, -0.5, 0.25, 4.0] {
            let naive = 1.0 / (1.0 + (-x).exp());
            assert!((sigmoid(x) - naive).abs() < 1e-12);
        }
    }

    #[test]
    fn sigmoid_stays_finite_for_extreme_inputs() {
        let hi = sigmoid(1_000.0);
        let lo = sigmoid(-1_000.0);
        assert!(hi.is_finite() && hi <= 1.0);
        assert!(lo.is_finite() && lo >= 0.0);
    }

    #[test]
    fn gradients_from_output() {
        let y = Activation::Sigmoid.forward(0.0);
        assert!((Activation::Sigmoid.grad_from_output(y) - 0.25).abs() < 1e-12);
        assert_eq!(Activation::Identity.grad_from_output(42.0), 1.0);
        assert_eq!(Activation::Identity.forward(-7.5), -7.5);
    }

    #[test]
    fn output_activation_follows_mode() {
        assert_eq!(Activation::for_output(true), Activation::Identity);
        assert_eq!(Activation::for_output(false), Activation::Sigmoid);
    }
}
