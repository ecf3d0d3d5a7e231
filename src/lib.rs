//! A single-hidden-layer neural network trained by backpropagation with momentum.
//!
//! `bpnn` is a small, from-scratch numeric engine: one input layer, one sigmoid hidden
//! layer and one output layer. Outputs are either sigmoid (classification) or linear
//! (regression).
//!
//! # Design
//!
//! - One owner: activations, weights and momentum buffers are fields of one
//!   [`Network`]. Independent models are independent values.
//! - Explicit errors: shape mismatches are reported as [`Error::InputSizeMismatch`]
//!   and leave the network untouched.
//! - Deterministic construction: weights come from an injectable RNG
//!   ([`Network::new_with_rng`], [`Network::new_with_seed`]).
//! - Online training: [`Network::train`] runs `predict` + `back_propagate` per example,
//!   in order, for a fixed number of iterations.
//!
//! # Data layout and shapes
//!
//! - Scalars are `f64`.
//! - Input and hidden layers carry one extra bias unit held at `1.0`.
//! - Weights are row-major [`Matrix`] buffers: `(inputs + 1, hidden + 1)` and
//!   `(hidden + 1, outputs)`.

//! # Quick start
//!
//! ```rust
//! use bpnn::{Dataset, Network, TrainConfig};
//!
//! # fn main() -> bpnn::Result<()> {
//! let xs = vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![1.0, 0.0],
//!     vec![1.0, 1.0],
//! ];
//! let ys = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
//! let train = Dataset::from_rows(&xs, &ys)?;
//!
//! let mut net = Network::new_with_seed(2, 4, 1, false, 0);
//! let errors = net.train(
//!     &train,
//!     &TrainConfig {
//!         iterations: 500,
//!         learning_rate: 0.5,
//!         momentum: 0.1,
//!     },
//! )?;
//! assert_eq!(errors.len(), 500);
//!
//! let y = net.predict(&[1.0, 0.0])?;
//! assert!(y[0] > 0.0 && y[0] < 1.0);
//! # Ok(())
//! # }
//! ```

//! # Driving the passes yourself
//!
//! ```rust
//! use bpnn::Network;
//!
//! # fn main() -> bpnn::Result<()> {
//! let mut net = Network::new_with_seed(1, 2, 1, true, 0);
//! net.predict(&[0.5])?;
//! let err = net.back_propagate(&[5.0], 0.1, 0.1)?;
//! assert!(err > 0.0);
//!
//! // Wrong target length is an error, not a silent zero.
//! assert!(net.back_propagate(&[1.0, 2.0], 0.1, 0.1).is_err());
//! # Ok(())
//! # }
//! ```

pub mod activation;
pub mod builder;
pub mod data;
pub mod error;
pub mod loss;
pub mod matrix;
pub mod network;
pub mod optim;
pub mod report;
pub mod train;

pub use activation::Activation;
pub use builder::NetworkBuilder;
pub use data::Dataset;
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use network::Network;
pub use optim::Hyperparams;
pub use report::{EvalRecord, EvalSink, TracingSink};
pub use train::TrainConfig;
