use crate::optim::Hyperparams;
use crate::{Dataset, Error, Network, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    /// Number of full passes over the dataset. Training always runs all of them.
    pub iterations: usize,
    pub learning_rate: f64,
    pub momentum: f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            learning_rate: 0.5,
            momentum: 0.1,
        }
    }
}

impl TrainConfig {
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::InvalidConfig("iterations must be > 0".to_owned()));
        }
        self.hyperparams().validate()
    }

    #[inline]
    pub fn hyperparams(&self) -> Hyperparams {
        Hyperparams::new(self.learning_rate, self.momentum)
    }
}

impl Network {
    /// Train the network with online backpropagation.
    ///
    /// Every iteration runs `predict` + `back_propagate` once per example, in dataset
    /// order. Returns one summed error per iteration.
    ///
    /// The config and dataset dims are checked up front, so a failed call leaves the
    /// network untouched.
    pub fn train(&mut self, data: &Dataset, cfg: &TrainConfig) -> Result<Vec<f64>> {
        cfg.validate()?;
        self.check_dataset(data)?;

        self.run_iterations(data.iter(), cfg)
    }

    /// Train on `(input, target)` pairs.
    ///
    /// Same as [`Network::train`] but takes the examples as a slice of pairs. Every
    /// pair is validated against the network before the first update. Pairs are used
    /// in place, so networks with zero inputs or outputs train too.
    pub fn train_pairs(
        &mut self,
        pairs: &[(Vec<f64>, Vec<f64>)],
        iterations: usize,
        learning_rate: f64,
        momentum: f64,
    ) -> Result<Vec<f64>> {
        let cfg = TrainConfig {
            iterations,
            learning_rate,
            momentum,
        };
        cfg.validate()?;

        for (input, target) in pairs {
            Error::check_len("inputs", self.input_count(), input.len())?;
            Error::check_len("targets", self.output_count(), target.len())?;
        }

        let rows = pairs.iter().map(|(x, y)| (x.as_slice(), y.as_slice()));
        self.run_iterations(rows, &cfg)
    }

    /// Online SGD over already validated rows.
    fn run_iterations<'a, I>(&mut self, rows: I, cfg: &TrainConfig) -> Result<Vec<f64>>
    where
        I: Iterator<Item = (&'a [f64], &'a [f64])> + Clone,
    {
        let hp = cfg.hyperparams();
        let mut errors = Vec::with_capacity(cfg.iterations);

        tracing::debug!(
            examples = rows.clone().count(),
            iterations = cfg.iterations,
            learning_rate = cfg.learning_rate,
            momentum = cfg.momentum,
            "training started"
        );

        for iteration in 0..cfg.iterations {
            let mut total = 0.0_f64;
            for (input, target) in rows.clone() {
                self.predict(input)?;
                total += self.backward(target, hp)?;
            }
            tracing::trace!(iteration, error = total, "iteration finished");
            errors.push(total);
        }

        tracing::debug!(
            first_error = ?errors.first(),
            final_error = ?errors.last(),
            "training finished"
        );

        Ok(errors)
    }

    pub(crate) fn check_dataset(&self, data: &Dataset) -> Result<()> {
        Error::check_len("inputs", self.input_count(), data.input_dim())?;
        Error::check_len("targets", self.output_count(), data.target_dim())
    }
}
