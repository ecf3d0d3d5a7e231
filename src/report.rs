//! Evaluation reporting.
//!
//! [`Network::evaluate`] runs a forward pass per example and hands each
//! `(input, predicted, target)` triple to an [`EvalSink`]. Evaluation is a read path:
//! weights and momentum are never modified.

use crate::{Dataset, Network, Result, loss};

/// One reported evaluation result.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalRecord {
    pub input: Vec<f64>,
    pub predicted: Vec<f64>,
    pub target: Vec<f64>,
}

impl EvalRecord {
    /// `0.5 * sum((target - predicted)^2)` for this example.
    pub fn error(&self) -> f64 {
        loss::half_sse(&self.predicted, &self.target)
    }
}

/// Receiver for evaluation results.
pub trait EvalSink {
    fn record(&mut self, input: &[f64], predicted: &[f64], target: &[f64]);
}

/// Collects every triple in order.
impl EvalSink for Vec<EvalRecord> {
    fn record(&mut self, input: &[f64], predicted: &[f64], target: &[f64]) {
        self.push(EvalRecord {
            input: input.to_vec(),
            predicted: predicted.to_vec(),
            target: target.to_vec(),
        });
    }
}

/// Logs each triple as an `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EvalSink for TracingSink {
    fn record(&mut self, input: &[f64], predicted: &[f64], target: &[f64]) {
        tracing::info!(?input, ?predicted, ?target, "evaluated");
    }
}

impl Network {
    /// Run every example through the network and report it to `sink`.
    ///
    /// Fails with [`crate::Error::InputSizeMismatch`] before reporting anything if the
    /// dataset dims do not match the network.
    pub fn evaluate<S: EvalSink + ?Sized>(&mut self, data: &Dataset, sink: &mut S) -> Result<()> {
        self.check_dataset(data)?;
        for (input, target) in data.iter() {
            let predicted = self.predict(input)?;
            sink.record(input, predicted, target);
        }
        Ok(())
    }

    /// Summed per-example error over `data`, without updating weights.
    pub fn evaluate_error(&mut self, data: &Dataset) -> Result<f64> {
        self.check_dataset(data)?;
        let mut total = 0.0_f64;
        for (input, target) in data.iter() {
            let predicted = self.predict(input)?;
            total += loss::half_sse(predicted, target);
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn data() -> Dataset {
        Dataset::from_rows(
            &[vec![0.0, 1.0], vec![1.0, 0.0], vec![0.5, 0.5]],
            &[vec![1.0], vec![1.0], vec![0.0]],
        )
        .unwrap()
    }

    #[test]
    fn evaluate_reports_each_example_in_order() {
        let mut net = Network::new_with_seed(2, 3, 1, false, 1);
        let mut reference = net.clone();
        let mut records: Vec<EvalRecord> = Vec::new();
        net.evaluate(&data(), &mut records).unwrap();

        assert_eq!(records.len(), 3);
        for (record, (input, target)) in records.iter().zip(data().iter()) {
            assert_eq!(record.input, input);
            assert_eq!(record.target, target);
            assert_eq!(record.predicted, reference.predict(input).unwrap());
        }
    }

    #[test]
    fn evaluate_never_touches_weights_or_momentum() {
        let mut net = Network::new_with_seed(2, 3, 1, false, 1);
        net.predict(&[1.0, 1.0]).unwrap();
        net.back_propagate(&[0.0], 0.5, 0.1).unwrap();
        let before = net.clone();

        net.evaluate(&data(), &mut TracingSink).unwrap();
        let _ = net.evaluate_error(&data()).unwrap();

        assert_eq!(net.input_weights(), before.input_weights());
        assert_eq!(net.output_weights(), before.output_weights());
        assert_eq!(net.input_momentum(), before.input_momentum());
        assert_eq!(net.output_momentum(), before.output_momentum());
    }

    #[test]
    fn evaluate_error_sums_record_errors() {
        let mut net = Network::new_with_seed(2, 2, 1, false, 3);
        let mut records: Vec<EvalRecord> = Vec::new();
        net.evaluate(&data(), &mut records).unwrap();
        let expected: f64 = records.iter().map(EvalRecord::error).sum();
        let total = net.evaluate_error(&data()).unwrap();
        assert!((total - expected).abs() < 1e-12);
    }

    #[test]
    fn evaluate_rejects_mismatched_dataset_without_reporting() {
        let mut net = Network::new_with_seed(3, 2, 1, false, 0);
        let mut records: Vec<EvalRecord> = Vec::new();
        let err = net.evaluate(&data(), &mut records).unwrap_err();
        assert!(matches!(err, Error::InputSizeMismatch { what: "inputs", .. }));
        assert!(records.is_empty());
    }
}
