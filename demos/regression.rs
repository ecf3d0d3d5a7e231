use bpnn::{Dataset, EvalRecord, NetworkBuilder, TrainConfig};
use tracing_subscriber::EnvFilter;

fn main() -> bpnn::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // y = x^2 on [-1, 1], scaled so targets leave the sigmoid range.
    let pairs: Vec<(Vec<f64>, Vec<f64>)> = (0..21)
        .map(|i| {
            let x = -1.0 + i as f64 * 0.1;
            (vec![x], vec![4.0 * x * x])
        })
        .collect();
    let train = Dataset::from_pairs(&pairs)?;

    let mut net = NetworkBuilder::new(1)
        .hidden(6)
        .outputs(1)
        .regression(true)
        .build_with_seed(42);

    let errors = net.train(
        &train,
        &TrainConfig {
            iterations: 5000,
            learning_rate: 0.02,
            momentum: 0.1,
        },
    )?;
    tracing::info!(first = ?errors.first(), last = ?errors.last(), "trained");

    let mut records: Vec<EvalRecord> = Vec::new();
    net.evaluate(&train, &mut records)?;
    for r in &records {
        println!(
            "x={:+.2} target={:.3} predicted={:.3}",
            r.input[0], r.target[0], r.predicted[0]
        );
    }
    Ok(())
}
