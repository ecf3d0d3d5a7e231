use bpnn::{Dataset, Network, TracingSink, TrainConfig};
use tracing_subscriber::EnvFilter;

fn main() -> bpnn::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Classic XOR dataset.
    let train = Dataset::from_pairs(&[
        (vec![0.0, 0.0], vec![0.0]),
        (vec![0.0, 1.0], vec![1.0]),
        (vec![1.0, 0.0], vec![1.0]),
        (vec![1.0, 1.0], vec![0.0]),
    ])?;

    // 2 -> 2 -> 1, sigmoid everywhere.
    let mut net = Network::new(2, 2, 1, false);
    let errors = net.train(
        &train,
        &TrainConfig {
            iterations: 1000,
            learning_rate: 0.5,
            momentum: 0.1,
        },
    )?;

    for (i, e) in errors.iter().enumerate().step_by(100) {
        tracing::info!(iteration = i, error = *e, "progress");
    }
    tracing::info!(final_error = ?errors.last(), "trained");

    net.evaluate(&train, &mut TracingSink)?;
    Ok(())
}
