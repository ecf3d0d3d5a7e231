use criterion::{Criterion, black_box, criterion_group, criterion_main};

use bpnn::{Dataset, Network, TrainConfig};

fn predict_bench(c: &mut Criterion) {
    let mut net = Network::new_with_seed(64, 128, 10, false, 0);
    let input = vec![0.1_f64; net.input_count()];

    c.bench_function("predict_64_128_10", |b| {
        b.iter(|| {
            let out = net.predict(black_box(&input)).unwrap();
            black_box(out[0]);
        })
    });
}

fn back_propagate_bench(c: &mut Criterion) {
    let mut net = Network::new_with_seed(64, 128, 10, false, 0);
    let input = vec![0.1_f64; net.input_count()];
    let target = vec![0.0_f64; net.output_count()];
    net.predict(&input).unwrap();

    c.bench_function("back_propagate_64_128_10", |b| {
        b.iter(|| {
            let err = net.back_propagate(black_box(&target), 0.5, 0.1).unwrap();
            black_box(err);
        })
    });
}

fn train_xor_bench(c: &mut Criterion) {
    let data = Dataset::from_rows(
        &[
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ],
        &[vec![0.0], vec![1.0], vec![1.0], vec![0.0]],
    )
    .unwrap();
    let cfg = TrainConfig {
        iterations: 100,
        ..TrainConfig::default()
    };

    c.bench_function("train_xor_100_iterations", |b| {
        b.iter(|| {
            let mut net = Network::new_with_seed(2, 2, 1, false, 0);
            black_box(net.train(&data, &cfg).unwrap());
        })
    });
}

criterion_group!(benches, predict_bench, back_propagate_bench, train_xor_bench);
criterion_main!(benches);
