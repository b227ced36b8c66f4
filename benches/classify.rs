use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use sepal::knn::{
    CountingDealingPartition, DistanceMetric, Hyperparameter, RawRow, Sample, TrainingData,
};

fn random_row(rng: &mut StdRng) -> RawRow {
    let species = ["Iris-setosa", "Iris-versicolour", "Iris-virginica"];
    RawRow::from([
        ("sepal_length".to_string(), format!("{:.1}", rng.random_range(4.0..8.0))),
        ("sepal_width".to_string(), format!("{:.1}", rng.random_range(2.0..4.5))),
        ("petal_length".to_string(), format!("{:.1}", rng.random_range(1.0..7.0))),
        ("petal_width".to_string(), format!("{:.1}", rng.random_range(0.1..2.5))),
        ("species".to_string(), species.choose(rng).unwrap().to_string()),
    ])
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    // Synthetic dataset, all rows dealt to training.
    let mut rng = StdRng::seed_from_u64(42);
    let rows: Vec<RawRow> = (0..1000).map(|_| random_row(&mut rng)).collect();

    let data = TrainingData::shared("bench");
    data.borrow_mut()
        .load(&rows, CountingDealingPartition::new(1, 1))
        .unwrap();

    let parameter = Hyperparameter::new(5, DistanceMetric::Euclidean, &data);
    let query = Sample::new(5.8, 3.0, 4.2, 1.3);

    group.bench_function("euclidean_n1000_k5", |b| {
        b.iter(|| parameter.classify(black_box(&query)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
