//! Load a small iris dataset, then sweep k and metric choices and report
//! the quality of each.

use sepal::knn::{
    CountingDealingPartition, DistanceMetric, Hyperparameter, RawRow, TrainingData,
};

fn row(sl: f64, sw: f64, pl: f64, pw: f64, species: &str) -> RawRow {
    RawRow::from([
        ("sepal_length".to_string(), sl.to_string()),
        ("sepal_width".to_string(), sw.to_string()),
        ("petal_length".to_string(), pl.to_string()),
        ("petal_width".to_string(), pw.to_string()),
        ("species".to_string(), species.to_string()),
    ])
}

fn main() {
    // A slice of the classic iris data, five rows per species.
    let rows = vec![
        row(5.1, 3.5, 1.4, 0.2, "Iris-setosa"),
        row(4.9, 3.0, 1.4, 0.2, "Iris-setosa"),
        row(4.7, 3.2, 1.3, 0.2, "Iris-setosa"),
        row(4.6, 3.1, 1.5, 0.2, "Iris-setosa"),
        row(5.0, 3.6, 1.4, 0.2, "Iris-setosa"),
        row(7.0, 3.2, 4.7, 1.4, "Iris-versicolour"),
        row(6.4, 3.2, 4.5, 1.5, "Iris-versicolour"),
        row(6.9, 3.1, 4.9, 1.5, "Iris-versicolour"),
        row(5.5, 2.3, 4.0, 1.3, "Iris-versicolour"),
        row(6.5, 2.8, 4.6, 1.5, "Iris-versicolour"),
        row(6.3, 3.3, 6.0, 2.5, "Iris-virginica"),
        row(5.8, 2.7, 5.1, 1.9, "Iris-virginica"),
        row(7.1, 3.0, 5.9, 2.1, "Iris-virginica"),
        row(6.3, 2.9, 5.6, 1.8, "Iris-virginica"),
        row(6.5, 3.0, 5.8, 2.2, "Iris-virginica"),
    ];

    // Deal 4 of every 5 rows to training, the rest to testing.
    let data = TrainingData::shared("iris demo");
    data.borrow_mut()
        .load(&rows, CountingDealingPartition::new(4, 5))
        .unwrap();

    {
        let data = data.borrow();
        println!(
            "loaded {:?}: {} training, {} testing",
            data.name(),
            data.training().len(),
            data.testing().len()
        );
    }

    // Sweep k and metric, recording each evaluation in the tuning history.
    let metrics = [
        DistanceMetric::Euclidean,
        DistanceMetric::Manhattan,
        DistanceMetric::Chebyshev,
        DistanceMetric::Sorensen,
    ];
    for k in [1, 3, 5] {
        for metric in metrics {
            let parameter = Hyperparameter::new(k, metric, &data);
            TrainingData::test(&data, parameter).unwrap();
        }
    }

    println!("\n=== Tuning results ===");
    let data = data.borrow();
    for parameter in data.tuning() {
        println!(
            "  k={} {:10} => quality {:.2}",
            parameter.k(),
            parameter.metric().name(),
            parameter.quality().unwrap_or(f64::NAN)
        );
    }

    println!("\n=== Testing set classifications (last run) ===");
    for sample in data.testing() {
        println!("  {}", sample);
    }
}
