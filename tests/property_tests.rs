use proptest::prelude::*;
use sepal::knn::{
    CountingDealingPartition, Partition, RawRow, Sample, ShufflingPartition, TestingKnownSample,
    TrainingKnownSample,
};

const SPECIES: [&str; 3] = ["Iris-setosa", "Iris-versicolour", "Iris-virginica"];
const MEASUREMENTS: [&str; 4] = [
    "sepal_length",
    "sepal_width",
    "petal_length",
    "petal_width",
];

fn raw_row(measurements: [f64; 4], species_index: usize) -> RawRow {
    let mut row: RawRow = MEASUREMENTS
        .iter()
        .zip(measurements)
        .map(|(field, value)| (field.to_string(), value.to_string()))
        .collect();
    row.insert(
        "species".to_string(),
        SPECIES[species_index % 3].to_string(),
    );
    row
}

fn arb_rows() -> impl Strategy<Value = Vec<RawRow>> {
    prop::collection::vec(
        (prop::array::uniform4(0.0f64..10.0), 0usize..3).prop_map(|(m, s)| raw_row(m, s)),
        0..40,
    )
}

fn row_key(row: &RawRow) -> [String; 4] {
    MEASUREMENTS.map(|field| row[field].clone())
}

fn sample_key(sample: &Sample) -> [String; 4] {
    [
        sample.sepal_length,
        sample.sepal_width,
        sample.petal_length,
        sample.petal_width,
    ]
    .map(|value| value.to_string())
}

/// Sorted multiset of all four measurements across both output sets.
fn output_keys(training: &[TrainingKnownSample], testing: &[TestingKnownSample]) -> Vec<[String; 4]> {
    let mut keys: Vec<[String; 4]> = training
        .iter()
        .map(|s| sample_key(s.known().sample()))
        .chain(testing.iter().map(|s| sample_key(s.known().sample())))
        .collect();
    keys.sort();
    keys
}

fn input_keys(rows: &[RawRow]) -> Vec<[String; 4]> {
    let mut keys: Vec<[String; 4]> = rows.iter().map(row_key).collect();
    keys.sort();
    keys
}

proptest! {
    #[test]
    fn prop_dealing_covers_every_row(rows in arb_rows(), n in 0usize..6, d in 1usize..6) {
        if n <= d {
            let mut partition = CountingDealingPartition::new(n, d);
            partition.extend(&rows).unwrap();
            partition.finalize().unwrap();

            let expected: usize = (0..rows.len()).filter(|i| i % d < n).count();
            prop_assert_eq!(partition.training().len(), expected);
            prop_assert_eq!(
                partition.training().len() + partition.testing().len(),
                rows.len()
            );

            // Union of the two sets is exactly the input multiset: nothing
            // dropped, nothing duplicated.
            prop_assert_eq!(
                output_keys(partition.training(), partition.testing()),
                input_keys(&rows)
            );
        }
    }

    #[test]
    fn prop_shuffling_covers_every_row(rows in arb_rows(), seed in 0u64..1000) {
        let mut partition = ShufflingPartition::new(0.8).with_seed(seed);
        partition.extend(&rows).unwrap();
        partition.finalize().unwrap();

        prop_assert_eq!(
            partition.training().len(),
            (rows.len() as f64 * 0.8).floor() as usize
        );
        prop_assert_eq!(
            partition.training().len() + partition.testing().len(),
            rows.len()
        );

        prop_assert_eq!(
            output_keys(partition.training(), partition.testing()),
            input_keys(&rows)
        );
    }
}
