//! k-nearest-neighbor classification over iris measurements.
//!
//! This module implements the full train/test loop for a small labeled
//! flower dataset.
//!
//! ## Pipeline
//!
//! Raw rows (string maps) are validated into [`KnownSample`]s and dealt into
//! disjoint training and testing sets by a [`Partition`] strategy. A
//! [`TrainingData`] instance owns both sets. A [`Hyperparameter`] binds a
//! `k` value and a [`DistanceMetric`] to that data and can classify a single
//! [`Sample`] or score itself against the whole testing set.
//!
//! ## Partition strategies
//!
//! ### ShufflingPartition
//!
//! Buffers rows, shuffles once on [`Partition::finalize`], and splits at
//! `floor(count * training_subset)`. Randomness is seedable for
//! deterministic tests.
//!
//! ### CountingDealingPartition
//!
//! Deals rows like cards: with ratio `(n, d)`, row `i` goes to training iff
//! `i % d < n`. Deterministic, order-preserving, and streaming-friendly.
//!
//! ## Usage
//!
//! ```rust
//! use sepal::knn::{
//!     CountingDealingPartition, DistanceMetric, Hyperparameter, RawRow, TrainingData,
//! };
//!
//! fn row(sl: f64, sw: f64, pl: f64, pw: f64, species: &str) -> RawRow {
//!     RawRow::from([
//!         ("sepal_length".to_string(), sl.to_string()),
//!         ("sepal_width".to_string(), sw.to_string()),
//!         ("petal_length".to_string(), pl.to_string()),
//!         ("petal_width".to_string(), pw.to_string()),
//!         ("species".to_string(), species.to_string()),
//!     ])
//! }
//!
//! let rows = vec![
//!     row(5.1, 3.5, 1.4, 0.2, "Iris-setosa"),
//!     row(4.9, 3.0, 1.4, 0.2, "Iris-setosa"),
//!     row(6.3, 3.3, 6.0, 2.5, "Iris-virginica"),
//!     row(5.8, 2.7, 5.1, 1.9, "Iris-virginica"),
//!     row(5.0, 3.4, 1.5, 0.2, "Iris-setosa"),
//! ];
//!
//! // Deal 4 out of every 5 rows to training, the rest to testing.
//! let data = TrainingData::shared("demo");
//! data.borrow_mut()
//!     .load(&rows, CountingDealingPartition::new(4, 5))
//!     .unwrap();
//!
//! let parameter = Hyperparameter::new(1, DistanceMetric::Euclidean, &data);
//! TrainingData::test(&data, parameter).unwrap();
//!
//! let quality = data.borrow().tuning()[0].quality();
//! assert_eq!(quality, Some(1.0));
//! ```

mod dealing;
mod distance;
mod hyperparameter;
mod sample;
mod shuffling;
mod training;
mod traits;

pub use dealing::CountingDealingPartition;
pub use distance::DistanceMetric;
pub use hyperparameter::Hyperparameter;
pub use sample::{KnownSample, RawRow, Sample, Species, TestingKnownSample, TrainingKnownSample};
pub use shuffling::ShufflingPartition;
pub use training::{SharedTrainingData, TrainingData};
pub use traits::Partition;
