//! k-nearest-neighbor classification for iris flower measurements.
//!
//! `sepal` is a small library implementing the classic iris exercise: load
//! labeled four-feature samples, split them into training and testing sets,
//! and score (k, distance metric) hyperparameter choices against the split.
//!
//! The primary public API is under [`knn`], which provides:
//! - the sample data model (known / training / testing samples)
//! - partition strategies (shuffling, counting-dealing)
//! - distance metrics (Euclidean, Manhattan, Chebyshev, Sorensen)
//! - [`knn::Hyperparameter`] for classification and quality scoring

#![forbid(unsafe_code)]

pub mod error;
pub mod knn;

pub use error::{Error, Result};
pub use knn::{
    CountingDealingPartition, DistanceMetric, Hyperparameter, KnownSample, Partition, RawRow,
    Sample, SharedTrainingData, ShufflingPartition, Species, TestingKnownSample, TrainingData,
    TrainingKnownSample,
};
