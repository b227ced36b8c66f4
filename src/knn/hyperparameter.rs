//! Hyperparameter evaluation: k-nearest-neighbor voting and quality scoring.
//!
//! # The Algorithm
//!
//! k-NN is a lazy learner: there is no training step beyond storing the
//! labeled samples. To classify a query:
//!
//! 1. Compute the distance from the query to every training sample.
//! 2. Keep the k nearest (a bounded max-heap keeps this O(N log k)).
//! 3. Return the species with the most votes among those k.
//!
//! ## Tie-breaking
//!
//! Both tie-breaks are deterministic:
//!
//! - **Selection boundary**: equal distances are ordered by training
//!   position, so the first-seen sample wins a spot in the k nearest.
//! - **Vote**: an equal vote count goes to the species that appears
//!   earliest among the k nearest by distance rank.
//!
//! ## Ownership
//!
//! A `Hyperparameter` holds a *weak* reference to its [`TrainingData`], so
//! the tuning history kept by the data does not keep samples alive once the
//! owner is gone, and a stale reference surfaces as
//! [`Error::BrokenReference`] instead of undefined behavior.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Weak;

use crate::error::{Error, Result};
use crate::knn::distance::DistanceMetric;
use crate::knn::sample::{Sample, Species, TrainingKnownSample};
use crate::knn::training::{SharedTrainingData, TrainingData};

/// A (k, metric) tuning choice bound to a training set, with the quality
/// score computed by [`test`](Hyperparameter::test).
#[derive(Debug)]
pub struct Hyperparameter {
    k: usize,
    metric: DistanceMetric,
    data: Weak<RefCell<TrainingData>>,
    quality: Option<f64>,
}

/// One entry in the k-nearest selection. Ordered by distance, then by
/// training position so earlier samples win ties.
struct Neighbor {
    distance: f64,
    position: usize,
    species: Species,
}

impl PartialEq for Neighbor {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Neighbor {}

impl PartialOrd for Neighbor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Neighbor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.position.cmp(&other.position))
    }
}

impl Hyperparameter {
    /// Bind a k value and a metric to shared training data.
    ///
    /// The reference is weak: dropping the last owning handle invalidates
    /// this hyperparameter, and later calls fail with
    /// [`Error::BrokenReference`].
    pub fn new(k: usize, metric: DistanceMetric, data: &SharedTrainingData) -> Self {
        Self {
            k,
            metric,
            data: std::rc::Rc::downgrade(data),
            quality: None,
        }
    }

    /// The configured number of neighbors.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The configured distance metric.
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Fraction of testing samples classified correctly by the last
    /// [`test`](Hyperparameter::test) run, or `None` before the first run.
    pub fn quality(&self) -> Option<f64> {
        self.quality
    }

    /// Classify a single sample by majority vote among its k nearest
    /// training samples.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] if `k == 0`.
    /// - [`Error::BrokenReference`] if the training data has been dropped.
    /// - [`Error::InsufficientData`] if the training set is smaller than k.
    /// - [`Error::InvalidMetricInput`] from the Sorensen metric on all-zero
    ///   inputs.
    pub fn classify(&self, sample: &Sample) -> Result<Species> {
        let data = self.data.upgrade().ok_or(Error::BrokenReference)?;
        let data = data.borrow();
        self.classify_against(sample, data.training())
    }

    /// Run the full testing sweep: classify every testing sample, record
    /// each result on the sample, and set `quality` to the pass fraction.
    ///
    /// # Errors
    ///
    /// - [`Error::BrokenReference`] if the training data has been dropped.
    /// - [`Error::InsufficientData`] if the testing set is empty (quality
    ///   would be undefined) or the training set is smaller than k.
    pub fn test(&mut self) -> Result<()> {
        let data = self.data.upgrade().ok_or(Error::BrokenReference)?;
        let data = data.borrow();

        let testing = data.testing();
        if testing.is_empty() {
            return Err(Error::InsufficientData {
                context: "testing set",
                needed: 1,
                available: 0,
            });
        }

        let mut pass_count = 0usize;
        let mut fail_count = 0usize;
        for sample in testing {
            let classification = self.classify_against(sample.known().sample(), data.training())?;
            sample.set_classification(classification);
            if sample.matches() {
                pass_count += 1;
            } else {
                fail_count += 1;
            }
        }
        self.quality = Some(pass_count as f64 / (pass_count + fail_count) as f64);
        Ok(())
    }

    fn classify_against(
        &self,
        sample: &Sample,
        training: &[TrainingKnownSample],
    ) -> Result<Species> {
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }
        if training.len() < self.k {
            return Err(Error::InsufficientData {
                context: "training set",
                needed: self.k,
                available: training.len(),
            });
        }

        // Bounded max-heap of the k nearest seen so far; the root is the
        // worst kept neighbor, evicted when a closer one arrives.
        let mut nearest: BinaryHeap<Neighbor> = BinaryHeap::with_capacity(self.k + 1);
        for (position, known) in training.iter().enumerate() {
            let distance = self.metric.distance(sample, known.known().sample())?;
            let candidate = Neighbor {
                distance,
                position,
                species: known.known().species(),
            };
            if nearest.len() < self.k {
                nearest.push(candidate);
            } else if let Some(worst) = nearest.peek() {
                if candidate < *worst {
                    nearest.pop();
                    nearest.push(candidate);
                }
            }
        }

        // Tally in rank order; insertion order doubles as the earliest-rank
        // tie-break for the vote.
        let ranked = nearest.into_sorted_vec();
        let mut votes: Vec<(Species, usize)> = Vec::new();
        for neighbor in &ranked {
            match votes.iter_mut().find(|(species, _)| *species == neighbor.species) {
                Some((_, count)) => *count += 1,
                None => votes.push((neighbor.species, 1)),
            }
        }

        let mut winner: Option<(Species, usize)> = None;
        for &(species, count) in &votes {
            if winner.map_or(true, |(_, best)| count > best) {
                winner = Some((species, count));
            }
        }
        winner
            .map(|(species, _)| species)
            .ok_or(Error::InsufficientData {
                context: "training set",
                needed: self.k,
                available: 0,
            })
    }
}
