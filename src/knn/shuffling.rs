//! Randomized partition: shuffle once, split at a configured ratio.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Error, Result};
use crate::knn::sample::{KnownSample, RawRow, TestingKnownSample, TrainingKnownSample};
use crate::knn::traits::Partition;

/// Partition strategy that buffers validated rows, shuffles them once on
/// [`finalize`](Partition::finalize), and splits at
/// `floor(count * training_subset)`.
///
/// The split is fixed by `finalize` and never recomputed. Rows appended
/// after that keep the split as-is and land on the testing side, matching
/// the historical shuffle-once behavior of this strategy.
///
/// Shuffling uses a thread-local source by default; [`with_seed`] makes the
/// permutation deterministic.
///
/// [`with_seed`]: ShufflingPartition::with_seed
#[derive(Debug, Clone)]
pub struct ShufflingPartition {
    training_subset: f64,
    seed: Option<u64>,
    /// Rows seen so far, for error indices.
    appended: usize,
    pending: Vec<KnownSample>,
    split: Option<usize>,
    training: Vec<TrainingKnownSample>,
    testing: Vec<TestingKnownSample>,
}

impl ShufflingPartition {
    /// Create a shuffling partition.
    ///
    /// # Arguments
    ///
    /// * `training_subset` - Fraction of rows dealt to training, in `[0, 1]`.
    ///   Validated on `finalize`.
    pub fn new(training_subset: f64) -> Self {
        Self {
            training_subset,
            seed: None,
            appended: 0,
            pending: Vec::new(),
            split: None,
            training: Vec::new(),
            testing: Vec::new(),
        }
    }

    /// Seed the shuffle for deterministic splits.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for ShufflingPartition {
    fn default() -> Self {
        Self::new(0.8)
    }
}

impl Partition for ShufflingPartition {
    fn append(&mut self, row: &RawRow) -> Result<()> {
        let sample = KnownSample::from_row(row, self.appended)?;
        self.appended += 1;
        if self.split.is_some() {
            // Split already fixed: late rows go to the testing side.
            self.testing.push(sample.into());
        } else {
            self.pending.push(sample);
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        if self.split.is_some() {
            return Ok(());
        }
        if !(0.0..=1.0).contains(&self.training_subset) {
            return Err(Error::InvalidParameter {
                name: "training_subset",
                message: "must be within [0, 1]",
            });
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        self.pending.shuffle(&mut rng);

        let split = (self.pending.len() as f64 * self.training_subset).floor() as usize;
        let testing = self.pending.split_off(split);
        self.training = self.pending.drain(..).map(Into::into).collect();
        self.testing = testing.into_iter().map(Into::into).collect();
        self.split = Some(split);
        Ok(())
    }

    fn training(&self) -> &[TrainingKnownSample] {
        &self.training
    }

    fn testing(&self) -> &[TestingKnownSample] {
        &self.testing
    }

    fn into_sets(mut self) -> Result<(Vec<TrainingKnownSample>, Vec<TestingKnownSample>)> {
        self.finalize()?;
        Ok((self.training, self.testing))
    }
}
