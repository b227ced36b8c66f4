//! Deterministic partition: deal rows n-out-of-d, like cards.

use crate::error::{Error, Result};
use crate::knn::sample::{KnownSample, RawRow, TestingKnownSample, TrainingKnownSample};
use crate::knn::traits::Partition;

/// Partition strategy driven by an integer ratio `(n, d)`.
///
/// A monotonic counter starts at 0; row `i` goes to training iff
/// `i % d < n`, and the counter increments for every appended row. The
/// interleave is exact, order-preserving, and needs no buffering, so the
/// strategy is streaming-friendly and fully deterministic.
#[derive(Debug, Clone)]
pub struct CountingDealingPartition {
    training_subset: (usize, usize),
    counter: usize,
    training: Vec<TrainingKnownSample>,
    testing: Vec<TestingKnownSample>,
}

impl CountingDealingPartition {
    /// Create a dealing partition routing `n` of every `d` rows to training.
    ///
    /// Requires `0 <= n <= d` and `d > 0`, validated on the first append.
    pub fn new(n: usize, d: usize) -> Self {
        Self {
            training_subset: (n, d),
            counter: 0,
            training: Vec::new(),
            testing: Vec::new(),
        }
    }
}

impl Default for CountingDealingPartition {
    /// 8 out of every 10 rows to training.
    fn default() -> Self {
        Self::new(8, 10)
    }
}

impl Partition for CountingDealingPartition {
    fn append(&mut self, row: &RawRow) -> Result<()> {
        let (n, d) = self.training_subset;
        if d == 0 {
            return Err(Error::InvalidParameter {
                name: "training_subset",
                message: "denominator must be positive",
            });
        }
        if n > d {
            return Err(Error::InvalidParameter {
                name: "training_subset",
                message: "numerator must not exceed denominator",
            });
        }

        let sample = KnownSample::from_row(row, self.counter)?;
        if self.counter % d < n {
            self.training.push(sample.into());
        } else {
            self.testing.push(sample.into());
        }
        self.counter += 1;
        Ok(())
    }

    /// No-op: the deal is decided row by row.
    fn finalize(&mut self) -> Result<()> {
        Ok(())
    }

    fn training(&self) -> &[TrainingKnownSample] {
        &self.training
    }

    fn testing(&self) -> &[TestingKnownSample] {
        &self.testing
    }

    fn into_sets(self) -> Result<(Vec<TrainingKnownSample>, Vec<TestingKnownSample>)> {
        Ok((self.training, self.testing))
    }
}
