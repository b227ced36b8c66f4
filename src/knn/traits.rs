use crate::error::Result;
use crate::knn::sample::{RawRow, TestingKnownSample, TrainingKnownSample};

/// Common interface for partition strategies (raw rows in, disjoint
/// training/testing sets out).
///
/// The protocol is two-phase: any number of [`append`](Partition::append)
/// calls, then a single [`finalize`](Partition::finalize) that fixes the
/// split, then the read-only accessors. Every appended row lands in exactly
/// one of the two sets; rows are validated on append and an invalid row
/// fails with the 0-based row index and the offending field.
pub trait Partition {
    /// Validate one raw row and stage it for the split.
    fn append(&mut self, row: &RawRow) -> Result<()>;

    /// Append every row in order, stopping at the first invalid one.
    fn extend(&mut self, rows: &[RawRow]) -> Result<()> {
        for row in rows {
            self.append(row)?;
        }
        Ok(())
    }

    /// Fix the training/testing split. Idempotent.
    fn finalize(&mut self) -> Result<()>;

    /// The training side of the split (empty before `finalize` for
    /// strategies that buffer).
    fn training(&self) -> &[TrainingKnownSample];

    /// The testing side of the split.
    fn testing(&self) -> &[TestingKnownSample];

    /// Consume the partition, yielding the two sets.
    ///
    /// Runs [`finalize`](Partition::finalize) first if it has not happened
    /// yet, so every appended row is accounted for; a misconfigured
    /// partition surfaces its error here instead of dropping rows.
    fn into_sets(self) -> Result<(Vec<TrainingKnownSample>, Vec<TestingKnownSample>)>
    where
        Self: Sized;
}
