//! Training data: owns the partitioned sample sets and the tuning history.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::SystemTime;

use crate::error::{Error, Result};
use crate::knn::hyperparameter::Hyperparameter;
use crate::knn::sample::{RawRow, TestingKnownSample, TrainingKnownSample};
use crate::knn::traits::Partition;

/// The owning handle for a [`TrainingData`].
///
/// Hyperparameters hold weak references into this handle; once the last
/// clone is dropped, their operations fail with
/// [`Error::BrokenReference`](crate::Error::BrokenReference). `Rc` keeps the
/// whole arrangement single-threaded, which is all this core supports.
pub type SharedTrainingData = Rc<RefCell<TrainingData>>;

/// A named dataset split into training and testing samples, plus the
/// history of hyperparameters evaluated against it.
///
/// Lifecycle: constructed empty, populated exactly once by
/// [`load`](TrainingData::load), then scored any number of times through
/// [`test`](TrainingData::test).
#[derive(Debug, Default)]
pub struct TrainingData {
    name: String,
    training: Vec<TrainingKnownSample>,
    testing: Vec<TestingKnownSample>,
    tuning: Vec<Hyperparameter>,
    uploaded: Option<SystemTime>,
    tested: Option<SystemTime>,
}

impl TrainingData {
    /// Create an empty dataset with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create an empty dataset behind a shareable owning handle.
    pub fn shared(name: impl Into<String>) -> SharedTrainingData {
        Rc::new(RefCell::new(Self::new(name)))
    }

    /// The dataset name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The training samples.
    pub fn training(&self) -> &[TrainingKnownSample] {
        &self.training
    }

    /// The testing samples.
    pub fn testing(&self) -> &[TestingKnownSample] {
        &self.testing
    }

    /// Every hyperparameter evaluated so far, in evaluation order.
    pub fn tuning(&self) -> &[Hyperparameter] {
        &self.tuning
    }

    /// When the dataset was populated, if it has been.
    pub fn uploaded(&self) -> Option<SystemTime> {
        self.uploaded
    }

    /// When the dataset was last scored, if it has been.
    pub fn tested(&self) -> Option<SystemTime> {
        self.tested
    }

    /// Populate the dataset by running every raw row through `partition`.
    ///
    /// The load is all-or-nothing: the first invalid row aborts it with
    /// [`Error::InvalidSample`] (carrying the row index and field) and the
    /// dataset is left untouched. A partial load would silently skew the
    /// configured training/testing ratio.
    ///
    /// # Errors
    ///
    /// Also fails with [`Error::InvalidParameter`] if the dataset is
    /// already populated or the partition is misconfigured.
    pub fn load<P: Partition>(&mut self, rows: &[RawRow], mut partition: P) -> Result<()> {
        if self.uploaded.is_some() {
            return Err(Error::InvalidParameter {
                name: "load",
                message: "training data is already populated",
            });
        }

        partition.extend(rows)?;

        let (training, testing) = partition.into_sets()?;
        self.training = training;
        self.testing = testing;
        self.uploaded = Some(SystemTime::now());
        Ok(())
    }

    /// Evaluate a hyperparameter against the shared dataset and record it
    /// in the tuning history.
    ///
    /// # Errors
    ///
    /// Propagates the failures of [`Hyperparameter::test`]; a failed
    /// parameter is not recorded.
    pub fn test(data: &SharedTrainingData, mut parameter: Hyperparameter) -> Result<()> {
        parameter.test()?;

        let mut this = data.borrow_mut();
        this.tuning.push(parameter);
        this.tested = Some(SystemTime::now());
        Ok(())
    }

    /// Install pre-built sample sets, bypassing partitioning. Test fixture.
    #[cfg(test)]
    pub(crate) fn set_sets(
        &mut self,
        training: Vec<TrainingKnownSample>,
        testing: Vec<TestingKnownSample>,
    ) {
        self.training = training;
        self.testing = testing;
    }
}
