//! Sample data model: measurement vectors, species labels, and the
//! training/testing wrappers that keep classification state out of the
//! training set by construction.

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

/// A raw input row: field name to string value.
///
/// Expected keys are `sepal_length`, `sepal_width`, `petal_length`,
/// `petal_width`, and `species`. Produced by an external row source (CSV
/// reader, request handler); this crate only validates and consumes them.
pub type RawRow = HashMap<String, String>;

/// An immutable four-feature measurement vector, in centimeters.
///
/// Rows ingested through [`KnownSample::from_row`] are guaranteed finite and
/// non-negative; samples constructed directly (e.g. ad-hoc queries) are the
/// caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Sepal length (cm).
    pub sepal_length: f64,
    /// Sepal width (cm).
    pub sepal_width: f64,
    /// Petal length (cm).
    pub petal_length: f64,
    /// Petal width (cm).
    pub petal_width: f64,
}

impl Sample {
    /// Create a sample from the four measurements.
    pub fn new(sepal_length: f64, sepal_width: f64, petal_length: f64, petal_width: f64) -> Self {
        Self {
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
        }
    }

    /// The measurements as a fixed-size array, in field order.
    #[inline]
    pub(crate) fn measurements(&self) -> [f64; 4] {
        [
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ]
    }
}

/// The closed set of recognized species labels.
///
/// An unrecognized name never becomes a `Species`; row validation rejects it
/// with [`Error::InvalidSample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Setosa,
    Versicolour,
    Virginica,
}

impl Species {
    /// Parse a label as it appears in the source data.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Iris-setosa" => Some(Self::Setosa),
            "Iris-versicolour" => Some(Self::Versicolour),
            "Iris-virginica" => Some(Self::Virginica),
            _ => None,
        }
    }

    /// The label as it appears in the source data.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Setosa => "Iris-setosa",
            Self::Versicolour => "Iris-versicolour",
            Self::Virginica => "Iris-virginica",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A measurement vector with its true species label.
#[derive(Debug, Clone, PartialEq)]
pub struct KnownSample {
    sample: Sample,
    species: Species,
}

impl KnownSample {
    /// Create a known sample from an already-validated measurement vector.
    pub fn new(sample: Sample, species: Species) -> Self {
        Self { sample, species }
    }

    /// Validate a raw row into a known sample.
    ///
    /// `index` is the 0-based position of the row in its source, reported in
    /// [`Error::InvalidSample`] along with the offending field. Never
    /// produces a partially-constructed sample.
    pub fn from_row(row: &RawRow, index: usize) -> Result<Self> {
        let name = field(row, "species", index)?;
        let species = Species::from_name(name).ok_or_else(|| Error::InvalidSample {
            row: index,
            field: "species",
            message: format!("unrecognized species {name:?}"),
        })?;

        let sample = Sample::new(
            measurement(row, "sepal_length", index)?,
            measurement(row, "sepal_width", index)?,
            measurement(row, "petal_length", index)?,
            measurement(row, "petal_width", index)?,
        );
        Ok(Self { sample, species })
    }

    /// The measurement vector.
    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    /// The true species label.
    pub fn species(&self) -> Species {
        self.species
    }
}

impl fmt::Display for KnownSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.sample.measurements();
        write!(
            f,
            "KnownSample({}, {}, {}, {}, {})",
            m[0], m[1], m[2], m[3], self.species
        )
    }
}

/// A known sample assigned to the training partition.
///
/// Carries no classification state: training samples cannot be classified,
/// and the type makes that unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingKnownSample {
    sample: KnownSample,
}

impl TrainingKnownSample {
    /// Wrap a known sample for the training set.
    pub fn new(sample: KnownSample) -> Self {
        Self { sample }
    }

    /// The wrapped known sample.
    pub fn known(&self) -> &KnownSample {
        &self.sample
    }
}

impl From<KnownSample> for TrainingKnownSample {
    fn from(sample: KnownSample) -> Self {
        Self::new(sample)
    }
}

/// A known sample assigned to the testing partition.
///
/// Holds the classification assigned during an evaluation run. The field is
/// a [`Cell`] so evaluation can record results through a shared borrow of
/// the owning collection.
#[derive(Debug, Clone)]
pub struct TestingKnownSample {
    sample: KnownSample,
    classification: Cell<Option<Species>>,
}

impl TestingKnownSample {
    /// Wrap a known sample for the testing set, initially unclassified.
    pub fn new(sample: KnownSample) -> Self {
        Self {
            sample,
            classification: Cell::new(None),
        }
    }

    /// The wrapped known sample.
    pub fn known(&self) -> &KnownSample {
        &self.sample
    }

    /// The classification assigned by the latest evaluation run, if any.
    pub fn classification(&self) -> Option<Species> {
        self.classification.get()
    }

    pub(crate) fn set_classification(&self, species: Species) {
        self.classification.set(Some(species));
    }

    /// True iff the assigned classification equals the true species.
    ///
    /// False while the sample is still unclassified.
    pub fn matches(&self) -> bool {
        self.classification.get() == Some(self.sample.species())
    }
}

impl From<KnownSample> for TestingKnownSample {
    fn from(sample: KnownSample) -> Self {
        Self::new(sample)
    }
}

impl fmt::Display for TestingKnownSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.classification.get() {
            Some(classification) => {
                write!(f, "TestingKnownSample({} => {})", self.sample, classification)
            }
            None => write!(f, "TestingKnownSample({}, unclassified)", self.sample),
        }
    }
}

fn field<'a>(row: &'a RawRow, name: &'static str, index: usize) -> Result<&'a str> {
    row.get(name)
        .map(String::as_str)
        .ok_or_else(|| Error::InvalidSample {
            row: index,
            field: name,
            message: "missing field".to_string(),
        })
}

fn measurement(row: &RawRow, name: &'static str, index: usize) -> Result<f64> {
    let raw = field(row, name, index)?;
    let value: f64 = raw.trim().parse().map_err(|_| Error::InvalidSample {
        row: index,
        field: name,
        message: format!("not a number: {raw:?}"),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidSample {
            row: index,
            field: name,
            message: format!("measurement out of range: {value}"),
        });
    }
    Ok(value)
}

/// Build a raw row from string fields. Shared fixture for unit tests.
#[cfg(test)]
pub(crate) fn test_row(sl: &str, sw: &str, pl: &str, pw: &str, species: &str) -> RawRow {
    RawRow::from([
        ("sepal_length".to_string(), sl.to_string()),
        ("sepal_width".to_string(), sw.to_string()),
        ("petal_length".to_string(), pl.to_string()),
        ("petal_width".to_string(), pw.to_string()),
        ("species".to_string(), species.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::test_row as row;

    #[test]
    fn test_from_row_valid() {
        let sample = KnownSample::from_row(&row("5.1", "3.5", "1.4", "0.2", "Iris-setosa"), 0)
            .expect("valid row");
        assert_eq!(sample.species(), Species::Setosa);
        assert_eq!(sample.sample().sepal_length, 5.1);
        assert_eq!(sample.sample().petal_width, 0.2);
    }

    #[test]
    fn test_from_row_unknown_species() {
        let err = KnownSample::from_row(&row("5.1", "3.5", "1.4", "0.2", "unknown-flower"), 7)
            .expect_err("species is not in the recognized set");
        match err {
            Error::InvalidSample { row, field, .. } => {
                assert_eq!(row, 7);
                assert_eq!(field, "species");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_row_non_numeric() {
        let err = KnownSample::from_row(&row("5.1", "wide", "1.4", "0.2", "Iris-setosa"), 3)
            .expect_err("non-numeric measurement");
        match err {
            Error::InvalidSample { row, field, .. } => {
                assert_eq!(row, 3);
                assert_eq!(field, "sepal_width");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_row_negative_measurement() {
        let err = KnownSample::from_row(&row("5.1", "3.5", "-1.4", "0.2", "Iris-setosa"), 0)
            .expect_err("negative measurement");
        assert!(matches!(
            err,
            Error::InvalidSample {
                field: "petal_length",
                ..
            }
        ));
    }

    #[test]
    fn test_from_row_missing_field() {
        let mut incomplete = row("5.1", "3.5", "1.4", "0.2", "Iris-setosa");
        incomplete.remove("petal_width");
        let err = KnownSample::from_row(&incomplete, 0).expect_err("missing field");
        assert!(matches!(
            err,
            Error::InvalidSample {
                field: "petal_width",
                ..
            }
        ));
    }

    #[test]
    fn test_species_round_trip() {
        for name in ["Iris-setosa", "Iris-versicolour", "Iris-virginica"] {
            let species = Species::from_name(name).expect("recognized name");
            assert_eq!(species.name(), name);
        }
        assert!(Species::from_name("Iris-Setosa").is_none());
    }

    #[test]
    fn test_testing_sample_matches() {
        let known = KnownSample::new(Sample::new(5.1, 3.5, 1.4, 0.2), Species::Setosa);
        let testing = TestingKnownSample::new(known);

        assert!(!testing.matches());
        testing.set_classification(Species::Virginica);
        assert!(!testing.matches());
        testing.set_classification(Species::Setosa);
        assert!(testing.matches());
        assert_eq!(testing.classification(), Some(Species::Setosa));
    }
}
