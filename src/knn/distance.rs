//! Distance metrics over the four measurement dimensions.

use crate::error::{Error, Result};
use crate::knn::sample::Sample;

/// A stateless dissimilarity measure between two samples.
///
/// All variants are non-negative and mathematically commutative. Euclidean,
/// Manhattan, and Chebyshev are zero iff the samples are componentwise
/// equal. Sorensen is normalized to `[0, 1]` and is undefined when both
/// samples are the all-zero vector; that case fails with
/// [`Error::InvalidMetricInput`] rather than returning NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceMetric {
    /// Square root of the sum of squared per-dimension differences.
    Euclidean,
    /// Sum of absolute per-dimension differences.
    Manhattan,
    /// Maximum absolute per-dimension difference.
    Chebyshev,
    /// Sum of absolute differences divided by the sum of componentwise
    /// totals.
    Sorensen,
}

impl DistanceMetric {
    /// Compute the distance between two samples.
    pub fn distance(&self, a: &Sample, b: &Sample) -> Result<f64> {
        let xs = a.measurements();
        let ys = b.measurements();
        match self {
            Self::Euclidean => Ok(xs
                .iter()
                .zip(ys.iter())
                .map(|(x, y)| (x - y).powi(2))
                .sum::<f64>()
                .sqrt()),
            Self::Manhattan => Ok(xs
                .iter()
                .zip(ys.iter())
                .map(|(x, y)| (x - y).abs())
                .sum()),
            Self::Chebyshev => Ok(xs
                .iter()
                .zip(ys.iter())
                .map(|(x, y)| (x - y).abs())
                .fold(0.0, f64::max)),
            Self::Sorensen => {
                let numerator: f64 = xs.iter().zip(ys.iter()).map(|(x, y)| (x - y).abs()).sum();
                let denominator: f64 = xs.iter().zip(ys.iter()).map(|(x, y)| x + y).sum();
                if denominator == 0.0 {
                    return Err(Error::InvalidMetricInput);
                }
                Ok(numerator / denominator)
            }
        }
    }

    /// Short name for reports and demo output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
            Self::Chebyshev => "chebyshev",
            Self::Sorensen => "sorensen",
        }
    }
}
