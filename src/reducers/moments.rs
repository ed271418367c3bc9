//! Central moments about a fixed, precomputed mean
//!
//! Second pass of the classic two-pass moment algorithm: pass one computes
//! the arithmetic mean of the full population (for example via [`Sum`] and
//! [`SumStat::mean`]), pass two accumulates powers of deviations from that
//! fixed mean. Partial accumulators merge by plain addition, which is only
//! sound when every partial was built about the same mean; the merge is
//! guarded accordingly.
//!
//! [`Sum`]: crate::Sum
//! [`SumStat::mean`]: crate::SumStat::mean

use serde::Serialize;

use crate::traits::{Accumulator, Tally};
use crate::{Error, Result};

/// Result record for [`CentralMoments`]
///
/// These are raw central moment sums `Σ (v - mean)^k`, not normalized:
/// divide by `count` (or `count - 1`) for variance-style statistics, or use
/// the projection helpers below.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MomentsStat {
    /// Sum of squared deviations
    pub moment2: f64,
    /// Sum of cubed deviations
    pub moment3: f64,
    /// Sum of fourth-power deviations
    pub moment4: f64,
    /// Number of accepted values
    pub count: u64,
}

impl MomentsStat {
    /// Population variance; NaN for an empty population
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.moment2 / self.count as f64
        }
    }

    /// Unbiased sample variance (Bessel's correction); NaN below two values
    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            f64::NAN
        } else {
            self.moment2 / (self.count - 1) as f64
        }
    }

    /// Population skewness; NaN for an empty population, 0 for one with no
    /// spread
    pub fn skewness(&self) -> f64 {
        if self.count == 0 {
            return f64::NAN;
        }
        let n = self.count as f64;
        let variance = self.moment2 / n;
        if variance == 0.0 {
            return 0.0;
        }
        (self.moment3 / n) / variance.powf(1.5)
    }

    /// Excess kurtosis; NaN for an empty population, 0 for one with no
    /// spread
    pub fn kurtosis(&self) -> f64 {
        if self.count == 0 {
            return f64::NAN;
        }
        let n = self.count as f64;
        let variance = self.moment2 / n;
        if variance == 0.0 {
            return 0.0;
        }
        (self.moment4 / n) / (variance * variance) - 3.0
    }
}

/// Central moments (2nd–4th order) about a fixed mean
///
/// # Example
///
/// ```
/// use scalar_reduce::{consume, Accumulator, CentralMoments, Sum};
///
/// let data = vec![1.0, 2.0, 3.0];
///
/// // Pass one: the mean over the full population.
/// let mean = consume(&data, 0, 3, Sum::new())?.finalize().mean();
///
/// // Pass two: deviations from that fixed mean.
/// let moments = consume(&data, 0, 3, CentralMoments::new(mean))?.finalize();
/// assert_eq!(moments.moment2, 2.0);
/// assert_eq!(moments.moment3, 0.0);
/// assert_eq!(moments.moment4, 2.0);
/// # Ok::<(), scalar_reduce::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CentralMoments {
    mean: f64,
    m2: f64,
    m3: f64,
    m4: f64,
    tally: Tally,
}

impl CentralMoments {
    /// Create an empty accumulator of deviations about `mean`
    ///
    /// Every partial accumulator of one partitioned computation must be
    /// constructed with the same pass-one mean; [`merge`](Accumulator::merge)
    /// rejects siblings built about a different one.
    pub fn new(mean: f64) -> Self {
        Self {
            mean,
            m2: 0.0,
            m3: 0.0,
            m4: 0.0,
            tally: Tally::default(),
        }
    }

    /// The fixed mean this accumulator deviates from
    pub fn mean(&self) -> f64 {
        self.mean
    }
}

impl Accumulator for CentralMoments {
    type Output = MomentsStat;

    fn accept(&mut self, value: f64) {
        let d = value - self.mean;
        let d2 = d * d;
        self.m2 += d2;
        let d3 = d2 * d;
        self.m3 += d3;
        self.m4 += d3 * d;
        self.tally.record();
    }

    fn merge(&mut self, other: Self) -> Result<()> {
        // Bitwise comparison: both sides of a two-pass computation share the
        // one pass-one result, so equality is exact, not a tolerance question.
        if self.mean.to_bits() != other.mean.to_bits() {
            return Err(Error::mean_mismatch(self.mean, other.mean));
        }
        self.m2 += other.m2;
        self.m3 += other.m3;
        self.m4 += other.m4;
        self.tally.absorb(other.tally);
        Ok(())
    }

    fn finalize(&self) -> MomentsStat {
        MomentsStat {
            moment2: self.m2,
            moment3: self.m3,
            moment4: self.m4,
            count: self.tally.get(),
        }
    }

    fn count(&self) -> u64 {
        self.tally.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_moments_about_known_mean() {
        let mut acc = CentralMoments::new(2.0);
        for v in [1.0, 2.0, 3.0] {
            acc.accept(v);
        }

        // Deviations are [-1, 0, 1].
        let stat = acc.finalize();
        assert_relative_eq!(stat.moment2, 2.0);
        assert_relative_eq!(stat.moment3, 0.0);
        assert_relative_eq!(stat.moment4, 2.0);
        assert_eq!(stat.count, 3);
    }

    #[test]
    fn test_empty_moments_are_zero() {
        let stat = CentralMoments::new(5.0).finalize();

        assert_eq!(stat.moment2, 0.0);
        assert_eq!(stat.moment3, 0.0);
        assert_eq!(stat.moment4, 0.0);
        assert_eq!(stat.count, 0);
        assert!(stat.variance().is_nan());
    }

    #[test]
    fn test_same_mean_merge_matches_single_pass() {
        let values = [1.0, 4.0, 2.5, 6.0, -3.0];
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        let mut whole = CentralMoments::new(mean);
        for &v in &values {
            whole.accept(v);
        }

        let mut left = CentralMoments::new(mean);
        let mut right = CentralMoments::new(mean);
        for &v in &values[..2] {
            left.accept(v);
        }
        for &v in &values[2..] {
            right.accept(v);
        }
        left.merge(right).unwrap();

        let merged = left.finalize();
        let single = whole.finalize();
        assert_relative_eq!(merged.moment2, single.moment2, epsilon = 1e-9);
        assert_relative_eq!(merged.moment3, single.moment3, epsilon = 1e-9);
        assert_relative_eq!(merged.moment4, single.moment4, epsilon = 1e-9);
        assert_eq!(merged.count, single.count);
    }

    #[test]
    fn test_mismatched_mean_merge_is_rejected() {
        let mut left = CentralMoments::new(2.0);
        let right = CentralMoments::new(2.5);

        match left.merge(right) {
            Err(Error::MeanMismatch { left, right }) => {
                assert_eq!(left, 2.0);
                assert_eq!(right, 2.5);
            }
            other => panic!("expected MeanMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_variance_projections() {
        // [2, 4, 4, 4, 5, 5, 7, 9]: mean 5, population variance 4.
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let mut acc = CentralMoments::new(5.0);
        for &v in &values {
            acc.accept(v);
        }

        let stat = acc.finalize();
        assert_relative_eq!(stat.variance(), 4.0);
        assert_relative_eq!(stat.sample_variance(), 32.0 / 7.0);
    }

    #[test]
    fn test_skewness_of_symmetric_data_is_zero() {
        let mut acc = CentralMoments::new(0.0);
        for v in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            acc.accept(v);
        }

        let stat = acc.finalize();
        assert_relative_eq!(stat.skewness(), 0.0);
        assert!(stat.kurtosis().is_finite());
    }

    #[test]
    fn test_zero_spread_projections() {
        let mut acc = CentralMoments::new(3.0);
        for _ in 0..4 {
            acc.accept(3.0);
        }

        let stat = acc.finalize();
        assert_eq!(stat.skewness(), 0.0);
        assert_eq!(stat.kurtosis(), 0.0);
    }
}
