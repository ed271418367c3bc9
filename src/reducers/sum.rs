//! Plain and transformed sums

use serde::Serialize;

use crate::ops::UnaryOp;
use crate::traits::{Accumulator, Tally};
use crate::Result;

/// Result record for [`Sum`] and [`MappedSum`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SumStat {
    /// Sum of all accepted values
    pub sum: f64,
    /// Number of accepted values
    pub count: u64,
}

impl SumStat {
    /// Arithmetic mean of the accepted values; NaN for an empty population
    ///
    /// This is the pass-one result fed to
    /// [`CentralMoments::new`](crate::CentralMoments::new) in a two-pass
    /// moment computation.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Running sum
#[derive(Debug, Clone, Default)]
pub struct Sum {
    total: f64,
    tally: Tally,
}

impl Sum {
    /// Create an empty sum
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for Sum {
    type Output = SumStat;

    fn accept(&mut self, value: f64) {
        self.total += value;
        self.tally.record();
    }

    fn merge(&mut self, other: Self) -> Result<()> {
        self.total += other.total;
        self.tally.absorb(other.tally);
        Ok(())
    }

    fn finalize(&self) -> SumStat {
        SumStat {
            sum: self.total,
            count: self.tally.get(),
        }
    }

    fn count(&self) -> u64 {
        self.tally.get()
    }
}

/// Sum of `op(v)` for each accepted `v`
///
/// A specialization of [`Sum`], not a distinct metric kind: the result is
/// the same [`SumStat`] shape.
#[derive(Debug, Clone)]
pub struct MappedSum<O: UnaryOp> {
    op: O,
    inner: Sum,
}

impl<O: UnaryOp> MappedSum<O> {
    /// Create an empty transformed sum over `op`
    pub fn new(op: O) -> Self {
        Self {
            op,
            inner: Sum::new(),
        }
    }
}

impl<O: UnaryOp> Accumulator for MappedSum<O> {
    type Output = SumStat;

    fn accept(&mut self, value: f64) {
        self.inner.accept(self.op.apply(value));
    }

    fn merge(&mut self, other: Self) -> Result<()> {
        self.inner.merge(other.inner)
    }

    fn finalize(&self) -> SumStat {
        self.inner.finalize()
    }

    fn count(&self) -> u64 {
        self.inner.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sum() {
        let mut sum = Sum::new();
        for v in [1.0, 2.0, 3.0, 4.0] {
            sum.accept(v);
        }

        let stat = sum.finalize();
        assert_eq!(stat.sum, 10.0);
        assert_eq!(stat.count, 4);
    }

    #[test]
    fn test_empty_sum_identity() {
        let stat = Sum::new().finalize();
        assert_eq!(stat.sum, 0.0);
        assert_eq!(stat.count, 0);
        assert!(stat.mean().is_nan());
    }

    #[test]
    fn test_merge_matches_single_pass() {
        let values = [0.5, -2.0, 7.25, 3.0, 1.0];

        let mut whole = Sum::new();
        for &v in &values {
            whole.accept(v);
        }

        let mut left = Sum::new();
        let mut right = Sum::new();
        for &v in &values[..2] {
            left.accept(v);
        }
        for &v in &values[2..] {
            right.accept(v);
        }
        left.merge(right).unwrap();

        assert_relative_eq!(left.finalize().sum, whole.finalize().sum, epsilon = 1e-9);
        assert_eq!(left.count(), whole.count());
    }

    #[test]
    fn test_mean_helper() {
        let mut sum = Sum::new();
        for v in [1.0, 2.0, 3.0] {
            sum.accept(v);
        }
        assert_relative_eq!(sum.finalize().mean(), 2.0);
    }

    #[test]
    fn test_mapped_sum_applies_operator() {
        let mut squares = MappedSum::new(|v: f64| v * v);
        for v in [1.0, 2.0, 3.0] {
            squares.accept(v);
        }

        let stat = squares.finalize();
        assert_eq!(stat.sum, 14.0);
        assert_eq!(stat.count, 3);
    }

    #[test]
    fn test_mapped_sum_merge() {
        let abs = |v: f64| v.abs();

        let mut left = MappedSum::new(abs);
        let mut right = MappedSum::new(abs);
        left.accept(-1.0);
        right.accept(-2.0);
        left.merge(right).unwrap();

        assert_eq!(left.finalize().sum, 3.0);
    }
}
