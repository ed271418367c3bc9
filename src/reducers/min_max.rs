//! Joint minimum / maximum / sum

use serde::Serialize;

use crate::traits::{Accumulator, Tally};
use crate::Result;

/// Result record for [`MinMaxSum`]
///
/// `min` and `max` are NaN for an empty population: no real extremum exists,
/// and reporting the internal sentinels would be misleading.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MinMaxSumStat {
    /// Sum of all accepted values
    pub sum: f64,
    /// Smallest accepted value, NaN if none
    pub min: f64,
    /// Largest accepted value, NaN if none
    pub max: f64,
    /// Number of accepted values
    pub count: u64,
}

/// Minimum, maximum, and sum in a single pass
#[derive(Debug, Clone)]
pub struct MinMaxSum {
    sum: f64,
    min: f64,
    max: f64,
    tally: Tally,
}

impl Default for MinMaxSum {
    fn default() -> Self {
        Self::new()
    }
}

impl MinMaxSum {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            tally: Tally::default(),
        }
    }

    // The sentinels must not escape for an empty population.
    fn finalized_min(&self) -> f64 {
        if self.tally.get() == 0 {
            f64::NAN
        } else {
            self.min
        }
    }

    fn finalized_max(&self) -> f64 {
        if self.tally.get() == 0 {
            f64::NAN
        } else {
            self.max
        }
    }
}

impl Accumulator for MinMaxSum {
    type Output = MinMaxSumStat;

    fn accept(&mut self, value: f64) {
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.tally.record();
    }

    fn merge(&mut self, other: Self) -> Result<()> {
        // Combine the finalized extrema: f64::min / f64::max ignore NaN, so
        // an empty side never displaces a real extremum.
        self.sum += other.sum;
        self.min = self.finalized_min().min(other.finalized_min());
        self.max = self.finalized_max().max(other.finalized_max());
        self.tally.absorb(other.tally);
        Ok(())
    }

    fn finalize(&self) -> MinMaxSumStat {
        MinMaxSumStat {
            sum: self.sum,
            min: self.finalized_min(),
            max: self.finalized_max(),
            count: self.tally.get(),
        }
    }

    fn count(&self) -> u64 {
        self.tally.get()
    }
}
