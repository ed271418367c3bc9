//! Generic binary-operator folds

use serde::Serialize;

use crate::ops::BinaryOp;
use crate::traits::{Accumulator, Tally};
use crate::Result;

/// Result record for [`Fold`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoldStat {
    /// Field-name tag chosen at construction
    pub name: &'static str,
    /// Folded value
    pub value: f64,
    /// Number of accepted values
    pub count: u64,
}

/// Binary-operator fold over a caller-supplied seed
///
/// # Caller obligation
///
/// Merging partial folds computes `op(self.value, other.value)`, which only
/// equals the single-pass result when `op` is associative and commutative
/// (min, max, sum, product, ...). A non-associative operator such as
/// subtraction gives partition-dependent results; the fold does not verify
/// this property. For partitioned use the seed must also be the operator's
/// identity, since every partial fold starts from it.
#[derive(Debug, Clone)]
pub struct Fold<O: BinaryOp> {
    op: O,
    value: f64,
    label: &'static str,
    tally: Tally,
}

impl<O: BinaryOp> Fold<O> {
    /// Field name used when no label is given
    pub const DEFAULT_LABEL: &'static str = "value";

    /// Fold `op` starting from `seed`
    pub fn new(op: O, seed: f64) -> Self {
        Self::labeled(op, seed, Self::DEFAULT_LABEL)
    }

    /// Fold whose result record reports under `label`
    pub fn labeled(op: O, seed: f64, label: &'static str) -> Self {
        Self {
            op,
            value: seed,
            label,
            tally: Tally::default(),
        }
    }
}

impl<O: BinaryOp> Accumulator for Fold<O> {
    type Output = FoldStat;

    fn accept(&mut self, value: f64) {
        self.value = self.op.apply(self.value, value);
        self.tally.record();
    }

    fn merge(&mut self, other: Self) -> Result<()> {
        self.value = self.op.apply(self.value, other.value);
        self.tally.absorb(other.tally);
        Ok(())
    }

    fn finalize(&self) -> FoldStat {
        FoldStat {
            name: self.label,
            value: self.value,
            count: self.tally.get(),
        }
    }

    fn count(&self) -> u64 {
        self.tally.get()
    }
}
