//! The accumulator contract shared by every reducer
//!
//! Each reducer kind owns its state and implements [`Accumulator`]
//! independently; the shared piece is the [`Tally`] element counter, embedded
//! by composition. `merge` takes `Self`, so combining two different reducer
//! kinds is a type error rather than a runtime cast failure.

use crate::Result;

/// Streaming reducer over f64 values, mergeable with peers of the same kind
///
/// An instance is exclusively owned by the worker that mutates it until it is
/// passed by value into [`merge`](Accumulator::merge), which consumes it.
/// Merging must behave as if the union of both sides' inputs had been fed to
/// a single instance, independent of how the original sequence was
/// partitioned. That requires the underlying combination to be associative
/// and commutative.
pub trait Accumulator: Sized + Send {
    /// Finalized result record for this reducer kind
    type Output;

    /// Incorporate one value
    fn accept(&mut self, value: f64);

    /// Combine `other` into `self`, consuming it
    ///
    /// Fails only where a runtime compatibility check exists (central
    /// moments reject a sibling built against a different mean); kind
    /// mismatches do not compile.
    fn merge(&mut self, other: Self) -> Result<()>;

    /// Project the current state into a result record
    ///
    /// Pure and idempotent: repeated calls return identical records and the
    /// accumulator is not mutated.
    fn finalize(&self) -> Self::Output;

    /// Number of values accepted through this instance and its merged
    /// siblings
    fn count(&self) -> u64;

    /// Whether any value has been accepted
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Element counter embedded by composition in every reducer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Tally {
    n: u64,
}

impl Tally {
    pub(crate) fn record(&mut self) {
        self.n += 1;
    }

    pub(crate) fn absorb(&mut self, other: Tally) {
        self.n += other.n;
    }

    pub(crate) fn get(&self) -> u64 {
        self.n
    }
}

/// Fold an iterator of same-kind accumulators into one
///
/// This is the single-threaded reduction step of a partitioned computation:
/// workers each produce one accumulator, and the driver combines them here
/// (or pairwise in a tree). Returns `None` for an empty iterator.
pub fn merge_all<A, I>(parts: I) -> Result<Option<A>>
where
    A: Accumulator,
    I: IntoIterator<Item = A>,
{
    let mut parts = parts.into_iter();
    let Some(mut acc) = parts.next() else {
        return Ok(None);
    };
    for part in parts {
        acc.merge(part)?;
    }
    Ok(Some(acc))
}
