//! Sequential drive loop feeding a source subrange into an accumulator
//!
//! Purely sequential, single-pass traversal with no internal parallelism:
//! an external driver partitions a sequence into disjoint subranges, runs
//! one of these loops per subrange, and merges the returned accumulators.

use log::trace;

use crate::ops::Predicate;
use crate::source::Source;
use crate::traits::Accumulator;
use crate::Result;

/// Reduce `source[offset .. offset + len]` into `acc`
///
/// Read failures propagate unchanged. The accumulator is returned by value
/// for chaining and merging.
pub fn consume<S, A>(source: &S, offset: usize, len: usize, mut acc: A) -> Result<A>
where
    S: Source + ?Sized,
    A: Accumulator,
{
    for i in 0..len {
        acc.accept(source.read(offset + i)?);
    }
    trace!("consumed {len} values at offset {offset}");
    Ok(acc)
}

/// Like [`consume`], but only values satisfying `predicate` are accepted
pub fn consume_if<S, A, P>(
    source: &S,
    offset: usize,
    len: usize,
    mut acc: A,
    predicate: &P,
) -> Result<A>
where
    S: Source + ?Sized,
    A: Accumulator,
    P: Predicate + ?Sized,
{
    let mut kept = 0usize;
    for i in 0..len {
        let value = source.read(offset + i)?;
        if predicate.test(value) {
            acc.accept(value);
            kept += 1;
        }
    }
    trace!("consumed {kept} of {len} values at offset {offset}");
    Ok(acc)
}
