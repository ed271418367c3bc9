//! Streaming, combinable scalar reductions over f64 sequences
//!
//! This crate computes sums, transformed sums, generic binary-operator
//! folds, joint min/max/sum, and central statistical moments over runs of
//! floating-point values. Disjoint partitions of a sequence can be reduced
//! independently and merged into a result identical to a single pass over
//! the whole sequence.
//!
//! # Architecture
//!
//! - **Operators** ([`ops`]): pure unary/binary transforms and predicates,
//!   blanket-implemented for closures.
//! - **Accumulator contract** ([`traits`]): `accept` one value, `merge`
//!   with a same-kind sibling (enforced at compile time), `finalize` into a
//!   typed result record.
//! - **Reducers** ([`reducers`]): [`Sum`], [`MappedSum`], [`Fold`],
//!   [`MinMaxSum`], [`CentralMoments`].
//! - **Drive loop** ([`drive`]): sequential traversal of a [`Source`]
//!   subrange with optional filtering.
//!
//! The crate performs no threading and no I/O; it is designed to be embedded
//! in a data-parallel driver that fans subranges across workers and merges
//! the resulting accumulators.
//!
//! # Example
//!
//! ```
//! use scalar_reduce::{consume, merge_all, Accumulator, MinMaxSum};
//!
//! let data = vec![3.0, -1.0, 4.0, 1.5];
//!
//! // One accumulator per half, as a parallel driver would do.
//! let left = consume(&data, 0, 2, MinMaxSum::new())?;
//! let right = consume(&data, 2, 2, MinMaxSum::new())?;
//!
//! let stat = merge_all([left, right])?.unwrap().finalize();
//! assert_eq!(stat.sum, 7.5);
//! assert_eq!(stat.min, -1.0);
//! assert_eq!(stat.max, 4.0);
//! assert_eq!(stat.count, 4);
//! # Ok::<(), scalar_reduce::Error>(())
//! ```

pub mod drive;
pub mod error;
pub mod ops;
pub mod reducers;
pub mod source;
pub mod traits;

pub use drive::{consume, consume_if};
pub use error::{Error, Result};
pub use ops::{BinaryOp, Predicate, UnaryOp};
pub use reducers::{
    CentralMoments, Fold, FoldStat, MappedSum, MinMaxSum, MinMaxSumStat, MomentsStat, Sum, SumStat,
};
pub use source::Source;
pub use traits::{merge_all, Accumulator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        consume, consume_if, merge_all, Accumulator, BinaryOp, CentralMoments, Fold, MappedSum,
        MinMaxSum, Predicate, Result, Source, Sum, UnaryOp,
    };
}
