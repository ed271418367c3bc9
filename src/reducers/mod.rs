//! Concrete reducer kinds
//!
//! Each kind finalizes into its own typed result record; there is no
//! generic untyped result bag.

mod fold;
mod min_max;
mod moments;
mod sum;

pub use fold::{Fold, FoldStat};
pub use min_max::{MinMaxSum, MinMaxSumStat};
pub use moments::{CentralMoments, MomentsStat};
pub use sum::{MappedSum, Sum, SumStat};
