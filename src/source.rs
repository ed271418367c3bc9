//! Read-only indexed access to f64 sequences
//!
//! A [`Source`] is the buffer capability the drive loop consumes: an
//! ordered, fixed-length run of values with random-access reads. The core
//! only ever borrows read access, so a source may be shared across worker
//! threads reducing disjoint subranges concurrently.

use crate::{Error, Result};

/// Borrowed, random-access run of f64 values
pub trait Source {
    /// Number of readable elements
    fn len(&self) -> usize;

    /// Read the element at `index`
    ///
    /// Fails with a typed error instead of panicking; the drive loop
    /// propagates read failures unchanged.
    fn read(&self, index: usize) -> Result<f64>;

    /// Whether the source has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Source for [f64] {
    fn len(&self) -> usize {
        <[f64]>::len(self)
    }

    fn read(&self, index: usize) -> Result<f64> {
        self.get(index)
            .copied()
            .ok_or_else(|| Error::out_of_bounds(index, <[f64]>::len(self)))
    }
}

impl Source for Vec<f64> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn read(&self, index: usize) -> Result<f64> {
        Source::read(self.as_slice(), index)
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn read(&self, index: usize) -> Result<f64> {
        (**self).read(index)
    }
}
