//! Bitvec-backed membership set for dense color-IDs

use bitvec::prelude::*;
use std::fmt;

use crate::palette::entry::ColorId;

/// Fixed-size bitset for tracking which color-IDs have been seen
///
/// Sized to the palette at construction so membership testing is O(1)
/// and inserts never allocate. Backs the assembler's first-seen
/// bookkeeping while cells are bucketed per tile.
#[derive(Clone, Debug)]
pub struct ColorIdSet {
    bits: BitVec,
}

impl ColorIdSet {
    /// Create a set with no IDs present, covering `0..palette_len`
    #[must_use]
    pub fn new(palette_len: usize) -> Self {
        Self {
            bits: bitvec![0; palette_len],
        }
    }

    /// Insert an ID, reporting whether it was newly added
    ///
    /// IDs outside the covered range are ignored and report `false`.
    pub fn insert(&mut self, id: ColorId) -> bool {
        let index = id as usize;
        match self.bits.get(index).map(|bit| *bit) {
            Some(false) => {
                self.bits.set(index, true);
                true
            }
            _ => false,
        }
    }

    /// Test ID membership
    #[must_use]
    pub fn contains(&self, id: ColorId) -> bool {
        self.bits.get(id as usize).as_deref() == Some(&true)
    }

    /// Count IDs in the set
    #[must_use]
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no IDs are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Extract all present IDs in ascending order
    #[must_use]
    pub fn to_vec(&self) -> Vec<ColorId> {
        self.bits.iter_ones().map(|index| index as ColorId).collect()
    }
}

impl fmt::Display for ColorIdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorIdSet({} ids: {:?})", self.count(), self.to_vec())
    }
}
