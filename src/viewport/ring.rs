//! Wrap-around slot arithmetic shared by the row ring (size H) and the
//! byte-column ring (size W + 1).
//!
//! `head` and `logical` must both be below `size`; anything else is a caller
//! bug and trips a debug assertion.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Ring {
    size: usize,
}

impl Ring {
    pub(crate) fn new(size: usize) -> Self {
        debug_assert!(size > 0);
        Self { size }
    }

    #[inline]
    pub(crate) fn size(self) -> usize {
        self.size
    }

    /// Physical slot of logical index `logical` for a ring whose head is `head`.
    #[inline]
    pub(crate) fn slot(self, head: usize, logical: usize) -> usize {
        debug_assert!(head < self.size, "ring head {head} >= {}", self.size);
        debug_assert!(logical < self.size, "logical index {logical} >= {}", self.size);
        let s = head + logical;
        if s >= self.size { s - self.size } else { s }
    }

    /// Head after rotating forward one slot.
    #[inline]
    pub(crate) fn advance(self, head: usize) -> usize {
        let h = head + 1;
        if h == self.size { 0 } else { h }
    }

    /// Head after rotating back one slot.
    #[inline]
    pub(crate) fn retreat(self, head: usize) -> usize {
        if head == 0 { self.size - 1 } else { head - 1 }
    }
}
