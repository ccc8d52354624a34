use super::handle::{Handle, RawHandle};

/// Node count of one child subtree.
///
/// A subtree can never hold more nodes than the arena has slots, so the counter shares the
/// handle's raw width.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub(crate) struct Size(RawHandle);

impl Size {
    pub(crate) const MAX: usize = Handle::MAX + 1;
    pub(crate) const ZERO: Self = Self(0);
    pub(crate) const ONE: Self = Self(1);

    #[inline]
    pub(crate) const fn from_usize(size: usize) -> Self {
        assert!(size <= Self::MAX, "`Size::from_usize()` - `size` > `Size::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        Self(size as RawHandle)
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub(crate) const fn increment(self) -> Self {
        Self::from_usize(self.to_usize() + 1)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn decrement(self) -> Self {
        assert!(self.0 > 0, "`Size::decrement()` - size is already zero!");
        Self(self.0 - 1)
    }

    /// The weight-balance trigger: `true` when `self > 2 * other + 1`.
    #[inline]
    pub(crate) const fn outweighs(self, other: Self) -> bool {
        self.to_usize() > 2 * other.to_usize() + 1
    }
}
