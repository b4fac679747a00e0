use super::handle::Handle;

/// Cardinality of a subtree, including the subtree's own root node.
///
/// Backed by a `Handle` so the two share a range: a tree can never hold more
/// nodes than the arena can address.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Size(Handle);

impl Size {
    pub(crate) const MAX: usize = Handle::MAX;
    pub(crate) const ONE: Self = Self::from_usize(1);

    #[inline]
    pub(crate) const fn from_usize(size: usize) -> Self {
        assert!(size <= Self::MAX, "`Size::from_usize()` - `size` > `Size::MAX`!");
        Self(Handle::from_index(size))
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0.to_index()
    }

    /// Increments the size by one. Used on every node visited by an insertion
    /// descent, so the whole path stays exact without a recomputation pass.
    #[inline]
    pub(crate) const fn increment(&mut self) {
        *self = Self::from_usize(self.to_usize() + 1);
    }
}
