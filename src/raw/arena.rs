use alloc::vec::Vec;

use super::handle::Handle;

/// Dense, insert-only store of tree nodes.
///
/// The tree never removes individual nodes (there is no delete operation), so
/// slots are plain values with no free list: allocation is a push, and the
/// whole structure is torn down by dropping the `Vec` — one flat deallocation,
/// no recursive walk.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<T>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        // Strict less-than: Handle::MAX slots at most, so every slot index is
        // representable as a Handle after the push.
        assert!(
            self.slots.len() < Handle::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Handle::MAX
        );
        self.slots.push(element);
        Handle::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        &self.slots[handle.to_index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        &mut self.slots[handle.to_index()]
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn arena_capacity() {
        let arena: Arena<u32> = Arena::with_capacity(10);
        assert_eq!(arena.capacity(), 10);
        assert!(arena.is_empty());
    }

    proptest! {
        #[test]
        fn arena_behaves_like_vec(values in prop::collection::vec(any::<u32>(), 0..256)) {
            let mut model: Vec<(Handle, u32)> = Vec::new();
            let mut arena: Arena<u32> = Arena::new();

            for value in values {
                let handle = arena.alloc(value);
                model.push((handle, value));

                prop_assert_eq!(arena.len(), model.len());
                for &(h, v) in &model {
                    prop_assert_eq!(*arena.get(h), v);
                }
            }

            for &(handle, value) in &model {
                *arena.get_mut(handle) = value.wrapping_add(1);
                prop_assert_eq!(*arena.get(handle), value.wrapping_add(1));
            }

            arena.clear();
            prop_assert!(arena.is_empty());
            prop_assert_eq!(arena.len(), 0);
        }
    }
}
