//! Fixed-length slot buffers backing [`CircularDeque`](crate::CircularDeque).
//!
//! A [`Slots`] block never changes length; growing a deque means moving its
//! contents into a new, larger block with [`Slots::realigned`].

use alloc::boxed::Box;
use alloc::vec::Vec;

/// The number of slots in a freshly constructed or cleared deque.
pub const MIN_CAPACITY: usize = 2;

#[inline(never)]
#[cold]
#[track_caller]
pub(crate) fn empty_deque(op: &str) -> ! {
    panic!("called `{}` on an empty deque", op)
}

#[inline(never)]
#[cold]
#[track_caller]
pub(crate) fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {} but the index is {}", len, index)
}

#[inline(never)]
#[cold]
#[track_caller]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

/// A contiguous block of optional element slots with a constant length.
pub(crate) struct Slots<T> {
    slots: Box<[Option<T>]>,
}

impl<T> Slots<T> {
    /// Allocates a block of `capacity` empty slots.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Slots {
            slots: slots.into_boxed_slice(),
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.slots[index].as_ref()
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots[index].as_mut()
    }

    /// Stores `value` in the slot at `index`, which must be empty.
    #[inline]
    pub(crate) fn put(&mut self, index: usize, value: T) {
        debug_assert!(self.slots[index].is_none(), "overwriting an occupied slot");
        self.slots[index] = Some(value);
    }

    /// Moves the value out of the slot at `index`, leaving it empty.
    #[inline]
    pub(crate) fn take(&mut self, index: usize) -> Option<T> {
        self.slots[index].take()
    }

    /// Moves every slot into a new block of `capacity` slots, so that the
    /// slot at `head` lands at index 0.
    ///
    /// Slots `[head, old_capacity)` are moved first, followed by `[0, head)`.
    /// A window that wrapped around the end of `self` is therefore contiguous
    /// in the result. `self` is left with only empty slots.
    pub(crate) fn realigned(&mut self, head: usize, capacity: usize) -> Self {
        debug_assert!(capacity >= self.capacity());
        debug_assert!(head < self.capacity() || self.capacity() == 0);

        let mut result = Self::with_capacity(capacity);
        let (wrapped, front) = self.slots.split_at_mut(head);
        let moved = front.iter_mut().chain(wrapped.iter_mut());
        for (dst, src) in result.slots.iter_mut().zip(moved) {
            *dst = src.take();
        }

        result
    }
}
