//! A double-ended queue implemented with a growable ring buffer.
//!
//! [`CircularDeque`] offers queue operations ([`enqueue`](CircularDeque::enqueue),
//! [`dequeue`](CircularDeque::dequeue), [`element`](CircularDeque::element))
//! and stack operations ([`push`](CircularDeque::push),
//! [`remove`](CircularDeque::remove), [`peek`](CircularDeque::peek)) on the
//! same storage. All of them are O(1), amortized over the occasional doubling
//! of the buffer; searching with [`index_of`](CircularDeque::index_of) and
//! [`last_index_of`](CircularDeque::last_index_of) is O(n).

use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use crate::storage::{capacity_overflow, empty_deque, index_out_of_bounds, Slots, MIN_CAPACITY};

/// A double-ended queue implemented with a growable ring buffer.
///
/// Elements are addressed by their *logical position*: index 0 is the front,
/// `len() - 1` is the back. The stack operations are deliberately split
/// across both ends: [`push`](CircularDeque::push) inserts at the front,
/// while [`peek`](CircularDeque::peek) and [`remove`](CircularDeque::remove)
/// act on the back. The queue operations insert at the back and take from the
/// front.
///
/// The capacity starts at 2 and doubles whenever an insertion would exceed
/// it; it never shrinks, except when the deque is [cleared](CircularDeque::clear).
///
/// # Examples
/// ```
/// use circdeque::CircularDeque;
///
/// let mut deque = CircularDeque::new();
/// deque.enqueue('b');
/// deque.enqueue('c');
/// deque.push('a');
/// assert_eq!(deque, ['a', 'b', 'c']);
///
/// assert_eq!(deque.dequeue(), 'a');
/// assert_eq!(deque.remove(), 'c');
/// assert_eq!(deque.len(), 1);
/// ```
pub struct CircularDeque<T> {
    head: usize,
    len: usize,
    buf: Slots<T>,
}

impl<T> CircularDeque<T> {
    /// Constructs an empty deque with the minimum capacity.
    ///
    /// # Examples
    /// ```
    /// let deque = circdeque::CircularDeque::<u32>::new();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 2);
    /// ```
    pub fn new() -> Self {
        CircularDeque {
            head: 0,
            len: 0,
            buf: Slots::with_capacity(MIN_CAPACITY),
        }
    }

    /// Returns the number of elements the deque can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of elements currently in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` exactly when the deque contains zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maps a logical offset from the front to a physical slot index.
    ///
    /// Negative offsets wrap around to the end of the buffer, so `-1` names
    /// the slot just before the front.
    #[inline(always)]
    fn resolve(&self, offset: isize) -> usize {
        let cap = self.capacity();
        let shift = offset.unsigned_abs() % cap;
        if offset < 0 {
            (self.head + cap - shift) % cap
        } else {
            (self.head + shift) % cap
        }
    }

    fn ensure_capacity(&mut self, required: usize) {
        let old_capacity = self.capacity();
        if required <= old_capacity {
            return;
        }

        let mut new_capacity = old_capacity;
        while new_capacity < required {
            new_capacity = new_capacity
                .checked_mul(2)
                .unwrap_or_else(|| capacity_overflow());
        }

        self.buf = self.buf.realigned(self.head, new_capacity);
        self.head = 0;
    }

    /// Returns a reference to the element at the given logical position, or
    /// [`None`] if the index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// let mut deque = circdeque::CircularDeque::new();
    /// deque.enqueue(2);
    /// deque.push(1);
    /// assert_eq!(deque.get(0), Some(&1));
    /// assert_eq!(deque.get(1), Some(&2));
    /// assert_eq!(deque.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        self.buf.get(self.resolve(index as isize))
    }

    /// Returns a mutable reference to the element at the given logical
    /// position, or [`None`] if the index is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }

        let slot = self.resolve(index as isize);
        self.buf.get_mut(slot)
    }

    /// Prepends an element, making it the new front of the deque.
    ///
    /// The previous elements each move one logical position towards the back;
    /// no data is moved in memory unless the buffer has to grow.
    ///
    /// # Examples
    /// ```
    /// let mut deque = circdeque::CircularDeque::new();
    /// deque.push(1);
    /// deque.push(2);
    /// deque.push(3);
    /// assert_eq!(deque, [3, 2, 1]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.ensure_capacity(self.len + 1);
        let front = self.resolve(-1);
        self.buf.put(front, value);
        self.head = front;
        self.len += 1;
    }

    /// Returns a reference to the back element, or [`None`] if the deque is
    /// empty.
    #[inline]
    pub fn try_peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        self.buf.get(self.resolve(self.len as isize - 1))
    }

    /// Returns a reference to the back element.
    ///
    /// Note that this is the end opposite to the one [`push`](CircularDeque::push)
    /// inserts at.
    ///
    /// # Panics
    /// Panics if the deque is empty. See [`try_peek`](CircularDeque::try_peek)
    /// for a checked variant that never panics.
    ///
    /// # Examples
    /// ```
    /// let mut deque = circdeque::CircularDeque::new();
    /// deque.push('b');
    /// deque.push('a');
    /// assert_eq!(deque.peek(), &'b');
    /// assert_eq!(deque.len(), 2);
    /// ```
    #[track_caller]
    pub fn peek(&self) -> &T {
        match self.try_peek() {
            Some(back) => back,
            None => empty_deque("peek"),
        }
    }

    /// Removes the back element and returns it, or [`None`] if the deque is
    /// empty.
    ///
    /// # Examples
    /// ```
    /// let mut deque = circdeque::CircularDeque::new();
    /// deque.enqueue(1);
    /// deque.enqueue(3);
    /// assert_eq!(deque.try_remove(), Some(3));
    /// assert_eq!(deque.try_remove(), Some(1));
    /// assert_eq!(deque.try_remove(), None);
    /// ```
    pub fn try_remove(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let back = self.resolve(self.len as isize - 1);
        let result = self.buf.take(back);
        debug_assert!(result.is_some());
        self.len -= 1;

        result
    }

    /// Removes the back element and returns it.
    ///
    /// # Panics
    /// Panics if the deque is empty. See [`try_remove`](CircularDeque::try_remove)
    /// for a checked variant that never panics.
    #[track_caller]
    pub fn remove(&mut self) -> T {
        match self.try_remove() {
            Some(back) => back,
            None => empty_deque("remove"),
        }
    }

    /// Appends an element, making it the new back of the deque.
    ///
    /// # Examples
    /// ```
    /// let mut deque = circdeque::CircularDeque::new();
    /// deque.enqueue(1);
    /// deque.enqueue(2);
    /// deque.enqueue(3);
    /// assert_eq!(deque, [1, 2, 3]);
    /// assert_eq!(deque.capacity(), 4);
    /// ```
    pub fn enqueue(&mut self, value: T) {
        self.ensure_capacity(self.len + 1);
        let end = self.resolve(self.len as isize);
        self.buf.put(end, value);
        self.len += 1;
    }

    /// Returns a reference to the front element, or [`None`] if the deque is
    /// empty.
    #[inline]
    pub fn try_element(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        self.buf.get(self.head)
    }

    /// Returns a reference to the front element.
    ///
    /// # Panics
    /// Panics if the deque is empty. See [`try_element`](CircularDeque::try_element)
    /// for a checked variant that never panics.
    #[track_caller]
    pub fn element(&self) -> &T {
        match self.try_element() {
            Some(front) => front,
            None => empty_deque("element"),
        }
    }

    /// Removes the front element and returns it, or [`None`] if the deque is
    /// empty.
    ///
    /// # Examples
    /// ```
    /// let mut deque = circdeque::CircularDeque::new();
    /// deque.enqueue(1);
    /// deque.enqueue(2);
    /// assert_eq!(deque.try_dequeue(), Some(1));
    /// assert_eq!(deque.try_dequeue(), Some(2));
    /// assert_eq!(deque.try_dequeue(), None);
    /// ```
    pub fn try_dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let result = self.buf.take(self.head);
        debug_assert!(result.is_some());
        self.head = self.resolve(1);
        self.len -= 1;

        result
    }

    /// Removes the front element and returns it.
    ///
    /// # Panics
    /// Panics if the deque is empty. See [`try_dequeue`](CircularDeque::try_dequeue)
    /// for a checked variant that never panics.
    #[track_caller]
    pub fn dequeue(&mut self) -> T {
        match self.try_dequeue() {
            Some(front) => front,
            None => empty_deque("dequeue"),
        }
    }

    /// Returns the logical position of the first element equal to `x`,
    /// or [`None`] if there is no such element.
    ///
    /// # Examples
    /// ```
    /// let mut deque = circdeque::CircularDeque::<char>::new();
    /// deque.extend(['a', 'b', 'a', 'c'].iter());
    /// assert_eq!(deque.index_of(&'a'), Some(0));
    /// assert_eq!(deque.index_of(&'c'), Some(3));
    /// assert_eq!(deque.index_of(&'z'), None);
    /// ```
    pub fn index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        (0..self.len).find(|&i| self.get(i) == Some(x))
    }

    /// Returns the logical position of the last element equal to `x`,
    /// or [`None`] if there is no such element.
    ///
    /// # Examples
    /// ```
    /// let mut deque = circdeque::CircularDeque::<char>::new();
    /// deque.extend(['a', 'b', 'a', 'c'].iter());
    /// assert_eq!(deque.last_index_of(&'a'), Some(2));
    /// assert_eq!(deque.last_index_of(&'b'), Some(1));
    /// assert_eq!(deque.last_index_of(&'z'), None);
    /// ```
    pub fn last_index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        (0..self.len).rev().find(|&i| self.get(i) == Some(x))
    }

    /// Returns `true` if the deque contains an element equal to the given value.
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(x).is_some()
    }

    /// Clears the deque, dropping all values and releasing the buffer.
    ///
    /// Afterwards, the deque is indistinguishable from one returned by
    /// [`new`](CircularDeque::new).
    ///
    /// # Examples
    /// ```
    /// let mut deque = circdeque::CircularDeque::new();
    /// deque.extend(0..10);
    /// assert_eq!(deque.capacity(), 16);
    ///
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 2);
    /// ```
    pub fn clear(&mut self) {
        self.buf = Slots::with_capacity(MIN_CAPACITY);
        self.head = 0;
        self.len = 0;
    }
}

impl<T> Default for CircularDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for CircularDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.len).filter_map(|i| self.get(i)))
            .finish()
    }
}

impl<T: Clone> Clone for CircularDeque<T> {
    fn clone(&self) -> Self {
        let mut buf = Slots::with_capacity(self.capacity());
        for i in 0..self.len {
            if let Some(value) = self.get(i) {
                buf.put(i, value.clone());
            }
        }

        CircularDeque {
            head: 0,
            len: self.len,
            buf,
        }
    }
}

impl<T: PartialEq> PartialEq for CircularDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && (0..self.len).all(|i| self.get(i) == other.get(i))
    }
}

impl<T: Eq> Eq for CircularDeque<T> {}

impl<T: PartialEq, R: AsRef<[T]>> PartialEq<R> for CircularDeque<T> {
    fn eq(&self, other: &R) -> bool {
        let other = other.as_ref();
        self.len == other.len() && other.iter().enumerate().all(|(i, x)| self.get(i) == Some(x))
    }
}

impl<T: Hash> Hash for CircularDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for i in 0..self.len {
            self.get(i).hash(state);
        }
    }
}

impl<T> Index<usize> for CircularDeque<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => index_out_of_bounds(index, self.len),
        }
    }
}

impl<T> IndexMut<usize> for CircularDeque<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => index_out_of_bounds(index, len),
        }
    }
}

impl<T> Extend<T> for CircularDeque<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        iter.into_iter().for_each(|item| self.enqueue(item));
    }
}

impl<'a, T: 'a + Clone> Extend<&'a T> for CircularDeque<T> {
    fn extend<It: IntoIterator<Item = &'a T>>(&mut self, iter: It) {
        iter.into_iter().for_each(|item| self.enqueue(item.clone()));
    }
}
