#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs, warnings)]

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error!("`circular-deque` needs a heap: enable either the `std` or the `alloc` feature");

#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc as std;

#[cfg(feature = "std")]
extern crate std;

use core::{
  cmp::Ordering,
  fmt,
  hash::{Hash, Hasher},
  iter::repeat_with,
  ops::{Index, IndexMut, Range},
};

#[allow(unused_imports)]
use std::{boxed::Box, vec::Vec};

pub use error::{Error, Result};
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;

mod error;
mod into_iter;
mod iter;
mod iter_mut;
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde;


/// A growable double-ended queue backed by a circular buffer.
///
/// Elements live in a boxed array of slots. The logical element at position
/// `i` is stored at physical slot `(begin + i) % capacity`, so pushing and
/// popping at either end never moves the other elements. Inserting or erasing
/// in the middle shifts whichever side of the position is shorter, which keeps
/// the cost at *O*(min(*k*, *n* - *k*)).
///
/// # Capacity
///
/// The capacity is never zero. It doubles when an insertion finds the deque
/// full, and halves when a removal leaves it less than ~41.6% occupied (see
/// [`GROWTH_FACTOR`](Self::GROWTH_FACTOR) and
/// [`SHRINK_NUMERATOR`](Self::SHRINK_NUMERATOR)). Either way the elements are
/// moved to the start of the new buffer in logical order.
///
/// # Failure conventions
///
/// Reads ([`get`](Self::get), [`front`](Self::front), [`back`](Self::back)) and
/// pops return `None` when there is nothing at the requested position.
/// Structural mutators ([`insert`](Self::insert), [`erase`](Self::erase),
/// [`erase_range`](Self::erase_range)) return an [`Error::OutOfRange`] instead.
///
/// ## Examples
///
/// ```rust
/// use circular_deque::CircularDeque;
///
/// let mut deque = CircularDeque::with_capacity(4);
/// deque.push_back(1);
/// deque.push_back(2);
/// deque.push_back(3);
/// deque.push_front(0);
/// assert_eq!(deque.to_string(), "[0 1 2 3]");
///
/// deque.insert(2, 99).unwrap();
/// assert_eq!(deque.to_string(), "[0 1 99 2 3]");
///
/// deque.erase_range(1, 3).unwrap();
/// assert_eq!(deque.to_string(), "[0 2 3]");
///
/// assert_eq!(deque.pop_back(), Some(3));
/// assert_eq!(deque, [0, 2]);
/// ```
pub struct CircularDeque<T> {
  slots: Box<[Option<T>]>,
  begin: usize,
  end: usize,
  len: usize,
}

impl<T: Clone> Clone for CircularDeque<T> {
  fn clone(&self) -> Self {
    Self {
      slots: self.slots.clone(),
      begin: self.begin,
      end: self.end,
      len: self.len,
    }
  }
}

impl<T> Default for CircularDeque<T> {
  #[cfg_attr(not(tarpaulin), inline(always))]
  fn default() -> Self {
    Self::new()
  }
}

impl<T: fmt::Debug> fmt::Debug for CircularDeque<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

/// Renders the elements front to back, space separated and bracketed: `[0 1 2]`.
impl<T: fmt::Display> fmt::Display for CircularDeque<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    for (i, value) in self.iter().enumerate() {
      if i > 0 {
        f.write_str(" ")?;
      }
      fmt::Display::fmt(value, f)?;
    }
    f.write_str("]")
  }
}

impl<T: PartialEq<U>, U> PartialEq<CircularDeque<U>> for CircularDeque<T> {
  fn eq(&self, other: &CircularDeque<U>) -> bool {
    self.len == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
  }
}

impl<T: Eq> Eq for CircularDeque<T> {}

macro_rules! __impl_slice_eq1 {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &$rhs) -> bool {
                self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
            }
        }
    }
}
__impl_slice_eq1! { [] CircularDeque<T>, Vec<U> }
__impl_slice_eq1! { [] CircularDeque<T>, &[U] }
__impl_slice_eq1! { [] CircularDeque<T>, &mut [U] }
__impl_slice_eq1! { [const N: usize] CircularDeque<T>, [U; N] }
__impl_slice_eq1! { [const N: usize] CircularDeque<T>, &[U; N] }

impl<T: PartialOrd> PartialOrd for CircularDeque<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    self.iter().partial_cmp(other.iter())
  }
}

impl<T: Ord> Ord for CircularDeque<T> {
  #[inline]
  fn cmp(&self, other: &Self) -> Ordering {
    self.iter().cmp(other.iter())
  }
}

impl<T: Hash> Hash for CircularDeque<T> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    state.write_usize(self.len);
    // Two deques holding the same elements may wrap at different physical
    // offsets, so hash element by element rather than slot run by slot run.
    self.iter().for_each(|elem| elem.hash(state));
  }
}

impl<T> Index<usize> for CircularDeque<T> {
  type Output = T;

  #[inline]
  fn index(&self, index: usize) -> &T {
    self.get(index).expect("Out of bounds access")
  }
}

impl<T> IndexMut<usize> for CircularDeque<T> {
  #[inline]
  fn index_mut(&mut self, index: usize) -> &mut T {
    self.get_mut(index).expect("Out of bounds access")
  }
}

impl<T> IntoIterator for CircularDeque<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  /// Consumes the deque into a front-to-back iterator yielding elements by
  /// value.
  fn into_iter(self) -> IntoIter<T> {
    IntoIter::new(self)
  }
}

impl<'a, T> IntoIterator for &'a CircularDeque<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Iter<'a, T> {
    self.iter()
  }
}

impl<'a, T> IntoIterator for &'a mut CircularDeque<T> {
  type Item = &'a mut T;
  type IntoIter = IterMut<'a, T>;

  fn into_iter(self) -> IterMut<'a, T> {
    self.iter_mut()
  }
}

impl<T> Extend<T> for CircularDeque<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    iter.into_iter().for_each(|value| self.push_back(value));
  }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for CircularDeque<T> {
  fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
    self.extend(iter.into_iter().copied());
  }
}

impl<T> FromIterator<T> for CircularDeque<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let iter = iter.into_iter();
    let mut deque = Self::with_capacity(iter.size_hint().0);
    deque.extend(iter);
    deque
  }
}

impl<T> From<Vec<T>> for CircularDeque<T> {
  /// Takes ownership of the vector's elements. The resulting capacity is the
  /// vector's length (at least 1), so the deque starts out full.
  fn from(vec: Vec<T>) -> Self {
    let len = vec.len();
    let capacity = len.max(1);
    let slots: Box<[Option<T>]> = vec
      .into_iter()
      .map(Some)
      .chain(repeat_with(|| None))
      .take(capacity)
      .collect();
    Self {
      slots,
      begin: 0,
      end: wrap_index(len, capacity),
      len,
    }
  }
}

impl<T, const N: usize> From<[T; N]> for CircularDeque<T> {
  fn from(arr: [T; N]) -> Self {
    Self::from(Vec::from(arr))
  }
}

impl<T> From<CircularDeque<T>> for Vec<T> {
  fn from(deque: CircularDeque<T>) -> Self {
    deque.into_iter().collect()
  }
}

impl<T> CircularDeque<T> {
  /// The factor applied to the length when a full deque has to grow.
  pub const GROWTH_FACTOR: usize = 2;

  /// Together with [`SHRINK_DENOMINATOR`](Self::SHRINK_DENOMINATOR), the ratio
  /// `len * 2 * 1.2` that must stay at or above the capacity after a removal.
  /// When `len * SHRINK_NUMERATOR / SHRINK_DENOMINATOR < capacity` the
  /// capacity is halved.
  pub const SHRINK_NUMERATOR: usize = 12;

  /// See [`SHRINK_NUMERATOR`](Self::SHRINK_NUMERATOR).
  pub const SHRINK_DENOMINATOR: usize = 5;

  /// Creates an empty deque with a capacity of one.
  ///
  /// ## Examples
  ///
  /// ```
  /// use circular_deque::CircularDeque;
  ///
  /// let deque: CircularDeque<u32> = CircularDeque::new();
  /// assert!(deque.is_empty());
  /// assert_eq!(deque.capacity(), 1);
  /// ```
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn new() -> Self {
    Self::with_capacity(1)
  }

  /// Creates an empty deque with room for `capacity` elements.
  ///
  /// A requested capacity of zero is bumped to one.
  ///
  /// ## Examples
  ///
  /// ```
  /// use circular_deque::CircularDeque;
  ///
  /// let deque: CircularDeque<u32> = CircularDeque::with_capacity(8);
  /// assert_eq!(deque.capacity(), 8);
  ///
  /// let deque: CircularDeque<u32> = CircularDeque::with_capacity(0);
  /// assert_eq!(deque.capacity(), 1);
  /// ```
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      slots: vacant_slots(capacity.max(1)),
      begin: 0,
      end: 0,
      len: 0,
    }
  }

  /// Returns the number of slots in the backing buffer.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn capacity(&self) -> usize {
    self.slots.len()
  }

  /// Returns the number of elements in the deque.
  ///
  /// ## Examples
  ///
  /// ```
  /// use circular_deque::CircularDeque;
  ///
  /// let mut deque = CircularDeque::new();
  /// assert_eq!(deque.len(), 0);
  /// deque.push_back(1);
  /// assert_eq!(deque.len(), 1);
  /// ```
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` if the deque is empty.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Provides a reference to the front element, or `None` if the deque is
  /// empty.
  ///
  /// ## Examples
  ///
  /// ```
  /// use circular_deque::CircularDeque;
  ///
  /// let mut d = CircularDeque::new();
  /// assert_eq!(d.front(), None);
  ///
  /// d.push_back(1);
  /// d.push_back(2);
  /// assert_eq!(d.front(), Some(&1));
  /// ```
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn front(&self) -> Option<&T> {
    self.get(0)
  }

  /// Provides a mutable reference to the front element, or `None` if the
  /// deque is empty.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn front_mut(&mut self) -> Option<&mut T> {
    self.get_mut(0)
  }

  /// Provides a reference to the back element, or `None` if the deque is
  /// empty.
  ///
  /// ## Examples
  ///
  /// ```
  /// use circular_deque::CircularDeque;
  ///
  /// let mut d = CircularDeque::new();
  /// assert_eq!(d.back(), None);
  ///
  /// d.push_back(1);
  /// d.push_back(2);
  /// assert_eq!(d.back(), Some(&2));
  /// ```
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn back(&self) -> Option<&T> {
    self.get(self.len.wrapping_sub(1))
  }

  /// Provides a mutable reference to the back element, or `None` if the
  /// deque is empty.
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub fn back_mut(&mut self) -> Option<&mut T> {
    self.get_mut(self.len.wrapping_sub(1))
  }

  /// Provides a reference to the element at logical position `pos`, or `None`
  /// if `pos` is not smaller than the length.
  ///
  /// Position 0 is the front of the deque.
  ///
  /// ## Examples
  ///
  /// ```
  /// use circular_deque::CircularDeque;
  ///
  /// let mut deque = CircularDeque::with_capacity(2);
  /// deque.push_back(10);
  /// deque.push_front(5);
  /// assert_eq!(deque.get(0), Some(&5));
  /// assert_eq!(deque.get(1), Some(&10));
  /// assert_eq!(deque.get(2), None);
  /// ```
  #[inline]
  pub fn get(&self, pos: usize) -> Option<&T> {
    if pos < self.len {
      let idx = self.to_physical_idx(pos);
      self.slots[idx].as_ref()
    } else {
      None
    }
  }

  /// Provides a mutable reference to the element at logical position `pos`,
  /// or `None` if `pos` is out of bounds.
  ///
  /// ## Examples
  ///
  /// ```
  /// use circular_deque::CircularDeque;
  ///
  /// let mut deque = CircularDeque::new();
  /// deque.push_back(10);
  /// *deque.get_mut(0).unwrap() += 5;
  /// assert_eq!(deque.get(0), Some(&15));
  /// assert_eq!(deque.get_mut(1), None);
  /// ```
  #[inline]
  pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
    if pos < self.len {
      let idx = self.to_physical_idx(pos);
      self.slots[idx].as_mut()
    } else {
      None
    }
  }

  /// Returns a front-to-back iterator.
  ///
  /// ## Examples
  ///
  /// ```
  /// use circular_deque::CircularDeque;
  ///
  /// let mut buf = CircularDeque::new();
  /// buf.push_back(5);
  /// buf.push_back(3);
  /// buf.push_front(4);
  /// let collected: Vec<&i32> = buf.iter().collect();
  /// assert_eq!(collected, vec![&4, &5, &3]);
  /// ```
  pub fn iter(&self) -> Iter<'_, T> {
    let (a, b) = self.slot_ranges();
    Iter::new(self.slots[a].iter(), self.slots[b].iter())
  }

  /// Returns a front-to-back iterator that returns mutable references.
  ///
  /// ## Examples
  ///
  /// ```
  /// use circular_deque::CircularDeque;
  ///
  /// let mut buf = CircularDeque::new();
  /// buf.push_back(5);
  /// buf.push_back(3);
  /// buf.push_back(4);
  /// for value in buf.iter_mut() {
  ///     *value -= 2;
  /// }
  /// assert_eq!(buf, [3, 1, 2]);
  /// ```
  pub fn iter_mut(&mut self) -> IterMut<'_, T> {
    let (a, b) = self.slot_ranges();
    // `b` always ends at or before `a` starts.
    let (wrapped, head) = self.slots.split_at_mut(a.start);
    IterMut::new(head[..a.len()].iter_mut(), wrapped[b].iter_mut())
  }

  /// Appends an element to the back of the deque, growing the buffer if it
  /// is full.
  ///
  /// ## Examples
  ///
  /// ```
  /// use circular_deque::CircularDeque;
  ///
  /// let mut deque = CircularDeque::with_capacity(1);
  /// deque.push_back(1);
  /// deque.push_back(2);
  /// assert_eq!(deque.capacity(), 2);
  /// assert_eq!(deque.back(), Some(&2));
  /// ```
  pub fn push_back(&mut self, value: T) {
    self.grow_if_needed();
    self.slots[self.end] = Some(value);
    self.end = self.next_index(self.end);
    self.len += 1;
  }

  /// Prepends an element to the front of the deque, growing the buffer if it
  /// is full.
  ///
  /// ## Examples
  ///
  /// ```
  /// use circular_deque::CircularDeque;
  ///
  /// let mut deque = CircularDeque::new();
  /// deque.push_front(1);
  /// deque.push_front(2);
  /// assert_eq!(deque.front(), Some(&2));
  /// ```
  pub fn push_front(&mut self, value: T) {
    self.grow_if_needed();
    self.begin = self.pre_index(self.begin);
    self.slots[self.begin] = Some(value);
    self.len += 1;
  }

  /// Removes the last element and returns it, or `None` if the deque is
  /// empty.
  ///
  /// ## Examples
  ///
  /// ```
  /// use circular_deque::CircularDeque;
  ///
  /// let mut buf = CircularDeque::new();
  /// assert_eq!(buf.pop_back(), None);
  /// buf.push_back(1);
  /// buf.push_back(3);
  /// assert_eq!(buf.pop_back(), Some(3));
  /// ```
  pub fn pop_back(&mut self) -> Option<T> {
    let value = self.take_back()?;
    self.shrink_if_needed();
    Some(value)
  }

  /// Removes the first element and returns it, or `None` if the deque is
  /// empty.
  ///
  /// ## Examples
  ///
  /// ```
  /// use circular_deque::CircularDeque;
  ///
  /// let mut d = CircularDeque::new();
  /// d.push_back(1);
  /// d.push_back(2);
  ///
  /// assert_eq!(d.pop_front(), Some(1));
  /// assert_eq!(d.pop_front(), Some(2));
  /// assert_eq!(d.pop_front(), None);
  /// ```
  pub fn pop_front(&mut self) -> Option<T> {
    let value = self.take_front()?;
    self.shrink_if_needed();
    Some(value)
  }

  /// Inserts an element at logical position `pos`, shifting whichever side
  /// of `pos` holds fewer elements by one slot.
  ///
  /// `pos == len()` appends. Returns [`Error::OutOfRange`] if `pos > len()`,
  /// in which case the deque is left untouched and `value` is dropped.
  ///
  /// ## Examples
  ///
  /// ```
  /// use circular_deque::{CircularDeque, Error};
  ///
  /// let mut deque = CircularDeque::new();
  /// deque.push_back('a');
  /// deque.push_back('b');
  /// deque.push_back('c');
  ///
  /// deque.insert(1, 'd').unwrap();
  /// deque.insert(4, 'e').unwrap();
  /// assert_eq!(deque, ['a', 'd', 'b', 'c', 'e']);
  ///
  /// assert_eq!(deque.insert(6, 'x'), Err(Error::OutOfRange { index: 6, len: 5 }));
  /// ```
  pub fn insert(&mut self, pos: usize, value: T) -> Result<()> {
    if pos > self.len {
      return Err(Error::out_of_range(pos, self.len));
    }
    if pos == 0 {
      self.push_front(value);
      return Ok(());
    }
    if pos == self.len {
      self.push_back(value);
      return Ok(());
    }

    self.grow_if_needed();
    if pos < self.len - pos {
      // Slide the first `pos` elements one slot towards the front.
      let mut idx = self.pre_index(self.begin);
      for _ in 0..pos {
        let src = self.next_index(idx);
        self.relocate(src, idx);
        idx = src;
      }
      self.slots[idx] = Some(value);
      self.begin = self.pre_index(self.begin);
    } else {
      // Slide the last `len - pos` elements one slot towards the back.
      let mut idx = self.end;
      for _ in 0..self.len - pos {
        let src = self.pre_index(idx);
        self.relocate(src, idx);
        idx = src;
      }
      self.slots[idx] = Some(value);
      self.end = self.next_index(self.end);
    }
    self.len += 1;
    Ok(())
  }

  /// Removes the element at logical position `pos`.
  ///
  /// Same as `erase_range(pos, pos + 1)`. Returns [`Error::OutOfRange`] if
  /// `pos >= len()`.
  ///
  /// ## Examples
  ///
  /// ```
  /// use circular_deque::CircularDeque;
  ///
  /// let mut buf = CircularDeque::from(['a', 'b', 'c']);
  /// buf.erase(1).unwrap();
  /// assert_eq!(buf, ['a', 'c']);
  /// assert!(buf.erase(2).is_err());
  /// ```
  pub fn erase(&mut self, pos: usize) -> Result<()> {
    if pos >= self.len {
      return Err(Error::out_of_range(pos, self.len));
    }
    self.erase_range(pos, pos + 1)
  }

  /// Removes the elements in the half-open logical range `[first, last)`.
  ///
  /// Whichever block outside the range is shorter is moved to close the gap,
  /// and the erased elements are dropped. An empty or inverted range
  /// (`first >= last`) does nothing. Returns [`Error::OutOfRange`] if
  /// `last > len()`.
  ///
  /// ## Examples
  ///
  /// ```
  /// use circular_deque::CircularDeque;
  ///
  /// let mut deque: CircularDeque<_> = (0..6).collect();
  /// deque.erase_range(1, 3).unwrap();
  /// assert_eq!(deque, [0, 3, 4, 5]);
  ///
  /// deque.erase_range(3, 1).unwrap();
  /// assert_eq!(deque, [0, 3, 4, 5]);
  ///
  /// assert!(deque.erase_range(2, 5).is_err());
  /// ```
  pub fn erase_range(&mut self, first: usize, last: usize) -> Result<()> {
    if last > self.len {
      return Err(Error::out_of_range(last, self.len));
    }
    if first >= last {
      return Ok(());
    }

    let erase_num = last - first;
    let left_num = first;
    let right_num = self.len - last;

    if left_num <= right_num {
      // Walk backwards so nothing is overwritten before it is read.
      let mut idx = self.to_physical_idx(last - 1);
      for _ in 0..left_num {
        let src = self.wrap_sub(idx, erase_num);
        self.relocate(src, idx);
        idx = self.pre_index(idx);
      }
      self.begin = self.next_index(idx);
      for _ in 0..erase_num {
        self.slots[idx] = None;
        idx = self.pre_index(idx);
      }
    } else {
      let mut idx = self.to_physical_idx(first);
      for _ in 0..right_num {
        let src = self.wrap_add(idx, erase_num);
        self.relocate(src, idx);
        idx = self.next_index(idx);
      }
      self.end = idx;
      for _ in 0..erase_num {
        self.slots[idx] = None;
        idx = self.next_index(idx);
      }
    }

    self.len -= erase_num;
    self.shrink_if_needed();
    Ok(())
  }

  /// Removes all elements, keeping the current capacity.
  ///
  /// ## Examples
  ///
  /// ```
  /// use circular_deque::CircularDeque;
  ///
  /// let mut deque: CircularDeque<_> = (0..4).collect();
  /// let capacity = deque.capacity();
  /// deque.clear();
  /// assert!(deque.is_empty());
  /// assert_eq!(deque.capacity(), capacity);
  /// ```
  pub fn clear(&mut self) {
    let (a, b) = self.slot_ranges();
    self.slots[a].fill_with(|| None);
    self.slots[b].fill_with(|| None);
    self.begin = 0;
    self.end = 0;
    self.len = 0;
  }
}

impl<T> CircularDeque<T> {
  /// Removes the front element without considering a shrink.
  pub(crate) fn take_front(&mut self) -> Option<T> {
    if self.is_empty() {
      return None;
    }
    let idx = self.begin;
    let value = self.slots[idx].take();
    self.begin = self.next_index(idx);
    self.len -= 1;
    value
  }

  /// Removes the back element without considering a shrink.
  pub(crate) fn take_back(&mut self) -> Option<T> {
    if self.is_empty() {
      return None;
    }
    let idx = self.pre_index(self.end);
    let value = self.slots[idx].take();
    self.end = idx;
    self.len -= 1;
    value
  }

  fn grow_if_needed(&mut self) {
    if self.len == self.capacity() {
      let new_capacity = (self.len * Self::GROWTH_FACTOR).max(1);
      self.reallocate(new_capacity);
    }
  }

  fn shrink_if_needed(&mut self) {
    let capacity = self.capacity();
    if capacity > 1 && self.len * Self::SHRINK_NUMERATOR / Self::SHRINK_DENOMINATOR < capacity {
      self.reallocate(capacity / 2);
    }
  }

  /// Moves every element into a fresh buffer of `new_capacity` slots,
  /// front element first.
  fn reallocate(&mut self, new_capacity: usize) {
    debug_assert!(new_capacity >= self.len.max(1));
    let mut slots = vacant_slots(new_capacity);
    for (logical, slot) in slots.iter_mut().enumerate().take(self.len) {
      let physical = self.to_physical_idx(logical);
      *slot = self.slots[physical].take();
    }
    log::trace!(
      "circular deque reallocated: capacity {} -> {} with {} elements",
      self.capacity(),
      new_capacity,
      self.len
    );
    self.slots = slots;
    self.begin = 0;
    // a shrink may leave the new buffer exactly full
    self.end = wrap_index(self.len, new_capacity);
  }

  /// Moves the value in slot `src` into slot `dst`, dropping whatever `dst`
  /// held and leaving `src` vacant.
  #[inline]
  fn relocate(&mut self, src: usize, dst: usize) {
    let value = self.slots[src].take();
    self.slots[dst] = value;
  }

  /// The two runs of physical slots holding the logical elements, front run
  /// first. The second run is empty unless the elements wrap.
  fn slot_ranges(&self) -> (Range<usize>, Range<usize>) {
    let head_len = self.capacity() - self.begin;
    if self.len <= head_len {
      (self.begin..self.begin + self.len, 0..0)
    } else {
      (self.begin..self.capacity(), 0..self.len - head_len)
    }
  }

  #[inline]
  fn next_index(&self, idx: usize) -> usize {
    wrap_index(idx + 1, self.capacity())
  }

  #[inline]
  fn pre_index(&self, idx: usize) -> usize {
    wrap_index(idx + self.capacity() - 1, self.capacity())
  }

  /// Returns the physical index `addend` slots after `idx`.
  #[inline]
  fn wrap_add(&self, idx: usize, addend: usize) -> usize {
    wrap_index(idx + addend, self.capacity())
  }

  /// Returns the physical index `subtrahend` slots before `idx`.
  #[inline]
  fn wrap_sub(&self, idx: usize, subtrahend: usize) -> usize {
    wrap_index(idx + self.capacity() - subtrahend, self.capacity())
  }

  #[inline]
  fn to_physical_idx(&self, pos: usize) -> usize {
    self.wrap_add(self.begin, pos)
  }
}

/// Folds an index that may have run at most one lap past the end back into
/// `0..capacity`.
#[inline]
const fn wrap_index(idx: usize, capacity: usize) -> usize {
  debug_assert!(idx < 2 * capacity);
  if idx >= capacity {
    idx - capacity
  } else {
    idx
  }
}

fn vacant_slots<T>(capacity: usize) -> Box<[Option<T>]> {
  repeat_with(|| None).take(capacity).collect()
}
