use core::{fmt, iter::FusedIterator};

use super::CircularDeque;

/// An owning iterator over the elements of a [`CircularDeque`].
///
/// This `struct` is created by the [`into_iter`] method on [`CircularDeque`]
/// (provided by the [`IntoIterator`] trait). Elements are taken out of the
/// buffer one by one; the buffer itself is never reallocated while iterating.
///
/// [`into_iter`]: CircularDeque::into_iter
pub struct IntoIter<T> {
  inner: CircularDeque<T>,
}

impl<T: Clone> Clone for IntoIter<T> {
  fn clone(&self) -> Self {
    Self {
      inner: self.inner.clone(),
    }
  }
}

impl<T> IntoIter<T> {
  pub(super) fn new(inner: CircularDeque<T>) -> Self {
    IntoIter { inner }
  }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("IntoIter").field(&self.inner).finish()
  }
}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  #[inline]
  fn next(&mut self) -> Option<T> {
    self.inner.take_front()
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.inner.len();
    (len, Some(len))
  }

  #[inline]
  fn count(self) -> usize {
    self.inner.len()
  }

  #[inline]
  fn last(mut self) -> Option<Self::Item> {
    self.inner.take_back()
  }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
  #[inline]
  fn next_back(&mut self) -> Option<T> {
    self.inner.take_back()
  }
}

impl<T> ExactSizeIterator for IntoIter<T> {
  #[inline]
  fn len(&self) -> usize {
    self.inner.len()
  }
}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
  use super::IntoIter;
  use crate::CircularDeque;

  #[test]
  fn iterator_behaves_like_queue() {
    let mut deque = CircularDeque::with_capacity(8);
    for value in 0..5 {
      deque.push_back(value);
    }

    let mut iter = IntoIter::new(deque.clone());
    assert_eq!(iter.size_hint(), (5, Some(5)));
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.last(), Some(3));

    let count = deque.into_iter().count();
    assert_eq!(count, 5);
  }

  #[test]
  fn draining_does_not_reallocate() {
    let deque: CircularDeque<_> = (0..16).collect();
    let capacity = deque.capacity();
    let mut iter = deque.into_iter();
    for expected in 0..12 {
      assert_eq!(iter.next(), Some(expected));
    }
    assert_eq!(iter.inner.capacity(), capacity);
    assert_eq!(iter.rev().collect::<std::vec::Vec<_>>(), [15, 14, 13, 12]);
  }

  #[test]
  fn follows_wrapped_layout() {
    let mut deque = CircularDeque::with_capacity(4);
    deque.push_back(2);
    deque.push_back(3);
    deque.push_front(1);
    deque.push_front(0);
    assert_eq!(deque.capacity(), 4);

    let mut iter = deque.into_iter();
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
  }
}
