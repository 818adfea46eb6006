use core::iter::FusedIterator;
use core::{fmt, mem, slice};

/// An iterator over the elements of a [`CircularDeque`](crate::CircularDeque).
///
/// This `struct` is created by the [`iter`](crate::CircularDeque::iter)
/// method. It walks the occupied run of slots starting at the front element,
/// then the run that wrapped around to the start of the buffer.
pub struct Iter<'a, T> {
  i1: slice::Iter<'a, Option<T>>,
  i2: slice::Iter<'a, Option<T>>,
}

impl<T> Clone for Iter<'_, T> {
  fn clone(&self) -> Self {
    Self {
      i1: self.i1.clone(),
      i2: self.i2.clone(),
    }
  }
}

impl<'a, T> Iter<'a, T> {
  pub(super) const fn new(i1: slice::Iter<'a, Option<T>>, i2: slice::Iter<'a, Option<T>>) -> Self {
    Self { i1, i2 }
  }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.clone()).finish()
  }
}

impl<T> Default for Iter<'_, T> {
  /// Creates an empty iterator.
  ///
  /// ```
  /// use circular_deque::Iter;
  ///
  /// let iter: Iter<'_, u8> = Default::default();
  /// assert_eq!(iter.len(), 0);
  /// ```
  fn default() -> Self {
    Iter {
      i1: Default::default(),
      i2: Default::default(),
    }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline]
  fn next(&mut self) -> Option<&'a T> {
    match self.i1.next() {
      Some(slot) => slot.as_ref(),
      None => {
        // once the front run is exhausted, swap the runs so later calls
        // take the first branch again
        mem::swap(&mut self.i1, &mut self.i2);
        self.i1.next().and_then(Option::as_ref)
      }
    }
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.len();
    (len, Some(len))
  }

  fn fold<Acc, F>(self, accum: Acc, mut f: F) -> Acc
  where
    F: FnMut(Acc, Self::Item) -> Acc,
  {
    let accum = self.i1.filter_map(Option::as_ref).fold(accum, &mut f);
    self.i2.filter_map(Option::as_ref).fold(accum, &mut f)
  }

  #[inline]
  fn last(mut self) -> Option<&'a T> {
    self.next_back()
  }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
  #[inline]
  fn next_back(&mut self) -> Option<&'a T> {
    match self.i2.next_back() {
      Some(slot) => slot.as_ref(),
      None => {
        mem::swap(&mut self.i1, &mut self.i2);
        self.i2.next_back().and_then(Option::as_ref)
      }
    }
  }

  fn rfold<Acc, F>(self, accum: Acc, mut f: F) -> Acc
  where
    F: FnMut(Acc, Self::Item) -> Acc,
  {
    let accum = self.i2.filter_map(Option::as_ref).rfold(accum, &mut f);
    self.i1.filter_map(Option::as_ref).rfold(accum, &mut f)
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
  fn len(&self) -> usize {
    self.i1.len() + self.i2.len()
  }
}

impl<T> FusedIterator for Iter<'_, T> {}
