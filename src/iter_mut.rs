use core::iter::FusedIterator;
use core::{fmt, mem, slice};

/// A mutable iterator over the elements of a [`CircularDeque`](crate::CircularDeque).
///
/// This `struct` is created by the [`iter_mut`](crate::CircularDeque::iter_mut)
/// method.
pub struct IterMut<'a, T> {
  i1: slice::IterMut<'a, Option<T>>,
  i2: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> IterMut<'a, T> {
  pub(super) fn new(i1: slice::IterMut<'a, Option<T>>, i2: slice::IterMut<'a, Option<T>>) -> Self {
    Self { i1, i2 }
  }
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let remaining = self.i1.as_slice().iter().chain(self.i2.as_slice());
    f.debug_list()
      .entries(remaining.filter_map(Option::as_ref))
      .finish()
  }
}

impl<T> Default for IterMut<'_, T> {
  fn default() -> Self {
    IterMut {
      i1: Default::default(),
      i2: Default::default(),
    }
  }
}

impl<'a, T> Iterator for IterMut<'a, T> {
  type Item = &'a mut T;

  #[inline]
  fn next(&mut self) -> Option<&'a mut T> {
    match self.i1.next() {
      Some(slot) => slot.as_mut(),
      None => {
        mem::swap(&mut self.i1, &mut self.i2);
        self.i1.next().and_then(Option::as_mut)
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
    let accum = self.i1.filter_map(Option::as_mut).fold(accum, &mut f);
    self.i2.filter_map(Option::as_mut).fold(accum, &mut f)
  }

  #[inline]
  fn last(mut self) -> Option<&'a mut T> {
    self.next_back()
  }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
  #[inline]
  fn next_back(&mut self) -> Option<&'a mut T> {
    match self.i2.next_back() {
      Some(slot) => slot.as_mut(),
      None => {
        mem::swap(&mut self.i1, &mut self.i2);
        self.i2.next_back().and_then(Option::as_mut)
      }
    }
  }

  fn rfold<Acc, F>(self, accum: Acc, mut f: F) -> Acc
  where
    F: FnMut(Acc, Self::Item) -> Acc,
  {
    let accum = self.i2.filter_map(Option::as_mut).rfold(accum, &mut f);
    self.i1.filter_map(Option::as_mut).rfold(accum, &mut f)
  }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
  fn len(&self) -> usize {
    self.i1.len() + self.i2.len()
  }
}

impl<T> FusedIterator for IterMut<'_, T> {}
