/// Errors returned by the structural mutators of [`CircularDeque`](crate::CircularDeque).
///
/// Reads and pops never fail: they return `None` for positions outside the
/// deque instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
  /// A logical position passed to [`insert`](crate::CircularDeque::insert),
  /// [`erase`](crate::CircularDeque::erase) or
  /// [`erase_range`](crate::CircularDeque::erase_range) lies outside the deque.
  #[error("index {index} out of range for deque of length {len}")]
  OutOfRange {
    /// The offending logical position.
    index: usize,
    /// The length of the deque when the call was made.
    len: usize,
  },
}

impl Error {
  #[cfg_attr(not(tarpaulin), inline(always))]
  pub(crate) const fn out_of_range(index: usize, len: usize) -> Self {
    Self::OutOfRange { index, len }
  }
}

/// `Result` with [`Error`] as the default error type.
pub type Result<T, E = Error> = core::result::Result<T, E>;
