//! Differential tests: random operation sequences applied to both a
//! `CircularDeque` and a `VecDeque` must leave both holding the same sequence.

use std::collections::VecDeque;

use circular_deque::{CircularDeque, Error};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn check_against_model(seed: u64, initial_capacity: usize, steps: usize) {
  let mut rng = StdRng::seed_from_u64(seed);
  let mut deque = CircularDeque::with_capacity(initial_capacity);
  let mut model = VecDeque::new();

  for step in 0..steps {
    let value: u32 = rng.random();
    let len = model.len();
    match rng.random_range(0..9) {
      0 => {
        deque.push_back(value);
        model.push_back(value);
      }
      1 => {
        deque.push_front(value);
        model.push_front(value);
      }
      2 => assert_eq!(deque.pop_back(), model.pop_back(), "step {step}"),
      3 => assert_eq!(deque.pop_front(), model.pop_front(), "step {step}"),
      4 => {
        let pos = rng.random_range(0..=len + 1);
        let result = deque.insert(pos, value);
        if pos <= len {
          assert_eq!(result, Ok(()));
          model.insert(pos, value);
        } else {
          assert_eq!(result, Err(Error::OutOfRange { index: pos, len }));
        }
      }
      5 => {
        let pos = rng.random_range(0..=len);
        let result = deque.erase(pos);
        if pos < len {
          assert_eq!(result, Ok(()));
          model.remove(pos);
        } else {
          assert!(result.is_err());
        }
      }
      6 => {
        let first = rng.random_range(0..=len);
        let last = rng.random_range(0..=len + 1);
        let result = deque.erase_range(first, last);
        if last > len {
          assert!(result.is_err());
        } else {
          assert_eq!(result, Ok(()));
          if first < last {
            model.drain(first..last);
          }
        }
      }
      7 => {
        let pos = rng.random_range(0..=len);
        assert_eq!(deque.get(pos), model.get(pos), "step {step}");
      }
      _ => {
        assert_eq!(deque.front(), model.front());
        assert_eq!(deque.back(), model.back());
      }
    }

    assert_eq!(deque.len(), model.len(), "step {step}");
    assert!(deque.capacity() >= 1);
    assert!(deque.capacity() >= deque.len());
    assert!(deque.iter().eq(model.iter()), "step {step}: {deque:?} vs {model:?}");
  }

  assert!(deque.into_iter().eq(model));
}

#[test]
fn matches_vec_deque_from_capacity_one() {
  for seed in 0..32 {
    check_against_model(seed, 1, 400);
  }
}

#[test]
fn matches_vec_deque_from_larger_capacity() {
  for seed in 100..116 {
    check_against_model(seed, 37, 1_000);
  }
}

#[test]
fn insert_then_erase_restores_random_sequences() {
  let mut rng = StdRng::seed_from_u64(7);
  for _ in 0..200 {
    let len = rng.random_range(0..40);
    let mut deque: CircularDeque<u16> = (0..len).collect();
    // rotate so the contents wrap at a random offset
    for _ in 0..rng.random_range(0..len.max(1)) {
      let front = deque.pop_front();
      deque.extend(front);
    }
    let before = deque.clone();
    let pos = rng.random_range(0..=deque.len());
    deque.insert(pos, u16::MAX).unwrap();
    assert_eq!(deque.get(pos), Some(&u16::MAX));
    deque.erase(pos).unwrap();
    assert_eq!(deque, before);
  }
}
