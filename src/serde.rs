use core::{fmt, marker::PhantomData};

use serde_core::{
  de::{SeqAccess, Visitor},
  Deserialize, Deserializer, Serialize, Serializer,
};

use super::CircularDeque;

/// Upper bound on the capacity reserved from an untrusted length hint.
const MAX_PREALLOCATED_SLOTS: usize = 4096;

impl<T: Serialize> Serialize for CircularDeque<T> {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_seq(self)
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for CircularDeque<T> {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct SeqVisitor<T> {
      marker: PhantomData<T>,
    }

    impl<'de, T> Visitor<'de> for SeqVisitor<T>
    where
      T: Deserialize<'de>,
    {
      type Value = CircularDeque<T>;

      fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
      }

      #[inline]
      fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
      where
        A: SeqAccess<'de>,
      {
        let hint = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED_SLOTS);
        let mut values = CircularDeque::with_capacity(hint);

        while let Some(value) = seq.next_element()? {
          values.push_back(value);
        }

        Ok(values)
      }
    }

    let visitor = SeqVisitor {
      marker: PhantomData,
    };
    deserializer.deserialize_seq(visitor)
  }

  fn deserialize_in_place<D>(deserializer: D, place: &mut Self) -> Result<(), D::Error>
  where
    D: Deserializer<'de>,
  {
    struct SeqInPlaceVisitor<'a, T>(&'a mut CircularDeque<T>);

    impl<'de, T> Visitor<'de> for SeqInPlaceVisitor<'_, T>
    where
      T: Deserialize<'de>,
    {
      type Value = ();

      fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
      }

      #[inline]
      fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
      where
        A: SeqAccess<'de>,
      {
        self.0.clear();

        while let Some(value) = seq.next_element()? {
          self.0.push_back(value);
        }

        Ok(())
      }
    }

    deserializer.deserialize_seq(SeqInPlaceVisitor(place))
  }
}
