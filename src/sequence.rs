use std::fmt;
use std::iter;
use std::ops::Index;

use crate::source::ArrayLike;

/// An ordered sequence whose positions may be holes.
///
/// The length is dense and fixed at construction (every index in `0..len()`
/// exists as a slot) but individual slots may be empty: `None` marks a hole,
/// which is distinct from a stored element that merely looks empty. This is
/// the result type of [`slice`](crate::slice::slice) and preserves the
/// sparseness of whatever it was copied from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence<T> {
    slots: Vec<Option<T>>,
}

impl<T> Sequence<T> {
    /// Creates a sequence of `len` holes.
    ///
    /// The full allocation happens up front: positions that are never written
    /// stay holes rather than shrinking the sequence.
    pub fn with_len(len: usize) -> Self {
        Self {
            slots: iter::repeat_with(|| None).take(len).collect(),
        }
    }

    /// Number of slots, holes included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Stores `value` at `index`, filling a hole or replacing an element.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; a sequence never grows.
    pub fn set(&mut self, index: usize, value: T) {
        self.slots[index] = Some(value);
    }

    /// The element at `index`, or `None` when the slot is a hole or out of
    /// bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Whether `index` holds an element. Existence, not truthiness: a stored
    /// empty-looking element still counts.
    pub fn has(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    /// Iterates every slot in order, holes included.
    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// Iterates only the present elements, skipping holes.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten()
    }

    /// Consumes the sequence, returning its raw slots.
    pub fn into_slots(self) -> Vec<Option<T>> {
        self.slots
    }
}

impl<T: Default> Sequence<T> {
    /// Materializes the sequence for dense-only consumers, filling each hole
    /// with `T::default()`.
    pub fn into_dense(self) -> Vec<T> {
        self.slots
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    /// Builds a fully dense sequence: every value present, no holes.
    fn from(values: Vec<T>) -> Self {
        Self {
            slots: values.into_iter().map(Some).collect(),
        }
    }
}

impl<T> FromIterator<Option<T>> for Sequence<T> {
    /// Collects slots directly; `None` items become holes.
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = Option<T>;

    fn index(&self, index: usize) -> &Option<T> {
        &self.slots[index]
    }
}

/// Formats the sequence with holes rendered as `<hole>`, e.g. `[3, <hole>, 5]`.
impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(value) => write!(f, "{}", value)?,
                None => write!(f, "<hole>")?,
            }
        }
        write!(f, "]")
    }
}

/// Sequences are themselves array-like, so a slice result can be re-sliced.
impl<T: Clone> ArrayLike for Sequence<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn has(&self, index: usize) -> bool {
        Sequence::has(self, index)
    }

    fn get(&self, index: usize) -> Option<T> {
        Sequence::get(self, index).cloned()
    }
}
