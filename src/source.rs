use std::collections::BTreeMap;

use crate::coerce::to_length;

/// Specialized `Result` type for source coercion.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Read-only view of an indexed collection with a length.
///
/// `has` is an existence check, not a truthiness check: an index can hold a
/// stored element that merely looks empty (a `None` when `Item = Option<U>`,
/// say) and still be present. `get` must return `Some` for every index where
/// `has` is true. All access goes through `&self`; implementations never
/// mutate the collection.
pub trait ArrayLike {
    type Item;

    /// Number of indexed positions, i.e. the bound of `0..len()`.
    fn len(&self) -> usize;

    /// Whether a value is stored at `index`.
    fn has(&self, index: usize) -> bool;

    /// The value stored at `index`, if any.
    fn get(&self, index: usize) -> Option<Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Errors that can occur when coercing a value into an array-like source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Returned when there is no source at all: slicing needs an array-like
    /// value and nothing was supplied.
    #[error("Cannot make an array-like source from a missing value")]
    Missing,
}

/// Coerces an optional value into an array-like source, failing with
/// [`SourceError::Missing`] when the value is absent. Anything that is
/// actually present passes through untouched.
pub fn require_source<S: ArrayLike + ?Sized>(value: Option<&S>) -> Result<&S> {
    value.ok_or(SourceError::Missing)
}

impl<T: Clone> ArrayLike for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn has(&self, index: usize) -> bool {
        index < <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<T> {
        <[T]>::get(self, index).cloned()
    }
}

impl<T: Clone, const N: usize> ArrayLike for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn has(&self, index: usize) -> bool {
        index < N
    }

    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }
}

impl<T: Clone> ArrayLike for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn has(&self, index: usize) -> bool {
        index < self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }
}

/// Strings are array-like by `char` position.
///
/// Every access walks the UTF-8 from the front, so per-index cost is linear in
/// the index. No position is ever a hole.
impl ArrayLike for str {
    type Item = char;

    fn len(&self) -> usize {
        self.chars().count()
    }

    fn has(&self, index: usize) -> bool {
        self.chars().nth(index).is_some()
    }

    fn get(&self, index: usize) -> Option<char> {
        self.chars().nth(index)
    }
}

impl ArrayLike for String {
    type Item = char;

    fn len(&self) -> usize {
        ArrayLike::len(self.as_str())
    }

    fn has(&self, index: usize) -> bool {
        ArrayLike::has(self.as_str(), index)
    }

    fn get(&self, index: usize) -> Option<char> {
        ArrayLike::get(self.as_str(), index)
    }
}

/// A key-indexed pseudo-collection: numeric keys plus an explicit length.
///
/// The analogue of a plain map that merely claims to be a sequence. Entries
/// may sit at any index, holes are simply absent keys, and `len()` is whatever
/// raw length the collection claims (coerced through
/// [`to_length`](crate::coerce::to_length)) regardless of where entries
/// actually live. Entries at or beyond the claimed length exist but are
/// invisible to anything that iterates `0..len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseSource<T> {
    entries: BTreeMap<usize, T>,
    length: usize,
}

impl<T> SparseSource<T> {
    /// Creates an empty source claiming the given raw length. The length is
    /// coerced, so negative and NaN claims become 0.
    pub fn new(raw_length: f64) -> Self {
        let length = usize::try_from(to_length(raw_length)).unwrap_or(usize::MAX);
        Self {
            entries: BTreeMap::new(),
            length,
        }
    }

    /// Creates a source with the given raw length and initial entries.
    pub fn from_entries(raw_length: f64, entries: impl IntoIterator<Item = (usize, T)>) -> Self {
        let mut source = Self::new(raw_length);
        source.entries.extend(entries);
        source
    }

    /// Stores `value` at `index`, returning any previous value. The claimed
    /// length does not change.
    pub fn insert(&mut self, index: usize, value: T) -> Option<T> {
        self.entries.insert(index, value)
    }
}

impl<T: Clone> ArrayLike for SparseSource<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.length
    }

    fn has(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    fn get(&self, index: usize) -> Option<T> {
        self.entries.get(&index).cloned()
    }
}
