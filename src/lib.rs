pub mod coerce;
pub mod sequence;
pub mod slice;
pub mod source;

pub use sequence::Sequence;
pub use slice::{SliceError, slice};
pub use source::{ArrayLike, SourceError, SparseSource};
