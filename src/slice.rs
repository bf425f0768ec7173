use crate::coerce::to_integer;
use crate::sequence::Sequence;
use crate::source::{ArrayLike, SourceError, require_source};

/// Specialized `Result` type for slice operations.
pub type Result<T> = std::result::Result<T, SliceError>;

/// Errors that can occur when slicing an array-like source.
///
/// Slicing itself cannot fail: offsets are totally coerced and clamped, so
/// the only failure is being handed no source at all.
#[derive(Debug, thiserror::Error)]
pub enum SliceError {
    /// Returned when the source argument is absent and there is nothing to
    /// slice.
    #[error("Invalid source")]
    InvalidSource(#[from] SourceError),
}

/// Normalizes a signed offset against `length`.
///
/// Negative offsets count back from the end and floor at 0; non-negative
/// offsets cap at `length`. The result always lies in `0..=length`.
fn clamp_offset(offset: i64, length: usize) -> usize {
    if offset < 0 {
        let from_end = usize::try_from(offset.unsigned_abs()).unwrap_or(usize::MAX);
        length.saturating_sub(from_end)
    } else {
        usize::try_from(offset).unwrap_or(usize::MAX).min(length)
    }
}

/// Returns a shallow copy of a portion of an array-like source as a new
/// [`Sequence`], selected from `start` up to but not including `end`. The
/// source is never modified.
///
/// # Arguments
///
/// - `source`: The array-like value to slice. Fails with
///   [`SliceError::InvalidSource`] when absent.
/// - `start`: Zero-based offset at which to begin extraction. A negative
///   offset counts from the end of the sequence, so a `start` of -2 extracts
///   the last two elements. Missing, NaN, and fractional values are coerced
///   (missing/NaN become 0). Offsets beyond the length clamp silently.
/// - `end`: Zero-based offset before which to end extraction; the element at
///   `end` itself is not included. Negative offsets count from the end.
///   When missing, extraction runs through the end of the source. An `end`
///   at or below `start` after normalization yields an empty sequence.
///
/// Holes in the source stay holes in the result: presence at each index is
/// decided by [`ArrayLike::has`], an existence check, so a stored
/// empty-looking element is copied while a genuinely absent one leaves the
/// output slot unset. The result is freshly allocated on every call and
/// never aliases the source.
///
/// # Examples
///
/// ```
/// use array_like_slice::slice;
///
/// let args = vec!["Banana", "Orange", "Lemon", "Apple", "Mango"];
/// let citrus = slice(Some(&args), Some(1.0), Some(3.0))?;
///
/// assert_eq!(citrus.len(), 2);
/// assert_eq!(citrus.get(0), Some(&"Orange"));
/// assert_eq!(citrus.get(1), Some(&"Lemon"));
/// # Ok::<(), array_like_slice::SliceError>(())
/// ```
///
/// Strings slice by `char` position:
///
/// ```
/// use array_like_slice::slice;
///
/// let inner = slice(Some("abcd"), Some(-3.0), Some(-1.0))?;
/// assert_eq!(inner.get(0), Some(&'b'));
/// assert_eq!(inner.get(1), Some(&'c'));
/// # Ok::<(), array_like_slice::SliceError>(())
/// ```
pub fn slice<S>(
    source: Option<&S>,
    start: Option<f64>,
    end: Option<f64>,
) -> Result<Sequence<S::Item>>
where
    S: ArrayLike + ?Sized,
{
    let source = require_source(source)?;
    let length = source.len();

    let mut k = clamp_offset(to_integer(start), length);
    let final_end = match end {
        None => length,
        Some(_) => clamp_offset(to_integer(end), length),
    };

    // Sized before the copy loop: positions never written stay holes.
    let mut result = Sequence::with_len(final_end.saturating_sub(k));

    let mut next = 0;
    while k < final_end {
        // `has` is the existence gate; `get` must then produce the value.
        if source.has(k)
            && let Some(value) = source.get(k)
        {
            result.set(next, value);
        }

        next += 1;
        k += 1;
    }

    Ok(result)
}
