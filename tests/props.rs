//! Algebraic properties of slicing over arbitrary dense sources and offsets.

use array_like_slice::{Sequence, slice};
use proptest::prelude::*;

proptest! {
    #[test]
    fn result_length_matches_the_clamped_window(
        values in prop::collection::vec(any::<u8>(), 0..64),
        start in -100i64..100,
        end in -100i64..100,
    ) {
        let result = slice(Some(&values), Some(start as f64), Some(end as f64)).unwrap();

        let len = values.len() as i64;
        let clamped_start = if start < 0 { (len + start).max(0) } else { start.min(len) };
        let clamped_end = if end < 0 { (len + end).max(0) } else { end.min(len) };
        prop_assert_eq!(result.len() as i64, (clamped_end - clamped_start).max(0));

        for i in 0..result.len() {
            prop_assert_eq!(result.get(i), values.get(clamped_start as usize + i));
        }
    }

    #[test]
    fn no_offsets_copy_everything(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let result = slice(Some(&values), None, None).unwrap();
        prop_assert_eq!(result, Sequence::from(values));
    }

    #[test]
    fn inverted_bounds_are_empty(
        values in prop::collection::vec(any::<u8>(), 0..64),
        a in 0usize..64,
        b in 0usize..64,
    ) {
        prop_assume!(a < b);
        let result = slice(Some(&values), Some(b as f64), Some(a as f64)).unwrap();
        prop_assert!(result.is_empty());
    }

    #[test]
    fn slicing_twice_composes(
        values in prop::collection::vec(any::<u8>(), 0..64),
        outer in 0usize..64,
        inner in 0usize..64,
    ) {
        let first = slice(Some(&values), Some(outer as f64), None).unwrap();
        let second = slice(Some(&first), Some(inner as f64), None).unwrap();
        let direct = slice(Some(&values), Some((outer + inner) as f64), None).unwrap();
        prop_assert_eq!(second, direct);
    }
}
