//! The stable counting-sort step for one digit.

use crate::histogram::OffsetTable;
use crate::key::{RadixKey, UnsignedKey};

/// Moves every element of `src` into `dst`, ordered by byte `digit` of its key.
///
/// `offsets` is a copy of the digit's prefix-summed table and is consumed as
/// the running insertion cursor of each bucket. Elements are visited in
/// source order, so equal bytes keep their relative order.
pub fn scatter<T, K, F>(src: &[T], dst: &mut [T], mut offsets: OffsetTable, digit: usize, key_fn: &mut F)
where
    T: Clone,
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    debug_assert_eq!(src.len(), dst.len());

    #[cfg(debug_assertions)]
    let starts = offsets;

    for item in src {
        let bucket = key_fn(item).to_radix().digit(digit);
        let pos = offsets.claim(bucket);
        dst[pos].clone_from(item);
    }

    // Every bucket must have filled up to where the next one starts.
    #[cfg(debug_assertions)]
    {
        let ends = offsets.as_slice();
        let starts = starts.as_slice();
        debug_assert!(
            ends[..ends.len() - 1] == starts[1..] && ends[ends.len() - 1] == src.len(),
            "key function returned different keys for the same element"
        );
    }
}
