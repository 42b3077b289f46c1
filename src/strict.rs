//! Precondition-enforcing entry points.
//!
//! Same functions as the crate root, without an error channel: a scratch
//! buffer shorter than the data slice is a caller bug and panics before any
//! element is moved.
//!
//! ```should_panic
//! let mut data = [3u32, 1, 2];
//! let mut scratch = [0u32; 1];
//! radix_sorting::strict::sort_u32(&mut data, &mut scratch);
//! ```

use crate::{RadixKey, RadixSortError};

#[track_caller]
fn enforce(result: Result<(), RadixSortError>) {
    if let Err(err) = result {
        panic!("{}", err);
    }
}

macro_rules! strict_entry {
    ($($name:ident: $t:ty, $s:ty;)*) => ($(
        #[doc = concat!("Panicking form of [`crate::", stringify!($name), "`].")]
        ///
        /// # Panics
        ///
        /// If `scratch.len() < data.len()`.
        #[track_caller]
        pub fn $name(data: &mut [$t], scratch: &mut [$s]) {
            enforce(crate::$name(data, scratch));
        }
    )*)
}

strict_entry! {
    sort_u8: u8, u8;
    sort_u16: u16, u16;
    sort_u32: u32, u32;
    sort_u64: u64, u64;
    sort_i8: i8, u8;
    sort_i16: i16, u16;
    sort_i32: i32, u32;
    sort_i64: i64, u64;
    sort_f32: f32, u32;
    sort_f64: f64, u64;
}

/// Panicking form of [`crate::sort_by_key`].
///
/// # Panics
///
/// If `scratch.len() < data.len()`.
#[track_caller]
pub fn sort_by_key<T, K, F>(data: &mut [T], scratch: &mut [T], key_fn: F)
where
    T: Clone,
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    enforce(crate::sort_by_key(data, scratch, key_fn));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_sorts() {
        let mut data = vec![-5i64, 3, -10, 0, 2];
        let mut scratch = vec![0u64; 5];
        sort_i64(&mut data, &mut scratch);
        assert_eq!(data, vec![-10, -5, 0, 2, 3]);

        let mut floats = vec![2.0f32, -2.0, 0.5];
        let mut fscratch = vec![0u32; 3];
        sort_f32(&mut floats, &mut fscratch);
        assert_eq!(floats, vec![-2.0, 0.5, 2.0]);
    }

    #[test]
    fn test_strict_by_key() {
        let mut data = vec![(30u8, 'a'), (25, 'b'), (35, 'c'), (25, 'd')];
        let mut scratch = data.clone();
        sort_by_key(&mut data, &mut scratch, |p| p.0);
        assert_eq!(data, vec![(25, 'b'), (25, 'd'), (30, 'a'), (35, 'c')]);
    }

    #[test]
    #[should_panic(expected = "scratch buffer too small")]
    fn test_strict_panics_on_small_scratch() {
        let mut data = vec![3u32, 1, 2];
        let mut scratch = vec![0u32; 1];
        sort_u32(&mut data, &mut scratch);
    }

    #[test]
    #[should_panic(expected = "scratch buffer too small")]
    fn test_strict_by_key_panics_on_small_scratch() {
        let mut data = vec![(1u8, 'a'), (0, 'b')];
        let mut scratch = vec![];
        sort_by_key(&mut data, &mut scratch, |p| p.0);
    }
}
