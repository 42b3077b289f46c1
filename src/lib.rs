//! Stable LSD radix sort for fixed-width numbers and numeric-keyed records.
//!
//! Every entry point takes the data slice and a caller-owned scratch slice of
//! at least the same length. Keys are processed one byte at a time, least
//! significant first, with a counting sort per byte (256 buckets). Bytes that
//! are identical across the whole input are skipped. Sorting is `O(w n)` for
//! a key of `w` bytes and allocates nothing.
//!
//! Signed integers and floats are sorted through an order-preserving
//! transform onto unsigned integers (see [`RadixKey`]), which is why their
//! scratch buffers are unsigned slices of the same width.
//!
//! ```
//! let mut data = [-5i64, 3, -10, 0, 2];
//! let mut scratch = [0u64; 5];
//! radix_sorting::sort_i64(&mut data, &mut scratch).unwrap();
//! assert_eq!(data, [-10, -5, 0, 2, 3]);
//! ```
//!
//! The functions at the crate root report an undersized scratch buffer as
//! [`RadixSortError::BufferTooSmall`]; the same functions in [`strict`] panic
//! instead.
//!
//! # Floating-point keys
//!
//! `-0.0` and `+0.0` are equal keys and keep their relative order. NaNs are
//! not ordered by contract: with the current transform, NaNs with the sign bit
//! clear end up after `+inf` and those with it set before `-inf`.

pub mod engine;
pub mod error;
pub mod histogram;
pub mod key;
pub mod scatter;
pub mod skip;
pub mod strict;

pub use engine::PassReport;
pub use error::RadixSortError;
pub use key::RadixKey;
pub use skip::PassSkip;

use key::{f32_bits_key, f64_bits_key, flip_sign_u16, flip_sign_u32, flip_sign_u64, flip_sign_u8};

macro_rules! unsigned_entry {
    ($($name:ident: $t:ty;)*) => ($(
        #[doc = concat!("Sorts a `", stringify!($t), "` slice in ascending order.")]
        ///
        /// `scratch` must hold at least `data.len()` elements; its contents
        /// afterwards are unspecified. It can be reused without clearing.
        pub fn $name(data: &mut [$t], scratch: &mut [$t]) -> Result<(), RadixSortError> {
            engine::radix_sort(data, scratch, |&v| v, PassSkip::default()).map(|_| ())
        }
    )*)
}

macro_rules! signed_entry {
    ($($name:ident: $t:ty => $u:ty, $flip:ident;)*) => ($(
        #[doc = concat!("Sorts an `", stringify!($t), "` slice in ascending order.")]
        ///
        #[doc = concat!("The data is sorted through its `", stringify!($u), "` bit pattern with the sign bit flipped,")]
        /// so the scratch buffer is unsigned. It must hold at least
        /// `data.len()` elements.
        pub fn $name(data: &mut [$t], scratch: &mut [$u]) -> Result<(), RadixSortError> {
            let bits: &mut [$u] = bytemuck::cast_slice_mut(data);
            engine::radix_sort(bits, scratch, |&v| $flip(v), PassSkip::default()).map(|_| ())
        }
    )*)
}

unsigned_entry! {
    sort_u8: u8;
    sort_u16: u16;
    sort_u32: u32;
    sort_u64: u64;
}

signed_entry! {
    sort_i8: i8 => u8, flip_sign_u8;
    sort_i16: i16 => u16, flip_sign_u16;
    sort_i32: i32 => u32, flip_sign_u32;
    sort_i64: i64 => u64, flip_sign_u64;
}

/// Sorts an `f32` slice in ascending order, using a `u32` scratch buffer.
///
/// ```
/// let mut data = [1.5f32, -0.5, 0.0];
/// let mut scratch = [0u32; 3];
/// radix_sorting::sort_f32(&mut data, &mut scratch).unwrap();
/// assert_eq!(data, [-0.5, 0.0, 1.5]);
/// ```
pub fn sort_f32(data: &mut [f32], scratch: &mut [u32]) -> Result<(), RadixSortError> {
    let bits: &mut [u32] = bytemuck::cast_slice_mut(data);
    engine::radix_sort(bits, scratch, |&v| f32_bits_key(v), PassSkip::default()).map(|_| ())
}

/// Sorts an `f64` slice in ascending order, using a `u64` scratch buffer.
pub fn sort_f64(data: &mut [f64], scratch: &mut [u64]) -> Result<(), RadixSortError> {
    let bits: &mut [u64] = bytemuck::cast_slice_mut(data);
    engine::radix_sort(bits, scratch, |&v| f64_bits_key(v), PassSkip::default()).map(|_| ())
}

/// Sorts `data` stably by the key `key_fn` extracts from each element.
///
/// The key can be any [`RadixKey`] type; its byte width sets the number of
/// passes. `key_fn` is not cached: it runs once per element to build the
/// histograms and once more per element for every pass that is not skipped,
/// so it must return the same key for the same element every time.
///
/// ```
/// #[derive(Clone, Debug, PartialEq)]
/// struct Person { name: &'static str, age: u8 }
///
/// let mut people = vec![
///     Person { name: "Ann", age: 30 },
///     Person { name: "Bob", age: 25 },
///     Person { name: "Cid", age: 35 },
///     Person { name: "Dee", age: 25 },
/// ];
/// let mut scratch = people.clone();
/// radix_sorting::sort_by_key(&mut people, &mut scratch, |p| p.age).unwrap();
///
/// let names: Vec<_> = people.iter().map(|p| p.name).collect();
/// assert_eq!(names, ["Bob", "Dee", "Ann", "Cid"]);
/// ```
pub fn sort_by_key<T, K, F>(data: &mut [T], scratch: &mut [T], key_fn: F) -> Result<(), RadixSortError>
where
    T: Clone,
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    sort_by_key_with(data, scratch, key_fn, PassSkip::default()).map(|_| ())
}

/// Like [`sort_by_key`], with an explicit pass-skip strategy.
///
/// Returns how many passes ran and whether the result had to be copied back
/// from the scratch buffer.
pub fn sort_by_key_with<T, K, F>(
    data: &mut [T],
    scratch: &mut [T],
    key_fn: F,
    skip: PassSkip,
) -> Result<PassReport, RadixSortError>
where
    T: Clone,
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    engine::radix_sort(data, scratch, key_fn, skip)
}

/// Sorts a slice of keys, allocating the scratch buffer internally.
pub fn sort<K: RadixKey>(data: &mut [K]) {
    let mut scratch = data.to_vec();
    // The scratch buffer is exactly as long as `data`, which cannot fail.
    let _ = engine::radix_sort(data, &mut scratch, |&v| v, PassSkip::default());
}

/// Sorts `data` stably by `key_fn`, allocating the scratch buffer internally.
pub fn sort_by_key_alloc<T, K, F>(data: &mut [T], key_fn: F)
where
    T: Clone,
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    let mut scratch = data.to_vec();
    let _ = engine::radix_sort(data, &mut scratch, key_fn, PassSkip::default());
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
