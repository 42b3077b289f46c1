//! Pass orchestration for the LSD radix sort.
//!
//! Digits are processed least significant first. Each executed pass scatters
//! the current source into the current destination and the two buffers swap
//! roles; uniform digits are skipped and leave the roles unchanged. After the
//! last digit the sorted sequence sits in whichever buffer is the source, so
//! an odd number of executed passes needs one final copy back into `data`.

use crate::error::{check_scratch, RadixSortError};
use crate::histogram::Histograms;
use crate::key::{RadixKey, UnsignedKey};
use crate::scatter::scatter;
use crate::skip::PassSkip;

/// What a sort call did, digit by digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassReport {
    /// Number of digits of the key type.
    pub digits: usize,
    /// Scatter passes that ran.
    pub executed: usize,
    /// Digits skipped as uniform.
    pub skipped: usize,
}

impl PassReport {
    /// Whether the final copy from scratch back into `data` was needed.
    pub fn copied_back(&self) -> bool {
        self.executed % 2 == 1
    }
}

/// Sorts `data` stably by `key_fn`, using `scratch[..data.len()]` as the second buffer.
///
/// The scratch length is checked before anything else, so an undersized
/// buffer is rejected even for empty or single-element input and `data` is
/// never touched in that case.
pub fn radix_sort<T, K, F>(
    data: &mut [T],
    scratch: &mut [T],
    mut key_fn: F,
    skip: PassSkip,
) -> Result<PassReport, RadixSortError>
where
    T: Clone,
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    check_scratch(data.len(), scratch.len())?;

    let n = data.len();
    let digits = <K::Unsigned as UnsignedKey>::BYTES;
    if n <= 1 {
        return Ok(PassReport {
            digits,
            executed: 0,
            skipped: digits,
        });
    }

    let histograms = Histograms::build(data, &mut key_fn);

    let mut src: &mut [T] = data;
    let mut dst: &mut [T] = &mut scratch[..n];
    let mut executed = 0;

    for digit in 0..histograms.digits() {
        let table = histograms.table(digit);
        if skip.is_uniform(table, histograms.total()) {
            continue;
        }
        scatter(src, dst, *table, digit, &mut key_fn);
        core::mem::swap(&mut src, &mut dst);
        executed += 1;
    }

    let report = PassReport {
        digits,
        executed,
        skipped: digits - executed,
    };

    // Odd swap count: `src` is the scratch region and `dst` is `data`.
    if report.copied_back() {
        dst.clone_from_slice(src);
    }

    log::trace!(
        "radix sort of {} elements: {} of {} passes executed, copy back: {}",
        n,
        report.executed,
        report.digits,
        report.copied_back()
    );

    Ok(report)
}
