//! Per-digit histograms and their exclusive prefix sums.
//!
//! All digit histograms are gathered in one sweep over the input: a scatter
//! pass only permutes elements, so the multiset of bytes at every position is
//! the same before and after it. Each histogram is then turned into an
//! offset table in place.

use crate::key::{RadixKey, UnsignedKey, MAX_DIGITS, NUM_BUCKETS};

/// Bucket counters for one digit; holds offsets after [`OffsetTable::prefix_sum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetTable {
    buckets: [usize; NUM_BUCKETS],
}

impl OffsetTable {
    pub const fn new() -> Self {
        OffsetTable {
            buckets: [0; NUM_BUCKETS],
        }
    }

    #[inline(always)]
    pub fn count(&mut self, bucket: usize) {
        self.buckets[bucket] += 1;
    }

    /// Converts counts into exclusive prefix sums and returns the total.
    ///
    /// Sizes:     |---b0---|-b1-|---b2---|
    /// Offsets:   0        b0   b0+b1
    pub fn prefix_sum(&mut self) -> usize {
        let mut acc = 0usize;
        for slot in self.buckets.iter_mut() {
            let count = *slot;
            *slot = acc;
            acc += count;
        }
        acc
    }

    /// Returns the next insertion index for `bucket` and advances it.
    #[inline(always)]
    pub fn claim(&mut self, bucket: usize) -> usize {
        let slot = &mut self.buckets[bucket];
        let pos = *slot;
        *slot = pos + 1;
        pos
    }

    /// Offset (or count, before prefix summing) of one bucket.
    #[inline]
    pub fn get(&self, bucket: usize) -> usize {
        self.buckets[bucket]
    }

    pub fn as_slice(&self) -> &[usize; NUM_BUCKETS] {
        &self.buckets
    }
}

impl Default for OffsetTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Offset tables for every digit of a key, at most [`MAX_DIGITS`] of them.
#[derive(Debug, Clone)]
pub struct Histograms {
    tables: [OffsetTable; MAX_DIGITS],
    digits: usize,
    total: usize,
}

impl Histograms {
    /// Counts every digit of every key in one sweep, then prefix-sums each table.
    ///
    /// `key_fn` is called exactly once per element.
    pub fn build<T, K, F>(input: &[T], key_fn: &mut F) -> Self
    where
        K: RadixKey,
        F: FnMut(&T) -> K,
    {
        let digits = <K::Unsigned as UnsignedKey>::BYTES;
        let mut tables = [OffsetTable::new(); MAX_DIGITS];

        for item in input {
            let key = key_fn(item).to_radix();
            for (digit, table) in tables.iter_mut().take(digits).enumerate() {
                table.count(key.digit(digit));
            }
        }

        for table in tables.iter_mut().take(digits) {
            let total = table.prefix_sum();
            debug_assert_eq!(total, input.len());
        }

        Histograms {
            tables,
            digits,
            total: input.len(),
        }
    }

    /// Number of digits (and radix passes) of the key type.
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Number of elements counted.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn table(&self, digit: usize) -> &OffsetTable {
        &self.tables[digit]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_sum_exclusive() {
        let mut table = OffsetTable::new();
        for bucket in [3, 1, 3, 0, 255, 3] {
            table.count(bucket);
        }
        let total = table.prefix_sum();
        assert_eq!(total, 6);
        assert_eq!(table.get(0), 0);
        assert_eq!(table.get(1), 1);
        assert_eq!(table.get(2), 2);
        assert_eq!(table.get(3), 2);
        assert_eq!(table.get(4), 5);
        assert_eq!(table.get(255), 5);
    }

    #[test]
    fn test_prefix_sum_empty() {
        let mut table = OffsetTable::new();
        assert_eq!(table.prefix_sum(), 0);
        assert!(table.as_slice().iter().all(|&o| o == 0));
    }

    #[test]
    fn test_claim_advances_bucket() {
        let mut table = OffsetTable::new();
        table.count(7);
        table.count(7);
        table.count(9);
        table.prefix_sum();
        assert_eq!(table.claim(7), 0);
        assert_eq!(table.claim(9), 2);
        assert_eq!(table.claim(7), 1);
    }

    #[test]
    fn test_build_counts_each_digit() {
        let data = [0x0102u16, 0x0103, 0x0201];
        let mut calls = 0;
        let hist = Histograms::build(&data, &mut |&v: &u16| {
            calls += 1;
            v
        });
        assert_eq!(calls, data.len());
        assert_eq!(hist.digits(), 2);
        assert_eq!(hist.total(), 3);

        // Low byte: 0x02, 0x03, 0x01 -> one element each.
        let low = hist.table(0);
        assert_eq!(low.get(1), 0);
        assert_eq!(low.get(2), 1);
        assert_eq!(low.get(3), 2);

        // High byte: two 0x01, one 0x02.
        let high = hist.table(1);
        assert_eq!(high.get(1), 0);
        assert_eq!(high.get(2), 2);
        assert_eq!(high.get(3), 3);
    }

    #[test]
    fn test_build_applies_key_transform() {
        let data = [-1i8, 0, 1];
        let hist = Histograms::build(&data, &mut |&v: &i8| v);
        // -1 -> 0x7F, 0 -> 0x80, 1 -> 0x81
        let table = hist.table(0);
        assert_eq!(table.get(0x7F), 0);
        assert_eq!(table.get(0x80), 1);
        assert_eq!(table.get(0x81), 2);
    }
}
