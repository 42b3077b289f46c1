//! Detection of uniform digits, whose scatter pass would be an identity
//! permutation.

use crate::histogram::OffsetTable;
use crate::key::NUM_BUCKETS;

/// How the orchestrator decides whether a digit pass can be skipped.
///
/// Skipping never changes the output, only the amount of work done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassSkip {
    /// Count every occupied bucket before deciding.
    Scan,
    /// Stop scanning as soon as a second occupied bucket shows up.
    #[default]
    EarlyExit,
    /// Never skip; every digit gets a scatter pass.
    Disabled,
}

impl PassSkip {
    /// Returns `true` if every element shares the same byte at this digit.
    ///
    /// `table` must already hold prefix sums over `total` elements.
    pub fn is_uniform(self, table: &OffsetTable, total: usize) -> bool {
        match self {
            PassSkip::Scan => occupied_buckets(table, total, NUM_BUCKETS) == 1,
            PassSkip::EarlyExit => occupied_buckets(table, total, 2) == 1,
            PassSkip::Disabled => false,
        }
    }
}

/// Counts occupied buckets from offset transitions, stopping once `limit` is reached.
///
/// Bucket `b` is occupied when its offset is below the next bucket's offset
/// (or below `total` for the last bucket).
pub fn occupied_buckets(table: &OffsetTable, total: usize, limit: usize) -> usize {
    let offsets = table.as_slice();
    let mut occupied = 0;
    for bucket in 0..NUM_BUCKETS {
        let end = if bucket + 1 < NUM_BUCKETS {
            offsets[bucket + 1]
        } else {
            total
        };
        if end > offsets[bucket] {
            occupied += 1;
            if occupied >= limit {
                break;
            }
        }
        // Once an offset reaches the total, every later bucket is empty.
        if end == total {
            break;
        }
    }
    occupied
}
