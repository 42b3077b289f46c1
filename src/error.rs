//! Error types for radix sorting.

use thiserror::Error;

/// Errors reported by the fallible sort entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RadixSortError {
    /// The scratch buffer cannot hold every element of the data slice.
    #[error("scratch buffer too small: {scratch_len} slots for {data_len} elements")]
    BufferTooSmall {
        /// Number of elements to sort.
        data_len: usize,
        /// Length of the scratch buffer that was supplied.
        scratch_len: usize,
    },
}

/// Rejects a scratch buffer shorter than the data slice.
#[inline]
pub(crate) fn check_scratch(data_len: usize, scratch_len: usize) -> Result<(), RadixSortError> {
    if scratch_len < data_len {
        log::debug!(
            "rejecting radix sort: scratch holds {} of {} elements",
            scratch_len,
            data_len
        );
        return Err(RadixSortError::BufferTooSmall {
            data_len,
            scratch_len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_scratch() {
        assert!(check_scratch(0, 0).is_ok());
        assert!(check_scratch(3, 3).is_ok());
        assert!(check_scratch(3, 10).is_ok());
        assert_eq!(
            check_scratch(3, 1),
            Err(RadixSortError::BufferTooSmall {
                data_len: 3,
                scratch_len: 1
            })
        );
    }

    #[test]
    fn test_display() {
        let err = RadixSortError::BufferTooSmall {
            data_len: 3,
            scratch_len: 1,
        };
        assert_eq!(
            err.to_string(),
            "scratch buffer too small: 1 slots for 3 elements"
        );
    }
}
