//! Buffer-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while allocating a [`Buffer`](crate::Buffer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The requested slot count does not fit in a single allocation
    /// (`slots * size_of::<T>()` would exceed `isize::MAX` bytes).
    CapacityOverflow {
        /// Number of slots requested.
        requested: usize,
    },
    /// The global allocator could not satisfy the request.
    AllocFailed {
        /// Size of the refused allocation in bytes.
        bytes: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} slots requested")
            }
            Self::AllocFailed { bytes } => {
                write!(f, "allocation of {bytes} bytes failed")
            }
        }
    }
}

impl Error for BufferError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_request() {
        let err = BufferError::CapacityOverflow { requested: 7 };
        assert_eq!(err.to_string(), "capacity overflow: 7 slots requested");

        let err = BufferError::AllocFailed { bytes: 4096 };
        assert_eq!(err.to_string(), "allocation of 4096 bytes failed");
    }
}
