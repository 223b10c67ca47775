//! Error types for array operations.

use std::error::Error;
use std::fmt;

use dynarr_buffer::BufferError;

/// Errors reported by [`DynamicArray`](crate::DynamicArray).
///
/// Only checked access ([`at`](crate::DynamicArray::at)) and the `try_*`
/// growth operations report errors. Precondition violations on the
/// unchecked paths (indexing, `insert`, `erase`) panic instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A checked access named an index at or past the logical size.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Logical size at the time of the access.
        size: usize,
    },
    /// The element count after growth would not fit in `usize`. The array
    /// is unchanged.
    LengthOverflow {
        /// Logical size before the operation.
        size: usize,
        /// Elements the operation tried to add.
        additional: usize,
    },
    /// Growing the backing buffer failed. The array is unchanged.
    Alloc(BufferError),
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, size } => {
                write!(f, "index {index} out of range for size {size}")
            }
            Self::LengthOverflow { size, additional } => {
                write!(f, "length overflow: {size} + {additional} elements")
            }
            Self::Alloc(err) => write!(f, "buffer growth failed: {err}"),
        }
    }
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Alloc(err) => Some(err),
            Self::OutOfRange { .. } | Self::LengthOverflow { .. } => None,
        }
    }
}

impl From<BufferError> for ArrayError {
    fn from(err: BufferError) -> Self {
        Self::Alloc(err)
    }
}
