//! dynarr: a minimal growable array built from an exclusive-ownership buffer.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the dynarr sub-crates. For most users, adding `dynarr` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use dynarr::prelude::*;
//!
//! let mut arr = dynarr![1, 2, 3];
//! assert_eq!((arr.len(), arr.capacity()), (3, 3));
//!
//! arr.push_back(4);
//! assert_eq!(arr.capacity(), 6);
//!
//! arr.insert(1, 99);
//! assert_eq!(arr, [1, 99, 2, 3, 4]);
//!
//! arr.erase(1);
//! assert_eq!(arr, [1, 2, 3, 4]);
//!
//! assert!(matches!(arr.at(10), Err(ArrayError::OutOfRange { .. })));
//!
//! arr.resize(2);
//! assert_eq!(arr, [1, 2]);
//! assert_eq!(arr.capacity(), 6);
//!
//! let pre: DynamicArray<u64> = reserve(32).into();
//! assert!(pre.is_empty());
//! assert_eq!(pre.capacity(), 32);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`buffer`] | `dynarr-buffer` | `Buffer`, the move-only heap block, and `BufferError` |
//! | [`array`] | `dynarr-array` | `DynamicArray`, `ReserveRequest`, `ArrayError`, iterators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Exclusive-ownership heap buffer (`dynarr-buffer`).
///
/// Most users never touch [`buffer::Buffer`] directly; it is the storage
/// unit behind [`array::DynamicArray`].
pub use dynarr_buffer as buffer;

/// Growable array (`dynarr-array`).
///
/// Contains [`array::DynamicArray`], the [`array::ReserveRequest`]
/// construction option and the [`array::ArrayError`] type.
pub use dynarr_array as array;

pub use dynarr_array::dynarr;

/// Common imports for typical dynarr usage.
///
/// ```rust
/// use dynarr::prelude::*;
/// ```
pub mod prelude {
    pub use dynarr_array::{dynarr, reserve, ArrayError, DynamicArray, ReserveRequest};
    pub use dynarr_buffer::{Buffer, BufferError};
}
