//! Growable array built on an exclusive-ownership buffer.
//!
//! [`DynamicArray`] tracks a logical size inside a fixed-capacity
//! [`Buffer`](dynarr_buffer::Buffer) and replaces the buffer wholesale
//! when it needs more room.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T>
//! ├── size      (logical elements, [0, size))
//! ├── capacity  (allocated slots, >= size)
//! └── Buffer<T> (dynarr-buffer, exactly `capacity` slots)
//!
//! growth: Buffer::try_alloc(new_cap) → move [0, size) (± insertion gap) → swap
//! ```
//!
//! # Access contracts
//!
//! - `arr[i]` requires `i < len()` and panics otherwise. It never reads
//!   spare capacity.
//! - [`DynamicArray::at`] checks the same bound and returns
//!   [`ArrayError::OutOfRange`] instead of panicking.
//! - `insert(i, _)` requires `i <= len()`; `erase(i)` requires `i < len()`.
//!
//! # Failure model
//!
//! Every growth step allocates and initializes the new buffer before the
//! array is modified, and moving elements cannot fail. A failed step
//! therefore leaves the array unchanged. Overflow and allocator refusal
//! are reported by the `try_*` methods as [`ArrayError::LengthOverflow`]
//! or [`ArrayError::Alloc`]. The plain methods panic with the same error
//! message, allocator refusal included; they do not abort. A panicking
//! `T::default()` unwinds out of either form.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
mod cmp;
pub mod config;
pub mod error;
pub mod iter;
mod macros;

pub use array::DynamicArray;
pub use config::{reserve, ReserveRequest, GROWTH_FACTOR};
pub use error::ArrayError;
pub use iter::IntoIter;
