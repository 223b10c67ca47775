//! Exclusive-ownership heap buffer for the dynarr containers.
//!
//! This is the leaf crate of the workspace. It provides [`Buffer`], a
//! move-only handle over zero or one contiguous heap block, and the
//! [`BufferError`] type reported by its fallible allocation path.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T> (dynarr-array)
//! ├── size / capacity bookkeeping
//! └── Buffer<T> (this crate)
//!     └── Option<Box<[T]>>  (None = empty state, no allocation)
//! ```
//!
//! The buffer does not track a logical length. Every slot of an owned
//! block holds a valid `T` (default-constructed at allocation time), so
//! the owner decides which prefix is meaningful.
//!
//! # Safety
//!
//! The block is a `Box<[T]>`, so deallocation happens exactly once when
//! the owning `Buffer` is dropped, and moving a `Buffer` moves the box.
//! No `unsafe` code is needed or permitted.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;

pub use buffer::Buffer;
pub use error::BufferError;
