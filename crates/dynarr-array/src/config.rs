//! Construction-time configuration.
//!
//! A [`ReserveRequest`] asks a [`DynamicArray`](crate::DynamicArray) to
//! pre-allocate capacity without creating any logical elements:
//!
//! ```
//! use dynarr_array::{reserve, DynamicArray};
//!
//! let arr: DynamicArray<u32> = reserve(16).into();
//! assert_eq!(arr.len(), 0);
//! assert_eq!(arr.capacity(), 16);
//! ```

/// Factor by which capacity grows when an append runs out of room.
///
/// Growth picks `max(required, capacity * GROWTH_FACTOR)`, which bounds the
/// total move work over a sequence of appends to linear time.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity hint recognized by the array constructors.
///
/// Immutable after creation. A request for 0 slots is valid and produces
/// an array that has not allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct ReserveRequest {
    capacity: usize,
}

impl ReserveRequest {
    /// Request `capacity` pre-allocated slots.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Number of slots requested.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveRequest::new`].
pub const fn reserve(capacity: usize) -> ReserveRequest {
    ReserveRequest::new(capacity)
}
