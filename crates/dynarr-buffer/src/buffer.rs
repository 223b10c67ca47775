//! The exclusive-ownership heap block.
//!
//! A [`Buffer`] owns either nothing (the empty state) or exactly one
//! contiguous block of `T`. It cannot be cloned; ownership moves with the
//! value and can be handed out explicitly with [`Buffer::release`].

use std::alloc::Layout;
use std::ops::{Index, IndexMut};

use crate::error::BufferError;

/// Move-only owner of one contiguous heap block.
///
/// Buffers are the storage unit of the dynarr containers. A buffer is
/// allocated at its final size and never grows in place: owners that need
/// more room allocate a new buffer, move their elements across and
/// [`swap`](Buffer::swap) it in.
///
/// Slot count is fixed at allocation. The buffer exposes it through
/// [`slot_count`](Buffer::slot_count) for consistency checks, but the
/// owner is expected to track its own capacity.
#[derive(Debug)]
pub struct Buffer<T> {
    /// The owned block. `None` is the empty state.
    block: Option<Box<[T]>>,
}

impl<T> Buffer<T> {
    /// Create an empty buffer. Does not allocate.
    pub const fn new() -> Self {
        Self { block: None }
    }

    /// Allocate a block of `slots` default-constructed elements.
    ///
    /// `slots == 0` yields the empty state without allocating.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow. Allocator failure aborts the process
    /// through the global allocation error handler, as `Vec` does. Use
    /// [`try_alloc`](Buffer::try_alloc) to observe either as an error.
    pub fn alloc(slots: usize) -> Self
    where
        T: Default,
    {
        if slots == 0 {
            return Self::new();
        }
        let block: Box<[T]> = std::iter::repeat_with(T::default).take(slots).collect();
        Self { block: Some(block) }
    }

    /// Fallible counterpart of [`alloc`](Buffer::alloc).
    ///
    /// Returns [`BufferError::CapacityOverflow`] if the block size does not
    /// fit in `isize::MAX` bytes and [`BufferError::AllocFailed`] if the
    /// allocator refuses the request.
    pub fn try_alloc(slots: usize) -> Result<Self, BufferError>
    where
        T: Default,
    {
        if slots == 0 {
            return Ok(Self::new());
        }
        let layout = Layout::array::<T>(slots)
            .map_err(|_| BufferError::CapacityOverflow { requested: slots })?;

        let mut block = Vec::new();
        block
            .try_reserve_exact(slots)
            .map_err(|_| BufferError::AllocFailed {
                bytes: layout.size(),
            })?;
        block.resize_with(slots, T::default);
        Ok(Self {
            block: Some(block.into_boxed_slice()),
        })
    }

    /// Adopt an existing block.
    ///
    /// An empty block yields the empty state.
    pub fn from_boxed(block: Box<[T]>) -> Self {
        if block.is_empty() {
            Self::new()
        } else {
            Self { block: Some(block) }
        }
    }

    /// Give up ownership of the block and reset to the empty state.
    ///
    /// Returns `None` if the buffer was already empty, so releasing twice
    /// never hands out the same block twice.
    #[must_use = "the released block is dropped if not used"]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        self.block.take()
    }

    /// Exchange blocks with `other`. Constant time, no allocation.
    pub fn swap(&mut self, other: &mut Buffer<T>) {
        std::mem::swap(&mut self.block, &mut other.block);
    }

    /// Whether a block is owned.
    pub fn is_allocated(&self) -> bool {
        self.block.is_some()
    }

    /// Number of slots in the owned block (0 in the empty state).
    pub fn slot_count(&self) -> usize {
        self.as_slice().len()
    }

    /// The whole block as a shared slice.
    pub fn as_slice(&self) -> &[T] {
        self.block.as_deref().unwrap_or_default()
    }

    /// The whole block as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.block.as_deref_mut().unwrap_or_default()
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Box<[T]>> for Buffer<T> {
    fn from(block: Box<[T]>) -> Self {
        Self::from_boxed(block)
    }
}

/// Slot access. The index must lie inside the block; out-of-block
/// indices panic.
impl<T> Index<usize> for Buffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Buffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}
