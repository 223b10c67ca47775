//! The growable array.
//!
//! [`DynamicArray`] owns one [`Buffer`] and tracks a logical size inside
//! its capacity. Slots `[0, len)` are the contents; slots
//! `[len, capacity)` hold valid but unobservable values (defaults or stale
//! elements left behind by `clear`/`resize`).
//!
//! All growth goes through one routine: allocate a fresh, fully
//! default-initialized buffer, move the logical elements across (leaving
//! an optional one-slot gap for an insertion), then swap the new buffer
//! in. The allocation happens before the array is touched and moves cannot
//! fail, so a failed growth step leaves the array exactly as it was.

use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::SliceIndex;

use dynarr_buffer::{Buffer, BufferError};

use crate::config::{ReserveRequest, GROWTH_FACTOR};
use crate::error::ArrayError;

/// A contiguous growable array.
///
/// Capacity doubles when an append or insertion runs out of room
/// (`max(len + 1, capacity * 2)`), giving amortized O(1) appends. Capacity
/// never shrinks: `pop_back`, `erase`, `clear` and shrinking `resize` only
/// lower the logical size.
///
/// Operations that create slots require `T: Default`, since every slot of
/// the backing buffer holds a constructed value.
pub struct DynamicArray<T> {
    buffer: Buffer<T>,
    /// Logical element count.
    size: usize,
    /// Slots in `buffer`. Always equal to `buffer.slot_count()`.
    capacity: usize,
}

impl<T> DynamicArray<T> {
    /// Create an empty array. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buffer: Buffer::new(),
            size: 0,
            capacity: 0,
        }
    }

    /// Create an array of `len` default values; capacity equals `len`.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self {
            buffer: Buffer::alloc(len),
            size: len,
            capacity: len,
        }
    }

    /// Create an array of `len` copies of `value`; capacity equals `len`.
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_boxed(std::iter::repeat_n(value, len).collect())
    }

    /// Create an empty array with the requested capacity pre-allocated.
    pub fn with_reserve(request: ReserveRequest) -> Self
    where
        T: Default,
    {
        Self {
            buffer: Buffer::alloc(request.capacity()),
            size: 0,
            capacity: request.capacity(),
        }
    }

    /// Create an empty array with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self
    where
        T: Default,
    {
        Self::with_reserve(ReserveRequest::new(capacity))
    }

    /// Take a fully-populated block as both contents and capacity.
    fn from_boxed(block: Box<[T]>) -> Self {
        let size = block.len();
        Self {
            buffer: Buffer::from_boxed(block),
            size,
            capacity: size,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The elements as a shared slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.size]
    }

    /// The elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let size = self.size;
        &mut self.buffer.as_mut_slice()[..size]
    }

    /// Checked access.
    ///
    /// Returns [`ArrayError::OutOfRange`] when `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        let size = self.size;
        self.as_slice()
            .get(index)
            .ok_or(ArrayError::OutOfRange { index, size })
    }

    /// Checked mutable access.
    ///
    /// Returns [`ArrayError::OutOfRange`] when `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let size = self.size;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, size })
    }

    /// Append `value`, growing if the array is full.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows or cannot be allocated.
    pub fn push_back(&mut self, value: T)
    where
        T: Default,
    {
        infallible(self.try_push_back(value))
    }

    /// Fallible [`push_back`](Self::push_back).
    ///
    /// On error `value` is dropped and the array is unchanged.
    pub fn try_push_back(&mut self, value: T) -> Result<(), ArrayError>
    where
        T: Default,
    {
        if self.size == self.capacity {
            let new_capacity = self.grown_capacity(self.required(1)?);
            self.regrow(new_capacity, Some(self.size))?;
        }
        self.buffer[self.size] = value;
        self.size += 1;
        Ok(())
    }

    /// Remove and return the last element, or `None` if empty.
    ///
    /// Capacity is unchanged.
    pub fn pop_back(&mut self) -> Option<T>
    where
        T: Default,
    {
        if self.size == 0 {
            return None;
        }
        self.size -= 1;
        Some(std::mem::take(&mut self.buffer[self.size]))
    }

    /// Insert `value` at `index`, shifting the tail right.
    ///
    /// `index == len()` appends. Returns the index of the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`, or if growth overflows or cannot be
    /// allocated.
    pub fn insert(&mut self, index: usize, value: T) -> usize
    where
        T: Default,
    {
        infallible(self.try_insert(index, value))
    }

    /// Fallible [`insert`](Self::insert). Allocation failures are reported;
    /// an out-of-bounds `index` still panics.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, ArrayError>
    where
        T: Default,
    {
        assert!(
            index <= self.size,
            "insert index {index} out of bounds for size {}",
            self.size
        );
        if self.size < self.capacity {
            // Rotating the spare slot at `size` down to `index` shifts the
            // tail right from the back, so nothing is overwritten early.
            self.buffer.as_mut_slice()[index..=self.size].rotate_right(1);
        } else {
            let new_capacity = self.grown_capacity(self.required(1)?);
            self.regrow(new_capacity, Some(index))?;
        }
        self.buffer[index] = value;
        self.size += 1;
        Ok(index)
    }

    /// Remove the element at `index`, shifting the tail left.
    ///
    /// The removed value is dropped immediately. Returns the index of the
    /// element that followed it (equal to `len()` if it was the last).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize
    where
        T: Default,
    {
        assert!(
            index < self.size,
            "erase index {index} out of bounds for size {}",
            self.size
        );
        let size = self.size;
        self.buffer.as_mut_slice()[index..size].rotate_left(1);
        self.size -= 1;
        self.buffer[self.size] = T::default();
        index
    }

    /// Set the logical size to `new_len`.
    ///
    /// Shrinking only lowers the size. Growing within capacity resets the
    /// exposed slots to `T::default()`. Growing past capacity reallocates
    /// to `max(new_len, capacity * 2)`.
    ///
    /// # Panics
    ///
    /// Panics if growth overflows or cannot be allocated.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        infallible(self.try_resize(new_len))
    }

    /// Fallible [`resize`](Self::resize).
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), ArrayError>
    where
        T: Default,
    {
        if new_len <= self.size {
            self.size = new_len;
            return Ok(());
        }
        if new_len > self.capacity {
            // A fresh buffer is default-initialized past the moved prefix.
            self.regrow(self.grown_capacity(new_len), None)?;
        } else {
            self.buffer.as_mut_slice()[self.size..new_len].fill_with(T::default);
        }
        self.size = new_len;
        Ok(())
    }

    /// Ensure capacity is at least `new_capacity`.
    ///
    /// Reallocates to exactly `new_capacity` when it exceeds the current
    /// capacity; otherwise does nothing. The size never changes.
    ///
    /// # Panics
    ///
    /// Panics if the allocation overflows or fails.
    pub fn reserve(&mut self, new_capacity: usize)
    where
        T: Default,
    {
        infallible(self.try_reserve(new_capacity))
    }

    /// Fallible [`reserve`](Self::reserve).
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), ArrayError>
    where
        T: Default,
    {
        if new_capacity > self.capacity {
            self.regrow(new_capacity, None)?;
        }
        Ok(())
    }

    /// Set the size to zero. Capacity and storage are untouched.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Exchange contents and capacity with `other` in constant time.
    pub fn swap_with(&mut self, other: &mut DynamicArray<T>) {
        self.buffer.swap(&mut other.buffer);
        std::mem::swap(&mut self.size, &mut other.size);
        std::mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Consume the array, returning exactly its elements.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        let Self {
            mut buffer, size, ..
        } = self;
        match buffer.release() {
            Some(block) => {
                let mut elements = block.into_vec();
                elements.truncate(size);
                elements.into_boxed_slice()
            }
            None => Box::default(),
        }
    }

    /// `len() + additional`, or a length overflow naming both terms.
    fn required(&self, additional: usize) -> Result<usize, ArrayError> {
        self.size
            .checked_add(additional)
            .ok_or(ArrayError::LengthOverflow {
                size: self.size,
                additional,
            })
    }

    /// Doubling policy. Falls back to exact fit if doubling overflows.
    fn grown_capacity(&self, required: usize) -> usize {
        self.capacity
            .checked_mul(GROWTH_FACTOR)
            .map_or(required, |doubled| doubled.max(required))
    }

    /// Reallocate to `new_capacity` slots and move the elements across.
    ///
    /// With `gap = Some(at)`, elements `[at, len)` land one slot further
    /// right, leaving slot `at` default-initialized for the caller.
    fn regrow(&mut self, new_capacity: usize, gap: Option<usize>) -> Result<(), BufferError>
    where
        T: Default,
    {
        let size = self.size;
        debug_assert!(new_capacity >= size + usize::from(gap.is_some()));

        let mut grown = Buffer::try_alloc(new_capacity)?;
        {
            let old = &mut self.buffer.as_mut_slice()[..size];
            let new = grown.as_mut_slice();
            match gap {
                Some(at) => {
                    new[..at].swap_with_slice(&mut old[..at]);
                    new[at + 1..=size].swap_with_slice(&mut old[at..]);
                }
                None => new[..size].swap_with_slice(old),
            }
        }
        self.buffer.swap(&mut grown);
        self.capacity = new_capacity;
        debug_assert_eq!(self.capacity, self.buffer.slot_count());
        Ok(())
    }
}

/// Unwrap a growth result on the panicking API surface.
fn infallible<R>(result: Result<R, ArrayError>) -> R {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies allocate the source's full capacity, not just its length.
impl<T: Clone + Default> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut buffer = Buffer::alloc(self.capacity);
        buffer.as_mut_slice()[..self.size].clone_from_slice(self.as_slice());
        Self {
            buffer,
            size: self.size,
            capacity: self.capacity,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap_with(&mut copy);
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Unchecked-contract access over `[0, len())`, by position or range.
/// Out-of-bounds indices panic rather than reading spare slots.
impl<T, I: SliceIndex<[T]>> Index<I> for DynamicArray<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &I::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynamicArray<T> {
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_boxed(elements.into_boxed_slice())
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(Vec::from(elements))
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(elements: &[T]) -> Self {
        Self::from(elements.to_vec())
    }
}

impl<T: Default> From<ReserveRequest> for DynamicArray<T> {
    fn from(request: ReserveRequest) -> Self {
        Self::with_reserve(request)
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(array: DynamicArray<T>) -> Self {
        array.into_boxed_slice().into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::reserve;

    fn one_two_three() -> DynamicArray<i32> {
        DynamicArray::from([1, 2, 3])
    }

    #[test]
    fn new_does_not_allocate() {
        let arr: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.capacity(), 0);
        assert!(arr.is_empty());
    }

    #[test]
    fn with_len_default_initializes() {
        let arr: DynamicArray<i32> = DynamicArray::with_len(5);
        assert_eq!(arr.len(), 5);
        assert_eq!(arr.capacity(), 5);
        assert!(arr.iter().all(|&v| v == 0));
    }

    #[test]
    fn from_elem_fills_with_value() {
        let arr = DynamicArray::from_elem(3, 42);
        assert_eq!(arr.as_slice(), &[42, 42, 42]);
        assert_eq!(arr.capacity(), 3);
    }

    #[test]
    fn from_elem_zero_is_empty() {
        let arr = DynamicArray::from_elem(0, String::from("x"));
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), 0);
    }

    #[test]
    fn literal_sequence_sets_size_and_capacity() {
        let arr = one_two_three();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.capacity(), 3);
        assert_eq!(arr.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn reserve_request_allocates_without_elements() {
        let arr: DynamicArray<i32> = DynamicArray::with_reserve(reserve(8));
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.capacity(), 8);
    }

    #[test]
    fn push_back_within_capacity_keeps_capacity() {
        let mut arr: DynamicArray<i32> = DynamicArray::with_capacity(4);
        arr.push_back(1);
        arr.push_back(2);
        assert_eq!(arr.capacity(), 4);
        assert_eq!(arr.as_slice(), &[1, 2]);
    }

    #[test]
    fn push_back_growth_doubles() {
        let mut arr = one_two_three();
        arr.push_back(4);
        assert_eq!(arr.capacity(), 6);
        assert_eq!(arr.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn push_back_on_empty_allocates_one_slot() {
        let mut arr = DynamicArray::new();
        arr.push_back(9);
        assert_eq!(arr.capacity(), 1);
        arr.push_back(10);
        assert_eq!(arr.capacity(), 2);
        arr.push_back(11);
        assert_eq!(arr.capacity(), 4);
    }

    #[test]
    fn pop_back_returns_last_and_keeps_capacity() {
        let mut arr = one_two_three();
        assert_eq!(arr.pop_back(), Some(3));
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.capacity(), 3);
    }

    #[test]
    fn pop_back_on_empty_is_noop() {
        let mut arr: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(arr.pop_back(), None);
        assert_eq!(arr.len(), 0);
    }

    #[test]
    fn insert_with_spare_capacity_shifts_tail() {
        let mut arr: DynamicArray<i32> = DynamicArray::with_capacity(4);
        arr.push_back(1);
        arr.push_back(2);
        arr.push_back(3);
        let at = arr.insert(1, 99);
        assert_eq!(at, 1);
        assert_eq!(arr.as_slice(), &[1, 99, 2, 3]);
        assert_eq!(arr.capacity(), 4);
    }

    #[test]
    fn insert_when_full_grows_and_splices() {
        let mut arr = one_two_three();
        let at = arr.insert(1, 99);
        assert_eq!(at, 1);
        assert_eq!(arr.as_slice(), &[1, 99, 2, 3]);
        assert_eq!(arr.capacity(), 6);
    }

    #[test]
    fn insert_at_front_and_end() {
        let mut arr = one_two_three();
        arr.insert(0, 0);
        arr.insert(arr.len(), 4);
        assert_eq!(arr.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn insert_into_empty() {
        let mut arr = DynamicArray::new();
        assert_eq!(arr.insert(0, 5), 0);
        assert_eq!(arr.as_slice(), &[5]);
        assert_eq!(arr.capacity(), 1);
    }

    #[test]
    #[should_panic(expected = "insert index 4 out of bounds for size 3")]
    fn insert_past_end_panics() {
        let mut arr = one_two_three();
        arr.insert(4, 0);
    }

    #[test]
    fn erase_shifts_tail_left() {
        let mut arr = DynamicArray::from([1, 99, 2, 3]);
        let next = arr.erase(1);
        assert_eq!(next, 1);
        assert_eq!(arr[next], 2);
        assert_eq!(arr.as_slice(), &[1, 2, 3]);
        assert_eq!(arr.capacity(), 4);
    }

    #[test]
    fn erase_last_returns_end() {
        let mut arr = one_two_three();
        assert_eq!(arr.erase(2), 2);
        assert_eq!(arr.len(), 2);
    }

    #[test]
    #[should_panic(expected = "erase index 3 out of bounds for size 3")]
    fn erase_at_end_panics() {
        let mut arr = one_two_three();
        arr.erase(3);
    }

    #[test]
    fn resize_shrink_keeps_capacity() {
        let mut arr = DynamicArray::from([1, 2, 3, 4]);
        arr.resize(2);
        assert_eq!(arr.as_slice(), &[1, 2]);
        assert_eq!(arr.capacity(), 4);
    }

    #[test]
    fn resize_within_capacity_resets_exposed_slots() {
        let mut arr = DynamicArray::from([1, 2, 3, 4]);
        arr.resize(1);
        arr.resize(3);
        assert_eq!(arr.as_slice(), &[1, 0, 0]);
        assert_eq!(arr.capacity(), 4);
    }

    #[test]
    fn resize_past_capacity_grows() {
        let mut arr = one_two_three();
        arr.resize(5);
        assert_eq!(arr.as_slice(), &[1, 2, 3, 0, 0]);
        assert_eq!(arr.capacity(), 6);

        arr.resize(20);
        assert_eq!(arr.len(), 20);
        assert_eq!(arr.capacity(), 20);
    }

    #[test]
    fn reserve_grows_to_exact_capacity() {
        let mut arr = one_two_three();
        arr.reserve(10);
        assert_eq!(arr.capacity(), 10);
        assert_eq!(arr.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn reserve_smaller_is_noop() {
        let mut arr = one_two_three();
        arr.reserve(2);
        assert_eq!(arr.capacity(), 3);
        assert_eq!(arr.len(), 3);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut arr = one_two_three();
        arr.clear();
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), 3);
        arr.push_back(7);
        assert_eq!(arr.as_slice(), &[7]);
    }

    #[test]
    fn at_checks_bounds() {
        let arr = one_two_three();
        assert_eq!(arr.at(2), Ok(&3));
        assert_eq!(
            arr.at(3),
            Err(ArrayError::OutOfRange { index: 3, size: 3 })
        );
    }

    #[test]
    fn at_ignores_spare_capacity() {
        let mut arr: DynamicArray<i32> = DynamicArray::with_capacity(8);
        arr.push_back(1);
        assert!(arr.at(1).is_err());
    }

    #[test]
    fn at_mut_writes_through() {
        let mut arr = one_two_three();
        *arr.at_mut(0).unwrap() = 10;
        assert_eq!(arr[0], 10);
        assert!(arr.at_mut(5).is_err());
    }

    #[test]
    #[should_panic]
    fn index_past_size_panics_even_with_capacity() {
        let mut arr: DynamicArray<i32> = DynamicArray::with_capacity(8);
        arr.push_back(1);
        let _ = arr[1];
    }

    #[test]
    fn index_assignment() {
        let mut arr = one_two_three();
        arr[1] = 20;
        assert_eq!(arr.as_slice(), &[1, 20, 3]);
    }

    #[test]
    fn swap_with_exchanges_everything() {
        let mut a = one_two_three();
        let mut b: DynamicArray<i32> = DynamicArray::with_capacity(10);
        a.swap_with(&mut b);
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 10);
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert_eq!(b.capacity(), 3);
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut src = one_two_three();
        let dst = std::mem::take(&mut src);
        assert_eq!(src.len(), 0);
        assert_eq!(src.capacity(), 0);
        assert_eq!(dst.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn clone_copies_capacity() {
        let mut src: DynamicArray<i32> = DynamicArray::with_capacity(10);
        src.push_back(1);
        src.push_back(2);
        let copy = src.clone();
        assert_eq!(copy.as_slice(), &[1, 2]);
        assert_eq!(copy.capacity(), 10);
    }

    #[test]
    fn clone_from_replaces_contents() {
        let src = one_two_three();
        let mut dst = DynamicArray::from([9, 9, 9, 9, 9]);
        dst.clone_from(&src);
        assert_eq!(dst.as_slice(), &[1, 2, 3]);
        assert_eq!(dst.capacity(), 3);
    }

    #[test]
    fn into_boxed_slice_drops_spare_slots() {
        let mut arr: DynamicArray<i32> = DynamicArray::with_capacity(8);
        arr.push_back(1);
        arr.push_back(2);
        assert_eq!(&*arr.into_boxed_slice(), &[1, 2]);

        let empty: DynamicArray<i32> = DynamicArray::new();
        assert!(empty.into_boxed_slice().is_empty());
    }

    #[test]
    fn try_reserve_overflow_leaves_array_unchanged() {
        let mut arr: DynamicArray<u64> = one_two_three().iter().map(|&v| v as u64).collect();
        let err = arr.try_reserve(usize::MAX).unwrap_err();
        assert!(matches!(
            err,
            ArrayError::Alloc(BufferError::CapacityOverflow { .. })
        ));
        assert_eq!(arr.as_slice(), &[1, 2, 3]);
        assert_eq!(arr.capacity(), 3);
    }

    #[test]
    fn try_resize_overflow_leaves_array_unchanged() {
        let mut arr = DynamicArray::from([1u32, 2]);
        assert!(arr.try_resize(usize::MAX).is_err());
        assert_eq!(arr.as_slice(), &[1, 2]);
    }

    #[test]
    fn slice_methods_via_deref() {
        let mut arr = DynamicArray::from([3, 1, 2]);
        arr.sort();
        assert_eq!(arr.first(), Some(&1));
        assert!(arr.contains(&3));
    }

    #[test]
    fn stale_slot_is_not_observable_after_clear() {
        let mut arr = DynamicArray::from([String::from("a"), String::from("b")]);
        arr.clear();
        arr.resize(2);
        assert!(arr.iter().all(String::is_empty));
    }

    #[test]
    fn reference_scenario() {
        let mut arr = one_two_three();
        assert_eq!((arr.len(), arr.capacity()), (3, 3));

        arr.push_back(4);
        assert!(arr.capacity() >= 4);
        assert_eq!(arr.as_slice(), &[1, 2, 3, 4]);

        arr.insert(1, 99);
        assert_eq!(arr.as_slice(), &[1, 99, 2, 3, 4]);

        arr.erase(1);
        assert_eq!(arr.as_slice(), &[1, 2, 3, 4]);

        assert!(matches!(arr.at(10), Err(ArrayError::OutOfRange { .. })));

        let capacity = arr.capacity();
        arr.resize(2);
        assert_eq!(arr.as_slice(), &[1, 2]);
        assert_eq!(arr.capacity(), capacity);
    }

    #[test]
    fn range_indexing_covers_logical_elements() {
        let mut arr = DynamicArray::from([1, 2, 3, 4]);
        arr.reserve(10);
        assert_eq!(&arr[1..3], &[2, 3]);
        assert_eq!(&arr[2..], &[3, 4]);
        assert_eq!(&arr[..], &[1, 2, 3, 4]);
        arr[..2].fill(0);
        assert_eq!(arr.as_slice(), &[0, 0, 3, 4]);
    }

    #[test]
    #[should_panic]
    fn range_past_size_panics_even_with_capacity() {
        let mut arr: DynamicArray<i32> = DynamicArray::with_capacity(8);
        arr.push_back(1);
        let _ = &arr[..2];
    }

    #[test]
    fn length_overflow_names_size_and_additional() {
        let arr: DynamicArray<()> = DynamicArray {
            buffer: Buffer::new(),
            size: usize::MAX,
            capacity: usize::MAX,
        };
        assert_eq!(
            arr.required(1),
            Err(ArrayError::LengthOverflow {
                size: usize::MAX,
                additional: 1,
            })
        );
        assert_eq!(arr.required(0), Ok(usize::MAX));
    }

    #[test]
    fn insert_grows_reserved_array_filled_to_capacity() {
        let mut arr: DynamicArray<i32> = DynamicArray::with_reserve(reserve(2));
        arr.push_back(1);
        arr.push_back(3);
        assert_eq!(arr.capacity(), 2);
        assert_eq!(arr.insert(1, 2), 1);
        assert_eq!(arr.as_slice(), &[1, 2, 3]);
        assert_eq!(arr.capacity(), 4);
    }

    #[test]
    fn resize_empty_allocates_exactly() {
        let mut arr: DynamicArray<i32> = DynamicArray::new();
        arr.resize(3);
        assert_eq!((arr.len(), arr.capacity()), (3, 3));
        assert_eq!(arr.as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn zero_sized_elements() {
        let mut arr: DynamicArray<()> = DynamicArray::new();
        arr.push_back(());
        arr.push_back(());
        assert_eq!(arr.insert(1, ()), 1);
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.erase(0), 0);
        assert_eq!(arr.len(), 2);
    }

    #[test]
    fn erase_only_element_returns_zero() {
        let mut arr = DynamicArray::from([7]);
        assert_eq!(arr.erase(0), 0);
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), 1);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn at_agrees_with_index(values in proptest::collection::vec(any::<i32>(), 0..64), probe in 0usize..80) {
                let arr = DynamicArray::from(values.clone());
                if probe < arr.len() {
                    prop_assert_eq!(arr.at(probe), Ok(&arr[probe]));
                } else {
                    prop_assert_eq!(
                        arr.at(probe),
                        Err(ArrayError::OutOfRange { index: probe, size: values.len() })
                    );
                }
            }

            #[test]
            fn pushes_are_retained_in_order(values in proptest::collection::vec(any::<u16>(), 0..200)) {
                let mut arr = DynamicArray::new();
                for &v in &values {
                    arr.push_back(v);
                }
                prop_assert_eq!(arr.len(), values.len());
                prop_assert!(arr.capacity() >= values.len());
                prop_assert_eq!(arr.as_slice(), values.as_slice());
            }

            #[test]
            fn insert_then_erase_round_trips(
                values in proptest::collection::vec(any::<i64>(), 0..64),
                pos_seed in any::<usize>(),
                value in any::<i64>(),
            ) {
                let mut arr = DynamicArray::from(values.clone());
                let pos = pos_seed % (values.len() + 1);
                let at = arr.insert(pos, value);
                prop_assert_eq!(arr[at], value);
                arr.erase(at);
                prop_assert_eq!(arr.as_slice(), values.as_slice());
            }

            #[test]
            fn reserve_never_changes_len(
                values in proptest::collection::vec(any::<u8>(), 0..64),
                request in 0usize..256,
            ) {
                let mut arr = DynamicArray::from(values.clone());
                let old_capacity = arr.capacity();
                arr.reserve(request);
                prop_assert_eq!(arr.len(), values.len());
                prop_assert!(arr.capacity() >= request.max(old_capacity));
                prop_assert_eq!(arr.as_slice(), values.as_slice());
            }

            #[test]
            fn resize_truncates_or_pads_with_defaults(
                values in proptest::collection::vec(1u32..1000, 0..64),
                new_len in 0usize..160,
            ) {
                let mut arr = DynamicArray::from(values.clone());
                let old_capacity = arr.capacity();
                arr.resize(new_len);
                prop_assert_eq!(arr.len(), new_len);
                if new_len <= values.len() {
                    prop_assert_eq!(arr.capacity(), old_capacity);
                    prop_assert_eq!(arr.as_slice(), &values[..new_len]);
                } else {
                    prop_assert_eq!(&arr[..values.len()], values.as_slice());
                    prop_assert!(arr[values.len()..].iter().all(|&v| v == 0));
                }
                if new_len > old_capacity {
                    prop_assert!(arr.capacity() >= new_len);
                }
            }

            #[test]
            fn growth_follows_doubling(pushes in 1usize..300) {
                let mut arr = DynamicArray::new();
                let mut expected_capacity = 0usize;
                for i in 0..pushes {
                    if i == expected_capacity {
                        expected_capacity = (i + 1).max(expected_capacity * 2);
                    }
                    arr.push_back(i);
                    prop_assert_eq!(arr.capacity(), expected_capacity);
                }
            }
        }
    }
}
