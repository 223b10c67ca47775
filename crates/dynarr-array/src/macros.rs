//! Literal construction.

/// Build a [`DynamicArray`](crate::DynamicArray) from a literal sequence.
///
/// `dynarr![a, b, c]` produces an array whose size and capacity both equal
/// the number of elements. `dynarr![value; n]` repeats a cloneable value.
///
/// ```
/// use dynarr_array::dynarr;
///
/// let arr = dynarr![1, 2, 3];
/// assert_eq!(arr.len(), 3);
/// assert_eq!(arr.capacity(), 3);
///
/// let zeros = dynarr![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! dynarr {
    () => {
        $crate::DynamicArray::new()
    };
    ($value:expr; $len:expr) => {
        $crate::DynamicArray::from_elem($len, $value)
    };
    ($($element:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($element),+])
    };
}
