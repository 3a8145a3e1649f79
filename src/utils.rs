use std::ops::{Deref, DerefMut};

/// Alignment, in bytes, of a 128-bit vector in memory.
pub const SSE_ALIGNMENT: usize = 16;

/// Wraps a value so that it is placed on a 16-byte boundary.
///
/// The aligned load and store instructions require their memory operand to
/// be aligned to the vector width. Taking `&Align16<[f32; 4]>` instead of a
/// raw pointer turns that precondition into a type-level guarantee.
///
/// ```rust
/// use ssemu::utils::{is_aligned, Align16};
///
/// let data = Align16([1.0f32, 2.0, 3.0, 4.0]);
/// assert!(is_aligned(data.as_ptr(), 16));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C, align(16))]
pub struct Align16<T>(pub T);

impl<T> Align16<T> {
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Align16<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Align16<T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Align16<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

/// Returns `true` if `ptr` is a multiple of `align` bytes.
///
/// # Panics
///
/// Panics if `align` is zero.
#[inline(always)]
pub fn is_aligned<T>(ptr: *const T, align: usize) -> bool {
    assert!(align != 0, "Alignment can't be zero");
    (ptr as usize) % align == 0
}
