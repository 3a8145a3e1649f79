//! Vector and slice-level traits.
//!
//! [`SimdVec`] is the load/store surface the slice kernels stream through.
//! The remaining traits are batch operations over whole slices, each offered
//! in three flavours:
//!
//! - `scalar_*`: plain per-element host arithmetic, the baseline
//! - `simd_*`: four lanes at a time through the emulated vector type
//! - `par_simd_*`: the `simd_*` kernel split across the rayon pool once the
//!   input is long enough to amortise the task overhead

pub trait SimdVec<T> {
    /// Builds a vector from the first lanes of `slice`. Shorter slices are
    /// zero-padded.
    fn new(slice: &[T]) -> Self;

    fn is_aligned(ptr: *const T) -> bool;

    /// Loads a full vector, choosing the aligned path when possible.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `size` elements.
    unsafe fn load(ptr: *const T, size: usize) -> Self;

    /// # Safety
    ///
    /// `ptr` must be valid for a full-vector read and suitably aligned.
    unsafe fn load_aligned(ptr: *const T) -> Self;

    /// # Safety
    ///
    /// `ptr` must be valid for a full-vector read.
    unsafe fn load_unaligned(ptr: *const T) -> Self;

    /// Loads `size` leading lanes and zeroes the rest.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `size` elements.
    unsafe fn load_partial(ptr: *const T, size: usize) -> Self;

    /// # Safety
    ///
    /// `ptr` must be valid for a full-vector write.
    unsafe fn store_at(&self, ptr: *mut T);

    /// Writes the `size` leading lanes only.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `size` elements.
    unsafe fn store_at_partial(&self, ptr: *mut T, size: usize);
}

pub trait SimdAdd<Rhs = Self> {
    type Output;

    fn simd_add(self, rhs: Rhs) -> Self::Output;
    fn par_simd_add(self, rhs: Rhs) -> Self::Output;
    fn scalar_add(self, rhs: Rhs) -> Self::Output;
}

pub trait SimdSub<Rhs = Self> {
    type Output;

    fn simd_sub(self, rhs: Rhs) -> Self::Output;
    fn par_simd_sub(self, rhs: Rhs) -> Self::Output;
    fn scalar_sub(self, rhs: Rhs) -> Self::Output;
}

pub trait SimdMul<Rhs = Self> {
    type Output;

    fn simd_mul(self, rhs: Rhs) -> Self::Output;
    fn par_simd_mul(self, rhs: Rhs) -> Self::Output;
    fn scalar_mul(self, rhs: Rhs) -> Self::Output;
}

pub trait SimdDiv<Rhs = Self> {
    type Output;

    fn simd_div(self, rhs: Rhs) -> Self::Output;
    fn par_simd_div(self, rhs: Rhs) -> Self::Output;
    fn scalar_div(self, rhs: Rhs) -> Self::Output;
}

/// Square root and the 12-bit reciprocal estimates.
pub trait SimdApprox {
    type Output;

    fn simd_rcp(self) -> Self::Output;
    fn par_simd_rcp(self) -> Self::Output;

    fn simd_rsqrt(self) -> Self::Output;
    fn par_simd_rsqrt(self) -> Self::Output;

    fn simd_sqrt(self) -> Self::Output;
    fn par_simd_sqrt(self) -> Self::Output;
    fn scalar_sqrt(self) -> Self::Output;
}

/// Float to `i32` conversion of every element.
///
/// The rounding variants use the calling thread's rounding mode. The
/// parallel variant reads that mode once and hands it to every worker, so
/// the result does not depend on which thread converts which chunk.
pub trait SimdConvert {
    type Output;

    fn simd_to_i32(self) -> Self::Output;
    fn par_simd_to_i32(self) -> Self::Output;
    fn simd_to_i32_truncated(self) -> Self::Output;
    fn scalar_to_i32(self) -> Self::Output;
}
