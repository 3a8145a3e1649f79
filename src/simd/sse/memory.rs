//! Transfers between vectors and memory.
//!
//! # Alignment
//!
//! The aligned forms ([`load_ps`], [`store_ps`], [`loadr_ps`],
//! [`storer_ps`], [`store_ps1`], [`stream_ps`]) take an
//! [`Align16`] so that the 16-byte alignment they require is guaranteed by
//! the type. Three escape hatches exist for memory that is not wrapped:
//!
//! - the `unsafe` `*_ptr` functions, which document the precondition and
//!   only check it with `debug_assert!`,
//! - the `try_*` functions, which check length and alignment of a slice and
//!   report violations as [`SsemuError`](crate::error::SsemuError),
//! - the unaligned forms ([`loadu_ps`], [`storeu_ps`]), which have no
//!   alignment precondition at all.
//!
//! Lanes are moved as raw bits: NaN payloads are preserved.

use crate::error::{alignment_error, length_error, Result};
use crate::utils::{is_aligned, Align16, SSE_ALIGNMENT};

use super::m128::LANE_COUNT;
use super::M128;

#[inline(always)]
fn from_array(mem: &[f32; 4]) -> M128 {
    M128::from_u32x4(mem.map(f32::to_bits))
}

#[inline(always)]
fn to_array(a: M128) -> [f32; 4] {
    a.to_u32x4().map(f32::from_bits)
}

// ==== loads ====

/// Loads four lanes from 16-byte aligned memory.
#[inline]
pub fn load_ps(mem: &Align16<[f32; 4]>) -> M128 {
    from_array(mem)
}

#[inline]
pub fn loadu_ps(mem: &[f32; 4]) -> M128 {
    from_array(mem)
}

/// Loads four lanes in reverse order: `mem[3]` lands in lane 0.
#[inline]
pub fn loadr_ps(mem: &Align16<[f32; 4]>) -> M128 {
    let [m0, m1, m2, m3] = **mem;
    from_array(&[m3, m2, m1, m0])
}

/// `*mem` in lane 0, zero elsewhere.
#[inline]
pub fn load_ss(mem: &f32) -> M128 {
    M128::from_u32x4([mem.to_bits(), 0, 0, 0])
}

/// `*mem` broadcast to all lanes.
#[inline]
pub fn load_ps1(mem: &f32) -> M128 {
    M128::from_u32x4([mem.to_bits(); 4])
}

pub use self::load_ps1 as load1_ps;

/// `[a0, a1, mem[0], mem[1]]`.
#[inline]
pub fn loadh_pi(a: M128, mem: &[f32; 2]) -> M128 {
    let high = (mem[0].to_bits() as u64) | ((mem[1].to_bits() as u64) << 32);
    M128::from_halves(a.low64(), high)
}

/// `[mem[0], mem[1], a2, a3]`.
#[inline]
pub fn loadl_pi(a: M128, mem: &[f32; 2]) -> M128 {
    let low = (mem[0].to_bits() as u64) | ((mem[1].to_bits() as u64) << 32);
    M128::from_halves(low, a.high64())
}

// ==== stores ====

#[inline]
pub fn store_ps(mem: &mut Align16<[f32; 4]>, a: M128) {
    **mem = to_array(a);
}

#[inline]
pub fn storeu_ps(mem: &mut [f32; 4], a: M128) {
    *mem = to_array(a);
}

/// Stores the lanes in reverse order: lane 0 lands in `mem[3]`.
#[inline]
pub fn storer_ps(mem: &mut Align16<[f32; 4]>, a: M128) {
    let [l0, l1, l2, l3] = to_array(a);
    **mem = [l3, l2, l1, l0];
}

/// Stores lane 0 only.
#[inline]
pub fn store_ss(mem: &mut f32, a: M128) {
    *mem = f32::from_bits(a.0 as u32);
}

/// Stores lane 0 into all four slots.
#[inline]
pub fn store_ps1(mem: &mut Align16<[f32; 4]>, a: M128) {
    **mem = [f32::from_bits(a.0 as u32); 4];
}

pub use self::store_ps1 as store1_ps;

/// Stores lanes 2 and 3.
#[inline]
pub fn storeh_pi(mem: &mut [f32; 2], a: M128) {
    let [_, _, l2, l3] = to_array(a);
    *mem = [l2, l3];
}

/// Stores lanes 0 and 1.
#[inline]
pub fn storel_pi(mem: &mut [f32; 2], a: M128) {
    let [l0, l1, _, _] = to_array(a);
    *mem = [l0, l1];
}

/// Non-temporal store. The cache-bypass hint has no observable effect on the
/// stored values; ordering with other stores is not modelled.
#[inline]
pub fn stream_ps(mem: &mut Align16<[f32; 4]>, a: M128) {
    store_ps(mem, a);
}

// ==== raw pointers ====

/// Loads four lanes from `ptr`.
///
/// # Safety
///
/// `ptr` must be valid for reading four `f32` and aligned to 16 bytes.
/// Alignment is only verified in debug builds.
#[inline]
pub unsafe fn load_ps_ptr(ptr: *const f32) -> M128 {
    debug_assert!(
        is_aligned(ptr, SSE_ALIGNMENT),
        "load_ps_ptr requires {SSE_ALIGNMENT}-byte alignment"
    );
    M128::from_u32x4(ptr.cast::<[u32; 4]>().read())
}

/// Loads four lanes from `ptr`.
///
/// # Safety
///
/// `ptr` must be valid for reading four `f32`. No alignment is required.
#[inline]
pub unsafe fn loadu_ps_ptr(ptr: *const f32) -> M128 {
    M128::from_u32x4(ptr.cast::<[u32; 4]>().read_unaligned())
}

/// Stores four lanes to `ptr`.
///
/// # Safety
///
/// `ptr` must be valid for writing four `f32` and aligned to 16 bytes.
/// Alignment is only verified in debug builds.
#[inline]
pub unsafe fn store_ps_ptr(ptr: *mut f32, a: M128) {
    debug_assert!(
        is_aligned(ptr, SSE_ALIGNMENT),
        "store_ps_ptr requires {SSE_ALIGNMENT}-byte alignment"
    );
    ptr.cast::<[u32; 4]>().write(a.to_u32x4());
}

/// Stores four lanes to `ptr`.
///
/// # Safety
///
/// `ptr` must be valid for writing four `f32`. No alignment is required.
#[inline]
pub unsafe fn storeu_ps_ptr(ptr: *mut f32, a: M128) {
    ptr.cast::<[u32; 4]>().write_unaligned(a.to_u32x4());
}

// ==== checked slices ====

#[inline(always)]
fn check_len(available: usize) -> Result<()> {
    if available < LANE_COUNT {
        return Err(length_error(LANE_COUNT, available));
    }
    Ok(())
}

#[inline(always)]
fn check_aligned(ptr: *const f32) -> Result<()> {
    if !is_aligned(ptr, SSE_ALIGNMENT) {
        return Err(alignment_error(ptr as usize, SSE_ALIGNMENT));
    }
    Ok(())
}

/// Loads the first four elements of a 16-byte aligned slice.
pub fn try_load_ps(mem: &[f32]) -> Result<M128> {
    check_len(mem.len())?;
    check_aligned(mem.as_ptr())?;
    // SAFETY: length and alignment were checked above.
    Ok(unsafe { load_ps_ptr(mem.as_ptr()) })
}

/// Loads the first four elements of a slice.
pub fn try_loadu_ps(mem: &[f32]) -> Result<M128> {
    check_len(mem.len())?;
    // SAFETY: length was checked above.
    Ok(unsafe { loadu_ps_ptr(mem.as_ptr()) })
}

/// Stores into the first four elements of a 16-byte aligned slice.
pub fn try_store_ps(mem: &mut [f32], a: M128) -> Result<()> {
    check_len(mem.len())?;
    check_aligned(mem.as_ptr())?;
    // SAFETY: length and alignment were checked above.
    unsafe { store_ps_ptr(mem.as_mut_ptr(), a) };
    Ok(())
}

/// Stores into the first four elements of a slice.
pub fn try_storeu_ps(mem: &mut [f32], a: M128) -> Result<()> {
    check_len(mem.len())?;
    // SAFETY: length was checked above.
    unsafe { storeu_ps_ptr(mem.as_mut_ptr(), a) };
    Ok(())
}
