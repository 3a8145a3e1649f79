//! Slice-level batch kernels.
//!
//! Each `simd_*` kernel walks the input in full four-lane blocks and finishes
//! with one partial block, exactly like a native SSE loop would. The
//! `par_*` kernels hand contiguous, lane-aligned chunks of the output to
//! rayon and run the same sequential kernel on each chunk.

use rayon::prelude::*;

use crate::config::Config;
use crate::simd::sse::m128::LANE_COUNT;
use crate::simd::sse::rounding::{get_rounding_mode, RoundingMode};
use crate::simd::sse::{
    add_ps, cvtps_pi32_with, cvttps_pi32, div_ps, movehl_ps, mul_ps, rcp_ps, rsqrt_ps, sqrt_ps,
    sub_ps, M128, M64,
};
use crate::simd::traits::{
    SimdAdd, SimdApprox, SimdConvert, SimdDiv, SimdMul, SimdSub, SimdVec,
};

#[inline(always)]
fn check_binary(a: &[f32], b: &[f32]) {
    assert!(
        !a.is_empty() & !b.is_empty(),
        "Size can't be empty (size zero)"
    );
    assert_eq!(a.len(), b.len(), "Vectors must be the same length");
}

/// Output chunk length for the parallel kernels: a multiple of the lane
/// count so only the final chunk has a partial block.
#[inline(always)]
fn parallel_chunk_size(config: &Config) -> usize {
    ((config.parallel_chunk_size / LANE_COUNT) * LANE_COUNT).max(LANE_COUNT)
}

// ================================================================================================
// SCALAR BASELINES
// ================================================================================================

#[inline(always)]
pub fn scalar_add(a: &[f32], b: &[f32]) -> Vec<f32> {
    check_binary(a, b);
    a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
}

#[inline(always)]
pub fn scalar_sub(a: &[f32], b: &[f32]) -> Vec<f32> {
    check_binary(a, b);
    a.iter().zip(b.iter()).map(|(x, y)| x - y).collect()
}

#[inline(always)]
pub fn scalar_mul(a: &[f32], b: &[f32]) -> Vec<f32> {
    check_binary(a, b);
    a.iter().zip(b.iter()).map(|(x, y)| x * y).collect()
}

#[inline(always)]
pub fn scalar_div(a: &[f32], b: &[f32]) -> Vec<f32> {
    check_binary(a, b);
    a.iter().zip(b.iter()).map(|(x, y)| x / y).collect()
}

#[inline(always)]
pub fn scalar_sqrt(a: &[f32]) -> Vec<f32> {
    assert!(!a.is_empty(), "Size can't be empty (size zero)");
    a.iter().map(|x| x.sqrt()).collect()
}

/// Host-side rounding followed by a checked cast; out-of-range and NaN
/// inputs give `i32::MIN`.
#[inline(always)]
pub fn scalar_to_i32(a: &[f32], mode: RoundingMode) -> Vec<i32> {
    assert!(!a.is_empty(), "Size can't be empty (size zero)");
    a.iter()
        .map(|&x| num::ToPrimitive::to_i32(&mode.round(x)).unwrap_or(i32::MIN))
        .collect()
}

// ================================================================================================
// BINARY KERNELS
// ================================================================================================

#[inline(always)]
fn simd_binary_block<F>(a: *const f32, b: *const f32, c: *mut f32, op: &F)
where
    F: Fn(M128, M128) -> M128,
{
    // Assumes LANE_COUNT readable/writable elements at each pointer
    let a_chunk = unsafe { M128::load(a, LANE_COUNT) };
    let b_chunk = unsafe { M128::load(b, LANE_COUNT) };
    unsafe { op(a_chunk, b_chunk).store_at(c) };
}

#[inline(always)]
fn simd_binary_partial_block<F>(a: *const f32, b: *const f32, c: *mut f32, size: usize, op: &F)
where
    F: Fn(M128, M128) -> M128,
{
    let a_chunk = unsafe { M128::load_partial(a, size) };
    let b_chunk = unsafe { M128::load_partial(b, size) };
    unsafe { op(a_chunk, b_chunk).store_at_partial(c, size) };
}

fn simd_binary_into<F>(a: &[f32], b: &[f32], c: &mut [f32], op: &F)
where
    F: Fn(M128, M128) -> M128,
{
    let size = c.len();
    let step = LANE_COUNT;

    let nb_lanes = size - (size % step);
    let rem_lanes = size - nb_lanes;

    for i in (0..nb_lanes).step_by(step) {
        simd_binary_block(a[i..].as_ptr(), b[i..].as_ptr(), c[i..].as_mut_ptr(), op);
    }

    if rem_lanes > 0 {
        simd_binary_partial_block(
            a[nb_lanes..].as_ptr(),
            b[nb_lanes..].as_ptr(),
            c[nb_lanes..].as_mut_ptr(),
            rem_lanes,
            op,
        );
    }
}

fn simd_binary<F>(a: &[f32], b: &[f32], op: F) -> Vec<f32>
where
    F: Fn(M128, M128) -> M128,
{
    check_binary(a, b);

    let mut c = vec![0.0f32; a.len()];
    simd_binary_into(a, b, &mut c, &op);
    c
}

fn parallel_simd_binary<F>(a: &[f32], b: &[f32], op: F) -> Vec<f32>
where
    F: Fn(M128, M128) -> M128 + Sync,
{
    check_binary(a, b);

    let config = Config::get();
    let size = a.len();

    if size <= config.parallel_threshold {
        return simd_binary(a, b, op);
    }

    let chunk_size = parallel_chunk_size(config);
    let mut c = vec![0.0f32; size];

    c.par_chunks_mut(chunk_size)
        .enumerate()
        .for_each(|(i, c_chunk)| {
            let start = i * chunk_size;
            let end = start + c_chunk.len();
            simd_binary_into(&a[start..end], &b[start..end], c_chunk, &op);
        });

    c
}

// ================================================================================================
// UNARY KERNELS
// ================================================================================================

fn simd_unary_into<F>(a: &[f32], c: &mut [f32], op: &F)
where
    F: Fn(M128) -> M128,
{
    let size = c.len();
    let step = LANE_COUNT;

    let nb_lanes = size - (size % step);
    let rem_lanes = size - nb_lanes;

    for i in (0..nb_lanes).step_by(step) {
        let chunk = unsafe { M128::load(a[i..].as_ptr(), LANE_COUNT) };
        unsafe { op(chunk).store_at(c[i..].as_mut_ptr()) };
    }

    if rem_lanes > 0 {
        let chunk = unsafe { M128::load_partial(a[nb_lanes..].as_ptr(), rem_lanes) };
        unsafe { op(chunk).store_at_partial(c[nb_lanes..].as_mut_ptr(), rem_lanes) };
    }
}

fn simd_unary<F>(a: &[f32], op: F) -> Vec<f32>
where
    F: Fn(M128) -> M128,
{
    assert!(!a.is_empty(), "Size can't be empty (size zero)");

    let mut c = vec![0.0f32; a.len()];
    simd_unary_into(a, &mut c, &op);
    c
}

fn parallel_simd_unary<F>(a: &[f32], op: F) -> Vec<f32>
where
    F: Fn(M128) -> M128 + Sync,
{
    assert!(!a.is_empty(), "Size can't be empty (size zero)");

    let config = Config::get();
    let size = a.len();

    if size <= config.parallel_threshold {
        return simd_unary(a, op);
    }

    let chunk_size = parallel_chunk_size(config);
    let mut c = vec![0.0f32; size];

    c.par_chunks_mut(chunk_size)
        .enumerate()
        .for_each(|(i, c_chunk)| {
            let start = i * chunk_size;
            simd_unary_into(&a[start..start + c_chunk.len()], c_chunk, &op);
        });

    c
}

// ================================================================================================
// CONVERSION KERNELS
// ================================================================================================

/// Converts four lanes as two 64-bit halves, the way the packed conversion
/// instructions operate.
#[inline(always)]
fn convert_block<F>(v: M128, half: &F) -> [i32; LANE_COUNT]
where
    F: Fn(M128) -> M64,
{
    let [x0, x1] = half(v).to_i32x2();
    let [x2, x3] = half(movehl_ps(v, v)).to_i32x2();
    [x0, x1, x2, x3]
}

fn simd_convert_into<F>(a: &[f32], c: &mut [i32], half: &F)
where
    F: Fn(M128) -> M64,
{
    for (src, dst) in a.chunks(LANE_COUNT).zip(c.chunks_mut(LANE_COUNT)) {
        let lanes = convert_block(M128::new(src), half);
        dst.copy_from_slice(&lanes[..dst.len()]);
    }
}

fn simd_convert<F>(a: &[f32], half: F) -> Vec<i32>
where
    F: Fn(M128) -> M64,
{
    assert!(!a.is_empty(), "Size can't be empty (size zero)");

    let mut c = vec![0i32; a.len()];
    simd_convert_into(a, &mut c, &half);
    c
}

fn parallel_simd_convert(a: &[f32], mode: RoundingMode) -> Vec<i32> {
    assert!(!a.is_empty(), "Size can't be empty (size zero)");

    let half = move |v: M128| cvtps_pi32_with(v, mode);
    let config = Config::get();
    let size = a.len();

    if size <= config.parallel_threshold {
        return simd_convert(a, half);
    }

    let chunk_size = parallel_chunk_size(config);
    let mut c = vec![0i32; size];

    c.par_chunks_mut(chunk_size)
        .enumerate()
        .for_each(|(i, c_chunk)| {
            let start = i * chunk_size;
            simd_convert_into(&a[start..start + c_chunk.len()], c_chunk, &half);
        });

    c
}

// ================================================================================================
// TRAIT IMPLEMENTATIONS
// ================================================================================================

macro_rules! impl_binary_trait {
    ($trait:ident, $simd:ident, $par:ident, $scalar:ident, $op:path) => {
        impl<'b> $trait<&'b [f32]> for &[f32] {
            type Output = Vec<f32>;

            #[inline(always)]
            fn $simd(self, rhs: &'b [f32]) -> Self::Output {
                simd_binary(self, rhs, $op)
            }

            #[inline(always)]
            fn $par(self, rhs: &'b [f32]) -> Self::Output {
                parallel_simd_binary(self, rhs, $op)
            }

            #[inline(always)]
            fn $scalar(self, rhs: &'b [f32]) -> Self::Output {
                $scalar(self, rhs)
            }
        }
    };
}

impl_binary_trait!(SimdAdd, simd_add, par_simd_add, scalar_add, add_ps);
impl_binary_trait!(SimdSub, simd_sub, par_simd_sub, scalar_sub, sub_ps);
impl_binary_trait!(SimdMul, simd_mul, par_simd_mul, scalar_mul, mul_ps);
impl_binary_trait!(SimdDiv, simd_div, par_simd_div, scalar_div, div_ps);

impl SimdApprox for &[f32] {
    type Output = Vec<f32>;

    #[inline(always)]
    fn simd_rcp(self) -> Self::Output {
        simd_unary(self, rcp_ps)
    }

    #[inline(always)]
    fn par_simd_rcp(self) -> Self::Output {
        parallel_simd_unary(self, rcp_ps)
    }

    #[inline(always)]
    fn simd_rsqrt(self) -> Self::Output {
        simd_unary(self, rsqrt_ps)
    }

    #[inline(always)]
    fn par_simd_rsqrt(self) -> Self::Output {
        parallel_simd_unary(self, rsqrt_ps)
    }

    #[inline(always)]
    fn simd_sqrt(self) -> Self::Output {
        simd_unary(self, sqrt_ps)
    }

    #[inline(always)]
    fn par_simd_sqrt(self) -> Self::Output {
        parallel_simd_unary(self, sqrt_ps)
    }

    #[inline(always)]
    fn scalar_sqrt(self) -> Self::Output {
        scalar_sqrt(self)
    }
}

impl SimdConvert for &[f32] {
    type Output = Vec<i32>;

    #[inline(always)]
    fn simd_to_i32(self) -> Self::Output {
        let mode = get_rounding_mode();
        simd_convert(self, move |v| cvtps_pi32_with(v, mode))
    }

    #[inline(always)]
    fn par_simd_to_i32(self) -> Self::Output {
        parallel_simd_convert(self, get_rounding_mode())
    }

    #[inline(always)]
    fn simd_to_i32_truncated(self) -> Self::Output {
        simd_convert(self, cvttps_pi32)
    }

    #[inline(always)]
    fn scalar_to_i32(self) -> Self::Output {
        scalar_to_i32(self, get_rounding_mode())
    }
}
