//! Floating-point arithmetic.
//!
//! Packed (`_ps`) forms apply the operation to each of the four lanes.
//! Scalar (`_ss`) forms compute only lane 0 and copy lanes 1..3 from the
//! first operand; the second operand's upper lanes are never read.
//!
//! # NaN results
//!
//! Results are produced the way the reference hardware produces them, not
//! the way the host FPU happens to:
//!
//! 1. if `a` is NaN the result is `a` quieted,
//! 2. else if `b` is NaN the result is `b` quieted,
//! 3. else if the operation is invalid (`inf - inf`, `0 * inf`, `0 / 0`,
//!    `sqrt(-1)`) the result is the default NaN `0xFFC0_0000`.
//!
//! `min` and `max` are the exception: they are pure selections and return
//! the second operand unchanged whenever either input is NaN.
//!
//! # Estimates
//!
//! `rcp` and `rsqrt` return a 12-bit estimate (relative error at most
//! `1.5 * 2^-12`). The estimate here is the exact value rounded to 12
//! significant bits, which makes it deterministic across hosts.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use super::M128;

/// Bit pattern of the default ("indefinite") quiet NaN.
pub const DEFAULT_NAN_BITS: u32 = 0xFFC0_0000;

const QUIET_BIT: u32 = 0x0040_0000;

// Low mantissa bits dropped by the 12-bit estimate.
const ESTIMATE_DROP_BITS: u32 = 12;

#[inline(always)]
pub(crate) fn quiet(x: f32) -> f32 {
    f32::from_bits(x.to_bits() | QUIET_BIT)
}

#[inline(always)]
fn default_nan() -> f32 {
    f32::from_bits(DEFAULT_NAN_BITS)
}

#[inline(always)]
fn binary(a: f32, b: f32, op: impl Fn(f32, f32) -> f32) -> f32 {
    if a.is_nan() {
        quiet(a)
    } else if b.is_nan() {
        quiet(b)
    } else {
        let r = op(a, b);
        if r.is_nan() {
            default_nan()
        } else {
            r
        }
    }
}

#[inline(always)]
fn add_lane(a: f32, b: f32) -> f32 {
    binary(a, b, |x, y| x + y)
}

#[inline(always)]
fn sub_lane(a: f32, b: f32) -> f32 {
    binary(a, b, |x, y| x - y)
}

#[inline(always)]
fn mul_lane(a: f32, b: f32) -> f32 {
    binary(a, b, |x, y| x * y)
}

#[inline(always)]
fn div_lane(a: f32, b: f32) -> f32 {
    binary(a, b, |x, y| x / y)
}

#[inline(always)]
fn sqrt_lane(a: f32) -> f32 {
    if a.is_nan() {
        quiet(a)
    } else if a < 0.0 {
        default_nan()
    } else {
        a.sqrt()
    }
}

#[inline(always)]
fn min_lane(a: f32, b: f32) -> f32 {
    if a < b {
        a
    } else {
        b
    }
}

#[inline(always)]
fn max_lane(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Rounds a normal, finite estimate to 12 significant bits. Subnormal
/// estimates flush to zero.
#[inline(always)]
fn round_estimate(r: f32) -> f32 {
    if r.is_infinite() || r == 0.0 {
        r
    } else if r.is_subnormal() {
        0.0f32.copysign(r)
    } else {
        let half = 1u32 << (ESTIMATE_DROP_BITS - 1);
        let keep = !((1u32 << ESTIMATE_DROP_BITS) - 1);
        f32::from_bits((r.to_bits() + half) & keep)
    }
}

#[inline(always)]
fn rcp_lane(a: f32) -> f32 {
    if a.is_nan() {
        quiet(a)
    } else if a == 0.0 || a.is_subnormal() {
        f32::INFINITY.copysign(a)
    } else {
        round_estimate((1.0 / a as f64) as f32)
    }
}

#[inline(always)]
fn rsqrt_lane(a: f32) -> f32 {
    if a.is_nan() {
        quiet(a)
    } else if a == 0.0 || a.is_subnormal() {
        f32::INFINITY.copysign(a)
    } else if a < 0.0 {
        default_nan()
    } else {
        round_estimate((1.0 / (a as f64).sqrt()) as f32)
    }
}

// ==== packed and scalar forms ====

#[inline]
pub fn add_ps(a: M128, b: M128) -> M128 {
    a.zip_f32(b, add_lane)
}

#[inline]
pub fn add_ss(a: M128, b: M128) -> M128 {
    a.with_lane0(b, add_lane)
}

#[inline]
pub fn sub_ps(a: M128, b: M128) -> M128 {
    a.zip_f32(b, sub_lane)
}

#[inline]
pub fn sub_ss(a: M128, b: M128) -> M128 {
    a.with_lane0(b, sub_lane)
}

#[inline]
pub fn mul_ps(a: M128, b: M128) -> M128 {
    a.zip_f32(b, mul_lane)
}

#[inline]
pub fn mul_ss(a: M128, b: M128) -> M128 {
    a.with_lane0(b, mul_lane)
}

#[inline]
pub fn div_ps(a: M128, b: M128) -> M128 {
    a.zip_f32(b, div_lane)
}

#[inline]
pub fn div_ss(a: M128, b: M128) -> M128 {
    a.with_lane0(b, div_lane)
}

#[inline]
pub fn sqrt_ps(a: M128) -> M128 {
    a.map_f32(sqrt_lane)
}

#[inline]
pub fn sqrt_ss(a: M128) -> M128 {
    a.with_lane0(a, |x, _| sqrt_lane(x))
}

/// Lane-wise `a < b ? a : b`.
#[inline]
pub fn min_ps(a: M128, b: M128) -> M128 {
    a.zip_f32(b, min_lane)
}

#[inline]
pub fn min_ss(a: M128, b: M128) -> M128 {
    a.with_lane0(b, min_lane)
}

/// Lane-wise `a > b ? a : b`.
#[inline]
pub fn max_ps(a: M128, b: M128) -> M128 {
    a.zip_f32(b, max_lane)
}

#[inline]
pub fn max_ss(a: M128, b: M128) -> M128 {
    a.with_lane0(b, max_lane)
}

/// Approximate reciprocal of each lane.
#[inline]
pub fn rcp_ps(a: M128) -> M128 {
    a.map_f32(rcp_lane)
}

#[inline]
pub fn rcp_ss(a: M128) -> M128 {
    a.with_lane0(a, |x, _| rcp_lane(x))
}

/// Approximate reciprocal square root of each lane.
#[inline]
pub fn rsqrt_ps(a: M128) -> M128 {
    a.map_f32(rsqrt_lane)
}

#[inline]
pub fn rsqrt_ss(a: M128) -> M128 {
    a.with_lane0(a, |x, _| rsqrt_lane(x))
}

// ==== operator traits ====

impl Add for M128 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        add_ps(self, rhs)
    }
}

impl AddAssign for M128 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for M128 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        sub_ps(self, rhs)
    }
}

impl SubAssign for M128 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for M128 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        mul_ps(self, rhs)
    }
}

impl MulAssign for M128 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for M128 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        div_ps(self, rhs)
    }
}

impl DivAssign for M128 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}
