//! Float/integer conversions.
//!
//! | Family | Rounding |
//! |--------|----------|
//! | `cvt*` float to int | active [`RoundingMode`] of the calling thread |
//! | `cvtt*` float to int | always toward zero |
//! | `cvt*` int to float | exact when representable, else active mode |
//!
//! Every mode-sensitive conversion has a `*_with` twin taking the mode
//! explicitly, for callers that must not depend on thread-local state.
//!
//! A float whose rounded value does not fit the destination (including NaN
//! and infinities) converts to the *integer indefinite* value, the most
//! negative integer of the destination width.
//!
//! The narrowing conversions [`cvtps_pi16`] and [`cvtps_pi8`] behave like
//! the instruction sequences they stand for: each lane is first converted to
//! `i32` (indefinite included), then saturated to the narrow width. The
//! upper four bytes of [`cvtps_pi8`] are zero.

use num::{Bounded, NumCast};

use super::rounding::{get_rounding_mode, RoundingMode};
use super::{M128, M64};

/// Converts with the given rounding; unrepresentable results become
/// `T::min_value()`.
#[inline(always)]
fn float_to_int<T: Bounded + NumCast>(x: f32, mode: RoundingMode) -> T {
    T::from(mode.round(x)).unwrap_or_else(T::min_value)
}

/// Clamps to the range of `T`.
#[inline(always)]
fn saturate<T: Bounded + NumCast>(v: i32) -> T {
    let lo = T::min_value().to_i32().unwrap_or(i32::MIN);
    let hi = T::max_value().to_i32().unwrap_or(i32::MAX);
    T::from(num::clamp(v, lo, hi)).unwrap_or_else(T::min_value)
}

#[inline(always)]
fn next_up(x: f32) -> f32 {
    let bits = x.to_bits();
    if x >= 0.0 {
        f32::from_bits(bits + 1)
    } else {
        f32::from_bits(bits - 1)
    }
}

#[inline(always)]
fn next_down(x: f32) -> f32 {
    let bits = x.to_bits();
    if x > 0.0 {
        f32::from_bits(bits - 1)
    } else {
        f32::from_bits(bits + 1)
    }
}

/// Integer to `f32`, rounding inexact values in the given direction.
#[inline(always)]
fn int_to_float(v: i64, mode: RoundingMode) -> f32 {
    let nearest = v as f32;
    // Every f32 of this magnitude is an integer, so the comparison is exact.
    let ordering = (nearest as i128).cmp(&(v as i128));
    match (mode, ordering) {
        (_, std::cmp::Ordering::Equal) | (RoundingMode::Nearest, _) => nearest,
        (RoundingMode::Down, std::cmp::Ordering::Greater) => next_down(nearest),
        (RoundingMode::Up, std::cmp::Ordering::Less) => next_up(nearest),
        (RoundingMode::TowardZero, std::cmp::Ordering::Greater) if v > 0 => next_down(nearest),
        (RoundingMode::TowardZero, std::cmp::Ordering::Less) if v < 0 => next_up(nearest),
        _ => nearest,
    }
}

// ==== float to integer ====

#[inline]
pub fn cvtss_si32_with(a: M128, mode: RoundingMode) -> i32 {
    float_to_int(a.lane0(), mode)
}

/// Lane 0 to `i32` using the active rounding mode.
#[inline]
pub fn cvtss_si32(a: M128) -> i32 {
    cvtss_si32_with(a, get_rounding_mode())
}

pub use self::cvtss_si32 as cvt_ss2si;

#[inline]
pub fn cvtss_si64_with(a: M128, mode: RoundingMode) -> i64 {
    float_to_int(a.lane0(), mode)
}

#[inline]
pub fn cvtss_si64(a: M128) -> i64 {
    cvtss_si64_with(a, get_rounding_mode())
}

/// Lane 0 to `i32`, truncating.
#[inline]
pub fn cvttss_si32(a: M128) -> i32 {
    float_to_int(a.lane0(), RoundingMode::TowardZero)
}

pub use self::cvttss_si32 as cvtt_ss2si;

#[inline]
pub fn cvttss_si64(a: M128) -> i64 {
    float_to_int(a.lane0(), RoundingMode::TowardZero)
}

#[inline]
pub fn cvtps_pi32_with(a: M128, mode: RoundingMode) -> M64 {
    let [x0, x1, _, _] = a.to_f32x4();
    M64::from_i32x2([float_to_int(x0, mode), float_to_int(x1, mode)])
}

/// Lanes 0 and 1 to two `i32` using the active rounding mode.
#[inline]
pub fn cvtps_pi32(a: M128) -> M64 {
    cvtps_pi32_with(a, get_rounding_mode())
}

pub use self::cvtps_pi32 as cvt_ps2pi;

#[inline]
pub fn cvttps_pi32(a: M128) -> M64 {
    cvtps_pi32_with(a, RoundingMode::TowardZero)
}

pub use self::cvttps_pi32 as cvtt_ps2pi;

#[inline]
pub fn cvtps_pi16_with(a: M128, mode: RoundingMode) -> M64 {
    let lanes = a.to_f32x4().map(|x| saturate::<i16>(float_to_int(x, mode)));
    M64::from_i16x4(lanes)
}

/// All four lanes to signed-saturated `i16`.
#[inline]
pub fn cvtps_pi16(a: M128) -> M64 {
    cvtps_pi16_with(a, get_rounding_mode())
}

#[inline]
pub fn cvtps_pi8_with(a: M128, mode: RoundingMode) -> M64 {
    let [b0, b1, b2, b3] = a
        .to_f32x4()
        .map(|x| saturate::<i8>(saturate::<i16>(float_to_int(x, mode)) as i32));
    M64::from_i8x8([b0, b1, b2, b3, 0, 0, 0, 0])
}

/// All four lanes to signed-saturated `i8` in the low four bytes.
#[inline]
pub fn cvtps_pi8(a: M128) -> M64 {
    cvtps_pi8_with(a, get_rounding_mode())
}

/// Lane 0 as a plain `f32`.
#[inline]
pub fn cvtss_f32(a: M128) -> f32 {
    a.lane0()
}

// ==== integer to float ====

#[inline]
pub fn cvtsi32_ss_with(a: M128, b: i32, mode: RoundingMode) -> M128 {
    a.with_lane0_bits(int_to_float(b as i64, mode).to_bits())
}

/// Replaces lane 0 of `a` with `b` converted to `f32`.
#[inline]
pub fn cvtsi32_ss(a: M128, b: i32) -> M128 {
    cvtsi32_ss_with(a, b, get_rounding_mode())
}

pub use self::cvtsi32_ss as cvt_si2ss;

#[inline]
pub fn cvtsi64_ss_with(a: M128, b: i64, mode: RoundingMode) -> M128 {
    a.with_lane0_bits(int_to_float(b, mode).to_bits())
}

#[inline]
pub fn cvtsi64_ss(a: M128, b: i64) -> M128 {
    cvtsi64_ss_with(a, b, get_rounding_mode())
}

#[inline]
pub fn cvtpi32_ps_with(a: M128, b: M64, mode: RoundingMode) -> M128 {
    let [b0, b1] = b.to_i32x2().map(|v| int_to_float(v as i64, mode));
    M128::from_halves(M64::from_f32x2([b0, b1]).to_bits(), a.high64())
}

/// `[b0, b1, a2, a3]` with `b`'s lanes converted to `f32`.
#[inline]
pub fn cvtpi32_ps(a: M128, b: M64) -> M128 {
    cvtpi32_ps_with(a, b, get_rounding_mode())
}

pub use self::cvtpi32_ps as cvt_pi2ps;

/// `[a0, a1, b0, b1]` converted to `f32` under `mode`.
#[inline]
pub fn cvtpi32x2_ps_with(a: M64, b: M64, mode: RoundingMode) -> M128 {
    let [a0, a1] = a.to_i32x2();
    let [b0, b1] = b.to_i32x2();
    M128::from_f32x4([a0, a1, b0, b1].map(|v| int_to_float(v as i64, mode)))
}

/// `[a0, a1, b0, b1]` converted to `f32`.
#[inline]
pub fn cvtpi32x2_ps(a: M64, b: M64) -> M128 {
    cvtpi32x2_ps_with(a, b, get_rounding_mode())
}

/// Four signed 16-bit lanes to `f32`.
#[inline]
pub fn cvtpi16_ps(a: M64) -> M128 {
    M128::from_f32x4(a.to_i16x4().map(Into::into))
}

/// Four unsigned 16-bit lanes to `f32`.
#[inline]
pub fn cvtpu16_ps(a: M64) -> M128 {
    M128::from_f32x4(a.to_u16x4().map(Into::into))
}

/// The low four signed bytes to `f32`.
#[inline]
pub fn cvtpi8_ps(a: M64) -> M128 {
    let [b0, b1, b2, b3, ..] = a.to_i8x8();
    M128::from_f32x4([b0, b1, b2, b3].map(Into::into))
}

/// The low four unsigned bytes to `f32`.
#[inline]
pub fn cvtpu8_ps(a: M64) -> M128 {
    let [b0, b1, b2, b3, ..] = a.to_u8x8();
    M128::from_f32x4([b0, b1, b2, b3].map(Into::into))
}
