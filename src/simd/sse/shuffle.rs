//! Lane rearrangement.
//!
//! Everything here moves 32-bit lanes as raw bits, so NaN payloads and the
//! sign of zero survive untouched.
//!
//! Immediate operands are const generics. An immediate outside `0..=255`
//! (or a lane index outside the vector) is rejected when the function is
//! instantiated, so a bad immediate never reaches run time.

use super::M128;

/// Compile-time check that an 8-bit immediate is in range.
pub(crate) struct Imm8<const IMM8: i32>;

impl<const IMM8: i32> Imm8<IMM8> {
    pub(crate) const VALID: () = assert!(
        IMM8 >= 0 && IMM8 <= 255,
        "immediate must be in 0..=255"
    );
}

/// Compile-time check that a lane index addresses one of `LANES` lanes.
pub(crate) struct LaneIndex<const IDX: i32, const LANES: i32>;

impl<const IDX: i32, const LANES: i32> LaneIndex<IDX, LANES> {
    pub(crate) const VALID: () = assert!(IDX >= 0 && IDX < LANES, "lane index out of range");
}

/// Builds a shuffle immediate from four 2-bit selectors, highest result
/// lane first: `mm_shuffle(3, 2, 1, 0)` is the identity.
#[inline(always)]
pub const fn mm_shuffle(z: u32, y: u32, x: u32, w: u32) -> i32 {
    ((z << 6) | (y << 4) | (x << 2) | w) as i32
}

/// Lane 0 from `b`, lanes 1..3 from `a`.
#[inline]
pub fn move_ss(a: M128, b: M128) -> M128 {
    a.with_lane0_bits(b.0 as u32)
}

/// `[b2, b3, a2, a3]`.
#[inline]
pub fn movehl_ps(a: M128, b: M128) -> M128 {
    M128::from_halves(b.high64(), a.high64())
}

/// `[a0, a1, b0, b1]`.
#[inline]
pub fn movelh_ps(a: M128, b: M128) -> M128 {
    M128::from_halves(a.low64(), b.low64())
}

/// `[a0, b0, a1, b1]`.
#[inline]
pub fn unpacklo_ps(a: M128, b: M128) -> M128 {
    let (a, b) = (a.to_u32x4(), b.to_u32x4());
    M128::from_u32x4([a[0], b[0], a[1], b[1]])
}

/// `[a2, b2, a3, b3]`.
#[inline]
pub fn unpackhi_ps(a: M128, b: M128) -> M128 {
    let (a, b) = (a.to_u32x4(), b.to_u32x4());
    M128::from_u32x4([a[2], b[2], a[3], b[3]])
}

/// Selects result lanes 0 and 1 from `a` and lanes 2 and 3 from `b`.
///
/// Bits `[2k+1:2k]` of `IMM8` give the source lane for result lane `k`.
///
/// ```rust
/// use ssemu::sse::{mm_shuffle, setr_ps, shuffle_ps};
///
/// let a = setr_ps(0.0, 1.0, 2.0, 3.0);
/// let b = setr_ps(10.0, 11.0, 12.0, 13.0);
/// let r = shuffle_ps::<{ mm_shuffle(0, 1, 2, 3) }>(a, b);
/// assert_eq!(r.to_f32x4(), [3.0, 2.0, 11.0, 10.0]);
/// ```
#[inline]
pub fn shuffle_ps<const IMM8: i32>(a: M128, b: M128) -> M128 {
    let () = Imm8::<IMM8>::VALID;

    let (a, b) = (a.to_u32x4(), b.to_u32x4());
    let sel = |k: i32| ((IMM8 >> (2 * k)) & 0b11) as usize;
    M128::from_u32x4([a[sel(0)], a[sel(1)], b[sel(2)], b[sel(3)]])
}
