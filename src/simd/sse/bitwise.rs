//! Bitwise logic on the raw 128-bit (and 64-bit) patterns.
//!
//! None of these look at lane boundaries or float semantics, so a lane
//! holding a NaN or a negative zero is treated like any other bit pattern.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use super::{M128, M64};

#[inline]
pub fn and_ps(a: M128, b: M128) -> M128 {
    M128(a.0 & b.0)
}

/// `!a & b`: clears the bits of `b` that are set in `a`.
#[inline]
pub fn andnot_ps(a: M128, b: M128) -> M128 {
    M128(!a.0 & b.0)
}

#[inline]
pub fn or_ps(a: M128, b: M128) -> M128 {
    M128(a.0 | b.0)
}

#[inline]
pub fn xor_ps(a: M128, b: M128) -> M128 {
    M128(a.0 ^ b.0)
}

#[inline]
pub fn and_si64(a: M64, b: M64) -> M64 {
    M64(a.0 & b.0)
}

/// `!a & b`.
#[inline]
pub fn andnot_si64(a: M64, b: M64) -> M64 {
    M64(!a.0 & b.0)
}

#[inline]
pub fn or_si64(a: M64, b: M64) -> M64 {
    M64(a.0 | b.0)
}

#[inline]
pub fn xor_si64(a: M64, b: M64) -> M64 {
    M64(a.0 ^ b.0)
}

impl BitAnd for M128 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        and_ps(self, rhs)
    }
}

impl BitAndAssign for M128 {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl BitOr for M128 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        or_ps(self, rhs)
    }
}

impl BitOrAssign for M128 {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl BitXor for M128 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        xor_ps(self, rhs)
    }
}

impl BitXorAssign for M128 {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl Not for M128 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        M128(!self.0)
    }
}
