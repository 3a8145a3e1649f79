//! 64-bit vector type used by the legacy packed-integer subset.

use std::fmt;

use super::m128::{impl_lane_views, pack, unpack};

/// A 64-bit vector of packed integers (or two `f32` lanes).
///
/// Lane `i` of a `w`-bit view occupies bits `[i*w, (i+1)*w)`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct M64(pub(crate) u64);

impl M64 {
    #[inline(always)]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline(always)]
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    #[inline(always)]
    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_le_bytes(bytes))
    }

    #[inline(always)]
    pub const fn to_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl_lane_views!(M64: u64 {
    to_f32x2 / from_f32x2: [f32; 2],
    to_i32x2 / from_i32x2: [i32; 2],
    to_u32x2 / from_u32x2: [u32; 2],
    to_i16x4 / from_i16x4: [i16; 4],
    to_u16x4 / from_u16x4: [u16; 4],
    to_i8x8 / from_i8x8: [i8; 8],
    to_u8x8 / from_u8x8: [u8; 8],
});

impl fmt::Debug for M64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M64({:?} @ {:#018x})", self.to_i16x4(), self.0)
    }
}

impl fmt::LowerHex for M64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for M64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

// ==== constructors ====

#[allow(clippy::too_many_arguments)]
#[inline]
pub fn set_pi8(e7: i8, e6: i8, e5: i8, e4: i8, e3: i8, e2: i8, e1: i8, e0: i8) -> M64 {
    M64::from_i8x8([e0, e1, e2, e3, e4, e5, e6, e7])
}

#[allow(clippy::too_many_arguments)]
#[inline]
pub fn setr_pi8(e0: i8, e1: i8, e2: i8, e3: i8, e4: i8, e5: i8, e6: i8, e7: i8) -> M64 {
    M64::from_i8x8([e0, e1, e2, e3, e4, e5, e6, e7])
}

#[allow(clippy::too_many_arguments)]
#[inline]
pub fn set_pu8(e7: u8, e6: u8, e5: u8, e4: u8, e3: u8, e2: u8, e1: u8, e0: u8) -> M64 {
    M64::from_u8x8([e0, e1, e2, e3, e4, e5, e6, e7])
}

#[inline]
pub fn set1_pi8(a: i8) -> M64 {
    M64::from_i8x8([a; 8])
}

#[inline]
pub fn set_pi16(e3: i16, e2: i16, e1: i16, e0: i16) -> M64 {
    M64::from_i16x4([e0, e1, e2, e3])
}

#[inline]
pub fn setr_pi16(e0: i16, e1: i16, e2: i16, e3: i16) -> M64 {
    M64::from_i16x4([e0, e1, e2, e3])
}

#[inline]
pub fn set_pu16(e3: u16, e2: u16, e1: u16, e0: u16) -> M64 {
    M64::from_u16x4([e0, e1, e2, e3])
}

#[inline]
pub fn set1_pi16(a: i16) -> M64 {
    M64::from_i16x4([a; 4])
}

#[inline]
pub fn set_pi32(e1: i32, e0: i32) -> M64 {
    M64::from_i32x2([e0, e1])
}

#[inline]
pub fn setr_pi32(e0: i32, e1: i32) -> M64 {
    M64::from_i32x2([e0, e1])
}

#[inline]
pub fn set_pu32(e1: u32, e0: u32) -> M64 {
    M64::from_u32x2([e0, e1])
}

#[inline]
pub fn set1_pi32(a: i32) -> M64 {
    M64::from_i32x2([a; 2])
}

#[inline]
pub fn setzero_si64() -> M64 {
    M64(0)
}
