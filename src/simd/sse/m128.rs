//! 128-bit vector types and their lane views.
//!
//! [`M128`] and [`M128i`] both hold 16 raw bytes. The float/integer split
//! only tags which operations a value is usually fed to; every lane view is
//! available on both and converting between them ([`castps_si128`],
//! [`castsi128_ps`]) never touches the bits.
//!
//! Lane `i` of a view with `w`-bit lanes occupies bits `[i*w, (i+1)*w)` of
//! the 128-bit value, so byte order is little-endian independently of the
//! host.
//!
//! | View | Accessors |
//! |------|-----------|
//! | 4 × f32 | [`M128::to_f32x4`] / [`M128::from_f32x4`] |
//! | 2 × f64 | `to_f64x2` / `from_f64x2` |
//! | 2 × i64, u64 | `to_i64x2`, `to_u64x2` |
//! | 4 × i32, u32 | `to_i32x4`, `to_u32x4` |
//! | 8 × i16, u16 | `to_i16x8`, `to_u16x8` |
//! | 16 × i8, u8 | `to_i8x16`, `to_u8x16` |

use std::fmt;

use crate::simd::traits::SimdVec;
use crate::utils::{is_aligned as ptr_is_aligned, SSE_ALIGNMENT};

/// Number of f32 lanes in a 128-bit vector.
pub const LANE_COUNT: usize = 4;

/// A scalar that can occupy a lane of a packed vector.
pub(crate) trait Lane: Copy + Default {
    const BITS: u32;

    /// Takes the low `BITS` bits of `raw`.
    fn from_raw(raw: u128) -> Self;

    /// Zero-extends the lane's bit pattern.
    fn to_raw(self) -> u128;
}

macro_rules! impl_int_lane {
    ($($t:ty => $u:ty),* $(,)?) => {
        $(
            impl Lane for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline(always)]
                fn from_raw(raw: u128) -> Self {
                    raw as $t
                }

                #[inline(always)]
                fn to_raw(self) -> u128 {
                    self as $u as u128
                }
            }
        )*
    };
}

impl_int_lane!(
    i8 => u8, u8 => u8,
    i16 => u16, u16 => u16,
    i32 => u32, u32 => u32,
    i64 => u64, u64 => u64,
);

impl Lane for f32 {
    const BITS: u32 = 32;

    #[inline(always)]
    fn from_raw(raw: u128) -> Self {
        f32::from_bits(raw as u32)
    }

    #[inline(always)]
    fn to_raw(self) -> u128 {
        self.to_bits() as u128
    }
}

impl Lane for f64 {
    const BITS: u32 = 64;

    #[inline(always)]
    fn from_raw(raw: u128) -> Self {
        f64::from_bits(raw as u64)
    }

    #[inline(always)]
    fn to_raw(self) -> u128 {
        self.to_bits() as u128
    }
}

#[inline(always)]
pub(crate) fn unpack<L: Lane, const N: usize>(bits: u128) -> [L; N] {
    std::array::from_fn(|i| L::from_raw(bits >> (i as u32 * L::BITS)))
}

#[inline(always)]
pub(crate) fn pack<L: Lane, const N: usize>(lanes: [L; N]) -> u128 {
    lanes
        .iter()
        .enumerate()
        .fold(0, |acc, (i, lane)| acc | (lane.to_raw() << (i as u32 * L::BITS)))
}

macro_rules! impl_lane_views {
    ($vec:ident: $raw:ty { $($to:ident / $from:ident: [$lane:ty; $n:literal]),* $(,)? }) => {
        impl $vec {
            $(
                #[inline(always)]
                pub fn $to(self) -> [$lane; $n] {
                    unpack(self.0 as u128)
                }

                #[inline(always)]
                pub fn $from(lanes: [$lane; $n]) -> Self {
                    Self(pack(lanes) as $raw)
                }
            )*
        }
    };
}

pub(crate) use impl_lane_views;

macro_rules! impl_m128_common {
    ($vec:ident) => {
        impl $vec {
            #[inline(always)]
            pub const fn from_bits(bits: u128) -> Self {
                Self(bits)
            }

            #[inline(always)]
            pub const fn to_bits(self) -> u128 {
                self.0
            }

            #[inline(always)]
            pub const fn from_bytes(bytes: [u8; 16]) -> Self {
                Self(u128::from_le_bytes(bytes))
            }

            #[inline(always)]
            pub const fn to_bytes(self) -> [u8; 16] {
                self.0.to_le_bytes()
            }
        }

        impl_lane_views!($vec: u128 {
            to_f32x4 / from_f32x4: [f32; 4],
            to_f64x2 / from_f64x2: [f64; 2],
            to_i64x2 / from_i64x2: [i64; 2],
            to_u64x2 / from_u64x2: [u64; 2],
            to_i32x4 / from_i32x4: [i32; 4],
            to_u32x4 / from_u32x4: [u32; 4],
            to_i16x8 / from_i16x8: [i16; 8],
            to_u16x8 / from_u16x8: [u16; 8],
            to_i8x16 / from_i8x16: [i8; 16],
            to_u8x16 / from_u8x16: [u8; 16],
        });

        impl fmt::LowerHex for $vec {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::LowerHex::fmt(&self.0, f)
            }
        }

        impl fmt::UpperHex for $vec {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::UpperHex::fmt(&self.0, f)
            }
        }
    };
}

/// A 128-bit vector, conventionally viewed as four `f32` lanes.
///
/// Equality is bitwise: two NaN lanes with the same payload compare equal,
/// `0.0` and `-0.0` do not.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct M128(pub(crate) u128);

/// A 128-bit vector, conventionally viewed as packed integers.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct M128i(pub(crate) u128);

impl_m128_common!(M128);
impl_m128_common!(M128i);

impl fmt::Debug for M128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M128({:?} @ {:#034x})", self.to_f32x4(), self.0)
    }
}

impl fmt::Debug for M128i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M128i({:?} @ {:#034x})", self.to_i32x4(), self.0)
    }
}

impl From<[f32; 4]> for M128 {
    #[inline(always)]
    fn from(lanes: [f32; 4]) -> Self {
        Self::from_f32x4(lanes)
    }
}

impl From<M128> for [f32; 4] {
    #[inline(always)]
    fn from(v: M128) -> Self {
        v.to_f32x4()
    }
}

// ==== lane-wise helpers shared by the operation modules ====

impl M128 {
    #[inline(always)]
    pub(crate) fn map_f32(self, f: impl Fn(f32) -> f32) -> Self {
        Self::from_f32x4(self.to_f32x4().map(f))
    }

    #[inline(always)]
    pub(crate) fn zip_f32(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let a = self.to_f32x4();
        let b = other.to_f32x4();
        Self::from_f32x4(std::array::from_fn(|i| f(a[i], b[i])))
    }

    #[inline(always)]
    pub(crate) fn zip_mask(self, other: Self, pred: impl Fn(f32, f32) -> bool) -> Self {
        let a = self.to_f32x4();
        let b = other.to_f32x4();
        Self::from_u32x4(std::array::from_fn(|i| mask32(pred(a[i], b[i]))))
    }

    /// Lane 0 of `self` and `other` combined by `f`; lanes 1..3 from `self`.
    #[inline(always)]
    pub(crate) fn with_lane0(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        self.with_lane0_bits(f(self.lane0(), other.lane0()).to_bits())
    }

    /// Replaces bits `[0, 32)` and keeps everything above.
    #[inline(always)]
    pub(crate) fn with_lane0_bits(self, bits: u32) -> Self {
        Self((self.0 & !(u32::MAX as u128)) | bits as u128)
    }

    #[inline(always)]
    pub(crate) fn lane0(self) -> f32 {
        f32::from_bits(self.0 as u32)
    }

    #[inline(always)]
    pub(crate) fn low64(self) -> u64 {
        self.0 as u64
    }

    #[inline(always)]
    pub(crate) fn high64(self) -> u64 {
        (self.0 >> 64) as u64
    }

    #[inline(always)]
    pub(crate) fn from_halves(low: u64, high: u64) -> Self {
        Self(((high as u128) << 64) | low as u128)
    }
}

/// All-ones for `true`, all-zeros for `false`.
#[inline(always)]
pub(crate) const fn mask32(cond: bool) -> u32 {
    if cond {
        u32::MAX
    } else {
        0
    }
}

// ==== constructors ====

/// Builds a vector from four lanes given highest first: `e0` lands in lane 0.
#[inline]
pub fn set_ps(e3: f32, e2: f32, e1: f32, e0: f32) -> M128 {
    M128::from_f32x4([e0, e1, e2, e3])
}

/// Builds a vector from four lanes given in memory order: `e0` lands in lane 0.
#[inline]
pub fn setr_ps(e0: f32, e1: f32, e2: f32, e3: f32) -> M128 {
    M128::from_f32x4([e0, e1, e2, e3])
}

/// Broadcasts `a` to every lane.
#[inline]
pub fn set1_ps(a: f32) -> M128 {
    M128::from_f32x4([a; 4])
}

pub use self::set1_ps as set_ps1;

/// `a` in lane 0, zero elsewhere.
#[inline]
pub fn set_ss(a: f32) -> M128 {
    M128::from_f32x4([a, 0.0, 0.0, 0.0])
}

#[inline]
pub fn setzero_ps() -> M128 {
    M128(0)
}

/// Every bit set. Each lane reads back as a NaN, not as `1.0`.
#[inline]
pub fn setone_ps() -> M128 {
    M128(u128::MAX)
}

/// A vector with unspecified contents. This implementation returns zero.
#[inline]
pub fn undefined_ps() -> M128 {
    M128(0)
}

#[inline]
pub fn set_epi32(e3: i32, e2: i32, e1: i32, e0: i32) -> M128i {
    M128i::from_i32x4([e0, e1, e2, e3])
}

#[inline]
pub fn setr_epi32(e0: i32, e1: i32, e2: i32, e3: i32) -> M128i {
    M128i::from_i32x4([e0, e1, e2, e3])
}

#[inline]
pub fn set1_epi32(a: i32) -> M128i {
    M128i::from_i32x4([a; 4])
}

#[inline]
pub fn set_epu32(e3: u32, e2: u32, e1: u32, e0: u32) -> M128i {
    M128i::from_u32x4([e0, e1, e2, e3])
}

#[inline]
pub fn setzero_si128() -> M128i {
    M128i(0)
}

/// Reinterprets the bits of a float vector as an integer vector.
#[inline]
pub fn castps_si128(a: M128) -> M128i {
    M128i(a.0)
}

/// Reinterprets the bits of an integer vector as a float vector.
#[inline]
pub fn castsi128_ps(a: M128i) -> M128 {
    M128(a.0)
}

// ==== SimdVec ====

impl SimdVec<f32> for M128 {
    #[inline(always)]
    fn new(slice: &[f32]) -> Self {
        assert!(!slice.is_empty(), "Size can't be empty (size zero)");

        match slice.len().cmp(&LANE_COUNT) {
            std::cmp::Ordering::Less => unsafe { Self::load_partial(slice.as_ptr(), slice.len()) },
            std::cmp::Ordering::Equal | std::cmp::Ordering::Greater => unsafe {
                Self::load(slice.as_ptr(), LANE_COUNT)
            },
        }
    }

    #[inline(always)]
    fn is_aligned(ptr: *const f32) -> bool {
        ptr_is_aligned(ptr, SSE_ALIGNMENT)
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f32, size: usize) -> Self {
        assert!(!ptr.is_null(), "Pointer must not be null");
        assert!(size == LANE_COUNT, "Size must be == {LANE_COUNT}");

        if Self::is_aligned(ptr) {
            Self::load_aligned(ptr)
        } else {
            Self::load_unaligned(ptr)
        }
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        crate::simd::sse::memory::load_ps_ptr(ptr)
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        crate::simd::sse::memory::loadu_ps_ptr(ptr)
    }

    #[inline(always)]
    unsafe fn load_partial(ptr: *const f32, size: usize) -> Self {
        assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        assert!(!ptr.is_null(), "Pointer must not be null");

        let mut lanes = [0u32; LANE_COUNT];
        let src = ptr as *const u32;
        for (i, lane) in lanes.iter_mut().enumerate().take(size) {
            *lane = src.add(i).read_unaligned();
        }
        M128::from_u32x4(lanes)
    }

    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        assert!(!ptr.is_null(), "Pointer must not be null");
        crate::simd::sse::memory::storeu_ps_ptr(ptr, *self);
    }

    #[inline(always)]
    unsafe fn store_at_partial(&self, ptr: *mut f32, size: usize) {
        assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        assert!(!ptr.is_null(), "Pointer must not be null");

        let dst = ptr as *mut u32;
        for (i, lane) in self.to_u32x4().into_iter().enumerate().take(size) {
            dst.add(i).write_unaligned(lane);
        }
    }
}
