//! Legacy 64-bit packed-integer subset.
//!
//! On the reference hardware the 64-bit integer registers alias the x87
//! floating-point stack, so a block of these instructions has to be closed
//! with an "empty state" instruction before scalar floating-point code runs
//! again. Here that lifecycle is an explicit guard: the operations are
//! methods of [`MmxSection`], and dropping the guard (or calling
//! [`MmxSection::exit`]) ends the section.
//!
//! ```rust
//! use ssemu::sse::{set_pu8, MmxSection};
//!
//! let mmx = MmxSection::enter();
//! let avg = mmx.avg_pu8(set_pu8(0, 0, 0, 0, 0, 0, 255, 1), set_pu8(0, 0, 0, 0, 0, 0, 254, 2));
//! assert_eq!(avg.to_u8x8()[..2], [2, 255]);
//! mmx.exit();
//! ```
//!
//! The guard is bound to the thread that created it. Opening a second
//! section on the same thread while one is active is allowed but logged at
//! `warn` level, since it usually means an `exit` was forgotten.

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;

use super::shuffle::{Imm8, LaneIndex};
use super::M64;

thread_local! {
    static DEPTH: Cell<u32> = const { Cell::new(0) };
}

/// An open legacy-vector section on the current thread.
#[must_use = "the section ends as soon as the guard is dropped"]
pub struct MmxSection {
    _thread_bound: PhantomData<*const ()>,
}

impl MmxSection {
    /// Opens a section.
    pub fn enter() -> Self {
        let depth = DEPTH.with(|d| {
            let depth = d.get() + 1;
            d.set(depth);
            depth
        });

        if depth > 1 {
            log::warn!("Nested legacy vector section opened (depth {})", depth);
        } else {
            log::trace!("Legacy vector section entered");
        }

        Self {
            _thread_bound: PhantomData,
        }
    }

    /// Ends the section. Equivalent to dropping the guard.
    pub fn exit(self) {
        drop(self);
    }

    /// Number of sections currently open on this thread.
    pub fn depth() -> u32 {
        DEPTH.with(Cell::get)
    }

    /// Whether scalar floating-point state is currently shadowed on this
    /// thread.
    pub fn is_active() -> bool {
        Self::depth() > 0
    }

    // ==== averages, extremes, products ====

    /// `(a + b + 1) >> 1` per unsigned byte.
    #[inline]
    pub fn avg_pu8(&self, a: M64, b: M64) -> M64 {
        let (a, b) = (a.to_u8x8(), b.to_u8x8());
        M64::from_u8x8(std::array::from_fn(|i| {
            ((a[i] as u16 + b[i] as u16 + 1) >> 1) as u8
        }))
    }

    /// `(a + b + 1) >> 1` per unsigned 16-bit lane.
    #[inline]
    pub fn avg_pu16(&self, a: M64, b: M64) -> M64 {
        let (a, b) = (a.to_u16x4(), b.to_u16x4());
        M64::from_u16x4(std::array::from_fn(|i| {
            ((a[i] as u32 + b[i] as u32 + 1) >> 1) as u16
        }))
    }

    #[inline]
    pub fn max_pi16(&self, a: M64, b: M64) -> M64 {
        let (a, b) = (a.to_i16x4(), b.to_i16x4());
        M64::from_i16x4(std::array::from_fn(|i| a[i].max(b[i])))
    }

    #[inline]
    pub fn max_pu8(&self, a: M64, b: M64) -> M64 {
        let (a, b) = (a.to_u8x8(), b.to_u8x8());
        M64::from_u8x8(std::array::from_fn(|i| a[i].max(b[i])))
    }

    #[inline]
    pub fn min_pi16(&self, a: M64, b: M64) -> M64 {
        let (a, b) = (a.to_i16x4(), b.to_i16x4());
        M64::from_i16x4(std::array::from_fn(|i| a[i].min(b[i])))
    }

    #[inline]
    pub fn min_pu8(&self, a: M64, b: M64) -> M64 {
        let (a, b) = (a.to_u8x8(), b.to_u8x8());
        M64::from_u8x8(std::array::from_fn(|i| a[i].min(b[i])))
    }

    /// High 16 bits of each unsigned 16 x 16 product.
    #[inline]
    pub fn mulhi_pu16(&self, a: M64, b: M64) -> M64 {
        let (a, b) = (a.to_u16x4(), b.to_u16x4());
        M64::from_u16x4(std::array::from_fn(|i| {
            ((a[i] as u32 * b[i] as u32) >> 16) as u16
        }))
    }

    /// Sum of absolute byte differences, in the low 16 bits. The upper 48
    /// bits are zero.
    #[inline]
    pub fn sad_pu8(&self, a: M64, b: M64) -> M64 {
        let sum: u16 = a
            .to_u8x8()
            .iter()
            .zip(b.to_u8x8())
            .map(|(x, y)| x.abs_diff(y) as u16)
            .sum();
        M64(sum as u64)
    }

    // ==== lane access ====

    /// Reads 16-bit lane `IMM`, zero-extended.
    #[inline]
    pub fn extract_pi16<const IMM: i32>(&self, a: M64) -> i32 {
        let () = LaneIndex::<IMM, 4>::VALID;
        a.to_u16x4()[IMM as usize] as i32
    }

    /// Replaces 16-bit lane `IMM` with the low 16 bits of `d`.
    #[inline]
    pub fn insert_pi16<const IMM: i32>(&self, a: M64, d: i32) -> M64 {
        let () = LaneIndex::<IMM, 4>::VALID;
        let mut lanes = a.to_i16x4();
        lanes[IMM as usize] = d as i16;
        M64::from_i16x4(lanes)
    }

    /// Bits `[2k+1:2k]` of `IMM8` select the source lane for result lane `k`.
    #[inline]
    pub fn shuffle_pi16<const IMM8: i32>(&self, a: M64) -> M64 {
        let () = Imm8::<IMM8>::VALID;
        let a = a.to_u16x4();
        M64::from_u16x4(std::array::from_fn(|k| {
            a[((IMM8 >> (2 * k)) & 0b11) as usize]
        }))
    }

    /// Collects the sign bit of each byte into bits 0..7.
    #[inline]
    pub fn movemask_pi8(&self, a: M64) -> i32 {
        a.to_u8x8()
            .iter()
            .enumerate()
            .fold(0, |acc, (i, byte)| acc | (((byte >> 7) as i32) << i))
    }

    // ==== stores ====

    /// Writes byte `i` of `a` to `mem[i]` wherever byte `i` of `mask` has its
    /// sign bit set; other bytes of `mem` are left untouched.
    #[inline]
    pub fn maskmove_si64(&self, a: M64, mask: M64, mem: &mut [u8; 8]) {
        for ((dst, byte), sel) in mem.iter_mut().zip(a.to_u8x8()).zip(mask.to_u8x8()) {
            if sel & 0x80 != 0 {
                *dst = byte;
            }
        }
    }

    /// Non-temporal store of `a`.
    #[inline]
    pub fn stream_pi(&self, mem: &mut M64, a: M64) {
        *mem = a;
    }
}

impl Drop for MmxSection {
    fn drop(&mut self) {
        let depth = DEPTH.with(|d| {
            let depth = d.get().saturating_sub(1);
            d.set(depth);
            depth
        });
        log::trace!("Legacy vector section exited (depth {})", depth);
    }
}

impl fmt::Debug for MmxSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MmxSection")
            .field("depth", &Self::depth())
            .finish()
    }
}
