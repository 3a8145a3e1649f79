//! Rounding-mode control register.
//!
//! The non-truncating float to integer conversions consult a rounding mode
//! held in a 32-bit control/status word. Only the rounding field (bits 13
//! and 14) is interpreted; every other bit is stored and returned unchanged
//! so that save/restore sequences round-trip.
//!
//! | Mode | Field bits | Behavior |
//! |------|-----------|----------|
//! | [`RoundingMode::Nearest`] | `0x0000` | round half to even |
//! | [`RoundingMode::Down`] | `0x2000` | toward negative infinity |
//! | [`RoundingMode::Up`] | `0x4000` | toward positive infinity |
//! | [`RoundingMode::TowardZero`] | `0x6000` | truncate |
//!
//! # Thread-locality
//!
//! The register is **per thread**, not per process. A freshly spawned thread
//! (including rayon workers) starts from
//! [`Config::default_rounding`](crate::config::Config::default_rounding),
//! regardless of the mode its spawner had selected. Code that converts on
//! worker threads should capture the mode once and pass it to the `*_with`
//! conversion variants.
//!
//! ```rust
//! use ssemu::sse::rounding::{get_rounding_mode, RoundingMode, RoundingScope};
//!
//! let before = get_rounding_mode();
//! {
//!     let _scope = RoundingScope::new(RoundingMode::TowardZero);
//!     assert_eq!(get_rounding_mode(), RoundingMode::TowardZero);
//! }
//! assert_eq!(get_rounding_mode(), before);
//! ```

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::config::{Config, ROUNDING_MODE_VAR};
use crate::error::{config_error, SsemuError};

/// Power-on value of the control/status word: all exceptions masked,
/// round to nearest.
pub const CSR_DEFAULT: u32 = 0x1F80;

/// Bits of the control/status word holding the rounding mode.
pub const ROUNDING_MASK: u32 = 0x6000;

/// IEEE-754 rounding direction for inexact conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum RoundingMode {
    #[default]
    Nearest = 0x0000,
    Down = 0x2000,
    Up = 0x4000,
    TowardZero = 0x6000,
}

impl RoundingMode {
    /// The mode's encoding in the control/status word.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Decodes the rounding field of a control/status word, ignoring all
    /// other bits.
    #[inline(always)]
    pub const fn from_csr(csr: u32) -> Self {
        match csr & ROUNDING_MASK {
            0x0000 => RoundingMode::Nearest,
            0x2000 => RoundingMode::Down,
            0x4000 => RoundingMode::Up,
            _ => RoundingMode::TowardZero,
        }
    }

    /// Rounds `x` to an integral value in this direction.
    #[inline(always)]
    pub fn round(self, x: f32) -> f32 {
        match self {
            RoundingMode::Nearest => x.round_ties_even(),
            RoundingMode::Down => x.floor(),
            RoundingMode::Up => x.ceil(),
            RoundingMode::TowardZero => x.trunc(),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMode::Nearest => "nearest",
            RoundingMode::Down => "down",
            RoundingMode::Up => "up",
            RoundingMode::TowardZero => "toward-zero",
        };
        f.write_str(name)
    }
}

impl FromStr for RoundingMode {
    type Err = SsemuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(RoundingMode::Nearest),
            "down" => Ok(RoundingMode::Down),
            "up" => Ok(RoundingMode::Up),
            "toward-zero" | "toward_zero" | "zero" => Ok(RoundingMode::TowardZero),
            _ => Err(config_error(
                ROUNDING_MODE_VAR,
                s,
                "expected one of nearest, down, up, toward-zero",
            )),
        }
    }
}

thread_local! {
    static CSR: Cell<u32> = Cell::new(initial_csr());
}

fn initial_csr() -> u32 {
    (CSR_DEFAULT & !ROUNDING_MASK) | Config::get().default_rounding.bits()
}

/// Reads the calling thread's control/status word.
#[inline]
pub fn getcsr() -> u32 {
    CSR.with(Cell::get)
}

/// Replaces the calling thread's control/status word.
///
/// Bits outside the rounding field are kept verbatim but have no effect.
#[inline]
pub fn setcsr(csr: u32) {
    let previous = CSR.with(|c| c.replace(csr));
    if (previous ^ csr) & ROUNDING_MASK != 0 {
        log::debug!(
            "Rounding mode changed: {} -> {}",
            RoundingMode::from_csr(previous),
            RoundingMode::from_csr(csr)
        );
    }
}

/// The rounding mode currently selected on this thread.
#[inline]
pub fn get_rounding_mode() -> RoundingMode {
    RoundingMode::from_csr(getcsr())
}

/// Selects the rounding mode on this thread, leaving other control bits
/// untouched. Returns the previous mode.
#[inline]
pub fn set_rounding_mode(mode: RoundingMode) -> RoundingMode {
    let csr = getcsr();
    setcsr((csr & !ROUNDING_MASK) | mode.bits());
    RoundingMode::from_csr(csr)
}

/// Selects a rounding mode for the lifetime of the guard and restores the
/// previous one on drop.
///
/// The guard is tied to the thread whose register it modified and is
/// therefore neither `Send` nor `Sync`.
#[must_use = "the previous rounding mode is restored as soon as the scope is dropped"]
pub struct RoundingScope {
    previous: RoundingMode,
    _thread_bound: PhantomData<*const ()>,
}

impl RoundingScope {
    pub fn new(mode: RoundingMode) -> Self {
        Self {
            previous: set_rounding_mode(mode),
            _thread_bound: PhantomData,
        }
    }

    /// The mode that will be restored on drop.
    pub fn previous(&self) -> RoundingMode {
        self.previous
    }
}

impl Drop for RoundingScope {
    fn drop(&mut self) {
        set_rounding_mode(self.previous);
    }
}

impl fmt::Debug for RoundingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundingScope")
            .field("active", &get_rounding_mode())
            .field("previous", &self.previous)
            .finish()
    }
}
