//! # ssemu
//!
//! Portable, bit-exact emulation of the 128-bit SSE vector instruction set
//! (plus the 64-bit MMX integer subset that SSE extended) for hosts without
//! native support.
//!
//! Every operation is a plain function over value types: [`M128`] and
//! [`M128i`] are 16-byte vectors, [`M64`] is an 8-byte vector. Lane views
//! are bit-preserving casts, never numeric conversions.
//!
//! ```rust
//! use ssemu::sse::{add_ps, cmpeq_ps, set_ps, setr_ps};
//!
//! let a = setr_ps(1.0, 2.0, 3.0, 4.0);
//! let b = setr_ps(10.0, 20.0, 30.0, 40.0);
//! assert_eq!(add_ps(a, b).to_f32x4(), [11.0, 22.0, 33.0, 44.0]);
//!
//! // Predicates produce all-bits lane masks.
//! let nan = set_ps(4.0, 3.0, f32::NAN, 1.0);
//! assert_eq!(cmpeq_ps(nan, nan).to_u32x4(), [!0, 0, !0, !0]);
//! ```
//!
//! # Modules
//!
//! - [`sse`]: the emulation core (type model, arithmetic, comparisons,
//!   conversions, rearrangement, memory transfer, bitwise logic, and the
//!   legacy 64-bit subset behind [`sse::MmxSection`]).
//! - [`simd::traits`]: slice-level batch operations (`simd_*`, `par_simd_*`,
//!   `scalar_*`) built on the core.
//! - [`config`]: environment-derived defaults (initial rounding mode,
//!   parallel thresholds).
//!
//! # Rounding mode
//!
//! Float to integer conversions consult a rounding-mode register. The
//! register is **thread-local**: each thread starts from
//! [`config::Config::default_rounding`]. See [`sse::rounding`].

pub mod config;
pub mod error;
pub mod simd;
pub mod utils;

pub use simd::sse;
pub use simd::sse::{M128, M128i, M64};
pub use simd::traits::{SimdAdd, SimdApprox, SimdConvert, SimdDiv, SimdMul, SimdSub, SimdVec};

/// Slices shorter than this run the `par_simd_*` methods sequentially.
pub const PARALLEL_SIMD_THRESHOLD: usize = 262_144;

/// Number of `f32` elements handed to each rayon task.
pub const PARALLEL_CHUNK_SIZE: usize = 16_384;
