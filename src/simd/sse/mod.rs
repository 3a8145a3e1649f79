//! Portable emulation of the 128-bit SSE instruction set.
//!
//! Every operation is a free function over the value types [`M128`],
//! [`M128i`] and [`M64`]. Results are bit-exact with the reference hardware
//! for all inputs, NaNs included, except for [`rcp_ps`]/[`rsqrt_ps`] and
//! their scalar forms, which are accurate to 12 bits.
//!
//! # Layout
//!
//! - [`m128`], [`m64`]: vector types, lane views and constructors
//! - [`arith`]: arithmetic, min/max and reciprocal approximations
//! - [`cmp`]: lane-mask predicates, scalar `comi*` compares, `movemask_ps`
//! - [`convert`]: float/integer conversions under the rounding mode
//! - [`shuffle`]: lane rearrangement with const-generic immediates
//! - [`memory`]: aligned, unaligned and partial transfers
//! - [`bitwise`]: logic on the raw 128/64-bit patterns
//! - [`rounding`]: the thread-local control/status register
//! - [`mmx`]: legacy 64-bit integer operations behind [`MmxSection`]
//!
//! # Lane order
//!
//! Lane 0 is the lowest-addressed element. `set_*` constructors take lanes
//! highest first, `setr_*` constructors lowest first.

pub mod arith;
pub mod bitwise;
pub mod cmp;
pub mod convert;
pub mod m128;
pub mod m64;
pub mod memory;
pub mod mmx;
pub mod rounding;
pub mod shuffle;

pub use arith::*;
pub use bitwise::*;
pub use cmp::*;
pub use convert::*;
pub use m128::*;
pub use m64::*;
pub use memory::*;
pub use mmx::MmxSection;
pub use rounding::{
    get_rounding_mode, getcsr, set_rounding_mode, setcsr, RoundingMode, RoundingScope,
    CSR_DEFAULT, ROUNDING_MASK,
};
pub use shuffle::{mm_shuffle, move_ss, movehl_ps, movelh_ps, shuffle_ps, unpackhi_ps, unpacklo_ps};
