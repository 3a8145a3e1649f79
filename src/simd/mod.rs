//! Vector emulation core and the slice-level batch API built on it.
//!
//! - [`sse`]: the 128-bit vector types and every emulated operation.
//! - [`traits`]: `SimdVec` plus the batch traits implemented for `&[f32]`.
//! - [`slice`]: scalar baselines and the sequential/parallel batch kernels.

pub mod slice;
pub mod sse;
pub mod traits;
