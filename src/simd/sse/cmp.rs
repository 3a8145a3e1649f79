//! Comparison predicates.
//!
//! Every packed predicate yields a lane mask: all bits one where the
//! predicate holds, all bits zero where it does not. A comparison is
//! *unordered* when either operand is NaN, and then:
//!
//! | Predicate | Unordered result |
//! |-----------|------------------|
//! | `eq`, `lt`, `le`, `gt`, `ge`, `ord` | false |
//! | `neq`, `nlt`, `nle`, `ngt`, `nge`, `unord` | true |
//!
//! The negated forms are IEEE complements (`nlt` is "not less than", which
//! is not the same as `ge` once NaNs are involved). `neq` is the complement
//! of `eq` and therefore also holds on unordered lanes.
//!
//! The `comi*`/`ucomi*` family compares lane 0 only and returns `0` or `1`.

use super::m128::mask32;
use super::M128;

macro_rules! predicates {
    ($($(#[$meta:meta])* $ps:ident, $ss:ident => |$a:ident, $b:ident| $pred:expr;)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $ps(a: M128, b: M128) -> M128 {
                a.zip_mask(b, |$a: f32, $b: f32| $pred)
            }

            #[inline]
            pub fn $ss(a: M128, b: M128) -> M128 {
                let ($a, $b) = (a.lane0(), b.lane0());
                a.with_lane0_bits(mask32($pred))
            }
        )*
    };
}

predicates! {
    /// `a == b` per lane.
    cmpeq_ps, cmpeq_ss => |a, b| a == b;
    /// `!(a == b)` per lane; true on unordered lanes.
    cmpneq_ps, cmpneq_ss => |a, b| a != b;
    /// `a < b` per lane.
    cmplt_ps, cmplt_ss => |a, b| a < b;
    /// `a <= b` per lane.
    cmple_ps, cmple_ss => |a, b| a <= b;
    /// `a > b` per lane.
    cmpgt_ps, cmpgt_ss => |a, b| a > b;
    /// `a >= b` per lane.
    cmpge_ps, cmpge_ss => |a, b| a >= b;
    /// `!(a < b)` per lane; true on unordered lanes.
    cmpnlt_ps, cmpnlt_ss => |a, b| !(a < b);
    /// `!(a <= b)` per lane; true on unordered lanes.
    cmpnle_ps, cmpnle_ss => |a, b| !(a <= b);
    /// `!(a > b)` per lane; true on unordered lanes.
    cmpngt_ps, cmpngt_ss => |a, b| !(a > b);
    /// `!(a >= b)` per lane; true on unordered lanes.
    cmpnge_ps, cmpnge_ss => |a, b| !(a >= b);
    /// Neither lane is NaN.
    cmpord_ps, cmpord_ss => |a, b| !a.is_nan() && !b.is_nan();
    /// At least one lane is NaN.
    cmpunord_ps, cmpunord_ss => |a, b| a.is_nan() || b.is_nan();
}

macro_rules! scalar_compares {
    ($($comi:ident, $ucomi:ident => |$a:ident, $b:ident| $pred:expr;)*) => {
        $(
            #[inline]
            pub fn $comi(a: M128, b: M128) -> i32 {
                let ($a, $b) = (a.lane0(), b.lane0());
                $pred as i32
            }

            /// Same result as the signalling form; exception flags are not
            /// modelled.
            #[inline]
            pub fn $ucomi(a: M128, b: M128) -> i32 {
                $comi(a, b)
            }
        )*
    };
}

scalar_compares! {
    comieq_ss, ucomieq_ss => |a, b| a == b;
    comilt_ss, ucomilt_ss => |a, b| a < b;
    comile_ss, ucomile_ss => |a, b| a <= b;
    comigt_ss, ucomigt_ss => |a, b| a > b;
    comige_ss, ucomige_ss => |a, b| a >= b;
    comineq_ss, ucomineq_ss => |a, b| a != b;
}

/// Collects the sign bit of each lane into bits 0..3 of the result.
#[inline]
pub fn movemask_ps(a: M128) -> i32 {
    a.to_u32x4()
        .iter()
        .enumerate()
        .fold(0, |acc, (i, lane)| acc | ((lane >> 31) << i) as i32)
}
