//! Scalar trait hierarchy for coefficient-wise computing
//!
//! This module describes the scalar types the functor catalog operates on
//! (i32, i64, u32, u64, f32, f64 and their complex counterparts) without
//! imposing any evaluation machinery.
//!
//! # Design Philosophy
//!
//! - **Pure type facts**: costs, the real counterpart, complex/floating flags
//! - **Compile-time**: everything a functor's traits need is an associated const
//! - **No packet layer**: batched arithmetic lives in [`crate::packet`]

use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// Identity of a concrete scalar type, usable in const contexts
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    I32,
    I64,
    U32,
    U64,
    F32,
    F64,
    Complex32,
    Complex64,
}

impl ScalarKind {
    /// Short type name, as used in log output
    pub const fn name(self) -> &'static str {
        match self {
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Complex32 => "complex<f32>",
            Self::Complex64 => "complex<f64>",
        }
    }

    /// Const-evaluable equality
    pub const fn same_as(self, other: ScalarKind) -> bool {
        self as u8 == other as u8
    }
}

/// Base trait for scalar types usable in coefficient-wise operations
///
/// Costs are abstract, dimensionless units used by evaluators to schedule
/// and fuse expressions; they are not wall-clock estimates.
pub trait Scalar:
    Copy
    + PartialEq
    + Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Zero
    + One
{
    /// Real counterpart (the type itself for non-complex scalars)
    type Real: Scalar<Real = Self::Real> + PartialOrd;

    /// Which concrete type this is
    const KIND: ScalarKind;

    /// Whether values carry an imaginary part
    const IS_COMPLEX: bool;

    /// Whether division has floating-point semantics
    const HAS_FLOATING_POINT: bool;

    /// Cost of one addition
    const ADD_COST: u32;

    /// Cost of one multiplication
    const MUL_COST: u32;

    /// Real part
    fn real(self) -> Self::Real;

    /// Imaginary part (zero for real types)
    fn imag(self) -> Self::Real;

    /// Complex conjugate (identity for real types)
    fn conj(self) -> Self;

    /// Absolute value (modulus for complex)
    fn abs(self) -> Self::Real;

    /// Squared absolute value
    fn abs2(self) -> Self::Real;
}

/// `b < a ? b : a`, so NaN handling follows the raw comparison
#[inline]
pub fn scalar_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// `a < b ? b : a`, so NaN handling follows the raw comparison
#[inline]
pub fn scalar_max<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        b
    } else {
        a
    }
}

// =============================================================================
// Scalar implementations for concrete types
// =============================================================================

macro_rules! impl_scalar_signed {
    ($type:ty, $kind:ident) => {
        impl Scalar for $type {
            type Real = $type;

            const KIND: ScalarKind = ScalarKind::$kind;
            const IS_COMPLEX: bool = false;
            const HAS_FLOATING_POINT: bool = false;
            const ADD_COST: u32 = 1;
            const MUL_COST: u32 = 1;

            #[inline]
            fn real(self) -> $type {
                self
            }

            #[inline]
            fn imag(self) -> $type {
                0
            }

            #[inline]
            fn conj(self) -> $type {
                self
            }

            // MIN.abs() wraps to MIN rather than panicking
            #[inline]
            fn abs(self) -> $type {
                self.wrapping_abs()
            }

            #[inline]
            fn abs2(self) -> $type {
                self * self
            }
        }
    };
}

macro_rules! impl_scalar_unsigned {
    ($type:ty, $kind:ident) => {
        impl Scalar for $type {
            type Real = $type;

            const KIND: ScalarKind = ScalarKind::$kind;
            const IS_COMPLEX: bool = false;
            const HAS_FLOATING_POINT: bool = false;
            const ADD_COST: u32 = 1;
            const MUL_COST: u32 = 1;

            #[inline]
            fn real(self) -> $type {
                self
            }

            #[inline]
            fn imag(self) -> $type {
                0
            }

            #[inline]
            fn conj(self) -> $type {
                self
            }

            #[inline]
            fn abs(self) -> $type {
                self
            }

            #[inline]
            fn abs2(self) -> $type {
                self * self
            }
        }
    };
}

macro_rules! impl_scalar_float {
    ($type:ty, $kind:ident) => {
        impl Scalar for $type {
            type Real = $type;

            const KIND: ScalarKind = ScalarKind::$kind;
            const IS_COMPLEX: bool = false;
            const HAS_FLOATING_POINT: bool = true;
            const ADD_COST: u32 = 1;
            const MUL_COST: u32 = 1;

            #[inline]
            fn real(self) -> $type {
                self
            }

            #[inline]
            fn imag(self) -> $type {
                0.0
            }

            #[inline]
            fn conj(self) -> $type {
                self
            }

            #[inline]
            fn abs(self) -> $type {
                <$type>::abs(self)
            }

            #[inline]
            fn abs2(self) -> $type {
                self * self
            }
        }
    };
}

macro_rules! impl_scalar_complex {
    ($real:ty, $kind:ident) => {
        impl Scalar for Complex<$real> {
            type Real = $real;

            const KIND: ScalarKind = ScalarKind::$kind;
            const IS_COMPLEX: bool = true;
            const HAS_FLOATING_POINT: bool = true;
            const ADD_COST: u32 = 2 * <$real as Scalar>::ADD_COST;
            const MUL_COST: u32 = 4 * <$real as Scalar>::MUL_COST + 2 * <$real as Scalar>::ADD_COST;

            #[inline]
            fn real(self) -> $real {
                self.re
            }

            #[inline]
            fn imag(self) -> $real {
                self.im
            }

            #[inline]
            fn conj(self) -> Self {
                Complex::new(self.re, -self.im)
            }

            #[inline]
            fn abs(self) -> $real {
                self.re.hypot(self.im)
            }

            #[inline]
            fn abs2(self) -> $real {
                self.re * self.re + self.im * self.im
            }
        }
    };
}

impl_scalar_signed!(i32, I32);
impl_scalar_signed!(i64, I64);
impl_scalar_unsigned!(u32, U32);
impl_scalar_unsigned!(u64, U64);
impl_scalar_float!(f32, F32);
impl_scalar_float!(f64, F64);
impl_scalar_complex!(f32, Complex32);
impl_scalar_complex!(f64, Complex64);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cost_units() {
        assert_eq!(<f64 as Scalar>::ADD_COST, 1);
        assert_eq!(<i32 as Scalar>::MUL_COST, 1);

        // complex add is two real adds, complex mul is 4 muls + 2 adds
        assert_eq!(<Complex<f64> as Scalar>::ADD_COST, 2);
        assert_eq!(<Complex<f32> as Scalar>::MUL_COST, 6);
    }

    #[test]
    fn test_capability_flags() {
        assert!(!<f64 as Scalar>::IS_COMPLEX);
        assert!(<Complex<f32> as Scalar>::IS_COMPLEX);

        assert!(<f32 as Scalar>::HAS_FLOATING_POINT);
        assert!(<Complex<f64> as Scalar>::HAS_FLOATING_POINT);
        assert!(!<i64 as Scalar>::HAS_FLOATING_POINT);
        assert!(!<u32 as Scalar>::HAS_FLOATING_POINT);
    }

    #[test]
    fn test_complex_parts() {
        let z = Complex::new(3.0f64, -4.0);
        assert_eq!(Scalar::real(z), 3.0);
        assert_eq!(Scalar::imag(z), -4.0);
        assert_eq!(Scalar::conj(z), Complex::new(3.0, 4.0));
        assert_relative_eq!(Scalar::abs(z), 5.0);
        assert_relative_eq!(Scalar::abs2(z), 25.0);
    }

    #[test]
    fn test_real_types_are_self_conjugate() {
        assert_eq!(Scalar::conj(-2.5f32), -2.5);
        assert_eq!(Scalar::conj(-7i64), -7);
        assert_eq!(Scalar::imag(9u64), 0);
    }

    #[test]
    fn test_integer_abs_wraps() {
        assert_eq!(Scalar::abs(-5i32), 5);
        assert_eq!(Scalar::abs(i32::MIN), i32::MIN);
        assert_eq!(Scalar::abs2(-3i64), 9);
    }

    #[test]
    fn test_min_max_follow_raw_comparison() {
        assert_eq!(scalar_min(2.0, 1.0), 1.0);
        assert_eq!(scalar_max(2, 7), 7);

        // NaN on the right is never "less than", so the left operand wins
        assert_eq!(scalar_min(1.0, f64::NAN), 1.0);
        assert!(scalar_min(f64::NAN, 1.0).is_nan());
        assert_eq!(scalar_max(1.0, f64::NAN), 1.0);
        assert!(scalar_max(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_kind_equality_is_const() {
        const SAME: bool = ScalarKind::F64.same_as(<f64 as Scalar>::KIND);
        const DIFFERENT: bool = ScalarKind::F32.same_as(ScalarKind::F64);
        assert!(SAME);
        assert!(!DIFFERENT);
        assert_eq!(<Complex<f32> as Scalar>::KIND.name(), "complex<f32>");
    }
}
