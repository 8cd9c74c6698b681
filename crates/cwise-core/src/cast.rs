//! Value conversions between scalar types
//!
//! Conversions follow Rust's `as` semantics for primitives (truncation,
//! saturation of float-to-int, wrapping of int-to-int). A real value cast to
//! a complex type lands in the real part; complex-to-complex casts convert
//! component-wise. Complex-to-real is deliberately absent: use the real-part
//! functor instead.

use crate::numeric::Scalar;
use num_complex::Complex;

/// Conversion from `Self` into the scalar type `U`
pub trait CastInto<U: Scalar>: Scalar {
    fn cast_into(self) -> U;
}

macro_rules! impl_cast_primitive {
    ($src:ty => $($dst:ty),+) => {
        $(
            impl CastInto<$dst> for $src {
                #[inline]
                #[allow(clippy::unnecessary_cast)]
                fn cast_into(self) -> $dst {
                    self as $dst
                }
            }
        )+
    };
}

macro_rules! impl_cast_to_complex {
    ($src:ty => $($real:ty),+) => {
        $(
            impl CastInto<Complex<$real>> for $src {
                #[inline]
                #[allow(clippy::unnecessary_cast)]
                fn cast_into(self) -> Complex<$real> {
                    Complex::new(self as $real, 0.0)
                }
            }
        )+
    };
}

macro_rules! impl_cast_complex {
    ($src:ty => $($real:ty),+) => {
        $(
            impl CastInto<Complex<$real>> for Complex<$src> {
                #[inline]
                #[allow(clippy::unnecessary_cast)]
                fn cast_into(self) -> Complex<$real> {
                    Complex::new(self.re as $real, self.im as $real)
                }
            }
        )+
    };
}

impl_cast_primitive!(i32 => i32, i64, u32, u64, f32, f64);
impl_cast_primitive!(i64 => i32, i64, u32, u64, f32, f64);
impl_cast_primitive!(u32 => i32, i64, u32, u64, f32, f64);
impl_cast_primitive!(u64 => i32, i64, u32, u64, f32, f64);
impl_cast_primitive!(f32 => i32, i64, u32, u64, f32, f64);
impl_cast_primitive!(f64 => i32, i64, u32, u64, f32, f64);

impl_cast_to_complex!(i32 => f32, f64);
impl_cast_to_complex!(i64 => f32, f64);
impl_cast_to_complex!(u32 => f32, f64);
impl_cast_to_complex!(u64 => f32, f64);
impl_cast_to_complex!(f32 => f32, f64);
impl_cast_to_complex!(f64 => f32, f64);

impl_cast_complex!(f32 => f32, f64);
impl_cast_complex!(f64 => f32, f64);
