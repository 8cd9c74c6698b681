//! SIMD packets backed by the `wide` crate
//!
//! | Scalar | Packet  | Lanes |
//! |--------|---------|-------|
//! | f32    | f32x8   | 8     |
//! | f64    | f64x4   | 4     |
//! | i32    | i32x8   | 8     |
//!
//! Lanes are moved in and out through `bytemuck` casts to fixed arrays.
//! `pmin`/`pmax` select lanes from the same strict less-than comparison as
//! the scalar forms, so a NaN operand yields the first operand in every
//! lane, exactly as `scalar_min`/`scalar_max` do.

use crate::packet::{PacketOrd, PacketScalar};
use ::wide::{f32x8, f64x4, i32x8, CmpLt};

macro_rules! impl_wide_packet {
    ($type:ty, $packet:ty, $lanes:expr, $zero:expr) => {
        impl PacketScalar for $type {
            type Packet = $packet;

            const SIZE: usize = $lanes;
            const BACKEND: &'static str = "wide";

            #[inline]
            fn pset1(value: $type) -> $packet {
                <$packet>::splat(value)
            }

            #[inline]
            fn padd(a: $packet, b: $packet) -> $packet {
                a + b
            }

            #[inline]
            fn psub(a: $packet, b: $packet) -> $packet {
                a - b
            }

            #[inline]
            fn pmul(a: $packet, b: $packet) -> $packet {
                a * b
            }

            #[inline]
            fn pfirst(p: $packet) -> $type {
                let lanes: [$type; $lanes] = bytemuck::cast(p);
                lanes[0]
            }

            #[inline]
            fn ploadu(from: &[$type]) -> $packet {
                let mut lanes: [$type; $lanes] = [$zero; $lanes];
                lanes.copy_from_slice(&from[..$lanes]);
                bytemuck::cast(lanes)
            }

            #[inline]
            fn pstoreu(to: &mut [$type], p: $packet) {
                let lanes: [$type; $lanes] = bytemuck::cast(p);
                to[..$lanes].copy_from_slice(&lanes);
            }

            #[inline]
            fn pmap<F: Fn($type) -> $type>(p: $packet, f: F) -> $packet {
                let mut lanes: [$type; $lanes] = bytemuck::cast(p);
                for lane in lanes.iter_mut() {
                    *lane = f(*lane);
                }
                bytemuck::cast(lanes)
            }

            #[inline]
            fn pzip<F: Fn($type, $type) -> $type>(a: $packet, b: $packet, f: F) -> $packet {
                let mut lanes: [$type; $lanes] = bytemuck::cast(a);
                let rhs: [$type; $lanes] = bytemuck::cast(b);
                for (lane, &r) in lanes.iter_mut().zip(rhs.iter()) {
                    *lane = f(*lane, r);
                }
                bytemuck::cast(lanes)
            }

            #[inline]
            fn predux_with<F: Fn($type, $type) -> $type>(p: $packet, f: F) -> $type {
                let lanes: [$type; $lanes] = bytemuck::cast(p);
                lanes[1..].iter().fold(lanes[0], |acc, &x| f(acc, x))
            }
        }

        impl PacketOrd for $type {
            #[inline]
            fn pmin(a: $packet, b: $packet) -> $packet {
                b.cmp_lt(a).blend(b, a)
            }

            #[inline]
            fn pmax(a: $packet, b: $packet) -> $packet {
                a.cmp_lt(b).blend(b, a)
            }
        }
    };
}

impl_wide_packet!(f32, f32x8, 8, 0.0);
impl_wide_packet!(f64, f64x4, 4, 0.0);
impl_wide_packet!(i32, i32x8, 8, 0);
