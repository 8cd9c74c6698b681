//! Width-1 packets
//!
//! The packet is the scalar itself. Used for every type without a SIMD
//! backend, and for all types when the `simd` feature is off.

use crate::numeric::{scalar_max, scalar_min};
use crate::packet::{PacketOrd, PacketScalar};
use num_complex::Complex;

macro_rules! impl_scalar_packet {
    ($type:ty) => {
        impl PacketScalar for $type {
            type Packet = $type;

            const SIZE: usize = 1;
            const BACKEND: &'static str = "scalar";

            #[inline]
            fn pset1(value: $type) -> $type {
                value
            }

            #[inline]
            fn padd(a: $type, b: $type) -> $type {
                a + b
            }

            #[inline]
            fn psub(a: $type, b: $type) -> $type {
                a - b
            }

            #[inline]
            fn pmul(a: $type, b: $type) -> $type {
                a * b
            }

            #[inline]
            fn pfirst(p: $type) -> $type {
                p
            }

            #[inline]
            fn ploadu(from: &[$type]) -> $type {
                from[0]
            }

            #[inline]
            fn pstoreu(to: &mut [$type], p: $type) {
                to[0] = p;
            }

            #[inline]
            fn pmap<F: Fn($type) -> $type>(p: $type, f: F) -> $type {
                f(p)
            }

            #[inline]
            fn pzip<F: Fn($type, $type) -> $type>(a: $type, b: $type, f: F) -> $type {
                f(a, b)
            }

            #[inline]
            fn predux_with<F: Fn($type, $type) -> $type>(p: $type, _f: F) -> $type {
                p
            }
        }
    };
}

macro_rules! impl_scalar_packet_ord {
    ($type:ty) => {
        impl PacketOrd for $type {
            #[inline]
            fn pmin(a: $type, b: $type) -> $type {
                scalar_min(a, b)
            }

            #[inline]
            fn pmax(a: $type, b: $type) -> $type {
                scalar_max(a, b)
            }
        }
    };
}

impl_scalar_packet!(i64);
impl_scalar_packet!(u32);
impl_scalar_packet!(u64);
impl_scalar_packet!(Complex<f32>);
impl_scalar_packet!(Complex<f64>);

impl_scalar_packet_ord!(i64);
impl_scalar_packet_ord!(u32);
impl_scalar_packet_ord!(u64);

// Without SIMD support the vectorizable types fall back to width 1 as well
#[cfg(not(feature = "simd"))]
impl_scalar_packet!(i32);
#[cfg(not(feature = "simd"))]
impl_scalar_packet!(f32);
#[cfg(not(feature = "simd"))]
impl_scalar_packet!(f64);

#[cfg(not(feature = "simd"))]
impl_scalar_packet_ord!(i32);
#[cfg(not(feature = "simd"))]
impl_scalar_packet_ord!(f32);
#[cfg(not(feature = "simd"))]
impl_scalar_packet_ord!(f64);
