//! Packet (batched) arithmetic primitives
//!
//! A packet is a fixed-width group of scalars processed together. Every
//! supported scalar has a packet type; types without a SIMD backend use a
//! width-1 packet that is just the scalar itself, so generic code never needs
//! a second code path to compile.

use crate::numeric::Scalar;
use std::fmt::Debug;

/// Packet primitives for a scalar type
///
/// Every lane-wise operation must agree exactly with the scalar operation
/// applied to each lane independently.
pub trait PacketScalar: Scalar {
    /// The batched representation
    type Packet: Copy + Debug + Send + Sync;

    /// Number of lanes in [`Self::Packet`]
    const SIZE: usize;

    /// Name of the backend providing the packet
    const BACKEND: &'static str;

    /// Broadcast one value to every lane
    fn pset1(value: Self) -> Self::Packet;

    fn padd(a: Self::Packet, b: Self::Packet) -> Self::Packet;

    fn psub(a: Self::Packet, b: Self::Packet) -> Self::Packet;

    fn pmul(a: Self::Packet, b: Self::Packet) -> Self::Packet;

    /// Lane zero
    fn pfirst(p: Self::Packet) -> Self;

    /// Unaligned load of the first [`Self::SIZE`] values of `from`
    ///
    /// # Panics
    /// Panics if `from.len() < Self::SIZE`
    fn ploadu(from: &[Self]) -> Self::Packet;

    /// Unaligned store into the first [`Self::SIZE`] slots of `to`
    ///
    /// # Panics
    /// Panics if `to.len() < Self::SIZE`
    fn pstoreu(to: &mut [Self], p: Self::Packet);

    /// Apply `f` to every lane
    fn pmap<F: Fn(Self) -> Self>(p: Self::Packet, f: F) -> Self::Packet;

    /// Combine two packets lane by lane with `f`
    fn pzip<F: Fn(Self, Self) -> Self>(a: Self::Packet, b: Self::Packet, f: F) -> Self::Packet;

    /// Fold the lanes left to right with `f`
    fn predux_with<F: Fn(Self, Self) -> Self>(p: Self::Packet, f: F) -> Self;
}

/// Lane-wise ordering for totally or partially ordered scalars
pub trait PacketOrd: PacketScalar + PartialOrd {
    fn pmin(a: Self::Packet, b: Self::Packet) -> Self::Packet;

    fn pmax(a: Self::Packet, b: Self::Packet) -> Self::Packet;
}
