//! Packet backend implementations
//!
//! Concrete `PacketScalar` impls only. No Box, no dyn: the backend for a
//! scalar type is fixed at compile time by the `simd` feature.

pub mod scalar;
#[cfg(feature = "simd")]
pub mod wide;
