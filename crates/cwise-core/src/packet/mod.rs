//! Packet primitives with compile-time backend selection
//!
//! # Architecture
//!
//! - `PacketScalar` trait: broadcast, add, sub, mul, first lane, load/store
//! - `PacketOrd` trait: lane-wise min/max for ordered scalars
//! - Backends: `wide` SIMD lanes for f32/f64/i32 (feature `simd`), width-1
//!   packets for everything else
//!
//! # Usage
//!
//! ```rust
//! use cwise_core::packet::{packet_width, PacketScalar};
//!
//! let p = f64::pset1(3.0);
//! assert_eq!(f64::pfirst(p), 3.0);
//! assert!(packet_width::<f64>() >= 1);
//! ```

pub mod backends;
pub mod traits;

pub use traits::{PacketOrd, PacketScalar};

/// Number of lanes in the packet type for `T`
pub const fn packet_width<T: PacketScalar>() -> usize {
    T::SIZE
}

/// Whether `T` has a packet path wider than one lane
pub const fn is_vectorizable<T: PacketScalar>() -> bool {
    T::SIZE > 1
}

/// Name of the backend providing packets for `T`
pub fn packet_backend_name<T: PacketScalar>() -> &'static str {
    T::BACKEND
}
