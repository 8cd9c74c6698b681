//! Core traits and types for coefficient-wise scalar operations
//!
//! This crate provides the type layer the functor catalog is built on.
//!
//! # Architecture Overview
//!
//! 1. **Scalars** - `Scalar`: cost units, real counterpart, complex/floating flags
//! 2. **Packets** - `PacketScalar`/`PacketOrd`: fixed-width batched arithmetic
//! 3. **Casts** - `CastInto`: value conversions with `as` semantics
//!
//! # Design Philosophy
//!
//! - **Zero-Cost Abstractions**: every capability is an associated const
//! - **One code path**: non-SIMD types get width-1 packets instead of a
//!   separate API
//! - **No Hidden Allocations**: packets are plain `Copy` values
//!
//! # Example
//!
//! ```rust
//! use cwise_core::{PacketScalar, Scalar};
//! use num_complex::Complex;
//!
//! assert_eq!(<Complex<f64> as Scalar>::MUL_COST, 6);
//! assert_eq!(<Complex<f64> as PacketScalar>::SIZE, 1);
//! ```

pub mod cast;
pub mod error;
pub mod numeric;
pub mod packet;

// Re-export core types
pub use error::{Error, Result};

pub use cast::CastInto;
pub use numeric::{scalar_max, scalar_min, Scalar, ScalarKind};
pub use packet::{is_vectorizable, packet_backend_name, packet_width, PacketOrd, PacketScalar};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CastInto, PacketOrd, PacketScalar, Result, Scalar, ScalarKind};

    pub use crate::error::Error;
}
