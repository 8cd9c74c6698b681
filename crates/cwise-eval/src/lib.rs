//! Linear evaluation loops for cwise functors
//!
//! The smallest consumer of the functor catalog: maps over slices, fills
//! column-major buffers from generators and reduces with associative
//! functors. Each entry point reads the functor's descriptor to decide
//! between a scalar and a packet loop, so the same call site works for
//! SIMD-backed and width-1 scalar types.
//!
//! # Example
//!
//! ```rust
//! use cwise_eval::prelude::*;
//! use cwise_functors::factories::{multiple, sum};
//!
//! let config = EvalConfig::default();
//! let a = [1.0f64, 2.0, 3.0, 4.0, 5.0];
//! let b = [10.0f64, 20.0, 30.0, 40.0, 50.0];
//! let mut out = [0.0f64; 5];
//!
//! binary_map(&sum(), &a, &b, &mut out, &config)?;
//! assert_eq!(out, [11.0, 22.0, 33.0, 44.0, 55.0]);
//!
//! let mut scaled = [0.0f64; 5];
//! unary_map_packet(&multiple(2.0), &a, &mut scaled, &config)?;
//! assert_eq!(sum_coeffs(&scaled, &config)?, 30.0);
//! # Ok::<(), cwise_core::Error>(())
//! ```

pub mod config;
pub mod cost;
pub mod fill;
pub mod map;
pub mod plan;
pub mod redux;

pub use config::{EvalConfig, PacketPolicy, DEFAULT_UNROLLING_LIMIT};
pub use cost::{estimate_cost, CostEstimate};
pub use fill::{nullary_fill, nullary_fill_scalar};
pub use map::{binary_map, binary_map_scalar, unary_map, unary_map_packet};
pub use plan::{plan_loop, LoopKind};
pub use redux::{max_coeff, min_coeff, prod_coeffs, redux, sum_coeffs};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        binary_map, binary_map_scalar, estimate_cost, max_coeff, min_coeff, nullary_fill,
        nullary_fill_scalar, plan_loop, prod_coeffs, redux, sum_coeffs, unary_map,
        unary_map_packet, CostEstimate, EvalConfig, LoopKind, PacketPolicy,
    };
}
