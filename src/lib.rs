//! Coefficient-wise scalar functors
//!
//! Umbrella crate re-exporting the workspace:
//!
//! - [`cwise_core`]: scalar and packet traits, casts, errors
//! - [`cwise_functors`]: the functor catalog and its compile-time traits
//! - [`cwise_eval`]: linear evaluation loops that consume the catalog
//!
//! ```rust
//! use cwise::prelude::*;
//!
//! let config = EvalConfig::default();
//! let estimate = estimate_cost::<f64>(&QuotientOp::<f64>::descriptor(), 10, &config);
//! assert_eq!(estimate.total, 20);
//! assert_eq!(estimate.loop_kind, LoopKind::Scalar);
//!
//! let mut eye = vec![0.0f64; 9];
//! nullary_fill_scalar(&identity(), 3, 3, &mut eye)?;
//! assert_eq!(sum_coeffs(&eye, &config)?, 3.0);
//! # Ok::<(), cwise::Error>(())
//! ```

pub use cwise_core;
pub use cwise_eval;
pub use cwise_functors;

pub use cwise_core::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use cwise_core::prelude::*;
    pub use cwise_eval::prelude::*;
    pub use cwise_functors::factories::*;
    pub use cwise_functors::prelude::*;
}
