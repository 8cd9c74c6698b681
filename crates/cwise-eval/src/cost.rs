//! Expression cost estimates
//!
//! A functor's `COST` is per coefficient. Multiplying by the number of
//! coefficients gives the figure compared against the unrolling limit.

use crate::config::EvalConfig;
use crate::plan::{plan_loop, LoopKind};
use cwise_core::PacketScalar;
use cwise_functors::FunctorDescriptor;
use log::debug;
use serde::Serialize;

/// Cost summary for applying one functor to a run of coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostEstimate {
    pub functor: &'static str,
    pub per_coefficient: u32,
    pub coefficients: usize,
    /// `coefficients * per_coefficient`, saturating
    pub total: u64,
    pub loop_kind: LoopKind,
    pub within_unrolling_limit: bool,
}

/// Estimate the cost of applying the functor described by `descriptor` to
/// `len` coefficients of `T`
pub fn estimate_cost<T: PacketScalar>(
    descriptor: &FunctorDescriptor,
    len: usize,
    config: &EvalConfig,
) -> CostEstimate {
    let total = (len as u64).saturating_mul(u64::from(descriptor.cost));
    let within_unrolling_limit = total <= u64::from(config.unrolling_limit);

    if !within_unrolling_limit {
        debug!(
            "{}: cost {} over {} coefficients exceeds unrolling limit {}",
            descriptor.name, total, len, config.unrolling_limit
        );
    }

    CostEstimate {
        functor: descriptor.name,
        per_coefficient: descriptor.cost,
        coefficients: len,
        total,
        loop_kind: plan_loop::<T>(descriptor, len, config),
        within_unrolling_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cwise_functors::prelude::*;
    use num_complex::Complex;

    #[test]
    fn test_total_is_len_times_cost() {
        let config = EvalConfig::default();
        let estimate = estimate_cost::<Complex<f64>>(
            &ProductOp::<Complex<f64>>::descriptor(),
            10,
            &config,
        );
        assert_eq!(estimate.per_coefficient, 6);
        assert_eq!(estimate.total, 60);
        assert!(estimate.within_unrolling_limit);
        assert_eq!(estimate.loop_kind, LoopKind::Scalar);
    }

    #[test]
    fn test_unrolling_limit_boundary() {
        let config = EvalConfig::default();
        let descriptor = SumOp::<f64>::descriptor();
        assert!(estimate_cost::<f64>(&descriptor, 100, &config).within_unrolling_limit);
        assert!(!estimate_cost::<f64>(&descriptor, 101, &config).within_unrolling_limit);

        let tight = EvalConfig::default().with_unrolling_limit(4);
        assert!(!estimate_cost::<f64>(&descriptor, 5, &tight).within_unrolling_limit);
    }

    #[test]
    fn test_free_functor_is_always_within_limit() {
        let config = EvalConfig::default();
        let estimate =
            estimate_cost::<f32>(&CastOp::<f32, f32>::descriptor(), usize::MAX, &config);
        assert_eq!(estimate.total, 0);
        assert!(estimate.within_unrolling_limit);
    }
}
