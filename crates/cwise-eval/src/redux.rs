//! Reductions with associative functors
//!
//! The packet loop accumulates whole packets, folds the accumulator's lanes
//! with the scalar form of the same functor, then folds in the remainder.
//! Floating-point sums and products may therefore round differently from a
//! strict left-to-right fold. Min and max give the same value under either
//! loop, NaN included; only the sign of an equal-comparing zero may differ.

use crate::config::EvalConfig;
use crate::plan::{packet_body_len, plan_loop, LoopKind};
use cwise_core::{Error, PacketOrd, PacketScalar, Result};
use cwise_functors::factories::{max, min, product, sum};
use cwise_functors::{Associative, FunctorTraits, PacketBinaryOp};

/// Reduce `data` with `op`
///
/// # Errors
/// [`Error::EmptyInput`] if `data` is empty; there is no identity element
/// to fall back on for min and max.
pub fn redux<T, Op>(op: &Op, data: &[T], config: &EvalConfig) -> Result<T>
where
    T: PacketScalar,
    Op: PacketBinaryOp<T> + Associative<T>,
{
    let Some((&first, rest)) = data.split_first() else {
        return Err(Error::empty_input(&format!("{} reduction", Op::NAME)));
    };

    let kind = plan_loop::<T>(&Op::descriptor(), data.len(), config);
    if kind == LoopKind::Scalar {
        return Ok(rest.iter().fold(first, |acc, &x| op.call(acc, x)));
    }

    let body = packet_body_len::<T>(kind, data.len());
    let (head, tail) = data.split_at(body);
    let mut packets = head.chunks_exact(T::SIZE);
    let mut acc = if Op::IDEMPOTENT {
        // every lane starts from the first coefficient, so a leading NaN
        // stays in every lane and later NaNs are skipped, as in a
        // sequential min/max fold
        T::pset1(first)
    } else {
        // body >= SIZE because the plan only picks packets when one fits
        match packets.next() {
            Some(chunk) => T::ploadu(chunk),
            None => return Err(Error::empty_input("packet reduction")),
        }
    };
    for chunk in packets {
        acc = op.packet_op(acc, T::ploadu(chunk));
    }

    let reduced = T::predux_with(acc, |a, b| op.call(a, b));
    Ok(tail.iter().fold(reduced, |acc, &x| op.call(acc, x)))
}

/// Sum of all coefficients
pub fn sum_coeffs<T: PacketScalar>(data: &[T], config: &EvalConfig) -> Result<T> {
    redux(&sum(), data, config)
}

/// Product of all coefficients
pub fn prod_coeffs<T: PacketScalar>(data: &[T], config: &EvalConfig) -> Result<T> {
    redux(&product(), data, config)
}

/// Smallest coefficient under the type's own comparison
pub fn min_coeff<T: PacketOrd>(data: &[T], config: &EvalConfig) -> Result<T> {
    redux(&min(), data, config)
}

/// Largest coefficient under the type's own comparison
pub fn max_coeff<T: PacketOrd>(data: &[T], config: &EvalConfig) -> Result<T> {
    redux(&max(), data, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex;

    #[test]
    fn test_sum_every_length() {
        let config = EvalConfig::default();
        for len in 1..40i64 {
            let data: Vec<i32> = (1..=len as i32).collect();
            let expected = (len * (len + 1) / 2) as i32;
            assert_eq!(sum_coeffs(&data, &config).unwrap(), expected, "len {len}");
        }
    }

    #[test]
    fn test_min_max() {
        let config = EvalConfig::default();
        let data = [4.0f64, -1.5, 9.25, 0.0, 3.0, -7.0, 2.0, 8.0, 1.0];
        assert_eq!(min_coeff(&data, &config).unwrap(), -7.0);
        assert_eq!(max_coeff(&data, &config).unwrap(), 9.25);
    }

    #[test]
    fn test_product_matches_scalar_only() {
        let data: Vec<f32> = (1..=12).map(|x| 1.0 + x as f32 / 16.0).collect();
        let packet = prod_coeffs(&data, &EvalConfig::default()).unwrap();
        let scalar = prod_coeffs(&data, &EvalConfig::scalar_only()).unwrap();
        assert_relative_eq!(packet, scalar, max_relative = 1e-5);
    }

    #[test]
    fn test_complex_sum() {
        let data = [Complex::new(1.0f64, 2.0), Complex::new(-3.0, 0.5)];
        let total = sum_coeffs(&data, &EvalConfig::default()).unwrap();
        assert_eq!(total, Complex::new(-2.0, 2.5));
    }

    #[test]
    fn test_empty_is_error() {
        let config = EvalConfig::default();
        let err = max_coeff::<u32>(&[], &config).unwrap_err();
        assert!(matches!(err, Error::EmptyInput(_)));
        assert!(err.to_string().contains("max"));
    }

    #[test]
    fn test_min_max_with_nan_agree_across_policies() {
        let packet = EvalConfig::default();
        let scalar = EvalConfig::scalar_only();
        let nan = f64::NAN;
        let cases: [&[f64]; 4] = [
            &[nan, 5.0, 1.0, 2.0, 3.0, 4.0, 6.0, 7.0],
            &[5.0, nan, 5.0, 5.0, 5.0, 0.0, 5.0, 5.0, 9.0],
            &[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, nan, nan],
            &[2.0, 7.0, 1.0, 8.0, 2.0, 8.0, 1.0, 8.0, 2.0, nan],
        ];
        let reducers: [fn(&[f64], &EvalConfig) -> Result<f64>; 2] = [min_coeff, max_coeff];
        for data in cases {
            for reduce in reducers {
                let a = reduce(data, &packet).unwrap();
                let b = reduce(data, &scalar).unwrap();
                assert!(a == b || (a.is_nan() && b.is_nan()), "{data:?}: {a} vs {b}");
            }
        }

        assert!(min_coeff(cases[0], &packet).unwrap().is_nan());
        assert!(max_coeff(cases[0], &packet).unwrap().is_nan());
        assert_eq!(min_coeff(cases[1], &packet).unwrap(), 0.0);
        assert_eq!(max_coeff(cases[2], &packet).unwrap(), 9.0);
    }

    #[test]
    fn test_min_max_with_nan_f32_lanes() {
        let mut data = vec![1.0f32; 19];
        data[3] = f32::NAN;
        data[11] = -4.0;
        data[17] = 6.0;
        for config in [EvalConfig::default(), EvalConfig::scalar_only()] {
            assert_eq!(min_coeff(&data, &config).unwrap(), -4.0);
            assert_eq!(max_coeff(&data, &config).unwrap(), 6.0);
        }
    }

    #[test]
    fn test_single_element() {
        assert_eq!(min_coeff(&[42u64], &EvalConfig::default()).unwrap(), 42);
    }
}
