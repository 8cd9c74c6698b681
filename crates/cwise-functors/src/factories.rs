//! Factory functions for the functor catalog
//!
//! Thin constructors so call sites read like the operation they build:
//! `binary_map(&sum(), ..)`, `unary_map(&multiple(2.0), ..)`.

use crate::binary::{DifferenceOp, MaxOp, MinOp, ProductOp, QuotientOp, SumOp};
use crate::nullary::{ConstantOp, IdentityOp};
use crate::parametrized::{MultipleOp, QuotientByConstantOp};
use crate::traits::{FunctorDescriptor, FunctorTraits};
use crate::unary::{Abs2Op, AbsOp, CastOp, ConjugateOp, NegateOp, RealOp};
use cwise_core::{CastInto, PacketOrd, PacketScalar, Scalar};
use std::ops::Neg;

pub fn sum<T: PacketScalar>() -> SumOp<T> {
    SumOp::new()
}

pub fn product<T: PacketScalar>() -> ProductOp<T> {
    ProductOp::new()
}

pub fn min<T: PacketOrd>() -> MinOp<T> {
    MinOp::new()
}

pub fn max<T: PacketOrd>() -> MaxOp<T> {
    MaxOp::new()
}

pub fn difference<T: PacketScalar>() -> DifferenceOp<T> {
    DifferenceOp::new()
}

pub fn quotient<T: Scalar>() -> QuotientOp<T> {
    QuotientOp::new()
}

pub fn negate<T: Scalar + Neg<Output = T>>() -> NegateOp<T> {
    NegateOp::new()
}

pub fn abs<T: Scalar>() -> AbsOp<T> {
    AbsOp::new()
}

pub fn abs2<T: Scalar>() -> Abs2Op<T> {
    Abs2Op::new()
}

pub fn conjugate<T: Scalar>() -> ConjugateOp<T> {
    ConjugateOp::new()
}

pub fn cast<S: CastInto<U>, U: Scalar>() -> CastOp<S, U> {
    CastOp::new()
}

pub fn real<T: Scalar>() -> RealOp<T> {
    RealOp::new()
}

pub fn multiple<T: PacketScalar>(factor: T) -> MultipleOp<T> {
    MultipleOp::new(factor)
}

pub fn quotient_by_constant<T: Scalar>(divisor: T) -> QuotientByConstantOp<T> {
    QuotientByConstantOp::new(divisor)
}

pub fn constant<T: PacketScalar>(value: T) -> ConstantOp<T> {
    ConstantOp::new(value)
}

pub fn identity<T: Scalar>() -> IdentityOp<T> {
    IdentityOp::new()
}

/// Descriptors of every functor that is defined for any scalar type
///
/// Min, max and negate are left out because they need ordering or a sign;
/// cast is left out because it needs a second type.
pub fn catalog<T: PacketScalar>() -> Vec<FunctorDescriptor> {
    vec![
        SumOp::<T>::descriptor(),
        ProductOp::<T>::descriptor(),
        DifferenceOp::<T>::descriptor(),
        QuotientOp::<T>::descriptor(),
        AbsOp::<T>::descriptor(),
        Abs2Op::<T>::descriptor(),
        ConjugateOp::<T>::descriptor(),
        RealOp::<T>::descriptor(),
        MultipleOp::<T>::descriptor(),
        QuotientByConstantOp::<T>::descriptor(),
        ConstantOp::<T>::descriptor(),
        IdentityOp::<T>::descriptor(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Arity, BinaryOp, NullaryOp, UnaryOp};
    use num_complex::Complex;

    #[test]
    fn test_factories_build_working_functors() {
        assert_eq!(sum::<f64>().call(1.0, 2.0), 3.0);
        assert_eq!(max::<i32>().call(-4, 2), 2);
        assert_eq!(negate::<i64>().call(5), -5);
        assert_eq!(cast::<f64, i64>().call(9.99), 9);
        assert_eq!(multiple(3i32).call(4), 12);
        assert_eq!(quotient_by_constant(2i32).call(7), 3);
        assert_eq!(constant(1.5f32).call(9, 9), 1.5);
        assert_eq!(identity::<u32>().call(1, 2), 0);
    }

    #[test]
    fn test_catalog_is_complete_and_unique() {
        let entries = catalog::<f64>();
        assert_eq!(entries.len(), 12);

        let mut names: Vec<_> = entries.iter().map(|d| d.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_only_generators_are_repeatable() {
        for d in catalog::<Complex<f64>>() {
            assert_eq!(d.is_repeatable, d.arity == Arity::Nullary, "{}", d.name);
        }
    }

    #[test]
    fn test_complex_catalog_has_no_packet_access() {
        assert!(catalog::<Complex<f32>>().iter().all(|d| !d.packet_access));
    }

    #[test]
    fn test_descriptor_serializes() {
        let json = serde_json::to_string(&QuotientOp::<f32>::descriptor()).unwrap();
        assert!(json.contains("\"name\":\"quotient\""));
        assert!(json.contains("\"arity\":\"binary\""));
        assert!(json.contains("\"packet_access\":false"));
    }
}
