//! Unary functors bound to a constant
//!
//! The constant is captured once at construction. For vectorizable types the
//! multiplier is stored already broadcast to a packet; for width-1 packet
//! types the packet is the scalar, so both cases share one representation.

use crate::traits::{Arity, FunctorTraits, PacketUnaryOp, UnaryOp};
use cwise_core::{PacketScalar, Scalar};

/// `a * c` for a fixed `c`
#[derive(Debug, Clone, Copy)]
pub struct MultipleOp<T: PacketScalar> {
    other: T::Packet,
}

impl<T: PacketScalar> MultipleOp<T> {
    pub fn new(other: T) -> Self {
        Self {
            other: T::pset1(other),
        }
    }

    /// The bound multiplier
    pub fn factor(&self) -> T {
        T::pfirst(self.other)
    }
}

impl<T: PacketScalar> FunctorTraits for MultipleOp<T> {
    const NAME: &'static str = "multiple";
    const ARITY: Arity = Arity::Unary;
    const COST: u32 = T::MUL_COST;
    const PACKET_ACCESS: bool = T::SIZE > 1;
}

impl<T: PacketScalar> UnaryOp<T> for MultipleOp<T> {
    type Output = T;

    #[inline]
    fn call(&self, a: T) -> T {
        a * T::pfirst(self.other)
    }
}

impl<T: PacketScalar> PacketUnaryOp<T> for MultipleOp<T> {
    #[inline]
    fn packet_op(&self, a: T::Packet) -> T::Packet {
        T::pmul(a, self.other)
    }
}

/// How [`QuotientByConstantOp`] divides, fixed by the scalar type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotientStrategy {
    /// Reciprocal computed once, then one multiplication per call
    Reciprocal,
    /// Divisor stored as-is, one true division per call
    TrueDivision,
}

impl QuotientStrategy {
    /// Strategy used for scalar type `T`
    pub const fn for_scalar<T: Scalar>() -> Self {
        if T::HAS_FLOATING_POINT {
            Self::Reciprocal
        } else {
            Self::TrueDivision
        }
    }
}

/// `a / c` for a fixed `c`
///
/// Floating types trade exactness for speed: the result is `a * (1 / c)`,
/// which may differ from `a / c` by one rounding. Integer types keep exact
/// truncating division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuotientByConstantOp<T> {
    // reciprocal of the divisor when the strategy is Reciprocal
    other: T,
}

impl<T: Scalar> QuotientByConstantOp<T> {
    pub fn new(divisor: T) -> Self {
        let other = match QuotientStrategy::for_scalar::<T>() {
            QuotientStrategy::Reciprocal => T::one() / divisor,
            QuotientStrategy::TrueDivision => divisor,
        };
        Self { other }
    }

    pub fn strategy(&self) -> QuotientStrategy {
        QuotientStrategy::for_scalar::<T>()
    }

    /// The divisor this functor was built with (recomputed from the
    /// reciprocal for floating types)
    pub fn divisor(&self) -> T {
        match self.strategy() {
            QuotientStrategy::Reciprocal => T::one() / self.other,
            QuotientStrategy::TrueDivision => self.other,
        }
    }
}

impl<T: Scalar> FunctorTraits for QuotientByConstantOp<T> {
    const NAME: &'static str = "quotient_by_constant";
    const ARITY: Arity = Arity::Unary;
    const COST: u32 = if T::HAS_FLOATING_POINT {
        T::MUL_COST
    } else {
        2 * T::MUL_COST
    };
    const PACKET_ACCESS: bool = false;
}

impl<T: Scalar> UnaryOp<T> for QuotientByConstantOp<T> {
    type Output = T;

    #[inline]
    fn call(&self, a: T) -> T {
        if T::HAS_FLOATING_POINT {
            a * self.other
        } else {
            a / self.other
        }
    }
}
