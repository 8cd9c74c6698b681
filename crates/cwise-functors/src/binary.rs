//! Binary functors
//!
//! Associative: sum, product, min, max. Non-associative: difference and
//! quotient. All but quotient have a packet form; quotient is costed at two
//! multiplications and never vectorized.

use crate::traits::{Arity, Associative, BinaryOp, FunctorTraits, PacketBinaryOp};
use cwise_core::{scalar_max, scalar_min, PacketOrd, PacketScalar, Scalar};

stateless_functor! {
    /// `a + b`
    SumOp
}

impl<T: PacketScalar> FunctorTraits for SumOp<T> {
    const NAME: &'static str = "sum";
    const ARITY: Arity = Arity::Binary;
    const COST: u32 = T::ADD_COST;
    const PACKET_ACCESS: bool = T::SIZE > 1;
}

impl<T: PacketScalar> BinaryOp<T> for SumOp<T> {
    #[inline]
    fn call(&self, a: T, b: T) -> T {
        a + b
    }
}

impl<T: PacketScalar> PacketBinaryOp<T> for SumOp<T> {
    #[inline]
    fn packet_op(&self, a: T::Packet, b: T::Packet) -> T::Packet {
        T::padd(a, b)
    }
}

impl<T: PacketScalar> Associative<T> for SumOp<T> {}

stateless_functor! {
    /// `a * b`
    ProductOp
}

impl<T: PacketScalar> FunctorTraits for ProductOp<T> {
    const NAME: &'static str = "product";
    const ARITY: Arity = Arity::Binary;
    const COST: u32 = T::MUL_COST;
    const PACKET_ACCESS: bool = T::SIZE > 1;
}

impl<T: PacketScalar> BinaryOp<T> for ProductOp<T> {
    #[inline]
    fn call(&self, a: T, b: T) -> T {
        a * b
    }
}

impl<T: PacketScalar> PacketBinaryOp<T> for ProductOp<T> {
    #[inline]
    fn packet_op(&self, a: T::Packet, b: T::Packet) -> T::Packet {
        T::pmul(a, b)
    }
}

impl<T: PacketScalar> Associative<T> for ProductOp<T> {}

stateless_functor! {
    /// Smaller of two values under the type's own comparison
    ///
    /// NaN operands are not special-cased: `min(a, NaN) == a` and
    /// `min(NaN, b)` is NaN.
    MinOp
}

impl<T: PacketOrd> FunctorTraits for MinOp<T> {
    const NAME: &'static str = "min";
    const ARITY: Arity = Arity::Binary;
    const COST: u32 = T::ADD_COST;
    const PACKET_ACCESS: bool = T::SIZE > 1;
}

impl<T: PacketOrd> BinaryOp<T> for MinOp<T> {
    #[inline]
    fn call(&self, a: T, b: T) -> T {
        scalar_min(a, b)
    }
}

impl<T: PacketOrd> PacketBinaryOp<T> for MinOp<T> {
    #[inline]
    fn packet_op(&self, a: T::Packet, b: T::Packet) -> T::Packet {
        T::pmin(a, b)
    }
}

impl<T: PacketOrd> Associative<T> for MinOp<T> {
    const IDEMPOTENT: bool = true;
}

stateless_functor! {
    /// Larger of two values under the type's own comparison
    MaxOp
}

impl<T: PacketOrd> FunctorTraits for MaxOp<T> {
    const NAME: &'static str = "max";
    const ARITY: Arity = Arity::Binary;
    const COST: u32 = T::ADD_COST;
    const PACKET_ACCESS: bool = T::SIZE > 1;
}

impl<T: PacketOrd> BinaryOp<T> for MaxOp<T> {
    #[inline]
    fn call(&self, a: T, b: T) -> T {
        scalar_max(a, b)
    }
}

impl<T: PacketOrd> PacketBinaryOp<T> for MaxOp<T> {
    #[inline]
    fn packet_op(&self, a: T::Packet, b: T::Packet) -> T::Packet {
        T::pmax(a, b)
    }
}

impl<T: PacketOrd> Associative<T> for MaxOp<T> {
    const IDEMPOTENT: bool = true;
}

stateless_functor! {
    /// `a - b`
    DifferenceOp
}

impl<T: PacketScalar> FunctorTraits for DifferenceOp<T> {
    const NAME: &'static str = "difference";
    const ARITY: Arity = Arity::Binary;
    const COST: u32 = T::ADD_COST;
    const PACKET_ACCESS: bool = T::SIZE > 1;
}

impl<T: PacketScalar> BinaryOp<T> for DifferenceOp<T> {
    #[inline]
    fn call(&self, a: T, b: T) -> T {
        a - b
    }
}

impl<T: PacketScalar> PacketBinaryOp<T> for DifferenceOp<T> {
    #[inline]
    fn packet_op(&self, a: T::Packet, b: T::Packet) -> T::Packet {
        T::psub(a, b)
    }
}

stateless_functor! {
    /// `a / b`, with the type's native division semantics
    QuotientOp
}

impl<T: Scalar> FunctorTraits for QuotientOp<T> {
    const NAME: &'static str = "quotient";
    const ARITY: Arity = Arity::Binary;
    const COST: u32 = 2 * T::MUL_COST;
    const PACKET_ACCESS: bool = false;
}

impl<T: Scalar> BinaryOp<T> for QuotientOp<T> {
    #[inline]
    fn call(&self, a: T, b: T) -> T {
        a / b
    }
}
