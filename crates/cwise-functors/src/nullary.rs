//! Nullary functors (generators)
//!
//! Generators take `(row, col)` coordinates instead of operands. Both are
//! repeatable: calling them again at the same coordinates yields the same
//! value, which lets an evaluator cache or hoist the result.

use crate::traits::{Arity, FunctorTraits, NullaryOp, PacketNullaryOp};
use cwise_core::{PacketScalar, Scalar};

/// Returns the bound value for every coordinate
#[derive(Debug, Clone, Copy)]
pub struct ConstantOp<T: PacketScalar> {
    value: T::Packet,
}

impl<T: PacketScalar> ConstantOp<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: T::pset1(value),
        }
    }

    pub fn value(&self) -> T {
        T::pfirst(self.value)
    }
}

impl<T: PacketScalar> FunctorTraits for ConstantOp<T> {
    const NAME: &'static str = "constant";
    const ARITY: Arity = Arity::Nullary;
    const COST: u32 = 1;
    const PACKET_ACCESS: bool = T::SIZE > 1;
    const IS_REPEATABLE: bool = true;
}

impl<T: PacketScalar> NullaryOp<T> for ConstantOp<T> {
    #[inline]
    fn call(&self, _row: isize, _col: isize) -> T {
        T::pfirst(self.value)
    }
}

impl<T: PacketScalar> PacketNullaryOp<T> for ConstantOp<T> {
    #[inline]
    fn packet_op(&self) -> T::Packet {
        self.value
    }
}

stateless_functor! {
    /// One on the diagonal, zero elsewhere
    IdentityOp
}

impl<T: Scalar> FunctorTraits for IdentityOp<T> {
    const NAME: &'static str = "identity";
    const ARITY: Arity = Arity::Nullary;
    const COST: u32 = T::ADD_COST;
    const PACKET_ACCESS: bool = false;
    const IS_REPEATABLE: bool = true;
}

impl<T: Scalar> NullaryOp<T> for IdentityOp<T> {
    #[inline]
    fn call(&self, row: isize, col: isize) -> T {
        if row == col {
            T::one()
        } else {
            T::zero()
        }
    }
}
