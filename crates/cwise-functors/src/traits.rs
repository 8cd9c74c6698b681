//! Functor traits and the descriptor that travels with every functor
//!
//! Each functor implements [`FunctorTraits`] (compile-time cost and packet
//! flags) plus exactly one arity trait. Functors that have a batched form
//! additionally implement the matching `Packet*Op` trait; `PACKET_ACCESS`
//! tells an evaluator whether using it is worthwhile for the scalar type.

use cwise_core::{PacketScalar, Scalar};
use serde::Serialize;

/// Number of operands a functor takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arity {
    /// Takes `(row, col)` coordinates instead of scalars
    Nullary,
    Unary,
    Binary,
}

/// Runtime snapshot of a functor's traits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FunctorDescriptor {
    pub name: &'static str,
    pub arity: Arity,
    pub cost: u32,
    pub packet_access: bool,
    pub is_repeatable: bool,
}

/// Compile-time traits of a functor
///
/// Derived purely from the scalar type(s) the functor is instantiated with;
/// never from the functor's bound value.
pub trait FunctorTraits {
    const NAME: &'static str;

    const ARITY: Arity;

    /// Abstract cost of one call, in the scalar's cost units
    const COST: u32;

    /// Whether the packet form may be used
    const PACKET_ACCESS: bool;

    /// Whether a generator returns the same value for every call, so the
    /// evaluator may cache or hoist it
    const IS_REPEATABLE: bool = false;

    fn descriptor() -> FunctorDescriptor
    where
        Self: Sized,
    {
        FunctorDescriptor {
            name: Self::NAME,
            arity: Self::ARITY,
            cost: Self::COST,
            packet_access: Self::PACKET_ACCESS,
            is_repeatable: Self::IS_REPEATABLE,
        }
    }
}

/// Functor combining two scalars of the same type
pub trait BinaryOp<T: Scalar>: FunctorTraits + Copy + Send + Sync {
    fn call(&self, a: T, b: T) -> T;
}

/// Binary functor with a batched form
///
/// `packet_op` must agree lane-by-lane with [`BinaryOp::call`].
pub trait PacketBinaryOp<T: PacketScalar>: BinaryOp<T> {
    fn packet_op(&self, a: T::Packet, b: T::Packet) -> T::Packet;
}

/// Marker for binary functors whose operands may be regrouped freely
///
/// Reductions rely on this to combine packet lanes in any order.
pub trait Associative<T: Scalar>: BinaryOp<T> {
    /// Whether `op(a, a) == a`, so a value may be folded in more than once
    const IDEMPOTENT: bool = false;
}

/// Functor mapping one scalar to a possibly different scalar type
pub trait UnaryOp<T: Scalar>: FunctorTraits + Copy + Send + Sync {
    type Output: Scalar;

    fn call(&self, a: T) -> Self::Output;
}

/// Type-preserving unary functor with a batched form
pub trait PacketUnaryOp<T: PacketScalar>: UnaryOp<T, Output = T> {
    fn packet_op(&self, a: T::Packet) -> T::Packet;
}

/// Generator producing a value from `(row, col)` coordinates
pub trait NullaryOp<T: Scalar>: FunctorTraits + Copy + Send + Sync {
    fn call(&self, row: isize, col: isize) -> T;
}

/// Generator whose value does not depend on coordinates, so a whole packet
/// can be produced at once
///
/// Implementors must be repeatable: `packet_op` is called once per fill and
/// the packet reused for every slot.
pub trait PacketNullaryOp<T: PacketScalar>: NullaryOp<T> {
    fn packet_op(&self) -> T::Packet;
}
