//! Unary functors
//!
//! None of these has a packet form. Abs, abs2 and real return the scalar's
//! real counterpart, so a complex input yields a real output.

use crate::traits::{Arity, FunctorTraits, UnaryOp};
use cwise_core::{CastInto, Scalar};
use std::marker::PhantomData;
use std::ops::Neg;

stateless_functor! {
    /// `-a`
    NegateOp
}

impl<T: Scalar + Neg<Output = T>> FunctorTraits for NegateOp<T> {
    const NAME: &'static str = "negate";
    const ARITY: Arity = Arity::Unary;
    const COST: u32 = T::ADD_COST;
    const PACKET_ACCESS: bool = false;
}

impl<T: Scalar + Neg<Output = T>> UnaryOp<T> for NegateOp<T> {
    type Output = T;

    #[inline]
    fn call(&self, a: T) -> T {
        -a
    }
}

stateless_functor! {
    /// `|a|`, the modulus for complex values
    AbsOp
}

impl<T: Scalar> FunctorTraits for AbsOp<T> {
    const NAME: &'static str = "abs";
    const ARITY: Arity = Arity::Unary;
    const COST: u32 = T::ADD_COST;
    const PACKET_ACCESS: bool = false;
}

impl<T: Scalar> UnaryOp<T> for AbsOp<T> {
    type Output = T::Real;

    #[inline]
    fn call(&self, a: T) -> T::Real {
        a.abs()
    }
}

stateless_functor! {
    /// `|a|^2`
    Abs2Op
}

impl<T: Scalar> FunctorTraits for Abs2Op<T> {
    const NAME: &'static str = "abs2";
    const ARITY: Arity = Arity::Unary;
    const COST: u32 = T::MUL_COST;
    const PACKET_ACCESS: bool = false;
}

impl<T: Scalar> UnaryOp<T> for Abs2Op<T> {
    type Output = T::Real;

    #[inline]
    fn call(&self, a: T) -> T::Real {
        a.abs2()
    }
}

stateless_functor! {
    /// Complex conjugate; free for real types
    ConjugateOp
}

impl<T: Scalar> FunctorTraits for ConjugateOp<T> {
    const NAME: &'static str = "conjugate";
    const ARITY: Arity = Arity::Unary;
    const COST: u32 = if T::IS_COMPLEX { T::ADD_COST } else { 0 };
    const PACKET_ACCESS: bool = false;
}

impl<T: Scalar> UnaryOp<T> for ConjugateOp<T> {
    type Output = T;

    #[inline]
    fn call(&self, a: T) -> T {
        a.conj()
    }
}

/// Conversion from `S` to `U` with `as` semantics
///
/// Free when `S` and `U` are the same type, otherwise costs one addition of
/// the target type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastOp<S, U> {
    _phantom: PhantomData<(S, U)>,
}

impl<S, U> CastOp<S, U> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<S, U> Default for CastOp<S, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CastInto<U>, U: Scalar> FunctorTraits for CastOp<S, U> {
    const NAME: &'static str = "cast";
    const ARITY: Arity = Arity::Unary;
    const COST: u32 = if S::KIND.same_as(U::KIND) { 0 } else { U::ADD_COST };
    const PACKET_ACCESS: bool = false;
}

impl<S: CastInto<U>, U: Scalar> UnaryOp<S> for CastOp<S, U> {
    type Output = U;

    #[inline]
    fn call(&self, a: S) -> U {
        a.cast_into()
    }
}

stateless_functor! {
    /// Real part; modeled as free
    RealOp
}

impl<T: Scalar> FunctorTraits for RealOp<T> {
    const NAME: &'static str = "real";
    const ARITY: Arity = Arity::Unary;
    const COST: u32 = 0;
    const PACKET_ACCESS: bool = false;
}

impl<T: Scalar> UnaryOp<T> for RealOp<T> {
    type Output = T::Real;

    #[inline]
    fn call(&self, a: T) -> T::Real {
        a.real()
    }
}
