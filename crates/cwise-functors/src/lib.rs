//! Elementary scalar functors for coefficient-wise expressions
//!
//! Each functor is a tiny `Copy` callable paired with compile-time traits
//! (`COST`, `PACKET_ACCESS`, `IS_REPEATABLE`) that an evaluator reads to
//! choose between a scalar and a packet loop and to estimate expression cost.
//!
//! | Functor                 | Arity   | Cost                       | Packet       |
//! |-------------------------|---------|----------------------------|--------------|
//! | `SumOp`                 | binary  | add                        | width > 1    |
//! | `ProductOp`             | binary  | mul                        | width > 1    |
//! | `MinOp` / `MaxOp`       | binary  | add                        | width > 1    |
//! | `DifferenceOp`          | binary  | add                        | width > 1    |
//! | `QuotientOp`            | binary  | 2 * mul                    | never        |
//! | `NegateOp`              | unary   | add                        | never        |
//! | `AbsOp` / `Abs2Op`      | unary   | add / mul                  | never        |
//! | `ConjugateOp`           | unary   | add if complex, else 0     | never        |
//! | `CastOp`                | unary   | 0 if same type, else add   | never        |
//! | `RealOp`                | unary   | 0                          | never        |
//! | `MultipleOp`            | unary   | mul                        | width > 1    |
//! | `QuotientByConstantOp`  | unary   | mul (float) / 2 * mul (int)| never        |
//! | `ConstantOp`            | nullary | 1                          | width > 1    |
//! | `IdentityOp`            | nullary | add                        | never        |
//!
//! # Example
//!
//! ```rust
//! use cwise_functors::prelude::*;
//! use cwise_functors::factories::{multiple, quotient_by_constant};
//!
//! assert_eq!(multiple(3i32).call(4), 12);
//! assert_eq!(quotient_by_constant(2.0f64).call(7.0), 3.5);
//! assert_eq!(quotient_by_constant(2i32).call(7), 3);
//! assert!(!QuotientOp::<f64>::PACKET_ACCESS);
//! ```

/// Declares a zero-sized functor generic over its scalar type
macro_rules! stateless_functor {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name<T> {
            _phantom: std::marker::PhantomData<T>,
        }

        impl<T> $name<T> {
            pub fn new() -> Self {
                Self {
                    _phantom: std::marker::PhantomData,
                }
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

pub mod binary;
pub mod factories;
pub mod nullary;
pub mod parametrized;
pub mod traits;
pub mod unary;

pub use binary::{DifferenceOp, MaxOp, MinOp, ProductOp, QuotientOp, SumOp};
pub use nullary::{ConstantOp, IdentityOp};
pub use parametrized::{MultipleOp, QuotientByConstantOp, QuotientStrategy};
pub use traits::{
    Arity, Associative, BinaryOp, FunctorDescriptor, FunctorTraits, NullaryOp, PacketBinaryOp,
    PacketNullaryOp, PacketUnaryOp, UnaryOp,
};
pub use unary::{Abs2Op, AbsOp, CastOp, ConjugateOp, NegateOp, RealOp};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Abs2Op, AbsOp, Arity, Associative, BinaryOp, CastOp, ConjugateOp, ConstantOp, DifferenceOp,
        FunctorDescriptor, FunctorTraits, IdentityOp, MaxOp, MinOp, MultipleOp, NegateOp,
        NullaryOp, PacketBinaryOp, PacketNullaryOp, PacketUnaryOp, ProductOp,
        QuotientByConstantOp, QuotientOp, QuotientStrategy, RealOp, SumOp, UnaryOp,
    };
}
