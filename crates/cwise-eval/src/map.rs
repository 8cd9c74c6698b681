//! Element-wise maps over slices
//!
//! The packet entry points process full packets first and finish the
//! remainder one coefficient at a time, so every length is handled. The
//! `_scalar` variants and [`unary_map`] accept any functor, including ones
//! without a packet form.

use crate::config::EvalConfig;
use crate::plan::{packet_body_len, plan_loop, LoopKind};
use cwise_core::{Error, PacketScalar, Result, Scalar};
use cwise_functors::{BinaryOp, FunctorTraits, PacketBinaryOp, PacketUnaryOp, UnaryOp};

fn check_binary_shapes(lhs: usize, rhs: usize, out: usize) -> Result<()> {
    Error::check_len(lhs, rhs, "binary map rhs")?;
    Error::check_len(lhs, out, "binary map output")
}

/// `out[i] = op(lhs[i], rhs[i])`, using packets when the plan allows
///
/// Returns the loop that was run.
pub fn binary_map<T, Op>(
    op: &Op,
    lhs: &[T],
    rhs: &[T],
    out: &mut [T],
    config: &EvalConfig,
) -> Result<LoopKind>
where
    T: PacketScalar,
    Op: PacketBinaryOp<T>,
{
    check_binary_shapes(lhs.len(), rhs.len(), out.len())?;

    let kind = plan_loop::<T>(&Op::descriptor(), out.len(), config);
    let body = packet_body_len::<T>(kind, out.len());
    let (out_body, out_tail) = out.split_at_mut(body);

    for ((o, a), b) in out_body
        .chunks_exact_mut(T::SIZE)
        .zip(lhs.chunks_exact(T::SIZE))
        .zip(rhs.chunks_exact(T::SIZE))
    {
        T::pstoreu(o, op.packet_op(T::ploadu(a), T::ploadu(b)));
    }
    for ((o, &a), &b) in out_tail.iter_mut().zip(&lhs[body..]).zip(&rhs[body..]) {
        *o = op.call(a, b);
    }

    Ok(kind)
}

/// `out[i] = op(lhs[i], rhs[i])` one coefficient at a time
pub fn binary_map_scalar<T, Op>(op: &Op, lhs: &[T], rhs: &[T], out: &mut [T]) -> Result<()>
where
    T: Scalar,
    Op: BinaryOp<T>,
{
    check_binary_shapes(lhs.len(), rhs.len(), out.len())?;

    for ((o, &a), &b) in out.iter_mut().zip(lhs).zip(rhs) {
        *o = op.call(a, b);
    }
    Ok(())
}

/// `out[i] = op(input[i])`; the output type follows the functor
pub fn unary_map<T, Op>(op: &Op, input: &[T], out: &mut [Op::Output]) -> Result<()>
where
    T: Scalar,
    Op: UnaryOp<T>,
{
    Error::check_len(input.len(), out.len(), "unary map output")?;

    for (o, &a) in out.iter_mut().zip(input) {
        *o = op.call(a);
    }
    Ok(())
}

/// `out[i] = op(input[i])` for type-preserving functors with a packet form
pub fn unary_map_packet<T, Op>(
    op: &Op,
    input: &[T],
    out: &mut [T],
    config: &EvalConfig,
) -> Result<LoopKind>
where
    T: PacketScalar,
    Op: PacketUnaryOp<T>,
{
    Error::check_len(input.len(), out.len(), "unary map output")?;

    let kind = plan_loop::<T>(&Op::descriptor(), out.len(), config);
    let body = packet_body_len::<T>(kind, out.len());
    let (out_body, out_tail) = out.split_at_mut(body);

    for (o, a) in out_body
        .chunks_exact_mut(T::SIZE)
        .zip(input.chunks_exact(T::SIZE))
    {
        T::pstoreu(o, op.packet_op(T::ploadu(a)));
    }
    for (o, &a) in out_tail.iter_mut().zip(&input[body..]) {
        *o = op.call(a);
    }

    Ok(kind)
}
