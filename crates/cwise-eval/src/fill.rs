//! Filling column-major buffers from generators
//!
//! Coefficient `i` of a `rows x cols` buffer sits at row `i % rows`,
//! column `i / rows`.

use crate::config::EvalConfig;
use crate::plan::{plan_loop, LoopKind};
use cwise_core::{Error, PacketScalar, Result, Scalar};
use cwise_functors::{FunctorTraits, NullaryOp, PacketNullaryOp};

/// Number of coefficients in a `rows x cols` shape
fn shape_len(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or_else(|| {
        Error::InvalidParameter(format!("shape {rows}x{cols} overflows usize"))
    })
}

/// Write `op(row, col)` into `out`, where `out[0]` is linear index `start`
fn fill_by_coordinates<T, Op>(op: &Op, rows: usize, start: usize, out: &mut [T])
where
    T: Scalar,
    Op: NullaryOp<T>,
{
    for (offset, slot) in out.iter_mut().enumerate() {
        let index = start + offset;
        *slot = op.call((index % rows) as isize, (index / rows) as isize);
    }
}

/// Fill a column-major `rows x cols` buffer, using packets when the plan
/// allows
///
/// The generator's packet is produced once and stored to every full packet
/// slot; the remainder is filled by coordinates.
pub fn nullary_fill<T, Op>(
    op: &Op,
    rows: usize,
    cols: usize,
    out: &mut [T],
    config: &EvalConfig,
) -> Result<LoopKind>
where
    T: PacketScalar,
    Op: PacketNullaryOp<T>,
{
    let len = shape_len(rows, cols)?;
    Error::check_len(len, out.len(), "nullary fill output")?;

    let kind = plan_loop::<T>(&Op::descriptor(), len, config);
    if kind == LoopKind::Scalar {
        fill_by_coordinates(op, rows, 0, out);
        return Ok(kind);
    }

    let packet = op.packet_op();
    let mut chunks = out.chunks_exact_mut(T::SIZE);
    for chunk in &mut chunks {
        T::pstoreu(chunk, packet);
    }
    let tail = chunks.into_remainder();
    let start = len - tail.len();
    fill_by_coordinates(op, rows, start, tail);

    Ok(kind)
}

/// Fill a column-major `rows x cols` buffer one coefficient at a time
pub fn nullary_fill_scalar<T, Op>(op: &Op, rows: usize, cols: usize, out: &mut [T]) -> Result<()>
where
    T: Scalar,
    Op: NullaryOp<T>,
{
    let len = shape_len(rows, cols)?;
    Error::check_len(len, out.len(), "nullary fill output")?;

    fill_by_coordinates(op, rows, 0, out);
    Ok(())
}
