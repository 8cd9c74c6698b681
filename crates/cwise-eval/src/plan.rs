//! Loop selection
//!
//! The choice between a scalar and a packet loop is made from a functor's
//! descriptor, the packet width of the scalar type and the number of
//! coefficients. Nothing here inspects the functor's bound values.

use crate::config::EvalConfig;
use cwise_core::PacketScalar;
use cwise_functors::FunctorDescriptor;
use log::trace;
use serde::Serialize;

/// Shape of the loop an evaluation entry point runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopKind {
    /// One coefficient per step
    Scalar,
    /// Full packets, followed by a scalar tail for the remainder
    Packet,
}

/// Pick the loop for `len` coefficients of `T`
///
/// Packets are used only when the functor allows packet access, the policy
/// permits it and at least one full packet fits.
pub fn plan_loop<T: PacketScalar>(
    descriptor: &FunctorDescriptor,
    len: usize,
    config: &EvalConfig,
) -> LoopKind {
    let kind = if descriptor.packet_access
        && config.packet_policy.allows_packets()
        && len >= T::SIZE
    {
        LoopKind::Packet
    } else {
        LoopKind::Scalar
    };

    trace!(
        "{}: {} coefficients, packet width {} ({}) -> {:?} loop",
        descriptor.name,
        len,
        T::SIZE,
        T::BACKEND,
        kind
    );
    kind
}

/// Number of leading coefficients handled by full packets
pub(crate) fn packet_body_len<T: PacketScalar>(kind: LoopKind, len: usize) -> usize {
    match kind {
        LoopKind::Packet => len - len % T::SIZE,
        LoopKind::Scalar => 0,
    }
}
