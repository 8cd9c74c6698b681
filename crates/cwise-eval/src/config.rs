//! Configuration for evaluation loops

use serde::{Deserialize, Serialize};

/// Default bound on `coefficients * cost` below which an expression counts
/// as cheap enough to unroll completely
pub const DEFAULT_UNROLLING_LIMIT: u32 = 100;

/// Whether evaluation loops may use packet forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacketPolicy {
    /// Use the packet form whenever the functor and length allow it
    Auto,
    /// Always evaluate one coefficient at a time
    ScalarOnly,
}

impl PacketPolicy {
    pub fn allows_packets(self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl Default for PacketPolicy {
    fn default() -> Self {
        Self::Auto
    }
}

/// Settings shared by every evaluation entry point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub packet_policy: PacketPolicy,
    pub unrolling_limit: u32,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            packet_policy: PacketPolicy::Auto,
            unrolling_limit: DEFAULT_UNROLLING_LIMIT,
        }
    }
}

impl EvalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that never takes the packet path
    pub fn scalar_only() -> Self {
        Self::default().with_packet_policy(PacketPolicy::ScalarOnly)
    }

    pub fn with_packet_policy(mut self, policy: PacketPolicy) -> Self {
        self.packet_policy = policy;
        self
    }

    pub fn with_unrolling_limit(mut self, limit: u32) -> Self {
        self.unrolling_limit = limit;
        self
    }
}
