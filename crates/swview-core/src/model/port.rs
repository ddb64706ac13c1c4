// ── Port domain types ──

use serde::{Deserialize, Serialize};

pub type PortId = u32;
pub type VlanId = u16;
pub type TransceiverId = u32;

/// Static port configuration as reported by the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortInfo {
    pub port_id: PortId,
    /// Structured name such as `eth1/2/1`; empty for some internal ports.
    #[serde(default)]
    pub name: String,
    /// Exactly one entry for a configured port, empty otherwise.
    #[serde(default)]
    pub vlans: Vec<VlanId>,
}

/// Which transceiver (and which of its lanes) a port is wired to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransceiverIdx {
    pub transceiver_id: TransceiverId,
    #[serde(default)]
    pub channels: Vec<u32>,
}

/// Live port state as reported by the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortStatus {
    pub enabled: bool,
    pub up: bool,
    #[serde(default)]
    pub speed_mbps: u32,
    #[serde(default)]
    pub transceiver_idx: Option<TransceiverIdx>,
    #[serde(default)]
    pub profile_id: Option<String>,
}

impl PortStatus {
    /// Lanes assigned to this port; empty when no transceiver is mapped.
    pub fn channels(&self) -> &[u32] {
        self.transceiver_idx
            .as_ref()
            .map(|idx| idx.channels.as_slice())
            .unwrap_or_default()
    }

    pub fn transceiver_id(&self) -> Option<TransceiverId> {
        self.transceiver_idx.as_ref().map(|idx| idx.transceiver_id)
    }

    /// Speed in whole Gbps. Integer division: 2500 Mbps is 2G.
    pub fn speed_gbps(&self) -> u32 {
        self.speed_mbps / 1000
    }
}

/// What the transceiver service knows about one module slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransceiverInfo {
    pub port: TransceiverId,
    pub present: bool,
    #[serde(default)]
    pub profile_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateMember {
    pub member_port_id: PortId,
    #[serde(default)]
    pub weight: Option<u32>,
}

/// A link-aggregation group and its physical members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatePort {
    pub name: String,
    #[serde(default)]
    pub member_ports: Vec<AggregateMember>,
}
