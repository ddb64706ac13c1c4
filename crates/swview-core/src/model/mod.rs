// ── Switch state model ──
//
// Read-only snapshots of what the switch agent and the transceiver
// service report. The derivation modules consume these; nothing in
// here knows about colours or display strings.

pub mod port;
pub mod route;

// ── Re-exports ──────────────────────────────────────────────────────

pub use port::{
    AggregateMember, AggregatePort, PortId, PortInfo, PortStatus, TransceiverId, TransceiverIdx,
    TransceiverInfo, VlanId,
};
pub use route::{BinaryAddress, MplsAction, MplsActionCode, NextHop, Route};
