// swview-core: derivation layer between switch agent snapshots and the CLI.

pub mod address;
pub mod aggregate;
pub mod classify;
pub mod client;
pub mod error;
pub mod model;
pub mod naming;
pub mod nexthop;
pub mod palette;
pub mod snapshot;
pub mod vlan;

// ── Primary re-exports ──────────────────────────────────────────────
pub use address::{address_to_text, text_to_address};
pub use aggregate::{VlanAggregatePortMap, build_vlan_aggregate_port_map};
pub use classify::{PortStatusStrings, Presence, classify};
pub use client::{
    AgentClient, RetryPolicy, TransceiverClient, fetch_vlan_aggregate_port_map,
    fetch_vlan_port_map, transceiver_info_map, with_retries,
};
pub use error::CoreError;
pub use naming::{PortSortKey, parse_port_name, root_port, sort_key};
pub use nexthop::{mpls_annotation, nexthop_to_string};
pub use palette::{Palette, Tone};
pub use snapshot::{SnapshotAgent, SnapshotTransceivers};
pub use vlan::{SummaryOptions, VlanPortMap, build_vlan_port_map, port_summary};

// Model types at the crate root for ergonomics.
pub use model::{
    AggregateMember, AggregatePort, BinaryAddress, MplsAction, MplsActionCode, NextHop, PortId,
    PortInfo, PortStatus, Route, TransceiverId, TransceiverIdx, TransceiverInfo, VlanId,
};
