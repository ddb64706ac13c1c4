//! VLAN → root port → port summaries.
//!
//! Joins three independently fetched tables (port info, port status,
//! transceiver info) into the per-VLAN view used by the port listing
//! and by next-hop egress resolution.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::error::CoreError;
use crate::model::{PortId, PortInfo, PortStatus, TransceiverId, TransceiverInfo, VlanId};
use crate::naming::root_port;
use crate::palette::Palette;

/// Substring marking fabric-facing ports, which carry no transceiver.
pub const FABRIC_PORT_MARKER: &str = "fab";

// ── VlanPortMap ─────────────────────────────────────────────────────

/// Root-port buckets for one VLAN, in the order ports were processed.
pub type RootPortBuckets = IndexMap<String, Vec<String>>;

/// Two-level insertion-ordered map: VLAN → root port → summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VlanPortMap(IndexMap<VlanId, RootPortBuckets>);

impl VlanPortMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a summary, creating the VLAN and root-port levels on first use.
    pub fn insert(&mut self, vlan: VlanId, root_port: &str, summary: String) {
        self.0
            .entry(vlan)
            .or_default()
            .entry(root_port.to_owned())
            .or_default()
            .push(summary);
    }

    pub fn get(&self, vlan: VlanId) -> Option<&RootPortBuckets> {
        self.0.get(&vlan)
    }

    /// Every summary in a VLAN, bucket by bucket.
    pub fn summaries(&self, vlan: VlanId) -> impl Iterator<Item = &str> {
        self.0
            .get(&vlan)
            .into_iter()
            .flat_map(|buckets| buckets.values())
            .flatten()
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VlanId, &RootPortBuckets)> {
        self.0.iter().map(|(vlan, buckets)| (*vlan, buckets))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ── Port summaries ──────────────────────────────────────────────────

/// Formatting knobs for port summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    pub palette: Palette,
    /// Append the `(<speed>G)` annotation.
    pub details: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            palette: Palette::plain(),
            details: true,
        }
    }
}

/// Facts about one port that decide whether and how it is summarised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct PortFacts<'a> {
    pub name: &'a str,
    pub has_channels: bool,
    pub transceiver_present: bool,
    pub fab_port: bool,
    pub enabled: bool,
    pub up: bool,
    pub speed_gbps: u32,
}

impl<'a> PortFacts<'a> {
    pub fn gather(
        port: &'a PortInfo,
        status: &PortStatus,
        transceivers: &BTreeMap<TransceiverId, TransceiverInfo>,
    ) -> Self {
        let transceiver_present = status
            .transceiver_id()
            .and_then(|id| transceivers.get(&id))
            .is_some_and(|info| info.present);

        Self {
            name: &port.name,
            has_channels: !status.channels().is_empty(),
            transceiver_present,
            fab_port: port.name.contains(FABRIC_PORT_MARKER),
            enabled: status.enabled,
            up: status.up,
            speed_gbps: status.speed_gbps(),
        }
    }
}

/// `(<speed>G)` for an up port, `()` for an enabled but down one.
pub fn port_speed_display(speed_gbps: u32, enabled: bool, up: bool) -> String {
    match (enabled, up) {
        (false, _) => String::new(),
        (true, false) => "()".to_owned(),
        (true, true) => format!("({speed_gbps}G)"),
    }
}

/// Summary string for a port, or `None` when the port is of no interest
/// (no lanes, no module and not fabric-facing, or administratively down).
pub fn port_summary(facts: &PortFacts<'_>, opts: SummaryOptions) -> Option<String> {
    let speed = if opts.details {
        port_speed_display(facts.speed_gbps, facts.enabled, facts.up)
    } else {
        String::new()
    };
    let connected = (facts.has_channels && facts.transceiver_present) || facts.fab_port;

    if connected && facts.enabled && facts.up {
        return Some(format!("{} {speed}", opts.palette.success(facts.name)));
    }
    if connected && facts.enabled {
        return Some(format!("{} {speed}", opts.palette.alert(facts.name)));
    }
    if facts.has_channels && !facts.transceiver_present && facts.enabled {
        return Some(format!("{} {speed}", facts.name));
    }
    None
}

// ── Builder ─────────────────────────────────────────────────────────

/// Build the VLAN → root port → summary map.
///
/// Unconfigured ports (no VLAN) are skipped. A port reporting more than
/// one VLAN, or whose name has no sub-port suffix, aborts the build.
pub fn build_vlan_port_map(
    ports: &BTreeMap<PortId, PortInfo>,
    statuses: &BTreeMap<PortId, PortStatus>,
    transceivers: &BTreeMap<TransceiverId, TransceiverInfo>,
    opts: SummaryOptions,
) -> Result<VlanPortMap, CoreError> {
    let mut map = VlanPortMap::new();

    for port in ports.values() {
        let vlan = match port.vlans.as_slice() {
            [] => continue,
            [vlan] => *vlan,
            vlans => {
                return Err(CoreError::MultiVlanInvariantViolation {
                    port: port.name.clone(),
                    count: vlans.len(),
                });
            }
        };
        let root = root_port(&port.name)?;
        let status = statuses
            .get(&port.port_id)
            .ok_or(CoreError::MissingPortStatus {
                port_id: port.port_id,
            })?;

        let facts = PortFacts::gather(port, status, transceivers);
        match port_summary(&facts, opts) {
            Some(summary) => map.insert(vlan, root, summary),
            None => debug!(port = %port.name, vlan, "port excluded from vlan map"),
        }
    }

    Ok(map)
}
