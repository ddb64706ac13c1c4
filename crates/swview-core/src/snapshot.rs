//! File-backed collaborators.
//!
//! The agent and transceiver service state is exported as JSON and read
//! back here. Next-hop addresses are stored as text literals and packed
//! into [`BinaryAddress`] on load, so a malformed literal fails the load
//! instead of surfacing later during rendering.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::address::text_to_address;
use crate::client::{AgentClient, TransceiverClient};
use crate::error::CoreError;
use crate::model::{
    AggregatePort, MplsAction, NextHop, PortId, PortInfo, PortStatus, Route, TransceiverId,
    TransceiverInfo,
};

// ── On-disk shapes ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct AgentDocument {
    #[serde(default)]
    ports: Vec<PortInfo>,
    #[serde(default)]
    port_status: BTreeMap<PortId, PortStatus>,
    #[serde(default)]
    aggregate_ports: Vec<AggregatePort>,
    #[serde(default)]
    routes: Vec<RouteEntry>,
}

#[derive(Debug, Deserialize)]
struct RouteEntry {
    prefix: String,
    #[serde(default)]
    next_hops: Vec<NextHopEntry>,
}

#[derive(Debug, Deserialize)]
struct NextHopEntry {
    address: String,
    #[serde(default)]
    if_name: Option<String>,
    #[serde(default)]
    weight: Option<u32>,
    #[serde(default)]
    mpls_action: Option<MplsAction>,
}

impl NextHopEntry {
    fn into_next_hop(self) -> Result<NextHop, CoreError> {
        let mut address = text_to_address(&self.address)?;
        address.if_name = self.if_name;
        Ok(NextHop {
            address,
            weight: self.weight,
            mpls_action: self.mpls_action,
        })
    }
}

#[derive(Debug, Deserialize)]
struct TransceiverDocument {
    #[serde(default)]
    transceivers: Vec<TransceiverInfo>,
}

fn read_document<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, CoreError> {
    let snapshot_err = |reason: String| CoreError::Snapshot {
        path: path.display().to_string(),
        reason,
    };
    let contents = std::fs::read_to_string(path).map_err(|e| snapshot_err(e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| snapshot_err(e.to_string()))
}

// ── SnapshotAgent ───────────────────────────────────────────────────

/// Agent state loaded from a JSON export.
#[derive(Debug, Clone, Default)]
pub struct SnapshotAgent {
    ports: BTreeMap<PortId, PortInfo>,
    port_status: BTreeMap<PortId, PortStatus>,
    aggregate_ports: Vec<AggregatePort>,
    routes: Vec<Route>,
}

impl SnapshotAgent {
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let doc: AgentDocument = read_document(path)?;
        let agent = Self::from_document(doc)?;
        debug!(
            path = %path.display(),
            ports = agent.ports.len(),
            routes = agent.routes.len(),
            "loaded agent snapshot"
        );
        Ok(agent)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let doc: AgentDocument = serde_json::from_str(json).map_err(|e| CoreError::Snapshot {
            path: "<inline>".into(),
            reason: e.to_string(),
        })?;
        Self::from_document(doc)
    }

    fn from_document(doc: AgentDocument) -> Result<Self, CoreError> {
        let routes = doc
            .routes
            .into_iter()
            .map(|entry| {
                let next_hops = entry
                    .next_hops
                    .into_iter()
                    .map(NextHopEntry::into_next_hop)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Route {
                    prefix: entry.prefix,
                    next_hops,
                })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        Ok(Self {
            ports: doc.ports.into_iter().map(|p| (p.port_id, p)).collect(),
            port_status: doc.port_status,
            aggregate_ports: doc.aggregate_ports,
            routes,
        })
    }
}

impl AgentClient for SnapshotAgent {
    fn all_port_info(&self) -> Result<BTreeMap<PortId, PortInfo>, CoreError> {
        Ok(self.ports.clone())
    }

    fn port_status(&self) -> Result<BTreeMap<PortId, PortStatus>, CoreError> {
        Ok(self.port_status.clone())
    }

    fn aggregate_port_table(&self) -> Result<Vec<AggregatePort>, CoreError> {
        Ok(self.aggregate_ports.clone())
    }

    fn port_info(&self, port_id: PortId) -> Result<PortInfo, CoreError> {
        self.ports
            .get(&port_id)
            .cloned()
            .ok_or(CoreError::PortNotFound { port_id })
    }

    fn route_table(&self) -> Result<Vec<Route>, CoreError> {
        Ok(self.routes.clone())
    }
}

// ── SnapshotTransceivers ────────────────────────────────────────────

/// Transceiver service state loaded from a JSON export.
#[derive(Debug, Clone, Default)]
pub struct SnapshotTransceivers {
    info: BTreeMap<TransceiverId, TransceiverInfo>,
}

impl SnapshotTransceivers {
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let doc: TransceiverDocument = read_document(path)?;
        debug!(
            path = %path.display(),
            modules = doc.transceivers.len(),
            "loaded transceiver snapshot"
        );
        Ok(Self::from_records(doc.transceivers))
    }

    pub fn from_records(records: impl IntoIterator<Item = TransceiverInfo>) -> Self {
        Self {
            info: records.into_iter().map(|t| (t.port, t)).collect(),
        }
    }
}

impl TransceiverClient for SnapshotTransceivers {
    fn transceiver_info(
        &self,
        ids: Option<&[TransceiverId]>,
    ) -> Result<BTreeMap<TransceiverId, TransceiverInfo>, CoreError> {
        let Some(ids) = ids else {
            return Ok(self.info.clone());
        };
        Ok(ids
            .iter()
            .filter_map(|id| self.info.get(id).map(|info| (*id, info.clone())))
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::MplsActionCode;

    const AGENT_JSON: &str = r#"{
        "ports": [
            {"port_id": 1, "name": "eth1/1/1", "vlans": [42]},
            {"port_id": 2, "name": "eth1/1/2"}
        ],
        "port_status": {
            "1": {"enabled": true, "up": true, "speed_mbps": 100000,
                  "transceiver_idx": {"transceiver_id": 0, "channels": [0, 1]}}
        },
        "aggregate_ports": [
            {"name": "po1", "member_ports": [{"member_port_id": 1}]}
        ],
        "routes": [
            {"prefix": "10.1.0.0/24", "next_hops": [
                {"address": "10.0.0.1", "if_name": "fboss42", "weight": 2,
                 "mpls_action": {"action": "PUSH", "push_labels": [100, 200]}}
            ]}
        ]
    }"#;

    #[test]
    fn agent_snapshot_round_trips_through_client_trait() {
        let agent = SnapshotAgent::from_json(AGENT_JSON).unwrap();

        let ports = agent.all_port_info().unwrap();
        assert_eq!(ports.len(), 2);
        assert!(ports[&2].vlans.is_empty());

        let statuses = agent.port_status().unwrap();
        assert_eq!(statuses[&1].channels(), &[0, 1]);

        assert_eq!(agent.aggregate_port_table().unwrap()[0].name, "po1");
        assert_eq!(agent.port_info(1).unwrap().vlans, vec![42]);
    }

    #[test]
    fn next_hop_addresses_are_packed_on_load() {
        let agent = SnapshotAgent::from_json(AGENT_JSON).unwrap();
        let routes = agent.route_table().unwrap();
        let nh = &routes[0].next_hops[0];
        assert_eq!(nh.address.addr, vec![10, 0, 0, 1]);
        assert_eq!(nh.address.if_name.as_deref(), Some("fboss42"));
        assert_eq!(nh.weight, Some(2));
        let action = nh.mpls_action.as_ref().unwrap();
        assert_eq!(action.action, MplsActionCode::Push);
        assert_eq!(action.push_labels, vec![100, 200]);
    }

    #[test]
    fn invalid_next_hop_address_fails_the_load() {
        let json = r#"{"routes": [{"prefix": "::/0", "next_hops": [{"address": "nope"}]}]}"#;
        let err = SnapshotAgent::from_json(json).unwrap_err();
        assert!(matches!(err, CoreError::InvalidAddress { input } if input == "nope"));
    }

    #[test]
    fn unknown_port_lookup_fails() {
        let agent = SnapshotAgent::from_json("{}").unwrap();
        assert!(matches!(
            agent.port_info(5),
            Err(CoreError::PortNotFound { port_id: 5 })
        ));
    }

    #[test]
    fn missing_file_is_a_snapshot_error() {
        let err = SnapshotAgent::load(Path::new("/nonexistent/agent.json")).unwrap_err();
        assert!(matches!(err, CoreError::Snapshot { .. }));
        assert!(err.is_transient());
    }

    #[test]
    fn transceivers_load_from_file_and_filter_by_id() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"transceivers": [
                {{"port": 0, "present": true}},
                {{"port": 1, "present": false, "profile_id": "100G_CWDM4"}}
            ]}}"#
        )
        .unwrap();

        let client = SnapshotTransceivers::load(file.path()).unwrap();
        assert_eq!(client.transceiver_info(None).unwrap().len(), 2);

        let only = client.transceiver_info(Some(&[1, 9][..])).unwrap();
        assert_eq!(only.len(), 1);
        assert!(!only[&1].present);
    }
}
