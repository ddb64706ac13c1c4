//! Collaborator seams: the switch agent and the transceiver service.
//!
//! The core never talks to the network itself. Whatever implements these
//! traits hands over complete snapshots; the fetch helpers here only add
//! retry, degraded-mode handling and the builder calls on top.

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::{debug, warn};

use crate::aggregate::{VlanAggregatePortMap, build_vlan_aggregate_port_map};
use crate::error::CoreError;
use crate::model::{
    AggregatePort, PortId, PortInfo, PortStatus, Route, TransceiverId, TransceiverInfo,
};
use crate::vlan::{SummaryOptions, VlanPortMap, build_vlan_port_map};

// ── Traits ──────────────────────────────────────────────────────────

/// Read-only view of the switch control-plane agent.
pub trait AgentClient {
    fn all_port_info(&self) -> Result<BTreeMap<PortId, PortInfo>, CoreError>;

    fn port_status(&self) -> Result<BTreeMap<PortId, PortStatus>, CoreError>;

    fn aggregate_port_table(&self) -> Result<Vec<AggregatePort>, CoreError>;

    fn port_info(&self, port_id: PortId) -> Result<PortInfo, CoreError>;

    fn route_table(&self) -> Result<Vec<Route>, CoreError>;
}

/// Read-only view of the optical transceiver service.
pub trait TransceiverClient {
    /// Info for the given modules, or for every module when `ids` is `None`.
    fn transceiver_info(
        &self,
        ids: Option<&[TransceiverId]>,
    ) -> Result<BTreeMap<TransceiverId, TransceiverInfo>, CoreError>;
}

// ── Retry ───────────────────────────────────────────────────────────

/// How often and how patiently to retry a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    pub fn with_attempts(attempts: u32) -> Self {
        Self {
            attempts,
            ..Self::default()
        }
    }
}

/// Run `op` until it succeeds, fails permanently, or attempts run out.
///
/// Only [`CoreError::is_transient`] errors are retried. At least one
/// attempt is always made.
pub fn with_retries<T, F>(policy: RetryPolicy, mut op: F) -> Result<T, CoreError>
where
    F: FnMut() -> Result<T, CoreError>,
{
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) if err.is_transient() && attempt < attempts => {
                warn!(attempt, attempts, error = %err, "fetch failed, retrying");
                std::thread::sleep(policy.delay);
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

// ── Fetch helpers ───────────────────────────────────────────────────

/// Fetch transceiver info, tolerating an absent or failing service.
///
/// No client means no data. A failing client either propagates the error
/// or, with `continue_on_error`, logs it and yields no data.
pub fn transceiver_info_map(
    client: Option<&dyn TransceiverClient>,
    ids: Option<&[TransceiverId]>,
    continue_on_error: bool,
) -> Result<BTreeMap<TransceiverId, TransceiverInfo>, CoreError> {
    let Some(client) = client else {
        debug!("no transceiver service configured");
        return Ok(BTreeMap::new());
    };
    match client.transceiver_info(ids) {
        Ok(info) => Ok(info),
        Err(err) if continue_on_error => {
            warn!(error = %err, "could not get transceiver info; continuing anyway");
            Ok(BTreeMap::new())
        }
        Err(err) => Err(CoreError::UnavailableTransceiverService {
            reason: err.to_string(),
        }),
    }
}

/// Fetch ports, statuses and transceivers, then build the VLAN-port map.
///
/// Transceiver failures never abort: affected ports are treated as having
/// no module present.
pub fn fetch_vlan_port_map(
    agent: &dyn AgentClient,
    transceivers: Option<&dyn TransceiverClient>,
    opts: SummaryOptions,
) -> Result<VlanPortMap, CoreError> {
    let ports = agent.all_port_info()?;
    let statuses = agent.port_status()?;
    let qsfp = transceiver_info_map(transceivers, None, true)?;
    build_vlan_port_map(&ports, &statuses, &qsfp, opts)
}

/// Fetch the aggregate table and resolve each member's VLAN via the agent.
pub fn fetch_vlan_aggregate_port_map(
    agent: &dyn AgentClient,
) -> Result<VlanAggregatePortMap, CoreError> {
    let table = agent.aggregate_port_table()?;
    build_vlan_aggregate_port_map(&table, |port_id| {
        agent.port_info(port_id).map(|port| port.vlans)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct FailingTransceivers;

    impl TransceiverClient for FailingTransceivers {
        fn transceiver_info(
            &self,
            _ids: Option<&[TransceiverId]>,
        ) -> Result<BTreeMap<TransceiverId, TransceiverInfo>, CoreError> {
            Err(CoreError::Snapshot {
                path: "qsfp.json".into(),
                reason: "connection refused".into(),
            })
        }
    }

    fn quick(attempts: u32) -> RetryPolicy {
        RetryPolicy {
            attempts,
            delay: Duration::ZERO,
        }
    }

    #[test]
    fn absent_transceiver_service_yields_no_data() {
        assert!(transceiver_info_map(None, None, false).unwrap().is_empty());
    }

    #[test]
    fn failing_transceiver_service_degrades_when_allowed() {
        let client = FailingTransceivers;
        assert!(
            transceiver_info_map(Some(&client as &dyn TransceiverClient), None, true)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn failing_transceiver_service_propagates_otherwise() {
        let client = FailingTransceivers;
        let err = transceiver_info_map(Some(&client as &dyn TransceiverClient), None, false)
            .unwrap_err();
        assert!(matches!(err, CoreError::UnavailableTransceiverService { .. }));
    }

    #[test]
    fn retries_transient_errors_until_success() {
        let calls = Cell::new(0);
        let value = with_retries(quick(3), || {
            calls.set(calls.get() + 1);
            if calls.get() < 3 {
                Err(CoreError::Snapshot {
                    path: "agent.json".into(),
                    reason: "busy".into(),
                })
            } else {
                Ok(7)
            }
        })
        .unwrap();
        assert_eq!(value, 7);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn gives_up_after_last_attempt() {
        let calls = Cell::new(0);
        let result: Result<(), _> = with_retries(quick(2), || {
            calls.set(calls.get() + 1);
            Err(CoreError::Snapshot {
                path: "agent.json".into(),
                reason: "busy".into(),
            })
        });
        assert!(result.is_err());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn contract_violations_are_not_retried() {
        let calls = Cell::new(0);
        let result: Result<(), _> = with_retries(quick(5), || {
            calls.set(calls.get() + 1);
            Err(CoreError::UnresolvableRootPort { name: "eth1".into() })
        });
        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn zero_attempts_still_runs_once() {
        let calls = Cell::new(0);
        let _ = with_retries(quick(0), || {
            calls.set(calls.get() + 1);
            Ok::<_, CoreError>(())
        });
        assert_eq!(calls.get(), 1);
    }
}
