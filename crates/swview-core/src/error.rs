// ── Core error types ──
//
// Everything the derivation core can fail with. Collaborator failures
// (snapshot loading, transceiver service) are folded into domain
// variants so consumers never match on serde or I/O errors directly.

use thiserror::Error;

use crate::model::PortId;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input errors ─────────────────────────────────────────────────
    #[error("Invalid address: {input}")]
    InvalidAddress { input: String },

    #[error("Interface name '{name}' does not carry a VLAN id")]
    InvalidInterfaceName { name: String },

    // ── Contract violations ──────────────────────────────────────────
    #[error("Port {port} reports {count} VLANs, expected exactly one")]
    MultiVlanInvariantViolation { port: String, count: usize },

    #[error("Root port for {name} could not be determined")]
    UnresolvableRootPort { name: String },

    #[error("No status reported for port {port_id}")]
    MissingPortStatus { port_id: PortId },

    #[error("Port {port_id} not found")]
    PortNotFound { port_id: PortId },

    // ── Collaborator errors ──────────────────────────────────────────
    #[error("Transceiver service unavailable: {reason}")]
    UnavailableTransceiverService { reason: String },

    #[error("Failed to load snapshot {path}: {reason}")]
    Snapshot { path: String, reason: String },
}

impl CoreError {
    /// Whether retrying the fetch that produced this error could succeed.
    ///
    /// Only collaborator failures qualify; contract violations in the
    /// fetched data repeat on every attempt.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Snapshot { .. } | Self::UnavailableTransceiverService { .. }
        )
    }
}
