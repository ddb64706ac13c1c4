//! Per-port display attributes derived from raw status facts.

use serde::Serialize;

use crate::model::{PortStatus, TransceiverInfo};
use crate::palette::{Palette, Tone};

/// Transceiver presence as far as the transceiver service knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Presence {
    Present,
    Absent,
    /// No record for the module (service unavailable or id unknown).
    Unknown,
}

impl Presence {
    pub fn from_transceiver(info: Option<&TransceiverInfo>) -> Self {
        match info {
            Some(info) if info.present => Self::Present,
            Some(_) => Self::Absent,
            None => Self::Unknown,
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<bool> for Presence {
    fn from(present: bool) -> Self {
        if present { Self::Present } else { Self::Absent }
    }
}

/// Display attributes for one port-status row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortStatusStrings {
    pub admin_status: &'static str,
    pub link_status: &'static str,
    #[serde(skip)]
    pub link_tone: Tone,
    pub present: &'static str,
    pub speed: String,
    pub profile_id: String,
}

impl PortStatusStrings {
    pub fn colored_link_status(&self, palette: Palette) -> String {
        palette.paint(self.link_status, self.link_tone)
    }
}

/// Classify a port's status for display.
///
/// A down link is only flagged as an alert when the port is enabled and
/// has a module known to be inserted; otherwise a down link is expected.
pub fn classify(status: &PortStatus, presence: Presence) -> PortStatusStrings {
    let speed = if status.enabled && status.speed_mbps > 0 {
        format!("{}G", status.speed_gbps())
    } else {
        String::new()
    };

    let (link_status, link_tone) = if status.up {
        ("Up", Tone::Success)
    } else if status.enabled && presence.is_present() {
        ("Down", Tone::Alert)
    } else {
        ("Down", Tone::Plain)
    };

    PortStatusStrings {
        admin_status: if status.enabled { "Enabled" } else { "Disabled" },
        link_status,
        link_tone,
        present: presence.label(),
        speed,
        profile_id: status
            .profile_id
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or("-")
            .to_owned(),
    }
}
