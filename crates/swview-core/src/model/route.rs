// ── Route and next-hop types ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Binary address as carried by the agent protocol: 4 bytes for IPv4,
/// 16 for IPv6, plus the egress interface when one is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryAddress {
    pub addr: Vec<u8>,
    #[serde(default)]
    pub if_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MplsActionCode {
    Push,
    Swap,
    Php,
    PopAndLookup,
    Noop,
}

/// Label operation applied to traffic leaving through a next-hop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MplsAction {
    pub action: MplsActionCode,
    /// Replacement label; only meaningful for `SWAP`.
    #[serde(default)]
    pub swap_label: Option<u32>,
    /// Label stack, outermost last; only meaningful for `PUSH`.
    #[serde(default)]
    pub push_labels: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextHop {
    pub address: BinaryAddress,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub mpls_action: Option<MplsAction>,
}

/// A unicast route and its forwarding next-hops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub prefix: String,
    pub next_hops: Vec<NextHop>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_codes_render_upper_snake() {
        assert_eq!(MplsActionCode::Push.to_string(), "PUSH");
        assert_eq!(MplsActionCode::PopAndLookup.to_string(), "POP_AND_LOOKUP");
        assert_eq!("SWAP".parse::<MplsActionCode>().ok(), Some(MplsActionCode::Swap));
    }
}
