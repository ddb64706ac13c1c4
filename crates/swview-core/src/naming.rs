//! Port-name parsing: display ordering and root-port derivation.
//!
//! Front-panel ports follow `<3 lowercase letters><slot>/<port>/<subport>`,
//! e.g. `eth1/12/3`. Sub-ports of one physical port share everything up
//! to the last `/`, which is what [`root_port`] strips.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::model::PortInfo;

static PORT_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]{3})(\d+)/(\d+)/(\d)").expect("port name pattern is valid")
});

static SUBPORT_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)/\d+$").expect("sub-port pattern is valid"));

/// Sort tuple for a port: (prefix, slot, port, sub-port).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PortSortKey {
    pub prefix: String,
    pub slot: u32,
    pub port: u32,
    pub subport: u32,
}

impl PortSortKey {
    pub fn new(prefix: impl Into<String>, slot: u32, port: u32, subport: u32) -> Self {
        Self {
            prefix: prefix.into(),
            slot,
            port,
            subport,
        }
    }
}

/// Parse a structured port name. Names that don't follow the convention
/// get the all-zero key so they sort ahead of everything else.
pub fn parse_port_name(name: &str) -> PortSortKey {
    let Some(caps) = PORT_NAME_RE.captures(name) else {
        return PortSortKey::default();
    };
    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    match (num(2), num(3), num(4)) {
        (Some(slot), Some(port), Some(subport)) => PortSortKey::new(&caps[1], slot, port, subport),
        // digit runs too long for u32
        _ => PortSortKey::default(),
    }
}

/// Sort key for a port record; unnamed ports order by id.
pub fn sort_key(port: &PortInfo) -> PortSortKey {
    if port.name.is_empty() {
        return PortSortKey::new("", port.port_id, 0, 0);
    }
    parse_port_name(&port.name)
}

/// Strip a trailing `/<digits>` to find the parent physical port.
pub fn root_port(name: &str) -> Result<&str, CoreError> {
    SUBPORT_SUFFIX_RE
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| CoreError::UnresolvableRootPort {
            name: name.to_owned(),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn port(port_id: u32, name: &str) -> PortInfo {
        PortInfo {
            port_id,
            name: name.into(),
            vlans: vec![],
        }
    }

    #[test]
    fn parses_structured_names() {
        assert_eq!(parse_port_name("eth1/12/3"), PortSortKey::new("eth", 1, 12, 3));
        assert_eq!(parse_port_name("fab402/9/1"), PortSortKey::new("fab", 402, 9, 1));
    }

    #[test]
    fn malformed_names_sort_first() {
        assert_eq!(parse_port_name("Ethernet0"), PortSortKey::default());
        assert_eq!(parse_port_name("ETH1/1/1"), PortSortKey::default());
        assert_eq!(parse_port_name(""), PortSortKey::default());
        assert!(parse_port_name("garbage") < parse_port_name("eth1/1/1"));
    }

    #[test]
    fn unnamed_ports_order_by_id() {
        assert_eq!(sort_key(&port(42, "")), PortSortKey::new("", 42, 0, 0));
        assert_eq!(sort_key(&port(42, "eth2/1/1")), PortSortKey::new("eth", 2, 1, 1));
    }

    #[test]
    fn numeric_ordering_not_lexical() {
        let mut ports = vec![port(1, "eth1/10/1"), port(2, "eth1/2/1"), port(3, "eth1/2/0")];
        ports.sort_by_key(sort_key);
        let names: Vec<_> = ports.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["eth1/2/0", "eth1/2/1", "eth1/10/1"]);
    }

    #[test]
    fn root_port_strips_last_component() {
        assert_eq!(root_port("eth1/12/3").unwrap(), "eth1/12");
        assert_eq!(root_port("fab1/2/10").unwrap(), "fab1/2");
    }

    #[test]
    fn root_port_requires_numeric_suffix() {
        for name in ["eth0", "eth1/1/x", "eth1/1/", ""] {
            assert!(
                matches!(root_port(name), Err(CoreError::UnresolvableRootPort { .. })),
                "{name} should not resolve"
            );
        }
    }
}
