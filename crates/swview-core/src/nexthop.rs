//! One-line rendering of route next-hops.
//!
//! `10.0.0.1 dev eth1/1/1 (100G) weight 2 MPLS -> PUSH : {100,200}`

use crate::address::address_to_text;
use crate::aggregate::VlanAggregatePortMap;
use crate::error::CoreError;
use crate::model::{MplsAction, MplsActionCode, NextHop, VlanId};
use crate::vlan::VlanPortMap;

/// Prefix of the agent's per-VLAN L3 interface names (`fboss<vlan>`).
pub const VLAN_INTERFACE_PREFIX: &str = "fboss";

/// Extract the VLAN id from a VLAN interface name such as `fboss42`.
pub fn interface_vlan(if_name: &str) -> Result<VlanId, CoreError> {
    if_name
        .strip_prefix(VLAN_INTERFACE_PREFIX)
        .unwrap_or(if_name)
        .parse()
        .map_err(|_| CoreError::InvalidInterfaceName {
            name: if_name.to_owned(),
        })
}

/// ` MPLS -> <CODE> <labels>`, or empty when there is no label action.
pub fn mpls_annotation(action: Option<&MplsAction>) -> String {
    let Some(action) = action else {
        return String::new();
    };
    let labels = match (action.action, action.swap_label) {
        (MplsActionCode::Swap, Some(label)) => format!(": {label}"),
        (MplsActionCode::Swap, None) => ": -".to_owned(),
        (MplsActionCode::Push, _) => {
            let stack: Vec<String> = action.push_labels.iter().map(u32::to_string).collect();
            format!(": {{{}}}", stack.join(","))
        }
        _ => String::new(),
    };
    format!(" MPLS -> {} {labels}", action.action)
}

/// Human-readable egress for a next-hop's interface.
///
/// With a VLAN-port map, `fboss<vlan>` resolves to the aggregate port that
/// owns the VLAN, or else to every port summary in the VLAN. Without one
/// (or with an empty one) the raw interface name is used.
fn egress(
    if_name: &str,
    aggregates: Option<&VlanAggregatePortMap>,
    ports: Option<&VlanPortMap>,
) -> Result<String, CoreError> {
    let Some(ports) = ports.filter(|p| !p.is_empty()) else {
        return Ok(if_name.to_owned());
    };
    let vlan = interface_vlan(if_name)?;

    // an aggregate reads better than its member list
    if let Some(name) = aggregates.and_then(|agg| agg.get(vlan)) {
        return Ok(name.to_owned());
    }
    Ok(ports.summaries(vlan).collect::<Vec<_>>().join(", "))
}

/// Render a next-hop as `<addr>[ dev <egress>][ weight <n>][ MPLS -> ...]`.
pub fn nexthop_to_string(
    next_hop: &NextHop,
    aggregates: Option<&VlanAggregatePortMap>,
    ports: Option<&VlanPortMap>,
) -> Result<String, CoreError> {
    let address = address_to_text(&next_hop.address.addr)?;

    let via = match next_hop.address.if_name.as_deref() {
        Some(if_name) => egress(if_name, aggregates, ports)?,
        None => String::new(),
    };
    let via = via.trim();
    let via = if via.is_empty() {
        String::new()
    } else {
        format!(" dev {via}")
    };

    let weight = match next_hop.weight {
        Some(w) if w != 0 => format!(" weight {w}"),
        _ => String::new(),
    };

    let mpls = mpls_annotation(next_hop.mpls_action.as_ref());
    Ok(format!("{address}{via}{weight}{mpls}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::address::text_to_address;

    fn next_hop(addr: &str, if_name: Option<&str>) -> NextHop {
        let mut address = text_to_address(addr).unwrap();
        address.if_name = if_name.map(str::to_owned);
        NextHop {
            address,
            weight: None,
            mpls_action: None,
        }
    }

    fn port_map() -> VlanPortMap {
        let mut map = VlanPortMap::new();
        map.insert(42, "eth1/1", "eth1/1/1 (100G)".into());
        map
    }

    #[test]
    fn mpls_push_renders_label_stack() {
        let action = MplsAction {
            action: MplsActionCode::Push,
            swap_label: None,
            push_labels: vec![100, 200],
        };
        assert_eq!(mpls_annotation(Some(&action)), " MPLS -> PUSH : {100,200}");
    }

    #[test]
    fn mpls_swap_renders_label() {
        let action = MplsAction {
            action: MplsActionCode::Swap,
            swap_label: Some(300),
            push_labels: vec![],
        };
        assert_eq!(mpls_annotation(Some(&action)), " MPLS -> SWAP : 300");
    }

    #[test]
    fn mpls_swap_without_label_shows_placeholder() {
        let action = MplsAction {
            action: MplsActionCode::Swap,
            swap_label: None,
            push_labels: vec![],
        };
        assert_eq!(mpls_annotation(Some(&action)), " MPLS -> SWAP : -");
    }

    #[test]
    fn mpls_other_codes_carry_no_labels() {
        let action = MplsAction {
            action: MplsActionCode::PopAndLookup,
            swap_label: Some(1),
            push_labels: vec![2],
        };
        assert_eq!(mpls_annotation(Some(&action)), " MPLS -> POP_AND_LOOKUP ");
        assert_eq!(mpls_annotation(None), "");
    }

    #[test]
    fn vlan_interface_resolves_to_port_summaries() {
        let nh = next_hop("10.0.0.1", Some("fboss42"));
        let out = nexthop_to_string(&nh, Some(&VlanAggregatePortMap::new()), Some(&port_map()))
            .unwrap();
        assert_eq!(out, "10.0.0.1 dev eth1/1/1 (100G)");
    }

    #[test]
    fn summaries_join_across_root_ports() {
        let mut ports = port_map();
        ports.insert(42, "eth1/1", "eth1/1/2 ()".into());
        ports.insert(42, "eth1/2", "eth1/2/1 (40G)".into());
        let out = nexthop_to_string(&next_hop("10.0.0.1", Some("fboss42")), None, Some(&ports))
            .unwrap();
        assert_eq!(out, "10.0.0.1 dev eth1/1/1 (100G), eth1/1/2 (), eth1/2/1 (40G)");
    }

    #[test]
    fn aggregate_name_wins_over_members() {
        let mut aggregates = VlanAggregatePortMap::new();
        aggregates.insert(42, "po1");
        let out = nexthop_to_string(
            &next_hop("2401:db00::1", Some("fboss42")),
            Some(&aggregates),
            Some(&port_map()),
        )
        .unwrap();
        assert_eq!(out, "2401:db00::1 dev po1");
    }

    #[test]
    fn raw_interface_without_port_map() {
        let nh = next_hop("10.0.0.1", Some("fboss42"));
        assert_eq!(nexthop_to_string(&nh, None, None).unwrap(), "10.0.0.1 dev fboss42");
        assert_eq!(
            nexthop_to_string(&nh, None, Some(&VlanPortMap::new())).unwrap(),
            "10.0.0.1 dev fboss42"
        );
    }

    #[test]
    fn unknown_vlan_has_no_egress() {
        let nh = next_hop("10.0.0.1", Some("fboss99"));
        assert_eq!(nexthop_to_string(&nh, None, Some(&port_map())).unwrap(), "10.0.0.1");
    }

    #[test]
    fn weight_and_mpls_segments() {
        let mut nh = next_hop("10.0.0.1", None);
        nh.weight = Some(3);
        nh.mpls_action = Some(MplsAction {
            action: MplsActionCode::Swap,
            swap_label: Some(300),
            push_labels: vec![],
        });
        assert_eq!(
            nexthop_to_string(&nh, None, None).unwrap(),
            "10.0.0.1 weight 3 MPLS -> SWAP : 300"
        );

        nh.weight = Some(0);
        nh.mpls_action = None;
        assert_eq!(nexthop_to_string(&nh, None, None).unwrap(), "10.0.0.1");
    }

    #[test]
    fn non_numeric_vlan_interface_is_an_error() {
        let nh = next_hop("10.0.0.1", Some("mgmt0"));
        let err = nexthop_to_string(&nh, None, Some(&port_map())).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInterfaceName { name } if name == "mgmt0"));
    }

    #[test]
    fn bad_address_is_surfaced() {
        let mut nh = next_hop("10.0.0.1", None);
        nh.address.addr = vec![1, 2, 3];
        assert!(matches!(
            nexthop_to_string(&nh, None, None),
            Err(CoreError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn interface_vlan_parsing() {
        assert_eq!(interface_vlan("fboss4094").unwrap(), 4094);
        assert_eq!(interface_vlan("42").unwrap(), 42);
        assert!(interface_vlan("fboss").is_err());
    }
}
