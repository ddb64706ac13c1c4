//! Route listing rendered end to end from an agent snapshot.
#![allow(clippy::unwrap_used)]

use swview_core::{
    AgentClient, SnapshotAgent, SnapshotTransceivers, SummaryOptions, TransceiverClient,
    TransceiverInfo, VlanAggregatePortMap, VlanPortMap, fetch_vlan_aggregate_port_map,
    fetch_vlan_port_map, nexthop_to_string,
};

const AGENT_JSON: &str = r#"{
    "ports": [
        {"port_id": 1, "name": "eth1/1/1", "vlans": [10]},
        {"port_id": 2, "name": "eth1/1/2", "vlans": [10]},
        {"port_id": 3, "name": "eth1/2/1", "vlans": [20]},
        {"port_id": 4, "name": "eth1/3/1", "vlans": [30]}
    ],
    "port_status": {
        "1": {"enabled": true, "up": true, "speed_mbps": 100000,
              "transceiver_idx": {"transceiver_id": 0, "channels": [0]}},
        "2": {"enabled": true, "up": true, "speed_mbps": 25000,
              "transceiver_idx": {"transceiver_id": 0, "channels": [1]}},
        "3": {"enabled": true, "up": false, "speed_mbps": 100000,
              "transceiver_idx": {"transceiver_id": 1, "channels": [0]}},
        "4": {"enabled": true, "up": true, "speed_mbps": 40000,
              "transceiver_idx": {"transceiver_id": 2, "channels": [0]}}
    },
    "aggregate_ports": [
        {"name": "po7", "member_ports": [{"member_port_id": 4, "weight": 1}]}
    ],
    "routes": [
        {"prefix": "0.0.0.0/0", "next_hops": [
            {"address": "10.0.0.1", "if_name": "fboss10", "weight": 0},
            {"address": "10.0.0.2", "if_name": "fboss30", "weight": 3}
        ]},
        {"prefix": "2401:db00::/32", "next_hops": [
            {"address": "fe80::1", "if_name": "fboss20",
             "mpls_action": {"action": "PUSH", "push_labels": [100, 200]}}
        ]},
        {"prefix": "192.168.0.0/16", "next_hops": [
            {"address": "192.168.1.1"}
        ]}
    ]
}"#;

fn transceivers() -> SnapshotTransceivers {
    SnapshotTransceivers::from_records((0..3).map(|port| TransceiverInfo {
        port,
        present: true,
        profile_id: None,
    }))
}

fn listing(
    agent: &SnapshotAgent,
    aggregates: Option<&VlanAggregatePortMap>,
    ports: Option<&VlanPortMap>,
) -> String {
    let mut lines = Vec::new();
    for route in agent.route_table().unwrap() {
        lines.push(route.prefix.clone());
        for nh in &route.next_hops {
            lines.push(format!("  via {}", nexthop_to_string(nh, aggregates, ports).unwrap()));
        }
    }
    lines.join("\n")
}

#[test]
fn route_listing_resolves_ports_and_aggregates() {
    let agent = SnapshotAgent::from_json(AGENT_JSON).unwrap();
    let qsfp = transceivers();
    let ports = fetch_vlan_port_map(
        &agent,
        Some(&qsfp as &dyn TransceiverClient),
        SummaryOptions::default(),
    )
    .unwrap();
    let aggregates = fetch_vlan_aggregate_port_map(&agent).unwrap();

    insta::assert_snapshot!(listing(&agent, Some(&aggregates), Some(&ports)), @r"
0.0.0.0/0
  via 10.0.0.1 dev eth1/1/1 (100G), eth1/1/2 (25G)
  via 10.0.0.2 dev po7 weight 3
2401:db00::/32
  via fe80::1 dev eth1/2/1 () MPLS -> PUSH : {100,200}
192.168.0.0/16
  via 192.168.1.1
");
}

#[test]
fn route_listing_with_raw_interfaces() {
    let agent = SnapshotAgent::from_json(AGENT_JSON).unwrap();

    insta::assert_snapshot!(listing(&agent, None, None), @r"
0.0.0.0/0
  via 10.0.0.1 dev fboss10
  via 10.0.0.2 dev fboss30 weight 3
2401:db00::/32
  via fe80::1 dev fboss20 MPLS -> PUSH : {100,200}
192.168.0.0/16
  via 192.168.1.1
");
}
