//! VLAN → aggregate-port name.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::CoreError;
use crate::model::{AggregatePort, PortId, VlanId};

/// Which aggregate port owns each VLAN.
///
/// Later aggregates overwrite earlier ones for the same VLAN; the agent
/// is trusted not to put two aggregates in one VLAN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VlanAggregatePortMap(IndexMap<VlanId, String>);

impl VlanAggregatePortMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, vlan: VlanId, aggregate: impl Into<String>) {
        self.0.insert(vlan, aggregate.into());
    }

    pub fn get(&self, vlan: VlanId) -> Option<&str> {
        self.0.get(&vlan).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VlanId, &str)> {
        self.0.iter().map(|(vlan, name)| (*vlan, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Map every member port's VLAN to its aggregate.
///
/// `member_vlans` looks up one port's VLAN list; each member must be in
/// exactly one VLAN.
pub fn build_vlan_aggregate_port_map<F>(
    aggregates: &[AggregatePort],
    mut member_vlans: F,
) -> Result<VlanAggregatePortMap, CoreError>
where
    F: FnMut(PortId) -> Result<Vec<VlanId>, CoreError>,
{
    let mut map = VlanAggregatePortMap::new();
    for aggregate in aggregates {
        for member in &aggregate.member_ports {
            let vlans = member_vlans(member.member_port_id)?;
            let [vlan] = vlans.as_slice() else {
                return Err(CoreError::MultiVlanInvariantViolation {
                    port: member.member_port_id.to_string(),
                    count: vlans.len(),
                });
            };
            map.insert(*vlan, aggregate.name.as_str());
        }
    }
    Ok(map)
}
