//! VLAN to aggregate-port listing.

use serde::Serialize;
use tabled::Tabled;

use swview_core::{VlanId, fetch_vlan_aggregate_port_map};

use crate::config::Session;
use crate::error::CliError;
use crate::output;

#[derive(Serialize, Tabled)]
struct AggregateView {
    #[tabled(rename = "VLAN")]
    vlan: VlanId,
    #[tabled(rename = "Aggregate")]
    aggregate: String,
}

pub fn handle(session: &Session) -> Result<(), CliError> {
    let map = fetch_vlan_aggregate_port_map(&session.agent)?;

    let mut views: Vec<AggregateView> = map
        .iter()
        .map(|(vlan, aggregate)| AggregateView {
            vlan,
            aggregate: aggregate.to_owned(),
        })
        .collect();
    views.sort_by_key(|v| v.vlan);

    let out = output::render_list(
        session.output,
        &views,
        |v| AggregateView {
            vlan: v.vlan,
            aggregate: v.aggregate.clone(),
        },
        |v| format!("{}\t{}", v.vlan, v.aggregate),
    );
    output::print_output(&out, session.quiet);
    Ok(())
}
