//! VLAN membership listing.

use serde::Serialize;
use tabled::Tabled;

use swview_core::{SummaryOptions, VlanId, fetch_vlan_port_map};

use crate::cli::VlansArgs;
use crate::config::Session;
use crate::error::CliError;
use crate::output;

/// One root port's summaries within a VLAN.
#[derive(Serialize)]
struct VlanRootView {
    vlan: VlanId,
    root_port: String,
    ports: Vec<String>,
}

#[derive(Tabled)]
struct VlanRow {
    #[tabled(rename = "VLAN")]
    vlan: VlanId,
    #[tabled(rename = "Root port")]
    root_port: String,
    #[tabled(rename = "Ports")]
    ports: String,
}

pub fn handle(session: &Session, args: &VlansArgs) -> Result<(), CliError> {
    let opts = SummaryOptions {
        palette: session.palette,
        details: !args.no_details,
    };
    let map = fetch_vlan_port_map(&session.agent, session.transceiver_client(), opts)?;

    let mut views: Vec<VlanRootView> = map
        .iter()
        .flat_map(|(vlan, buckets)| {
            buckets.iter().map(move |(root, summaries)| VlanRootView {
                vlan,
                root_port: root.clone(),
                ports: summaries.iter().map(|s| s.trim_end().to_owned()).collect(),
            })
        })
        .collect();
    // stable: root ports keep processing order within a VLAN
    views.sort_by_key(|v| v.vlan);

    let out = output::render_list(
        session.output,
        &views,
        |v| VlanRow {
            vlan: v.vlan,
            root_port: v.root_port.clone(),
            ports: v.ports.join(", "),
        },
        |v| format!("{}\t{}\t{}", v.vlan, v.root_port, v.ports.join(" ")),
    );
    output::print_output(&out, session.quiet);
    Ok(())
}
