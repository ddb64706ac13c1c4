//! Port status listing.

use serde::Serialize;
use tabled::Tabled;
use tracing::warn;

use swview_core::{
    AgentClient, PortId, PortInfo, PortStatusStrings, Presence, TransceiverId, classify, sort_key,
    transceiver_info_map,
};

use crate::cli::PortsArgs;
use crate::config::Session;
use crate::error::CliError;
use crate::output;

// ── View ────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct PortView {
    port_id: PortId,
    name: String,
    #[serde(flatten)]
    attrs: PortStatusStrings,
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PortRow {
    #[tabled(rename = "ID")]
    id: PortId,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Admin")]
    admin: &'static str,
    #[tabled(rename = "Link")]
    link: String,
    #[tabled(rename = "Present")]
    present: &'static str,
    #[tabled(rename = "Speed")]
    speed: String,
    #[tabled(rename = "Profile")]
    profile: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(session: &Session, args: &PortsArgs) -> Result<(), CliError> {
    let agent = &session.agent;

    let mut ports: Vec<PortInfo> = if args.ports.is_empty() {
        agent.all_port_info()?.into_values().collect()
    } else {
        args.ports
            .iter()
            .map(|&id| agent.port_info(id))
            .collect::<Result<_, _>>()?
    };
    ports.sort_by_key(sort_key);

    let statuses = agent.port_status()?;
    let qsfp_ids: Vec<TransceiverId> = ports
        .iter()
        .filter_map(|p| statuses.get(&p.port_id)?.transceiver_id())
        .collect();
    let qsfp = transceiver_info_map(
        session.transceiver_client(),
        Some(qsfp_ids.as_slice()),
        session.continue_on_error,
    )?;

    let views: Vec<PortView> = ports
        .into_iter()
        .filter_map(|port| {
            let Some(status) = statuses.get(&port.port_id) else {
                warn!(port = %port.name, port_id = port.port_id, "no status reported, skipping");
                return None;
            };
            let presence =
                Presence::from_transceiver(status.transceiver_id().and_then(|id| qsfp.get(&id)));
            Some(PortView {
                port_id: port.port_id,
                name: port.name,
                attrs: classify(status, presence),
            })
        })
        .collect();

    let palette = session.palette;
    let out = output::render_list(
        session.output,
        &views,
        |v| PortRow {
            id: v.port_id,
            name: v.name.clone(),
            admin: v.attrs.admin_status,
            link: v.attrs.colored_link_status(palette),
            present: v.attrs.present,
            speed: v.attrs.speed.clone(),
            profile: v.attrs.profile_id.clone(),
        },
        |v| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                v.port_id,
                v.name,
                v.attrs.admin_status,
                v.attrs.colored_link_status(palette),
                v.attrs.speed
            )
        },
    );
    output::print_output(&out, session.quiet);
    Ok(())
}
