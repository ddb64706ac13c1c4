//! Route listing with resolved next-hops.

use serde::Serialize;
use tabled::Tabled;

use swview_core::{
    AgentClient, Route, SummaryOptions, VlanAggregatePortMap, VlanPortMap,
    fetch_vlan_aggregate_port_map, fetch_vlan_port_map, nexthop_to_string,
};

use crate::cli::RoutesArgs;
use crate::config::Session;
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct RouteView {
    prefix: String,
    next_hops: Vec<String>,
}

#[derive(Tabled)]
struct RouteRow {
    #[tabled(rename = "Prefix")]
    prefix: String,
    #[tabled(rename = "Next hops")]
    next_hops: String,
}

fn route_view(
    route: &Route,
    aggregates: Option<&VlanAggregatePortMap>,
    ports: Option<&VlanPortMap>,
) -> Result<RouteView, CliError> {
    let next_hops: Vec<String> = route
        .next_hops
        .iter()
        .map(|nh| nexthop_to_string(nh, aggregates, ports))
        .collect::<Result<_, _>>()?;
    Ok(RouteView {
        prefix: route.prefix.clone(),
        next_hops,
    })
}

pub fn handle(session: &Session, args: &RoutesArgs) -> Result<(), CliError> {
    let mut routes = session.agent.route_table()?;
    if let Some(prefix) = &args.prefix {
        routes.retain(|r| &r.prefix == prefix);
        if routes.is_empty() {
            return Err(CliError::NotFound {
                resource_type: "route".into(),
                identifier: prefix.clone(),
                list_command: "routes".into(),
            });
        }
    }

    let (aggregates, ports) = if args.raw_interfaces {
        (None, None)
    } else {
        let opts = SummaryOptions {
            palette: session.palette,
            details: true,
        };
        (
            Some(fetch_vlan_aggregate_port_map(&session.agent)?),
            Some(fetch_vlan_port_map(
                &session.agent,
                session.transceiver_client(),
                opts,
            )?),
        )
    };

    let views = routes
        .iter()
        .map(|r| route_view(r, aggregates.as_ref(), ports.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let out = output::render_list(
        session.output,
        &views,
        |v| RouteRow {
            prefix: v.prefix.clone(),
            next_hops: v.next_hops.join("\n"),
        },
        |v| {
            let mut block = v.prefix.clone();
            for nh in &v.next_hops {
                block.push_str("\n  via ");
                block.push_str(nh);
            }
            block
        },
    );
    output::print_output(&out, session.quiet);
    Ok(())
}
