//! Command dispatch: bridges CLI args -> core derivations -> output formatting.

pub mod aggregates;
pub mod config_cmd;
pub mod ports;
pub mod routes;
pub mod vlans;

use crate::cli::Command;
use crate::config::Session;
use crate::error::CliError;

/// Dispatch a snapshot-bound command to the appropriate handler.
pub fn dispatch(cmd: Command, session: &Session) -> Result<(), CliError> {
    match cmd {
        Command::Ports(args) => ports::handle(session, &args),
        Command::Vlans(args) => vlans::handle(session, &args),
        Command::Aggregates => aggregates::handle(session),
        Command::Routes(args) => routes::handle(session, &args),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
