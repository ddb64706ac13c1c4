//! Session resolution: config file, profile and flag overrides.
//!
//! Flags win over the active profile, which wins over `[defaults]`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::ValueEnum;
use tracing::debug;

use swview_config::{Config, Sources};
use swview_core::{
    CoreError, Palette, RetryPolicy, SnapshotAgent, SnapshotTransceivers, TransceiverClient,
    TransceiverId, TransceiverInfo, with_retries,
};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

// ── Config loading ───────────────────────────────────────────────────

/// Config file to read: `--config` if given, else the platform default.
pub fn config_path(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(swview_config::config_path)
}

pub fn load_config(global: &GlobalOpts) -> Result<Config, CliError> {
    Ok(swview_config::load_config_from(&config_path(global))?)
}

/// Resolve snapshot sources from flags, falling back to the profile.
pub fn resolve_sources(global: &GlobalOpts, cfg: &Config) -> Result<Sources, CliError> {
    let profile_name = cfg.active_profile_name(global.profile.as_deref());

    // an explicitly requested profile must exist
    let mut sources = if global.profile.is_some() || cfg.profiles.contains_key(&profile_name) {
        cfg.sources(&profile_name)?
    } else if let Some(agent) = &global.agent_snapshot {
        Sources {
            agent_snapshot: agent.clone(),
            transceiver_snapshot: None,
            retries: cfg.defaults.retries,
        }
    } else {
        return Err(CliError::NoSource {
            path: config_path(global).display().to_string(),
        });
    };

    if let Some(agent) = &global.agent_snapshot {
        sources.agent_snapshot.clone_from(agent);
    }
    if let Some(qsfp) = &global.transceiver_snapshot {
        sources.transceiver_snapshot = Some(qsfp.clone());
    }
    if let Some(retries) = global.retries {
        sources.retries = retries;
    }

    debug!(profile = %profile_name, ?sources, "resolved sources");
    Ok(sources)
}

fn parse_setting<T: ValueEnum>(field: &str, value: &str) -> Result<T, CliError> {
    T::from_str(value, true).map_err(|reason| CliError::Validation {
        field: format!("defaults.{field}"),
        reason,
    })
}

// ── Transceiver file ─────────────────────────────────────────────────

/// Transceiver service backed by a snapshot file, read on each request.
///
/// An unreadable file is a service failure, tolerated or propagated per
/// `--continue-on-error`.
#[derive(Debug, Clone)]
pub struct TransceiverFile {
    path: PathBuf,
    retry: RetryPolicy,
}

impl TransceiverFile {
    pub fn new(path: PathBuf, retry: RetryPolicy) -> Self {
        Self { path, retry }
    }
}

impl TransceiverClient for TransceiverFile {
    fn transceiver_info(
        &self,
        ids: Option<&[TransceiverId]>,
    ) -> Result<BTreeMap<TransceiverId, TransceiverInfo>, CoreError> {
        with_retries(self.retry, || SnapshotTransceivers::load(&self.path))?.transceiver_info(ids)
    }
}

// ── Session ──────────────────────────────────────────────────────────

/// Everything a data command needs: loaded agent state, the transceiver
/// source and the resolved display settings.
pub struct Session {
    pub agent: SnapshotAgent,
    pub transceivers: Option<TransceiverFile>,
    pub continue_on_error: bool,
    pub output: OutputFormat,
    pub palette: Palette,
    pub quiet: bool,
}

impl Session {
    pub fn open(global: &GlobalOpts) -> Result<Self, CliError> {
        let cfg = load_config(global)?;
        let sources = resolve_sources(global, &cfg)?;
        let retry = RetryPolicy::with_attempts(sources.retries);

        let output = match global.output {
            Some(format) => format,
            None => parse_setting("output", &cfg.defaults.output)?,
        };
        let color: ColorMode = match global.color {
            Some(mode) => mode,
            None => parse_setting("color", &cfg.defaults.color)?,
        };

        let agent = with_retries(retry, || SnapshotAgent::load(&sources.agent_snapshot))?;

        Ok(Self {
            agent,
            transceivers: sources
                .transceiver_snapshot
                .map(|path| TransceiverFile::new(path, retry)),
            continue_on_error: global.continue_on_error || cfg.defaults.continue_on_error,
            output,
            palette: output::palette_for(output, color),
            quiet: global.quiet,
        })
    }

    pub fn transceiver_client(&self) -> Option<&dyn TransceiverClient> {
        self.transceivers
            .as_ref()
            .map(|file| file as &dyn TransceiverClient)
    }
}
