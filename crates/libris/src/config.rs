//! Effective configuration: config file + environment + global flags.

use libris_config::Config;
use libris_core::LibrisConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Load the config file and apply global flag overrides.
pub fn effective_config(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = libris_config::load_config()?;
    apply_overrides(&mut cfg, global);
    Ok(cfg)
}

/// Build the runtime `LibrisConfig` the controller is wired from.
pub fn build_libris_config(global: &GlobalOpts) -> Result<LibrisConfig, CliError> {
    let cfg = effective_config(global)?;
    Ok(libris_config::to_libris_config(&cfg)?)
}

pub(crate) fn apply_overrides(cfg: &mut Config, global: &GlobalOpts) {
    if let Some(ref server) = global.server {
        cfg.server.clone_from(server);
    }
    if let Some(ref user) = global.user {
        cfg.user.clone_from(user);
    }
    if let Some(timeout) = global.timeout {
        cfg.timeout = timeout;
    }
    if global.insecure {
        cfg.insecure = true;
    }
}
