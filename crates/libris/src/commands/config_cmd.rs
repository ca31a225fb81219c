//! Config command handlers. These never talk to the books service.

use libris_config::Config;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{apply_overrides, effective_config};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&libris_config::config_path().display().to_string(), false);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = effective_config(global)?;
            let out = output::render_single(&global.output, &cfg, describe)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Init { force } => {
            let path = libris_config::config_path();
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }

            let mut cfg = Config::default();
            apply_overrides(&mut cfg, global);
            // Refuse to write a file the other commands could not use.
            libris_config::to_libris_config(&cfg)?;

            let written = libris_config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!("Wrote {}", written.display());
            }
            Ok(())
        }
    }
}

fn describe(cfg: &Config) -> String {
    format!(
        "server   = {}\nuser     = {}\ntimeout  = {}s\ninsecure = {}",
        cfg.server, cfg.user, cfg.timeout, cfg.insecure
    )
}
