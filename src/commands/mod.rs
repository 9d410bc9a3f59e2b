//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `launch.rs` — the `run` gate: validate first, then hand off.
//! - `config.rs` — `validate` and `paths` inspection commands.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Handlers return an exit code; only `main` terminates the process.

pub mod config;
pub mod launch;

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Run { validator } => launch::handle_run(cli, validator.as_deref()),
        Commands::Validate => config::handle_validate(cli),
        Commands::Paths => config::handle_paths(cli),
    }
}
