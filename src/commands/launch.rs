use crate::cli::Cli;
use crate::services::gate::{GateStatus, run_gate, validator_command};
use crate::services::output::print_one;

const CONFIRMATION: &str = "Config OK. Add your pipeline entrypoint to commands/launch.rs next.";

/// Pre-flight gate: run the validator, stop on any failure, otherwise confirm
/// and fall through to the pipeline hand-off (nothing is wired in yet).
pub fn handle_run(cli: &Cli, validator_override: Option<&str>) -> anyhow::Result<i32> {
    let validator = validator_command(validator_override, &cli.config_root)?;
    match run_gate(validator)? {
        // The validator already explained itself on its own streams.
        GateStatus::Failed(code) => Ok(code),
        GateStatus::Validated => {
            print_one(cli.json, CONFIRMATION, |m| m.to_string())?;
            Ok(0)
        }
    }
}
