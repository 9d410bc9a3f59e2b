use anyhow::Context;
use std::path::Path;
use std::process::Command;

/// Terminal states of the pre-flight gate.
#[derive(Debug, PartialEq, Eq)]
pub enum GateStatus {
    Validated,
    Failed(i32),
}

/// Build the validator invocation. An explicit override wins; otherwise the
/// bundled validator (this executable's `validate` subcommand) runs against
/// `config_root`. Override values are split on whitespace into program + args.
pub fn validator_command(
    override_cmd: Option<&str>,
    config_root: &Path,
) -> anyhow::Result<Command> {
    if let Some(raw) = override_cmd {
        let mut parts = raw.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| anyhow::anyhow!("validator command is empty"))?;
        let mut cmd = Command::new(program);
        cmd.args(parts);
        return Ok(cmd);
    }

    let exe = std::env::current_exe().context("resolve current executable")?;
    let mut cmd = Command::new(exe);
    cmd.arg("validate").arg("--config-root").arg(config_root);
    Ok(cmd)
}

/// Run the validator and wait for it to terminate. The child inherits stdio,
/// so whatever the validator prints reaches the terminal unfiltered. Any
/// non-zero exit is reported as-is; no failure categories, no retries.
pub fn run_gate(mut validator: Command) -> anyhow::Result<GateStatus> {
    let status = validator
        .status()
        .with_context(|| format!("launch validator {:?}", validator.get_program()))?;

    if status.success() {
        return Ok(GateStatus::Validated);
    }
    match status.code() {
        Some(code) => Ok(GateStatus::Failed(code)),
        // Killed by a signal: there is no validator verdict to propagate.
        None => anyhow::bail!("validator terminated without an exit code"),
    }
}
