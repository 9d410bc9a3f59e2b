use crate::cli::Cli;
use crate::domain::models::JsonOut;
use crate::services::paths::load_runtime_paths;
use crate::services::validation::validate_config;

pub fn handle_validate(cli: &Cli) -> anyhow::Result<i32> {
    let report = validate_config(&cli.config_root);
    let code = if report.is_ok() { 0 } else { 1 };

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: report.is_ok(),
                data: &report
            })?
        );
        return Ok(code);
    }

    if report.is_ok() {
        println!("\nCONFIG VALIDATION PASS\n");
    } else {
        println!("\nCONFIG VALIDATION FAILED\n");
        for f in &report.failures {
            println!(" - {f}");
        }
        println!("\nABORTING RUN.\n");
    }
    Ok(code)
}

pub fn handle_paths(cli: &Cli) -> anyhow::Result<i32> {
    let paths = load_runtime_paths(&cli.config_root)?;
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: paths.report()
            })?
        );
    } else {
        println!("Runtime root: {}", paths.runtime_root.display());
        println!("Incoming: {}", paths.incoming_raw.display());
        println!("Logs: {}", paths.logs.display());
    }
    Ok(0)
}
