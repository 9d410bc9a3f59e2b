use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Handlers report an exit code; mapping it onto the process happens
    // here and nowhere else.
    let code = commands::dispatch(&cli)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
