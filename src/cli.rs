use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_ROOT: &str = "config";

#[derive(Parser, Debug)]
#[command(name = "cardpipe", version, about = "Card listing pipeline launcher")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_CONFIG_ROOT,
        help = "Configuration root directory"
    )]
    pub config_root: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Run {
        #[arg(
            long,
            help = "Validator command to run instead of the bundled one (program plus args, whitespace-separated)"
        )]
        validator: Option<String>,
    },
    Validate,
    Paths,
}
