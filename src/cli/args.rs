use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "listrun", version, about = "listrun CLI")]
pub struct CliArgs {
    /// Command script to execute, one command per line
    pub script: PathBuf,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
