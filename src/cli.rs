use std::path::PathBuf;

use clap::Parser;

/// Look up Dracula palette colors
#[derive(Debug, Parser)]
#[command(name = "dcol", version, about)]
pub struct Cli {
    /// Resolve QUERY ("palette" or "palette,shade"), print the table and exit
    #[arg(short, long, value_name = "QUERY", conflicts_with = "list")]
    pub print: Option<String>,

    /// List palette names and exit
    #[arg(short, long)]
    pub list: bool,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
