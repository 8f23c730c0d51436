//! CLI arguments

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Get a vulnerability or an exploit by ID.
#[derive(Parser, Debug)]
#[command(name = "variot")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("lookup")
        .required(true)
        .args(["vulnerability_id", "exploit_id"])
))]
pub struct Cli {
    /// URL of the instance
    #[arg(long)]
    pub url: Option<String>,

    /// Your personal API key
    #[arg(long)]
    pub apikey: Option<String>,

    /// Configuration file (YAML); --url and --apikey take precedence
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Return the JSON-LD representation
    #[arg(long)]
    pub jsonld: bool,

    /// ID of the vulnerability
    #[arg(long = "vulnerability_id", visible_alias = "vulnerability-id")]
    pub vulnerability_id: Option<String>,

    /// ID of the exploit
    #[arg(long = "exploit_id", visible_alias = "exploit-id")]
    pub exploit_id: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
