// src/cli/mod.rs
// Command line configuration for the editor.

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "ruleboard")]
#[command(about = "Ruleboard - life event benefit rules editor", long_about = None)]
pub struct Cli {
    /// Base URL of the benefits administration API. Falls back to the
    /// RULEBOARD_API_BASE_URL environment variable.
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Employer whose rules matrix is edited. Falls back to the
    /// RULEBOARD_EMPLOYER_ID environment variable.
    #[arg(long)]
    pub employer_id: Option<String>,

    /// Serve the bundled sample dataset instead of calling the API.
    #[arg(long)]
    pub offline: bool,
}
