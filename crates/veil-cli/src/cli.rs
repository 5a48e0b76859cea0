use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "veil")]
#[command(about = "Role-relative record redaction", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render records as seen by a viewer role
    Show {
        /// Viewer role (default from config: User)
        viewer: Option<String>,

        /// Decorator token applied after rendering; repeat to chain, order
        /// matters (falls back to the configured chain)
        #[arg(long = "decorate", value_name = "TOKEN")]
        decorate: Vec<String>,

        /// JSON record file to load instead of the built-in sample set
        #[arg(long)]
        data: Option<PathBuf>,

        /// Emit the rendered lines as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show the visibility level resolved for a viewer/subject role pair
    Explain {
        /// Viewer role
        viewer: String,

        /// Subject role
        subject: String,
    },

    /// List role tags with dedicated policy rules and the roles present in
    /// the dataset
    Roles {
        /// JSON record file to load instead of the built-in sample set
        #[arg(long)]
        data: Option<PathBuf>,
    },
}
