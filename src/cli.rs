use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "vibecheck",
    version,
    about = "VibeCheck — Repository analysis & AI detection dashboard",
    long_about = "Terminal dashboard for repository-quality reports: scores, AI-generation share, per-file issues. Analysis itself runs on the VibeCheck backend; this tool fetches and renders it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project directory holding the cached report (defaults to current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Output in JSON format (for script consumption)
    #[arg(long, global = true)]
    pub json: bool,

    /// Backend API base URL (overrides the configured one)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in to the analysis backend
    Login {
        /// Account email (prompted when omitted)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Drop the stored session
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Request a fresh analysis of a repository
    Analyze {
        /// GitHub repository URL
        repo_url: String,

        /// Analysis window in days
        #[arg(long, default_value_t = 3650)]
        window_days: u32,

        /// Maximum commits to analyze
        #[arg(long, default_value_t = 500)]
        max_commits: u32,

        /// Re-analyze even if a previous analysis exists
        #[arg(short, long)]
        force: bool,
    },

    /// Download the latest stored report for a repository
    Fetch {
        /// Full repository name (owner/repo)
        full_name: String,
    },

    /// Show overall score, grade and category breakdown
    Summary,

    /// List per-file scores, AI share and flags
    Files,

    /// Display the file tree with issue badges
    Tree {
        /// Filter files by a case-insensitive substring
        #[arg(short, long)]
        query: Option<String>,

        /// Expand every folder
        #[arg(long)]
        expand_all: bool,

        /// Expand a folder path (repeatable)
        #[arg(long)]
        open: Vec<String>,

        /// Select a file and show its detail panel
        #[arg(short, long)]
        select: Option<String>,
    },

    /// Show metrics and issues for one file
    Show {
        /// File path as reported by the backend
        path: String,
    },

    /// List issues across the repository
    Issues {
        /// Only show one severity bucket (high, medium, low)
        #[arg(short, long)]
        severity: Option<String>,
    },
}
