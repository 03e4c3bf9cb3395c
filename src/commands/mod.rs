use anyhow::{bail, Result};
use colored::*;
use serde_json::json;
use std::path::Path;
use std::time::Instant;

use crate::api::ApiClient;
use crate::auth::{AuthStore, Session};
use crate::cli::Commands;
use crate::config::Config;
use crate::report::store::ReportStore;
use crate::report::{classify, AnalysisReport, FileAnalysis, Severity};
use crate::tree::{file_count, NodeKind, TreeNode, TreeOptions};
use crate::view::{ai_cell, grade, issue_badge, score_cell, severity_label, Explorer};

mod analyze;
mod fetch;
mod files;
mod issues;
mod login;
mod logout;
mod show;
mod summary;
mod tree;
mod whoami;

pub fn run(command: Commands, root: &Path, json_mode: bool, api_url: Option<&str>) -> Result<()> {
    match command {
        Commands::Login { email } => login::cmd_login(api_url, email.as_deref(), json_mode)?,
        Commands::Logout => logout::cmd_logout(json_mode)?,
        Commands::Whoami => whoami::cmd_whoami(json_mode)?,
        Commands::Analyze {
            repo_url,
            window_days,
            max_commits,
            force,
        } => analyze::cmd_analyze(
            root,
            api_url,
            &repo_url,
            window_days,
            max_commits,
            force,
            json_mode,
        )?,
        Commands::Fetch { full_name } => fetch::cmd_fetch(root, api_url, &full_name, json_mode)?,
        Commands::Summary => summary::cmd_summary(root, json_mode)?,
        Commands::Files => files::cmd_files(root, json_mode)?,
        Commands::Tree {
            query,
            expand_all,
            open,
            select,
        } => tree::cmd_tree(
            root,
            query.as_deref(),
            expand_all,
            &open,
            select.as_deref(),
            json_mode,
        )?,
        Commands::Show { path } => show::cmd_show(root, &path, json_mode)?,
        Commands::Issues { severity } => {
            issues::cmd_issues(root, severity.as_deref(), json_mode)?
        }
    }

    Ok(())
}

fn ensure_report(root: &Path) -> Result<AnalysisReport> {
    if !ReportStore::exists(root) {
        bail!(
            "No analysis report cached in this project.\nRun {} first.",
            "vibecheck analyze <repo-url>".cyan()
        );
    }
    ReportStore::open(root)?.load()
}

fn effective_api_url(api_url: Option<&str>) -> Result<String> {
    match api_url {
        Some(url) => Ok(url.to_string()),
        None => Ok(Config::load()?.api_url),
    }
}

fn authed_client(api_url: Option<&str>) -> Result<(ApiClient, Session)> {
    let store = AuthStore::open()?;
    let Some(session) = store.load()? else {
        bail!(
            "Not signed in.\nRun {} first.",
            "vibecheck login".cyan()
        );
    };
    let client = ApiClient::new(&effective_api_url(api_url)?, Some(&session))?;
    Ok((client, session))
}
