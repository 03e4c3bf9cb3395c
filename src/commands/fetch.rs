use super::*;

pub(super) fn cmd_fetch(
    root: &Path,
    api_url: Option<&str>,
    full_name: &str,
    json_mode: bool,
) -> Result<()> {
    let (client, _session) = authed_client(api_url)?;

    let report = client.latest_report(full_name)?;
    let store = ReportStore::open(root)?;
    store.save(&report)?;

    if json_mode {
        println!(
            "{}",
            json!({
                "command": "fetch",
                "repo": report.repo.full_name,
                "files": report.file_analyses.len(),
                "overall_score": report.overall_score,
                "report_path": store.report_path(),
            })
        );
    } else {
        println!(
            "\n  {} Fetched report for {} ({} files)",
            "OK".green().bold(),
            report.repo.full_name.cyan(),
            report.file_analyses.len().to_string().cyan()
        );
        println!(
            "  Saved to {}\n",
            store.report_path().display().to_string().dimmed()
        );
    }

    Ok(())
}
