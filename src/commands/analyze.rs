use super::*;

use std::io::Write;

#[allow(clippy::too_many_arguments)]
pub(super) fn cmd_analyze(
    root: &Path,
    api_url: Option<&str>,
    repo_url: &str,
    window_days: u32,
    max_commits: u32,
    force: bool,
    json_mode: bool,
) -> Result<()> {
    let (client, _session) = authed_client(api_url)?;

    if !force {
        let existing = client.check_existing(repo_url)?;
        if existing.exists {
            return report_existing(&existing, json_mode);
        }
    }

    let start = Instant::now();
    if !json_mode {
        print!("\n  Analyzing {}...", repo_url.cyan());
        std::io::stdout().flush().ok();
    }

    let report = client.analyze(repo_url, window_days, max_commits)?;
    let store = ReportStore::open(root)?;
    store.save(&report)?;
    let elapsed = start.elapsed();

    if json_mode {
        println!(
            "{}",
            json!({
                "command": "analyze",
                "repo": report.repo.full_name,
                "files": report.file_analyses.len(),
                "overall_score": report.overall_score,
                "ai_percentage": report.ai_percentage,
                "report_path": store.report_path(),
                "elapsed_ms": elapsed.as_millis(),
            })
        );
    } else {
        println!(" {}", "done".green());
        println!(
            "    {} files analyzed",
            report.file_analyses.len().to_string().cyan()
        );
        println!(
            "    Overall score {} (grade {})",
            score_cell(report.overall_score).bold(),
            grade(report.overall_score)
        );
        println!("    AI-generated share {}", ai_cell(report.ai_percentage));
        println!(
            "\n  {} Report saved to {} in {:.1}s\n",
            "OK".green().bold(),
            store.report_path().display().to_string().dimmed(),
            elapsed.as_secs_f64()
        );
    }

    Ok(())
}

fn report_existing(existing: &crate::api::ExistingAnalysis, json_mode: bool) -> Result<()> {
    if json_mode {
        println!(
            "{}",
            json!({
                "command": "analyze",
                "exists": true,
                "repo_id": existing.repo_id,
                "full_name": existing.full_name,
                "analysis_date": existing.analysis_date,
                "overall_score": existing.overall_score,
                "file_count": existing.file_count,
            })
        );
        return Ok(());
    }

    let date = existing
        .analysis_date
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string());

    println!(
        "\n  {} Repository already analyzed\n",
        "INFO".yellow().bold()
    );
    if let Some(full_name) = &existing.full_name {
        println!("  {}", full_name.white().bold());
    }
    println!("    Last analyzed: {}", date.dimmed());
    if let Some(count) = existing.file_count {
        println!("    Files analyzed: {}", count.to_string().cyan());
    }
    if let Some(score) = existing.overall_score {
        println!(
            "    Overall score: {}/100 (grade {})",
            score_cell(score).bold(),
            grade(score)
        );
    }
    println!(
        "\n  Run {} to view it, or re-run with {} to replace it.\n",
        "vibecheck fetch <owner/repo>".cyan(),
        "--force".cyan()
    );

    Ok(())
}
