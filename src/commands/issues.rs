use super::*;

pub(super) fn cmd_issues(root: &Path, severity: Option<&str>, json_mode: bool) -> Result<()> {
    let report = ensure_report(root)?;

    let filter = match severity {
        Some(raw) => Some(parse_bucket(raw)?),
        None => None,
    };

    let mut by_file: Vec<(&FileAnalysis, Vec<&crate::report::Issue>)> = Vec::new();
    let mut counts = [0usize; 3]; // low, medium, high
    for file in &report.file_analyses {
        let matching: Vec<_> = file
            .issues
            .iter()
            .filter(|i| filter.map_or(true, |wanted| i.severity == wanted))
            .collect();
        for issue in &matching {
            counts[issue.severity as usize] += 1;
        }
        if !matching.is_empty() {
            by_file.push((file, matching));
        }
    }

    if json_mode {
        let entries: Vec<_> = by_file
            .iter()
            .flat_map(|(file, issues)| {
                issues.iter().map(move |issue| {
                    json!({
                        "file": file.file_path,
                        "line": issue.line,
                        "severity": issue.severity.as_str(),
                        "category": issue.category,
                        "description": issue.description,
                        "suggestion": issue.suggestion,
                    })
                })
            })
            .collect();
        println!(
            "{}",
            json!({
                "command": "issues",
                "count": entries.len(),
                "high": counts[Severity::High as usize],
                "medium": counts[Severity::Medium as usize],
                "low": counts[Severity::Low as usize],
                "issues": entries,
            })
        );
        return Ok(());
    }

    let total: usize = counts.iter().sum();
    if total == 0 {
        println!("\n  {} No issues - looking good!\n", "OK".green().bold());
        return Ok(());
    }

    println!(
        "\n  {} issues  {}\n",
        total.to_string().yellow().bold(),
        format!(
            "({} high, {} medium, {} low)",
            counts[Severity::High as usize],
            counts[Severity::Medium as usize],
            counts[Severity::Low as usize]
        )
        .dimmed()
    );

    for (file, issues) in &by_file {
        println!("  {}", file.file_path.white().bold());
        for issue in issues {
            println!(
                "    {:<6} line {:>4}  {}  {}",
                severity_label(issue.severity),
                issue.line.to_string().cyan(),
                issue.category.dimmed(),
                issue.description,
            );
        }
        println!();
    }

    Ok(())
}

// CLI argument parsing is strict on purpose: a typo should error, unlike the
// lenient normalization applied to backend data.
fn parse_bucket(raw: &str) -> Result<Severity> {
    match raw.to_ascii_lowercase().as_str() {
        "high" | "error" => Ok(Severity::High),
        "medium" | "warning" => Ok(Severity::Medium),
        "low" | "info" => Ok(Severity::Low),
        other => bail!("Unknown severity: {} (expected high, medium or low)", other),
    }
}
