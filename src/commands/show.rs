use super::*;

pub(super) fn cmd_show(root: &Path, path: &str, json_mode: bool) -> Result<()> {
    let report = ensure_report(root)?;
    let needle = path.to_lowercase();
    let file = report
        .file_analyses
        .iter()
        .find(|f| f.file_path == path)
        .or_else(|| {
            report
                .file_analyses
                .iter()
                .find(|f| f.file_path.to_lowercase().contains(&needle))
        });

    let Some(file) = file else {
        bail!(
            "No analyzed file matches {}.\nRun {} to list files.",
            path.cyan(),
            "vibecheck files".cyan()
        );
    };

    if json_mode {
        println!(
            "{}",
            json!({
                "command": "show",
                "file": file,
                "severity": classify(&file.issues).map(|s| s.as_str()),
            })
        );
        return Ok(());
    }

    render_detail(file);
    Ok(())
}

/// Detail panel for one file: metrics grid, then the issue list or the
/// positive empty state.
pub(super) fn render_detail(file: &FileAnalysis) {
    println!("\n  {}", file.file_path.white().bold());
    if file.is_key_file {
        let reason = file
            .key_file_reason
            .as_deref()
            .map(|r| format!(" — {}", r))
            .unwrap_or_default();
        println!("  {} key file{}", "★".yellow(), reason.dimmed());
    }
    println!(
        "  Type: {}   Lines: {}   Functions: {}   Classes: {}",
        file.file_type.cyan(),
        file.metrics.lines_of_code.to_string().cyan(),
        file.metrics.function_count.to_string().cyan(),
        file.metrics.class_count.to_string().cyan(),
    );

    println!("\n  {}", "Metrics:".white().bold());
    println!(
        "    {:>20}: {}",
        "Complexity",
        file.metrics.cyclomatic_complexity.to_string().cyan()
    );
    println!(
        "    {:>20}: {:.1}",
        "Maintainability", file.metrics.maintainability_index
    );
    println!(
        "    {:>20}: {:.1}%",
        "Comment ratio",
        file.metrics.comment_ratio * 100.0
    );
    println!(
        "    {:>20}: {:.1}",
        "Avg function length", file.metrics.avg_function_length
    );
    println!(
        "    {:>20}: {:.1}",
        "Max function length", file.metrics.max_function_length
    );

    if file.issues.is_empty() {
        println!(
            "\n  {} No issues found in this file\n",
            "OK".green().bold()
        );
        return;
    }

    println!(
        "\n  {} ({})",
        "Issues:".white().bold(),
        file.issues.len().to_string().cyan()
    );
    for issue in &file.issues {
        println!(
            "    {:<6} line {:>4}  {}  {}",
            severity_label(issue.severity),
            issue.line.to_string().cyan(),
            issue.category.dimmed(),
            issue.description,
        );
        if let Some(snippet) = &issue.snippet {
            println!("           {}", snippet.dimmed());
        }
        if let Some(suggestion) = &issue.suggestion {
            println!("           {} {}", "→".green(), suggestion.italic());
        }
    }
    println!();
}
