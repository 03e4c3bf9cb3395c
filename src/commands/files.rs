use super::*;

pub(super) fn cmd_files(root: &Path, json_mode: bool) -> Result<()> {
    let report = ensure_report(root)?;

    if report.file_analyses.is_empty() {
        if json_mode {
            println!("{}", json!({ "command": "files", "files": [] }));
        } else {
            println!("\n  {} Report contains no file analyses\n", "INFO".yellow());
        }
        return Ok(());
    }

    if json_mode {
        let entries: Vec<_> = report
            .file_analyses
            .iter()
            .map(|f| {
                json!({
                    "path": f.file_path,
                    "type": f.file_type,
                    "quality_score": f.quality_score,
                    "ai_percentage": f.ai_percentage,
                    "issues": f.issues.len(),
                    "severity": classify(&f.issues).map(|s| s.as_str()),
                    "key_file": f.is_key_file,
                    "flags": f.flags,
                })
            })
            .collect();
        println!(
            "{}",
            json!({
                "command": "files",
                "count": entries.len(),
                "files": entries,
            })
        );
        return Ok(());
    }

    println!(
        "\n  {} files  {}\n",
        report.file_analyses.len().to_string().cyan().bold(),
        "(quality / AI share / flags)".dimmed()
    );

    for file in &report.file_analyses {
        let quality = file
            .quality_score
            .map(|s| score_cell(s).to_string())
            .unwrap_or_else(|| "--".dimmed().to_string());
        let ai = file
            .ai_percentage
            .map(|p| ai_cell(p).to_string())
            .unwrap_or_else(|| "--".dimmed().to_string());

        print!("  {} {}  {}", quality, ai, file.file_path);
        if file.is_key_file {
            print!(" {}", "Key".magenta());
        }
        if !file.issues.is_empty() {
            print!(" {}", issue_badge(file.issues.len(), classify(&file.issues)));
        }
        if !file.flags.is_empty() {
            print!("  {}", file.flags.join(", ").dimmed());
        }
        println!();
    }
    println!();

    Ok(())
}
