use super::*;

pub(super) fn cmd_summary(root: &Path, json_mode: bool) -> Result<()> {
    let report = ensure_report(root)?;

    if json_mode {
        let categories: Vec<_> = report
            .category_scores
            .iter()
            .map(|c| json!({ "category": c.category, "score": c.score }))
            .collect();
        println!(
            "{}",
            json!({
                "command": "summary",
                "repo": report.repo.full_name,
                "overall_score": report.overall_score,
                "grade": grade(report.overall_score),
                "previous_score": report.previous_score,
                "ai_percentage": report.ai_percentage,
                "categories": categories,
                "files": report.file_analyses.len(),
                "analysis_date": report.repo.analysis_date,
            })
        );
        return Ok(());
    }

    println!(
        "\n  {} {} {}\n",
        "vibecheck".cyan().bold(),
        "—".dimmed(),
        report.repo.full_name.white().bold(),
    );
    if let Some(description) = &report.repo.description {
        println!("  {}\n", description.dimmed());
    }

    let delta = report
        .previous_score
        .map(|previous| {
            let diff = report.overall_score - previous;
            if diff >= 0.0 {
                format!("▲ +{:.0} vs previous", diff).green().to_string()
            } else {
                format!("▼ {:.0} vs previous", diff).red().to_string()
            }
        })
        .unwrap_or_default();

    println!(
        "  Overall: {}/100  grade {}  {}",
        score_cell(report.overall_score).bold(),
        grade(report.overall_score).to_string().white().bold(),
        delta,
    );
    println!("  AI-generated: {}", ai_cell(report.ai_percentage));

    if !report.category_scores.is_empty() {
        println!("\n  {}", "Categories:".white().bold());
        for category in &report.category_scores {
            let bar_len = (category.score / 100.0 * 20.0).clamp(0.0, 20.0) as usize;
            let bar = "█".repeat(bar_len);
            println!(
                "  {:>12}  {} {}",
                category.category.cyan(),
                bar.green(),
                score_cell(category.score),
            );
        }
    }

    println!(
        "\n  {} files analyzed{}\n",
        report.file_analyses.len().to_string().cyan(),
        report
            .repo
            .analysis_date
            .map(|d| format!(" on {}", d.format("%Y-%m-%d %H:%M")).dimmed().to_string())
            .unwrap_or_default(),
    );

    Ok(())
}
