use super::*;

pub(super) fn cmd_tree(
    root: &Path,
    query: Option<&str>,
    expand_all: bool,
    open: &[String],
    select: Option<&str>,
    json_mode: bool,
) -> Result<()> {
    let report = ensure_report(root)?;
    let mut explorer = Explorer::new(&report.file_analyses, TreeOptions::default())?;

    if let Some(query) = query {
        explorer.set_query(query);
    }
    if expand_all {
        explorer.expand_all();
    }
    for path in open {
        // folder clicks: toggles expansion, never selection
        explorer.activate(path);
    }
    if let Some(path) = select {
        if !explorer.select_file(path) {
            bail!(
                "No analyzed file at path {}.\nRun {} to list files.",
                path.cyan(),
                "vibecheck files".cyan()
            );
        }
    }

    let visible = explorer.visible_tree();

    if json_mode {
        let children: Vec<_> = visible.children.iter().map(node_json).collect();
        println!(
            "{}",
            json!({
                "command": "tree",
                "query": query,
                "files": file_count(&visible),
                "tree": children,
                "selected": explorer.selected().map(|f| f.file_path.clone()),
            })
        );
        return Ok(());
    }

    if visible.children.is_empty() {
        match query {
            Some(query) => println!("\n  {} No files match \"{}\"\n", "INFO".yellow(), query),
            None => println!("\n  {} Report contains no file analyses\n", "INFO".yellow()),
        }
        return Ok(());
    }

    println!("\n  {}\n", report.repo.full_name.cyan().bold());
    for child in &visible.children {
        render_node(child, &explorer, 0);
    }
    println!();

    if let Some(file) = explorer.selected() {
        super::show::render_detail(file);
    }

    Ok(())
}

fn render_node(node: &TreeNode<'_>, explorer: &Explorer<'_>, depth: usize) {
    let indent = "  ".repeat(depth);
    match node.kind {
        NodeKind::Folder => {
            if explorer.is_expanded(&node.path) {
                println!(
                    "  {}{} {}/",
                    indent,
                    "▾".dimmed(),
                    node.name.white().bold()
                );
                for child in &node.children {
                    render_node(child, explorer, depth + 1);
                }
            } else {
                println!(
                    "  {}{} {}/ {}",
                    indent,
                    "▸".dimmed(),
                    node.name.white().bold(),
                    format!("({} files)", file_count(node)).dimmed()
                );
            }
        }
        NodeKind::File => {
            print!("  {}{} {}", indent, "·".dimmed(), node.name);
            if let Some(analysis) = node.analysis {
                if analysis.is_key_file {
                    print!(" {}", "Key".magenta());
                }
                if !analysis.issues.is_empty() {
                    print!(
                        " {}",
                        issue_badge(analysis.issues.len(), classify(&analysis.issues))
                    );
                }
            }
            println!();
        }
    }
}

fn node_json(node: &TreeNode<'_>) -> serde_json::Value {
    match node.kind {
        NodeKind::Folder => json!({
            "name": node.name,
            "path": node.path,
            "kind": "folder",
            "children": node.children.iter().map(node_json).collect::<Vec<_>>(),
        }),
        NodeKind::File => {
            let (issues, severity, key) = match node.analysis {
                Some(a) => (
                    a.issues.len(),
                    classify(&a.issues).map(|s| s.as_str()),
                    a.is_key_file,
                ),
                None => (0, None, false),
            };
            json!({
                "name": node.name,
                "path": node.path,
                "kind": "file",
                "issues": issues,
                "severity": severity,
                "key_file": key,
            })
        }
    }
}
