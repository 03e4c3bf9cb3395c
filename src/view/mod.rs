use std::collections::HashSet;

use anyhow::Result;
use colored::*;

use crate::report::{FileAnalysis, Severity};
use crate::tree::{build_tree, filter_tree, NodeKind, TreeNode, TreeOptions};

/// UI-local state for the issue-overlay view: the single selected-file slot
/// and the expanded-folder set.
///
/// Click semantics follow the dashboard: activating a folder toggles its
/// expansion and never touches selection; activating a file selects it for
/// the detail panel. The initial state is fully collapsed.
pub struct Explorer<'a> {
    root: TreeNode<'a>,
    options: TreeOptions,
    selected: Option<&'a FileAnalysis>,
    expanded: HashSet<String>,
    query: String,
}

impl<'a> Explorer<'a> {
    pub fn new(records: &'a [FileAnalysis], options: TreeOptions) -> Result<Self> {
        Ok(Self {
            root: build_tree(records, options)?,
            options,
            selected: None,
            expanded: HashSet::new(),
            query: String::new(),
        })
    }

    /// Swap in a fresh feed after re-analysis. Selection is cleared: the
    /// previously selected file may no longer exist in the new feed.
    pub fn reload(&mut self, records: &'a [FileAnalysis]) -> Result<()> {
        self.root = build_tree(records, self.options)?;
        self.selected = None;
        Ok(())
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// The tree as currently filtered. The unfiltered tree stays cached, so
    /// clearing the query never rebuilds from the feed.
    pub fn visible_tree(&self) -> TreeNode<'a> {
        filter_tree(&self.root, &self.query)
    }

    pub fn selected(&self) -> Option<&'a FileAnalysis> {
        self.selected
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    pub fn expand_all(&mut self) {
        fn collect(node: &TreeNode<'_>, out: &mut HashSet<String>) {
            for child in &node.children {
                if child.kind == NodeKind::Folder {
                    out.insert(child.path.clone());
                    collect(child, out);
                }
            }
        }
        collect(&self.root, &mut self.expanded);
    }

    /// Click on a node by path. Folders toggle, files select. Returns false
    /// when no node carries that path.
    pub fn activate(&mut self, path: &str) -> bool {
        let hit = find_node(&self.root, path).map(|n| (n.kind, n.analysis));
        match hit {
            Some((NodeKind::Folder, _)) => {
                if !self.expanded.remove(path) {
                    self.expanded.insert(path.to_string());
                }
                true
            }
            Some((NodeKind::File, analysis)) => {
                self.selected = analysis;
                true
            }
            None => false,
        }
    }

    /// Select a file node by path. Folder paths are refused — a folder click
    /// never changes the detail panel.
    pub fn select_file(&mut self, path: &str) -> bool {
        match find_node(&self.root, path) {
            Some(node) if node.kind == NodeKind::File => {
                self.selected = node.analysis;
                true
            }
            _ => false,
        }
    }
}

fn find_node<'t, 'a>(node: &'t TreeNode<'a>, path: &str) -> Option<&'t TreeNode<'a>> {
    if node.path == path && !node.path.is_empty() {
        return Some(node);
    }
    node.children.iter().find_map(|c| find_node(c, path))
}

// =====================================================================
// Badge & score presentation helpers
// =====================================================================

/// Letter grade for a 0-100 score
pub fn grade(score: f64) -> &'static str {
    if score >= 90.0 {
        "A"
    } else if score >= 80.0 {
        "B"
    } else if score >= 70.0 {
        "C"
    } else if score >= 60.0 {
        "D"
    } else {
        "F"
    }
}

/// Colored score cell (green ≥90, cyan ≥75, yellow ≥60, red below)
pub fn score_cell(score: f64) -> ColoredString {
    let text = format!("{:.0}", score);
    if score >= 90.0 {
        text.green()
    } else if score >= 75.0 {
        text.cyan()
    } else if score >= 60.0 {
        text.yellow()
    } else {
        text.red()
    }
}

/// Colored AI-share cell (red ≥70%, yellow ≥40%, green below)
pub fn ai_cell(percentage: f64) -> ColoredString {
    let text = format!("{:.0}%", percentage);
    if percentage >= 70.0 {
        text.red()
    } else if percentage >= 40.0 {
        text.yellow()
    } else {
        text.green()
    }
}

/// Severity badge for issue listings
pub fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::High => "HIGH".red().bold(),
        Severity::Medium => "MEDIUM".yellow(),
        Severity::Low => "LOW".green(),
    }
}

/// Issue-count badge colored by the file's severity bucket
pub fn issue_badge(count: usize, bucket: Option<Severity>) -> ColoredString {
    let text = count.to_string();
    match bucket {
        Some(Severity::High) => text.red().bold(),
        Some(Severity::Medium) => text.yellow(),
        Some(Severity::Low) => text.green(),
        None => text.dimmed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::FileAnalysis;

    fn record(path: &str) -> FileAnalysis {
        FileAnalysis {
            file_path: path.to_string(),
            file_type: "python".to_string(),
            metrics: Default::default(),
            issues: vec![],
            is_key_file: false,
            key_file_reason: None,
            quality_score: None,
            ai_percentage: None,
            flags: vec![],
        }
    }

    fn feed() -> Vec<FileAnalysis> {
        vec![
            record("src/app/main.py"),
            record("src/app/utils.py"),
            record("README.md"),
        ]
    }

    #[test]
    fn test_initial_state_collapsed_and_unselected() {
        let feed = feed();
        let explorer = Explorer::new(&feed, TreeOptions::default()).unwrap();
        assert!(explorer.selected().is_none());
        assert!(!explorer.is_expanded("src"));
        assert!(!explorer.is_expanded("src/app"));
    }

    #[test]
    fn test_activating_file_selects_it() {
        let feed = feed();
        let mut explorer = Explorer::new(&feed, TreeOptions::default()).unwrap();
        assert!(explorer.activate("src/app/main.py"));
        assert_eq!(
            explorer.selected().map(|f| f.file_path.as_str()),
            Some("src/app/main.py")
        );
    }

    #[test]
    fn test_activating_folder_toggles_but_never_selects() {
        let feed = feed();
        let mut explorer = Explorer::new(&feed, TreeOptions::default()).unwrap();
        explorer.activate("src/app/main.py");

        assert!(explorer.activate("src/app"));
        assert!(explorer.is_expanded("src/app"));
        // folder click leaves the detail panel untouched
        assert_eq!(
            explorer.selected().map(|f| f.file_path.as_str()),
            Some("src/app/main.py")
        );

        assert!(explorer.activate("src/app"));
        assert!(!explorer.is_expanded("src/app"));
    }

    #[test]
    fn test_select_file_refuses_folder_paths() {
        let feed = feed();
        let mut explorer = Explorer::new(&feed, TreeOptions::default()).unwrap();
        assert!(!explorer.select_file("src/app"));
        assert!(explorer.selected().is_none());
        assert!(!explorer.select_file("no/such/file.py"));
    }

    #[test]
    fn test_reload_clears_selection() {
        let first = feed();
        let second = vec![record("other/new.py")];
        let mut explorer = Explorer::new(&first, TreeOptions::default()).unwrap();
        explorer.activate("README.md");
        assert!(explorer.selected().is_some());

        explorer.reload(&second).unwrap();
        assert!(explorer.selected().is_none());
        assert!(explorer.select_file("other/new.py"));
    }

    #[test]
    fn test_query_filters_visible_tree_without_losing_original() {
        let feed = feed();
        let mut explorer = Explorer::new(&feed, TreeOptions::default()).unwrap();
        explorer.set_query("main");
        assert_eq!(crate::tree::file_count(&explorer.visible_tree()), 1);

        explorer.set_query("");
        assert_eq!(crate::tree::file_count(&explorer.visible_tree()), 3);
    }

    #[test]
    fn test_expand_all_covers_every_folder() {
        let feed = feed();
        let mut explorer = Explorer::new(&feed, TreeOptions::default()).unwrap();
        explorer.expand_all();
        assert!(explorer.is_expanded("src"));
        assert!(explorer.is_expanded("src/app"));
    }

    #[test]
    fn test_grade_cutoffs() {
        assert_eq!(grade(95.0), "A");
        assert_eq!(grade(90.0), "A");
        assert_eq!(grade(84.0), "B");
        assert_eq!(grade(71.5), "C");
        assert_eq!(grade(60.0), "D");
        assert_eq!(grade(12.0), "F");
    }
}
