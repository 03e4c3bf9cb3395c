#![allow(clippy::module_inception)]

#[cfg(test)]
mod tests {
    use crate::report::{classify, FileAnalysis, Issue, Severity};
    use crate::tree::{
        build_tree, file_count, filter_tree, folder_count, DuplicatePolicy, NodeKind, TreeNode,
        TreeOptions,
    };

    fn record(path: &str, severities: &[&str]) -> FileAnalysis {
        FileAnalysis {
            file_path: path.to_string(),
            file_type: "python".to_string(),
            metrics: Default::default(),
            issues: severities
                .iter()
                .enumerate()
                .map(|(i, s)| Issue {
                    line: (i as u32 + 1) * 10,
                    severity: Severity::from_raw(s),
                    category: "quality".to_string(),
                    description: format!("issue {}", i),
                    snippet: None,
                    suggestion: None,
                })
                .collect(),
            is_key_file: false,
            key_file_reason: None,
            quality_score: None,
            ai_percentage: None,
            flags: vec![],
        }
    }

    fn scenario_feed() -> Vec<FileAnalysis> {
        vec![
            record("src/app/main.py", &["high"]),
            record("src/app/utils.py", &[]),
            record("README.md", &[]),
        ]
    }

    fn assert_same_structure(a: &TreeNode<'_>, b: &TreeNode<'_>) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.path, b.path);
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.children.len(), b.children.len());
        for (ca, cb) in a.children.iter().zip(b.children.iter()) {
            assert_same_structure(ca, cb);
        }
    }

    // =====================================================================
    // Tree builder
    // =====================================================================

    #[test]
    fn test_build_counts_files_and_prefix_folders() {
        let feed = vec![
            record("src/app/main.py", &[]),
            record("src/app/utils.py", &[]),
            record("src/lib/core.py", &[]),
            record("README.md", &[]),
        ];
        let root = build_tree(&feed, TreeOptions::default()).unwrap();
        assert_eq!(file_count(&root), 4);
        // distinct proper prefixes: src, src/app, src/lib
        assert_eq!(folder_count(&root), 3);
    }

    #[test]
    fn test_build_is_deterministic() {
        let feed = scenario_feed();
        let first = build_tree(&feed, TreeOptions::default()).unwrap();
        let second = build_tree(&feed, TreeOptions::default()).unwrap();
        assert_same_structure(&first, &second);
    }

    #[test]
    fn test_end_to_end_scenario_shape() {
        let feed = scenario_feed();
        let root = build_tree(&feed, TreeOptions::default()).unwrap();

        // root children in first-seen order: folder "src", file "README.md"
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].name, "src");
        assert_eq!(root.children[0].kind, NodeKind::Folder);
        assert_eq!(root.children[1].name, "README.md");
        assert_eq!(root.children[1].kind, NodeKind::File);

        let src = &root.children[0];
        assert_eq!(src.children.len(), 1);
        let app = &src.children[0];
        assert_eq!(app.name, "app");
        assert_eq!(app.path, "src/app");
        let names: Vec<&str> = app.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["main.py", "utils.py"]);

        // badges: main.py high, utils.py and README.md none
        let main = &app.children[0];
        assert_eq!(classify(&main.analysis.unwrap().issues), Some(Severity::High));
        assert_eq!(classify(&app.children[1].analysis.unwrap().issues), None);
        assert_eq!(classify(&root.children[1].analysis.unwrap().issues), None);
    }

    #[test]
    fn test_leading_and_trailing_slashes_are_trimmed() {
        let feed = vec![record("/src/main.py/", &[])];
        let root = build_tree(&feed, TreeOptions::default()).unwrap();
        assert_eq!(file_count(&root), 1);
        assert_eq!(root.children[0].name, "src");
        assert_eq!(root.children[0].children[0].name, "main.py");
    }

    #[test]
    fn test_malformed_paths_are_skipped_not_fatal() {
        let feed = vec![record("", &[]), record("///", &[]), record("ok.py", &[])];
        let root = build_tree(&feed, TreeOptions::default()).unwrap();
        assert_eq!(file_count(&root), 1);
        assert_eq!(root.children[0].name, "ok.py");
    }

    #[test]
    fn test_file_and_folder_may_share_a_name() {
        let feed = vec![record("a", &[]), record("a/b.py", &[])];
        let root = build_tree(&feed, TreeOptions::default()).unwrap();
        // file "a" first, then a distinct folder "a" holding b.py
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].kind, NodeKind::File);
        assert_eq!(root.children[0].name, "a");
        assert_eq!(root.children[1].kind, NodeKind::Folder);
        assert_eq!(root.children[1].children[0].name, "b.py");
    }

    #[test]
    fn test_duplicate_paths_keep_both() {
        let feed = vec![record("src/a.py", &["low"]), record("src/a.py", &["high"])];
        let root = build_tree(&feed, TreeOptions::default()).unwrap();
        let src = &root.children[0];
        assert_eq!(src.children.len(), 2);
        assert_eq!(src.children[0].path, src.children[1].path);
    }

    #[test]
    fn test_duplicate_paths_last_wins() {
        let feed = vec![record("src/a.py", &["low"]), record("src/a.py", &["high"])];
        let options = TreeOptions {
            duplicates: DuplicatePolicy::LastWins,
        };
        let root = build_tree(&feed, options).unwrap();
        let src = &root.children[0];
        assert_eq!(src.children.len(), 1);
        // the surviving node points at the second record
        assert_eq!(
            classify(&src.children[0].analysis.unwrap().issues),
            Some(Severity::High)
        );
    }

    #[test]
    fn test_duplicate_paths_reject() {
        let feed = vec![record("src/a.py", &[]), record("src/a.py", &[])];
        let options = TreeOptions {
            duplicates: DuplicatePolicy::Reject,
        };
        assert!(build_tree(&feed, options).is_err());
    }

    // =====================================================================
    // Tree filter
    // =====================================================================

    #[test]
    fn test_empty_query_returns_tree_unchanged() {
        let feed = scenario_feed();
        let root = build_tree(&feed, TreeOptions::default()).unwrap();
        assert_same_structure(&filter_tree(&root, ""), &root);
        assert_same_structure(&filter_tree(&root, "   "), &root);
    }

    #[test]
    fn test_filter_prunes_non_matching_branches() {
        let feed = scenario_feed();
        let root = build_tree(&feed, TreeOptions::default()).unwrap();
        let filtered = filter_tree(&root, "main");

        // README.md and utils.py are pruned; the src/app chain survives
        assert_eq!(filtered.children.len(), 1);
        assert_eq!(filtered.children[0].name, "src");
        let app = &filtered.children[0].children[0];
        assert_eq!(app.name, "app");
        assert_eq!(app.children.len(), 1);
        assert_eq!(app.children[0].name, "main.py");
    }

    #[test]
    fn test_filter_is_case_insensitive_and_matches_paths() {
        let feed = scenario_feed();
        let root = build_tree(&feed, TreeOptions::default()).unwrap();

        assert_eq!(file_count(&filter_tree(&root, "MAIN")), 1);
        // path substring matches both files under src/app
        assert_eq!(file_count(&filter_tree(&root, "src/app")), 2);
    }

    #[test]
    fn test_filter_with_no_matches_yields_empty_root() {
        let feed = scenario_feed();
        let root = build_tree(&feed, TreeOptions::default()).unwrap();
        let filtered = filter_tree(&root, "does-not-exist");
        assert!(filtered.children.is_empty());
        assert_eq!(filtered.kind, NodeKind::Folder);
    }

    #[test]
    fn test_surviving_folders_always_hold_a_file() {
        fn check(node: &TreeNode<'_>) {
            if node.kind == NodeKind::Folder && !node.path.is_empty() {
                assert!(file_count(node) >= 1, "folder {} survived empty", node.path);
            }
            for child in &node.children {
                check(child);
            }
        }
        let feed = vec![
            record("src/app/main.py", &[]),
            record("src/deep/nested/other.rs", &[]),
            record("docs/guide.md", &[]),
        ];
        let root = build_tree(&feed, TreeOptions::default()).unwrap();
        for query in ["main", "md", "rs", "zzz"] {
            check(&filter_tree(&root, query));
        }
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let feed = scenario_feed();
        let root = build_tree(&feed, TreeOptions::default()).unwrap();
        let before = root.clone();
        let _ = filter_tree(&root, "main");
        assert_same_structure(&root, &before);
        assert_eq!(file_count(&root), 3);
    }
}
