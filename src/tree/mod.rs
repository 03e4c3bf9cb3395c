mod tests;

use anyhow::{bail, Result};

use crate::report::FileAnalysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder,
}

/// One node of the reconstructed directory tree.
///
/// Folders are inferred purely from shared path prefixes; there is no
/// explicit directory listing in the feed. File nodes carry a shared,
/// read-only reference back into the feed — the tree never owns analysis
/// records.
#[derive(Debug, Clone)]
pub struct TreeNode<'a> {
    /// Last path segment
    pub name: String,
    /// Full path from the repository root (empty for the virtual root)
    pub path: String,
    pub kind: NodeKind,
    /// Insertion order, folders and files interleaved as first seen
    pub children: Vec<TreeNode<'a>>,
    /// Present only on file nodes
    pub analysis: Option<&'a FileAnalysis>,
}

impl<'a> TreeNode<'a> {
    fn folder(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            kind: NodeKind::Folder,
            children: Vec::new(),
            analysis: None,
        }
    }

    fn file(name: &str, analysis: &'a FileAnalysis) -> Self {
        Self {
            name: name.to_string(),
            path: analysis.file_path.clone(),
            kind: NodeKind::File,
            children: Vec::new(),
            analysis: Some(analysis),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}

/// What to do when two feed records carry the exact same `file_path`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Create sibling file nodes, one per record (source dashboard behavior)
    #[default]
    KeepBoth,
    /// The later record replaces the earlier node
    LastWins,
    /// Fail tree construction with an error
    Reject,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TreeOptions {
    pub duplicates: DuplicatePolicy,
}

/// Reconstruct the directory tree from the flat analysis feed.
///
/// Paths split on `/`; empty segments are dropped, which guards against
/// leading and trailing slashes. Records whose path collapses to zero
/// segments are skipped with a warning — one malformed record never aborts
/// the rest of the tree. Folder lookup considers folder children only, so a
/// file and a folder may share a name without collision. The returned root
/// is a virtual folder with an empty path; only its children are rendered.
pub fn build_tree<'a>(records: &'a [FileAnalysis], options: TreeOptions) -> Result<TreeNode<'a>> {
    let mut root = TreeNode::folder("root", "");

    for record in records {
        let segments: Vec<&str> = record.file_path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            tracing::warn!(path = %record.file_path, "skipping record with empty path");
            continue;
        }

        let mut current = &mut root;
        let mut prefix = String::new();
        for segment in &segments[..segments.len() - 1] {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);

            let idx = match current
                .children
                .iter()
                .position(|c| c.kind == NodeKind::Folder && c.name == *segment)
            {
                Some(idx) => idx,
                None => {
                    current.children.push(TreeNode::folder(segment, &prefix));
                    current.children.len() - 1
                }
            };
            current = &mut current.children[idx];
        }

        let leaf = segments[segments.len() - 1];
        match options.duplicates {
            DuplicatePolicy::KeepBoth => {
                current.children.push(TreeNode::file(leaf, record));
            }
            DuplicatePolicy::LastWins => {
                match current
                    .children
                    .iter_mut()
                    .find(|c| c.kind == NodeKind::File && c.path == record.file_path)
                {
                    Some(existing) => existing.analysis = Some(record),
                    None => current.children.push(TreeNode::file(leaf, record)),
                }
            }
            DuplicatePolicy::Reject => {
                if current
                    .children
                    .iter()
                    .any(|c| c.kind == NodeKind::File && c.path == record.file_path)
                {
                    bail!("duplicate file path in analysis feed: {}", record.file_path);
                }
                current.children.push(TreeNode::file(leaf, record));
            }
        }
    }

    Ok(root)
}

/// Prune the tree down to files matching a case-insensitive substring query.
///
/// A file survives if the query occurs in its name or its full path. A
/// folder survives only through surviving descendants — matching is
/// leaf-driven, a folder's own name never keeps it alive. The input tree is
/// not mutated; clearing the query must still yield the unfiltered tree
/// without rebuilding from the feed. An empty or whitespace query returns
/// the tree unchanged.
pub fn filter_tree<'a>(root: &TreeNode<'a>, query: &str) -> TreeNode<'a> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return root.clone();
    }
    filter_node(root, &query).unwrap_or_else(|| TreeNode::folder(&root.name, &root.path))
}

fn filter_node<'a>(node: &TreeNode<'a>, query: &str) -> Option<TreeNode<'a>> {
    match node.kind {
        NodeKind::File => {
            let matches = node.name.to_lowercase().contains(query)
                || node.path.to_lowercase().contains(query);
            matches.then(|| node.clone())
        }
        NodeKind::Folder => {
            let children: Vec<TreeNode<'a>> = node
                .children
                .iter()
                .filter_map(|c| filter_node(c, query))
                .collect();
            (!children.is_empty()).then(|| TreeNode {
                name: node.name.clone(),
                path: node.path.clone(),
                kind: NodeKind::Folder,
                children,
                analysis: None,
            })
        }
    }
}

/// Count file nodes reachable from (and excluding) the given node
pub fn file_count(node: &TreeNode<'_>) -> usize {
    node.children
        .iter()
        .map(|c| match c.kind {
            NodeKind::File => 1,
            NodeKind::Folder => file_count(c),
        })
        .sum()
}

/// Count folder nodes reachable from (and excluding) the given node
pub fn folder_count(node: &TreeNode<'_>) -> usize {
    node.children
        .iter()
        .map(|c| match c.kind {
            NodeKind::File => 0,
            NodeKind::Folder => 1 + folder_count(c),
        })
        .sum()
}
