//! Folder Tree
//!
//! Sections form a tree through parent/child indices. The tree is the only
//! source of truth for folder paths: each node's `path` is derived from its
//! ancestor chain when the tree is built.

use std::collections::{HashMap, HashSet};

use crate::domain::Section;

/// A single folder (department/section) in the tree
#[derive(Clone, Debug, PartialEq)]
pub struct FolderNode {
    pub id: String,
    pub name: String,
    pub color: String,
    /// Document count as given in seed data
    pub document_count: usize,
    pub parent_id: Option<String>,
    /// Slash-delimited path of ancestor names, e.g. "Finance/Budget Reports"
    pub path: Option<String>,
    parent: Option<usize>,
    children: Vec<usize>,
}

impl FolderNode {
    /// Detached node, not linked into any tree
    pub fn new(id: &str, name: &str, path: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: "blue".to_string(),
            document_count: 0,
            parent_id: None,
            path: path.map(str::to_string),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Arena of folder nodes with roots in seed order
#[derive(Clone, Debug, Default)]
pub struct FolderTree {
    nodes: Vec<FolderNode>,
    roots: Vec<usize>,
    index: HashMap<String, usize>,
}

impl FolderTree {
    /// Build a tree from seed sections.
    ///
    /// Sections may be linked by `parent_id`, nested through `children`, or
    /// both. Unknown parents and parent links that would form a cycle make the
    /// node a root. Stored paths that disagree with the tree are replaced by
    /// the derived path.
    pub fn from_sections(sections: &[Section]) -> Self {
        let mut flat: Vec<(Section, Option<String>)> = Vec::new();
        for section in sections {
            flatten_section(section, None, &mut flat);
        }

        let mut tree = FolderTree::default();
        for (section, container_id) in &flat {
            if tree.index.contains_key(&section.id) {
                tracing::warn!(section_id = %section.id, "duplicate section id, skipping");
                continue;
            }
            let idx = tree.nodes.len();
            tree.index.insert(section.id.clone(), idx);
            tree.nodes.push(FolderNode {
                id: section.id.clone(),
                name: section.name.clone(),
                color: section.color.clone(),
                document_count: section.document_count,
                parent_id: section.parent_id.clone().or_else(|| container_id.clone()),
                path: section.path.clone(),
                parent: None,
                children: Vec::new(),
            });
        }

        for idx in 0..tree.nodes.len() {
            let parent_idx = tree.nodes[idx]
                .parent_id
                .as_ref()
                .and_then(|pid| tree.index.get(pid).copied());

            match parent_idx {
                Some(p) if !tree.is_ancestor_or_self(idx, p) => {
                    tree.nodes[idx].parent = Some(p);
                    tree.nodes[p].children.push(idx);
                }
                Some(_) => {
                    tracing::warn!(section_id = %tree.nodes[idx].id, "parent link forms a cycle, treating as root");
                    tree.nodes[idx].parent_id = None;
                    tree.roots.push(idx);
                }
                None => {
                    if let Some(pid) = &tree.nodes[idx].parent_id {
                        tracing::warn!(section_id = %tree.nodes[idx].id, parent_id = %pid, "unknown parent, treating as root");
                    }
                    tree.nodes[idx].parent_id = None;
                    tree.roots.push(idx);
                }
            }
        }

        for idx in 0..tree.nodes.len() {
            let derived = tree.derive_path_at(idx);
            if let Some(stored) = &tree.nodes[idx].path {
                if stored != &derived {
                    tracing::warn!(
                        section_id = %tree.nodes[idx].id,
                        stored = %stored,
                        derived = %derived,
                        "stored section path disagrees with tree"
                    );
                }
            }
            tree.nodes[idx].path = Some(derived);
        }

        tree
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&FolderNode> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn roots(&self) -> Vec<&FolderNode> {
        self.roots.iter().map(|&idx| &self.nodes[idx]).collect()
    }

    /// Children of `id` in seed order (roots when `id` is None)
    pub fn children(&self, id: Option<&str>) -> Vec<&FolderNode> {
        match id {
            None => self.roots(),
            Some(id) => self
                .index
                .get(id)
                .map(|&idx| {
                    self.nodes[idx]
                        .children
                        .iter()
                        .map(|&c| &self.nodes[c])
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    pub fn parent(&self, id: &str) -> Option<&FolderNode> {
        let idx = *self.index.get(id)?;
        self.nodes[idx].parent.map(|p| &self.nodes[p])
    }

    /// Ancestor chain from the root down to (and including) `id`
    pub fn ancestors(&self, id: &str) -> Vec<&FolderNode> {
        let mut chain = Vec::new();
        let mut current = self.index.get(id).copied();
        while let Some(idx) = current {
            chain.push(&self.nodes[idx]);
            current = self.nodes[idx].parent;
        }
        chain.reverse();
        chain
    }

    /// Path built from ancestor names, e.g. "Finance/Budget Reports/2024 Q1"
    pub fn derived_path(&self, id: &str) -> Option<String> {
        self.index.get(id).map(|&idx| self.derive_path_at(idx))
    }

    /// All nodes in depth-first pre-order, roots in seed order
    pub fn depth_first(&self) -> Vec<&FolderNode> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<usize> = self.roots.iter().rev().copied().collect();
        while let Some(idx) = stack.pop() {
            out.push(&self.nodes[idx]);
            stack.extend(self.nodes[idx].children.iter().rev());
        }
        out
    }

    /// Rows of the explorer panel: (depth, node) for every node whose
    /// ancestors are all expanded
    pub fn visible_rows(&self, expanded: &HashSet<String>) -> Vec<(usize, &FolderNode)> {
        let mut out = Vec::new();
        let mut stack: Vec<(usize, usize)> = self.roots.iter().rev().map(|&r| (0, r)).collect();
        while let Some((depth, idx)) = stack.pop() {
            let node = &self.nodes[idx];
            out.push((depth, node));
            if expanded.contains(&node.id) {
                stack.extend(node.children.iter().rev().map(|&c| (depth + 1, c)));
            }
        }
        out
    }

    /// Ids of `id` and every folder beneath it
    pub fn subtree_ids(&self, id: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut stack: Vec<usize> = self.index.get(id).copied().into_iter().collect();
        while let Some(idx) = stack.pop() {
            out.push(self.nodes[idx].id.as_str());
            stack.extend(self.nodes[idx].children.iter().rev());
        }
        out
    }

    fn derive_path_at(&self, idx: usize) -> String {
        let mut names = Vec::new();
        let mut current = Some(idx);
        while let Some(i) = current {
            names.push(self.nodes[i].name.as_str());
            current = self.nodes[i].parent;
        }
        names.reverse();
        names.join("/")
    }

    /// Whether `node` lies on the ancestor chain starting at `candidate`
    /// (linking `node` under `candidate` would then form a cycle)
    fn is_ancestor_or_self(&self, node: usize, candidate: usize) -> bool {
        let mut current = Some(candidate);
        while let Some(i) = current {
            if i == node {
                return true;
            }
            current = self.nodes[i].parent;
        }
        false
    }
}

fn flatten_section(
    section: &Section,
    container_id: Option<&str>,
    out: &mut Vec<(Section, Option<String>)>,
) {
    let mut flat = section.clone();
    flat.children = Vec::new();
    out.push((flat, container_id.map(str::to_string)));
    for child in &section.children {
        flatten_section(child, Some(&section.id), out);
    }
}
