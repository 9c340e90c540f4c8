// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use indexmap::IndexMap;
use smol_str::SmolStr;
use thiserror::Error;

use super::iter::IterLeafs;
use crate::color::Hsv;
use crate::model::{FolderId, LeafId, NodeId, TreeRecord};

/// Name of the root folder. Never a valid path segment coming from a scanner.
pub const ROOT_NAME: &str = "__dep_tree_root__";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathTreeError {
    #[error("cannot push node {id} at {path:?}: there is already a file at {at:?}")]
    LeafInTheWay {
        id: NodeId,
        path: String,
        at: String,
    },
    #[error("cannot push node {id} at {path:?}: there is already a folder with that name")]
    FolderInTheWay { id: NodeId, path: String },
    #[error("cannot push node {id} at {path:?}: node {existing} is already there")]
    DuplicateLeaf {
        id: NodeId,
        existing: NodeId,
        path: String,
    },
    #[error("cannot push node {id} at {path:?}: a node with that id is already at {existing:?}")]
    DuplicateId {
        id: NodeId,
        path: String,
        existing: String,
    },
    #[error("cannot push node {id} at {path:?}: segment {segment:?} is empty or contains '/'")]
    InvalidSegment {
        id: NodeId,
        path: String,
        segment: String,
    },
}

/// Computed properties attached to a folder without touching its structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderData {
    pub color: Option<Hsv>,
}

#[derive(Debug, Clone)]
pub struct Folder {
    name: SmolStr,
    parent: Option<FolderId>,
    index: usize,
    sub_trees: IndexMap<SmolStr, FolderId>,
    leafs: IndexMap<SmolStr, LeafId>,
    pub data: FolderData,
}

impl Folder {
    fn new(name: SmolStr, parent: Option<FolderId>, index: usize) -> Self {
        Self {
            name,
            parent,
            index,
            sub_trees: IndexMap::new(),
            leafs: IndexMap::new(),
            data: FolderData::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<FolderId> {
        self.parent
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn sub_trees(&self) -> &IndexMap<SmolStr, FolderId> {
        &self.sub_trees
    }

    pub fn leafs(&self) -> &IndexMap<SmolStr, LeafId> {
        &self.leafs
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct Leaf<T> {
    name: SmolStr,
    parent: FolderId,
    index: usize,
    record: T,
    pub color: Option<Hsv>,
}

impl<T> Leaf<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> FolderId {
        self.parent
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn record(&self) -> &T {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut T {
        &mut self.record
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Folder(FolderId),
    Leaf(LeafId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Tree,
    Leaf,
}

/// Where a node sits relative to its siblings of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeStats {
    pub kind: NodeKind,
    /// Number of ancestors up to the root; the root itself is at depth 0.
    pub depth: usize,
    pub index: usize,
    pub total: usize,
}

/// Hierarchical tree keyed by path segments.
///
/// Folders and leafs live in two arenas owned by the tree. Children are referenced by
/// index from their parent's maps and point back through a plain parent index, so the
/// up-links never own anything. Folders absorbed by [`PathTree::squash`] stay in the arena
/// but are no longer reachable from the root.
#[derive(Debug, Clone)]
pub struct PathTree<T> {
    folders: Vec<Folder>,
    leafs: Vec<Leaf<T>>,
    by_id: HashMap<NodeId, LeafId>,
}

impl<T> Default for PathTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PathTree<T> {
    pub fn new() -> Self {
        Self {
            folders: vec![Folder::new(SmolStr::new_static(ROOT_NAME), None, 0)],
            leafs: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    pub fn root(&self) -> FolderId {
        FolderId::new(0)
    }

    pub fn folder(&self, id: FolderId) -> &Folder {
        &self.folders[id.index()]
    }

    pub fn folder_mut(&mut self, id: FolderId) -> &mut Folder {
        &mut self.folders[id.index()]
    }

    pub fn leaf(&self, id: LeafId) -> &Leaf<T> {
        &self.leafs[id.index()]
    }

    pub fn leaf_mut(&mut self, id: LeafId) -> &mut Leaf<T> {
        &mut self.leafs[id.index()]
    }

    pub fn leaf_by_id(&self, id: NodeId) -> Option<LeafId> {
        self.by_id.get(&id).copied()
    }

    pub fn leaf_count(&self) -> usize {
        self.leafs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leafs.is_empty()
    }

    /// The folder owning `leaf`.
    pub fn parent_tree(&self, leaf: LeafId) -> FolderId {
        self.leaf(leaf).parent
    }

    /// Sequence of all leafs, subtrees first, in current map order.
    pub fn iter_leafs(&self) -> IterLeafs<'_, T> {
        self.iter_leafs_under(self.root())
    }

    pub fn iter_leafs_under(&self, folder: FolderId) -> IterLeafs<'_, T> {
        IterLeafs::new(self, folder)
    }

    /// Names of the folders containing `leaf`, root first, without the root itself.
    pub fn parent_folders(&self, leaf: LeafId) -> Vec<&str> {
        let mut parents = Vec::new();
        let mut current = Some(self.leaf(leaf).parent);
        while let Some(id) = current {
            let folder = self.folder(id);
            if folder.is_root() {
                break;
            }
            parents.push(folder.name());
            current = folder.parent;
        }
        parents.reverse();
        parents
    }

    /// Accumulated folder paths at which the ancestor chain of `leaf` branches, i.e. every
    /// ancestor that has at least one sibling folder.
    pub fn groupings(&self, leaf: LeafId) -> Vec<String> {
        let mut chain = Vec::new();
        let mut current = self.leaf(leaf).parent;
        while let Some(parent) = self.folder(current).parent {
            chain.push(current);
            current = parent;
        }
        chain.reverse();

        let mut result = Vec::new();
        let mut acc = String::new();
        for id in chain {
            let folder = self.folder(id);
            if !acc.is_empty() {
                acc.push('/');
            }
            acc.push_str(folder.name());
            let siblings = folder
                .parent
                .map(|parent| self.folder(parent).sub_trees.len())
                .unwrap_or(1);
            if siblings > 1 {
                result.push(acc.clone());
            }
        }
        result
    }

    pub fn stats(&self, node: NodeRef) -> NodeStats {
        match node {
            NodeRef::Folder(id) => {
                let folder = self.folder(id);
                match folder.parent {
                    Some(parent) => NodeStats {
                        kind: NodeKind::Tree,
                        depth: self.depth(id),
                        index: folder.index,
                        total: self.folder(parent).sub_trees.len(),
                    },
                    None => NodeStats {
                        kind: NodeKind::Tree,
                        depth: 0,
                        index: 0,
                        total: 1,
                    },
                }
            }
            NodeRef::Leaf(id) => {
                let leaf = self.leaf(id);
                NodeStats {
                    kind: NodeKind::Leaf,
                    depth: self.depth(leaf.parent) + 1,
                    index: leaf.index,
                    total: self.folder(leaf.parent).leafs.len(),
                }
            }
        }
    }

    fn depth(&self, folder: FolderId) -> usize {
        let mut depth = 0;
        let mut current = self.folder(folder).parent;
        while let Some(id) = current {
            depth += 1;
            current = self.folder(id).parent;
        }
        depth
    }

    /// Collapses every chain of single-folder nesting into one folder named with the
    /// joined segments, e.g. `a` > `b` > `c` holding `d.ts` becomes `a/b/c` holding `d.ts`.
    ///
    /// The root keeps its sentinel name and is never merged into its only child.
    pub fn squash(&mut self) {
        let children: Vec<FolderId> = self.folder(self.root()).sub_trees.values().copied().collect();
        for child in children {
            self.squash_folder(child);
        }
    }

    fn squash_folder(&mut self, id: FolderId) {
        while self.folder(id).sub_trees.len() == 1 && self.folder(id).leafs.is_empty() {
            self.absorb_only_child(id);
        }
        let children: Vec<FolderId> = self.folder(id).sub_trees.values().copied().collect();
        for child in children {
            self.squash_folder(child);
        }
    }

    fn absorb_only_child(&mut self, id: FolderId) {
        let Some(&child_id) = self.folder(id).sub_trees.get_index(0).map(|(_, child)| child) else {
            return;
        };
        let child = &mut self.folders[child_id.index()];
        let sub_trees = std::mem::take(&mut child.sub_trees);
        let leafs = std::mem::take(&mut child.leafs);
        let child_name = child.name.clone();

        for &sub in sub_trees.values() {
            self.folders[sub.index()].parent = Some(id);
        }
        for &leaf in leafs.values() {
            self.leafs[leaf.index()].parent = id;
        }

        let folder = &mut self.folders[id.index()];
        let old_name = folder.name.clone();
        let new_name = SmolStr::from(format!("{old_name}/{child_name}"));
        folder.name = new_name.clone();
        folder.sub_trees = sub_trees;
        folder.leafs = leafs;

        if let Some(parent) = folder.parent {
            let parent = &mut self.folders[parent.index()];
            if let Some((position, _, _)) = parent.sub_trees.shift_remove_full(&old_name) {
                parent.sub_trees.shift_insert(position, new_name, id);
            }
        }
    }

    /// Sorts folders and leafs by name, independently, and renumbers their indices.
    pub fn order(&mut self) {
        self.order_folder(self.root());
    }

    fn order_folder(&mut self, id: FolderId) {
        let folder = &mut self.folders[id.index()];
        folder.sub_trees.sort_keys();
        folder.leafs.sort_keys();
        let sub_trees: Vec<FolderId> = folder.sub_trees.values().copied().collect();
        let leafs: Vec<LeafId> = folder.leafs.values().copied().collect();

        for (index, leaf) in leafs.into_iter().enumerate() {
            self.leafs[leaf.index()].index = index;
        }
        for (index, sub) in sub_trees.into_iter().enumerate() {
            self.folders[sub.index()].index = index;
            self.order_folder(sub);
        }
    }
}

impl<T: TreeRecord> PathTree<T> {
    /// Inserts `record` at `segments`, creating the missing folders on the way.
    ///
    /// An empty segment list inserts nothing and returns `Ok(None)`. Segments must be
    /// non-empty and free of `/`, which is reserved for squashed folder names. Record ids
    /// are unique across the tree.
    pub fn push_node<S: AsRef<str>>(
        &mut self,
        record: T,
        segments: &[S],
    ) -> Result<Option<LeafId>, PathTreeError> {
        let Some((file_name, dirs)) = segments.split_last() else {
            return Ok(None);
        };

        let id = record.record_id();
        if let Some(segment) = segments
            .iter()
            .map(AsRef::as_ref)
            .find(|segment| segment.is_empty() || segment.contains('/'))
        {
            return Err(PathTreeError::InvalidSegment {
                id,
                path: join_segments(segments),
                segment: segment.to_owned(),
            });
        }
        if let Some(&existing) = self.by_id.get(&id) {
            let mut existing_path = self.parent_folders(existing).join("/");
            if !existing_path.is_empty() {
                existing_path.push('/');
            }
            existing_path.push_str(self.leaf(existing).name());
            return Err(PathTreeError::DuplicateId {
                id,
                path: join_segments(segments),
                existing: existing_path,
            });
        }

        let mut current = self.root();
        for (depth, segment) in dirs.iter().enumerate() {
            let segment = segment.as_ref();
            let folder = self.folder(current);
            if let Some(&next) = folder.sub_trees.get(segment) {
                current = next;
                continue;
            }
            if folder.leafs.contains_key(segment) {
                return Err(PathTreeError::LeafInTheWay {
                    id,
                    path: join_segments(segments),
                    at: join_segments(&segments[..=depth]),
                });
            }

            let next = FolderId::new(self.folders.len());
            let index = folder.sub_trees.len();
            self.folders
                .push(Folder::new(SmolStr::new(segment), Some(current), index));
            self.folders[current.index()]
                .sub_trees
                .insert(SmolStr::new(segment), next);
            current = next;
        }

        let file_name = file_name.as_ref();
        let folder = self.folder(current);
        if folder.sub_trees.contains_key(file_name) {
            return Err(PathTreeError::FolderInTheWay {
                id,
                path: join_segments(segments),
            });
        }
        if let Some(&existing) = folder.leafs.get(file_name) {
            return Err(PathTreeError::DuplicateLeaf {
                id,
                existing: self.leaf(existing).record.record_id(),
                path: join_segments(segments),
            });
        }

        let leaf = LeafId::new(self.leafs.len());
        let index = folder.leafs.len();
        self.leafs.push(Leaf {
            name: SmolStr::new(file_name),
            parent: current,
            index,
            record,
            color: None,
        });
        self.folders[current.index()]
            .leafs
            .insert(SmolStr::new(file_name), leaf);
        self.by_id.insert(id, leaf);
        Ok(Some(leaf))
    }
}

fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("/")
}
