// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::path_tree::{Leaf, PathTree};
use crate::model::{FolderId, LeafId};

#[derive(Debug, Clone, Copy)]
struct Frame {
    folder: FolderId,
    next_sub_tree: usize,
    next_leaf: usize,
}

/// Depth-first walk over the leafs of a folder.
///
/// Every sub-tree is exhausted before the folder's own leafs are produced.
#[derive(Debug, Clone)]
pub struct IterLeafs<'a, T> {
    tree: &'a PathTree<T>,
    stack: Vec<Frame>,
}

impl<'a, T> IterLeafs<'a, T> {
    pub(super) fn new(tree: &'a PathTree<T>, folder: FolderId) -> Self {
        Self {
            tree,
            stack: vec![Frame {
                folder,
                next_sub_tree: 0,
                next_leaf: 0,
            }],
        }
    }
}

impl<'a, T> Iterator for IterLeafs<'a, T> {
    type Item = (LeafId, &'a Leaf<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        loop {
            let frame = self.stack.last_mut()?;
            let folder = tree.folder(frame.folder);

            if let Some((_, &sub_tree)) = folder.sub_trees().get_index(frame.next_sub_tree) {
                frame.next_sub_tree += 1;
                self.stack.push(Frame {
                    folder: sub_tree,
                    next_sub_tree: 0,
                    next_leaf: 0,
                });
                continue;
            }

            if let Some((_, &leaf)) = folder.leafs().get_index(frame.next_leaf) {
                frame.next_leaf += 1;
                return Some((leaf, tree.leaf(leaf)));
            }

            self.stack.pop();
        }
    }
}
