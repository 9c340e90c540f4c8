// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::hsv::{scale, Hsv};
use crate::model::FolderId;
use crate::tree::{NodeRef, PathTree};

/// Saturation lost per folder level.
const SATURATION_DECAY: f64 = 0.2;
const MIN_SATURATION: f64 = 0.2;
const MAX_SATURATION: f64 = 0.95;

/// Colors every folder and leaf of `tree` from its position alone.
///
/// Sibling folders are spread evenly around the hue wheel starting from the parent's hue,
/// saturation fades with depth and value is passed through. Files take the color of the
/// folder holding them. Run after [`PathTree::order`]; reordering invalidates the result.
pub fn paint<T>(tree: &mut PathTree<T>) {
    let root = tree.root();
    tree.folder_mut(root).data.color = Some(Hsv::WHITE);
    paint_children(tree, root, Hsv::WHITE);
}

/// Color of a child folder given its parent's color and its rank among `total` siblings.
pub fn child_color(parent: Hsv, index: usize, total: usize) -> Hsv {
    let h = (parent.h + 360.0 * index as f64 / total.max(1) as f64) % 360.0;
    let s = if parent.s == 0.0 {
        1.0
    } else {
        parent.s - SATURATION_DECAY
    };
    let s = scale(s, 0.0, 1.0, MIN_SATURATION, MAX_SATURATION);
    Hsv::new(h, s, parent.v)
}

fn paint_children<T>(tree: &mut PathTree<T>, folder: FolderId, color: Hsv) {
    let leafs: Vec<_> = tree.folder(folder).leafs().values().copied().collect();
    for leaf in leafs {
        tree.leaf_mut(leaf).color = Some(color);
    }

    let sub_trees: Vec<_> = tree.folder(folder).sub_trees().values().copied().collect();
    for sub_tree in sub_trees {
        let stats = tree.stats(NodeRef::Folder(sub_tree));
        let child = child_color(color, stats.index, stats.total);
        tree.folder_mut(sub_tree).data.color = Some(child);
        paint_children(tree, sub_tree, child);
    }
}
