// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::text::push_indent;
use crate::color::Hsv;
use crate::model::{FolderId, TreeRecord};
use crate::tree::{Folder, Leaf, PathTree};

/// Renders `tree` one entry per line, indented by depth, folders before files.
///
/// Leafs are suffixed with ` -> <id>`.
pub fn render_path_tree<T: TreeRecord>(tree: &PathTree<T>) -> String {
    render_path_tree_with(tree, |_| String::new(), leaf_id_suffix)
}

/// Same layout as [`render_path_tree`], with the computed color appended to every line as
/// `(h, s, v)`.
pub fn render_path_tree_colors<T: TreeRecord>(tree: &PathTree<T>) -> String {
    render_path_tree_with(
        tree,
        |folder| color_suffix(folder.data.color),
        |leaf| {
            let mut line = leaf_id_suffix(leaf);
            line.push_str(&color_suffix(leaf.color));
            line
        },
    )
}

pub fn render_path_tree_with<T, F, L>(tree: &PathTree<T>, render_folder: F, render_leaf: L) -> String
where
    F: Fn(&Folder) -> String,
    L: Fn(&Leaf<T>) -> String,
{
    let mut lines = Vec::new();
    render_folder_lines(tree, tree.root(), 0, &render_folder, &render_leaf, &mut lines);
    lines.join("\n")
}

fn render_folder_lines<T, F, L>(
    tree: &PathTree<T>,
    id: FolderId,
    indent: usize,
    render_folder: &F,
    render_leaf: &L,
    lines: &mut Vec<String>,
) where
    F: Fn(&Folder) -> String,
    L: Fn(&Leaf<T>) -> String,
{
    let folder = tree.folder(id);
    let mut line = String::new();
    push_indent(&mut line, indent);
    line.push_str(folder.name());
    line.push_str(&render_folder(folder));
    lines.push(line);

    for &sub_tree in folder.sub_trees().values() {
        render_folder_lines(tree, sub_tree, indent + 1, render_folder, render_leaf, lines);
    }
    for (name, &leaf) in folder.leafs() {
        let mut line = String::new();
        push_indent(&mut line, indent + 1);
        line.push_str(name);
        line.push_str(&render_leaf(tree.leaf(leaf)));
        lines.push(line);
    }
}

fn leaf_id_suffix<T: TreeRecord>(leaf: &Leaf<T>) -> String {
    let mut buf = itoa::Buffer::new();
    format!(" -> {}", buf.format(leaf.record().record_id()))
}

fn color_suffix(color: Option<Hsv>) -> String {
    match color {
        Some(Hsv { h, s, v }) => format!(" ({h}, {s:.4}, {v})"),
        None => " (-)".to_owned(),
    }
}

impl<T: TreeRecord> fmt::Display for PathTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_path_tree(self))
    }
}
