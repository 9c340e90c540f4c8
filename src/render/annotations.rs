// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::text::{push_indent, push_tags};
use crate::annotate::AnnotationTree;
use crate::model::FolderStateId;

/// Dumps the annotation tree the way [`super::render_path_tree`] dumps a path tree, with each
/// entry followed by its tags as ` [k=v, ...]`. An untagged tree renders exactly like the
/// sorted path tree it was built from, minus the leaf ids.
pub fn render_annotation_tree(tree: &AnnotationTree) -> String {
    let mut lines = Vec::new();
    annotation_lines(tree, tree.root(), 0, &mut lines);
    lines.join("\n")
}

fn annotation_lines(tree: &AnnotationTree, id: FolderStateId, indent: usize, lines: &mut Vec<String>) {
    let folder = tree.folder(id);
    let mut line = String::new();
    push_indent(&mut line, indent);
    line.push_str(folder.name());
    push_tags(&mut line, folder.tags());
    lines.push(line);

    for &child in folder.folders().values() {
        annotation_lines(tree, child, indent + 1, lines);
    }
    for name in folder.files().keys() {
        let mut line = String::new();
        push_indent(&mut line, indent + 1);
        line.push_str(name);
        if let Some(tags) = folder.file_tags(name) {
            push_tags(&mut line, tags);
        }
        lines.push(line);
    }
}

/// File-explorer listing: folders as `> name`, files as plain names, and the contents of a
/// folder only when it is expanded. The root line itself is omitted.
pub fn render_explorer(tree: &AnnotationTree) -> String {
    let mut lines = Vec::new();
    explorer_lines(tree, tree.root(), 0, &mut lines);
    lines.join("\n")
}

fn explorer_lines(tree: &AnnotationTree, id: FolderStateId, indent: usize, lines: &mut Vec<String>) {
    if !tree.is_expanded(id) {
        return;
    }
    let folder = tree.folder(id);
    for (name, &child) in folder.folders() {
        let mut line = String::new();
        push_indent(&mut line, indent);
        line.push_str("> ");
        line.push_str(name);
        lines.push(line);
        explorer_lines(tree, child, indent + 1, lines);
    }
    for name in folder.files().keys() {
        let mut line = String::new();
        push_indent(&mut line, indent);
        line.push_str(name);
        lines.push(line);
    }
}
