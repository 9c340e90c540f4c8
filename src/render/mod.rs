// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plain-text dumps of the path tree and the annotation tree.
//!
//! One entry per line, one space of indentation per level, folders before files. The output
//! is deterministic for an ordered tree and doubles as the regression oracle in tests.

mod annotations;
mod text;
mod tree;

pub use annotations::{render_annotation_tree, render_explorer};
pub use tree::{render_path_tree, render_path_tree_colors, render_path_tree_with};
