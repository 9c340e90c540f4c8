// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Hierarchical path tree.
//!
//! Built once per graph load from the flat node list: push every record, then `squash`,
//! then `order`. Coloring and the annotation tree both depend on the ordered shape.

mod iter;
mod path_tree;

pub use iter::IterLeafs;
pub use path_tree::{
    Folder, FolderData, Leaf, NodeKind, NodeRef, NodeStats, PathTree, PathTreeError, ROOT_NAME,
};
