// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::graph::{Graph, GraphLink, GraphNode};
use super::ids::NodeId;
use crate::tree::PathTree;

/// Six files spread over nested folders; ids follow the listed order.
pub(crate) const CANONICAL_PATHS: [&[&str]; 6] = [
    &["foo", "bar", "a.ts"],
    &["foo", "bar", "b.ts"],
    &["foo", "baz", "c.ts"],
    &["foo", "d.ts"],
    &["a", "b", "c", "d", "e.ts"],
    &["f.ts"],
];

pub(crate) fn tree_from_paths(paths: &[&[&str]]) -> PathTree<NodeId> {
    let mut tree = PathTree::new();
    for (id, path) in paths.iter().enumerate() {
        tree.push_node(id as NodeId, *path).expect("push fixture path");
    }
    tree
}

/// The canonical tree, pushed and ordered but not squashed.
pub(crate) fn canonical_tree() -> PathTree<NodeId> {
    let mut tree = tree_from_paths(&CANONICAL_PATHS);
    tree.order();
    tree
}

/// A small two-package graph: `app` imports `lib`, which has an internal cycle.
pub(crate) fn two_package_graph() -> Graph {
    Graph {
        nodes: vec![
            GraphNode::new(1, "src", "main.ts").with_group("app"),
            GraphNode::new(2, "src/cli", "args.ts").with_group("app"),
            GraphNode::new(3, "src", "index.ts").with_group("lib"),
            GraphNode::new(4, "src/util", "fmt.ts").with_group("lib"),
        ],
        links: vec![
            GraphLink::new(1, 2),
            GraphLink::new(1, 3),
            GraphLink::new(3, 4),
            GraphLink::cyclic(4, 3),
        ],
        enable_gui: false,
    }
}
