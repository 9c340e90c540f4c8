// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Load pipeline: raw graph, path tree, squash, order, paint, render graph, annotations.
//!
//! The stages must run in that order: coloring reads the ordered sibling ranks and the
//! annotation tree copies the colors once.

use thiserror::Error;
use tracing::{debug, warn};

use crate::annotate::AnnotationTree;
use crate::augment::{build_xgraph, VirtualDirMode, XGraph};
use crate::color::paint;
use crate::config::BuildOptions;
use crate::model::{Graph, GraphNode};
use crate::tree::{PathTree, PathTreeError};

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("invalid graph json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Tree(#[from] PathTreeError),
}

/// Pushes every node at its path, then squashes (if asked), orders and paints the tree.
///
/// A node whose id was already pushed is skipped, matching [`build_xgraph`].
pub fn build_path_tree(graph: &Graph, squash: bool) -> Result<PathTree<GraphNode>, PathTreeError> {
    let mut tree = PathTree::new();
    for node in &graph.nodes {
        let segments = node.path_segments();
        match tree.push_node(node.clone(), segments.as_slice()) {
            Ok(Some(_)) => {}
            Ok(None) => debug!(id = node.id, "node has no path, left out of the tree"),
            Err(PathTreeError::DuplicateId { id, path, existing }) => {
                warn!(id, %path, %existing, "duplicate node id, keeping the first one");
            }
            Err(err) => return Err(err),
        }
    }
    if squash {
        tree.squash();
    }
    tree.order();
    paint(&mut tree);
    debug!(leafs = tree.leaf_count(), squash, "built path tree");
    Ok(tree)
}

/// Everything derived from one graph load.
#[derive(Debug)]
pub struct GraphView {
    graph: Graph,
    tree: PathTree<GraphNode>,
    xgraph: XGraph,
    annotations: AnnotationTree,
}

impl GraphView {
    pub fn load(graph: Graph, options: &BuildOptions) -> Result<Self, ViewError> {
        let tree = build_path_tree(&graph, options.squash)?;
        let xgraph = build_xgraph(&graph, &tree, options.dir_mode);
        let annotations = AnnotationTree::from_tree(&tree);
        Ok(Self {
            graph,
            tree,
            xgraph,
            annotations,
        })
    }

    pub fn from_json(json: &str, options: &BuildOptions) -> Result<Self, ViewError> {
        let graph: Graph = serde_json::from_str(json)?;
        Self::load(graph, options)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn tree(&self) -> &PathTree<GraphNode> {
        &self.tree
    }

    pub fn xgraph(&self) -> &XGraph {
        &self.xgraph
    }

    pub fn annotations(&self) -> &AnnotationTree {
        &self.annotations
    }

    pub fn annotations_mut(&mut self) -> &mut AnnotationTree {
        &mut self.annotations
    }

    /// Recomputes the render graph with another folder policy. Tags are kept.
    pub fn rebuild_xgraph(&mut self, mode: VirtualDirMode) -> &XGraph {
        self.xgraph = build_xgraph(&self.graph, &self.tree, mode);
        &self.xgraph
    }
}
