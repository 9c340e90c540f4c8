// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tracing::{debug, warn};

use super::mode::VirtualDirMode;
use crate::color::Hsv;
use crate::model::{Graph, GraphLink, GraphNode, NodeId, TreeRecord};
use crate::tree::PathTree;

pub const FOLDER_NAMESPACE: &str = "__dep_tree_folder__";
pub const GROUP_NAMESPACE: &str = "__dep_tree_group__";
pub const CYCLIC_LINK_COLOR: &str = "indianred";

/// Largest integer a JavaScript number holds exactly.
const MAX_SAFE_ID: u64 = (1 << 53) - 1;

/// Stable id of a synthetic node: the first eight bytes of the blake3 hash of
/// `namespace + name`, truncated to 53 bits.
pub fn hash_id(namespace: &str, name: &str) -> NodeId {
    let mut hasher = blake3::Hasher::new();
    hasher.update(namespace.as_bytes());
    hasher.update(name.as_bytes());
    let hash = hasher.finalize();
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&hash.as_bytes()[..8]);
    (u64::from_le_bytes(prefix) & MAX_SAFE_ID) as NodeId
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XNode {
    #[serde(flatten)]
    pub node: GraphNode,
    pub is_dir: bool,
    pub is_package: bool,
    /// Display color, `rgb(r, g, b)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "__color", skip_serializing_if = "Option::is_none")]
    pub hsv: Option<Hsv>,
    /// Ids of the nodes at the other end of every incident link, once per link.
    pub neighbors: Vec<NodeId>,
    /// Positions of the incident links in [`XGraph::links`].
    pub links: Vec<usize>,
}

impl XNode {
    fn real(node: GraphNode) -> Self {
        Self {
            node,
            is_dir: false,
            is_package: false,
            color: None,
            hsv: None,
            neighbors: Vec::new(),
            links: Vec::new(),
        }
    }

    fn synthetic(id: NodeId, is_dir: bool) -> Self {
        Self {
            is_dir,
            is_package: !is_dir,
            ..Self::real(GraphNode::new(id, "", ""))
        }
    }

    pub fn id(&self) -> NodeId {
        self.node.id
    }

    pub fn is_virtual(&self) -> bool {
        self.is_dir || self.is_package
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XLink {
    pub from: NodeId,
    pub to: NodeId,
    pub is_cyclic: bool,
    pub is_dir: bool,
    pub is_package: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl XLink {
    fn real(link: &GraphLink) -> Self {
        Self {
            from: link.from,
            to: link.to,
            is_cyclic: link.is_cyclic,
            is_dir: false,
            is_package: false,
            color: link.is_cyclic.then(|| CYCLIC_LINK_COLOR.to_owned()),
        }
    }

    fn synthetic(from: NodeId, to: NodeId, is_dir: bool) -> Self {
        Self {
            from,
            to,
            is_cyclic: false,
            is_dir,
            is_package: !is_dir,
            color: None,
        }
    }
}

/// The renderable graph: input nodes and links plus virtual folder/package nodes, with
/// adjacency in both directions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XGraph {
    pub nodes: Vec<XNode>,
    pub links: Vec<XLink>,
    #[serde(skip)]
    index: HashMap<NodeId, usize>,
}

impl XGraph {
    pub fn node(&self, id: NodeId) -> Option<&XNode> {
        self.index.get(&id).map(|&idx| &self.nodes[idx])
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = &XNode> + '_ {
        self.node(id)
            .into_iter()
            .flat_map(|node| node.neighbors.iter())
            .filter_map(|&neighbor| self.node(neighbor))
    }

    pub fn incident_links(&self, id: NodeId) -> impl Iterator<Item = &XLink> + '_ {
        self.node(id)
            .into_iter()
            .flat_map(|node| node.links.iter())
            .map(|&link| &self.links[link])
    }

    fn insert_node(&mut self, node: XNode) -> bool {
        if self.index.contains_key(&node.id()) {
            return false;
        }
        self.index.insert(node.id(), self.nodes.len());
        self.nodes.push(node);
        true
    }

    fn ensure_synthetic(&mut self, id: NodeId, is_dir: bool) {
        if !self.contains(id) {
            self.insert_node(XNode::synthetic(id, is_dir));
        }
    }
}

/// Builds the renderable graph from the raw input and the colored path tree built from it.
///
/// The input is not modified, so repeated builds from the same graph produce the same
/// nodes, links and synthetic ids.
pub fn build_xgraph<T: TreeRecord>(
    graph: &Graph,
    tree: &PathTree<T>,
    mode: VirtualDirMode,
) -> XGraph {
    let mut xgraph = XGraph {
        nodes: Vec::with_capacity(graph.nodes.len()),
        links: Vec::with_capacity(graph.links.len()),
        index: HashMap::with_capacity(graph.nodes.len()),
    };

    for node in &graph.nodes {
        let mut xnode = XNode::real(node.clone());
        if let Some(leaf) = tree.leaf_by_id(node.id) {
            let hsv = tree.leaf(leaf).color;
            xnode.color = hsv.map(|hsv| hsv.to_rgb().to_string());
            xnode.hsv = hsv;
        }
        if !xgraph.insert_node(xnode) {
            warn!(id = node.id, "duplicate node id, keeping the first one");
        }
    }

    for link in &graph.links {
        if xgraph.contains(link.from) && xgraph.contains(link.to) {
            xgraph.links.push(XLink::real(link));
        } else {
            warn!(from = link.from, to = link.to, "dropping link to unknown node");
        }
    }

    let groups: BTreeSet<&str> = graph
        .nodes
        .iter()
        .map(|node| node.group.as_deref().unwrap_or(""))
        .collect();
    let with_packages = groups.len() > 1;

    let mut seen = BTreeSet::new();
    for node in &graph.nodes {
        if !seen.insert(node.id) {
            continue;
        }
        if with_packages {
            let group = node.group.as_deref().unwrap_or("");
            let package = hash_id(GROUP_NAMESPACE, group);
            xgraph.ensure_synthetic(package, false);
            xgraph.links.push(XLink::synthetic(node.id, package, false));
        }

        let Some(leaf) = tree.leaf_by_id(node.id) else {
            continue;
        };
        let parents = tree.parent_folders(leaf);
        match mode {
            VirtualDirMode::Ignore => {}
            VirtualDirMode::OnlyOne => {
                let folder = hash_id(FOLDER_NAMESPACE, &parents.join("/"));
                xgraph.ensure_synthetic(folder, true);
                xgraph.links.push(XLink::synthetic(node.id, folder, true));
            }
            VirtualDirMode::All => {
                let mut acc = String::new();
                for parent in parents {
                    if !acc.is_empty() {
                        acc.push('/');
                    }
                    acc.push_str(parent);
                    let folder = hash_id(FOLDER_NAMESPACE, &acc);
                    xgraph.ensure_synthetic(folder, true);
                    xgraph.links.push(XLink::synthetic(node.id, folder, true));
                }
            }
        }
    }

    for (position, link) in xgraph.links.iter().enumerate() {
        let (Some(&a), Some(&b)) = (xgraph.index.get(&link.from), xgraph.index.get(&link.to))
        else {
            continue;
        };
        xgraph.nodes[a].neighbors.push(link.to);
        xgraph.nodes[a].links.push(position);
        xgraph.nodes[b].neighbors.push(link.from);
        xgraph.nodes[b].links.push(position);
    }

    let packages = if with_packages { groups.len() } else { 0 };
    debug!(
        nodes = xgraph.nodes.len(),
        links = xgraph.links.len(),
        packages,
        mode = %mode,
        "built render graph"
    );
    xgraph
}
