// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use smol_str::SmolStr;

use super::ids::NodeId;

/// Path segments of a single record. Most source trees are shallow enough to stay inline.
pub type PathSegments = SmallVec<[SmolStr; 8]>;

/// Records stored as leafs of a [`crate::tree::PathTree`] expose a stable id.
pub trait TreeRecord {
    fn record_id(&self) -> NodeId;
}

impl TreeRecord for NodeId {
    fn record_id(&self) -> NodeId {
        *self
    }
}

/// The raw dependency graph as produced by the file scanner.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
    #[serde(default)]
    pub enable_gui: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: NodeId,
    pub file_name: String,
    pub dir_name: String,
    /// Explicit path segments. When empty they are derived from `group`, `dir_name` and
    /// `file_name`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path_buf: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub is_entrypoint: bool,
    #[serde(default)]
    pub loc: u64,
    #[serde(default)]
    pub size: u64,
}

impl GraphNode {
    pub fn new(id: NodeId, dir_name: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            id,
            file_name: file_name.into(),
            dir_name: dir_name.into(),
            path_buf: Vec::new(),
            group: None,
            is_entrypoint: false,
            loc: 0,
            size: 0,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_path_buf<I, S>(mut self, path_buf: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path_buf = path_buf.into_iter().map(Into::into).collect();
        self
    }

    /// Where this node lives in the path tree.
    ///
    /// `dir_name` is split on `/`; empty and `.` segments are dropped so `./src/` and
    /// `/src` both land under `src`. A non-empty group is prepended so every package gets
    /// its own top-level folder.
    pub fn path_segments(&self) -> PathSegments {
        if !self.path_buf.is_empty() {
            return self.path_buf.iter().map(SmolStr::new).collect();
        }

        let mut segments = PathSegments::new();
        if let Some(group) = self.group.as_deref().filter(|group| !group.is_empty()) {
            segments.push(SmolStr::new(group));
        }
        segments.extend(
            self.dir_name
                .split('/')
                .filter(|segment| !segment.is_empty() && *segment != ".")
                .map(SmolStr::new),
        );
        if !self.file_name.is_empty() {
            segments.push(SmolStr::new(&self.file_name));
        }
        segments
    }
}

impl TreeRecord for GraphNode {
    fn record_id(&self) -> NodeId {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GraphLink {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default)]
    pub is_cyclic: bool,
}

impl GraphLink {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self {
            from,
            to,
            is_cyclic: false,
        }
    }

    pub fn cyclic(from: NodeId, to: NodeId) -> Self {
        Self {
            from,
            to,
            is_cyclic: true,
        }
    }
}

/// JSON schema of the accepted input graph.
pub fn graph_schema() -> schemars::Schema {
    schemars::schema_for!(Graph)
}
