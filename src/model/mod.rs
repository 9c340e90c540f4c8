// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Input graph types and arena ids.
//!
//! The graph is the flat node/link list written by the scanner; everything else in the
//! crate is derived from it.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod graph;
pub mod ids;

pub use graph::{graph_schema, Graph, GraphLink, GraphNode, PathSegments, TreeRecord};
pub use ids::{FolderId, FolderStateId, Idx, LeafId, NodeId};
