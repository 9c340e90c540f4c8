// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Turns the raw graph into the one the force layout draws.
//!
//! Virtual folder and package nodes add attraction between files that live together; the
//! adjacency lists let highlight and context-menu code find neighbors without scanning
//! every link.

mod mode;
mod xgraph;

pub use mode::{ParseVirtualDirModeError, VirtualDirMode};
pub use xgraph::{
    build_xgraph, hash_id, XGraph, XLink, XNode, CYCLIC_LINK_COLOR, FOLDER_NAMESPACE,
    GROUP_NAMESPACE,
};
