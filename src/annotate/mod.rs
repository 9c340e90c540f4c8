// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interaction state layered over a colored path tree.
//!
//! Tags are open string maps (`selected`, `highlighted`, `expanded`, ...). Each folder keeps a
//! reverse index of the child folders whose subtree holds a given key, which lets
//! [`AnnotationTree::untag_all`] clear a key by visiting only the branches that carry it.

mod explorer;
mod message;
mod state;
#[cfg(test)]
mod tests;

pub use explorer::EXPANDED;
pub use message::{Listener, TagMessage};
pub use state::{AnnotationTree, FolderState, TagMap};
