// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dirgraph: folder-aware dependency graph explorer core.
//!
//! Files of a dependency graph are arranged into a path tree, colored by position, wrapped
//! in a render graph with virtual folder and package nodes, and mirrored into a tag tree
//! the UI annotates.

pub mod annotate;
pub mod augment;
pub mod color;
pub mod config;
pub mod logging;
pub mod model;
pub mod render;
pub mod tree;
pub mod view;
