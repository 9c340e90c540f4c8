// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deterministic tree-position coloring.
//!
//! Colors are never stored per entity by the producer; they are derived from where a file
//! sits in the ordered path tree so the graph and the explorer agree on them.

mod hsv;
mod paint;

pub use hsv::{hsv_to_rgb, scale, Hsv, Rgb};
pub use paint::{child_color, paint};
