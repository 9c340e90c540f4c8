// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use dirgraph::model::{Graph, GraphLink, GraphNode, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectParams {
    pub packages: usize,
    pub depth: usize,
    pub dirs_per_level: usize,
    pub files_per_dir: usize,
    pub imports_per_file: usize,
}

impl ProjectParams {
    pub const fn new(
        packages: usize,
        depth: usize,
        dirs_per_level: usize,
        files_per_dir: usize,
        imports_per_file: usize,
    ) -> Self {
        Self {
            packages,
            depth,
            dirs_per_level,
            files_per_dir,
            imports_per_file,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    MediumWide,
    LargeDeep,
}

impl Case {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumWide => "medium_wide",
            Self::LargeDeep => "large_deep",
        }
    }

    pub const fn params(self) -> ProjectParams {
        match self {
            Self::Small => ProjectParams::new(1, 2, 3, 4, 2),
            Self::MediumWide => ProjectParams::new(3, 2, 8, 6, 3),
            Self::LargeDeep => ProjectParams::new(4, 4, 4, 5, 4),
        }
    }
}

fn dir_paths(params: ProjectParams) -> Vec<String> {
    let mut level = vec![String::from("src")];
    let mut all = level.clone();
    for depth in 0..params.depth {
        let mut next = Vec::with_capacity(level.len() * params.dirs_per_level);
        for parent in &level {
            for idx in 0..params.dirs_per_level {
                next.push(format!("{parent}/d{depth}_{idx}"));
            }
        }
        all.extend(next.iter().cloned());
        level = next;
    }
    all
}

/// Deterministic project generator.
///
/// - Every package gets the same folder layout under `src/`.
/// - Imports point to files with a lower id, plus one cyclic back edge per folder.
pub fn project(params: ProjectParams) -> Graph {
    let dirs = dir_paths(params);
    let mut nodes = Vec::new();
    for package in 0..params.packages {
        for dir in &dirs {
            for file in 0..params.files_per_dir {
                let id = nodes.len() as NodeId;
                let mut node = GraphNode::new(id, dir.clone(), format!("f{file}.ts"));
                if params.packages > 1 {
                    node = node.with_group(format!("pkg{package}"));
                }
                nodes.push(node);
            }
        }
    }

    let mut links = Vec::new();
    let total = nodes.len();
    for from in 0..total {
        for k in 1..=params.imports_per_file {
            let stride = k * 7 + 1;
            if from >= stride {
                links.push(GraphLink::new(from as NodeId, (from - stride) as NodeId));
            }
        }
        if from % params.files_per_dir.max(1) == 0 && from + 1 < total {
            links.push(GraphLink::cyclic(from as NodeId, (from + 1) as NodeId));
        }
    }

    Graph {
        nodes,
        links,
        enable_gui: false,
    }
}

pub fn fixture(case: Case) -> Graph {
    project(case.params())
}
