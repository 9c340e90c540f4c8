// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::marker::PhantomData;

/// A typed index into one of the tree arenas.
///
/// The tag parameter keeps folder and leaf indices from being mixed up; the
/// value is only meaningful for the arena that handed it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Idx<T> {
    value: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Idx<T> {
    pub(crate) fn new(value: usize) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub fn index(self) -> usize {
        self.value
    }
}

impl<T> fmt::Display for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FolderIdTag {}
pub type FolderId = Idx<FolderIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LeafIdTag {}
pub type LeafId = Idx<LeafIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FolderStateIdTag {}
pub type FolderStateId = Idx<FolderStateIdTag>;

/// Identifier of a node in the dependency graph, as emitted by the producer.
pub type NodeId = i64;
