// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::state::AnnotationTree;
use crate::model::FolderStateId;

/// Tag key holding the explorer fold state. Folders without it are collapsed.
pub const EXPANDED: &str = "expanded";
const EXPANDED_VALUE: &str = "true";

impl AnnotationTree {
    pub fn is_expanded(&self, id: FolderStateId) -> bool {
        self.has_tag(id, EXPANDED)
    }

    pub fn expand(&mut self, id: FolderStateId) {
        self.tag(id, EXPANDED, EXPANDED_VALUE);
    }

    pub fn collapse(&mut self, id: FolderStateId) {
        self.untag(id, EXPANDED);
    }

    pub fn expand_all(&mut self, id: FolderStateId) {
        self.tag_all_folders(id, EXPANDED, EXPANDED_VALUE);
    }

    pub fn collapse_all(&mut self, id: FolderStateId) {
        self.untag_all(id, EXPANDED);
    }

    /// Expands every folder along `path`, stopping at the first missing segment.
    pub fn expand_path<S: AsRef<str>>(&mut self, id: FolderStateId, path: &[S]) {
        let mut current = id;
        for segment in path {
            let Some(next) = self.child(current, segment.as_ref()) else {
                return;
            };
            self.expand(next);
            current = next;
        }
    }

    /// Expands the folders leading to the end of `path` and collapses the folder it names
    /// together with everything below it.
    pub fn collapse_path<S: AsRef<str>>(&mut self, id: FolderStateId, path: &[S]) {
        let Some((last, dirs)) = path.split_last() else {
            return;
        };
        if self.folder_at(id, path).is_none() {
            return;
        }
        self.expand_path(id, dirs);
        if let Some(target) = self
            .folder_at(id, dirs)
            .and_then(|parent| self.child(parent, last.as_ref()))
        {
            self.collapse_all(target);
        }
    }
}
