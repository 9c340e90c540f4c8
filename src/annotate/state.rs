// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::message::{Listener, TagMessage};
use crate::color::{Hsv, Rgb};
use crate::model::{FolderId, FolderStateId, LeafId};
use crate::tree::PathTree;

pub type TagMap = BTreeMap<SmolStr, SmolStr>;

/// Annotation state of one folder.
pub struct FolderState {
    name: SmolStr,
    parent: Option<FolderStateId>,
    folders: IndexMap<SmolStr, FolderStateId>,
    files: IndexMap<SmolStr, LeafId>,
    tags: TagMap,
    file_tags: BTreeMap<SmolStr, TagMap>,
    /// For every key, the child folders whose subtree holds that key somewhere.
    tagged_folders: HashMap<SmolStr, BTreeSet<SmolStr>>,
    color: Rgb,
    listeners: IndexMap<SmolStr, Listener>,
}

impl FolderState {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<FolderStateId> {
        self.parent
    }

    pub fn folders(&self) -> &IndexMap<SmolStr, FolderStateId> {
        &self.folders
    }

    /// Direct files, mapped to their leaf in the path tree this state was built from.
    pub fn files(&self) -> &IndexMap<SmolStr, LeafId> {
        &self.files
    }

    pub fn tags(&self) -> &TagMap {
        &self.tags
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(SmolStr::as_str)
    }

    pub fn file_tags(&self, file: &str) -> Option<&TagMap> {
        self.file_tags.get(file)
    }

    pub fn tagged_folders(&self, key: &str) -> Option<&BTreeSet<SmolStr>> {
        self.tagged_folders.get(key)
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn listener_names(&self) -> impl Iterator<Item = &str> {
        self.listeners.keys().map(SmolStr::as_str)
    }

    fn holds(&self, key: &str) -> bool {
        self.tags.contains_key(key)
            || self.tagged_folders.contains_key(key)
            || self.file_tags.values().any(|tags| tags.contains_key(key))
    }
}

impl fmt::Debug for FolderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FolderState")
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("folders", &self.folders)
            .field("files", &self.files)
            .field("tags", &self.tags)
            .field("file_tags", &self.file_tags)
            .field("tagged_folders", &self.tagged_folders)
            .field("color", &self.color)
            .field("listeners", &self.listeners.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Mutable tag state mirroring the shape of a colored [`PathTree`].
///
/// The structure is fixed at construction; only tags and listeners change afterwards. Every
/// mutation notifies the listeners of the folder it was issued against, and nothing else.
/// Calls naming a child folder or file that does not exist do nothing.
#[derive(Debug)]
pub struct AnnotationTree {
    folders: Vec<FolderState>,
}

impl AnnotationTree {
    pub fn from_tree<T>(tree: &PathTree<T>) -> Self {
        let mut out = Self {
            folders: Vec::new(),
        };
        out.mirror(tree, tree.root(), None);
        out
    }

    fn mirror<T>(
        &mut self,
        tree: &PathTree<T>,
        source: FolderId,
        parent: Option<FolderStateId>,
    ) -> FolderStateId {
        let folder = tree.folder(source);
        let id = FolderStateId::new(self.folders.len());

        let mut files: IndexMap<SmolStr, LeafId> = folder
            .leafs()
            .iter()
            .map(|(name, &leaf)| (name.clone(), leaf))
            .collect();
        files.sort_keys();

        self.folders.push(FolderState {
            name: SmolStr::new(folder.name()),
            parent,
            folders: IndexMap::new(),
            files,
            tags: TagMap::new(),
            file_tags: BTreeMap::new(),
            tagged_folders: HashMap::new(),
            color: folder.data.color.unwrap_or(Hsv::WHITE).to_rgb(),
            listeners: IndexMap::new(),
        });

        let mut sub_trees: Vec<(&SmolStr, FolderId)> = folder
            .sub_trees()
            .iter()
            .map(|(name, &sub_tree)| (name, sub_tree))
            .collect();
        sub_trees.sort_by(|a, b| a.0.cmp(b.0));
        for (name, sub_tree) in sub_trees {
            let child = self.mirror(tree, sub_tree, Some(id));
            self.folders[id.index()].folders.insert(name.clone(), child);
        }
        id
    }

    pub fn root(&self) -> FolderStateId {
        FolderStateId::new(0)
    }

    pub fn folder(&self, id: FolderStateId) -> &FolderState {
        &self.folders[id.index()]
    }

    fn state_mut(&mut self, id: FolderStateId) -> &mut FolderState {
        &mut self.folders[id.index()]
    }

    pub fn child(&self, id: FolderStateId, name: &str) -> Option<FolderStateId> {
        self.folder(id).folders.get(name).copied()
    }

    /// Follows `path` folder by folder starting at `id`.
    pub fn folder_at<S: AsRef<str>>(&self, id: FolderStateId, path: &[S]) -> Option<FolderStateId> {
        path.iter()
            .try_fold(id, |current, segment| self.child(current, segment.as_ref()))
    }

    pub fn has_tag(&self, id: FolderStateId, key: &str) -> bool {
        self.folder(id).tags.contains_key(key)
    }

    pub fn file_has_tag(&self, id: FolderStateId, file: &str, key: &str) -> bool {
        self.folder(id)
            .file_tags
            .get(file)
            .is_some_and(|tags| tags.contains_key(key))
    }

    /// Stores `callback` under `name`, replacing any listener already registered with it.
    pub fn register_listener<F>(&mut self, id: FolderStateId, name: impl Into<SmolStr>, callback: F)
    where
        F: FnMut(&TagMessage) + 'static,
    {
        self.state_mut(id)
            .listeners
            .insert(name.into(), Box::new(callback));
    }

    pub fn unregister_listener(&mut self, id: FolderStateId, name: &str) -> bool {
        self.state_mut(id).listeners.shift_remove(name).is_some()
    }

    pub fn tag(&mut self, id: FolderStateId, key: impl Into<SmolStr>, value: impl Into<SmolStr>) {
        let key = key.into();
        let value = value.into();
        self.state_mut(id).tags.insert(key.clone(), value.clone());
        self.claim(id, &key);
        self.notify(id, TagMessage::Tag { key, value });
    }

    pub fn untag(&mut self, id: FolderStateId, key: &str) {
        self.state_mut(id).tags.remove(key);
        self.release(id, key);
        self.notify(id, TagMessage::Untag { key: key.into() });
    }

    pub fn tag_file(
        &mut self,
        id: FolderStateId,
        file: &str,
        key: impl Into<SmolStr>,
        value: impl Into<SmolStr>,
    ) {
        let state = self.state_mut(id);
        let Some((file, _)) = state.files.get_key_value(file) else {
            return;
        };
        let file = file.clone();
        let key = key.into();
        let value = value.into();
        state
            .file_tags
            .entry(file.clone())
            .or_default()
            .insert(key.clone(), value.clone());
        self.claim(id, &key);
        self.notify(id, TagMessage::TagFile { file, key, value });
    }

    pub fn untag_file(&mut self, id: FolderStateId, file: &str, key: &str) {
        let state = self.state_mut(id);
        let Some((file, _)) = state.files.get_key_value(file) else {
            return;
        };
        let file = file.clone();
        if let Some(tags) = state.file_tags.get_mut(&file) {
            tags.remove(key);
            if tags.is_empty() {
                state.file_tags.remove(&file);
            }
        }
        self.release(id, key);
        self.notify(
            id,
            TagMessage::UntagFile {
                file,
                key: key.into(),
            },
        );
    }

    /// Tags every folder along `path` below `id` and then the entity the path ends at, which
    /// may be a folder or a file. A path that does not resolve completely tags nothing.
    pub fn tag_recursive<S: AsRef<str>>(
        &mut self,
        id: FolderStateId,
        path: &[S],
        key: impl Into<SmolStr>,
        value: impl Into<SmolStr>,
    ) {
        let Some((last, dirs)) = path.split_last() else {
            return;
        };
        let Some(parent) = self.folder_at(id, dirs) else {
            return;
        };
        let last = last.as_ref();
        let terminal = self.child(parent, last);
        if terminal.is_none() && !self.folder(parent).files.contains_key(last) {
            return;
        }

        let key = key.into();
        let value = value.into();
        let mut current = id;
        for segment in dirs {
            if let Some(next) = self.child(current, segment.as_ref()) {
                self.tag(next, key.clone(), value.clone());
                current = next;
            }
        }
        match terminal {
            Some(folder) => self.tag(folder, key, value),
            None => self.tag_file(parent, last, key, value),
        }
    }

    /// Removes `key` from `id`, from every folder below it and from all their files.
    ///
    /// Only the children recorded under `key` in the reverse index are visited.
    pub fn untag_all(&mut self, id: FolderStateId, key: &str) {
        self.clear_subtree(id, key);
        self.release(id, key);
    }

    fn clear_subtree(&mut self, id: FolderStateId, key: &str) {
        let tagged = self
            .state_mut(id)
            .tagged_folders
            .remove(key)
            .unwrap_or_default();
        for name in tagged {
            if let Some(child) = self.child(id, &name) {
                self.clear_subtree(child, key);
            }
        }

        let state = self.state_mut(id);
        state.tags.remove(key);
        state.file_tags.retain(|_, tags| {
            tags.remove(key);
            !tags.is_empty()
        });
        self.notify(id, TagMessage::UntagAll { key: key.into() });
    }

    /// Tags `id` and every folder below it. Listeners are notified parent before child.
    pub fn tag_all_folders(
        &mut self,
        id: FolderStateId,
        key: impl Into<SmolStr>,
        value: impl Into<SmolStr>,
    ) {
        let key = key.into();
        self.tag_subtree(id, &key, &value.into(), false);
        self.claim(id, &key);
    }

    /// Tags `id`, every folder below it and all of their files.
    pub fn tag_all(&mut self, id: FolderStateId, key: impl Into<SmolStr>, value: impl Into<SmolStr>) {
        let key = key.into();
        self.tag_subtree(id, &key, &value.into(), true);
        self.claim(id, &key);
    }

    fn tag_subtree(&mut self, id: FolderStateId, key: &SmolStr, value: &SmolStr, files: bool) {
        let state = self.state_mut(id);
        state.tags.insert(key.clone(), value.clone());
        if files {
            for file in state.files.keys() {
                state
                    .file_tags
                    .entry(file.clone())
                    .or_default()
                    .insert(key.clone(), value.clone());
            }
        }
        let children: Vec<(SmolStr, FolderStateId)> = state
            .folders
            .iter()
            .map(|(name, &child)| (name.clone(), child))
            .collect();
        if !children.is_empty() {
            state
                .tagged_folders
                .entry(key.clone())
                .or_default()
                .extend(children.iter().map(|(name, _)| name.clone()));
        }

        let message = if files {
            TagMessage::TagAll {
                key: key.clone(),
                value: value.clone(),
            }
        } else {
            TagMessage::TagAllFolders {
                key: key.clone(),
                value: value.clone(),
            }
        };
        self.notify(id, message);

        for (_, child) in children {
            self.tag_subtree(child, key, value, files);
        }
    }

    /// Registers `id` in its ancestors' reverse index for `key`, stopping at the first
    /// ancestor that already knows about it.
    fn claim(&mut self, mut id: FolderStateId, key: &SmolStr) {
        while let Some(parent) = self.folder(id).parent {
            let name = self.folder(id).name.clone();
            let inserted = self
                .state_mut(parent)
                .tagged_folders
                .entry(key.clone())
                .or_default()
                .insert(name);
            if !inserted {
                break;
            }
            id = parent;
        }
    }

    /// Walks up from `id` unregistering every folder whose subtree no longer holds `key`.
    fn release(&mut self, mut id: FolderStateId, key: &str) {
        while !self.folder(id).holds(key) {
            let Some(parent) = self.folder(id).parent else {
                break;
            };
            let name = self.folder(id).name.clone();
            let parent_state = self.state_mut(parent);
            if let Some(tagged) = parent_state.tagged_folders.get_mut(key) {
                tagged.remove(&name);
                if tagged.is_empty() {
                    parent_state.tagged_folders.remove(key);
                }
            }
            id = parent;
        }
    }

    fn notify(&mut self, id: FolderStateId, message: TagMessage) {
        for listener in self.state_mut(id).listeners.values_mut() {
            listener(&message);
        }
    }
}
