// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use rstest::{fixture, rstest};

use crate::color::paint;
use crate::model::fixtures::canonical_tree;
use crate::model::FolderStateId;
use crate::render::{render_annotation_tree, render_explorer};

use super::{AnnotationTree, TagMessage, EXPANDED};

const UNTAGGED_RENDER: &str = "\
__dep_tree_root__
 a
  b
   c
    d
     e.ts
 foo
  bar
   a.ts
   b.ts
  baz
   c.ts
  d.ts
 f.ts";

type Log = Rc<RefCell<Vec<(String, TagMessage)>>>;

fn painted_canonical() -> AnnotationTree {
    let mut tree = canonical_tree();
    paint(&mut tree);
    AnnotationTree::from_tree(&tree)
}

#[fixture]
fn annotations() -> AnnotationTree {
    painted_canonical()
}

fn at(tree: &AnnotationTree, path: &[&str]) -> FolderStateId {
    tree.folder_at(tree.root(), path).expect("folder")
}

fn record(tree: &mut AnnotationTree, id: FolderStateId, label: &str, log: &Log) {
    let log = Rc::clone(log);
    let label = label.to_owned();
    tree.register_listener(id, "log", move |message| {
        log.borrow_mut().push((label.clone(), message.clone()));
    });
}

/// Every folder and file that still carries `key`, as slash-joined paths.
fn holders(tree: &AnnotationTree, key: &str) -> Vec<String> {
    fn walk(tree: &AnnotationTree, id: FolderStateId, prefix: &str, out: &mut Vec<String>, key: &str) {
        let folder = tree.folder(id);
        if folder.tags().contains_key(key) {
            out.push(prefix.to_owned());
        }
        for name in folder.files().keys() {
            if folder.file_tags(name).is_some_and(|tags| tags.contains_key(key)) {
                out.push(format!("{prefix}/{name}"));
            }
        }
        for (name, &child) in folder.folders() {
            walk(tree, child, &format!("{prefix}/{name}"), out, key);
        }
    }
    let mut out = Vec::new();
    walk(tree, tree.root(), "", &mut out, key);
    out
}

#[rstest]
fn mirrors_the_sorted_path_tree(annotations: AnnotationTree) {
    assert_eq!(render_annotation_tree(&annotations), UNTAGGED_RENDER);
    assert_eq!(annotations.folder(annotations.root()).parent(), None);
    assert_eq!(
        annotations.folder(at(&annotations, &["foo", "bar"])).name(),
        "bar"
    );
}

#[rstest]
fn copies_folder_colors(annotations: AnnotationTree) {
    let root = annotations.root();
    assert_eq!(
        annotations.folder(root).color().to_string(),
        "rgb(255, 255, 255)"
    );
    assert_eq!(
        annotations.folder(at(&annotations, &["foo"])).color().to_string(),
        "rgb(13, 255, 255)"
    );
}

#[rstest]
fn untag_all_restores_the_untagged_render(mut annotations: AnnotationTree) {
    let root = annotations.root();
    annotations.tag_recursive(root, &["foo", "bar", "a.ts"], "selected", "true");
    assert_eq!(
        render_annotation_tree(&annotations),
        "\
__dep_tree_root__
 a
  b
   c
    d
     e.ts
 foo [selected=true]
  bar [selected=true]
   a.ts [selected=true]
   b.ts
  baz
   c.ts
  d.ts
 f.ts"
    );

    annotations.untag_all(root, "selected");
    assert_eq!(render_annotation_tree(&annotations), UNTAGGED_RENDER);
}

#[rstest]
#[case::single_tag(vec![vec!["a", "b", "c"]], vec![], vec![])]
#[case::recursive_to_file(vec![], vec![vec!["foo", "baz", "c.ts"]], vec![])]
#[case::recursive_to_folder(vec![], vec![vec!["a", "b", "c", "d"]], vec![])]
#[case::bulk_folders(vec![], vec![], vec![vec!["foo"]])]
#[case::everything_mixed(
    vec![vec!["a"], vec!["foo", "baz"]],
    vec![vec!["foo", "bar", "b.ts"], vec!["a", "b"]],
    vec![vec!["a", "b", "c"], vec![]],
)]
fn untag_all_clears_every_holder(
    mut annotations: AnnotationTree,
    #[case] tagged: Vec<Vec<&str>>,
    #[case] recursive: Vec<Vec<&str>>,
    #[case] bulk: Vec<Vec<&str>>,
) {
    let root = annotations.root();
    for path in &tagged {
        let id = at(&annotations, path);
        annotations.tag(id, "k", "v");
    }
    for path in &recursive {
        annotations.tag_recursive(root, path.as_slice(), "k", "v");
    }
    for path in &bulk {
        let id = at(&annotations, path);
        annotations.tag_all_folders(id, "k", "v");
    }
    annotations.tag_file(at(&annotations, &["foo"]), "d.ts", "k", "v");
    assert!(!holders(&annotations, "k").is_empty());

    annotations.untag_all(root, "k");
    assert!(holders(&annotations, "k").is_empty());
    assert!(annotations.folder(root).tagged_folders("k").is_none());
}

#[rstest]
fn tag_all_reaches_files_and_untag_all_on_a_subtree_stays_inside_it(
    mut annotations: AnnotationTree,
) {
    let root = annotations.root();
    annotations.tag_all(root, "k", "v");
    assert_eq!(holders(&annotations, "k").len(), 8 + 6);

    let foo = at(&annotations, &["foo"]);
    annotations.untag_all(foo, "k");
    assert_eq!(
        holders(&annotations, "k"),
        vec!["", "/f.ts", "/a", "/a/b", "/a/b/c", "/a/b/c/d", "/a/b/c/d/e.ts"]
    );
    let root_index = annotations.folder(root).tagged_folders("k").expect("index");
    assert!(root_index.contains("a"));
    assert!(!root_index.contains("foo"));
}

#[rstest]
fn untag_releases_the_reverse_index_up_the_chain(mut annotations: AnnotationTree) {
    let root = annotations.root();
    let c = at(&annotations, &["a", "b", "c"]);
    annotations.tag(c, "k", "v");
    assert!(annotations
        .folder(root)
        .tagged_folders("k")
        .is_some_and(|set| set.contains("a")));
    assert!(annotations
        .folder(at(&annotations, &["a", "b"]))
        .tagged_folders("k")
        .is_some_and(|set| set.contains("c")));

    annotations.untag(c, "k");
    let chain: [&[&str]; 3] = [&[], &["a"], &["a", "b"]];
    for path in chain {
        let id = at(&annotations, path);
        assert!(annotations.folder(id).tagged_folders("k").is_none());
    }
}

#[rstest]
fn untag_keeps_the_index_while_a_descendant_still_holds_the_key(
    mut annotations: AnnotationTree,
) {
    let root = annotations.root();
    let foo = at(&annotations, &["foo"]);
    let bar = at(&annotations, &["foo", "bar"]);
    annotations.tag(foo, "k", "v");
    annotations.tag_file(bar, "a.ts", "k", "v");

    annotations.untag(foo, "k");
    assert!(annotations
        .folder(root)
        .tagged_folders("k")
        .is_some_and(|set| set.contains("foo")));

    annotations.untag_file(bar, "a.ts", "k");
    assert!(annotations.folder(root).tagged_folders("k").is_none());
    assert!(annotations.folder(bar).file_tags("a.ts").is_none());
}

#[rstest]
fn tag_recursive_notifies_root_to_leaf(mut annotations: AnnotationTree) {
    let log: Log = Rc::default();
    let root = annotations.root();
    let folders: [(&str, &[&str]); 3] = [("root", &[]), ("foo", &["foo"]), ("bar", &["foo", "bar"])];
    for (label, path) in folders {
        let id = at(&annotations, path);
        record(&mut annotations, id, label, &log);
    }

    annotations.tag_recursive(root, &["foo", "bar", "a.ts"], "selected", "true");

    assert_eq!(
        *log.borrow(),
        vec![
            (
                "foo".to_owned(),
                TagMessage::Tag {
                    key: "selected".into(),
                    value: "true".into(),
                }
            ),
            (
                "bar".to_owned(),
                TagMessage::Tag {
                    key: "selected".into(),
                    value: "true".into(),
                }
            ),
            (
                "bar".to_owned(),
                TagMessage::TagFile {
                    file: "a.ts".into(),
                    key: "selected".into(),
                    value: "true".into(),
                }
            ),
        ]
    );
}

#[rstest]
#[case::folders(false)]
#[case::folders_and_files(true)]
fn bulk_tagging_notifies_parents_before_children(
    mut annotations: AnnotationTree,
    #[case] files: bool,
) {
    let log: Log = Rc::default();
    let root = annotations.root();
    let folders: [(&str, &[&str]); 4] = [
        ("root", &[]),
        ("foo", &["foo"]),
        ("bar", &["foo", "bar"]),
        ("baz", &["foo", "baz"]),
    ];
    for (label, path) in folders {
        let id = at(&annotations, path);
        record(&mut annotations, id, label, &log);
    }

    if files {
        annotations.tag_all(root, "k", "v");
    } else {
        annotations.tag_all_folders(root, "k", "v");
    }

    let labels: Vec<String> = log.borrow().iter().map(|(label, _)| label.clone()).collect();
    assert_eq!(labels, ["root", "foo", "bar", "baz"]);
    assert!(log.borrow().iter().all(|(_, message)| match message {
        TagMessage::TagAll { .. } => files,
        TagMessage::TagAllFolders { .. } => !files,
        _ => false,
    }));
}

#[rstest]
fn listeners_only_see_their_own_folder(mut annotations: AnnotationTree) {
    let log: Log = Rc::default();
    let root = annotations.root();
    record(&mut annotations, root, "root", &log);

    let foo = at(&annotations, &["foo"]);
    annotations.tag(foo, "selected", "true");
    annotations.untag(foo, "selected");
    assert!(log.borrow().is_empty());

    annotations.tag_file(root, "f.ts", "selected", "true");
    annotations.untag_all(root, "selected");
    let messages: Vec<TagMessage> = log.borrow().iter().map(|(_, m)| m.clone()).collect();
    assert_eq!(
        messages,
        vec![
            TagMessage::TagFile {
                file: "f.ts".into(),
                key: "selected".into(),
                value: "true".into(),
            },
            TagMessage::UntagAll {
                key: "selected".into(),
            },
        ]
    );
}

#[rstest]
fn registering_a_listener_twice_replaces_it(mut annotations: AnnotationTree) {
    let first: Log = Rc::default();
    let second: Log = Rc::default();
    let root = annotations.root();
    record(&mut annotations, root, "first", &first);
    record(&mut annotations, root, "second", &second);
    assert_eq!(annotations.folder(root).listener_names().count(), 1);

    annotations.tag(root, "k", "v");
    assert!(first.borrow().is_empty());
    assert_eq!(second.borrow().len(), 1);

    assert!(annotations.unregister_listener(root, "log"));
    assert!(!annotations.unregister_listener(root, "log"));
    annotations.untag(root, "k");
    assert_eq!(second.borrow().len(), 1);
}

#[rstest]
fn missing_names_are_ignored(mut annotations: AnnotationTree) {
    let log: Log = Rc::default();
    let root = annotations.root();
    record(&mut annotations, root, "root", &log);

    annotations.tag_file(root, "nope.ts", "k", "v");
    annotations.untag_file(root, "nope.ts", "k");
    annotations.tag_recursive(root, &["foo", "nope", "a.ts"], "k", "v");
    annotations.tag_recursive(root, &["foo", "bar", "nope.ts"], "k", "v");
    let empty: [&str; 0] = [];
    annotations.tag_recursive(root, &empty, "k", "v");
    annotations.expand_path(root, &["nope"]);
    annotations.collapse_path(root, &["foo", "nope"]);

    assert!(log.borrow().is_empty());
    assert_eq!(render_annotation_tree(&annotations), UNTAGGED_RENDER);
    assert!(annotations.folder_at(root, &["foo", "nope"]).is_none());
}

#[rstest]
fn explorer_shows_only_expanded_folders(mut annotations: AnnotationTree) {
    let root = annotations.root();
    assert_eq!(render_explorer(&annotations), "");

    annotations.expand(root);
    assert_eq!(render_explorer(&annotations), "> a\n> foo\nf.ts");

    annotations.expand_all(root);
    annotations.collapse_path(root, &["a", "b", "c"]);
    assert_eq!(
        render_explorer(&annotations),
        "\
> a
 > b
  > c
> foo
 > bar
  a.ts
  b.ts
 > baz
  c.ts
 d.ts
f.ts"
    );
    assert!(!annotations.is_expanded(at(&annotations, &["a", "b", "c", "d"])));
}

#[rstest]
fn expand_path_opens_every_folder_on_the_way(mut annotations: AnnotationTree) {
    let root = annotations.root();
    annotations.expand(root);
    annotations.expand_path(root, &["foo", "baz"]);
    assert_eq!(
        render_explorer(&annotations),
        "> a\n> foo\n > bar\n > baz\n  c.ts\n d.ts\nf.ts"
    );

    annotations.collapse_all(root);
    assert!(holders(&annotations, EXPANDED).is_empty());
}

fn folders_pre_order(tree: &AnnotationTree) -> Vec<FolderStateId> {
    fn walk(tree: &AnnotationTree, id: FolderStateId, out: &mut Vec<FolderStateId>) {
        out.push(id);
        for &child in tree.folder(id).folders().values() {
            walk(tree, child, out);
        }
    }
    let mut out = Vec::new();
    walk(tree, tree.root(), &mut out);
    out
}

fn path_to(tree: &AnnotationTree, mut id: FolderStateId) -> Vec<String> {
    let mut path = Vec::new();
    while let Some(parent) = tree.folder(id).parent() {
        path.push(tree.folder(id).name().to_owned());
        id = parent;
    }
    path.reverse();
    path
}

fn subtree_holds(tree: &AnnotationTree, id: FolderStateId, key: &str) -> bool {
    let folder = tree.folder(id);
    folder.tags().contains_key(key)
        || folder
            .files()
            .keys()
            .any(|name| folder.file_tags(name).is_some_and(|tags| tags.contains_key(key)))
        || folder
            .folders()
            .values()
            .any(|&child| subtree_holds(tree, child, key))
}

/// A child is indexed under `key` exactly when something in its subtree holds `key`.
fn index_matches_subtrees(tree: &AnnotationTree, key: &str) -> bool {
    folders_pre_order(tree).into_iter().all(|id| {
        let folder = tree.folder(id);
        folder.folders().iter().all(|(name, &child)| {
            let indexed = folder
                .tagged_folders(key)
                .is_some_and(|tagged| tagged.contains(name));
            indexed == subtree_holds(tree, child, key)
        })
    })
}

const KEYS: [&str; 2] = ["selected", "expanded"];

proptest! {
    #[test]
    fn untag_all_clears_any_sequence_of_tagging_calls(
        ops in prop::collection::vec(
            (0u8..8, 0usize..8, 0usize..6, any::<bool>(), 0usize..KEYS.len()),
            0..40,
        ),
    ) {
        let mut tree = painted_canonical();
        let root = tree.root();
        let folders = folders_pre_order(&tree);

        for (op, folder, file, to_file, key) in ops {
            let id = folders[folder % folders.len()];
            let key = KEYS[key];
            let file = tree
                .folder(id)
                .files()
                .get_index(file % tree.folder(id).files().len().max(1))
                .map(|(name, _)| name.to_string());
            match op {
                0 => tree.tag(id, key, "true"),
                1 => tree.untag(id, key),
                2 => {
                    if let Some(file) = &file {
                        tree.tag_file(id, file, key, "true");
                    }
                }
                3 => {
                    if let Some(file) = &file {
                        tree.untag_file(id, file, key);
                    }
                }
                4 => {
                    let mut path = path_to(&tree, id);
                    if let (true, Some(file)) = (to_file, file) {
                        path.push(file);
                    }
                    tree.tag_recursive(root, path.as_slice(), key, "true");
                }
                5 => tree.tag_all_folders(id, key, "true"),
                6 => tree.tag_all(id, key, "true"),
                _ => tree.untag_all(id, key),
            }
            for key in KEYS {
                prop_assert!(index_matches_subtrees(&tree, key));
            }
        }

        for key in KEYS {
            tree.untag_all(root, key);
            prop_assert!(holders(&tree, key).is_empty());
            prop_assert!(tree.folder(root).tagged_folders(key).is_none());
        }
        prop_assert_eq!(render_annotation_tree(&tree), UNTAGGED_RENDER);
    }
}
