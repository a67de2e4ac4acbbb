mod common;
use assert_fs::prelude::*;
use common::{BASIC_LISTING, basic_fs};
use project_snapshot::context::error::SnapshotError;
use project_snapshot::context::types::{ExclusionSet, FileList};
use project_snapshot::lister::{list_files, render_file_list};

fn names(list: &FileList) -> Vec<&str> {
    list.iter().map(|e| e.as_str()).collect()
}

#[test]
fn lists_sorted_and_prunes_default_exclusions() {
    let td = basic_fs();
    let list = list_files(td.path(), &ExclusionSet::default()).unwrap();
    assert_eq!(names(&list), BASIC_LISTING);
}

#[test]
fn node_modules_is_pruned_but_src_is_kept() {
    let td = assert_fs::TempDir::new().unwrap();
    td.child("node_modules").create_dir_all().unwrap();
    td.child("src").create_dir_all().unwrap();
    td.child("node_modules/x.js").write_str("x").unwrap();
    td.child("src/y.js").write_str("y").unwrap();

    let list = list_files(td.path(), &ExclusionSet::default()).unwrap();
    assert_eq!(names(&list), ["src/y.js"]);
}

#[test]
fn extra_exclusions_apply_at_any_depth() {
    let td = basic_fs();
    let exclusions = ExclusionSet::default().extend(["public", "src"]);
    let list = list_files(td.path(), &exclusions).unwrap();
    assert_eq!(names(&list), [".env.example", "README.md", "hello.txt"]);
}

#[test]
fn file_named_like_excluded_dir_is_listed() {
    let td = assert_fs::TempDir::new().unwrap();
    td.child(".next").write_str("not a directory").unwrap();
    let list = list_files(td.path(), &ExclusionSet::default()).unwrap();
    assert_eq!(names(&list), [".next"]);
}

#[test]
fn missing_root_is_an_error() {
    let td = assert_fs::TempDir::new().unwrap();
    let err = list_files(&td.path().join("nope"), &ExclusionSet::default()).unwrap_err();
    assert!(matches!(err, SnapshotError::InvalidRoot { .. }), "{err}");
}

#[test]
fn file_root_is_an_error() {
    let td = basic_fs();
    let err = list_files(&td.path().join("README.md"), &ExclusionSet::default()).unwrap_err();
    assert!(matches!(err, SnapshotError::RootNotDirectory { .. }), "{err}");
}

#[test]
fn rendered_list_is_a_quoted_literal() {
    let td = basic_fs();
    let list = list_files(td.path(), &ExclusionSet::default()).unwrap();
    let rendered = render_file_list(&list);
    let mut expected = String::from("file_list = [\n");
    for name in BASIC_LISTING {
        expected.push_str(&format!("    '{name}',\n"));
    }
    expected.push_str("]\n");
    assert_eq!(rendered, expected);
}

#[cfg(unix)]
#[test]
fn symlinked_dirs_are_not_followed_but_file_links_are_listed() {
    use std::os::unix::fs::symlink;

    let td = assert_fs::TempDir::new().unwrap();
    td.child("src").create_dir_all().unwrap();
    td.child("src/a.rs").write_str("fn a() {}\n").unwrap();
    // A loop back to the root and a link to a real file.
    symlink(td.path(), td.path().join("src/loop")).unwrap();
    symlink(td.path().join("src/a.rs"), td.path().join("alias.rs")).unwrap();
    symlink(td.path().join("gone.rs"), td.path().join("dangling.rs")).unwrap();

    let list = list_files(td.path(), &ExclusionSet::default()).unwrap();
    assert_eq!(names(&list), ["alias.rs", "src/a.rs"]);
}
