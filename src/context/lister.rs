use std::{
    fmt::Write,
    fs,
    path::{Path, PathBuf},
};

use ignore::{DirEntry, WalkBuilder};
use path_slash::PathExt;
use tracing::debug;

use crate::constants::{LIST_CLOSER, LIST_INDENT, LIST_OPENER};
use crate::context::error::SnapshotError;
use crate::context::types::{ExclusionSet, FileEntry, FileList};

/// Returns every regular file under `root` (relative, `/`-separated, sorted),
/// never descending into a directory named in `exclusions`.
///
/// Symlinked directories are not followed. Symlinks resolving to a regular
/// file are listed; dangling ones are skipped.
pub fn list_files(
    root: &Path,
    exclusions: &ExclusionSet,
) -> Result<FileList, SnapshotError> {
    let root = resolve_root(root)?;
    let list = walk_files(&root, exclusions)?;
    debug!("listed {} files under {:?}", list.len(), root);
    Ok(list)
}

/// Sorted walk below an already resolved `root`. Shared with `glob:` rule
/// expansion so both honour the same pruning and symlink policy.
pub(crate) fn walk_files(
    root: &Path,
    exclusions: &ExclusionSet,
) -> Result<FileList, SnapshotError> {
    let prune = exclusions.clone();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(move |entry| !is_excluded_dir(entry, &prune))
        .build();

    let mut list = FileList::new();
    for entry_result in walker {
        let entry = entry_result?;
        if !is_listable_file(&entry) {
            continue;
        }
        // Walk paths always start with the root we handed in.
        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        list.push(FileEntry::new(rel.to_slash_lossy().into_owned()));
    }

    list.sort();
    Ok(list)
}

/// Formats a list as a quoted list literal, one entry per line.
pub fn render_file_list(list: &FileList) -> String {
    let mut out = String::new();
    out.push_str(LIST_OPENER);
    out.push('\n');
    for entry in list {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{LIST_INDENT}'{}',", escape_entry(entry.as_str()));
    }
    out.push_str(LIST_CLOSER);
    out.push('\n');
    out
}

fn escape_entry(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len());
    for c in path.chars() {
        match c {
            '\\' | '\'' => {
                escaped.push('\\');
                escaped.push(c);
            }
            // Keeps every entry on a single line.
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Canonicalizes `root`, failing unless it is an existing directory.
pub fn resolve_root(root: &Path) -> Result<PathBuf, SnapshotError> {
    let canon = dunce::canonicalize(root).map_err(|source| SnapshotError::InvalidRoot {
        path: root.to_path_buf(),
        source,
    })?;
    if !canon.is_dir() {
        return Err(SnapshotError::RootNotDirectory {
            path: root.to_path_buf(),
        });
    }
    Ok(canon)
}

fn is_excluded_dir(
    entry: &DirEntry,
    exclusions: &ExclusionSet,
) -> bool {
    // Never prune the root itself, whatever it is called.
    if entry.depth() == 0 {
        return false;
    }
    let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
    let excluded = is_dir && exclusions.contains(entry.file_name());
    if excluded {
        debug!("pruning {:?}", entry.path());
    }
    excluded
}

fn is_listable_file(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        return fs::metadata(entry.path())
            .map(|m| m.is_file())
            .unwrap_or(false);
    }
    entry.file_type().is_some_and(|ft| ft.is_file())
}
