use std::{
    fs,
    path::Path,
};

use tracing::{debug, warn};

use crate::constants::{GLOB_RULE_PREFIX, LIST_CLOSER, LIST_OPENER};
use crate::context::error::SnapshotError;
use crate::context::lister::{resolve_root, walk_files};
use crate::context::types::{ExclusionSet, FileEntry, FileList};

/// One effective line of a curated list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRule {
    /// Taken as-is; existence is only checked when the entry is read.
    Path(FileEntry),
    /// Expands to the regular files it matches under the root.
    Pattern(String),
}

/// Reads and parses a curated list file.
pub fn load_list(path: &Path) -> Result<Vec<ListRule>, SnapshotError> {
    let text = fs::read_to_string(path).map_err(|source| SnapshotError::ListRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_list(&text)
}

/// Parses list text. Accepts the lister's own output verbatim, with any
/// number of lines commented out using `#`.
pub fn parse_list(text: &str) -> Result<Vec<ListRule>, SnapshotError> {
    let mut rules = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || is_list_delimiter(line) {
            continue;
        }

        // Quoted entries are always literal paths, even one named `glob:...`.
        if line.starts_with('\'') || line.starts_with('"') {
            let entry = unquote(line).map_err(|message| SnapshotError::ListSyntax {
                line: idx + 1,
                message,
            })?;
            if !entry.is_empty() {
                rules.push(ListRule::Path(FileEntry::new(entry)));
            }
            continue;
        }

        let entry = line.trim_end_matches(',').trim_end();
        if entry.is_empty() {
            continue;
        }
        match entry.strip_prefix(GLOB_RULE_PREFIX) {
            Some(pattern) => rules.push(ListRule::Pattern(pattern.trim().to_string())),
            None => rules.push(ListRule::Path(FileEntry::new(entry))),
        }
    }
    Ok(rules)
}

/// Turns rules into the ordered list the concatenator consumes.
///
/// Literal paths pass through untouched, duplicates included. Each pattern
/// contributes its matches in sorted order, walking the root the same way
/// the lister does.
pub fn expand_rules(
    rules: &[ListRule],
    root: &Path,
    exclusions: &ExclusionSet,
) -> Result<FileList, SnapshotError> {
    let mut list = FileList::new();
    for rule in rules {
        match rule {
            ListRule::Path(entry) => list.push(entry.clone()),
            ListRule::Pattern(pattern) => {
                let matches = expand_pattern(pattern, root, exclusions)?;
                if matches.is_empty() {
                    warn!("pattern {:?} matched no files", pattern);
                }
                list.extend(matches);
            }
        }
    }
    Ok(list)
}

fn expand_pattern(
    pattern: &str,
    root: &Path,
    exclusions: &ExclusionSet,
) -> Result<FileList, SnapshotError> {
    let matcher = glob::Pattern::new(pattern.trim_start_matches('/')).map_err(|source| {
        SnapshotError::Pattern {
            pattern: pattern.to_string(),
            source,
        }
    })?;
    // `*` stays within one path component, `**` crosses them.
    let options = glob::MatchOptions {
        require_literal_separator: true,
        ..glob::MatchOptions::new()
    };

    let root = resolve_root(root)?;
    let matches: FileList = walk_files(&root, exclusions)?
        .into_iter()
        .filter(|entry| matcher.matches_with(entry.as_str(), options))
        .collect();
    debug!("pattern {:?} matched {} files", pattern, matches.len());
    Ok(matches)
}

fn is_list_delimiter(line: &str) -> bool {
    if line == LIST_CLOSER {
        return true;
    }
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    let opener: String = LIST_OPENER.chars().filter(|c| !c.is_whitespace()).collect();
    compact == opener
}

/// Reads a quoted entry, honouring `\` escapes. Whatever follows the
/// closing quote (a trailing comma or an inline comment) is ignored.
fn unquote(line: &str) -> Result<String, String> {
    let mut chars = line.chars();
    let Some(quote) = chars.next() else {
        return Err("empty entry".to_string());
    };
    let mut out = String::new();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some(escaped) => out.push(escaped),
                None => return Err("dangling escape at end of line".to_string()),
            },
            c if c == quote => return Ok(out),
            c => out.push(c),
        }
    }
    Err(format!("unterminated {quote}-quoted entry"))
}
