use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::{ConcatArgs, ListArgs};
use crate::context::file_list::{self, ListRule};
use crate::context::lister::resolve_root;
use crate::context::types::{ExclusionSet, FileEntry, FileList};

/// Settings for the `list` subcommand.
#[derive(Debug, Clone)]
pub struct ListConfig {
    pub root: PathBuf,
    pub exclusions: ExclusionSet,
}

impl From<ListArgs> for ListConfig {
    fn from(args: ListArgs) -> Self {
        ListConfig {
            root: args.root,
            exclusions: ExclusionSet::default().extend(args.exclude),
        }
    }
}

/// Settings for the `concat` subcommand, with the curated list already
/// loaded and expanded.
#[derive(Debug, Clone)]
pub struct ConcatConfig {
    pub root: PathBuf,
    pub output: PathBuf,
    pub max_size: u64,
    pub files: FileList,
}

impl ConcatConfig {
    pub fn from_args(args: ConcatArgs) -> Result<Self> {
        let root = resolve_root(&args.root)?;
        let mut rules: Vec<ListRule> = match &args.list {
            Some(path) => file_list::load_list(path)?,
            None => Vec::new(),
        };
        rules.extend(
            args.paths
                .into_iter()
                .map(|p| ListRule::Path(FileEntry::new(p))),
        );

        let exclusions = ExclusionSet::default().extend(args.exclude);
        let files = file_list::expand_rules(&rules, &root, &exclusions)
            .with_context(|| format!("expanding file list against {:?}", args.root))?;

        Ok(ConcatConfig {
            root,
            output: args.output,
            max_size: args.max_size,
            files,
        })
    }
}
