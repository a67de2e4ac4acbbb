use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::{info, warn};

use crate::constants::{HEADER_FENCE, NOT_FOUND_BODY, READ_ERROR_PREFIX};
use crate::context::error::{ReadError, SnapshotError};
use crate::context::types::{DocumentStats, FileEntry, FileList, Record, RecordBody};

/// Reads listed entries relative to a root and writes them out as one
/// fenced document.
#[derive(Debug, Clone)]
pub struct Concatenator {
    root: PathBuf,
    max_size: u64,
}

impl Concatenator {
    /// `max_size` of 0 disables the size cap.
    pub fn new(
        root: impl Into<PathBuf>,
        max_size: u64,
    ) -> Self {
        Self {
            root: root.into(),
            max_size,
        }
    }

    /// Builds the record for one entry. Never fails: problems become
    /// placeholder bodies.
    pub fn read_entry(
        &self,
        entry: &FileEntry,
    ) -> Record {
        let full = self.root.join(entry.as_str());
        let body = if !full.exists() {
            warn!("{}: file not found", entry);
            RecordBody::Missing
        } else {
            match read_text(&full, self.max_size) {
                Ok(contents) => RecordBody::Contents(contents),
                Err(e) => {
                    warn!("{}: {}", entry, e);
                    RecordBody::Unreadable(e)
                }
            }
        };
        Record {
            path: entry.clone(),
            body,
        }
    }

    /// Writes one record per entry, in list order.
    pub fn write_document<W: Write>(
        &self,
        list: &FileList,
        out: &mut W,
    ) -> io::Result<DocumentStats> {
        let mut stats = DocumentStats::default();
        for entry in list {
            let record = self.read_entry(entry);
            render_record(&record, out)?;
            stats.tally(&record.body);
        }
        Ok(stats)
    }

    /// Truncates `output` and writes the whole document into it.
    pub fn write_to_path(
        &self,
        list: &FileList,
        output: &Path,
    ) -> Result<DocumentStats, SnapshotError> {
        let write_err = |source: io::Error| SnapshotError::OutputWrite {
            path: output.to_path_buf(),
            source,
        };
        let file = File::create(output).map_err(write_err)?;
        let mut out = BufWriter::new(file);
        let stats = self.write_document(list, &mut out).map_err(write_err)?;
        out.flush().map_err(write_err)?;
        info!(
            "{} records ({} read, {} missing, {} unreadable)",
            stats.records, stats.read, stats.missing, stats.unreadable
        );
        Ok(stats)
    }
}

/// Header line, body, then a blank separator line.
pub fn render_record<W: Write>(
    record: &Record,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{HEADER_FENCE} {} {HEADER_FENCE}", record.path)?;
    match &record.body {
        RecordBody::Contents(contents) => out.write_all(contents.as_bytes())?,
        RecordBody::Missing => out.write_all(NOT_FOUND_BODY.as_bytes())?,
        RecordBody::Unreadable(e) => write!(out, "{READ_ERROR_PREFIX} {e}")?,
    }
    out.write_all(b"\n\n")
}

fn read_text(
    path: &Path,
    max_size: u64,
) -> Result<String, ReadError> {
    if max_size > 0 {
        let size = fs::metadata(path)?.len();
        if size > max_size {
            return Err(ReadError::TooLarge {
                size,
                limit: max_size,
            });
        }
    }
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}
