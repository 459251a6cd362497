//! CSV serialization of sitemap entries

use crate::entry::SiteEntry;
use crate::WriteError;
use std::io;
use std::path::{Path, PathBuf};

/// Column names of the header row
pub const CSV_HEADERS: [&str; 2] = ["title", "url"];

/// Output path that selects stdout instead of a file
pub const STDOUT_PATH: &str = "-";

/// Writes entries as CSV to `output_path`, replacing any existing file
///
/// A path of `-` writes to stdout. When `header` is set the `title,url` row
/// is written first, so an empty entry list still produces a header-only
/// file.
///
/// # Returns
///
/// * `Ok(usize)` - Number of entry rows written
/// * `Err(WriteError)` - The file could not be created or written
pub fn write_entries(
    entries: &[SiteEntry],
    output_path: &Path,
    header: bool,
) -> Result<usize, WriteError> {
    if output_path == Path::new(STDOUT_PATH) {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(io::stdout());
        return write_records(writer, entries, header, output_path);
    }

    let writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output_path)
        .map_err(|source| WriteError::Open {
            path: output_path.to_path_buf(),
            source,
        })?;

    write_records(writer, entries, header, output_path)
}

/// Writes entries to any writer as CSV
///
/// Used for stdout and by tests that capture output in memory.
pub fn write_entries_to<W: io::Write>(
    writer: W,
    entries: &[SiteEntry],
    header: bool,
) -> Result<usize, WriteError> {
    let writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    write_records(writer, entries, header, Path::new("<writer>"))
}

fn write_records<W: io::Write>(
    mut writer: csv::Writer<W>,
    entries: &[SiteEntry],
    header: bool,
    path: &Path,
) -> Result<usize, WriteError> {
    let csv_error = |source| WriteError::Csv {
        path: PathBuf::from(path),
        source,
    };

    if header {
        writer.write_record(CSV_HEADERS).map_err(csv_error)?;
    }

    for entry in entries {
        writer.serialize(entry).map_err(csv_error)?;
    }

    writer.flush().map_err(|source| WriteError::Flush {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(entries.len())
}
