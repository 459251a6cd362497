//! Output module for writing extracted sitemap entries
//!
//! Entries are written as UTF-8 CSV with `title` and `url` columns, to a
//! file or to stdout.

mod csv_writer;

pub use csv_writer::{write_entries, write_entries_to, CSV_HEADERS, STDOUT_PATH};
