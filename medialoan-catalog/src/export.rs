use std::io::Write;
use std::path::Path;

use medialoan_core::ContentItem;

use crate::error::CatalogError;

/// Write the one-line-per-item availability summary: `id, title, isAvailable`.
///
/// This is a one-way snapshot dump; the loader never reads it back.
pub fn write_summary<W: Write>(items: &[ContentItem], mut writer: W) -> Result<(), CatalogError> {
    for item in items {
        writeln!(writer, "{}, {}, {}", item.id(), item.title, item.is_available())?;
    }
    Ok(())
}

/// Append the summary to a file, creating it if missing.
pub fn append_summary_file(path: &Path, items: &[ContentItem]) -> Result<(), CatalogError> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    write_summary(items, std::io::BufWriter::new(file))
}
