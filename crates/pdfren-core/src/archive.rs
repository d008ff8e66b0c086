//! ZIP packaging of renamed documents.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{ArchiveError, RenamerError};
use crate::models::config::{ArchiveConfig, Compression};
use crate::models::document::RenamedEntry;

/// Result type for archive operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Packs renamed entries into a ZIP archive.
///
/// Entry content is written byte-for-byte. Duplicate names are rejected
/// rather than overwritten or dropped.
#[derive(Debug, Clone, Copy)]
pub struct ZipArchiver {
    compression: Compression,
}

impl ZipArchiver {
    pub fn new(compression: Compression) -> Self {
        Self { compression }
    }

    pub fn from_config(config: &ArchiveConfig) -> Self {
        Self::new(config.compression)
    }

    /// Write all entries to `writer` and return it.
    pub fn write_to<W: Write + Seek>(&self, entries: &[RenamedEntry], writer: W) -> Result<W> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in entries {
            if !seen.insert(entry.filename.as_str()) {
                return Err(ArchiveError::DuplicateEntry(entry.filename.clone()));
            }
        }

        let method = match self.compression {
            Compression::Deflated => CompressionMethod::Deflated,
            Compression::Stored => CompressionMethod::Stored,
        };
        let options = SimpleFileOptions::default().compression_method(method);

        let mut zip = ZipWriter::new(writer);
        for entry in entries {
            zip.start_file(entry.filename.as_str(), options)?;
            zip.write_all(&entry.content)?;
            debug!("Archived {} ({} bytes)", entry.filename, entry.content.len());
        }

        Ok(zip.finish()?)
    }

    /// Build the archive in memory.
    pub fn to_bytes(&self, entries: &[RenamedEntry]) -> Result<Vec<u8>> {
        let cursor = self.write_to(entries, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Write the archive to a file, replacing any existing file.
    pub fn write_file(&self, entries: &[RenamedEntry], path: &Path) -> crate::Result<()> {
        let file = File::create(path)?;
        let mut writer = self.write_to(entries, BufWriter::new(file))?;
        writer.flush().map_err(RenamerError::Io)?;
        debug!("Wrote {} entries to {}", entries.len(), path.display());
        Ok(())
    }
}

impl Default for ZipArchiver {
    fn default() -> Self {
        Self::new(Compression::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::NameSource;
    use crate::models::fields::FieldSet;
    use std::io::Read;
    use zip::ZipArchive;

    fn entry(filename: &str, content: &[u8]) -> RenamedEntry {
        RenamedEntry {
            filename: filename.to_string(),
            original_filename: "in.pdf".to_string(),
            content: content.to_vec(),
            fields: FieldSet::new(),
            source: NameSource::Fields,
        }
    }

    fn read_back(bytes: Vec<u8>) -> Vec<(String, Vec<u8>)> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        (0..archive.len())
            .map(|i| {
                let mut file = archive.by_index(i).unwrap();
                let mut content = Vec::new();
                file.read_to_end(&mut content).unwrap();
                (file.name().to_string(), content)
            })
            .collect()
    }

    #[test]
    fn test_round_trip_preserves_order_and_bytes() {
        let entries = vec![
            entry("CTI-ABC123.pdf", b"%PDF-1.4 first"),
            entry("CTI Sales Order SV004455 Acme Corp.pdf", &[0, 159, 146, 150]),
        ];

        for compression in [Compression::Deflated, Compression::Stored] {
            let bytes = ZipArchiver::new(compression).to_bytes(&entries).unwrap();
            let files = read_back(bytes);

            assert_eq!(files.len(), 2);
            assert_eq!(files[0], ("CTI-ABC123.pdf".to_string(), b"%PDF-1.4 first".to_vec()));
            assert_eq!(files[1].0, "CTI Sales Order SV004455 Acme Corp.pdf");
            assert_eq!(files[1].1, vec![0, 159, 146, 150]);
        }
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let entries = vec![entry("a.pdf", b"1"), entry("a.pdf", b"2")];
        let err = ZipArchiver::default().to_bytes(&entries).unwrap_err();
        assert!(matches!(err, ArchiveError::DuplicateEntry(name) if name == "a.pdf"));
    }

    #[test]
    fn test_empty_archive() {
        let bytes = ZipArchiver::default().to_bytes(&[]).unwrap();
        assert!(read_back(bytes).is_empty());
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("renamed.zip");

        ZipArchiver::default()
            .write_file(&[entry("x.pdf", b"data")], &path)
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(read_back(bytes), vec![("x.pdf".to_string(), b"data".to_vec())]);
    }
}
