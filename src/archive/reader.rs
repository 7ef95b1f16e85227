/// ZIP archive reader
///
/// Lists entries and extracts image payloads from a ZIP file on disk.
/// The archive is re-opened inside each background task instead of being
/// shared across threads; a ZipArchive holds its reader and cannot move
/// between overlapping extraction tasks.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use zip::ZipArchive;

use crate::state::indexer::EntryMeta;

/// Errors from the archive layer.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("failed to read archive file: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a valid ZIP archive: {0}")]
    Invalid(#[from] zip::result::ZipError),

    #[error("entry not found in archive: {0}")]
    EntryRead(String),

    #[error("entry is not a decodable image: {0}")]
    ImageDecode(String),
}

/// List every entry of the archive at `path`.
pub fn list_entries(path: &Path) -> Result<Vec<EntryMeta>, ArchiveError> {
    let mut archive = open_archive(BufReader::new(File::open(path)?))?;
    collect_entries(&mut archive)
}

/// Extract the named image entries from the archive at `path`, in order.
///
/// A single entry failing to extract or decode is logged and skipped; the
/// rest of the batch still loads. Only the archive itself being unreadable
/// fails the whole operation.
pub fn read_folder_images(
    path: &Path,
    names: &[String],
) -> Result<Vec<(String, Vec<u8>)>, ArchiveError> {
    let mut archive = open_archive(BufReader::new(File::open(path)?))?;
    Ok(extract_images(&mut archive, names))
}

fn open_archive<R: Read + Seek>(reader: R) -> Result<ZipArchive<R>, ArchiveError> {
    Ok(ZipArchive::new(reader)?)
}

fn collect_entries<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
) -> Result<Vec<EntryMeta>, ArchiveError> {
    let mut entries = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let entry = archive.by_index(index)?;
        entries.push(EntryMeta {
            name: entry.name().to_string(),
            is_dir: entry.is_dir(),
        });
    }
    Ok(entries)
}

fn extract_images<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    names: &[String],
) -> Vec<(String, Vec<u8>)> {
    let mut images = Vec::with_capacity(names.len());
    for name in names {
        match extract_one(archive, name) {
            Ok(bytes) => images.push((name.clone(), bytes)),
            Err(err) => log::warn!("skipping entry {}: {}", name, err),
        }
    }
    images
}

/// Read one entry's bytes and check that they decode as an image. Corrupt
/// payloads inside an otherwise valid archive are caught here rather than
/// at render time.
fn extract_one<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Vec<u8>, ArchiveError> {
    let mut entry = archive
        .by_name(name)
        .map_err(|_| ArchiveError::EntryRead(name.to_string()))?;

    let mut bytes = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut bytes)?;

    if image::load_from_memory(&bytes).is_err() {
        return Err(ArchiveError::ImageDecode(name.to_string()));
    }

    Ok(bytes)
}
