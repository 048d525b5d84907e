use std::fs::File;
use std::path::Path;

use zip::ZipArchive;

use crate::error::WalkError;

/// Enumerates every entry name in a zip-format archive's central directory,
/// in archive order — directory entries and nested archive names included,
/// one level deep.
///
/// The file handle is acquired once at construction and held until the walker
/// is dropped, so early abandonment of the sequence still releases it.
pub(crate) struct ArchiveWalker {
    archive: ZipArchive<File>,
    index: usize,
}

impl ArchiveWalker {
    /// Open `location` and read its central directory.
    ///
    /// Fails if the file cannot be opened or is not a readable zip archive.
    /// The factory downgrades this failure to an empty contribution; it is
    /// never swallowed here.
    pub(crate) fn open(location: &Path) -> Result<Self, WalkError> {
        let file = File::open(location).map_err(|source| WalkError::Io {
            path: location.to_path_buf(),
            source,
        })?;
        let archive = ZipArchive::new(file).map_err(|source| WalkError::Archive {
            path: location.to_path_buf(),
            source,
        })?;

        Ok(Self { archive, index: 0 })
    }
}

impl Iterator for ArchiveWalker {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let name = self.archive.name_for_index(self.index)?.to_owned();
        self.index += 1;
        Some(name)
    }
}
