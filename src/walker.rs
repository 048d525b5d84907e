use std::path::Path;

use tracing::warn;

use crate::archive::ArchiveWalker;
use crate::dir::DirWalker;
use crate::error::WalkError;
use crate::manifest::ManifestWalker;

/// File name that marks an archive as a manifest-classpath pointer rather
/// than content to enumerate. Fixed by convention, not customizable.
pub(crate) const CLASSPATH_JAR: &str = "classpath.jar";

// ---------------------------------------------------------------------------
// TraversalPolicy
// ---------------------------------------------------------------------------

/// Traversal flags passed from the builder down through recursive factory calls.
///
/// `pub(crate)` — not part of the public API. Callers configure these via the
/// builder methods (`.search_in_archives()`, `.parse_manifest_classpath()`).
#[derive(Debug, Clone, Copy)]
pub(crate) struct TraversalPolicy {
    pub search_in_archives: bool,
    pub parse_manifest_classpath: bool,
}

impl TraversalPolicy {
    /// The policy handed to sub-walkers while a manifest is being resolved.
    ///
    /// Manifest parsing is forced off so a `classpath.jar` reached through
    /// another manifest is treated as an ordinary archive — chained manifests
    /// would otherwise recurse without bound.
    pub(crate) fn without_manifest_parsing(self) -> Self {
        Self {
            search_in_archives: self.search_in_archives,
            parse_manifest_classpath: false,
        }
    }
}

// ---------------------------------------------------------------------------
// FileNames
// ---------------------------------------------------------------------------

/// A lazy, single-pass sequence of relative file names.
///
/// Produced by [`Scanner::run`](crate::Scanner::run). Names use `/`-separated
/// segments regardless of host path conventions, so directory entries compare
/// directly against archive entry names. Consume it like any iterator; once
/// exhausted it stays exhausted. Dropping it early releases any archive
/// handles still held.
pub struct FileNames {
    inner: Walker,
}

/// The four walker variants, selected once by the factory's decision table.
enum Walker {
    Empty,
    Directory(DirWalker),
    Archive(ArchiveWalker),
    Manifest(ManifestWalker),
}

impl FileNames {
    pub(crate) fn empty() -> Self {
        Self {
            inner: Walker::Empty,
        }
    }

    pub(crate) fn directory(walker: DirWalker) -> Self {
        Self {
            inner: Walker::Directory(walker),
        }
    }

    pub(crate) fn archive(walker: ArchiveWalker) -> Self {
        Self {
            inner: Walker::Archive(walker),
        }
    }

    pub(crate) fn manifest(walker: ManifestWalker) -> Self {
        Self {
            inner: Walker::Manifest(walker),
        }
    }
}

impl std::fmt::Debug for FileNames {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.inner {
            Walker::Empty => "Empty",
            Walker::Directory(_) => "Directory",
            Walker::Archive(_) => "Archive",
            Walker::Manifest(_) => "Manifest",
        };
        f.debug_struct("FileNames").field("inner", &kind).finish()
    }
}

impl Iterator for FileNames {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match &mut self.inner {
            Walker::Empty => None,
            Walker::Directory(w) => w.next(),
            Walker::Archive(w) => w.next(),
            Walker::Manifest(w) => w.next(),
        }
    }
}

// ---------------------------------------------------------------------------
// create_for()
// ---------------------------------------------------------------------------

/// Pick the walker for one classpath location.
///
/// This is the factory's exhaustive decision table — every location shape maps
/// to exactly one variant, with the empty walker as the default arm. Called by
/// `Scanner::run()` for the root and re-entered by the manifest resolver for
/// each classpath entry it discovers.
///
/// An archive that fails to open is logged and skipped (empty contribution) so
/// that one bad jar never aborts sibling traversal. A malformed manifest
/// classpath URI is the only hard error.
pub(crate) fn create_for(location: &Path, policy: TraversalPolicy) -> Result<FileNames, WalkError> {
    let name = location
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    if policy.parse_manifest_classpath && name == CLASSPATH_JAR {
        let walker = ManifestWalker::open(location, policy.without_manifest_parsing())?;
        return Ok(FileNames::manifest(walker));
    }

    if policy.search_in_archives && is_archive_name(name) {
        return match ArchiveWalker::open(location) {
            Ok(walker) => Ok(FileNames::archive(walker)),
            Err(err) => {
                warn!(path = %location.display(), error = %err, "skipping unreadable archive");
                Ok(FileNames::empty())
            }
        };
    }

    if location.is_dir() {
        return Ok(FileNames::directory(DirWalker::new(location)));
    }

    Ok(FileNames::empty())
}

/// Only the two conventional suffixes, case-sensitive: `.Jar` is not an archive.
fn is_archive_name(name: &str) -> bool {
    name.ends_with(".jar") || name.ends_with(".JAR")
}

#[cfg(test)]
mod tests {
    use super::is_archive_name;

    #[test]
    fn archive_suffixes_are_literal() {
        assert!(is_archive_name("content.jar"));
        assert!(is_archive_name("CONTENT.JAR"));
        assert!(!is_archive_name("content.Jar"));
        assert!(!is_archive_name("content.zip"));
        assert!(!is_archive_name("jar"));
    }
}
