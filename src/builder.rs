use std::path::PathBuf;

use crate::error::WalkError;
use crate::walker::{create_for, FileNames, TraversalPolicy};

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

/// Entry point for configuring and running a classpath walk.
///
/// Created via [`cpwalk::scan()`](crate::scan). Configure with chained builder
/// methods, then call [`run()`](Scanner::run) to obtain the name sequence.
///
/// # Example
///
/// ```rust,ignore
/// let names = cpwalk::scan("/build/libs/classpath.jar")
///     .search_in_archives(true)
///     .parse_manifest_classpath(true)
///     .run()?;
///
/// for name in names {
///     println!("{name}");
/// }
/// ```
pub struct Scanner {
    root: PathBuf,
    search_in_archives: bool,
    parse_manifest_classpath: bool,
}

impl Scanner {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self {
            root,
            search_in_archives: false,
            parse_manifest_classpath: false,
        }
    }

    // ── Policy ────────────────────────────────────────────────────────────

    /// List the entry names of `.jar`/`.JAR` archives the walk dispatches on —
    /// the root itself or a location named by a manifest classpath. Off by
    /// default; with the flag off such archives contribute nothing.
    ///
    /// Only those two literal suffixes are recognized — the check is
    /// case-sensitive, so `.Jar` is treated as a plain file.
    pub fn search_in_archives(mut self, yes: bool) -> Self {
        self.search_in_archives = yes;
        self
    }

    /// Treat an archive literally named `classpath.jar` as a pointer to
    /// further locations (its manifest `Class-Path` attribute) rather than as
    /// content to enumerate. Off by default.
    ///
    /// The flag never carries into a `classpath.jar` reached through another
    /// manifest — chained manifests are treated as ordinary archives to keep
    /// resolution finite.
    pub fn parse_manifest_classpath(mut self, yes: bool) -> Self {
        self.parse_manifest_classpath = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Select the walker for the root location and return its name sequence.
    ///
    /// No names are produced until the sequence is pulled; filesystem and
    /// archive reads happen per pull. A root that matches no supported shape
    /// (neither directory, archive, nor manifest pointer) yields an empty
    /// sequence rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `Err` only for a malformed manifest classpath entry
    /// ([`WalkError::InvalidClasspathUri`]). Unreadable archives and
    /// manifests are logged and skipped — see [`WalkError::is_recoverable`].
    pub fn run(self) -> Result<FileNames, WalkError> {
        let policy = TraversalPolicy {
            search_in_archives: self.search_in_archives,
            parse_manifest_classpath: self.parse_manifest_classpath,
        };

        create_for(&self.root, policy)
    }
}
