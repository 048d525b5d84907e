use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::warn;
use url::Url;
use zip::ZipArchive;

use crate::error::WalkError;
use crate::walker::{create_for, FileNames, TraversalPolicy};

const MANIFEST_ENTRY: &str = "META-INF/MANIFEST.MF";
const CLASS_PATH_ATTRIBUTE: &str = "Class-Path";

/// Resolves a manifest-bearing archive into the chained contents of the
/// locations its `Class-Path` attribute declares.
///
/// Sub-walkers are built up front, one per classpath token in declaration
/// order, through the factory with manifest parsing disabled. Element
/// production stays lazy: sub-sequence *i+1* is not touched until *i* is
/// exhausted.
pub(crate) struct ManifestWalker {
    walkers: Vec<FileNames>,
    index: usize,
}

impl ManifestWalker {
    /// Read the archive's manifest and build a sub-walker per classpath entry.
    ///
    /// An unreadable archive or manifest degrades to an empty sequence after a
    /// diagnostic — a broken jar must not abort the enclosing traversal. A
    /// classpath token that fails to parse as a file URI is a hard error: the
    /// token list cannot be trusted once one entry is malformed.
    pub(crate) fn open(location: &Path, policy: TraversalPolicy) -> Result<Self, WalkError> {
        let class_path = match read_class_path(location) {
            Ok(value) => value,
            Err(err) => {
                warn!(path = %location.display(), error = %err, "skipping unreadable manifest");
                return Ok(Self::exhausted());
            }
        };

        let Some(class_path) = class_path else {
            return Ok(Self::exhausted());
        };

        let mut walkers = Vec::new();
        for token in class_path.split(' ').filter(|t| !t.is_empty()) {
            let entry = location_for(token)?;
            walkers.push(create_for(&entry, policy)?);
        }

        Ok(Self { walkers, index: 0 })
    }

    fn exhausted() -> Self {
        Self {
            walkers: Vec::new(),
            index: 0,
        }
    }
}

impl Iterator for ManifestWalker {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(current) = self.walkers.get_mut(self.index) {
            if let Some(name) = current.next() {
                return Some(name);
            }
            self.index += 1;
        }
        None
    }
}

/// The main-section `Class-Path` value of the archive's manifest, if any.
fn read_class_path(location: &Path) -> Result<Option<String>, WalkError> {
    let file = File::open(location).map_err(|source| WalkError::Io {
        path: location.to_path_buf(),
        source,
    })?;
    let mut archive = ZipArchive::new(file).map_err(|source| WalkError::Archive {
        path: location.to_path_buf(),
        source,
    })?;
    let mut entry = archive
        .by_name(MANIFEST_ENTRY)
        .map_err(|source| WalkError::Archive {
            path: location.to_path_buf(),
            source,
        })?;

    let mut raw = String::new();
    entry.read_to_string(&mut raw).map_err(|source| WalkError::Io {
        path: location.to_path_buf(),
        source,
    })?;

    Ok(main_attribute(&raw, CLASS_PATH_ATTRIBUTE))
}

/// Extract one attribute value from the manifest's main section.
///
/// Manifest lines wrap at 72 bytes; a physical line starting with a single
/// space continues the previous logical line. The main section ends at the
/// first empty line, and attribute names compare case-insensitively. Both LF
/// and CRLF endings are accepted.
fn main_attribute(manifest: &str, wanted: &str) -> Option<String> {
    let mut logical: Vec<String> = Vec::new();
    for line in manifest.lines() {
        if line.is_empty() {
            break;
        }
        match line.strip_prefix(' ') {
            Some(continuation) => {
                if let Some(last) = logical.last_mut() {
                    last.push_str(continuation);
                }
            }
            None => logical.push(line.to_owned()),
        }
    }

    logical.iter().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if !name.eq_ignore_ascii_case(wanted) {
            return None;
        }
        Some(value.strip_prefix(' ').unwrap_or(value).to_owned())
    })
}

/// Convert one classpath token (an absolute URI) to a filesystem location.
fn location_for(token: &str) -> Result<PathBuf, WalkError> {
    Url::parse(token)
        .ok()
        .and_then(|url| url.to_file_path().ok())
        .ok_or_else(|| WalkError::InvalidClasspathUri(token.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::{location_for, main_attribute};

    #[test]
    fn reads_main_attribute() {
        let manifest = "Manifest-Version: 1.0\nClass-Path: file:///a file:///b\n";
        assert_eq!(
            main_attribute(manifest, "Class-Path").as_deref(),
            Some("file:///a file:///b")
        );
    }

    #[test]
    fn attribute_names_are_case_insensitive() {
        let manifest = "CLASS-PATH: file:///a\n";
        assert_eq!(
            main_attribute(manifest, "Class-Path").as_deref(),
            Some("file:///a")
        );
    }

    #[test]
    fn unfolds_wrapped_lines() {
        // Wrapping may split mid-token; continuations concatenate with no
        // separator of their own.
        let manifest = "Class-Path: file:///first \n file:///sec\n ond\nOther: x\n";
        assert_eq!(
            main_attribute(manifest, "Class-Path").as_deref(),
            Some("file:///first file:///second")
        );
    }

    #[test]
    fn stops_at_end_of_main_section() {
        let manifest = "Manifest-Version: 1.0\n\nName: per-entry\nClass-Path: file:///late\n";
        assert_eq!(main_attribute(manifest, "Class-Path"), None);
    }

    #[test]
    fn accepts_crlf_endings() {
        let manifest = "Manifest-Version: 1.0\r\nClass-Path: file:///a\r\n\r\n";
        assert_eq!(
            main_attribute(manifest, "Class-Path").as_deref(),
            Some("file:///a")
        );
    }

    #[test]
    fn empty_value_is_preserved() {
        let manifest = "Class-Path: \n";
        assert_eq!(main_attribute(manifest, "Class-Path").as_deref(), Some(""));
    }

    #[test]
    fn rejects_non_uri_tokens() {
        assert!(location_for("not a uri").is_err());
        assert!(location_for("relative/path.jar").is_err());
        assert!(location_for("file:///tmp/content.jar").is_ok());
    }
}
