use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::warn;

/// Lazy depth-first enumeration of every regular file beneath a directory.
///
/// Yields paths relative to the root with `/`-separated segments, in the
/// underlying directory-listing order at each level. Directories are descended
/// but never emitted; symlinks are not followed. A root that vanishes
/// mid-traversal ends the sequence after a diagnostic instead of failing the
/// enclosing walk.
pub(crate) struct DirWalker {
    root: PathBuf,
    walk: ignore::Walk,
}

impl DirWalker {
    pub(crate) fn new(root: &Path) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .ignore(false)
            .parents(false)
            .hidden(false)
            .follow_links(false)
            .same_file_system(false);

        Self {
            root: root.to_path_buf(),
            walk: builder.build(),
        }
    }
}

impl Iterator for DirWalker {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(root = %self.root.display(), error = %err, "directory walk error");
                    continue;
                }
            };

            // Skip the root itself
            if entry.depth() == 0 {
                continue;
            }

            let is_file = entry.file_type().map(|ft| ft.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }

            if let Some(name) = relative_name(&self.root, entry.path()) {
                return Some(name);
            }
        }
    }
}

/// Path relative to `root`, joined with `/` so directory names compare
/// directly against archive entry names on any host.
fn relative_name(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let segments: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::relative_name;
    use std::path::Path;

    #[test]
    fn relative_names_use_forward_slashes() {
        let root = Path::new("/tmp/root");
        assert_eq!(
            relative_name(root, Path::new("/tmp/root/org/Example.class")),
            Some("org/Example.class".to_string())
        );
        assert_eq!(
            relative_name(root, Path::new("/tmp/root/top.class")),
            Some("top.class".to_string())
        );
        assert_eq!(relative_name(root, Path::new("/elsewhere/x")), None);
    }
}
