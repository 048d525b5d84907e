//! # cpwalk
//!
//! Lazy classpath walker — one ordered stream of file names across
//! directories, jars and manifest classpaths.
//!
//! Given a root location that may be a directory, a zip-format archive, or an
//! archive named `classpath.jar` whose manifest `Class-Path` attribute points
//! at further locations, cpwalk produces a single lazily-pulled sequence of
//! relative file names. Turning those names into loadable classes, filtering
//! them, or feeding them to a test runner is the caller's business — cpwalk
//! owns the traversal and nothing else.
//!
//! # Quick Start
//!
//! ```rust
//! use std::fs;
//!
//! let dir = tempfile::tempdir().unwrap();
//! fs::write(dir.path().join("Alpha.class"), b"").unwrap();
//! fs::write(dir.path().join("Beta.class"), b"").unwrap();
//!
//! let mut names: Vec<String> = cpwalk::scan(dir.path())
//!     .search_in_archives(true)
//!     .run()
//!     .unwrap()
//!     .collect();
//! names.sort();
//!
//! assert_eq!(names, ["Alpha.class", "Beta.class"]);
//! ```
//!
//! # Manifest classpaths
//!
//! Deployment tooling often ships a thin `classpath.jar` whose only job is to
//! name the real classpath in its manifest. With
//! [`parse_manifest_classpath`](Scanner::parse_manifest_classpath) enabled,
//! cpwalk resolves each `Class-Path` URI and chains the contents of every
//! location, in declaration order:
//!
//! ```rust,no_run
//! let names = cpwalk::scan("/build/libs/classpath.jar")
//!     .search_in_archives(true)
//!     .parse_manifest_classpath(true)
//!     .run()?;
//!
//! for name in names {
//!     println!("{name}");
//! }
//! # Ok::<(), cpwalk::WalkError>(())
//! ```
//!
//! A `classpath.jar` reached *through* another manifest is treated as an
//! ordinary archive, so chained manifests cannot recurse without bound.
//!
//! # Failure behavior
//!
//! One unreadable jar never aborts the walk: archive-open and manifest-read
//! failures are logged through [`tracing`] and contribute nothing. Only a
//! malformed manifest classpath URI is a hard error — it means the build
//! artifact itself is broken. See [`WalkError`].

#![forbid(unsafe_code)]

mod archive;
mod builder;
mod dir;
mod error;
mod manifest;
mod walker;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::Scanner;
pub use error::WalkError;
pub use walker::FileNames;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`Scanner`] rooted at `location`.
///
/// Both policy flags start out disabled: by default only directories are
/// traversed, and every other location shape yields an empty sequence.
///
/// # Example
///
/// ```rust
/// use std::fs;
///
/// let dir = tempfile::tempdir().unwrap();
/// fs::create_dir(dir.path().join("org")).unwrap();
/// fs::write(dir.path().join("org/Example.class"), b"").unwrap();
///
/// let names: Vec<String> = cpwalk::scan(dir.path()).run().unwrap().collect();
///
/// assert_eq!(names, ["org/Example.class"]);
/// ```
pub fn scan(location: impl Into<std::path::PathBuf>) -> Scanner {
    Scanner::new(location.into())
}
