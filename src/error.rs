use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalkError {
    // Filesystem
    #[error("cannot read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Archives
    #[error("cannot read archive {path}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    // Manifest classpath
    #[error("malformed classpath entry `{0}`")]
    InvalidClasspathUri(String),
}

impl WalkError {
    /// The path this error occurred at, if applicable.
    /// Callers use this to present "Skipped: <path>" without pattern matching on variants.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } | Self::Archive { path, .. } => Some(path),
            Self::InvalidClasspathUri(_) => None,
        }
    }

    /// Whether the walk can continue after this error.
    ///
    /// Recoverable errors (unreadable files, corrupt archives) are logged at the
    /// point of occurrence and become an empty contribution — the walk keeps going.
    ///
    /// A malformed classpath URI is not recoverable: the manifest's token list
    /// cannot be trusted once one token fails to parse, so resolution aborts.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Archive { .. })
    }
}
