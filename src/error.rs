use std::{io, path::PathBuf, result, sync::PoisonError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("'{}' is not a valid directory", .0.display())]
    InvalidDirectory(PathBuf),
    #[error("permission denied reading '{}': {}", .0.display(), .1)]
    AccessDenied(PathBuf, io::Error),
    #[error("error walking '{}': {}", .path.display(), .source)]
    WalkFailed { path: PathBuf, source: io::Error },

    #[error("cache lock poisoned")]
    Poisoned,
}

impl Error {
    pub fn walk_failed<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::WalkFailed {
            path: path.into(),
            source,
        }
    }

    /// Classifies a failed metadata read on the directory being queried.
    pub(crate) fn from_dir_io<P: Into<PathBuf>>(path: P, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::AccessDenied(path.into(), err),
            _ => Self::InvalidDirectory(path.into()),
        }
    }
}

impl<G> From<PoisonError<G>> for Error {
    fn from(_: PoisonError<G>) -> Self {
        Self::Poisoned
    }
}

pub type Result<T> = result::Result<T, Error>;

pub trait IoExt<T> {
    fn walking<P: Into<PathBuf>>(self, at: P) -> Result<T>;
}

impl<T> IoExt<T> for io::Result<T> {
    fn walking<P: Into<PathBuf>>(self, at: P) -> Result<T> {
        self.map_err(|e| Error::walk_failed(at, e))
    }
}
