use std::path::PathBuf;

/// Describes errors of the maintenance passes.
///
/// Note that, in line with the best-effort character of directory
/// housekeeping, a missing source file during collection and a failing
/// cleanup script during propagation are *not* errors; they are reported
/// as warnings through the `log` facade and the pass continues.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum KeeperError {
    /// The given root is not an accessible directory.
    #[error("root {0:?} is not an accessible directory")]
    BadRootDirectory(PathBuf),

    /// An experiment directory lacks its results directory, and the pass
    /// was configured with
    /// [`MissingResultsDir::Fail`](crate::MissingResultsDir::Fail).
    #[error("results directory {0:?} does not exist")]
    MissingResultsDir(PathBuf),

    /// The bundle destination defaults to the home directory,
    /// but `HOME` is not set.
    #[error("the bundle destination defaults to the home directory, but HOME is not set")]
    NoHomeDirectory,

    /// Access to the filesystem failed.
    #[error("filesystem access failed")]
    Io(#[from] std::io::Error),

    /// A filename pattern cannot be compiled.
    #[error("invalid filename pattern")]
    Pattern(#[from] glob::PatternError),

    /// Traversing the directory tree failed.
    #[error("directory traversal failed")]
    Walk(#[from] walkdir::Error),
}
