use crate::{util, KeeperError, MissingResultsDir, Retention, Traversal, DEFAULT_RESULTS_DIR};
use glob::Pattern;
use log::{info, trace};
use std::fs;
use std::path::Path;

const TRANSIENT_PATTERNS: [&str; 2] = ["run*", "progress*"];
const RUN_LOG_PATTERN: &str = "output*.log";

/// Removes the transient artifacts that a model run leaves behind in the
/// experiment directories below a root directory.
///
/// Per visited experiment directory, the cleaner removes
///
/// * all files and directories matching `run*` or `progress*`,
/// * the run log (`output*.log`), unless [`Cleaner::keep_run_logs`]
///   is chosen,
/// * and, depending on [`Retention`], nothing, everything, or everything
///   except the listed result files inside the results directory
///   (`all_outputs`).
///
/// The defaults visit only the immediate subdirectories of the root and
/// leave the results directories untouched. Cleaning is idempotent: a second
/// run over an already cleaned tree changes nothing and reports no error.
///
/// ## Example
///
/// ```rust
/// use run_keeper::{Cleaner, Retention, Traversal};
///
/// Cleaner::new()
///     .traversal(Traversal::Recursive)
///     .retention(Retention::keep_default_result_files())
///     .run("simulations/Sierra_Nevada")
///     .unwrap_or_else(|e| panic!("cleanup failed with {e}"));
/// ```
pub struct Cleaner {
    traversal: Traversal,
    delete_run_logs: bool,
    retention: Retention,
    missing_results_dir: MissingResultsDir,
    results_dirname: String,
}

/// Simple methods for influencing the behavior of the `Cleaner`.
impl Cleaner {
    /// Creates a `Cleaner` that visits the immediate subdirectories of the
    /// root, removes their `run*`, `progress*`, and `output*.log` artifacts,
    /// and leaves their results directories untouched.
    #[must_use]
    pub fn new() -> Cleaner {
        Cleaner {
            traversal: Traversal::TopLevel,
            delete_run_logs: true,
            retention: Retention::Untouched,
            missing_results_dir: MissingResultsDir::Skip,
            results_dirname: String::from(DEFAULT_RESULTS_DIR),
        }
    }

    /// Defines how experiment directories are discovered below the root.
    #[must_use]
    pub fn traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Makes the cleaner leave the run logs (`output*.log`) in place.
    #[must_use]
    pub fn keep_run_logs(mut self) -> Self {
        self.delete_run_logs = false;
        self
    }

    /// Defines the strategy for handling the results directory of each
    /// experiment. The default is [`Retention::Untouched`].
    #[must_use]
    pub fn retention(mut self, retention: Retention) -> Self {
        self.retention = retention;
        self
    }

    /// Defines how an experiment directory without a results directory is
    /// treated when [`Retention::KeepResultFiles`] is configured.
    /// The default is [`MissingResultsDir::Skip`].
    #[must_use]
    pub fn missing_results_dir(mut self, missing_results_dir: MissingResultsDir) -> Self {
        self.missing_results_dir = missing_results_dir;
        self
    }

    /// Specifies the name of the per-experiment results directory.
    /// The default is [`DEFAULT_RESULTS_DIR`](crate::DEFAULT_RESULTS_DIR).
    #[must_use]
    pub fn results_dirname<S: Into<String>>(mut self, results_dirname: S) -> Self {
        self.results_dirname = results_dirname.into();
        self
    }

    /// Runs the cleanup pass below the given root directory.
    ///
    /// # Errors
    ///
    /// `KeeperError::BadRootDirectory` if the root is not an accessible
    /// directory, `KeeperError::MissingResultsDir` for an experiment without
    /// a results directory under [`MissingResultsDir::Fail`], and
    /// `KeeperError::Io` or `KeeperError::Walk` if the filesystem itself
    /// misbehaves.
    pub fn run<P: AsRef<Path>>(&self, root: P) -> Result<(), KeeperError> {
        let transient = util::compile_patterns(&TRANSIENT_PATTERNS)?;
        let run_log = Pattern::new(RUN_LOG_PATTERN)?;

        for directory in util::subdirectories(root.as_ref(), self.traversal)? {
            // cleaning a parent removes the `run*` directories that the
            // traversal has already enumerated below it
            if !directory.is_dir() {
                trace!("{directory:?} vanished during cleanup, skipped");
                continue;
            }
            info!("deleting run directories in {directory:?}");
            util::remove_matching(&directory, &transient)?;
            if self.delete_run_logs {
                util::remove_matching(&directory, std::slice::from_ref(&run_log))?;
            }
            self.apply_retention(&directory)?;
        }
        Ok(())
    }

    fn apply_retention(&self, directory: &Path) -> Result<(), KeeperError> {
        let results_dir = directory.join(&self.results_dirname);
        match &self.retention {
            Retention::Untouched => {}
            Retention::RemoveAll => {
                if results_dir.is_dir() {
                    info!("removing results directory {results_dir:?}");
                    fs::remove_dir_all(&results_dir)?;
                }
            }
            Retention::KeepResultFiles(result_files) => {
                if !results_dir.is_dir() {
                    return match self.missing_results_dir {
                        MissingResultsDir::Skip => Ok(()),
                        MissingResultsDir::Fail => {
                            Err(KeeperError::MissingResultsDir(results_dir))
                        }
                    };
                }
                info!("deleting files in {results_dir:?}");
                for entry in fs::read_dir(&results_dir)? {
                    let entry = entry?;
                    let name = entry.file_name();
                    let keep = result_files
                        .iter()
                        .any(|result_file| name.to_string_lossy() == result_file.as_str());
                    if !keep && entry.path().is_file() {
                        trace!("removing {:?}", entry.path());
                        fs::remove_file(entry.path())?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new()
    }
}
