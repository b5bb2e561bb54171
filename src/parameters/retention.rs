use crate::DEFAULT_RESULT_FILES;

/// Defines the strategy for handling the results directory (`all_outputs`)
/// of an experiment directory.
///
/// Is used in [`Cleaner::retention`](crate::Cleaner::retention).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Retention {
    /// The results directory is not touched - its content remains as the
    /// simulation engine left it.
    Untouched,

    /// The whole results directory is removed, result files included.
    /// An experiment directory without a results directory is left alone.
    RemoveAll,

    /// Every file inside the results directory whose name is not in the
    /// list is deleted; the listed result files remain.
    KeepResultFiles(Vec<String>),
}

impl Retention {
    /// Keeps exactly the standard result files,
    /// [`DEFAULT_RESULT_FILES`](crate::DEFAULT_RESULT_FILES).
    #[must_use]
    pub fn keep_default_result_files() -> Self {
        Self::KeepResultFiles(DEFAULT_RESULT_FILES.iter().map(ToString::to_string).collect())
    }
}
