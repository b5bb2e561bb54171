/// Defines how [`Cleaner`](crate::Cleaner) treats an experiment directory
/// that has no results directory while
/// [`Retention::KeepResultFiles`](crate::Retention::KeepResultFiles)
/// is configured.
///
/// The historical per-site maintenance scripts disagreed on this point,
/// one checking for existence and one failing loudly; both behaviors
/// remain available.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MissingResultsDir {
    /// The experiment directory is skipped.
    Skip,

    /// The cleanup pass stops with
    /// [`KeeperError::MissingResultsDir`](crate::KeeperError::MissingResultsDir).
    Fail,
}
