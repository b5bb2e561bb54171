use crate::{
    util, BundleSpec, KeeperError, Traversal, DEFAULT_BUNDLE_DIR, DEFAULT_RESULTS_DIR,
    DEFAULT_RESULT_FILES,
};
use glob::Pattern;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

const INS_FILE_PATTERN: &str = "*.ins";

/// Gathers the result files of all experiment directories below a root
/// directory into a single archived bundle.
///
/// The collector removes and recreates the bundle directory (`outputs`)
/// below the root, mirrors the experiment directories into it, copies each
/// experiment's instruction files (`*.ins`) and its result files from the
/// results directory (`all_outputs`) into the mirror, archives the bundle
/// directory into a tar archive named by a [`BundleSpec`], moves the archive
/// into the destination directory (by default the operator's home
/// directory), and finally deletes the working bundle directory.
///
/// A result file that an experiment never produced is reported as a warning
/// and skipped; the bundle then simply lacks that file. Re-collecting
/// overwrites both the bundle directory and a previous archive of the
/// same name.
///
/// ## Example
///
/// ```rust
/// use run_keeper::{BundleSpec, Collector, Traversal};
///
/// let archive = Collector::new()
///     .traversal(Traversal::Recursive)
///     .bundle_spec(BundleSpec::default().discriminant("Sierra_Nevada"))
///     .run("simulations/Sierra_Nevada")
///     .unwrap_or_else(|e| panic!("collection failed with {e}"));
/// println!("bundle written to {archive:?}");
/// ```
pub struct Collector {
    traversal: Traversal,
    copy_ins_files: bool,
    result_files: Vec<String>,
    results_dirname: String,
    bundle_dirname: String,
    bundle_spec: BundleSpec,
    o_destination: Option<PathBuf>,
    #[cfg(feature = "compress")]
    compress: bool,
}

/// Simple methods for influencing the behavior of the `Collector`.
impl Collector {
    /// Creates a `Collector` that mirrors the immediate subdirectories of
    /// the root, collects the standard result files
    /// ([`DEFAULT_RESULT_FILES`](crate::DEFAULT_RESULT_FILES)) plus the
    /// `*.ins` files, and moves the archive `outputs.tar` into the home
    /// directory.
    #[must_use]
    pub fn new() -> Collector {
        Collector {
            traversal: Traversal::TopLevel,
            copy_ins_files: true,
            result_files: DEFAULT_RESULT_FILES.iter().map(ToString::to_string).collect(),
            results_dirname: String::from(DEFAULT_RESULTS_DIR),
            bundle_dirname: String::from(DEFAULT_BUNDLE_DIR),
            bundle_spec: BundleSpec::default(),
            o_destination: None,
            #[cfg(feature = "compress")]
            compress: false,
        }
    }

    /// Defines how experiment directories are discovered below the root.
    #[must_use]
    pub fn traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Makes the collector leave the instruction files (`*.ins`) out of
    /// the bundle.
    #[must_use]
    pub fn suppress_ins_files(mut self) -> Self {
        self.copy_ins_files = false;
        self
    }

    /// Specifies the result files to collect from each experiment's results
    /// directory, instead of
    /// [`DEFAULT_RESULT_FILES`](crate::DEFAULT_RESULT_FILES).
    #[must_use]
    pub fn result_files<I, S>(mut self, result_files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.result_files = result_files.into_iter().map(Into::into).collect();
        self
    }

    /// Specifies the name of the per-experiment results directory.
    /// The default is [`DEFAULT_RESULTS_DIR`](crate::DEFAULT_RESULTS_DIR).
    #[must_use]
    pub fn results_dirname<S: Into<String>>(mut self, results_dirname: S) -> Self {
        self.results_dirname = results_dirname.into();
        self
    }

    /// Specifies the name of the working directory into which the results
    /// are mirrored before archiving. Experiment directories whose relative
    /// path contains this name are never collected.
    /// The default is [`DEFAULT_BUNDLE_DIR`](crate::DEFAULT_BUNDLE_DIR).
    #[must_use]
    pub fn bundle_dirname<S: Into<String>>(mut self, bundle_dirname: S) -> Self {
        self.bundle_dirname = bundle_dirname.into();
        self
    }

    /// Specifies the name of the bundle archive. See [`BundleSpec`].
    #[must_use]
    pub fn bundle_spec(mut self, bundle_spec: BundleSpec) -> Self {
        self.bundle_spec = bundle_spec;
        self
    }

    /// Specifies the directory into which the finished archive is moved,
    /// instead of the home directory.
    #[must_use]
    pub fn destination<P: Into<PathBuf>>(mut self, destination: P) -> Self {
        self.o_destination = Some(destination.into());
        self
    }

    /// Specifies the directory into which the finished archive is moved;
    /// with `None`, the home directory is used.
    #[must_use]
    pub fn o_destination<P: Into<PathBuf>>(mut self, o_destination: Option<P>) -> Self {
        self.o_destination = o_destination.map(Into::into);
        self
    }

    /// Makes the collector compress the bundle archive with gzip; the
    /// archive name gets the additional suffix `.gz`.
    #[cfg_attr(docsrs, doc(cfg(feature = "compress")))]
    #[cfg(feature = "compress")]
    #[must_use]
    pub fn compress(mut self) -> Self {
        self.compress = true;
        self
    }

    /// Runs the collection pass below the given root directory and returns
    /// the path of the finished bundle archive.
    ///
    /// # Errors
    ///
    /// `KeeperError::BadRootDirectory` if the root is not an accessible
    /// directory, `KeeperError::NoHomeDirectory` if no destination is
    /// configured and `HOME` is not set, and `KeeperError::Io` or
    /// `KeeperError::Walk` if the filesystem itself misbehaves.
    pub fn run<P: AsRef<Path>>(&self, root: P) -> Result<PathBuf, KeeperError> {
        let root = root.as_ref();
        let bundle_dir = root.join(&self.bundle_dirname);
        remove_existing(&bundle_dir)?;
        fs::create_dir_all(&bundle_dir)?;

        let ins_pattern = Pattern::new(INS_FILE_PATTERN)?;
        for directory in util::subdirectories(root, self.traversal)? {
            let Ok(relative) = directory.strip_prefix(root) else {
                continue;
            };
            // never mirror the bundle directory into itself
            if relative.to_string_lossy().contains(&self.bundle_dirname) {
                continue;
            }
            self.collect_experiment(&directory, &bundle_dir.join(relative), &ins_pattern)?;
        }

        let archive = self.write_archive(root, &bundle_dir)?;
        let archive = util::relocate(&archive, &self.destination_dir()?)?;
        fs::remove_dir_all(&bundle_dir)?;
        info!("collected bundle {archive:?}");
        Ok(archive)
    }

    fn collect_experiment(
        &self,
        directory: &Path,
        mirror: &Path,
        ins_pattern: &Pattern,
    ) -> Result<(), KeeperError> {
        fs::create_dir_all(mirror)?;
        if self.copy_ins_files {
            util::copy_matching(directory, ins_pattern, mirror)?;
        }
        let results_dir = directory.join(&self.results_dirname);
        for result_file in &self.result_files {
            let source = results_dir.join(result_file);
            info!("now copying {source:?}");
            if source.is_file() {
                fs::copy(&source, mirror.join(result_file))?;
            } else {
                warn!("{source:?} is missing and was not collected");
            }
        }
        Ok(())
    }

    fn write_archive(&self, root: &Path, bundle_dir: &Path) -> Result<PathBuf, KeeperError> {
        let filename = self.bundle_spec.filename();
        #[cfg(feature = "compress")]
        let filename = if self.compress {
            format!("{filename}.gz")
        } else {
            filename
        };
        let archive_path = root.join(filename);
        info!("archiving {bundle_dir:?} as {archive_path:?}");
        let file = fs::File::create(&archive_path)?;

        #[cfg(feature = "compress")]
        if self.compress {
            let gz_encoder =
                flate2::write::GzEncoder::new(file, flate2::Compression::fast());
            let mut builder = tar::Builder::new(gz_encoder);
            builder.append_dir_all(&self.bundle_dirname, bundle_dir)?;
            builder.into_inner()?.finish()?;
            return Ok(archive_path);
        }

        let mut builder = tar::Builder::new(file);
        builder.append_dir_all(&self.bundle_dirname, bundle_dir)?;
        builder.into_inner()?;
        Ok(archive_path)
    }

    fn destination_dir(&self) -> Result<PathBuf, KeeperError> {
        match &self.o_destination {
            Some(destination) => Ok(destination.clone()),
            None => std::env::var_os("HOME")
                .map(PathBuf::from)
                .ok_or(KeeperError::NoHomeDirectory),
        }
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

// rm -rf: takes a file or a directory, tolerates absence.
fn remove_existing(path: &Path) -> Result<(), KeeperError> {
    if path.is_dir() {
        fs::remove_dir_all(path)?;
    } else if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}
