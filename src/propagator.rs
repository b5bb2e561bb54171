use crate::{util, KeeperError, DEFAULT_CLEANUP_SCRIPT};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::process::Command;

const INPUT_PATTERNS: [&str; 3] = ["*.ins", "gridlist*", "*.sh"];

/// Copies the input and script files of template experiment directories
/// into target experiment directories and runs each target's local
/// cleanup script.
///
/// For every (template, target) pair, all files matching `*.ins`,
/// `gridlist*`, and `*.sh` are copied from the template into the target,
/// and the target's `./make_clean.sh` is then executed with no arguments.
/// The script runs with the target as its working directory; the calling
/// process never changes its own working directory. Its contract is to
/// delete everything in the target that is neither an input nor a script
/// file, so that the target is left ready for a fresh model run.
///
/// A pattern that matches nothing in the template, and a cleanup script
/// that is missing, not executable, or exits with failure, are reported as
/// warnings; the pass continues with the next pair.
///
/// ## Example
///
/// ```rust
/// use run_keeper::Propagator;
///
/// Propagator::new()
///     .template("spinup_1500_years")
///     .target("spinup_2500_years")
///     .run("simulations/Sierra_Nevada")
///     .unwrap_or_else(|e| panic!("propagation failed with {e}"));
/// ```
pub struct Propagator {
    templates: Vec<PathBuf>,
    targets: Vec<PathBuf>,
    input_patterns: Vec<String>,
    run_cleanup_script: bool,
    cleanup_script: String,
}

/// Simple methods for influencing the behavior of the `Propagator`.
impl Propagator {
    /// Creates a `Propagator` with empty template and target lists that
    /// copies `*.ins`, `gridlist*`, and `*.sh` files and runs each target's
    /// `make_clean.sh` afterwards.
    #[must_use]
    pub fn new() -> Propagator {
        Propagator {
            templates: Vec::new(),
            targets: Vec::new(),
            input_patterns: INPUT_PATTERNS.iter().map(ToString::to_string).collect(),
            run_cleanup_script: true,
            cleanup_script: String::from(DEFAULT_CLEANUP_SCRIPT),
        }
    }

    /// Adds a template directory, relative to the root given to
    /// [`Propagator::run`].
    #[must_use]
    pub fn template<P: Into<PathBuf>>(mut self, template: P) -> Self {
        self.templates.push(template.into());
        self
    }

    /// Adds several template directories, relative to the root given to
    /// [`Propagator::run`].
    #[must_use]
    pub fn templates<I, P>(mut self, templates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.templates.extend(templates.into_iter().map(Into::into));
        self
    }

    /// Adds a target directory, relative to the root given to
    /// [`Propagator::run`].
    #[must_use]
    pub fn target<P: Into<PathBuf>>(mut self, target: P) -> Self {
        self.targets.push(target.into());
        self
    }

    /// Adds several target directories, relative to the root given to
    /// [`Propagator::run`].
    #[must_use]
    pub fn targets<I, P>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.targets.extend(targets.into_iter().map(Into::into));
        self
    }

    /// Specifies the filename patterns of the input and script files to
    /// copy, instead of `*.ins`, `gridlist*`, and `*.sh`.
    #[must_use]
    pub fn input_patterns<I, S>(mut self, input_patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input_patterns = input_patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Makes the propagator leave the targets as they are after copying,
    /// without running their cleanup script.
    #[must_use]
    pub fn skip_cleanup_script(mut self) -> Self {
        self.run_cleanup_script = false;
        self
    }

    /// Specifies the name of the per-target cleanup script.
    /// The default is
    /// [`DEFAULT_CLEANUP_SCRIPT`](crate::DEFAULT_CLEANUP_SCRIPT).
    #[must_use]
    pub fn cleanup_script<S: Into<String>>(mut self, cleanup_script: S) -> Self {
        self.cleanup_script = cleanup_script.into();
        self
    }

    /// Runs the propagation pass: copies the input and script files of every
    /// template into every target below the given root directory, then runs
    /// each target's cleanup script.
    ///
    /// # Errors
    ///
    /// `KeeperError::BadRootDirectory` if the root is not an accessible
    /// directory, `KeeperError::Pattern` for an invalid input pattern, and
    /// `KeeperError::Io` if a template cannot be listed or a target cannot
    /// be written.
    pub fn run<P: AsRef<Path>>(&self, root: P) -> Result<(), KeeperError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(KeeperError::BadRootDirectory(root.to_path_buf()));
        }
        let patterns = util::compile_patterns(&self.input_patterns)?;

        for template in &self.templates {
            for target in &self.targets {
                let template_dir = root.join(template);
                let target_dir = root.join(target);
                info!("copying inputs and scripts from {template_dir:?} to {target_dir:?}");
                for pattern in &patterns {
                    let copied = util::copy_matching(&template_dir, pattern, &target_dir)?;
                    if copied == 0 {
                        let pattern = pattern.as_str();
                        warn!("no file matching {pattern} in {template_dir:?}");
                    }
                }
                if self.run_cleanup_script {
                    self.run_cleanup_script_in(&target_dir);
                }
            }
        }
        Ok(())
    }

    // Failures of the cleanup script are reported and tolerated; the
    // operator reads the console, the pass continues with the next target.
    fn run_cleanup_script_in(&self, target_dir: &Path) {
        let program = Path::new(".").join(&self.cleanup_script);
        info!("running {program:?} in {target_dir:?}");
        match Command::new(&program).current_dir(target_dir).status() {
            Ok(status) if status.success() => {}
            Ok(status) => {
                warn!("{program:?} in {target_dir:?} failed with {status}");
            }
            Err(e) => {
                warn!("{program:?} in {target_dir:?} could not be run: {e}");
            }
        }
    }
}

impl Default for Propagator {
    fn default() -> Self {
        Self::new()
    }
}
