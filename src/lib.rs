// only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
//! Housekeeping for simulation run directories.
//!
//! A run of the forest-growth model leaves every experiment directory littered
//! with transient `run*` and `progress*` artifacts, a run log (`output*.log`),
//! and an `all_outputs` directory holding the result tables. This crate
//! packages the three recurring maintenance passes over a tree of such
//! experiment directories:
//!
//! * [`Cleaner`] removes the transient artifacts and prunes the `all_outputs`
//!   directory down to the result files worth keeping,
//! * [`Collector`] gathers the result files of all experiments into a fresh
//!   mirror directory, archives the mirror into a tar bundle, and moves the
//!   bundle to the operator's home directory,
//! * [`Propagator`] copies input and script files from template experiment
//!   directories into new ones and runs their local cleanup script.
//!
//! Each entry point is a builder; its defaults reproduce the historical
//! per-site maintenance scripts, and the per-site differences are expressed
//! with [`Traversal`], [`Retention`], and [`MissingResultsDir`]. E.g.
//!
//! ```rust
//! use run_keeper::{Cleaner, Retention, Traversal};
//!
//! Cleaner::new()
//!     .traversal(Traversal::Recursive)
//!     .retention(Retention::keep_default_result_files())
//!     .run(".")
//!     .unwrap();
//! ```
//!
//! Progress is reported through the `log` facade: one `info` line per visited
//! directory, a `warn` line for every tolerated irregularity (a result file
//! that a simulation never produced, a cleanup script that failed), and
//! `trace` lines for individual file operations.
//!
//! All three passes are strictly sequential and assume they are the only
//! writer below their root directory; running two of them concurrently
//! against the same tree is unsupported.

mod bundle_spec;
mod cleaner;
mod collector;
mod keeper_error;
mod parameters;
mod propagator;
mod util;

pub use crate::bundle_spec::BundleSpec;
pub use crate::cleaner::Cleaner;
pub use crate::collector::Collector;
pub use crate::keeper_error::KeeperError;
pub use crate::parameters::{MissingResultsDir, Retention, Traversal};
pub use crate::propagator::Propagator;

/// The result files that the simulation engine writes into the results
/// directory of an experiment, and that [`Cleaner`] and [`Collector`]
/// retain or collect by default.
pub const DEFAULT_RESULT_FILES: [&str; 3] = ["aaet.out", "cflux.out", "cpool.out"];

/// Default name of the per-experiment directory into which the simulation
/// engine writes its result files.
pub const DEFAULT_RESULTS_DIR: &str = "all_outputs";

/// Default name of the working directory into which [`Collector`] mirrors
/// the result files before archiving them; also the default basename of the
/// bundle archive (see [`BundleSpec`]).
pub const DEFAULT_BUNDLE_DIR: &str = "outputs";

/// Default name of the per-experiment cleanup script that [`Propagator`]
/// runs after populating a target directory.
pub const DEFAULT_CLEANUP_SCRIPT: &str = "make_clean.sh";
