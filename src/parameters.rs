mod missing_results_dir;
mod retention;
mod traversal;

pub use missing_results_dir::MissingResultsDir;
pub use retention::Retention;
pub use traversal::Traversal;
