use flexi_logger::Logger;
use run_keeper::{Cleaner, Retention, Traversal};
use std::error::Error;

// Removes the transient run artifacts of every experiment directory below
// the current working directory and prunes each results directory down to
// the standard result files.
fn main() -> Result<(), Box<dyn Error>> {
    let _logger = Logger::try_with_str("info")?.start()?;

    Cleaner::new()
        .traversal(Traversal::Recursive)
        .retention(Retention::keep_default_result_files())
        .run(".")?;

    Ok(())
}
