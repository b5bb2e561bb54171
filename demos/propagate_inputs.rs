use flexi_logger::Logger;
use run_keeper::Propagator;
use std::error::Error;

// Copies the input and script files of a finished spinup experiment into
// the directory of the next, longer spinup, and lets the target's
// make_clean.sh strip everything else.
fn main() -> Result<(), Box<dyn Error>> {
    let _logger = Logger::try_with_str("info")?.start()?;

    Propagator::new()
        .template("spinup_1500_years")
        .target("spinup_2500_years")
        .run(".")?;

    Ok(())
}
