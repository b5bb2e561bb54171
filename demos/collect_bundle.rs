use flexi_logger::Logger;
use run_keeper::{BundleSpec, Collector};
use std::error::Error;

// Collects the result and instruction files of every experiment directory
// below the current working directory into a timestamped tar bundle in the
// home directory.
fn main() -> Result<(), Box<dyn Error>> {
    let _logger = Logger::try_with_str("info")?.start()?;

    let archive = Collector::new()
        .bundle_spec(
            BundleSpec::default()
                .discriminant("Sierra_Nevada")
                .use_timestamp(true),
        )
        .run(".")?;
    println!("bundle written to {archive:?}");

    Ok(())
}
