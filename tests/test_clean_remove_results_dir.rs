mod test_utils;

use run_keeper::{Cleaner, Retention, DEFAULT_RESULTS_DIR};
use temp_dir::TempDir;

#[test]
fn test_clean_remove_results_dir() {
    let t = TempDir::new().unwrap();
    let experiment = test_utils::populated_experiment(t.path(), "CMIP6");
    // an experiment that never ran has no results directory; that is fine
    let fresh = t.path().join("CMIP5");
    test_utils::file_with(&fresh.join("global.ins"), "! instruction file\n");

    Cleaner::new()
        .retention(Retention::RemoveAll)
        .run(t.path())
        .unwrap();

    assert!(!experiment.join(DEFAULT_RESULTS_DIR).exists());
    assert!(!experiment.join("run1").exists());
    assert!(!experiment.join("output1.log").exists());
    assert!(fresh.join("global.ins").is_file());
}
