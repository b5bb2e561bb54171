mod test_utils;

use run_keeper::{Cleaner, Retention, DEFAULT_RESULTS_DIR};
use temp_dir::TempDir;

#[test]
fn test_clean_top_level() {
    let t = TempDir::new().unwrap();
    let experiment = test_utils::populated_experiment(t.path(), "CMIP6");
    // one level further down; must not be visited by the top-level traversal
    let nested = test_utils::populated_experiment(&experiment, "lightning_test");

    Cleaner::new()
        .retention(Retention::keep_default_result_files())
        .run(t.path())
        .unwrap();

    assert!(!experiment.join("run1").exists());
    assert!(!experiment.join("run2").exists());
    assert!(!experiment.join("progress_1").exists());
    assert!(!experiment.join("output1.log").exists());

    let results_dir = experiment.join(DEFAULT_RESULTS_DIR);
    assert!(results_dir.join("aaet.out").is_file());
    assert!(results_dir.join("cflux.out").is_file());
    assert!(results_dir.join("cpool.out").is_file());
    assert!(!results_dir.join("junk.tmp").exists());

    // inputs and scripts stay
    assert!(experiment.join("global.ins").is_file());
    assert!(experiment.join("gridlist.txt").is_file());
    assert!(experiment.join("submit.sh").is_file());

    // the nested experiment was out of reach
    assert!(nested.join("run1").is_dir());
    assert!(nested.join("output1.log").is_file());
    assert!(nested.join(DEFAULT_RESULTS_DIR).join("junk.tmp").is_file());
}

#[test]
fn test_keep_run_logs() {
    let t = TempDir::new().unwrap();
    let experiment = test_utils::populated_experiment(t.path(), "CMIP5");

    Cleaner::new().keep_run_logs().run(t.path()).unwrap();

    assert!(!experiment.join("run1").exists());
    assert!(experiment.join("output1.log").is_file());
    // default retention leaves the results directory alone
    assert!(experiment
        .join(DEFAULT_RESULTS_DIR)
        .join("junk.tmp")
        .is_file());
}
