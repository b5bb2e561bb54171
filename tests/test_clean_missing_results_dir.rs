mod test_utils;

use run_keeper::{Cleaner, KeeperError, MissingResultsDir, Retention};
use temp_dir::TempDir;

#[test]
fn test_skip_missing_results_dir() {
    let t = TempDir::new().unwrap();
    let fresh = t.path().join("CMIP5");
    test_utils::file_with(&fresh.join("global.ins"), "! instruction file\n");

    Cleaner::new()
        .retention(Retention::keep_default_result_files())
        .run(t.path())
        .unwrap();

    assert!(fresh.join("global.ins").is_file());
}

#[test]
fn test_fail_on_missing_results_dir() {
    let t = TempDir::new().unwrap();
    let fresh = t.path().join("CMIP5");
    test_utils::file_with(&fresh.join("global.ins"), "! instruction file\n");

    let result = Cleaner::new()
        .retention(Retention::keep_default_result_files())
        .missing_results_dir(MissingResultsDir::Fail)
        .run(t.path());

    match result {
        Err(KeeperError::MissingResultsDir(path)) => {
            assert_eq!(path, fresh.join(run_keeper::DEFAULT_RESULTS_DIR));
        }
        other => panic!("expected MissingResultsDir, got {other:?}"),
    }
}
