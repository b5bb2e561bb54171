#![cfg(feature = "compress")]

mod test_utils;

use run_keeper::Collector;
use std::path::PathBuf;
use temp_dir::TempDir;

#[test]
fn test_collect_compressed() {
    let t = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    test_utils::populated_experiment(t.path(), "CMIP6");

    let archive = Collector::new()
        .compress()
        .destination(home.path())
        .run(t.path())
        .unwrap();

    assert_eq!(archive, home.path().join("outputs.tar.gz"));

    let tar_gz = std::fs::File::open(&archive).unwrap();
    let mut archive = tar::Archive::new(flate2::read::GzDecoder::new(tar_gz));
    let entries: Vec<PathBuf> = archive
        .entries()
        .unwrap()
        .map(|entry| entry.unwrap().path().unwrap().into_owned())
        .collect();
    assert!(entries.contains(&PathBuf::from("outputs/CMIP6/aaet.out")));
}
