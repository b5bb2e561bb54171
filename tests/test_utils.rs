#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

// Writes a small file, creating parent directories as needed.
pub fn file_with(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

// An experiment directory as the simulation engine leaves it behind after a
// run: input and script files, transient run artifacts, a run log, and the
// results directory with the three standard result files plus some junk.
pub fn populated_experiment(root: &Path, name: &str) -> PathBuf {
    let dir = root.join(name);
    file_with(&dir.join("global.ins"), "! instruction file\n");
    file_with(&dir.join("gridlist.txt"), "19.0 64.0\n");
    file_with(&dir.join("submit.sh"), "#!/bin/sh\n");
    file_with(&dir.join("output1.log"), "Finished\n");
    file_with(&dir.join("run1").join("guess.out"), "");
    file_with(&dir.join("run2").join("guess.out"), "");
    file_with(&dir.join("progress_1"), "50%\n");
    for result_file in run_keeper::DEFAULT_RESULT_FILES {
        file_with(
            &dir.join(run_keeper::DEFAULT_RESULTS_DIR).join(result_file),
            result_file,
        );
    }
    file_with(
        &dir.join(run_keeper::DEFAULT_RESULTS_DIR).join("junk.tmp"),
        "",
    );
    dir
}

// The sorted filenames of the direct children of dir.
pub fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

// All paths below dir, relative to it, sorted.
pub fn tree_listing(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = walkdir_like(dir, dir);
    paths.sort();
    paths
}

fn walkdir_like(root: &Path, dir: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let entry = entry.unwrap();
        paths.push(entry.path().strip_prefix(root).unwrap().to_path_buf());
        if entry.path().is_dir() {
            paths.extend(walkdir_like(root, &entry.path()));
        }
    }
    paths
}

// The entry paths of a plain tar archive.
pub fn tar_entries(archive: &Path) -> Vec<PathBuf> {
    let mut archive = tar::Archive::new(fs::File::open(archive).unwrap());
    archive
        .entries()
        .unwrap()
        .map(|entry| entry.unwrap().path().unwrap().into_owned())
        .collect()
}
