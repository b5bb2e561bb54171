use crate::{KeeperError, Traversal};
use glob::Pattern;
use log::trace;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// Compiles the given filename patterns.
pub(crate) fn compile_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Pattern>, KeeperError> {
    patterns.iter().map(|p| Ok(Pattern::new(p.as_ref())?)).collect()
}

// Lists the directories below root (root itself excluded) in deterministic
// order, parents before children.
pub(crate) fn subdirectories(
    root: &Path,
    traversal: Traversal,
) -> Result<Vec<PathBuf>, KeeperError> {
    if !root.is_dir() {
        return Err(KeeperError::BadRootDirectory(root.to_path_buf()));
    }
    let mut result = Vec::new();
    match traversal {
        Traversal::TopLevel => {
            for entry in fs::read_dir(root)? {
                let entry = entry?;
                if entry.path().is_dir() {
                    result.push(entry.path());
                }
            }
            result.sort();
        }
        Traversal::Recursive => {
            for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
                let entry = entry?;
                if entry.file_type().is_dir() {
                    result.push(entry.into_path());
                }
            }
        }
    }
    Ok(result)
}

// Removes every direct child of dir whose name matches one of the patterns,
// files and directories alike.
pub(crate) fn remove_matching(dir: &Path, patterns: &[Pattern]) -> Result<(), KeeperError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if patterns.iter().any(|p| p.matches(&name.to_string_lossy())) {
            let path = entry.path();
            trace!("removing {path:?}");
            if path.is_dir() {
                fs::remove_dir_all(&path)?;
            } else {
                fs::remove_file(&path)?;
            }
        }
    }
    Ok(())
}

// Copies every file in src whose name matches the pattern into dst, keeping
// the filename. Returns the number of files copied.
pub(crate) fn copy_matching(
    src: &Path,
    pattern: &Pattern,
    dst: &Path,
) -> Result<usize, KeeperError> {
    let mut count = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let name = entry.file_name();
        if entry.path().is_file() && pattern.matches(&name.to_string_lossy()) {
            let source = entry.path();
            let target = dst.join(&name);
            trace!("copying {source:?} to {target:?}");
            fs::copy(&source, &target)?;
            count += 1;
        }
    }
    Ok(count)
}

// Moves the file into dir, falling back to copy-and-delete when the two
// live on different filesystems.
pub(crate) fn relocate(file: &Path, dir: &Path) -> Result<PathBuf, KeeperError> {
    let target = dir.join(file.file_name().unwrap(/*bundle filenames are never empty*/));
    match fs::rename(file, &target) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::CrossesDevices => {
            fs::copy(file, &target)?;
            fs::remove_file(file)?;
        }
        Err(e) => {
            return Err(e.into());
        }
    }
    Ok(target)
}

#[cfg(test)]
mod test {
    use super::{compile_patterns, remove_matching, subdirectories};
    use crate::Traversal;
    use temp_dir::TempDir;

    #[test]
    fn test_subdirectories_are_sorted() {
        let t = TempDir::new().unwrap();
        for name in ["zeta", "alpha", "mid"] {
            std::fs::create_dir(t.path().join(name)).unwrap();
        }
        std::fs::write(t.path().join("not_a_dir"), b"x").unwrap();

        let dirs = subdirectories(t.path(), Traversal::TopLevel).unwrap();
        assert_eq!(
            dirs,
            [
                t.path().join("alpha"),
                t.path().join("mid"),
                t.path().join("zeta")
            ]
        );
    }

    #[test]
    fn test_remove_matching_takes_files_and_directories() {
        let t = TempDir::new().unwrap();
        std::fs::create_dir(t.path().join("run1")).unwrap();
        std::fs::write(t.path().join("run1").join("guess.out"), b"x").unwrap();
        std::fs::write(t.path().join("progress_7"), b"x").unwrap();
        std::fs::write(t.path().join("gridlist.txt"), b"x").unwrap();

        let patterns = compile_patterns(&["run*".to_string(), "progress*".to_string()]).unwrap();
        remove_matching(t.path(), &patterns).unwrap();

        assert!(!t.path().join("run1").exists());
        assert!(!t.path().join("progress_7").exists());
        assert!(t.path().join("gridlist.txt").exists());
    }
}
