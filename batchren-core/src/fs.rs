//! Filesystem access used by the batch renamer.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The filesystem operations a batch needs.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Names of the regular files directly inside `dir`, in processing order.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Rename a single file. Must not replace an existing file.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// The real filesystem.
///
/// Case sensitivity is checked at most once per directory and remembered.
#[derive(Clone)]
pub struct LocalFileSystem {
    detect_case_insensitive: fn(&Path) -> bool,
    case_insensitive_dirs: RefCell<HashMap<PathBuf, bool>>,
}

impl fmt::Debug for LocalFileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalFileSystem")
            .field("case_insensitive_dirs", &self.case_insensitive_dirs)
            .finish_non_exhaustive()
    }
}

impl Default for LocalFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalFileSystem {
    pub fn new() -> Self {
        Self::with_case_detector(detect_case_insensitive_fs)
    }

    /// Use `detect` instead of [`detect_case_insensitive_fs`] to check a directory.
    pub fn with_case_detector(detect: fn(&Path) -> bool) -> Self {
        Self {
            detect_case_insensitive: detect,
            case_insensitive_dirs: RefCell::new(HashMap::new()),
        }
    }

    /// Whether `dir` lives on a case-insensitive filesystem.
    pub fn is_case_insensitive(&self, dir: &Path) -> bool {
        if let Some(&cached) = self.case_insensitive_dirs.borrow().get(dir) {
            return cached;
        }
        let insensitive = (self.detect_case_insensitive)(dir);
        tracing::debug!(dir = %dir.display(), insensitive, "checked filesystem case sensitivity");
        self.case_insensitive_dirs
            .borrow_mut()
            .insert(dir.to_path_buf(), insensitive);
        insensitive
    }

    fn is_case_only_rename_on_insensitive_fs(&self, from: &Path, to: &Path) -> bool {
        let (Some(from_name), Some(to_name)) = (from.file_name(), to.file_name()) else {
            return false;
        };
        if from.parent() != to.parent() {
            return false;
        }
        let from_lower = from_name.to_string_lossy().to_lowercase();
        let to_lower = to_name.to_string_lossy().to_lowercase();
        if from_lower != to_lower {
            return false;
        }
        let parent = from.parent().unwrap_or_else(|| Path::new("."));
        self.is_case_insensitive(parent)
    }
}

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // Follows symlinks, so a link to a regular file is listed
            if !entry.path().is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => {
                    tracing::warn!(name = ?raw, "skipping file with a non UTF-8 name");
                },
            }
        }
        // Sort for a deterministic processing order
        names.sort();
        Ok(names)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        if to.exists() && !self.is_case_only_rename_on_insensitive_fs(from, to) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", to.display()),
            ));
        }
        fs::rename(from, to)
    }
}

/// Check if the filesystem at the given path is case-insensitive
pub fn detect_case_insensitive_fs(path: &Path) -> bool {
    let Ok(temp_dir) = TempDir::new_in(path) else {
        return false; // Assume case-sensitive if we can't test
    };

    let lower = temp_dir.path().join("case_check_a");
    let upper = temp_dir.path().join("case_check_A");

    if fs::write(&lower, b"case").is_err() {
        return false;
    }

    // On a case-insensitive filesystem the uppercase name resolves too
    fs::metadata(&upper).is_ok()
}
