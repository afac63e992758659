//! File name decomposition into stem and extension.

use crate::error::{RenameError, Result};

/// Split a file name into `(stem, extension)`.
///
/// The extension runs from the last `.` to the end of the name, including the
/// dot, as long as at least one character other than `.` precedes it. Leading
/// dots belong to the stem, so `.bashrc` has no extension.
///
/// `stem + extension` always reproduces the input.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if name[..idx].chars().any(|c| c != '.') => name.split_at(idx),
        _ => (name, ""),
    }
}

pub fn stem(name: &str) -> &str {
    split_extension(name).0
}

pub fn extension(name: &str) -> &str {
    split_extension(name).1
}

/// Build the disambiguated form `stem_N.ext` from an already split name.
pub fn with_counter(stem: &str, extension: &str, counter: u64) -> String {
    format!("{stem}_{counter}{extension}")
}

/// Reject names that cannot be used as a single directory entry.
pub fn validate_file_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(RenameError::invalid("computed file name is empty"));
    }
    if name == "." || name == ".." {
        return Err(RenameError::invalid(format!(
            "computed file name '{name}' is reserved"
        )));
    }
    if let Some(c) = name.chars().find(|c| is_forbidden_char(*c)) {
        return Err(RenameError::invalid(format!(
            "computed file name '{}' contains forbidden character {:?}",
            name, c
        )));
    }
    Ok(())
}

/// Characters that would turn a name into a path or truncate it.
pub(crate) fn is_forbidden_char(c: char) -> bool {
    c == '/' || c == '\0' || (cfg!(windows) && c == '\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        assert_eq!(split_extension("notes.txt"), ("notes", ".txt"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension("README"), ("README", ""));
    }

    #[test]
    fn test_split_leading_dots() {
        assert_eq!(split_extension(".bashrc"), (".bashrc", ""));
        assert_eq!(split_extension(".."), ("..", ""));
        assert_eq!(split_extension("..."), ("...", ""));
        assert_eq!(split_extension("..notes.txt"), ("..notes", ".txt"));
        assert_eq!(split_extension(".config.toml"), (".config", ".toml"));
    }

    #[test]
    fn test_split_trailing_dot() {
        assert_eq!(split_extension("report."), ("report", "."));
    }

    #[test]
    fn test_split_unicode() {
        assert_eq!(split_extension("报告.docx"), ("报告", ".docx"));
        assert_eq!(split_extension("résumé"), ("résumé", ""));
    }

    #[test]
    fn test_with_counter() {
        assert_eq!(with_counter("notes", ".txt", 1), "notes_1.txt");
        assert_eq!(with_counter("Makefile", "", 12), "Makefile_12");
        assert_eq!(with_counter(".env", "", 2), ".env_2");
        assert_eq!(with_counter("x_notes.txt_y", "", 1), "x_notes.txt_y_1");
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("ok.txt").is_ok());
        assert!(validate_file_name(".hidden").is_ok());
        assert!(validate_file_name("").is_err());
        assert!(validate_file_name(".").is_err());
        assert!(validate_file_name("..").is_err());
        assert!(validate_file_name("a/b.txt").is_err());
        assert!(validate_file_name("a\0b").is_err());
    }
}
