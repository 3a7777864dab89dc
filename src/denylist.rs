//! Common-password denylist
//!
//! A small built-in set of trivially guessable passwords is always active.
//! Deployers may additionally load an extended list from a file.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Built-in denylist. Matched by case-sensitive equality.
const COMMON_PASSWORDS: [&str; 6] = [
    "password", "123456", "qwerty", "letmein", "admin", "iloveyou",
];

static EXTENDED_DENYLIST: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Returns the extended denylist file path.
///
/// Priority:
/// 1. Environment variable `PWD_DENYLIST_PATH`
/// 2. Default path `./assets/denylist.txt`
pub fn get_denylist_path() -> PathBuf {
    std::env::var("PWD_DENYLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/denylist.txt"))
}

/// Loads the extended denylist from an external file.
///
/// The built-in set is always checked regardless; loading an extended list is
/// opt-in and this function never needs to be called for the validator to
/// work.
///
/// # Environment Variable
///
/// Set `PWD_DENYLIST_PATH` to specify a custom denylist file location.
/// If not set, defaults to `./assets/denylist.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_denylist() -> Result<usize, DenylistError> {
    let path = get_denylist_path();
    init_denylist_from_path(&path)
}

/// Loads the extended denylist from a specific file path.
///
/// Use this when you need to pass the path directly (e.g., from an asset
/// system) instead of relying on environment variables. Idempotent: once a
/// list is loaded, later calls return its size without re-reading.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_denylist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, DenylistError> {
    {
        let guard = EXTENDED_DENYLIST.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist initialization FAILED: FileNotFound {}", path.display());
        return Err(DenylistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist initialization FAILED: Empty file {}", path.display());
        return Err(DenylistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = EXTENDED_DENYLIST.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Denylist initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns a cloned copy of the loaded extended denylist.
///
/// Returns `None` if no extended list has been loaded.
pub fn get_denylist() -> Option<HashSet<String>> {
    let guard = EXTENDED_DENYLIST.read().unwrap();
    guard.clone()
}

/// Checks whether a password is a known common password.
///
/// The built-in set is matched by exact, case-sensitive equality. The
/// extended list, when loaded, is matched case-insensitively.
pub fn is_common(password: &str) -> bool {
    if COMMON_PASSWORDS.contains(&password) {
        return true;
    }
    let guard = EXTENDED_DENYLIST.read().unwrap();
    guard
        .as_ref()
        .map(|set| set.contains(&password.to_lowercase()))
        .unwrap_or(false)
}

/// Resets the extended denylist for testing purposes.
#[cfg(test)]
pub fn reset_denylist_for_testing() {
    let mut guard = EXTENDED_DENYLIST.write().unwrap();
    *guard = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_get_denylist_path_default() {
        remove_env("PWD_DENYLIST_PATH");

        let path = get_denylist_path();
        assert_eq!(path, PathBuf::from("./assets/denylist.txt"));
    }

    #[test]
    #[serial]
    fn test_get_denylist_path_from_env() {
        let custom_path = "/custom/path/denylist.txt";
        set_env("PWD_DENYLIST_PATH", custom_path);

        let path = get_denylist_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("PWD_DENYLIST_PATH");
    }

    #[test]
    #[serial]
    fn test_init_denylist_file_not_found() {
        reset_denylist_for_testing();
        set_env("PWD_DENYLIST_PATH", "/nonexistent/path/denylist.txt");

        let result = init_denylist();
        assert!(matches!(result, Err(DenylistError::FileNotFound(_))));

        remove_env("PWD_DENYLIST_PATH");
    }

    #[test]
    #[serial]
    fn test_init_denylist_empty_file() {
        reset_denylist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "").expect("Failed to write empty content");

        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_DENYLIST_PATH", path);

        let result = init_denylist();
        assert!(matches!(result, Err(DenylistError::EmptyFile)));

        remove_env("PWD_DENYLIST_PATH");
    }

    #[test]
    #[serial]
    fn test_init_denylist_success() {
        reset_denylist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "hunter2").expect("Failed to write");
        writeln!(temp_file, "trustno1").expect("Failed to write");

        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_DENYLIST_PATH", path);

        let result = init_denylist();
        assert_eq!(result.unwrap(), 2);

        remove_env("PWD_DENYLIST_PATH");
    }

    #[test]
    #[serial]
    fn test_builtin_entries_case_sensitive() {
        reset_denylist_for_testing();

        assert!(is_common("password"));
        assert!(is_common("letmein"));
        assert!(is_common("iloveyou"));
        // Built-in matching is exact; casing variants are left to the
        // keyboard-pattern heuristic.
        assert!(!is_common("Password"));
        assert!(!is_common("LETMEIN"));
    }

    #[test]
    #[serial]
    fn test_is_common_extended_list() {
        reset_denylist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "hunter2").expect("Failed to write");

        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_DENYLIST_PATH", path);

        let _ = init_denylist();

        assert!(is_common("hunter2"));
        assert!(is_common("HUNTER2")); // extended list is case insensitive
        assert!(!is_common("veryuncommonpassword987"));

        remove_env("PWD_DENYLIST_PATH");
    }

    #[test]
    #[serial]
    fn test_get_denylist_unloaded() {
        reset_denylist_for_testing();
        assert!(get_denylist().is_none());
    }
}
