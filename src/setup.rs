//! Filesystem preparation: the single input validation gate and idempotent
//! output directory creation. Both run before any engine object is built.
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Spectrum file expected inside the input data directory.
pub const EXPECTED_DATA_FILE: &str = "hst_example_clear_spec.txt";

/// Resolve the input data directory and require the expected spectrum file
/// inside it. Returns the absolute file path on success.
pub fn validate_input_file(input_dir: &Path) -> Result<PathBuf> {
    // Canonicalize when possible so the error message names a real location;
    // a nonexistent directory is reported through the file check below.
    let resolved = fs::canonicalize(input_dir).unwrap_or_else(|_| input_dir.to_path_buf());
    let data_file = resolved.join(EXPECTED_DATA_FILE);
    if !data_file.exists() {
        return Err(Error::MissingInput {
            path: data_file,
            expected: EXPECTED_DATA_FILE,
        });
    }
    Ok(data_file)
}

/// Create the output directory and its parents if absent. Safe to call when
/// the directory already exists.
pub fn ensure_output_dir(output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    Ok(output_dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn validate_accepts_directory_with_expected_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join(EXPECTED_DATA_FILE);
        fs::write(&file, "# wavelength depth error\n1.1 0.01 0.001\n").unwrap();

        let resolved = validate_input_file(dir.path()).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with(EXPECTED_DATA_FILE));
    }

    #[test]
    fn validate_rejects_directory_without_expected_file() {
        let dir = TempDir::new().unwrap();
        let err = validate_input_file(dir.path()).unwrap_err();
        let message = err.to_string();
        match err {
            Error::MissingInput { path, expected } => {
                assert!(path.ends_with(EXPECTED_DATA_FILE));
                assert_eq!(expected, EXPECTED_DATA_FILE);
                // The resolved path must appear in the user-facing message.
                assert!(message.contains(&path.display().to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ensure_output_dir_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("runs").join("deep");

        let first = ensure_output_dir(&target).unwrap();
        assert!(first.is_dir());
        let second = ensure_output_dir(&target).unwrap();
        assert!(second.is_dir());
        assert_eq!(first, second);
    }
}
