//! Statement output.
//!
//! The destination is replaced in one step: the statement is written to a
//! temp file next to it, synced, then renamed over the target. Readers see
//! either the previous contents or the complete new statement.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{Result, SqlError};

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "Calendar.sql";

/// Write `sql` to `path`, overwriting any previous content.
///
/// Missing parent directories are created.
pub fn write_statement(path: &Path, sql: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir).map_err(|e| SqlError::Io {
        operation: "create directory",
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| SqlError::Io {
        operation: "create",
        path: dir.to_path_buf(),
        source: e,
    })?;

    temp.write_all(sql.as_bytes()).map_err(|e| SqlError::Io {
        operation: "write",
        path: temp.path().to_path_buf(),
        source: e,
    })?;

    temp.as_file().sync_all().map_err(|e| SqlError::Io {
        operation: "sync",
        path: temp.path().to_path_buf(),
        source: e,
    })?;

    temp.persist(path)
        .map_err(|e| SqlError::AtomicWriteFailed {
            temp_path: e.file.path().to_path_buf(),
            target_path: path.to_path_buf(),
            source: e.error,
        })?;

    info!(path = %path.display(), bytes = sql.len(), "wrote calendar statement");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT_FILE);
        write_statement(&path, "INSERT INTO Calendar VALUES\n;\n").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "INSERT INTO Calendar VALUES\n;\n"
        );
    }

    #[test]
    fn overwrites_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.sql");
        fs::write(&path, "a much longer statement that should disappear entirely").unwrap();
        write_statement(&path, "short").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/sql/Calendar.sql");
        write_statement(&path, "x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn leaves_no_temp_files_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Calendar.sql");
        write_statement(&path, "x").unwrap();
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn blocked_parent_names_operation_and_path() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("afile");
        fs::write(&blocker, "").unwrap();
        let err = write_statement(&blocker.join("x.sql"), "x").unwrap_err();
        assert!(matches!(
            err,
            SqlError::Io {
                operation: "create directory",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            format!("failed to create directory {}", blocker.display())
        );
    }

    #[test]
    fn directory_target_fails() {
        let dir = tempdir().unwrap();
        let err = write_statement(dir.path(), "x").unwrap_err();
        assert!(matches!(
            err,
            SqlError::AtomicWriteFailed { .. } | SqlError::Io { .. }
        ));
    }
}
