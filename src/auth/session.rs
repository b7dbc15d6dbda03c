// SPDX-License-Identifier: MPL-2.0
//! Persisted sign-in session.
//!
//! The session is stored as CBOR in the application data directory (see
//! [`paths::get_app_data_dir`]) so that a restart keeps the user signed in.

use super::Session;
use crate::app::paths;
use crate::error::{Error, Result};
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

const SESSION_FILE: &str = "session.cbor";

/// Warning key returned when a session file exists but cannot be read.
pub const RESTORE_ERROR_KEY: &str = "notification-session-restore-error";

fn session_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
        path.push(SESSION_FILE);
        path
    })
}

/// Loads the stored session, if any.
///
/// A missing file is not an error. An unreadable or corrupted file yields
/// no session plus a warning key.
pub fn load(base_dir: Option<PathBuf>) -> (Option<Session>, Option<String>) {
    let Some(path) = session_file_path(base_dir) else {
        return (None, None);
    };
    if !path.exists() {
        return (None, None);
    }

    let decoded = fs::File::open(&path)
        .map_err(Error::from)
        .and_then(|file| ciborium::from_reader(BufReader::new(file)).map_err(Error::from));

    match decoded {
        Ok(session) => (Some(session), None),
        Err(err) => {
            log::warn!("discarding stored session {}: {err}", path.display());
            (None, Some(RESTORE_ERROR_KEY.to_string()))
        }
    }
}

/// Writes the session, creating the data directory if needed.
pub fn save(session: &Session, base_dir: Option<PathBuf>) -> Result<()> {
    let path = session_file_path(base_dir)
        .ok_or_else(|| Error::Session("no data directory available".to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(fs::File::create(&path)?);
    ciborium::into_writer(session, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Deletes the stored session. Succeeds when there is nothing to delete.
pub fn clear(base_dir: Option<PathBuf>) -> Result<()> {
    let Some(path) = session_file_path(base_dir) else {
        return Ok(());
    };
    match fs::remove_file(&path) {
        Err(err) if err.kind() != std::io::ErrorKind::NotFound => Err(err.into()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::User;
    use tempfile::tempdir;

    fn session() -> Session {
        Session {
            token: "token-123".to_string(),
            user: User {
                id: "u1".to_string(),
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                avatar_url: Some("https://example.test/ana.png".to_string()),
            },
        }
    }

    #[test]
    fn save_then_load_restores_session() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        save(&session(), Some(base_dir.clone())).expect("save session");
        let (loaded, warning) = load(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded, Some(session()));
    }

    #[test]
    fn load_from_empty_directory_has_no_session() {
        let temp_dir = tempdir().expect("create temp dir");

        let (loaded, warning) = load(Some(temp_dir.path().to_path_buf()));

        assert!(loaded.is_none());
        assert!(warning.is_none());
    }

    #[test]
    fn corrupted_file_yields_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(SESSION_FILE), b"definitely not cbor").expect("write file");

        let (loaded, warning) = load(Some(base_dir));

        assert!(loaded.is_none());
        assert_eq!(warning.as_deref(), Some(RESTORE_ERROR_KEY));
    }

    #[test]
    fn clear_removes_file_and_tolerates_missing_one() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        save(&session(), Some(base_dir.clone())).expect("save session");

        clear(Some(base_dir.clone())).expect("first clear");
        clear(Some(base_dir.clone())).expect("second clear");

        assert!(!base_dir.join(SESSION_FILE).exists());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("deep").join("data");

        save(&session(), Some(nested.clone())).expect("save session");

        assert!(nested.join(SESSION_FILE).exists());
    }
}
