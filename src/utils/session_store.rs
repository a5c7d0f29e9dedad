//! Persistence of the session cookie between CLI invocations.
//!
//! The server's session lives in a cookie; the browser keeps it, so the CLI
//! keeps it too, in a file under the user configuration directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Path of the stored session cookie pair
/// (`<config_dir>/biocve-console/session`).
pub fn session_file() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("could not determine config directory")?;
    Ok(config_dir.join("biocve-console").join("session"))
}

/// The stored cookie pair, if a previous login saved one.
pub fn load_session() -> Option<String> {
    load_session_from(&session_file().ok()?)
}

/// Store the cookie pair from a successful login/signup.
pub fn save_session(cookie: &str) -> Result<()> {
    save_session_to(&session_file()?, cookie)
}

/// Forget the stored session (logout).
pub fn clear_session() -> Result<()> {
    clear_session_at(&session_file()?)
}

fn load_session_from(path: &PathBuf) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let cookie = contents.trim();
    if cookie.is_empty() { None } else { Some(cookie.to_string()) }
}

fn save_session_to(path: &PathBuf, cookie: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, cookie).with_context(|| format!("failed to write {}", path.display()))
}

fn clear_session_at(path: &PathBuf) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err).with_context(|| format!("failed to remove {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("session");

        save_session_to(&path, "session=abc123").unwrap();
        assert_eq!(load_session_from(&path).as_deref(), Some("session=abc123"));
    }

    #[test]
    fn test_load_missing_or_empty_is_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("session");
        assert_eq!(load_session_from(&path), None);

        fs::write(&path, "  \n").unwrap();
        assert_eq!(load_session_from(&path), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("session");

        save_session_to(&path, "session=abc").unwrap();
        clear_session_at(&path).unwrap();
        clear_session_at(&path).unwrap();
        assert_eq!(load_session_from(&path), None);
    }
}
