use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

use crate::error::{KitError, Result};

/// Default name of the file used as a token to stop the program
pub const DEFAULT_STOP_FILE: &str = "stop";

/// Check whether the user has asked the program to shut down gracefully.
///
/// If a regular file exists at `stopfile` it is deleted and `true` is returned.
/// Otherwise nothing on disk is touched and `false` is returned.
///
/// Another process may remove the file between the check and the delete;
/// the request still counts in that case.
pub fn user_has_requested_stop(stopfile: impl AsRef<Path>) -> Result<bool> {
    let stop_path = stopfile.as_ref();

    if !stop_path.is_file() {
        return Ok(false);
    }

    info!("{} detected", stop_path.display());
    println!("{} detected", stop_path.display());

    match fs::remove_file(stop_path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
        Err(e) => Err(KitError::io(stop_path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_stop_file() {
        let dir = tempfile::tempdir().unwrap();
        let stop_path = dir.path().join(DEFAULT_STOP_FILE);

        assert!(!user_has_requested_stop(&stop_path).unwrap());
        assert!(!stop_path.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_stop_file_is_consumed() {
        let dir = tempfile::tempdir().unwrap();
        let stop_path = dir.path().join(DEFAULT_STOP_FILE);
        fs::write(&stop_path, "").unwrap();

        assert!(user_has_requested_stop(&stop_path).unwrap());
        assert!(!stop_path.exists());

        // Consumed, so a second poll sees nothing
        assert!(!user_has_requested_stop(&stop_path).unwrap());
    }

    #[test]
    fn test_directory_is_not_a_stop_request() {
        let dir = tempfile::tempdir().unwrap();
        let stop_path = dir.path().join(DEFAULT_STOP_FILE);
        fs::create_dir(&stop_path).unwrap();

        assert!(!user_has_requested_stop(&stop_path).unwrap());
        assert!(stop_path.is_dir());
    }
}
