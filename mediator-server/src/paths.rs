//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "mediator";
const APPLICATION: &str = "discussion-mediator";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for temporary/regenerable data.
///
/// - Linux: `$XDG_CACHE_HOME/discussion-mediator` or `~/.cache/discussion-mediator`
/// - macOS: `~/Library/Caches/dev.mediator.discussion-mediator`
/// - Windows: `C:\Users\<User>\AppData\Local\mediator\discussion-mediator\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory for configuration files.
///
/// - Linux: `$XDG_CONFIG_HOME/discussion-mediator` or `~/.config/discussion-mediator`
/// - macOS: `~/Library/Application Support/dev.mediator.discussion-mediator`
/// - Windows: `C:\Users\<User>\AppData\Roaming\mediator\discussion-mediator\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the server config file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("server.toml"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

const LATEST_LOG: &str = "latest.log";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 25;

/// A log file that could not be archived or removed during rotation.
#[derive(Debug)]
pub struct RotateFailure {
    pub path: PathBuf,
    pub source: io::Error,
}

/// Rotate logs: rename latest.log to timestamped name, clean up old logs.
///
/// Call this at startup before creating the new log file. Rotation runs
/// before a logger exists, so failures are returned for the caller to
/// report once logging is up.
pub fn rotate_logs() -> Vec<RotateFailure> {
    let Some(cache) = cache_dir() else {
        return Vec::new();
    };
    rotate_logs_in(&cache)
}

/// Rotate the logs kept in `dir`.
pub fn rotate_logs_in(dir: &Path) -> Vec<RotateFailure> {
    let mut failures = Vec::new();
    let latest = dir.join(LATEST_LOG);

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = dir.join(format!("{}.log", timestamp));
        if let Err(source) = fs::rename(&latest, &archived) {
            failures.push(RotateFailure {
                path: latest,
                source,
            });
        }
    }

    cleanup_old_logs(dir, &mut failures);
    failures
}

/// Remove old log files, keeping only the most recent MAX_OLD_LOGS.
fn cleanup_old_logs(dir: &Path, failures: &mut Vec<RotateFailure>) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Oldest first
    logs.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());

    if logs.len() > MAX_OLD_LOGS {
        for entry in logs.iter().take(logs.len() - MAX_OLD_LOGS) {
            let path = entry.path();
            if let Err(source) = fs::remove_file(&path) {
                failures.push(RotateFailure { path, source });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mediator-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn rotate_archives_latest() {
        let dir = scratch_dir("rotate");
        fs::write(dir.join(LATEST_LOG), "old run").unwrap();

        assert!(rotate_logs_in(&dir).is_empty());

        assert!(!dir.join(LATEST_LOG).exists());
        let archived: Vec<_> = fs::read_dir(&dir).unwrap().filter_map(|e| e.ok()).collect();
        assert_eq!(archived.len(), 1);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn cleanup_keeps_newest() {
        let dir = scratch_dir("cleanup");
        for i in 0..MAX_OLD_LOGS + 3 {
            fs::write(dir.join(format!("2026010{i:02}.log")), "").unwrap();
        }
        fs::write(dir.join("notes.txt"), "").unwrap();

        assert!(rotate_logs_in(&dir).is_empty());

        let logs = fs::read_dir(&dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".log"))
            .count();
        assert_eq!(logs, MAX_OLD_LOGS);
        assert!(dir.join("notes.txt").exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn cleanup_reports_logs_it_cannot_remove() {
        let dir = scratch_dir("stuck");
        // A directory named like a log cannot be removed with remove_file
        fs::create_dir(dir.join("00000000.log")).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        for i in 0..MAX_OLD_LOGS {
            fs::write(dir.join(format!("2026010{i:02}.log")), "").unwrap();
        }

        let failures = rotate_logs_in(&dir);

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path, dir.join("00000000.log"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn paths_share_project_dirs() {
        if let (Some(config), Some(dir)) = (config_file(), config_dir()) {
            assert_eq!(config.parent(), Some(dir.as_path()));
        }
    }
}
