use super::snapshot::SnapshotDecoder;
use crate::config::AppConfig;
use crate::inventory::domain::Inventory;
use crate::ports::outbound::InventorySource;
use crate::shared::error::BrewLsError;
use crate::shared::Result;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Executable searched for on PATH when no explicit binary is configured
const BREW_PROGRAM: &str = "brew";

/// Arguments producing the JSON v2 info document for every installed package
pub const BREW_INFO_ARGS: [&str; 3] = ["info", "--json=v2", "--installed"];

/// BrewCommandSource adapter running the Homebrew CLI
///
/// This adapter implements the InventorySource port by invoking
/// `brew info --json=v2 --installed` and capturing its output. The call
/// is awaited to completion; there is no timeout.
pub struct BrewCommandSource {
    brew_binary: Option<PathBuf>,
}

impl BrewCommandSource {
    /// # Arguments
    /// * `brew_binary` - Explicit executable path, or `None` to search PATH
    pub fn new(brew_binary: Option<PathBuf>) -> Self {
        Self { brew_binary }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.brew_binary.clone())
    }

    /// Locates the brew executable
    ///
    /// An explicit path is checked as-is; otherwise PATH is searched.
    fn resolve_brew(&self) -> Result<PathBuf> {
        let program: &OsStr = self
            .brew_binary
            .as_deref()
            .map(Path::as_os_str)
            .unwrap_or_else(|| OsStr::new(BREW_PROGRAM));

        which::which(program).map_err(|e| {
            BrewLsError::BrewNotFound {
                details: format!("{}: {}", Path::new(program).display(), e),
            }
            .into()
        })
    }

    fn command_line(brew: &Path) -> String {
        format!("{} {}", brew.display(), BREW_INFO_ARGS.join(" "))
    }
}

impl Default for BrewCommandSource {
    fn default() -> Self {
        Self::new(None)
    }
}

impl InventorySource for BrewCommandSource {
    fn fetch_snapshot(&self) -> Result<String> {
        let brew = self.resolve_brew()?;

        let output = Command::new(&brew)
            .args(BREW_INFO_ARGS)
            .output()
            .map_err(|source| BrewLsError::CommandSpawn {
                program: brew.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(BrewLsError::CommandFailed {
                command: Self::command_line(&brew),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn fetch_inventory(&self) -> Result<Inventory> {
        let snapshot = self.fetch_snapshot()?;
        SnapshotDecoder::decode(&snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn write_fake_brew(dir: &TempDir, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.path().join("brew");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        let mut permissions = fs::metadata(&path).unwrap().permissions();
        permissions.set_mode(0o755);
        fs::set_permissions(&path, permissions).unwrap();
        path
    }

    #[test]
    fn test_command_line() {
        let line = BrewCommandSource::command_line(Path::new("/opt/homebrew/bin/brew"));
        assert_eq!(line, "/opt/homebrew/bin/brew info --json=v2 --installed");
    }

    #[test]
    fn test_missing_brew_binary() {
        let source = BrewCommandSource::new(Some(PathBuf::from(
            "/nonexistent/path/that/does/not/exist/brew",
        )));

        let result = source.fetch_snapshot();
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Homebrew 'brew' command not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_fetch_snapshot_success() {
        let dir = TempDir::new().unwrap();
        let brew = write_fake_brew(
            &dir,
            r#"[ "$*" = "info --json=v2 --installed" ] || exit 2
echo '{"formulae": [], "casks": []}'"#,
        );

        let source = BrewCommandSource::new(Some(brew));
        let output = source.fetch_snapshot().unwrap();
        assert_eq!(output.trim(), r#"{"formulae": [], "casks": []}"#);
    }

    #[cfg(unix)]
    #[test]
    fn test_fetch_snapshot_command_failure() {
        let dir = TempDir::new().unwrap();
        let brew = write_fake_brew(&dir, "echo 'brew command failed' >&2\nexit 1");

        let source = BrewCommandSource::new(Some(brew));
        let result = source.fetch_snapshot();
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Command finished with error"));
        assert!(err.contains("brew command failed"));
    }

    #[cfg(unix)]
    #[test]
    fn test_fetch_inventory_decodes_output() {
        let dir = TempDir::new().unwrap();
        let brew = write_fake_brew(
            &dir,
            r#"echo '{"formulae": [{"name": "git", "installed": [{"version": "2.46.0", "installed_on_request": true}]}], "casks": []}'"#,
        );

        let inventory = BrewCommandSource::new(Some(brew)).fetch_inventory().unwrap();
        assert_eq!(inventory.formulae().len(), 1);
        assert_eq!(inventory.formulae()[0].name().as_str(), "git");
    }

    #[cfg(unix)]
    #[test]
    fn test_fetch_inventory_malformed_output() {
        let dir = TempDir::new().unwrap();
        let brew = write_fake_brew(&dir, "echo 'not json'");

        let result = BrewCommandSource::new(Some(brew)).fetch_inventory();
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to decode brew info JSON output"));
    }
}
