//! Common test utilities for CLI testing.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

/// Test context with temporary directory
pub struct TestContext {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("pia.yaml");

        Self {
            temp_dir,
            config_path,
        }
    }

    /// Write the config file
    pub fn with_config(self, config: &str) -> Self {
        std::fs::write(&self.config_path, config).expect("Failed to write config");
        self
    }

    /// Write a file next to the config
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command configured for this context
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pia").expect("Binary not found");
        cmd.current_dir(self.path())
            .env_remove("PIA_LOCALE")
            .env_remove("PIA_MAX_DAYS_AGO")
            .env_remove("PIA_UTC_OFFSET_MINUTES")
            .env_remove("PIA_LOG_LEVEL")
            .env_remove("RUST_LOG")
            .env("LANG", "en_US.UTF-8")
            .env("NO_COLOR", "1");
        if self.config_path.exists() {
            cmd.env("PIA_CONFIG_PATH", &self.config_path);
        } else {
            cmd.env_remove("PIA_CONFIG_PATH");
        }
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert helpers for CLI output
pub trait OutputAssertions {
    fn assert_success(&self);
    fn assert_stdout_contains(&self, text: &str);
    fn assert_stderr_contains(&self, text: &str);
    fn assert_exit_code(&self, code: i32);
}

impl OutputAssertions for Output {
    fn assert_success(&self) {
        assert!(
            self.status.success(),
            "Command failed with status: {}\nstderr: {}",
            self.status,
            String::from_utf8_lossy(&self.stderr)
        );
    }

    fn assert_stdout_contains(&self, text: &str) {
        let stdout = String::from_utf8_lossy(&self.stdout);
        assert!(
            stdout.contains(text),
            "stdout did not contain '{}'\nstdout: {}",
            text,
            stdout
        );
    }

    fn assert_stderr_contains(&self, text: &str) {
        let stderr = String::from_utf8_lossy(&self.stderr);
        assert!(
            stderr.contains(text),
            "stderr did not contain '{}'\nstderr: {}",
            text,
            stderr
        );
    }

    fn assert_exit_code(&self, code: i32) {
        assert_eq!(
            self.status.code(),
            Some(code),
            "Expected exit code {}, got {:?}",
            code,
            self.status.code()
        );
    }
}

/// Revisions at 12:00 today, 3 days before, and in January 2024, relative
/// to 2024-03-15T12:00:00Z.
pub const REVISIONS_JSON: &str = r#"[
  {"id": 3, "pia_id": 1, "created_at": "2024-03-15T10:00:00Z"},
  {"id": 2, "pia_id": 1, "created_at": "2024-03-12T09:30:00Z", "note": "draft"},
  {"id": 1, "pia_id": 1, "created_at": "2024-01-20T08:00:00Z"}
]"#;

pub const NOW: &str = "2024-03-15T12:00:00Z";
