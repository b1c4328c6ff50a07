//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated directory for config and catalog files
//! - Pinning the reference date so freshness-dependent output is stable
//! - Executing the `docstats` binary with that context
use anyhow::Result;
use assert_cmd::Command;
use docstats_types::PageRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Date every command runs against unless a test overrides it
pub const DEFAULT_TODAY: &str = "2025-03-01";

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use docstats_testing::{PageBuilder, TestWorld};
///
/// let world = TestWorld::new()
///     .with_catalog(&[PageBuilder::new("/learn/a").build()])
///     .unwrap();
///
/// let result = world.run(&["query", "--format", "json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    catalog_path: Option<PathBuf>,
    today: String,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    ///
    /// The config path points into the temp dir but no file exists yet, so
    /// commands run with built-in defaults and the sample catalog.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config").join("config.toml");

        Self {
            temp_dir,
            config_path,
            catalog_path: None,
            today: DEFAULT_TODAY.to_string(),
            env_vars: HashMap::new(),
        }
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write `pages` to `catalog.json` and pass it as `--catalog` from now on.
    pub fn with_catalog(mut self, pages: &[PageRecord]) -> Result<Self> {
        let path = self.temp_dir.path().join("catalog.json");
        fixtures::write_catalog(&path, pages)?;
        self.catalog_path = Some(path);
        Ok(self)
    }

    /// Write raw text to a file under the temp dir and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Write the config file commands will load.
    pub fn with_config(self, toml: &str) -> Result<Self> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        Ok(self)
    }

    /// Pin a different `--today`.
    pub fn with_today(mut self, today: impl Into<String>) -> Self {
        self.today = today.into();
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--today")
            .arg(&self.today);

        if let Some(catalog) = &self.catalog_path {
            cmd.arg("--catalog").arg(catalog);
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("DOCSTATS_CONFIG").env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Execute a CLI command in this environment.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built (which cargo test does automatically for the CLI crate's tests).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("docstats")
            .map_err(|e| anyhow::anyhow!("Failed to find docstats binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
