use anyhow::{Context, Result, anyhow, bail};
use docstats_types::{MAX_COMPLETION_PERCENT, QueryParams};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file when `--config` is absent
pub const CONFIG_ENV: &str = "DOCSTATS_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. DOCSTATS_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.docstats/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV)
        && !env_path.is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("docstats").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".docstats").join("config.toml"));
    }

    Err(anyhow!(
        "Could not determine config path: no HOME directory or XDG config directory found"
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// On-disk settings.
///
/// ```toml
/// catalog = "pages.json"
///
/// [query]
/// sections = ["learn", "reference"]
/// sortBy = "engagement"
/// displayLimit = 20
/// ```
///
/// Every key is optional; missing keys fall back to the dashboard defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog file used when `--catalog` is not given. Relative paths are
    /// resolved against the config file's directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Default query parameters, overridden flag by flag on the command line
    pub query: QueryParams,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        if config.query.minimum_completion_rate > MAX_COMPLETION_PERCENT {
            bail!(
                "Invalid config file: {}: minimumCompletionRate must be between 0 and {}, got {}",
                path.display(),
                MAX_COMPLETION_PERCENT,
                config.query.minimum_completion_rate
            );
        }

        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        std::fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Catalog path from the file, anchored at the directory holding `config_path`
    pub fn catalog_path(&self, config_path: &Path) -> Option<PathBuf> {
        let catalog = self.catalog.as_ref()?;
        let catalog = expand_tilde(&catalog.to_string_lossy());
        if catalog.is_absolute() {
            return Some(catalog);
        }
        let base = config_path.parent().unwrap_or_else(|| Path::new(""));
        Some(base.join(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstats_types::{SortKey, SortOrder};
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.catalog, None);
        assert_eq!(config.query, QueryParams::default());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            catalog: Some(PathBuf::from("pages.json")),
            query: QueryParams::default()
                .with_sections(["learn"])
                .with_sort(SortKey::Engagement, SortOrder::Asc)
                .with_display_limit(3),
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_partial_query_table_keeps_defaults() -> Result<()> {
        let config: Config = toml::from_str(
            r#"
            [query]
            sortBy = "timeSpent"
            includeOutdated = false
            "#,
        )?;

        assert_eq!(config.query.sort_by, SortKey::TimeSpent);
        assert!(!config.query.include_outdated);
        assert_eq!(config.query.display_limit, 10);
        assert_eq!(config.query.sections.len(), 4);
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[query\nsortBy = ")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
        Ok(())
    }

    #[test]
    fn test_completion_rate_above_hundred_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[query]\nminimumCompletionRate = 150\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(err.to_string().contains("minimumCompletionRate"));
        Ok(())
    }

    #[test]
    fn test_relative_catalog_anchored_at_config_dir() {
        let config = Config {
            catalog: Some(PathBuf::from("data/pages.json")),
            ..Default::default()
        };

        let resolved = config.catalog_path(Path::new("/etc/docstats/config.toml"));
        assert_eq!(resolved, Some(PathBuf::from("/etc/docstats/data/pages.json")));
    }

    #[test]
    fn test_explicit_config_path_wins() -> Result<()> {
        let path = resolve_config_path(Some(Path::new("/tmp/custom.toml")))?;
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
        Ok(())
    }
}
