use crate::args::{OutputFormat, QueryArgs};
use crate::config::{Config, resolve_config_path};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use docstats_catalog::{Catalog, sample_catalog};
use docstats_types::QueryParams;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the page records of this invocation come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Sample,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Sample => write!(f, "sample catalog"),
        }
    }
}

/// Everything a handler needs that is decided once per invocation:
/// the config, the catalog location and the reference date.
pub struct ExecutionContext {
    config_path: PathBuf,
    config: Config,
    catalog_source: CatalogSource,
    today: NaiveDate,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(
        catalog: Option<PathBuf>,
        config_path: Option<PathBuf>,
        today: Option<&str>,
        format: OutputFormat,
    ) -> Result<Self> {
        let config_path = resolve_config_path(config_path.as_deref())?;
        let config = Config::load_from(&config_path)?;

        let catalog_source = match catalog.or_else(|| config.catalog_path(&config_path)) {
            Some(path) => CatalogSource::File(path),
            None => CatalogSource::Sample,
        };

        // The clock is read once here; every stage of this run shares it
        let today = match today {
            Some(value) => docstats_types::parse_date(value)
                .with_context(|| format!("Invalid --today value '{}'", value))?,
            None => Local::now().date_naive(),
        };

        Ok(Self {
            config_path,
            config,
            catalog_source,
            today,
            format,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn catalog_source(&self) -> &CatalogSource {
        &self.catalog_source
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn json_mode(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_source {
            CatalogSource::File(path) => Catalog::load_from(path)
                .with_context(|| format!("Failed to load catalog {}", path.display())),
            CatalogSource::Sample => Ok(sample_catalog()),
        }
    }

    /// Config `[query]` defaults with the command-line flags layered on top
    pub fn query_params(&self, args: &QueryArgs) -> QueryParams {
        args.apply(self.config.query.clone())
    }
}
