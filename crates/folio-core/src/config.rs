//! Runtime configuration.
//!
//! Configuration comes from an optional TOML file overlaid with environment
//! variables. The only externally visible setting of the content layer is
//! the backend URL; the data source switch selects between the live API and
//! the built-in catalogue.
//!
//! ```toml
//! backend_url = "https://portfolio.example.com"
//! data_source = "remote"
//! log_filter = "warn,folio=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "FOLIO_BACKEND_URL";

/// Environment variable selecting the data source (`remote` or `static`).
pub const DATA_SOURCE_ENV: &str = "FOLIO_DATA_SOURCE";

/// Environment variable holding a tracing filter directive.
pub const LOG_FILTER_ENV: &str = "FOLIO_LOG";

/// Path segment appended to the backend URL for every API call.
pub const API_PREFIX: &str = "/api";

/// Where portfolio content comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// The remote content API.
    #[default]
    Remote,
    /// The built-in in-memory catalogue.
    Static,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Remote => write!(f, "remote"),
            DataSource::Static => write!(f, "static"),
        }
    }
}

impl FromStr for DataSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(DataSource::Remote),
            "static" => Ok(DataSource::Static),
            other => Err(Error::config(format!(
                "Unknown data source '{other}' (expected 'remote' or 'static')"
            ))),
        }
    }
}

/// Folio configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend base URL, without the `/api` suffix.
    pub backend_url: Option<String>,

    /// Selected content source.
    pub data_source: DataSource,

    /// Tracing filter directive.
    pub log_filter: Option<String>,
}

impl Config {
    /// Load configuration from an optional file and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Load configuration using a custom environment lookup.
    ///
    /// Environment values take precedence over file values.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
                tracing::debug!(path = %path.display(), "Loaded config file");
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };
        config.apply_env(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Invalid config file: {e}")))
    }

    /// Overlay values found through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BACKEND_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.backend_url = Some(url);
        }
        if let Some(source) = lookup(DATA_SOURCE_ENV).filter(|v| !v.trim().is_empty()) {
            self.data_source = source.parse()?;
        }
        if let Some(filter) = lookup(LOG_FILTER_ENV).filter(|v| !v.trim().is_empty()) {
            self.log_filter = Some(filter);
        }
        Ok(())
    }

    /// Check that the selected data source has what it needs.
    pub fn validate(&self) -> Result<()> {
        if self.data_source == DataSource::Remote && self.backend_url.is_none() {
            return Err(Error::config(format!(
                "{BACKEND_URL_ENV} must be set when the data source is 'remote'"
            )));
        }
        Ok(())
    }

    /// The API base: `<backend_url>/api`.
    pub fn api_base(&self) -> Result<String> {
        let backend = self
            .backend_url
            .as_deref()
            .ok_or_else(|| Error::config(format!("{BACKEND_URL_ENV} is not set")))?;
        Ok(api_base_for(backend))
    }
}

/// Join a backend URL and the API prefix, normalising trailing slashes.
pub fn api_base_for(backend_url: &str) -> String {
    format!("{}{API_PREFIX}", backend_url.trim().trim_end_matches('/'))
}
