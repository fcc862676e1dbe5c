use std::fs;

use serde::{Deserialize, Serialize};

use crate::{Error, RowsCount, Zone};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "BOOKINGS_API_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub rows_count: RowsCount,
    /// IANA zone name used for the form's date/time fields. Unset means the
    /// host's local zone.
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    pub fn load(filename: impl AsRef<str>) -> Result<Self, Error> {
        let path = shellexpand::tilde(filename.as_ref()).into_owned();
        let content = fs::read_to_string(&path).map_err(|source| Error::ConfigRead {
            path: path.clone(),
            source,
        })?;
        content.parse()
    }

    /// Applies `BOOKINGS_API_URL` when it is set.
    pub fn with_env_overrides(self) -> Self {
        self.with_api_url(std::env::var(API_URL_ENV).ok())
    }

    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.is_empty()) {
            self.api.base_url = url;
        }
        self
    }
}

impl std::str::FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_yaml::from_str(s)?)
    }
}

impl UiConfig {
    pub fn zone(&self) -> Result<Zone, Error> {
        match &self.timezone {
            Some(name) => name.parse(),
            None => Ok(Zone::Local),
        }
    }
}
