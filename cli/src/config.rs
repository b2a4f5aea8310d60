// SPDX-FileCopyrightText: 2026 Schedview Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use schedview_api::ApiConfig;

/// The name of the schedview application.
pub const APP_NAME: &str = "schedview";

const CONFIG_ENV: &str = "SCHEDVIEW_CONFIG";

/// Configuration for the schedview application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Backend connection settings.
    pub api: ApiConfig,

    /// Page size for collection fetches.
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,
}

const fn default_page_limit() -> usize {
    50
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Resolves and parses the configuration file.
///
/// Resolution order: explicit `--config` path, the `SCHEDVIEW_CONFIG`
/// environment variable, then `schedview/config.toml` in the user config
/// directory.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse()
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    {
        xdg::BaseDirectories::new()
            .get_config_home()
            .ok_or_else(|| "Failed to get user-specific config directory".into())
    }

    #[cfg(not(unix))]
    {
        dirs::config_dir().ok_or_else(|| "Failed to get user-specific config directory".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_minimal_toml() {
        let config: Config = "\
[api]
base_url = \"http://localhost:8000\"
"
        .parse()
        .expect("Failed to parse config");

        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.page_limit, 50);
    }

    #[test]
    fn config_overrides_page_limit() {
        let config: Config = "\
page_limit = 20

[api]
base_url = \"http://localhost:8000\"
timeout_secs = 5
"
        .parse()
        .expect("Failed to parse config");

        assert_eq!(config.page_limit, 20);
        assert_eq!(config.api.timeout_secs, 5);
    }
}
