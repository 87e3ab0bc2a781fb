// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::path::PathBuf;
use std::str::FromStr;

use eos_gql::config::{ConfigError, GatewayConfig};
use serde::{Deserialize, Serialize};

use crate::args::Args;
use crate::log::LogFormat;

/// Binary configuration: log settings next to the gateway sections.
#[derive(Serialize, Deserialize, Clone, Default, Debug)]
pub(crate) struct Config {
    log_level: Option<String>,
    log_type: Option<String>,
    log_filter: Option<String>,

    #[serde(flatten)]
    pub(crate) gateway: GatewayConfig,
}

/// Default log_level.
const DEFAULT_LOG_LEVEL: &str = "info";

impl TryFrom<&Args> for Config {
    type Error = ConfigError;

    /// Reads the TOML file, then applies environment variables and finally
    /// the command line arguments.
    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let mut config = match config_path(args) {
            Some(path) => {
                let toml = std::fs::read_to_string(path)?;
                toml::from_str(&toml)?
            }
            None => Config::default(),
        };

        config.gateway.apply_env()?;

        // Overwrite config log-level
        if let Some(log_level) = args.log_level {
            config.log_level = Some(log_level.to_string());
        }

        // Overwrite config log-type
        if let Some(log_type) = &args.log_type {
            config.log_type = Some(log_type.into());
        }

        // Overwrite config log-filter
        if let Some(log_filter) = &args.log_filter {
            config.log_filter = Some(log_filter.into());
        }

        if let Some(addr) = args.http_listen_addr {
            config.gateway.http.bind_address = addr;
        }

        if let Some(url) = &args.node_url {
            config.gateway.node.url = url.clone();
        }

        config.gateway.validate()?;
        config.log_level()?;
        config.log_type()?;

        Ok(config)
    }
}

/// `--config` if given, else the default file when it exists.
fn config_path(args: &Args) -> Option<PathBuf> {
    args.config.clone().or_else(|| {
        let path = GatewayConfig::default_config_path();
        path.exists().then_some(path)
    })
}

impl Config {
    pub(crate) fn log_type(&self) -> Result<LogFormat, ConfigError> {
        match &self.log_type {
            None => Ok(LogFormat::default()),
            Some(log_type) => {
                LogFormat::from_str(log_type).map_err(ConfigError::validation)
            }
        }
    }

    pub(crate) fn log_level(&self) -> Result<tracing::Level, ConfigError> {
        let log_level = self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
        tracing::Level::from_str(log_level).map_err(|e| {
            ConfigError::validation(format!(
                "Invalid log-level specified '{log_level}' - {e}"
            ))
        })
    }

    pub(crate) fn log_filter(&self) -> String {
        self.log_filter.clone().unwrap_or_default()
    }
}
