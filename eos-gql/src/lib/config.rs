// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Gateway Configuration
//!
//! Configuration of the HTTP server, the upstream node client and the
//! query limits.
//!
//! ## Configuration Sources (in order of precedence)
//!
//! 1. Environment variables (`PORT` and the `EOS_GQL_` prefixed ones)
//! 2. Configuration file (if specified)
//! 3. Default values
//!
//! ## Example
//!
//! ```toml
//! [http]
//! bind_address = "0.0.0.0:4000"
//! max_body_size = 1048576
//!
//! [http.cors]
//! enabled = true
//!
//! [node]
//! url = "http://api.eosnewyork.io"
//! timeout = "30s"
//!
//! [query]
//! max_blocks = 1000
//! ```
//!
//! ## Environment Variables
//!
//! - `PORT=8080` replaces the port of `http.bind_address`, keeping its IP
//! - `EOS_GQL_HTTP_BIND_ADDRESS=127.0.0.1:4000`
//! - `EOS_GQL_HTTP_MAX_BODY_SIZE=1048576`
//! - `EOS_GQL_CORS_ENABLED=false`
//! - `EOS_GQL_NODE_URL=https://eos.greymass.com`
//! - `EOS_GQL_NODE_TIMEOUT=10s`
//! - `EOS_GQL_QUERY_MAX_BLOCKS=100`
//!
//! `EOS_GQL_CONFIG_PATH` points [`GatewayConfig::load_default`] at a
//! configuration file.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Prefix of every gateway environment variable but `PORT`.
pub const ENV_PREFIX: &str = "EOS_GQL_";

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading configuration file
    #[error("Failed to read configuration file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Error parsing TOML
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Error serializing to TOML
    #[error("Failed to serialize to TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Error parsing environment variable
    #[error("Failed to parse environment variable {0}: {1}")]
    EnvParse(String, String),

    /// Validation error
    #[error("Configuration validation error: {0}")]
    Validation(String),
}

impl ConfigError {
    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        ConfigError::Validation(msg.into())
    }
}

/// Main configuration of the gateway.
///
/// Created once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,

    /// Upstream node configuration
    pub node: NodeConfig,

    /// Query limits
    pub query: QueryConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    /// Socket address to bind the HTTP server to
    pub bind_address: SocketAddr,

    /// Maximum request body size in bytes
    pub max_body_size: usize,

    /// CORS configuration
    pub cors: CorsConfig,
}

/// CORS configuration.
///
/// When enabled the gateway answers any origin, method and header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Whether CORS is enabled
    pub enabled: bool,
}

/// Upstream chain API node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Base URL of the node, without the `/v1/chain` path
    pub url: String,

    /// Deadline of a single remote call
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

/// Query limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Largest `limit` accepted by a block range query
    pub max_blocks: u64,
}

/// Builder for [`GatewayConfig`]
#[derive(Default)]
pub struct GatewayConfigBuilder {
    config: GatewayConfig,
}

impl GatewayConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set HTTP bind address
    pub fn http_bind_address(mut self, address: SocketAddr) -> Self {
        self.config.http.bind_address = address;
        self
    }

    /// Set the maximum request body size
    pub fn max_body_size(mut self, size: usize) -> Self {
        self.config.http.max_body_size = size;
        self
    }

    /// Enable or disable CORS
    pub fn enable_cors(mut self, enable: bool) -> Self {
        self.config.http.cors.enabled = enable;
        self
    }

    /// Set the upstream node URL
    pub fn node_url(mut self, url: impl Into<String>) -> Self {
        self.config.node.url = url.into();
        self
    }

    /// Set the upstream call timeout
    pub fn node_timeout(mut self, timeout: Duration) -> Self {
        self.config.node.timeout = timeout;
        self
    }

    /// Set the largest block range served by one query
    pub fn max_blocks(mut self, max_blocks: u64) -> Self {
        self.config.query.max_blocks = max_blocks;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> GatewayConfig {
        self.config
    }
}

impl GatewayConfig {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILENAME: &'static str = "eos_gql.toml";

    /// Create a new builder for GatewayConfig
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::new()
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: GatewayConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `EOS_GQL_CONFIG_PATH`, or from
    /// [`Self::DEFAULT_CONFIG_FILENAME`] in the working directory.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(Some(&Self::default_config_path()))
    }

    /// Load configuration with the following precedence:
    /// 1. Environment variables
    /// 2. Config file (if specified and present)
    /// 3. Default values
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match config_file {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(path)?;
                toml::from_str(&content)?
            }
            _ => Self::default(),
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides the values whose environment variable is set.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Some(addr) = env_var("HTTP_BIND_ADDRESS") {
            self.http.bind_address = parse_env("HTTP_BIND_ADDRESS", &addr)?;
        }
        if let Ok(port) = env::var("PORT") {
            let port = port.trim().parse::<u16>().map_err(|e| {
                ConfigError::EnvParse("PORT".into(), e.to_string())
            })?;
            self.http.bind_address.set_port(port);
        }
        if let Some(size) = env_var("HTTP_MAX_BODY_SIZE") {
            self.http.max_body_size = parse_env("HTTP_MAX_BODY_SIZE", &size)?;
        }
        if let Some(enabled) = env_var("CORS_ENABLED") {
            self.http.cors.enabled = enabled.to_lowercase() == "true";
        }
        if let Some(url) = env_var("NODE_URL") {
            self.node.url = url;
        }
        if let Some(timeout) = env_var("NODE_TIMEOUT") {
            self.node.timeout =
                humantime_serde::re::humantime::parse_duration(&timeout)
                    .map_err(|e| {
                        ConfigError::EnvParse(
                            format!("{ENV_PREFIX}NODE_TIMEOUT"),
                            e.to_string(),
                        )
                    })?;
        }
        if let Some(max_blocks) = env_var("QUERY_MAX_BLOCKS") {
            self.query.max_blocks =
                parse_env("QUERY_MAX_BLOCKS", &max_blocks)?;
        }
        Ok(())
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Write configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let toml = self.to_toml_string()?;
        fs::write(path, toml)?;
        Ok(())
    }

    /// Validates configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.max_body_size == 0 {
            return Err(ConfigError::validation(
                "http.max_body_size must be greater than 0",
            ));
        }

        let url = Url::parse(&self.node.url).map_err(|e| {
            ConfigError::validation(format!(
                "node.url '{}' is not a valid URL: {e}",
                self.node.url
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::validation(format!(
                "node.url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.node.timeout.is_zero() {
            return Err(ConfigError::validation(
                "node.timeout must be greater than 0",
            ));
        }

        if self.query.max_blocks == 0 {
            return Err(ConfigError::validation(
                "query.max_blocks must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        env::var(format!("{ENV_PREFIX}CONFIG_PATH"))
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(Self::DEFAULT_CONFIG_FILENAME))
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_http_address(),
            max_body_size: 1024 * 1024, // 1 MB
            cors: CorsConfig::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            url: "http://api.eosnewyork.io".into(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self { max_blocks: 1000 }
    }
}

fn default_http_address() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 4000)
}

fn env_var(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}{name}")).ok()
}

fn parse_env<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| {
        ConfigError::EnvParse(format!("{ENV_PREFIX}{name}"), e.to_string())
    })
}
