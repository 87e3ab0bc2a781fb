// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::env;
use std::sync::Mutex;
use std::time::Duration;

use assert_matches::assert_matches;
use lazy_static::lazy_static;
use tempfile::NamedTempFile;

use eos_gql::config::{ConfigError, GatewayConfig};

lazy_static! {
    static ref ENV_MUTEX: Mutex<()> = Mutex::new(());
}

const ENV_KEYS: &[&str] = &[
    "PORT",
    "EOS_GQL_HTTP_BIND_ADDRESS",
    "EOS_GQL_HTTP_MAX_BODY_SIZE",
    "EOS_GQL_CORS_ENABLED",
    "EOS_GQL_NODE_URL",
    "EOS_GQL_NODE_TIMEOUT",
    "EOS_GQL_QUERY_MAX_BLOCKS",
    "EOS_GQL_CONFIG_PATH",
];

struct EnvVarGuard<'a> {
    key: &'a str,
    original_value: Option<String>,
}

impl<'a> EnvVarGuard<'a> {
    fn set(key: &'a str, value: &str) -> Self {
        let original_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key,
            original_value,
        }
    }

    fn unset(key: &'a str) -> Self {
        let original_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key,
            original_value,
        }
    }
}

impl<'a> Drop for EnvVarGuard<'a> {
    fn drop(&mut self) {
        if let Some(ref val) = self.original_value {
            env::set_var(self.key, val);
        } else {
            env::remove_var(self.key);
        }
    }
}

/// Clears every gateway variable, then sets `vars`.
///
/// Guards drop front to back, so the ones for `vars` come first.
fn set_env_vars<'a>(vars: &'a [(&'a str, &'a str)]) -> Vec<EnvVarGuard<'a>> {
    let cleared: Vec<_> =
        ENV_KEYS.iter().map(|k| EnvVarGuard::unset(k)).collect();
    let set: Vec<_> =
        vars.iter().map(|(k, v)| EnvVarGuard::set(k, v)).collect();
    set.into_iter().chain(cleared).collect()
}

fn lock_env() -> std::sync::MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
}

#[test]
fn test_default_config() {
    let config = GatewayConfig::default();
    assert_eq!(config.http.bind_address.to_string(), "0.0.0.0:4000");
    assert_eq!(config.http.max_body_size, 1024 * 1024);
    assert!(config.http.cors.enabled);
    assert_eq!(config.node.url, "http://api.eosnewyork.io");
    assert_eq!(config.node.timeout, Duration::from_secs(30));
    assert_eq!(config.query.max_blocks, 1000);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_roundtrip() -> Result<(), ConfigError> {
    let _lock = lock_env();
    let _guards = set_env_vars(&[]);

    let config = GatewayConfig::builder()
        .node_url("https://eos.greymass.com")
        .node_timeout(Duration::from_secs(10))
        .max_blocks(50)
        .build();
    let file = NamedTempFile::new().expect("Failed to create temp file");
    config.to_file(file.path())?;

    let loaded = GatewayConfig::load(Some(file.path()))?;
    assert_eq!(loaded, config);

    let content = std::fs::read_to_string(file.path())?;
    assert!(content.contains("timeout = \"10s\""));
    Ok(())
}

#[test]
fn test_partial_file_keeps_defaults() -> Result<(), ConfigError> {
    let _lock = lock_env();
    let _guards = set_env_vars(&[]);

    let file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(file.path(), "[query]\nmax_blocks = 10\n")?;

    let config = GatewayConfig::load(Some(file.path()))?;
    assert_eq!(config.query.max_blocks, 10);
    assert_eq!(config.http, GatewayConfig::default().http);
    assert_eq!(config.node, GatewayConfig::default().node);
    Ok(())
}

#[test]
fn test_missing_file_uses_defaults() -> Result<(), ConfigError> {
    let _lock = lock_env();
    let _guards = set_env_vars(&[]);

    let dir = tempfile::tempdir().expect("temp dir");
    let absent = dir.path().join("absent.toml");
    let config = GatewayConfig::load(Some(absent.as_path()))?;
    assert_eq!(config, GatewayConfig::default());
    Ok(())
}

#[test]
fn test_env_overrides_file() -> Result<(), ConfigError> {
    let _lock = lock_env();
    let _guards = set_env_vars(&[
        ("EOS_GQL_NODE_URL", "http://localhost:8888"),
        ("EOS_GQL_NODE_TIMEOUT", "2s 500ms"),
        ("EOS_GQL_CORS_ENABLED", "false"),
        ("PORT", "8080"),
    ]);

    let file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(
        file.path(),
        "[http]\nbind_address = \"127.0.0.1:4000\"\n\n[node]\nurl = \"https://eos.greymass.com\"\n",
    )?;

    let config = GatewayConfig::load(Some(file.path()))?;
    assert_eq!(config.http.bind_address.to_string(), "127.0.0.1:8080");
    assert!(!config.http.cors.enabled);
    assert_eq!(config.node.url, "http://localhost:8888");
    assert_eq!(config.node.timeout, Duration::from_millis(2500));
    Ok(())
}

#[test]
fn test_from_env() -> Result<(), ConfigError> {
    let _lock = lock_env();
    let _guards = set_env_vars(&[
        ("EOS_GQL_HTTP_BIND_ADDRESS", "127.0.0.1:9000"),
        ("EOS_GQL_QUERY_MAX_BLOCKS", "25"),
        ("EOS_GQL_HTTP_MAX_BODY_SIZE", "2048"),
    ]);

    let config = GatewayConfig::from_env()?;
    assert_eq!(config.http.bind_address.to_string(), "127.0.0.1:9000");
    assert_eq!(config.query.max_blocks, 25);
    assert_eq!(config.http.max_body_size, 2048);
    Ok(())
}

#[test]
fn test_invalid_env_values() {
    let _lock = lock_env();

    {
        let _guards = set_env_vars(&[("PORT", "not-a-port")]);
        assert_matches!(
            GatewayConfig::from_env(),
            Err(ConfigError::EnvParse(key, _)) if key == "PORT"
        );
    }
    {
        let _guards = set_env_vars(&[("EOS_GQL_QUERY_MAX_BLOCKS", "-3")]);
        assert_matches!(
            GatewayConfig::from_env(),
            Err(ConfigError::EnvParse(key, _)) if key == "EOS_GQL_QUERY_MAX_BLOCKS"
        );
    }
    {
        let _guards = set_env_vars(&[("EOS_GQL_NODE_TIMEOUT", "soon")]);
        assert_matches!(
            GatewayConfig::from_env(),
            Err(ConfigError::EnvParse(..))
        );
    }
}

#[test]
fn test_default_config_path_from_env() {
    let _lock = lock_env();

    {
        let _guards =
            set_env_vars(&[("EOS_GQL_CONFIG_PATH", "/etc/eos-gql/gateway.toml")]);
        assert_eq!(
            GatewayConfig::default_config_path(),
            std::path::PathBuf::from("/etc/eos-gql/gateway.toml")
        );
    }
    let _guards = set_env_vars(&[]);
    assert_eq!(
        GatewayConfig::default_config_path(),
        std::path::PathBuf::from(GatewayConfig::DEFAULT_CONFIG_FILENAME)
    );
}

#[test]
fn test_validation() {
    let invalid = [
        GatewayConfig::builder().max_body_size(0).build(),
        GatewayConfig::builder().node_url("not a url").build(),
        GatewayConfig::builder().node_url("ftp://eos.example.com").build(),
        GatewayConfig::builder().node_timeout(Duration::ZERO).build(),
        GatewayConfig::builder().max_blocks(0).build(),
    ];

    for config in invalid {
        assert_matches!(config.validate(), Err(ConfigError::Validation(_)));
    }
}

#[test]
fn test_malformed_file_is_parse_error() {
    let _lock = lock_env();
    let _guards = set_env_vars(&[]);

    let file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(file.path(), "[query]\nmax_blocks = \"many\"\n")
        .expect("write config");
    assert_matches!(
        GatewayConfig::load(Some(file.path())),
        Err(ConfigError::TomlParse(_))
    );
}
