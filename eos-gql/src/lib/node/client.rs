// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use async_trait::async_trait;
use eos_data::abi::{Abi, AbiResponse};
use eos_data::{ChainInfo, RawBlock};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

use super::error::ErrorResponse;
use super::{ChainRpc, NodeError};
use crate::config::{ConfigError, NodeConfig};

/// [`ChainRpc`] over the node's HTTP chain API.
#[derive(Debug, Clone)]
pub struct HttpChainRpc {
    client: reqwest::Client,
    base_url: String,
}

impl HttpChainRpc {
    /// Builds a client for the node configured in `config`.
    ///
    /// Every call carries `config.timeout` as its deadline.
    pub fn new(config: &NodeConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ConfigError::validation(format!(
                    "cannot build node client: {e}"
                ))
            })?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/v1/chain/{method}", self.base_url)
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T, NodeError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(method);
        debug!(%url, "Calling node");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(match serde_json::from_slice::<ErrorResponse>(&bytes) {
                Ok(err) => {
                    warn!(
                        %url,
                        status = err.code,
                        message = %err.message,
                        error = %err.error.name,
                        "Node rejected request"
                    );
                    err.into()
                }
                Err(_) => NodeError::Status {
                    status,
                    body: String::from_utf8_lossy(&bytes).into_owned(),
                },
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ChainRpc for HttpChainRpc {
    async fn get_info(&self) -> Result<ChainInfo, NodeError> {
        self.call("get_info", &json!({})).await
    }

    async fn get_block(&self, block_num: u32) -> Result<RawBlock, NodeError> {
        self.call("get_block", &json!({ "block_num_or_id": block_num }))
            .await
    }

    async fn get_abi(&self, account: &str) -> Result<Option<Abi>, NodeError> {
        let response: AbiResponse = self
            .call("get_abi", &json!({ "account_name": account }))
            .await?;
        Ok(response.abi)
    }
}
