// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

mod args;
mod config;
mod log;

use std::sync::Arc;

use clap::Parser;
use eos_gql::node::HttpChainRpc;
use eos_gql::state::AppState;
use tracing::info;

use crate::args::Args;
use crate::config::Config;
use crate::log::Log;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = Config::try_from(&args)?;

    Log::new(config.log_level()?, config.log_filter())
        .with_format(config.log_type()?)
        .register()?;

    info!(
        version = eos_gql::VERSION,
        node = %config.gateway.node.url,
        "Starting eos-gql"
    );

    let rpc = HttpChainRpc::new(&config.gateway.node)?;
    let app_state = Arc::new(AppState::new(config.gateway, rpc));

    eos_gql::http::run_server(app_state).await?;

    Ok(())
}
