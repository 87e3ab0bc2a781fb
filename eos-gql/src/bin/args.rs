// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    version = eos_gql::VERSION,
    about = "GraphQL gateway over the EOSIO chain API",
)]
pub struct Args {
    /// Sets the configuration file path
    #[clap(long, short, env = "EOS_GQL_CONFIG_TOML", value_parser)]
    pub config: Option<PathBuf>,

    /// Output log level
    #[clap(long)]
    pub log_level: Option<tracing::Level>,

    // Change the log format accordingly
    #[clap(long, value_parser = PossibleValuesParser::new(["coloured", "plain", "json"]))]
    pub log_type: Option<String>,

    /// Add log filter(s)
    #[clap(long)]
    pub log_filter: Option<String>,

    #[clap(long)]
    /// Address the http server should listen on
    pub http_listen_addr: Option<SocketAddr>,

    #[clap(long)]
    /// Base URL of the upstream node, eg: https://eos.greymass.com
    pub node_url: Option<String>,
}
