// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Central error handling for the gateway.
//!
//! Every operation of the gateway returns `Result<T, Error>`. The variants
//! tell a caller apart "no such block" ([`Error::NotFound`]) from a bad
//! argument ([`Error::InvalidInput`]) and from a transient upstream failure
//! ([`Error::RemoteUnavailable`]).
//!
//! Before reaching a GraphQL client the error is turned into an
//! [`async_graphql::Error`] by [`ErrorExtensions::extend`], which attaches
//! a machine readable `code` and the HTTP `status` matching the variant to
//! the error `extensions`.

use async_graphql::ErrorExtensions;
use eos_data::EnrichError;
use http::StatusCode;
use thiserror::Error;

use crate::config::ConfigError;

/// Central error type of the gateway.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The remote node could not be reached or failed to answer.
    #[error("Remote node unavailable: {0}")]
    RemoteUnavailable(String),

    /// The block number or account does not exist on the remote chain.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A malformed argument, or a remote document that cannot be read.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error of the inbound HTTP transport (binding, serving).
    #[error("Transport error: {0}")]
    Transport(String),
}

impl Error {
    /// Machine readable code exposed in GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "NOT_FOUND",
            Error::InvalidInput(_) => "INVALID_INPUT",
            Error::RemoteUnavailable(_) => "REMOTE_UNAVAILABLE",
            Error::Config(_) | Error::Transport(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::RemoteUnavailable(_) => StatusCode::BAD_GATEWAY,
            Error::Config(_) | Error::Transport(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl ErrorExtensions for Error {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            e.set("status", self.status().as_u16());
        })
    }
}

impl From<EnrichError> for Error {
    fn from(err: EnrichError) -> Self {
        Error::InvalidInput(err.to_string())
    }
}
