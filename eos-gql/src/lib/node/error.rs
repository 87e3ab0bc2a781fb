// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::error::Error;

/// Node error names meaning the requested block or account does not exist.
const NOT_FOUND_ERRORS: &[&str] =
    &["unknown_block_exception", "account_query_exception"];

/// Node error names meaning an argument of the call was malformed.
const INVALID_INPUT_ERRORS: &[&str] = &[
    "name_type_exception",
    "block_id_type_exception",
    "invalid_http_request",
    "parse_error_exception",
];

/// Errors of a call to the remote node.
#[derive(Error, Debug)]
pub enum NodeError {
    /// The request could not be sent or the response not received.
    #[error("Request to node failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status without a readable node error.
    #[error("Node answered with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The node reported a chain API error.
    #[error("Node error {} ({}): {}", .0.code, .0.name, .0.what)]
    Remote(RemoteErrorInfo),

    /// The node refused the request with a 4xx status and an error body.
    #[error("Node rejected request {} ({}): {}", .0.code, .0.name, .0.what)]
    Rejected(RemoteErrorInfo),

    /// The response body does not have the expected shape.
    #[error("Cannot decode node response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error body of a failed chain API call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct ErrorResponse {
    pub code: u16,
    pub message: String,
    pub error: RemoteErrorInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RemoteErrorInfo {
    pub code: i64,
    pub name: String,
    pub what: String,
    #[serde(default)]
    pub details: Vec<RemoteErrorDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RemoteErrorDetail {
    pub message: String,
}

impl RemoteErrorInfo {
    fn is_not_found(&self) -> bool {
        NOT_FOUND_ERRORS.contains(&self.name.as_str())
            || self
                .details
                .iter()
                .any(|d| d.message.starts_with("unknown key"))
    }

    fn is_invalid_input(&self) -> bool {
        INVALID_INPUT_ERRORS.contains(&self.name.as_str())
    }

    fn detail(&self) -> String {
        self.details
            .first()
            .map(|d| d.message.clone())
            .unwrap_or_else(|| self.what.clone())
    }
}

impl From<ErrorResponse> for NodeError {
    fn from(response: ErrorResponse) -> Self {
        if (400..500).contains(&response.code) {
            NodeError::Rejected(response.error)
        } else {
            NodeError::Remote(response.error)
        }
    }
}

impl From<NodeError> for Error {
    fn from(err: NodeError) -> Self {
        match err {
            NodeError::Remote(ref info) | NodeError::Rejected(ref info)
                if info.is_not_found() =>
            {
                Error::NotFound(info.detail())
            }
            NodeError::Remote(ref info) if info.is_invalid_input() => {
                Error::InvalidInput(info.detail())
            }
            NodeError::Rejected(ref info) => Error::InvalidInput(info.detail()),
            NodeError::Decode(ref e) => {
                Error::InvalidInput(format!("malformed node response: {e}"))
            }
            NodeError::Transport(_)
            | NodeError::Status { .. }
            | NodeError::Remote(_) => Error::RemoteUnavailable(err.to_string()),
        }
    }
}
