// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use async_graphql::{ServerError, Value};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

pub type ChainResult<T> = std::result::Result<T, ChainError>;

/// Chain endpoint error types
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("{message}")]
    Custom { message: String },
    #[error("{0:?}")]
    GraphQL(Vec<ServerError>, StatusCode),
}

impl ChainError {
    pub fn status(&self) -> StatusCode {
        match self {
            ChainError::GraphQL(_, status) => *status,
            ChainError::Custom { .. } => {
                error!("Internal Server Error: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<Vec<ServerError>> for ChainError {
    fn from(errors: Vec<ServerError>) -> Self {
        let Some(first) = errors.first() else {
            error!("Empty error list in GraphQL response");
            return ChainError::Custom {
                message: "Empty error list in GraphQL response".to_string(),
            };
        };
        debug!("Found {} GraphQL errors", errors.len());

        // Only errors raised by the gateway carry a status
        let status = first
            .extensions
            .as_ref()
            .and_then(|extensions| extensions.get("status"))
            .map(|s| match s {
                Value::Number(n) => n.as_u64().unwrap_or(500) as u16,
                _ => 500,
            })
            .unwrap_or(500);

        let status = StatusCode::from_u16(status).unwrap_or_else(|_| {
            error!("Invalid status code: {}", status);
            StatusCode::INTERNAL_SERVER_ERROR
        });

        ChainError::GraphQL(errors, status)
    }
}

impl IntoResponse for ChainError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ChainError::GraphQL(errors, _) => {
                json!({ "data": null, "errors": errors })
            }
            ChainError::Custom { message } => {
                json!({ "data": null, "errors": [{ "message": message }] })
            }
        };
        (status, Json(body)).into_response()
    }
}
