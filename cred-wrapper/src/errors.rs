// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::path::PathBuf;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Errors that end a single `/devices` request.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("NETBOX_URL or NETBOX_TOKEN missing")]
    MissingUpstreamConfig,
    #[error("failed talking to NetBox: {0}")]
    UpstreamUnavailable(String),
    #[error("invalid NetBox response")]
    InvalidUpstreamResponse,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MissingUpstreamConfig => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            Self::InvalidUpstreamResponse => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({"code": status.as_u16(), "message": self.to_string()}));

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(source: reqwest::Error) -> Self {
        tracing::error!("[wrapper] NetBox request failed: {:?}", source);
        AppError::UpstreamUnavailable(source.to_string())
    }
}

/// Errors that stop the process before it starts serving.
#[derive(thiserror::Error, Debug)]
pub enum StartupError {
    #[error("cannot read credentials file {path:?}")]
    CredentialsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in credentials file {path:?}")]
    CredentialsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read CA file {path:?}")]
    CaRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse CA certificate(s) in {path:?}")]
    CaParse {
        path: PathBuf,
        #[source]
        source: reqwest::Error,
    },
    #[error("no CA certificates found in {path:?}")]
    CaEmpty { path: PathBuf },
    #[error("failed to build HTTP client")]
    HttpClient(#[from] reqwest::Error),
}
