// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! HTTP route handlers for the wrapper API.
//!
//! | Method | Path | Handler | Description |
//! |--------|------|---------|-------------|
//! | GET | `/devices` | [`devices`] | NetBox devices with credentials, for Oxidized |
//! | GET | `/healthz` | [`health`] | Health check endpoint |

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::response::IntoResponse;

use crate::application::AppState;
use crate::auth::client_ip;
use crate::constants::MAX_LOGGED_BODY_BYTES;
use crate::errors::AppError;
use crate::models::{DevicesResponse, InventoryPage};
use crate::transform::Transformer;

/// Health check endpoint. Always `200 OK`, no authentication.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK\n")
}

/// Lists NetBox devices in the shape Oxidized's HTTP source expects.
///
/// # Request Flow
///
/// 1. Check the `Authorization: Token <WRAPPER_TOKEN>` header
/// 2. Make sure the NetBox URL and token are configured
/// 3. Fetch the device list from NetBox
/// 4. Decode it and map every device with a primary IPv4 address
/// 5. Return `{"results": [...]}`
///
/// # Errors
///
/// - [`AppError::Unauthorized`] - Missing or wrong token (401)
/// - [`AppError::MissingUpstreamConfig`] - NetBox URL or token unset (500)
/// - [`AppError::UpstreamUnavailable`] - NetBox could not be reached (502)
/// - [`AppError::InvalidUpstreamResponse`] - NetBox body is not a device list (500)
#[tracing::instrument(skip(state, request))]
pub async fn devices(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<DevicesResponse>, AppError> {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let caller = client_ip(request.headers(), peer);
    tracing::info!(
        "[wrapper] {} {} from {}",
        request.method(),
        request.uri().path(),
        caller
    );

    // 1. Authorize before anything touches NetBox
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .map(|v| v.as_bytes());
    if !state.auth.authorize(header) {
        tracing::warn!("[wrapper] unauthorized request from {}", caller);
        return Err(AppError::Unauthorized);
    }

    // 2. Upstream configuration
    let target = state
        .options
        .upstream()
        .ok_or(AppError::MissingUpstreamConfig)?;

    // 3. Fetch
    let body = state.inventory.fetch(target).await?;
    tracing::info!("[wrapper] good GET request to {}", target.url);

    // 4. Decode and map
    let page: InventoryPage = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(
            "[wrapper] failed to decode NetBox JSON: {}; raw response snippet: {:?}",
            e,
            snippet(&body)
        );
        AppError::InvalidUpstreamResponse
    })?;

    let results = Transformer::new(&state.credentials).transform_all(&page.results);
    tracing::info!(
        "[wrapper] returned {} devices out of {} NetBox records",
        results.len(),
        page.results.len()
    );

    // 5. Encode
    Ok(Json(DevicesResponse { results }))
}

/// Lossy UTF-8 view of `body`, cut to [`MAX_LOGGED_BODY_BYTES`].
fn snippet(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() <= MAX_LOGGED_BODY_BYTES {
        return text.into_owned();
    }

    let mut end = MAX_LOGGED_BODY_BYTES;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...(truncated)", &text[..end])
}
