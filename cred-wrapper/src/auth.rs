// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::fmt;
use std::net::SocketAddr;

use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

use crate::constants::AUTHORIZATION_SCHEME;

/// Shared-token check guarding `/devices`.
#[derive(Clone)]
pub struct AuthGate {
    expected: String,
}

impl AuthGate {
    pub fn new(token: &str) -> Self {
        Self {
            expected: format!("{AUTHORIZATION_SCHEME}{token}"),
        }
    }

    /// `true` only when the header equals `Token <configured token>` exactly.
    /// The raw header bytes are compared, so non-ASCII tokens work too.
    pub fn authorize(&self, header: Option<&[u8]>) -> bool {
        match header {
            Some(value) => value.ct_eq(self.expected.as_bytes()).into(),
            None => false,
        }
    }
}

impl fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthGate")
            .field("expected", &"[REDACTED]")
            .finish()
    }
}

/// Best effort at the caller's address: the first `X-Forwarded-For` entry,
/// then `X-Real-IP`, then the socket peer.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
    };

    if let Some(forwarded) = header("x-forwarded-for") {
        return forwarded.split(',').next().unwrap_or_default().trim().to_string();
    }
    if let Some(real_ip) = header("x-real-ip") {
        return real_ip.to_string();
    }
    peer.map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
