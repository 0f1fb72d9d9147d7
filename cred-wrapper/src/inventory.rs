// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::path::Path;

use axum::body::Bytes;
use axum::http::header::AUTHORIZATION;
use reqwest::{Certificate, Client};

use crate::configuration::UpstreamTarget;
use crate::constants::AUTHORIZATION_SCHEME;
use crate::errors::StartupError;

/// HTTP client for the NetBox API, built once and shared by all requests.
#[derive(Debug, Clone)]
pub struct InventoryClient {
    client: Client,
}

impl InventoryClient {
    /// Builds the client, trusting only the certificates in `ca_file` when one
    /// is given and the system roots otherwise.
    pub fn new(ca_file: Option<&Path>) -> Result<Self, StartupError> {
        let Some(path) = ca_file else {
            tracing::info!("[wrapper] NETBOX_CA_FILE not set, using system root CAs");
            return Ok(Self {
                client: Client::builder().build()?,
            });
        };

        let pem = std::fs::read(path).map_err(|source| StartupError::CaRead {
            path: path.to_path_buf(),
            source,
        })?;
        let roots = Certificate::from_pem_bundle(&pem).map_err(|source| StartupError::CaParse {
            path: path.to_path_buf(),
            source,
        })?;
        if roots.is_empty() {
            return Err(StartupError::CaEmpty {
                path: path.to_path_buf(),
            });
        }

        let mut builder = Client::builder().tls_built_in_root_certs(false);
        for cert in roots {
            builder = builder.add_root_certificate(cert);
        }
        let client = builder.build()?;

        tracing::info!("[wrapper] custom HTTP client initialized with CA {:?}", path);
        Ok(Self { client })
    }

    /// Issues one GET against NetBox and returns the whole body.
    ///
    /// The status code is not inspected; a non-JSON error page fails later,
    /// at decode time.
    pub async fn fetch(&self, target: UpstreamTarget<'_>) -> Result<Bytes, reqwest::Error> {
        let response = self
            .client
            .get(target.url)
            .header(AUTHORIZATION, format!("{AUTHORIZATION_SCHEME}{}", target.token))
            .send()
            .await?;

        tracing::debug!(
            "[wrapper] NetBox answered {} for {}",
            response.status(),
            target.url
        );

        response.bytes().await
    }
}
