// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::connect_info::{ConnectInfo, IntoMakeServiceWithConnectInfo};
use axum::middleware::AddExtension;
use axum::routing::get;
use axum::serve::Serve;
use tokio::net::TcpListener;

use crate::auth::AuthGate;
use crate::configuration::WrapperOptions;
use crate::credentials::CredentialStore;
use crate::inventory::InventoryClient;
use crate::routes;

type Server = Serve<
    TcpListener,
    IntoMakeServiceWithConnectInfo<Router, SocketAddr>,
    AddExtension<Router, ConnectInfo<SocketAddr>>,
>;

/// Everything a request needs, built once before the listener starts.
#[derive(Debug)]
pub struct AppState {
    pub options: WrapperOptions,
    pub credentials: CredentialStore,
    pub inventory: InventoryClient,
    pub auth: AuthGate,
}

impl AppState {
    pub fn new(
        options: WrapperOptions,
        credentials: CredentialStore,
        inventory: InventoryClient,
    ) -> Self {
        let auth = AuthGate::new(&options.wrapper_token);
        Self {
            options,
            credentials,
            inventory,
            auth,
        }
    }
}

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(state: AppState) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(&state.options.listen).await?;
        let server = run(listener, Arc::new(state))?;
        let local_addr = server.local_addr()?;

        tracing::info!(
            "[wrapper] cred-wrapper v{} listening on {}",
            env!("CARGO_PKG_VERSION"),
            local_addr
        );

        Ok(Self {
            port: local_addr.port(),
            server,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/devices", get(routes::devices))
        .route("/healthz", get(routes::health))
        .with_state(state)
}

#[tracing::instrument(skip(listener, state))]
pub fn run(listener: TcpListener, state: Arc<AppState>) -> Result<Server, std::io::Error> {
    let app = create_router(state);
    Ok(axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    ))
}
