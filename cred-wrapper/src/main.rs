// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use anyhow::Context;
use clap::Parser;
use cred_wrapper::application::{AppState, Application};
use cred_wrapper::configuration::WrapperOptions;
use cred_wrapper::credentials::CredentialStore;
use cred_wrapper::inventory::InventoryClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        // this needs to be set to remove duplicated information in the log.
        .with_current_span(false)
        .with_ansi(false)
        // the container runtime adds the ingestion time.
        .without_time()
        .with_target(false)
        .init();

    // get configuration options from the command line and environment variables
    let options = WrapperOptions::parse();

    tracing::info!("[wrapper] {:?}", &options);

    let credentials = CredentialStore::load(&options.credentials_file)
        .context("unable to load credential sets")?;
    let inventory =
        InventoryClient::new(options.ca_file()).context("unable to initialize NetBox client")?;

    let application = Application::build(AppState::new(options, credentials, inventory))
        .await
        .context("unable to start listener")?;

    application
        .run_until_stopped()
        .await
        .context("server stopped unexpectedly")
}
