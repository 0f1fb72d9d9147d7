// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! # cred-wrapper
//!
//! Oxidized ⇄ NetBox integration wrapper.
//!
//! Oxidized polls this service for its node list. Each poll fetches the device
//! list from NetBox, attaches the login for every device from a local
//! credentials file and returns the result in the shape of Oxidized's HTTP
//! source.
//!
//! ## Architecture
//!
//! ```text
//! Oxidized -> GET /devices -> cred-wrapper -> GET NetBox API
//!                                  |
//!                                  +-> credentials file (loaded at startup)
//! ```
//!
//! Devices without a primary IPv4 address are skipped. Which credentials a
//! device gets is chosen by its `credential_set` custom field; unknown or
//! missing names fall back to the `default` set.
//!
//! ## Modules
//!
//! - [`application`]: Axum router, shared state and server setup
//! - [`auth`]: Inbound token check and client address lookup
//! - [`configuration`]: CLI/environment options parsed with clap
//! - [`constants`]: Defaults and NetBox field names
//! - [`credentials`]: Credential sets loaded from disk
//! - [`errors`]: Request and startup error types
//! - [`inventory`]: NetBox HTTP client
//! - [`models`]: NetBox input and Oxidized output types
//! - [`routes`]: HTTP route handlers (devices, healthz)
//! - [`transform`]: NetBox device to Oxidized node mapping
//!
//! ## Usage
//!
//! ```bash
//! WRAPPER_TOKEN=s3cret \
//! NETBOX_URL='https://netbox.example/api/dcim/devices/?limit=0' \
//! NETBOX_TOKEN=0123456789abcdef \
//! CREDENTIALS_FILE=/etc/cred-wrapper/cred-sets.json \
//! cred-wrapper
//! ```

pub mod application;
pub mod auth;
pub mod configuration;
pub mod constants;
pub mod credentials;
pub mod errors;
pub mod inventory;
pub mod models;
pub mod routes;
pub mod transform;
