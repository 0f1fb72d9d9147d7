// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:8081";
pub const DEFAULT_CREDENTIALS_FILE: &str = "./cred-sets.json";

/// Credential set used when a device names an unknown set (or none at all)
pub const DEFAULT_CREDENTIAL_SET: &str = "default";

// NetBox custom fields read from each device
pub const CREDENTIAL_SET_FIELD: &str = "credential_set";
pub const ENABLE_PASSWORD_FIELD: &str = "enable_password";
pub const SSH_PORT_FIELD: &str = "oxidized_ssh_port";

/// Value used for `model` and `group` when NetBox has no platform or site
pub const MISSING_SLUG: &str = "";

pub const AUTHORIZATION_SCHEME: &str = "Token ";

pub const MAX_LOGGED_BODY_BYTES: usize = 800; // of an undecodable upstream body
