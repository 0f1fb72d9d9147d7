// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::fmt;
use std::path::PathBuf;

use clap::Parser;

use crate::constants::{DEFAULT_CREDENTIALS_FILE, DEFAULT_LISTEN_ADDRESS};

#[derive(Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct WrapperOptions {
    /// Shared token Oxidized must present as `Authorization: Token <token>`
    #[arg(long, default_value = "", env("WRAPPER_TOKEN"), hide_env_values = true)]
    pub wrapper_token: String,
    /// NetBox device list URL, e.g. https://netbox/api/dcim/devices/?limit=0
    #[arg(long, env("NETBOX_URL"))]
    pub netbox_url: Option<String>,
    #[arg(long, env("NETBOX_TOKEN"), hide_env_values = true)]
    pub netbox_token: Option<String>,
    #[arg(long, default_value = DEFAULT_CREDENTIALS_FILE, env("CREDENTIALS_FILE"))]
    pub credentials_file: PathBuf,
    #[arg(long, default_value = DEFAULT_LISTEN_ADDRESS, env("LISTEN"))]
    pub listen: String,
    /// PEM bundle trusted for NetBox instead of the system roots
    #[arg(long, env("NETBOX_CA_FILE"))]
    pub netbox_ca_file: Option<PathBuf>,
}

/// Where and how to reach NetBox for one request.
#[derive(Clone, Copy)]
pub struct UpstreamTarget<'a> {
    pub url: &'a str,
    pub token: &'a str,
}

impl WrapperOptions {
    /// Returns the NetBox URL and token, or `None` if either is unset or empty.
    pub fn upstream(&self) -> Option<UpstreamTarget<'_>> {
        let url = self.netbox_url.as_deref().filter(|v| !v.is_empty())?;
        let token = self.netbox_token.as_deref().filter(|v| !v.is_empty())?;
        Some(UpstreamTarget { url, token })
    }

    /// CA bundle path, ignoring an empty value.
    pub fn ca_file(&self) -> Option<&std::path::Path> {
        self.netbox_ca_file
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}

// Custom Debug implementation to prevent accidental logging of tokens
impl fmt::Debug for WrapperOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapperOptions")
            .field("wrapper_token", &"[REDACTED]")
            .field("netbox_url", &self.netbox_url)
            .field(
                "netbox_token",
                &self.netbox_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("credentials_file", &self.credentials_file)
            .field("listen", &self.listen)
            .field("netbox_ca_file", &self.netbox_ca_file)
            .finish()
    }
}

impl Default for WrapperOptions {
    fn default() -> Self {
        WrapperOptions {
            wrapper_token: String::new(),
            netbox_url: None,
            netbox_token: None,
            credentials_file: PathBuf::from(DEFAULT_CREDENTIALS_FILE),
            listen: DEFAULT_LISTEN_ADDRESS.to_string(),
            netbox_ca_file: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_command_line() {
        let options = WrapperOptions::try_parse_from(["cred-wrapper"]).unwrap();
        assert_eq!(options.listen, "0.0.0.0:8081");
        assert_eq!(options.credentials_file, PathBuf::from("./cred-sets.json"));
        assert!(options.upstream().is_none());
        assert!(options.ca_file().is_none());
    }

    #[test]
    fn test_upstream_requires_url_and_token() {
        let mut options = WrapperOptions {
            netbox_url: Some("https://netbox.example/api/dcim/devices/".to_string()),
            ..Default::default()
        };
        assert!(options.upstream().is_none());

        options.netbox_token = Some(String::new());
        assert!(options.upstream().is_none());

        options.netbox_token = Some("nb-token".to_string());
        let target = options.upstream().unwrap();
        assert_eq!(target.url, "https://netbox.example/api/dcim/devices/");
        assert_eq!(target.token, "nb-token");
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let options = WrapperOptions {
            wrapper_token: "inbound-secret".to_string(),
            netbox_token: Some("upstream-secret".to_string()),
            ..Default::default()
        };
        let rendered = format!("{options:?}");
        assert!(!rendered.contains("inbound-secret"));
        assert!(!rendered.contains("upstream-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
