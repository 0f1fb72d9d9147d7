// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use zeroize::ZeroizeOnDrop;

/// A named login used by Oxidized to reach a device.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, ZeroizeOnDrop)]
pub struct CredentialSet {
    pub username: String,
    pub password: String,
}

// Custom Debug implementation to prevent accidental logging of sensitive data
impl fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialSet")
            .field("username", &"[REDACTED]")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// The `/api/dcim/devices/` envelope returned by NetBox.
#[derive(Debug, Default, Deserialize)]
pub struct InventoryPage {
    #[serde(default)]
    pub results: Vec<InventoryRecord>,
}

/// The subset of a NetBox device the wrapper reads. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct InventoryRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub primary_ip4: Option<IpAddressRef>,
    #[serde(default)]
    pub platform: Option<SlugRef>,
    #[serde(default)]
    pub site: Option<SlugRef>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// Nested `primary_ip4` object; `address` is in CIDR form.
#[derive(Debug, Default, Deserialize)]
pub struct IpAddressRef {
    #[serde(default)]
    pub address: Option<String>,
}

/// Nested `platform` / `site` object.
#[derive(Debug, Default, Deserialize)]
pub struct SlugRef {
    #[serde(default)]
    pub slug: Option<String>,
}

/// NetBox custom fields: arbitrary keys with loosely typed values.
///
/// A `null` or missing `custom_fields` object behaves like an empty map.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct CustomFields(Option<Map<String, Value>>);

impl CustomFields {
    /// Returns the field if it is present and holds a string, `None` otherwise.
    pub fn optional_str(&self, key: &str) -> Option<&str> {
        self.0.as_ref()?.get(key)?.as_str()
    }
}

/// One device as Oxidized's HTTP source expects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceOutput {
    pub name: String,
    pub ip: String,
    pub model: String,
    pub group: String,
    pub username: String,
    pub password: String,
    pub enable_password: String,
    pub ssh_port: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DevicesResponse {
    pub results: Vec<DeviceOutput>,
}
