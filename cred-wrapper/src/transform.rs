// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! NetBox device → Oxidized node mapping.

use crate::constants::{
    CREDENTIAL_SET_FIELD, ENABLE_PASSWORD_FIELD, MISSING_SLUG, SSH_PORT_FIELD,
};
use crate::credentials::CredentialStore;
use crate::models::{DeviceOutput, InventoryRecord, SlugRef};

pub struct Transformer<'a> {
    credentials: &'a CredentialStore,
}

impl<'a> Transformer<'a> {
    pub fn new(credentials: &'a CredentialStore) -> Self {
        Self { credentials }
    }

    /// Maps one device, or returns `None` when it has no primary IPv4 address.
    pub fn transform(&self, record: &InventoryRecord) -> Option<DeviceOutput> {
        let address = record
            .primary_ip4
            .as_ref()
            .and_then(|ip| ip.address.as_deref())
            .filter(|address| !address.is_empty())?;

        let fields = &record.custom_fields;
        let set_name = fields.optional_str(CREDENTIAL_SET_FIELD).unwrap_or_default();
        let credential = self.credentials.resolve(set_name);

        Some(DeviceOutput {
            name: record.name.clone().unwrap_or_default(),
            ip: sanitize_ip(address).to_string(),
            model: slug_or_missing(record.platform.as_ref()),
            group: slug_or_missing(record.site.as_ref()),
            username: credential.username.clone(),
            password: credential.password.clone(),
            enable_password: optional_field(fields.optional_str(ENABLE_PASSWORD_FIELD)),
            ssh_port: optional_field(fields.optional_str(SSH_PORT_FIELD)),
        })
    }

    /// Maps every device with an address, keeping NetBox's order.
    pub fn transform_all(&self, records: &[InventoryRecord]) -> Vec<DeviceOutput> {
        records
            .iter()
            .filter_map(|record| self.transform(record))
            .collect()
    }
}

/// Strips a CIDR suffix: `10.0.0.1/24` → `10.0.0.1`.
pub fn sanitize_ip(address: &str) -> &str {
    address.split('/').next().unwrap_or(address)
}

fn slug_or_missing(reference: Option<&SlugRef>) -> String {
    reference
        .and_then(|r| r.slug.as_deref())
        .unwrap_or(MISSING_SLUG)
        .to_string()
}

fn optional_field(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::CredentialSet;
    use serde_json::json;
    use std::collections::HashMap;

    fn store(with_default: bool) -> CredentialStore {
        let mut sets = HashMap::from([(
            "switches".to_string(),
            CredentialSet {
                username: "swuser".to_string(),
                password: "swpw".to_string(),
            },
        )]);
        if with_default {
            sets.insert(
                "default".to_string(),
                CredentialSet {
                    username: "admin".to_string(),
                    password: "pw".to_string(),
                },
            );
        }
        CredentialStore::from_map(sets)
    }

    fn record(value: serde_json::Value) -> InventoryRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_sanitize_ip() {
        assert_eq!(sanitize_ip("10.0.0.1/24"), "10.0.0.1");
        assert_eq!(sanitize_ip("10.0.0.1"), "10.0.0.1");
        assert_eq!(sanitize_ip(sanitize_ip("10.0.0.1/24")), "10.0.0.1");
        assert_eq!(sanitize_ip("10.0.0.1/24/extra"), "10.0.0.1");
    }

    #[test]
    fn test_records_without_ipv4_are_dropped() {
        let credentials = store(true);
        let transformer = Transformer::new(&credentials);

        for value in [
            json!({"name": "no-ip"}),
            json!({"name": "null-ip", "primary_ip4": null}),
            json!({"name": "empty-ip", "primary_ip4": {"address": ""}}),
            json!({"name": "null-address", "primary_ip4": {"address": null}}),
        ] {
            assert!(transformer.transform(&record(value)).is_none());
        }
    }

    #[test]
    fn test_full_record() {
        let credentials = store(true);
        let device = Transformer::new(&credentials)
            .transform(&record(json!({
                "name": "core-sw1",
                "primary_ip4": {"address": "192.0.2.5/30"},
                "platform": {"slug": "ios"},
                "site": {"slug": "dc1"},
                "custom_fields": {
                    "credential_set": "switches",
                    "enable_password": "en4ble",
                    "oxidized_ssh_port": "2222"
                }
            })))
            .unwrap();

        assert_eq!(
            device,
            DeviceOutput {
                name: "core-sw1".to_string(),
                ip: "192.0.2.5".to_string(),
                model: "ios".to_string(),
                group: "dc1".to_string(),
                username: "swuser".to_string(),
                password: "swpw".to_string(),
                enable_password: "en4ble".to_string(),
                ssh_port: "2222".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_slugs_are_empty() {
        let credentials = store(true);
        let device = Transformer::new(&credentials)
            .transform(&record(json!({
                "name": "edge1",
                "primary_ip4": {"address": "10.1.1.1/32"},
                "platform": null,
                "site": {"slug": null}
            })))
            .unwrap();

        assert_eq!(device.model, "");
        assert_eq!(device.group, "");
    }

    #[test]
    fn test_unknown_or_absent_credential_set_uses_default() {
        let credentials = store(true);
        let transformer = Transformer::new(&credentials);

        for custom_fields in [
            json!({"credential_set": "routers"}),
            json!({"credential_set": 42}),
            json!({}),
            json!(null),
        ] {
            let device = transformer
                .transform(&record(json!({
                    "name": "r1",
                    "primary_ip4": {"address": "10.0.0.1/24"},
                    "custom_fields": custom_fields
                })))
                .unwrap();
            assert_eq!(device.username, "admin");
            assert_eq!(device.password, "pw");
        }
    }

    #[test]
    fn test_no_default_yields_empty_credentials() {
        let credentials = store(false);
        let device = Transformer::new(&credentials)
            .transform(&record(json!({
                "name": "r1",
                "primary_ip4": {"address": "10.0.0.1"},
                "custom_fields": {"credential_set": "routers"}
            })))
            .unwrap();

        assert_eq!(device.username, "");
        assert_eq!(device.password, "");
    }

    #[test]
    fn test_non_string_optional_fields_are_empty() {
        let credentials = store(true);
        let device = Transformer::new(&credentials)
            .transform(&record(json!({
                "name": "r1",
                "primary_ip4": {"address": "10.0.0.1"},
                "custom_fields": {"enable_password": null, "oxidized_ssh_port": 22}
            })))
            .unwrap();

        assert_eq!(device.enable_password, "");
        assert_eq!(device.ssh_port, "");
    }

    #[test]
    fn test_transform_all_keeps_order_and_filters() {
        let credentials = store(true);
        let records: Vec<InventoryRecord> = serde_json::from_value(json!([
            {"name": "b", "primary_ip4": {"address": "10.0.0.2/24"}},
            {"name": "skipped"},
            {"name": "a", "primary_ip4": {"address": "10.0.0.1/24"}},
        ]))
        .unwrap();

        let names: Vec<String> = Transformer::new(&credentials)
            .transform_all(&records)
            .into_iter()
            .map(|d| d.name)
            .collect();

        assert_eq!(names, vec!["b".to_string(), "a".to_string()]);
    }
}
