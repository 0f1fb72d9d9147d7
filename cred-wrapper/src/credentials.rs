// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Credential sets loaded once from disk.
//!
//! The file is a JSON object mapping set names to `{"username", "password"}`:
//!
//! ```json
//! {
//!   "default": {"username": "admin", "password": "pw"},
//!   "cisco": {"username": "cuser", "password": "cpw"}
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use crate::constants::DEFAULT_CREDENTIAL_SET;
use crate::errors::StartupError;
use crate::models::CredentialSet;

#[derive(Debug, Default)]
pub struct CredentialStore {
    sets: HashMap<String, CredentialSet>,
}

impl CredentialStore {
    /// Reads and parses the credentials file. Any failure is fatal for startup.
    pub fn load(path: &Path) -> Result<Self, StartupError> {
        let data = std::fs::read(path).map_err(|source| StartupError::CredentialsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let sets: HashMap<String, CredentialSet> =
            serde_json::from_slice(&data).map_err(|source| StartupError::CredentialsParse {
                path: path.to_path_buf(),
                source,
            })?;

        let store = Self::from_map(sets);
        tracing::info!("[wrapper] loaded {} credential sets", store.len());
        Ok(store)
    }

    pub fn from_map(sets: HashMap<String, CredentialSet>) -> Self {
        if !sets.contains_key(DEFAULT_CREDENTIAL_SET) {
            tracing::warn!(
                "[wrapper] no '{}' credential set defined, devices with unknown sets get empty credentials",
                DEFAULT_CREDENTIAL_SET
            );
        }
        Self { sets }
    }

    /// Looks up `name`, falling back to the default set and then to empty
    /// credentials. Never fails.
    pub fn resolve(&self, name: &str) -> CredentialSet {
        if let Some(set) = self.sets.get(name) {
            return set.clone();
        }

        tracing::warn!(
            "[wrapper] credential set {:?} not found in credentials file, using '{}'",
            name,
            DEFAULT_CREDENTIAL_SET
        );
        self.sets
            .get(DEFAULT_CREDENTIAL_SET)
            .cloned()
            .unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
