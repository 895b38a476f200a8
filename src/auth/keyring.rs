//
//  bitbucket-kit
//  auth/keyring.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Secure Token Storage
//!
//! Tokens are kept in the platform's native secret store:
//!
//! - **macOS**: Keychain Services
//! - **Linux**: Secret Service API (GNOME Keyring, KWallet)
//! - **Windows**: Windows Credential Manager
//!
//! Entries are keyed by service (`bbkit`) and host (`bitbucket.org`).

use anyhow::{Context, Result};
use keyring::Entry;

/// Token store backed by the system keyring.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyringStore {
    /// Creates a store under the `bbkit` service name.
    pub fn new() -> Self {
        Self::with_service(crate::APP_NAME)
    }

    /// Creates a store under a custom service name.
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// Stores `token` for `host`, replacing any previous value.
    pub fn store(&self, host: &str, token: &str) -> Result<()> {
        let entry = Entry::new(&self.service, host)?;
        entry
            .set_password(token)
            .with_context(|| format!("Failed to store token for {host} in the keyring"))?;
        Ok(())
    }

    /// Returns the token stored for `host`, if any.
    pub fn get(&self, host: &str) -> Result<Option<String>> {
        let entry = Entry::new(&self.service, host)?;
        match entry.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read token for {host}")),
        }
    }

    /// Removes the token stored for `host`. Removing a missing token succeeds.
    pub fn delete(&self, host: &str) -> Result<()> {
        let entry = Entry::new(&self.service, host)?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to delete token for {host}")),
        }
    }
}
