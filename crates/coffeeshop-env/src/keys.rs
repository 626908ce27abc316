//! Dotted-key access to the environment record

use crate::environment::Environment;
use coffeeshop_common::{ConfigurationError, Result};
use std::collections::BTreeMap;

/// Canonical keys in declaration order
pub const KEYS: [&str; 6] = [
    "production",
    "apiServerUrl",
    "auth0.url",
    "auth0.audience",
    "auth0.clientId",
    "auth0.callbackURL",
];

/// Map a canonical key or CLI alias to the canonical key
pub fn canonical_key(key: &str) -> Option<&'static str> {
    let canonical = match key {
        "production" => "production",
        "apiServerUrl" | "api-url" => "apiServerUrl",
        "auth0.url" | "auth0-domain" => "auth0.url",
        "auth0.audience" | "auth0-audience" => "auth0.audience",
        "auth0.clientId" | "auth0-client-id" => "auth0.clientId",
        "auth0.callbackURL" | "callback-url" => "auth0.callbackURL",
        _ => return None,
    };
    Some(canonical)
}

/// Readers for each entry of `KEYS`, in the same order
const READERS: [fn(&Environment) -> String; KEYS.len()] = [
    |env| env.production().to_string(),
    |env| env.api_server_url().to_string(),
    |env| env.auth0().url().to_string(),
    |env| env.auth0().audience().to_string(),
    |env| env.auth0().client_id().to_string(),
    |env| env.auth0().callback_url().to_string(),
];

impl Environment {
    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> Result<String> {
        canonical_key(key)
            .and_then(|canonical| KEYS.iter().position(|k| *k == canonical))
            .map(|index| READERS[index](self))
            .ok_or_else(|| ConfigurationError::UnknownKey {
                key: key.to_string(),
            })
    }

    /// All configuration values keyed by canonical key
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    /// Key/value pairs in declaration order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .zip(READERS)
            .map(|(key, read)| (*key, read(self)))
            .collect()
    }
}
