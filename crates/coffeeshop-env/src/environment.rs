//! The environment record consumed by the client application

use crate::profile::{
    Profile, DEVELOPMENT_API_SERVER_URL, DEVELOPMENT_AUTH0_AUDIENCE,
    DEVELOPMENT_AUTH0_CALLBACK_URL, DEVELOPMENT_AUTH0_CLIENT_ID, DEVELOPMENT_AUTH0_URL,
};
use coffeeshop_common::{ConfigurationError, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Runtime environment of the client application.
///
/// Field names and nesting serialise exactly as the client expects them:
/// `production`, `apiServerUrl` and a nested `auth0` record. Fields are only
/// readable; a loaded record never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Environment {
    production: bool,

    #[serde(rename = "apiServerUrl")]
    api_server_url: String,

    auth0: Auth0Config,
}

/// Auth0 settings used to build the login redirect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Auth0Config {
    /// Auth0 domain prefix
    url: String,

    /// Audience set for the Auth0 API
    audience: String,

    /// Client ID generated for the Auth0 application
    #[serde(rename = "clientId")]
    client_id: String,

    /// Base URL of the running client application
    #[serde(rename = "callbackURL")]
    callback_url: String,
}

impl Auth0Config {
    pub fn new(
        url: impl Into<String>,
        audience: impl Into<String>,
        client_id: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            audience: audience.into(),
            client_id: client_id.into(),
            callback_url: callback_url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    /// Parsed view of `callbackURL`
    pub fn callback(&self) -> Result<Url> {
        parse_url("auth0.callbackURL", &self.callback_url)
    }
}

impl Environment {
    pub fn new(production: bool, api_server_url: impl Into<String>, auth0: Auth0Config) -> Self {
        Self {
            production,
            api_server_url: api_server_url.into(),
            auth0,
        }
    }

    /// Preset record for a profile.
    ///
    /// The production preset carries no literals: every string is empty and
    /// must be supplied by a file or the environment before it validates.
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Development => Self::new(
                false,
                DEVELOPMENT_API_SERVER_URL,
                Auth0Config::new(
                    DEVELOPMENT_AUTH0_URL,
                    DEVELOPMENT_AUTH0_AUDIENCE,
                    DEVELOPMENT_AUTH0_CLIENT_ID,
                    DEVELOPMENT_AUTH0_CALLBACK_URL,
                ),
            ),
            Profile::Production => {
                Self::new(true, String::new(), Auth0Config::new("", "", "", ""))
            }
        }
    }

    pub fn production(&self) -> bool {
        self.production
    }

    pub fn api_server_url(&self) -> &str {
        &self.api_server_url
    }

    pub fn auth0(&self) -> &Auth0Config {
        &self.auth0
    }

    /// Parsed view of `apiServerUrl`
    pub fn api_base(&self) -> Result<Url> {
        parse_url("apiServerUrl", &self.api_server_url)
    }

    /// Serialize in the client's JSON shape
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConfigurationError::parse(format!("Failed to serialize environment: {e}")))
    }

    /// Serialize as a TOML document accepted by the loader
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigurationError::parse(format!("Failed to serialize environment: {e}")))
    }

    /// Generate an example configuration file for a profile
    pub fn generate_example(profile: Profile) -> Result<String> {
        let body = Self::for_profile(profile).to_toml()?;
        Ok(format!(
            "# Coffee shop client environment ({profile} profile)\n\
             # Every value may be overridden with COFFEESHOP_* environment variables.\n\n{body}"
        ))
    }
}

pub(crate) fn parse_url(key: &str, value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| ConfigurationError::invalid_value(key, value, e.to_string()))
}
