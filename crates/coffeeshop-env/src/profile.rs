//! Named presets of the environment record

use coffeeshop_common::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend API address of a locally running server
pub const DEVELOPMENT_API_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Auth0 domain prefix of the development tenant
pub const DEVELOPMENT_AUTH0_URL: &str = "pinal9.us";

/// Audience registered for the coffee shop API
pub const DEVELOPMENT_AUTH0_AUDIENCE: &str = "coffee-shop";

/// Client ID issued to the development client application
pub const DEVELOPMENT_AUTH0_CLIENT_ID: &str = "eO0X0zLsWmED9XS1T6DK8rlXmZx4Wlzo";

/// Base URL of the locally served client application
pub const DEVELOPMENT_AUTH0_CALLBACK_URL: &str = "http://localhost:8100";

/// Deployment profile selecting which preset the loader starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Development,
    Production,
}

impl Profile {
    pub const ALL: [Profile; 2] = [Profile::Development, Profile::Production];

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Development => "development",
            Profile::Production => "production",
        }
    }

    /// Value of the `production` flag in this profile's preset
    pub fn is_production(&self) -> bool {
        matches!(self, Profile::Production)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            _ => Err(ConfigurationError::invalid_value(
                "profile",
                s,
                "expected 'development' or 'production'",
            )),
        }
    }
}
