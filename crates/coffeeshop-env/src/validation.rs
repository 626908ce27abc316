//! Structural validation of the environment record

use crate::environment::{Auth0Config, Environment};
use coffeeshop_common::{ConfigurationError, Result};
use std::net::IpAddr;
use tracing::{debug, warn};
use url::{Host, Url};

impl Environment {
    /// Check every field and report all violations at once.
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();

        check_http_url("apiServerUrl", self.api_server_url(), &mut violations);
        check_auth0(self.auth0(), &mut violations);

        if violations.is_empty() {
            debug!("Environment record passed validation");
            Ok(())
        } else {
            Err(ConfigurationError::ValidationFailed {
                details: violations,
            })
        }
    }

    /// Non-fatal observations about a record that already validates.
    ///
    /// A production record pointing at plain HTTP or a loopback host is
    /// almost always a development value that leaked into a deployment.
    pub fn warnings(&self) -> Vec<String> {
        if !self.production() {
            return Vec::new();
        }

        let mut warnings = Vec::new();
        for (key, value) in [
            ("apiServerUrl", self.api_server_url()),
            ("auth0.callbackURL", self.auth0().callback_url()),
        ] {
            let Ok(url) = Url::parse(value) else {
                continue;
            };
            if url.scheme() == "http" {
                warnings.push(format!("{key} uses plain http in production: {value}"));
            }
            if is_loopback(&url) {
                warnings.push(format!("{key} points at a loopback host in production: {value}"));
            }
        }
        warnings
    }

    /// Validate and log any warnings, the way the loader does before handing out a record.
    pub fn validate_and_warn(&self) -> Result<()> {
        self.validate()?;
        for warning in self.warnings() {
            warn!("{warning}");
        }
        Ok(())
    }
}

fn check_auth0(auth0: &Auth0Config, violations: &mut Vec<String>) {
    check_domain_prefix("auth0.url", auth0.url(), violations);

    let audience = auth0.audience();
    if audience.is_empty() {
        violations.push("auth0.audience must not be empty".to_string());
    } else if audience.trim() != audience {
        violations.push("auth0.audience must not have surrounding whitespace".to_string());
    }

    let client_id = auth0.client_id();
    if client_id.is_empty() {
        violations.push("auth0.clientId must not be empty".to_string());
    } else if client_id.chars().any(char::is_whitespace) {
        violations.push("auth0.clientId must not contain whitespace".to_string());
    }

    check_http_url("auth0.callbackURL", auth0.callback_url(), violations);
}

fn check_http_url(key: &str, value: &str, violations: &mut Vec<String>) {
    if value.is_empty() {
        violations.push(format!("{key} must not be empty"));
        return;
    }

    match Url::parse(value) {
        Ok(url) => {
            if !matches!(url.scheme(), "http" | "https") {
                violations.push(format!(
                    "{key} must use http or https, got '{}'",
                    url.scheme()
                ));
            }
            if url.host().is_none() {
                violations.push(format!("{key} must include a host: {value}"));
            }
        }
        Err(e) => violations.push(format!("{key} is not a valid URL ({e}): {value}")),
    }
}

/// The Auth0 `url` is a bare domain prefix such as `tenant.us`; the client
/// adds scheme and suffix itself.
fn check_domain_prefix(key: &str, value: &str, violations: &mut Vec<String>) {
    if value.is_empty() {
        violations.push(format!("{key} must not be empty"));
        return;
    }
    if value.contains("://") {
        violations.push(format!("{key} must be a domain prefix without a scheme: {value}"));
        return;
    }
    if value.contains('/') {
        violations.push(format!("{key} must not contain a path: {value}"));
    }
    if value.chars().any(char::is_whitespace) {
        violations.push(format!("{key} must not contain whitespace"));
    }
    if value.starts_with('.') || value.ends_with('.') {
        violations.push(format!("{key} must not start or end with '.': {value}"));
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => IpAddr::V4(ip).is_loopback(),
        Some(Host::Ipv6(ip)) => IpAddr::V6(ip).is_loopback(),
        None => false,
    }
}
