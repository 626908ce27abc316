//! Layered loading of the environment record
//!
//! Sources, lowest precedence first:
//! 1. the profile preset
//! 2. a TOML or JSON file
//! 3. `COFFEESHOP_*` environment variables

use crate::environment::Environment;
use crate::profile::Profile;
use coffeeshop_common::config::ConfigLoader;
use coffeeshop_common::{ConfigurationError, Result};
use figment::{
    providers::{Format, Json, Serialized, Toml},
    Figment,
};
use std::env::VarError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default prefix of every environment variable the loader reads
pub const ENV_PREFIX: &str = "COFFEESHOP_";

/// File looked up in the working directory when no path is given
pub const DEFAULT_FILE_NAME: &str = "environment.toml";

/// Suffix of the variable selecting the profile
pub const PROFILE_VAR: &str = "PROFILE";

/// Suffix of the variable pointing at a configuration file
pub const FILE_VAR: &str = "ENV_FILE";

/// Environment variable suffixes and the record keys they override
pub const ENV_OVERRIDES: [(&str, &str); 6] = [
    ("PRODUCTION", "production"),
    ("API_SERVER_URL", "apiServerUrl"),
    ("AUTH0_URL", "auth0.url"),
    ("AUTH0_AUDIENCE", "auth0.audience"),
    ("AUTH0_CLIENT_ID", "auth0.clientId"),
    ("AUTH0_CALLBACK_URL", "auth0.callbackURL"),
];

/// Builder for loading an [`Environment`]
#[derive(Debug, Clone)]
pub struct EnvironmentLoader {
    profile: Option<Profile>,
    file: Option<PathBuf>,
    env_prefix: String,
    use_env: bool,
}

impl Default for EnvironmentLoader {
    fn default() -> Self {
        Self {
            profile: None,
            file: None,
            env_prefix: ENV_PREFIX.to_string(),
            use_env: true,
        }
    }
}

impl EnvironmentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from this profile's preset instead of `COFFEESHOP_PROFILE`
    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Merge this file; it must exist
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Ignore the process environment entirely
    pub fn skip_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    /// Load and validate. Fails fast on the first unusable record.
    pub fn load(&self) -> Result<Environment> {
        let env = self.load_unvalidated()?;
        env.validate_and_warn()?;
        info!(
            production = env.production(),
            api_server_url = env.api_server_url(),
            "Environment loaded"
        );
        Ok(env)
    }

    /// Load without validating, for callers that report violations themselves
    pub fn load_unvalidated(&self) -> Result<Environment> {
        let profile = self.resolve_profile()?;
        debug!("Loading environment from the {profile} profile");

        let mut figment = Figment::from(Serialized::defaults(Environment::for_profile(profile)));

        if let Some(path) = self.resolve_file()? {
            figment = merge_file(figment, &path)?;
        }

        if self.use_env {
            figment = merge_env(figment, &self.env_prefix)?;
        }

        figment
            .extract()
            .map_err(|e| ConfigurationError::parse(e.to_string()))
    }

    fn resolve_profile(&self) -> Result<Profile> {
        if let Some(profile) = self.profile {
            return Ok(profile);
        }
        if self.use_env {
            if let Some(value) = read_var(&format!("{}{PROFILE_VAR}", self.env_prefix))? {
                return value.parse();
            }
        }
        Ok(Profile::default())
    }

    fn resolve_file(&self) -> Result<Option<PathBuf>> {
        let explicit = match &self.file {
            Some(path) => Some(path.clone()),
            None if self.use_env => {
                read_var(&format!("{}{FILE_VAR}", self.env_prefix))?.map(PathBuf::from)
            }
            None => None,
        };

        match explicit {
            Some(path) if path.exists() => Ok(Some(path)),
            Some(path) => Err(ConfigurationError::FileNotFound { path }),
            None => {
                let fallback = PathBuf::from(DEFAULT_FILE_NAME);
                if fallback.exists() {
                    Ok(Some(fallback))
                } else {
                    debug!("No configuration file found, using profile preset");
                    Ok(None)
                }
            }
        }
    }
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    debug!("Merging configuration file: {}", path.display());

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("toml") => Ok(figment.merge(Toml::file(path))),
        Some("json") => Ok(figment.merge(Json::file(path))),
        _ => Err(ConfigurationError::invalid_value(
            "file",
            path.display().to_string(),
            "expected a .toml or .json file",
        )),
    }
}

fn merge_env(mut figment: Figment, prefix: &str) -> Result<Figment> {
    for (suffix, key) in ENV_OVERRIDES {
        let var = format!("{prefix}{suffix}");
        let Some(value) = read_var(&var)? else {
            continue;
        };

        debug!("Overriding {key} from environment variable {var}");
        figment = if key == "production" {
            figment.merge(Serialized::default(key, parse_bool(&var, &value)?))
        } else {
            figment.merge(Serialized::default(key, value))
        };
    }
    Ok(figment)
}

fn read_var(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigurationError::invalid_value(
            name,
            raw.to_string_lossy(),
            "value is not valid unicode",
        )),
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigurationError::invalid_value(
            name,
            value,
            "expected true/false, 1/0 or yes/no",
        )),
    }
}

impl ConfigLoader<Environment> for Environment {
    fn load(path: Option<PathBuf>) -> Result<Environment> {
        let loader = match path {
            Some(p) => EnvironmentLoader::new().file(p),
            None => EnvironmentLoader::new(),
        };
        loader.load()
    }

    fn load_from_file(path: &Path) -> Result<Environment> {
        EnvironmentLoader::new().file(path).load()
    }

    fn apply_env_overrides(config: &mut Environment, prefix: &str) -> Result<()> {
        let figment = merge_env(Figment::from(Serialized::defaults(config.clone())), prefix)?;

        *config = figment
            .extract()
            .map_err(|e| ConfigurationError::parse(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::Builder;

    const TEST_PREFIX: &str = "COFFEESHOP_LOADER_TEST_";

    fn write_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn clear_test_vars() {
        for (suffix, _) in ENV_OVERRIDES {
            std::env::remove_var(format!("{TEST_PREFIX}{suffix}"));
        }
        std::env::remove_var(format!("{TEST_PREFIX}{PROFILE_VAR}"));
        std::env::remove_var(format!("{TEST_PREFIX}{FILE_VAR}"));
    }

    #[test]
    fn test_parse_bool_spellings() {
        assert!(parse_bool("X", "TRUE").unwrap());
        assert!(parse_bool("X", " yes ").unwrap());
        assert!(!parse_bool("X", "0").unwrap());
        let err = parse_bool("X", "maybe").unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidValue { ref key, .. } if key == "X"));
    }

    #[test]
    #[serial]
    fn test_preset_only() {
        let env = EnvironmentLoader::new()
            .profile(Profile::Development)
            .skip_env()
            .load()
            .unwrap();
        assert_eq!(env, Environment::for_profile(Profile::Development));
    }

    #[test]
    fn test_toml_file_overrides_preset() {
        let file = write_file(
            ".toml",
            r#"
apiServerUrl = "https://api.coffee.example.com"

[auth0]
clientId = "prodclient42"
"#,
        );

        let env = EnvironmentLoader::new()
            .profile(Profile::Development)
            .file(file.path())
            .skip_env()
            .load()
            .unwrap();

        assert_eq!(env.api_server_url(), "https://api.coffee.example.com");
        assert_eq!(env.auth0().client_id(), "prodclient42");
        assert_eq!(env.auth0().audience(), "coffee-shop");
        assert!(!env.production());
    }

    #[test]
    fn test_json_file_in_client_shape() {
        let file = write_file(
            ".json",
            r#"{
  "production": true,
  "apiServerUrl": "https://api.coffee.example.com",
  "auth0": {
    "url": "coffee.eu",
    "audience": "coffee-shop",
    "clientId": "prodclient42",
    "callbackURL": "https://coffee.example.com"
  }
}"#,
        );

        let env = EnvironmentLoader::new()
            .profile(Profile::Production)
            .file(file.path())
            .skip_env()
            .load()
            .unwrap();

        assert!(env.production());
        assert_eq!(env.auth0().url(), "coffee.eu");
        assert_eq!(env.auth0().callback_url(), "https://coffee.example.com");
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = EnvironmentLoader::new()
            .file("/nonexistent/coffeeshop/environment.toml")
            .skip_env()
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::FileNotFound { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_file(".yaml", "production: true\n");
        let err = EnvironmentLoader::new()
            .file(file.path())
            .skip_env()
            .load_unvalidated()
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidValue { ref key, .. } if key == "file"));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let file = write_file(".toml", "production = \"definitely\"\n");
        let err = EnvironmentLoader::new()
            .file(file.path())
            .skip_env()
            .load_unvalidated()
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::ParseError { .. }));
    }

    #[test]
    #[serial]
    fn test_production_preset_fails_fast() {
        let err = EnvironmentLoader::new()
            .profile(Profile::Production)
            .skip_env()
            .load()
            .unwrap_err();
        assert_eq!(err.violations().len(), 5);

        let env = EnvironmentLoader::new()
            .profile(Profile::Production)
            .skip_env()
            .load_unvalidated()
            .unwrap();
        assert!(env.production());
    }

    #[test]
    #[serial]
    fn test_working_directory_fallback() {
        clear_test_vars();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_FILE_NAME),
            "apiServerUrl = \"https://fallback.example.com\"\n",
        )
        .unwrap();
        let explicit = write_file(".toml", "apiServerUrl = \"https://explicit.example.com\"\n");
        let from_env = write_file(".toml", "apiServerUrl = \"https://from-env-file.example.com\"\n");

        let original_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        let picked_up = EnvironmentLoader::new()
            .profile(Profile::Development)
            .skip_env()
            .load_unvalidated();
        let explicit_wins = EnvironmentLoader::new()
            .profile(Profile::Development)
            .file(explicit.path())
            .skip_env()
            .load_unvalidated();
        std::env::set_var(format!("{TEST_PREFIX}{FILE_VAR}"), from_env.path());
        let env_file_wins = EnvironmentLoader::new()
            .env_prefix(TEST_PREFIX)
            .profile(Profile::Development)
            .load_unvalidated();

        clear_test_vars();
        std::env::set_current_dir(original_dir).unwrap();

        assert_eq!(picked_up.unwrap().api_server_url(), "https://fallback.example.com");
        assert_eq!(
            explicit_wins.unwrap().api_server_url(),
            "https://explicit.example.com"
        );
        assert_eq!(
            env_file_wins.unwrap().api_server_url(),
            "https://from-env-file.example.com"
        );
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_test_vars();
        let file = write_file(".toml", "apiServerUrl = \"https://from-file.example.com\"\n");
        std::env::set_var(
            format!("{TEST_PREFIX}API_SERVER_URL"),
            "https://from-env.example.com",
        );
        std::env::set_var(format!("{TEST_PREFIX}AUTH0_CLIENT_ID"), "envclient");
        std::env::set_var(format!("{TEST_PREFIX}PRODUCTION"), "true");

        let env = EnvironmentLoader::new()
            .env_prefix(TEST_PREFIX)
            .profile(Profile::Development)
            .file(file.path())
            .load_unvalidated()
            .unwrap();
        clear_test_vars();

        assert_eq!(env.api_server_url(), "https://from-env.example.com");
        assert_eq!(env.auth0().client_id(), "envclient");
        assert!(env.production());
        assert_eq!(env.auth0().url(), "pinal9.us");
    }

    #[test]
    #[serial]
    fn test_profile_and_file_from_env() {
        clear_test_vars();
        let file = write_file(
            ".toml",
            r#"
apiServerUrl = "https://api.coffee.example.com"

[auth0]
url = "coffee.eu"
audience = "coffee-shop"
clientId = "prodclient42"
callbackURL = "https://coffee.example.com"
"#,
        );
        std::env::set_var(format!("{TEST_PREFIX}{PROFILE_VAR}"), "prod");
        std::env::set_var(format!("{TEST_PREFIX}{FILE_VAR}"), file.path());

        let result = EnvironmentLoader::new().env_prefix(TEST_PREFIX).load();
        clear_test_vars();

        let env = result.unwrap();
        assert!(env.production());
        assert_eq!(env.auth0().url(), "coffee.eu");
    }

    #[test]
    #[serial]
    fn test_invalid_production_flag_from_env() {
        clear_test_vars();
        std::env::set_var(format!("{TEST_PREFIX}PRODUCTION"), "sometimes");

        let result = EnvironmentLoader::new()
            .env_prefix(TEST_PREFIX)
            .profile(Profile::Development)
            .load_unvalidated();
        clear_test_vars();

        assert!(matches!(
            result.unwrap_err(),
            ConfigurationError::InvalidValue { ref value, .. } if value == "sometimes"
        ));
    }

    #[test]
    #[serial]
    fn test_apply_env_overrides_on_existing_record() {
        clear_test_vars();
        std::env::set_var(
            format!("{TEST_PREFIX}AUTH0_CALLBACK_URL"),
            "http://localhost:4200",
        );

        let mut env = Environment::for_profile(Profile::Development);
        let result = <Environment as ConfigLoader<Environment>>::apply_env_overrides(
            &mut env,
            TEST_PREFIX,
        );
        clear_test_vars();

        result.unwrap();
        assert_eq!(env.auth0().callback_url(), "http://localhost:4200");
        assert_eq!(env.api_server_url(), "http://127.0.0.1:5000");
    }
}
