use crate::api_client::{ApiClient, ApiClientError};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use std::path::Path;

/// Overrides `api.base_url` after every other configuration source.
pub const BASE_URL_VARIABLE: &str = "BASE_URL";

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub api: ApiSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApiSettings {
    pub base_url: String,
    /// Absent means the transport default applies.
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub timeout_milliseconds: Option<u64>,
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_milliseconds
            .map(std::time::Duration::from_millis)
    }

    pub fn client(&self) -> Result<ApiClient, ApiClientError> {
        ApiClient::new(self.base_url.clone(), self.timeout())
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    get_configuration_with(
        &base_path.join("configuration"),
        environment,
        None,
        std::env::var(BASE_URL_VARIABLE).ok(),
    )
}

/// Layers the configuration files, the `APP_*` variables and `base_url`.
///
/// `variables` replaces the process environment when given.
pub fn get_configuration_with(
    configuration_directory: &Path,
    environment: Environment,
    variables: Option<config::Map<String, String>>,
    base_url: Option<String>,
) -> Result<Settings, config::ConfigError> {
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename))
                .required(false),
        )
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_API__TIMEOUT_MILLISECONDS=5000` would set `Settings.api.timeout_milliseconds`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .source(variables),
        )
        .set_override_option("api.base_url", base_url)?
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environment for the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Ci,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Ci => "ci",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "ci" => Ok(Self::Ci),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `ci`.",
                other
            )),
        }
    }
}
