use email_address::EmailAddress;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Relay configuration loaded from multiple sources.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. config.yaml file (if exists)
/// 3. Environment variables with `CONTACT_FORM_` prefix (always wins)
///
/// The defaults are the production addresses, so a function deployed with no
/// configuration at all relays to the same inbox from the same sender.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Verified SES identity used as the `Source` address.
    #[serde(default = "default_sender")]
    pub sender: String,

    /// The single inbox every submission is delivered to.
    #[serde(default = "default_recipient")]
    pub recipient: String,

    /// Charset declared on both subject and body.
    #[serde(default = "default_charset")]
    pub charset: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level filter (debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_sender() -> String {
    "contact-form@cassidynelemans.com".to_string()
}

fn default_recipient() -> String {
    "nelemansc@gmail.com".to_string()
}

fn default_charset() -> String {
    "UTF-8".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            sender: default_sender(),
            recipient: default_recipient(),
            charset: default_charset(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl Config {
    /// Load configuration from defaults, `config.yaml` and `CONTACT_FORM_*` variables.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config.yaml")
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed("CONTACT_FORM_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !EmailAddress::is_valid(&self.email.sender) {
            return Err(ConfigError::Validation(format!(
                "email.sender must be a valid address, got: '{}'",
                self.email.sender
            )));
        }

        if !EmailAddress::is_valid(&self.email.recipient) {
            return Err(ConfigError::Validation(format!(
                "email.recipient must be a valid address, got: '{}'",
                self.email.recipient
            )));
        }

        if self.email.charset.trim().is_empty() {
            return Err(ConfigError::Validation(
                "email.charset cannot be empty".into(),
            ));
        }

        Ok(())
    }
}
