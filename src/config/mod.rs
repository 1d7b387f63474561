pub mod admin_config;
pub mod database_config;
pub mod defaults;
pub mod environment;
pub mod logging_config;
pub mod oauth_config;
pub mod security_config;
pub mod server_config;

use std::env;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

pub use admin_config::AdminConfig;
pub use database_config::{DatabaseConfig, DatabaseKind};
pub use environment::{
    AdminOverrides, CorsOverrides, DatabaseOverrides, Environment, EnvironmentOverrides,
    LoggingOverrides, OAuthOverrides, ProviderOverrides,
};
pub use logging_config::{
    ConsoleHandler, FileHandler, LogHandlers, LogLevel, LoggingConfig, RotationConfig,
};
pub use oauth_config::{OAuthConfig, OAuthProviderConfig};
pub use security_config::CorsConfig;
pub use server_config::ServerConfig;

/// Environment variable naming the profile to resolve at startup.
pub const ENV_VAR: &str = "YPROMPT_ENV";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration field {section}.{field}")]
    MissingField {
        section: &'static str,
        field: &'static str,
    },
    #[error("invalid value '{value}' for {field}")]
    InvalidEnumValue {
        field: &'static str,
        value: String,
    },
    #[error("undefined configuration environment '{0}'")]
    UndefinedEnvironment(String),
    #[error("environment variable overlay rejected: {0}")]
    Overlay(#[from] Box<figment::Error>),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Fully resolved configuration profile. Built once at process start and
/// shared read-only afterwards; worker processes get their own clone.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default = "defaults::default_secret_key")]
    pub secret_key: String,
    #[serde(default)]
    pub oauth: OAuthConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub default_admin: AdminConfig,
    #[serde(default)]
    pub registration_enabled: bool,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default = "defaults::default_redis_url")]
    pub redis_url: String,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            secret_key: defaults::default_secret_key(),
            oauth: OAuthConfig::default(),
            database: DatabaseConfig::default(),
            default_admin: AdminConfig::default(),
            registration_enabled: false,
            cors: CorsConfig::default(),
            redis_url: defaults::default_redis_url(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Resolve the profile for a named environment: base defaults, then the
    /// environment's override record, then normalization and validation.
    pub fn resolve(environment: Environment) -> ConfigResult<Self> {
        debug!(environment = %environment, "resolving configuration profile");
        Self::resolve_with(&environment.overrides())
    }

    /// Same as [`resolve`](Self::resolve) but with an explicit override
    /// record instead of one of the registered environments.
    pub fn resolve_with(overrides: &EnvironmentOverrides) -> ConfigResult<Self> {
        let mut config = Self::default();
        overrides.apply(&mut config);
        config.finalize()?;
        Ok(config)
    }

    /// Startup entry point: pick the environment from `YPROMPT_ENV`, layer
    /// its overrides, then let deployment environment variables win over
    /// both. `YPROMPT_*` names address profile paths with `__` separators;
    /// the bare legacy names are carried for existing deployments.
    pub fn from_env() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();

        let name = env::var(ENV_VAR).unwrap_or_else(|_| "base".to_string());
        let environment: Environment = name.parse()?;

        let mut layered = Self::default();
        environment.overrides().apply(&mut layered);

        let mut config: Self = Figment::from(Serialized::defaults(layered))
            .merge(
                Env::raw()
                    .only(&[
                        "SECRET_KEY",
                        "SQLITE_DB_PATH",
                        "DB_HOST",
                        "DB_USER",
                        "DB_PASS",
                        "DB_NAME",
                        "DB_PORT",
                        "REDIS_CON",
                        "WORKERS",
                        "ACCESS_LOG",
                        "REGISTRATION_ENABLED",
                        "LOGGING_INFO_FILE",
                        "LOGGING_ERROR_FILE",
                        "LINUX_DO_CLIENT_ID",
                        "LINUX_DO_CLIENT_SECRET",
                        "LINUX_DO_REDIRECT_URI",
                        "FEISHU_APP_ID",
                        "FEISHU_APP_SECRET",
                        "FEISHU_REDIRECT_URI",
                        "DEFAULT_ADMIN_USERNAME",
                        "DEFAULT_ADMIN_PASSWORD",
                        "DEFAULT_ADMIN_NAME",
                    ])
                    .map(|key| match key.as_str() {
                        "SECRET_KEY" => "secret_key".into(),
                        "SQLITE_DB_PATH" => "database.sqlite_path".into(),
                        "DB_HOST" => "database.host".into(),
                        "DB_USER" => "database.user".into(),
                        "DB_PASS" => "database.password".into(),
                        "DB_NAME" => "database.name".into(),
                        "DB_PORT" => "database.port".into(),
                        "REDIS_CON" => "redis_url".into(),
                        "WORKERS" => "server.workers".into(),
                        "ACCESS_LOG" => "server.access_log".into(),
                        "REGISTRATION_ENABLED" => "registration_enabled".into(),
                        "LOGGING_INFO_FILE" => "logging.info_file".into(),
                        "LOGGING_ERROR_FILE" => "logging.error_file".into(),
                        "LINUX_DO_CLIENT_ID" => "oauth.linux_do.client_id".into(),
                        "LINUX_DO_CLIENT_SECRET" => "oauth.linux_do.client_secret".into(),
                        "LINUX_DO_REDIRECT_URI" => "oauth.linux_do.redirect_uri".into(),
                        "FEISHU_APP_ID" => "oauth.feishu.client_id".into(),
                        "FEISHU_APP_SECRET" => "oauth.feishu.client_secret".into(),
                        "FEISHU_REDIRECT_URI" => "oauth.feishu.redirect_uri".into(),
                        "DEFAULT_ADMIN_USERNAME" => "default_admin.username".into(),
                        "DEFAULT_ADMIN_PASSWORD" => "default_admin.password".into(),
                        "DEFAULT_ADMIN_NAME" => "default_admin.display_name".into(),
                        _ => key.into(),
                    }),
            )
            .merge(Env::prefixed("YPROMPT_").split("__"))
            .extract()
            .map_err(Box::new)?;

        // DB_TYPE goes through the typed parser so a bad kind is reported as
        // a configuration error rather than a deserializer message.
        if let Ok(kind) = env::var("DB_TYPE") {
            config.database.kind = kind.parse()?;
        }

        config.finalize()?;
        info!(environment = %environment, "configuration loaded");
        Ok(config)
    }

    fn finalize(&mut self) -> ConfigResult<()> {
        self.logging.finalize();
        self.validate()
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.workers == 0 {
            return Err(ConfigError::MissingField {
                section: "server",
                field: "workers",
            });
        }
        self.database.validate()?;

        if !self.server.debug && self.secret_key.trim() == defaults::default_secret_key() {
            warn!("secret_key is still the shipped placeholder; set SECRET_KEY before serving traffic");
        }
        Ok(())
    }

    /// Redacted one-screen overview for startup logs.
    pub fn summary(&self) -> String {
        format!(
            "yprompt backend configuration:\n\
             - Debug: {}\n\
             - Workers: {}\n\
             - Access log: {}\n\
             - Database: {}\n\
             - Registration: {}\n\
             - Linux.do OAuth: {}\n\
             - Feishu OAuth: {}\n\
             - CORS: {}\n\
             - Cache backend: {}\n\
             - Log files: {} / {}",
            self.server.debug,
            self.server.workers,
            if self.server.access_log {
                "enabled"
            } else {
                "disabled"
            },
            self.database.kind,
            if self.registration_enabled {
                "enabled"
            } else {
                "disabled"
            },
            if self.oauth.linux_do.is_configured() {
                "configured"
            } else {
                "not configured"
            },
            if self.oauth.feishu.is_configured() {
                "configured"
            } else {
                "not configured"
            },
            if self.cors.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.redis_url,
            self.logging.handlers.info_file.filename,
            self.logging.handlers.error_file.filename,
        )
    }
}
