use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::database_config::DatabaseKind;
use super::{AppConfig, ConfigError};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Base,
    Production,
}

impl Environment {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Production => "production",
        }
    }

    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// The override record layered on top of the base defaults for this tag.
    pub fn overrides(self) -> EnvironmentOverrides {
        match self {
            Self::Base => EnvironmentOverrides::default(),
            Self::Production => production_overrides(),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(Self::Base),
            "production" | "prd" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::UndefinedEnvironment(other.to_string())),
        }
    }
}

/// Per-environment override layer. A populated field replaces the base value
/// wholesale; an absent field inherits it. There is no deep merging below the
/// field level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvironmentOverrides {
    pub debug: Option<bool>,
    pub workers: Option<u32>,
    pub access_log: Option<bool>,
    pub secret_key: Option<String>,
    pub registration_enabled: Option<bool>,
    pub redis_url: Option<String>,
    pub database: DatabaseOverrides,
    pub oauth: OAuthOverrides,
    pub default_admin: AdminOverrides,
    pub cors: CorsOverrides,
    pub logging: LoggingOverrides,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseOverrides {
    pub kind: Option<DatabaseKind>,
    pub sqlite_path: Option<String>,
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OAuthOverrides {
    pub linux_do: ProviderOverrides,
    pub feishu: ProviderOverrides,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderOverrides {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminOverrides {
    pub username: Option<String>,
    pub password: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CorsOverrides {
    pub enabled: Option<bool>,
    pub supports_credentials: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoggingOverrides {
    pub info_file: Option<String>,
    pub error_file: Option<String>,
    pub max_bytes: Option<u64>,
    pub backup_count: Option<u32>,
}

impl EnvironmentOverrides {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(debug) = self.debug {
            config.server.debug = debug;
        }
        if let Some(workers) = self.workers {
            config.server.workers = workers;
        }
        if let Some(access_log) = self.access_log {
            config.server.access_log = access_log;
        }
        if let Some(secret_key) = &self.secret_key {
            config.secret_key = secret_key.clone();
        }
        if let Some(registration_enabled) = self.registration_enabled {
            config.registration_enabled = registration_enabled;
        }
        if let Some(redis_url) = &self.redis_url {
            config.redis_url = redis_url.clone();
        }
        self.database.apply(&mut config.database);
        self.oauth.linux_do.apply(&mut config.oauth.linux_do);
        self.oauth.feishu.apply(&mut config.oauth.feishu);
        self.default_admin.apply(&mut config.default_admin);
        self.cors.apply(&mut config.cors);
        self.logging.apply(&mut config.logging);
    }
}

impl DatabaseOverrides {
    fn apply(&self, config: &mut super::DatabaseConfig) {
        if let Some(kind) = self.kind {
            config.kind = kind;
        }
        if let Some(sqlite_path) = &self.sqlite_path {
            config.sqlite_path = sqlite_path.clone();
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(user) = &self.user {
            config.user = user.clone();
        }
        if let Some(password) = &self.password {
            config.password = password.clone();
        }
        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
    }
}

impl ProviderOverrides {
    fn apply(&self, config: &mut super::OAuthProviderConfig) {
        if let Some(client_id) = &self.client_id {
            config.client_id = client_id.clone();
        }
        if let Some(client_secret) = &self.client_secret {
            config.client_secret = client_secret.clone();
        }
        if let Some(redirect_uri) = &self.redirect_uri {
            config.redirect_uri = redirect_uri.clone();
        }
    }
}

impl AdminOverrides {
    fn apply(&self, config: &mut super::AdminConfig) {
        if let Some(username) = &self.username {
            config.username = username.clone();
        }
        if let Some(password) = &self.password {
            config.password = password.clone();
        }
        if let Some(display_name) = &self.display_name {
            config.display_name = display_name.clone();
        }
    }
}

impl CorsOverrides {
    fn apply(&self, config: &mut super::CorsConfig) {
        if let Some(enabled) = self.enabled {
            config.enabled = enabled;
        }
        if let Some(supports_credentials) = self.supports_credentials {
            config.supports_credentials = supports_credentials;
        }
    }
}

impl LoggingOverrides {
    fn apply(&self, config: &mut super::LoggingConfig) {
        if let Some(info_file) = &self.info_file {
            config.info_file = info_file.clone();
        }
        if let Some(error_file) = &self.error_file {
            config.error_file = error_file.clone();
        }
        if let Some(max_bytes) = self.max_bytes {
            config.rotation.max_bytes = max_bytes;
        }
        if let Some(backup_count) = self.backup_count {
            config.rotation.backup_count = backup_count;
        }
    }
}

/// The production layer pins every value its deployment file assigns, even
/// where the assignment matches the base default; the remaining fields (CORS,
/// cache backend, logging) flow through from base untouched.
fn production_overrides() -> EnvironmentOverrides {
    let callback = "http://localhost:5173/auth/callback".to_string();
    EnvironmentOverrides {
        debug: Some(true),
        workers: Some(1),
        access_log: Some(true),
        secret_key: Some(super::defaults::default_secret_key()),
        registration_enabled: Some(false),
        database: DatabaseOverrides {
            kind: Some(DatabaseKind::Sqlite),
            sqlite_path: Some(super::defaults::default_sqlite_path()),
            host: Some(String::new()),
            user: Some(String::new()),
            password: Some(String::new()),
            name: Some(super::defaults::default_db_name()),
            port: Some(super::defaults::default_db_port()),
        },
        oauth: OAuthOverrides {
            linux_do: ProviderOverrides {
                client_id: Some(String::new()),
                client_secret: Some(String::new()),
                redirect_uri: Some(callback.clone()),
            },
            feishu: ProviderOverrides {
                client_id: Some(String::new()),
                client_secret: Some(String::new()),
                redirect_uri: Some(callback),
            },
        },
        default_admin: AdminOverrides {
            username: Some(super::defaults::default_admin_username()),
            password: Some(super::defaults::default_admin_password()),
            display_name: Some(super::defaults::default_admin_display_name()),
        },
        ..Default::default()
    }
}
