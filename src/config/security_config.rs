use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct CorsConfig {
    #[serde(default = "crate::config::defaults::default_cors_enabled")]
    pub enabled: bool,
    #[serde(default = "crate::config::defaults::default_cors_supports_credentials")]
    pub supports_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: crate::config::defaults::default_cors_enabled(),
            supports_credentials: crate::config::defaults::default_cors_supports_credentials(),
        }
    }
}
