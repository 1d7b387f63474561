use serde::{Deserialize, Serialize};

/// Seed account created on first database initialization only.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    #[serde(default = "crate::config::defaults::default_admin_username")]
    pub username: String,
    #[serde(default = "crate::config::defaults::default_admin_password")]
    pub password: String,
    #[serde(default = "crate::config::defaults::default_admin_display_name")]
    pub display_name: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: crate::config::defaults::default_admin_username(),
            password: crate::config::defaults::default_admin_password(),
            display_name: crate::config::defaults::default_admin_display_name(),
        }
    }
}
