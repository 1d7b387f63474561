use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "crate::config::defaults::default_debug")]
    pub debug: bool,
    #[serde(default = "crate::config::defaults::default_workers")]
    pub workers: u32,
    #[serde(default)]
    pub access_log: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            debug: crate::config::defaults::default_debug(),
            workers: crate::config::defaults::default_workers(),
            access_log: false,
        }
    }
}
