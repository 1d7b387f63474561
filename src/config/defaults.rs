pub fn default_debug() -> bool {
    true
}

pub fn default_secret_key() -> String {
    "yprompt-secret-key-change-in-production".to_string()
}

pub fn default_sqlite_path() -> String {
    "../data/yprompt.db".to_string()
}

pub fn default_db_host() -> String {
    "localhost".to_string()
}

pub fn default_db_user() -> String {
    "root".to_string()
}

pub fn default_db_name() -> String {
    "yprompt".to_string()
}

pub fn default_db_port() -> u16 {
    3306
}

pub fn default_admin_username() -> String {
    "admin".to_string()
}

pub fn default_admin_password() -> String {
    "admin123".to_string()
}

pub fn default_admin_display_name() -> String {
    "管理员".to_string()
}

pub fn default_workers() -> u32 {
    1
}

pub fn default_cors_enabled() -> bool {
    true
}

pub fn default_cors_supports_credentials() -> bool {
    true
}

pub fn default_redis_url() -> String {
    "redis://127.0.0.1:6379/2".to_string()
}

pub fn default_info_log_file() -> String {
    "../data/logs/backend/info.log".to_string()
}

pub fn default_error_log_file() -> String {
    "../data/logs/backend/error.log".to_string()
}

pub fn default_log_max_bytes() -> u64 {
    1024 * 1024
}

pub fn default_log_backup_count() -> u32 {
    10
}
