//! Tests for profile resolution: layering, per-field override precedence,
//! handler normalization and the startup validation gate

use yprompt_config::config::{
    AppConfig, ConfigError, DatabaseKind, DatabaseOverrides, Environment, EnvironmentOverrides,
    LoggingOverrides,
};

#[test]
fn resolve_is_deterministic() {
    for environment in [Environment::Base, Environment::Production] {
        let first = AppConfig::resolve(environment).expect("failed to resolve profile");
        let second = AppConfig::resolve(environment).expect("failed to resolve profile");

        assert_eq!(first, second);
    }
}

#[test]
fn base_profile_carries_the_shipped_defaults() {
    let config = AppConfig::resolve(Environment::Base).unwrap();

    assert!(config.server.debug);
    assert_eq!(config.server.workers, 1);
    assert!(!config.server.access_log);
    assert!(!config.registration_enabled);
    assert_eq!(config.secret_key, "yprompt-secret-key-change-in-production");
    assert_eq!(config.database.kind, DatabaseKind::Sqlite);
    assert_eq!(config.database.sqlite_path, "../data/yprompt.db");
    assert_eq!(config.default_admin.username, "admin");
    assert_eq!(config.default_admin.display_name, "管理员");
    assert!(config.cors.enabled);
    assert!(config.cors.supports_credentials);
    assert_eq!(config.redis_url, "redis://127.0.0.1:6379/2");
    assert_eq!(config.logging.rotation.max_bytes, 1024 * 1024);
    assert_eq!(config.logging.rotation.backup_count, 10);
}

#[test]
fn production_overrides_win_over_base_values() {
    let base = AppConfig::resolve(Environment::Base).unwrap();
    let production = AppConfig::resolve(Environment::Production).unwrap();

    assert!(!base.server.access_log);
    assert!(production.server.access_log);

    assert_eq!(base.database.host, "localhost");
    assert_eq!(production.database.host, "");

    assert_eq!(base.oauth.linux_do.redirect_uri, "");
    assert_eq!(
        production.oauth.linux_do.redirect_uri,
        "http://localhost:5173/auth/callback"
    );
}

#[test]
fn production_inherits_fields_its_layer_does_not_set() {
    let production = AppConfig::resolve(Environment::Production).unwrap();

    assert_eq!(production.server.workers, 1);
    assert!(production.cors.enabled);
    assert!(production.cors.supports_credentials);
    assert_eq!(production.redis_url, "redis://127.0.0.1:6379/2");
    assert_eq!(
        production.logging.handlers.info_file.filename,
        "../data/logs/backend/info.log"
    );
}

#[test]
fn override_replaces_registration_flag() {
    let overrides = EnvironmentOverrides {
        registration_enabled: Some(true),
        ..Default::default()
    };

    let config = AppConfig::resolve_with(&overrides).unwrap();

    assert!(config.registration_enabled);
}

#[test]
fn workers_inherit_base_when_not_overridden() {
    let config = AppConfig::resolve_with(&EnvironmentOverrides::default()).unwrap();

    assert_eq!(config.server.workers, 1);
}

#[test]
fn logging_paths_are_injected_into_handler_descriptors() {
    let overrides = EnvironmentOverrides {
        logging: LoggingOverrides {
            info_file: Some("a.log".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    let config = AppConfig::resolve_with(&overrides).unwrap();

    assert_eq!(config.logging.handlers.info_file.filename, "a.log");
    assert_eq!(
        config.logging.handlers.error_file.filename,
        "../data/logs/backend/error.log"
    );
}

#[test]
fn empty_logging_path_keeps_the_default_handler_filename() {
    let overrides = EnvironmentOverrides {
        logging: LoggingOverrides {
            info_file: Some(String::new()),
            ..Default::default()
        },
        ..Default::default()
    };

    let config = AppConfig::resolve_with(&overrides).unwrap();

    assert_eq!(
        config.logging.handlers.info_file.filename,
        "../data/logs/backend/info.log"
    );
}

#[test]
fn rotation_overrides_flow_into_descriptors() {
    let overrides = EnvironmentOverrides {
        logging: LoggingOverrides {
            max_bytes: Some(8 * 1024 * 1024),
            backup_count: Some(2),
            ..Default::default()
        },
        ..Default::default()
    };

    let config = AppConfig::resolve_with(&overrides).unwrap();

    assert_eq!(config.logging.handlers.info_file.max_bytes, 8 * 1024 * 1024);
    assert_eq!(config.logging.handlers.error_file.backup_count, 2);
}

#[test]
fn mysql_without_host_fails_the_startup_gate() {
    let overrides = EnvironmentOverrides {
        database: DatabaseOverrides {
            kind: Some(DatabaseKind::Mysql),
            host: Some(String::new()),
            ..Default::default()
        },
        ..Default::default()
    };

    let result = AppConfig::resolve_with(&overrides);

    assert!(matches!(
        result,
        Err(ConfigError::MissingField {
            section: "database",
            field: "host"
        })
    ));
}

#[test]
fn sqlite_without_path_fails_the_startup_gate() {
    let overrides = EnvironmentOverrides {
        database: DatabaseOverrides {
            sqlite_path: Some(String::new()),
            ..Default::default()
        },
        ..Default::default()
    };

    let result = AppConfig::resolve_with(&overrides);

    assert!(matches!(
        result,
        Err(ConfigError::MissingField {
            section: "database",
            field: "sqlite_path"
        })
    ));
}

#[test]
fn zero_workers_fail_the_startup_gate() {
    let overrides = EnvironmentOverrides {
        workers: Some(0),
        ..Default::default()
    };

    let result = AppConfig::resolve_with(&overrides);

    assert!(matches!(
        result,
        Err(ConfigError::MissingField {
            section: "server",
            field: "workers"
        })
    ));
}

#[test]
fn resolved_profile_round_trips_through_serde() {
    let config = AppConfig::resolve(Environment::Production).unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let restored: AppConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, config);
}

#[test]
fn summary_redacts_secrets() {
    let config = AppConfig::resolve(Environment::Base).unwrap();

    let summary = config.summary();

    assert!(summary.contains("Database: sqlite"));
    assert!(summary.contains("Workers: 1"));
    assert!(!summary.contains(&config.secret_key));
    assert!(!summary.contains(&config.default_admin.password));
}
