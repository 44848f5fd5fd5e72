//! Tests for configuration system

use diabetcare::config::Config;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.community.seed_demo_posts);
}

#[test]
fn test_config_defaults_without_file() {
    let config =
        Config::load(Some("does/not/exist.toml".to_string())).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert!(config.validate().is_ok());
}
