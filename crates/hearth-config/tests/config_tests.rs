use hearth_config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert!(!cfg.locale.is_empty());
    assert!(cfg.default_tax_rate > 0.0 && cfg.default_tax_rate < 1.0);
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"), dir.path().join("backups"));

    let mut cfg = Config::default();
    cfg.currency = "EUR".to_string();
    cfg.default_tax_rate = 0.33;
    cfg.last_opened_household = Some("alpha_family".into());

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.currency, "EUR");
    assert_eq!(loaded.default_tax_rate, 0.33);
    assert_eq!(loaded.last_opened_household.as_deref(), Some("alpha_family"));
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"), dir.path().join("backups"));
    let loaded = manager.load().expect("load default");
    assert_eq!(loaded.currency, Config::default().currency);
}

#[test]
fn backups_round_trip_and_list_newest_first() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"), dir.path().join("backups"));

    let mut cfg = Config::default();
    cfg.currency = "CAD".to_string();
    let name = manager.backup(&cfg, Some("before reset")).expect("backup");
    assert!(name.contains("before-reset"));

    let listed = manager.list_backups().expect("list backups");
    assert!(listed.contains(&name));

    let restored = manager.restore(&name).expect("restore");
    assert_eq!(restored.currency, "CAD");

    assert!(manager.restore("config_19990101_0000.json").is_err());
}

#[test]
fn with_base_dir_creates_the_layout() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("hearth")).expect("base dir");
    assert!(manager.config_path().ends_with("config/config.json"));
    assert!(manager.backups_dir().is_dir());
}
