use healthplanner::models::config::{Config, Recipes};
use std::ffi::OsString;
use std::sync::{LazyLock, Mutex};
use tempfile::TempDir;

static CONFIG_ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

struct HomeGuard {
    previous: Option<OsString>,
}

impl HomeGuard {
    fn set(path: &std::path::Path) -> Self {
        let previous = std::env::var_os("HEALTHPLANNER_HOME");
        // SAFETY: tests that touch HEALTHPLANNER_HOME are serialized by CONFIG_ENV_LOCK.
        unsafe { std::env::set_var("HEALTHPLANNER_HOME", path) };
        Self { previous }
    }
}

impl Drop for HomeGuard {
    fn drop(&mut self) {
        match &self.previous {
            Some(value) => {
                // SAFETY: tests that touch HEALTHPLANNER_HOME are serialized by CONFIG_ENV_LOCK.
                unsafe { std::env::set_var("HEALTHPLANNER_HOME", value) };
            }
            None => {
                // SAFETY: tests that touch HEALTHPLANNER_HOME are serialized by CONFIG_ENV_LOCK.
                unsafe { std::env::remove_var("HEALTHPLANNER_HOME") };
            }
        }
    }
}

fn with_temp_home<T>(f: impl FnOnce() -> T) -> T {
    let _lock = CONFIG_ENV_LOCK.lock().unwrap();
    let dir = TempDir::new().unwrap();
    let _home = HomeGuard::set(dir.path());
    f()
}

// ─── Config tests ────────────────────────────────────────────────────────────

#[test]
fn test_config_default() {
    let cfg = Config::default();
    assert_eq!(cfg.water_goal, 8);
    assert_eq!(cfg.log_level, "warn");
    assert_eq!(cfg.recipes.base_url, "https://www.themealdb.com/api/json/v1/1");
    assert_eq!(cfg.recipes.timeout_secs, 8);
    assert_eq!(cfg.recipes.default_count, 3);
}

#[test]
fn test_partial_toml_fills_defaults() {
    let cfg: Config = toml::from_str("water_goal = 10\n[recipes]\ntimeout_secs = 2\n").unwrap();
    assert_eq!(cfg.water_goal, 10);
    assert_eq!(cfg.recipes.timeout_secs, 2);
    assert_eq!(cfg.recipes.default_count, Recipes::default().default_count);
    assert_eq!(cfg.log_level, "warn");
}

#[test]
fn test_config_set_known_keys() {
    let mut cfg = Config::default();
    cfg.set("water_goal", "12").unwrap();
    cfg.set("recipes.base_url", "http://localhost:9000/api/").unwrap();
    cfg.set("recipes.timeout_secs", "3").unwrap();
    cfg.set("log_level", "debug").unwrap();
    assert_eq!(cfg.water_goal, 12);
    assert_eq!(cfg.recipes.base_url, "http://localhost:9000/api");
    assert_eq!(cfg.recipes.timeout_secs, 3);
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn test_config_set_rejects_bad_values() {
    let mut cfg = Config::default();
    assert!(cfg.set("water_goal", "0").is_err());
    assert!(cfg.set("water_goal", "lots").is_err());
    assert!(cfg.set("log_level", "loud").is_err());
    assert!(cfg.set("height", "180").is_err());
    assert!(cfg.set("recipes.timeout_secs", "0").is_err());
    assert_eq!(cfg.water_goal, 8);
    assert_eq!(cfg.recipes.timeout_secs, 8);
}

#[test]
fn test_paths_follow_home_override() {
    with_temp_home(|| {
        let home = Config::data_dir();
        assert_eq!(Config::path(), home.join("config.toml"));
        assert_eq!(Config::db_path(), home.join("data.db"));
    });
}

#[test]
fn test_config_save_load_round_trip() {
    with_temp_home(|| {
        let mut cfg = Config::default();
        cfg.water_goal = 6;
        cfg.recipes.default_count = 5;
        cfg.save().unwrap();

        let loaded = Config::load().unwrap();
        assert_eq!(loaded.water_goal, 6);
        assert_eq!(loaded.recipes.default_count, 5);
    });
}

#[test]
fn test_config_load_missing_file_is_default() {
    with_temp_home(|| {
        let loaded = Config::load().unwrap();
        assert_eq!(loaded.water_goal, 8);
    });
}
