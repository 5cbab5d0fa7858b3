use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_water_goal")]
    pub water_goal: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub recipes: Recipes,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            water_goal: default_water_goal(),
            log_level: default_log_level(),
            recipes: Recipes::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Recipes {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_count")]
    pub default_count: u32,
}

fn default_water_goal() -> u32 {
    8
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_base_url() -> String {
    crate::recipes::MEALDB_BASE.to_string()
}
fn default_timeout_secs() -> u64 {
    8
}
fn default_count() -> u32 {
    3
}

impl Default for Recipes {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            default_count: default_count(),
        }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&path)?;
            file.write_all(contents.as_bytes())?;

            // mode() only applies on creation; tighten files that already existed
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    /// Apply a `config set` key. Values are parsed per key.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "water_goal" => {
                let goal: u32 = value.parse()?;
                if goal == 0 {
                    anyhow::bail!("water_goal must be at least 1");
                }
                self.water_goal = goal;
            }
            "log_level" => match value {
                "error" | "warn" | "info" | "debug" | "trace" => {
                    self.log_level = value.to_string()
                }
                _ => anyhow::bail!("log_level must be one of error/warn/info/debug/trace"),
            },
            "recipes.base_url" => self.recipes.base_url = value.trim_end_matches('/').to_string(),
            "recipes.timeout_secs" => {
                let secs: u64 = value.parse()?;
                if secs == 0 {
                    anyhow::bail!("recipes.timeout_secs must be at least 1");
                }
                self.recipes.timeout_secs = secs;
            }
            "recipes.default_count" => self.recipes.default_count = value.parse()?,
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("HEALTHPLANNER_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".healthplanner")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    pub fn db_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }
}
