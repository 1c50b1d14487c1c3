//! Settings for `edu_seed`.
//!
//! Sources, later ones winning: the TOML file (`config/edu_seed.toml` unless
//! `--config` names another), `EDU_SEED_*` environment variables with `__`
//! between section and key (e.g. `EDU_SEED_DATABASE__URL`), then CLI flags.
//!
//! A relative `seed.data_dir` is resolved against the directory of the config
//! file in use, so the binary can run from anywhere.
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;
use seeder::DuplicatePolicy;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/edu_seed.toml";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Database {
    pub url: String,
    /// Apply pending migrations before seeding.
    pub migrate: bool,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: "sqlite:./edu_seed.db?mode=rwc".to_string(),
            migrate: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub duplicate_policy: DuplicatePolicy,
    /// Directory of JSON translation files.
    pub data_dir: Option<PathBuf>,
    pub default_password: String,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Fail,
            data_dir: None,
            default_password: "password".to_string(),
        }
    }
}

impl Seed {
    fn anchor_data_dir(&mut self, base: &Path) {
        if let Some(dir) = self.data_dir.as_mut().filter(|dir| dir.is_relative()) {
            *dir = base.join(&*dir);
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub database: Database,
    pub seed: Seed,
}

impl Settings {
    /// Load the file and the environment.
    ///
    /// An explicit `path` must exist; the default one is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let default = Path::new(DEFAULT_CONFIG_PATH);
        let (file, config_dir) = match path {
            Some(path) => (File::from(path).required(true), path.parent()),
            None => (
                File::with_name(DEFAULT_CONFIG_PATH).required(false),
                default.is_file().then(|| default.parent()).flatten(),
            ),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("EDU_SEED")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = settings.try_deserialize()?;
        if let Some(dir) = config_dir {
            settings.seed.anchor_data_dir(dir);
        }
        Ok(settings)
    }

    /// Filter directive for the tracing subscriber.
    pub fn log_filter(&self) -> String {
        format!(
            "edu_seed={level},seeder={level},migration={level}",
            level = self.app.level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let settings = Settings::default();
        assert_eq!(settings.app.level, "info");
        assert!(settings.database.migrate);
        assert_eq!(settings.seed.duplicate_policy, DuplicatePolicy::Fail);
        assert_eq!(settings.seed.data_dir, None);
        assert_eq!(
            settings.log_filter(),
            "edu_seed=info,seeder=info,migration=info"
        );
    }

    #[test]
    fn toml_sections_override_defaults() {
        let settings: Settings = Config::builder()
            .add_source(config::File::from_str(
                r#"
                [database]
                migrate = false

                [seed]
                duplicate_policy = "warn"
                data_dir = "seed-data"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(!settings.database.migrate);
        assert_eq!(settings.database.url, "sqlite:./edu_seed.db?mode=rwc");
        assert_eq!(settings.seed.duplicate_policy, DuplicatePolicy::Warn);
        assert_eq!(settings.seed.data_dir, Some(PathBuf::from("seed-data")));
        assert_eq!(settings.seed.default_password, "password");
    }

    #[test]
    fn relative_data_dir_follows_the_config_file() {
        let dir = std::env::temp_dir().join(format!("edu_seed_settings_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("edu_seed.toml");
        std::fs::write(&path, "[seed]\ndata_dir = \"data\"\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.seed.data_dir, Some(dir.join("data")));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn absolute_data_dir_is_kept() {
        let absolute = std::env::temp_dir().join("seed-data");
        let mut seed = Seed {
            data_dir: Some(absolute.clone()),
            ..Seed::default()
        };
        seed.anchor_data_dir(Path::new("config"));
        assert_eq!(seed.data_dir, Some(absolute));

        let mut seed = Seed {
            data_dir: Some(PathBuf::from("../seed-data")),
            ..Seed::default()
        };
        seed.anchor_data_dir(Path::new("config"));
        assert_eq!(seed.data_dir, Some(PathBuf::from("config/../seed-data")));
    }
}
