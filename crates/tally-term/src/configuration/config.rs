#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    InitialCourses,
    LogFile,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    #[cfg(not(target_os = "macos"))]
    fn config_root() -> path::PathBuf {
        dirs::cache_dir().unwrap_or_else(path::PathBuf::new)
    }

    #[cfg(target_os = "macos")]
    fn config_root() -> path::PathBuf {
        dirs::home_dir()
            .unwrap_or_else(path::PathBuf::new)
            .join(".config")
    }

    pub fn default(key: ConfigKey) -> String {
        let config_dir = Config::config_root();
        let config_path = config_dir.join("tally/config.toml");
        let log_path = config_dir.join("tally/tally-term.log");

        let res = match key {
            ConfigKey::InitialCourses => "5",

            // Special
            ConfigKey::ConfigFile => config_path.to_str().unwrap_or_default(),
            ConfigKey::LogFile => log_path.to_str().unwrap_or_default(),
        };

        return res.to_string();
    }

    pub async fn load(clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Some(arg_config_file) =
                matches.get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if let Some(val) = doc.get(&key.to_string()) {
                    if let Some(val_int) = val.as_integer() {
                        Config::set(key, &val_int.to_string());
                    } else if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        Config::set(key, val_str);
                    } else {
                        bail!(format!(
                            "config.toml has an invalid value for key '{key}'"
                        ));
                    }
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        let initial_courses = Config::get(ConfigKey::InitialCourses);
        match initial_courses.parse::<usize>() {
            Ok(count) if count >= 1 => {}
            _ => bail!(format!(
                "'{}' must be a whole number of at least 1, got: {initial_courses}",
                ConfigKey::InitialCourses
            )),
        }

        return Ok(());
    }
}
