//! Configuration file upgrades: keys added in later versions are filled
//! in with their defaults, leaving user values untouched.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

/// Keys present in the default configuration but absent from the file.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add the missing keys with their defaults.
/// Returns Ok(true) when the file was rewritten.
pub fn migrate_config_file(path: &Path) -> AppResult<bool> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;
    let mut changed = false;

    for (k, v) in defaults {
        if !current.contains_key(&k) {
            info(format!(
                "Adding missing key '{}' to configuration",
                k.as_str().unwrap_or("?")
            ));
            current.insert(k, v);
            changed = true;
        }
    }

    if changed {
        let serialized = serde_yaml::to_string(&Value::Mapping(current))?;
        fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;
        success(format!("Configuration migrated: {}", path.display()));
    }

    Ok(changed)
}
