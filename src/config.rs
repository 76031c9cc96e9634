use crate::error::{ParkgateError, Result};
use crate::types::policy::PolicyConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "parkgate.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".parkgate/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/parkgate/config.toml";

pub fn load_policy(root: &Path, explicit: Option<&Path>) -> Result<PolicyConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_policy_with_global(root, global.as_deref(), explicit)
}

pub(crate) fn load_policy_with_global(
    root: &Path,
    global_path: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<PolicyConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ParkgateError::ConfigParse(format!(
                    "{}: file does not exist",
                    path.display()
                )));
            }
            merge_file_if_exists(&mut merged, path)?;
        }
        None => merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?,
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let policy: PolicyConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ParkgateError::ConfigParse(e.to_string()))?;
    policy.validate()?;
    Ok(policy)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging policy file");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ParkgateError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
