//! Modular configuration loader.
//!
//! Supports loading configuration from multiple files:
//! - `config.json` - Core configuration
//! - `fundamentals.json` - Statement ingestion configuration
//!
//! Files are loaded from `~/.codecoder/` with proper merging.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::config_dir;

/// Load a JSON file and return its contents as a Value.
/// Returns None if file doesn't exist.
fn load_json_file(path: &Path) -> Result<Option<Value>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(Some(value))
}

/// Deep merge two JSON values.
/// Source values override target values, with object merging at each level.
fn merge_json(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, source_value) in source_map {
                match target_map.get_mut(&key) {
                    Some(target_value) => {
                        merge_json(target_value, source_value);
                    }
                    None => {
                        target_map.insert(key, source_value);
                    }
                }
            }
        }
        (target, source) => {
            *target = source;
        }
    }
}

/// Load modular configuration from the config directory.
///
/// Priority (lowest to highest):
/// 1. config.json
/// 2. fundamentals.json, merged into the `fundamentals` section
/// 3. Environment variables (applied separately)
pub fn load_modular_config(dir: Option<PathBuf>) -> Result<Value> {
    let cfg_dir = dir.unwrap_or_else(config_dir);

    let mut config = load_json_file(&cfg_dir.join("config.json"))?
        .unwrap_or(Value::Object(Default::default()));

    tracing::debug!("Loading modular config from {}", cfg_dir.display());

    if let Some(fundamentals) = load_json_file(&cfg_dir.join("fundamentals.json"))? {
        if let Some(config_obj) = config.as_object_mut() {
            match config_obj.get_mut("fundamentals") {
                Some(existing) => merge_json(existing, fundamentals),
                None => {
                    config_obj.insert("fundamentals".to_string(), fundamentals);
                }
            }
        }
        tracing::debug!("Loaded fundamentals.json");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_json_objects() {
        let mut target = json!({
            "a": 1,
            "b": {
                "x": 10,
                "y": 20
            }
        });

        let source = json!({
            "b": {
                "y": 25,
                "z": 30
            },
            "c": 3
        });

        merge_json(&mut target, source);

        assert_eq!(target["a"], 1);
        assert_eq!(target["b"]["x"], 10);
        assert_eq!(target["b"]["y"], 25);
        assert_eq!(target["b"]["z"], 30);
        assert_eq!(target["c"], 3);
    }

    #[test]
    fn test_merge_json_overwrite_non_object() {
        let mut target = json!({ "a": [1, 2, 3] });
        let source = json!({ "a": [4, 5] });

        merge_json(&mut target, source);

        assert_eq!(target["a"], json!([4, 5]));
    }

    #[test]
    fn test_fundamentals_file_overrides_core_section() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.json"),
            r#"{"fundamentals": {"cache_capacity": 10, "window_size": 2}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("fundamentals.json"), r#"{"window_size": 6}"#).unwrap();

        let value = load_modular_config(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(value["fundamentals"]["cache_capacity"], 10);
        assert_eq!(value["fundamentals"]["window_size"], 6);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.json"), "{ not json").unwrap();

        let err = load_modular_config(Some(dir.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
