use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;
use tracing::info;

/// Default configuration as a YAML tree.
fn default_tree() -> AppResult<Value> {
    Ok(serde_yaml::to_value(Config::default())?)
}

fn parse_tree(content: &str) -> AppResult<Value> {
    let value: Value = serde_yaml::from_str(content)?;
    match value {
        Value::Mapping(_) => Ok(value),
        // An empty file parses as null: treat it as an empty mapping.
        Value::Null => Ok(Value::Mapping(Mapping::new())),
        _ => Err(AppError::Config(
            "configuration root must be a mapping".into(),
        )),
    }
}

/// Walk `defaults` and collect the dotted path of every key absent from `current`.
/// When `fill` is set, absent keys are copied over from `defaults`.
fn merge_missing(current: &mut Mapping, defaults: &Mapping, prefix: &str, fill: bool) -> Vec<String> {
    let mut missing = Vec::new();

    for (key, default_val) in defaults {
        let name = key.as_str().unwrap_or_default();
        let dotted = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        };

        match current.get_mut(key) {
            None => {
                missing.push(dotted);
                if fill {
                    current.insert(key.clone(), default_val.clone());
                }
            }
            Some(Value::Mapping(sub)) => {
                if let Value::Mapping(sub_defaults) = default_val {
                    missing.extend(merge_missing(sub, sub_defaults, &dotted, fill));
                }
            }
            Some(_) => {}
        }
    }

    missing
}

/// Keys present in the default configuration but missing from `content`.
pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
    let mut tree = parse_tree(content)?;
    let defaults = default_tree()?;

    match (tree.as_mapping_mut(), defaults.as_mapping()) {
        (Some(current), Some(defaults)) => Ok(merge_missing(current, defaults, "", false)),
        _ => Ok(Vec::new()),
    }
}

/// Add every missing key with its default value, preserving user values.
/// Returns the keys that were added; the file is rewritten only when something changed.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let mut tree = parse_tree(&content)?;
    let defaults = default_tree()?;

    let added = match (tree.as_mapping_mut(), defaults.as_mapping()) {
        (Some(current), Some(defaults)) => merge_missing(current, defaults, "", true),
        _ => Vec::new(),
    };

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&tree)?;
        // Must still load after the merge.
        Config::from_yaml(&serialized)?;
        fs::write(path, serialized)?;
        info!(path = %path.display(), added = added.len(), "configuration migrated");
    }

    Ok(added)
}
