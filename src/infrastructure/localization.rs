//! Language file loading
//!
//! Language files are the host's JSON translation tables. Both the flat form
//! (`"MYZ.ROT": "Rot"`) and the nested form (`"MYZ": { "ROT": "Rot" }`) are
//! accepted; nested keys are joined with dots.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::domain::value_objects::Localization;

const BUNDLED_EN: &str = include_str!("../../lang/en.json");

/// Load the language file at `path`, or the bundled English table
pub fn load_localization(path: Option<&Path>) -> Result<Localization> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read language file {}", path.display()))?;
            parse_localization(&raw)
                .with_context(|| format!("Invalid language file {}", path.display()))
        }
        None => parse_localization(BUNDLED_EN).context("Invalid bundled language file"),
    }
}

pub fn parse_localization(raw: &str) -> Result<Localization> {
    let value: Value = serde_json::from_str(raw).context("Language file is not valid JSON")?;
    let Value::Object(root) = value else {
        anyhow::bail!("Language file must contain a JSON object");
    };

    let mut strings = HashMap::new();
    for (key, value) in root {
        flatten(key, value, &mut strings);
    }
    Ok(Localization::new(strings))
}

fn flatten(prefix: String, value: Value, out: &mut HashMap<String, String>) {
    match value {
        Value::String(s) => {
            out.insert(prefix, s);
        }
        Value::Object(map) => {
            for (key, nested) in map {
                flatten(format!("{}.{}", prefix, key), nested, out);
            }
        }
        // Numbers, arrays and nulls are not translations
        _ => {}
    }
}
