use crate::domain::models::ValidationReport;
use serde_json::Value;
use std::path::Path;

/// Files every configuration tree must carry. Per-category schema files are
/// resolved through `schema/index.json` instead of being listed here.
const REQUIRED_FILES: [&str; 8] = [
    "paths.json",
    "naming_rules.json",
    "thresholds.json",
    "ebay/title_rules.json",
    "ebay/policies.json",
    "ebay/store_categories.json",
    "ebay/schema/index.json",
    "ebay/schema/global_defaults.json",
];

const SCAFFOLD_TEMPLATE: &str = "ebay/schema/cat_BASE_TEMPLATE.json";

fn load_json(path: &Path, failures: &mut Vec<String>) -> Value {
    if !path.exists() {
        failures.push(format!("MISSING FILE: {}", path.display()));
        return Value::Null;
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(v) => v,
        Err(e) => {
            failures.push(format!("UNREADABLE FILE: {} :: {}", path.display(), e));
            return Value::Null;
        }
    };
    let txt = raw.trim();
    if txt.is_empty() {
        failures.push(format!("EMPTY FILE: {}", path.display()));
        return Value::Null;
    }
    match serde_json::from_str(txt) {
        Ok(v) => v,
        Err(e) => {
            failures.push(format!("INVALID JSON: {} :: {}", path.display(), e));
            Value::Null
        }
    }
}

/// Check the whole configuration tree, accumulating every problem rather than
/// stopping at the first one.
pub fn validate_config(root: &Path) -> ValidationReport {
    let mut failures = Vec::new();
    let schema_dir = root.join("ebay").join("schema");

    // 1) Required files
    for rel in REQUIRED_FILES {
        load_json(&root.join(rel), &mut failures);
    }

    // 2) Schema index -> category file resolution
    let index = load_json(&schema_dir.join("index.json"), &mut failures);
    match index.get("categories") {
        Some(Value::Object(cats)) => {
            for (cat_id, cfg) in cats {
                let file = cfg.get("file").and_then(Value::as_str).unwrap_or("");
                if file.is_empty() {
                    failures.push(format!("Category {cat_id} has no 'file' defined"));
                    continue;
                }
                let cat_path = schema_dir.join(file);
                if !cat_path.exists() {
                    failures.push(format!("Category {cat_id} references missing file: {file}"));
                } else {
                    load_json(&cat_path, &mut failures);
                }
            }
        }
        _ => failures.push("schema/index.json missing 'categories' object".to_string()),
    }

    // 3) Policies sanity
    let policies = load_json(&root.join("ebay").join("policies.json"), &mut failures);
    let profile_known = match (
        policies.get("active_profile").and_then(Value::as_str),
        policies.get("profiles"),
    ) {
        (Some(profile), Some(Value::Object(profiles))) => profiles.contains_key(profile),
        _ => false,
    };
    if !profile_known {
        failures.push("policies.json active_profile not found in profiles".to_string());
    }

    // 4) Title rules sanity
    let title = load_json(&root.join("ebay").join("title_rules.json"), &mut failures);
    if title.get("order").is_none() {
        failures.push("title_rules.json missing 'order'".to_string());
    }
    if title.get("max_len").is_none() {
        failures.push("title_rules.json missing 'max_len'".to_string());
    }

    // 5) Hard-fail if scaffolding remains
    if root.join(SCAFFOLD_TEMPLATE).exists() {
        failures.push("Scaffolding file present: cat_BASE_TEMPLATE.json (delete it)".to_string());
    }

    ValidationReport { failures }
}
