use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    tmp: TempDir,
    pub config_root: PathBuf,
    pub runtime_root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let runtime_root = tmp.path().join("runtime");
        let config_root = make_fixture_config(tmp.path(), &runtime_root);

        Self {
            tmp,
            config_root,
            runtime_root,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("cardpipe");
        cmd.arg("--config-root").arg(&self.config_root);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_config(&self, rel: &str, contents: &str) {
        let path = self.config_root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create config subdir");
        }
        fs::write(path, contents).expect("write config file");
    }

    pub fn remove_config(&self, rel: &str) {
        fs::remove_file(self.config_root.join(rel)).expect("remove config file");
    }

    /// A stand-in validator that exits with a fixed code and prints nothing.
    #[cfg(unix)]
    pub fn fake_validator(&self, exit_code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.tmp.path().join(format!("fake-validator-{exit_code}"));
        fs::write(&path, format!("#!/bin/sh\nexit {exit_code}\n")).expect("write fake validator");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("mark fake validator executable");
        path
    }
}

fn make_fixture_config(base: &Path, runtime_root: &Path) -> PathBuf {
    let root = base.join("config");
    let ebay = root.join("ebay");
    let schema = ebay.join("schema");
    fs::create_dir_all(&schema).expect("create schema dir");

    fs::write(
        root.join("paths.json"),
        serde_json::json!({ "runtime_root": runtime_root.to_string_lossy() }).to_string(),
    )
    .expect("write paths config");
    fs::write(
        root.join("naming_rules.json"),
        serde_json::json!({ "separator": "-", "lowercase": true }).to_string(),
    )
    .expect("write naming rules");
    fs::write(
        root.join("thresholds.json"),
        serde_json::json!({ "min_confidence": 0.8 }).to_string(),
    )
    .expect("write thresholds");

    fs::write(
        ebay.join("title_rules.json"),
        serde_json::json!({
            "order": ["year", "set", "player"],
            "max_len": 80
        })
        .to_string(),
    )
    .expect("write title rules");
    fs::write(
        ebay.join("policies.json"),
        serde_json::json!({
            "active_profile": "standard",
            "profiles": {
                "standard": { "shipping": "usps-ground" }
            }
        })
        .to_string(),
    )
    .expect("write policies");
    fs::write(
        ebay.join("store_categories.json"),
        serde_json::json!({ "261328": "Singles" }).to_string(),
    )
    .expect("write store categories");

    fs::write(
        schema.join("index.json"),
        serde_json::json!({
            "categories": {
                "261328": { "file": "cat_261328.json" }
            }
        })
        .to_string(),
    )
    .expect("write schema index");
    fs::write(
        schema.join("global_defaults.json"),
        serde_json::json!({ "Country/Region of Manufacture": "United States" }).to_string(),
    )
    .expect("write global defaults");
    fs::write(
        schema.join("cat_261328.json"),
        serde_json::json!([{ "name": "Player/Athlete" }, { "name": "Set" }]).to_string(),
    )
    .expect("write category schema");

    root
}
