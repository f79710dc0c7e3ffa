#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub evidence: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let evidence = root.join("evidence");

        Self {
            _tmp: tmp,
            root,
            evidence,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("valor-attest");
        cmd.current_dir(&self.root).env_remove("RUST_LOG");
        cmd
    }

    pub fn write(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.evidence.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create evidence subdir");
        }
        fs::write(&path, contents).expect("write evidence file");
        path
    }

    pub fn evidence_arg(&self) -> &str {
        self.evidence.to_str().expect("evidence path utf8")
    }

    pub fn run_verify(&self) -> Value {
        self.run_json(&["--verify", self.evidence_arg()])
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn entry_files(report: &Value) -> Vec<String> {
    report["entries"]
        .as_array()
        .expect("entries array")
        .iter()
        .map(|e| e["file"].as_str().expect("file string").to_string())
        .collect()
}

pub fn entry_for<'a>(report: &'a Value, path: &Path) -> &'a Value {
    let want = path.to_str().expect("path utf8");
    report["entries"]
        .as_array()
        .expect("entries array")
        .iter()
        .find(|e| e["file"] == want)
        .unwrap_or_else(|| panic!("no entry for {want}"))
}
