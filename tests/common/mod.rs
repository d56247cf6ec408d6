//! A scripted stand-in for the `op` binary.
//!
//! The script logs each argument vector to `calls.log` (one argument per
//! line, `--` between calls) and answers from files named after the first
//! two arguments: `item-get.out` is printed on stdout, `item-get.err` on
//! stderr with exit status 1. `op --version` reads `version.out`.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

const SCRIPT: &str = r#"#!/bin/sh
dir="$(dirname "$0")"
for a in "$@"; do printf '%s\n' "$a"; done >> "$dir/calls.log"
printf '%s\n' '--' >> "$dir/calls.log"
if [ "$1" = "--version" ]; then key=version; else key="$1-$2"; fi
if [ -f "$dir/$key.err" ]; then cat "$dir/$key.err" >&2; exit 1; fi
if [ -f "$dir/$key.out" ]; then cat "$dir/$key.out"; exit 0; fi
echo "[ERROR] unknown command \"$key\"" >&2
exit 1
"#;

pub struct FakeOp {
    dir: TempDir,
}

impl FakeOp {
    /// Install the script and answer `--version` with 2.23.0.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("op");
        fs::write(&script, SCRIPT).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let fake = Self { dir };
        fake.reply("version", "2.23.0\n");
        fake
    }

    pub fn program(&self) -> String {
        self.path().join("op").to_string_lossy().into_owned()
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Answer `key` (e.g. `item-get`) with `stdout`.
    pub fn reply(&self, key: &str, stdout: impl AsRef<[u8]>) {
        fs::write(self.path().join(format!("{key}.out")), stdout).unwrap();
    }

    /// Make `key` fail with `stderr`.
    pub fn fail(&self, key: &str, stderr: &str) {
        fs::write(self.path().join(format!("{key}.err")), stderr).unwrap();
    }

    /// Every argument vector the script saw, without the program name.
    pub fn calls(&self) -> Vec<Vec<String>> {
        let log = fs::read_to_string(self.path().join("calls.log")).unwrap_or_default();
        let mut calls = Vec::new();
        let mut current = Vec::new();
        for line in log.lines() {
            if line == "--" {
                calls.push(std::mem::take(&mut current));
            } else {
                current.push(line.to_string());
            }
        }
        calls
    }

    /// Calls other than the version probe.
    pub fn queries(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|c| c.first().map(String::as_str) != Some("--version"))
            .collect()
    }

    /// Path for a config file that does not exist yet.
    pub fn config_path(&self) -> PathBuf {
        self.path().join("config.toml")
    }
}

pub fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}
