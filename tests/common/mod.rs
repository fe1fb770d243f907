//! Common test utilities for garment-impact CLI tests.
//!
//! `TestEnv` gives each test its own project directory and home directory so
//! no real user config leaks into a run.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Parse the single JSON event printed on stdout
    pub fn json(&self) -> Value {
        let line = self
            .stdout
            .lines()
            .find(|l| !l.trim().is_empty())
            .unwrap_or_else(|| panic!("no JSON on stdout; stderr:\n{}", self.stderr));
        serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Isolated project + home directories
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project temp dir"),
            home_dir: TempDir::new().expect("Failed to create home temp dir"),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write `garment-impact.toml` in the project root
    pub fn write_project_config(&self, toml: &str) {
        self.write_project_file("garment-impact.toml", toml);
    }

    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write the user-level config under the isolated config dir
    pub fn write_user_config(&self, toml: &str) {
        let dir = self.config_home().join("garment-impact");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        std::fs::write(dir.join("config.toml"), toml).expect("Failed to write user config");
    }

    #[cfg(target_os = "macos")]
    fn config_home(&self) -> PathBuf {
        self.home_dir.path().join("Library/Application Support")
    }

    #[cfg(not(target_os = "macos"))]
    fn config_home(&self) -> PathBuf {
        self.home_dir.path().join(".config")
    }

    fn command(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_garment-impact"));
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env_remove("GARMENT_IMPACT_CONFIG")
            .env_remove("GARMENT_IMPACT_FORMAT")
            .env_remove("GARMENT_IMPACT_PRECISION")
            .env_remove("GARMENT_IMPACT_LOG")
            .env_remove("RUST_LOG");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let output = self
            .command(self.project_root.path(), args, env_vars)
            .output()
            .expect("Failed to execute garment-impact");
        TestResult::from_output(output)
    }

    /// Run with `stdin` piped in
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> TestResult {
        let mut child = self
            .command(self.project_root.path(), args, &[])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn garment-impact");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");
        let output = child.wait_with_output().expect("Failed to wait for child");
        TestResult::from_output(output)
    }
}

/// A config with only the one factor the worked examples use
pub const ORGANIC_DRESS_ONLY: &str = r#"
[table]
use_defaults = false

[equivalents]
showers = 65.0
car_miles = 0.4
trees_planted = 21.0

[[factors]]
category = "dress"
material = "organic"
water_liters = 2700.0
co2_kg = 15.0
"#;
