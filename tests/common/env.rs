//! Test environment for isolated images-readme runs.
//!
//! Provides `TestEnv` - a temp component root, scratch directory and config
//! directory, plus helpers to run the CLI against them.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running an images-readme CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as a single JSON object
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim())
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Component root (holds `images/`)
    pub root: TempDir,
    /// Scratch directory for starter templates
    pub scratch: TempDir,
    /// Directory used in place of the user config dir
    pub config_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create root dir"),
            scratch: TempDir::new().expect("Failed to create scratch dir"),
            config_dir: TempDir::new().expect("Failed to create config dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_images-readme")),
        }
    }

    /// Get path relative to the component root
    pub fn root_path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Get path relative to the scratch directory
    pub fn scratch_path(&self, relative: &str) -> PathBuf {
        self.scratch.path().join(relative)
    }

    /// Write a file under the component root
    pub fn write_file(&self, relative_path: &str, content: &str) {
        let full_path = self.root_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write the user-level config file
    pub fn write_user_config(&self, content: &str) {
        let path = self.config_dir.path().join("images-readme").join("config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config dir");
        std::fs::write(path, content).expect("Failed to write user config");
    }

    /// Run with the temp scratch directory passed explicitly
    pub fn run(&self, args: &[&str]) -> TestResult {
        let scratch = self.scratch.path().to_string_lossy().to_string();
        let mut full_args: Vec<&str> = vec!["--scratch-dir", scratch.as_str()];
        full_args.extend_from_slice(args);
        self.run_raw(&full_args, &[], None)
    }

    /// Run with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_raw(args, env_vars, None)
    }

    /// Run with data piped to stdin
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> TestResult {
        self.run_raw(args, &[], Some(stdin))
    }

    /// Run from the component root with no implicit flags
    pub fn run_raw(&self, args: &[&str], env_vars: &[(&str, &str)], stdin: Option<&str>) -> TestResult {
        let mut cmd = self.command(self.root.path());
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = match stdin {
            Some(input) => {
                cmd.stdin(Stdio::piped()).stdout(Stdio::piped()).stderr(Stdio::piped());
                let mut child = cmd.spawn().expect("Failed to spawn images-readme");
                child
                    .stdin
                    .take()
                    .expect("stdin")
                    .write_all(input.as_bytes())
                    .expect("Failed to write stdin");
                child.wait_with_output().expect("Failed to wait for images-readme")
            }
            None => cmd.output().expect("Failed to execute images-readme"),
        };

        output_to_result(output)
    }

    fn command(&self, cwd: &Path) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .env("IMAGES_README_CONFIG_DIR", self.config_dir.path())
            .env_remove("IMAGES_README_ROOT")
            .env_remove("IMAGES_README_SCRATCH_DIR")
            .env_remove("IMAGES_README_REGISTRY")
            .env_remove("IMAGES_README_FORMAT")
            .env_remove("IMAGES_README_VERBOSITY")
            .env_remove("RUST_LOG");
        cmd
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
