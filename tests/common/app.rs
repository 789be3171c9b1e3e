//! Runs the compiled `huetally` binary against fixtures in a scratch directory.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use huetally::models::CONFIG_ENV_VAR;

/// Scratch directory plus a handle on the binary under test
pub struct TestCli {
    dir: TempDir,
}

/// Captured result of one invocation
pub struct CliOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

impl TestCli {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Absolute path for a file inside the scratch directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Run with the given arguments and no config from the environment
    pub fn run(&self, args: &[&str]) -> CliOutput {
        self.run_with_env(args, &[])
    }

    /// Run with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &Path)]) -> CliOutput {
        let mut command = Command::new(env!("CARGO_BIN_EXE_huetally"));
        command
            .args(args)
            .current_dir(self.dir.path())
            .env_remove(CONFIG_ENV_VAR)
            .env_remove("RUST_LOG");
        for (key, value) in env {
            command.env(key, value);
        }

        let output = command.output().expect("Failed to run huetally binary");
        CliOutput {
            stdout: String::from_utf8(output.stdout).expect("stdout is not UTF-8"),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        }
    }

    /// Run against a fixture path
    pub fn report(&self, image: &Path, extra_args: &[&str]) -> CliOutput {
        let image = image.to_str().expect("fixture path is not UTF-8");
        let mut args = vec![image];
        args.extend_from_slice(extra_args);
        self.run(&args)
    }
}
