//! Shared testing utilities for usecase-gen CLI tests.

use assert_cmd::Command;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TOKEN_ENV_VAR: &str = "HF_TOKEN";

/// Testing harness providing an isolated, offline environment.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    original_token: Option<OsString>,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with no API token in the process env.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let original_token = env::var_os(TOKEN_ENV_VAR);
        unsafe {
            env::remove_var(TOKEN_ENV_VAR);
        }

        Self { root, work_dir, original_token }
    }

    /// Directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary without credentials.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("usecase-gen").expect("Failed to locate usecase-gen binary");
        cmd.current_dir(&self.work_dir).env_remove(TOKEN_ENV_VAR).env_remove("RUST_LOG");
        cmd
    }

    /// Read a file relative to the work directory.
    pub fn read(&self, relative: &str) -> String {
        let path = self.work_dir.join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("Failed to read {}: {}", path.display(), err))
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        match &self.original_token {
            Some(value) => unsafe {
                env::set_var(TOKEN_ENV_VAR, value);
            },
            None => unsafe {
                env::remove_var(TOKEN_ENV_VAR);
            },
        }
    }
}
