//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test files
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::ffi::OsString;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `a7` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct A7Command {
    args: Vec<String>,
    envs: Vec<(String, OsString)>,
}

impl A7Command {
    /// Creates a new command for the `a7` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    /// Sets the `--dir` option to specify the journal directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Sets the `--key` option.
    pub fn key(mut self, path: &Path) -> Self {
        self.args.push("--key".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Sets an environment variable for the child process.
    pub fn env(mut self, key: &str, value: impl Into<OsString>) -> Self {
        self.envs.push((key.to_string(), value.into()));
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("a7").expect("Failed to find a7 binary");
        cmd.env_remove("RUST_LOG")
            .env_remove("EDITOR")
            .env_remove("VISUAL");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `show` command with a filename.
    pub fn show(self, filename: &str) -> Self {
        self.args(["show", filename])
    }

    /// Configures for the `new` command with a title and body.
    pub fn new_note(self, title: &str, body: &str) -> Self {
        self.args(["new", title, "--body", body])
    }

    /// Configures for the `edit` command with a filename.
    pub fn edit(self, filename: &str) -> Self {
        self.args(["edit", filename])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--format paths` to the command.
    pub fn format_paths(self) -> Self {
        self.args(["--format", "paths"])
    }
}

impl Default for A7Command {
    fn default() -> Self {
        Self::new()
    }
}
