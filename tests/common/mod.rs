use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Isolated working directory for driving the `shapes` binary.
pub struct TestWorkspace {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `.shapes/settings.toml` with the given content.
    pub fn write_settings(&self, content: &str) -> PathBuf {
        let config_dir = self.dir.path().join(".shapes");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        let path = config_dir.join("settings.toml");
        std::fs::write(&path, content).expect("Failed to write settings");
        path
    }

    /// Run the binary inside the workspace with a clean environment.
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_in(self.dir.path(), args)
    }

    /// Run the binary from `dir` (usually below the workspace root).
    pub fn run_in(&self, dir: &Path, args: &[&str]) -> Output {
        self.command(dir, args)
            .output()
            .expect("Failed to run shapes binary")
    }

    /// Clean-environment command, for tests that wire stdio themselves.
    pub fn command(&self, dir: &Path, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_shapes"));
        cmd.args(args)
            .current_dir(dir)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        for (key, _) in std::env::vars() {
            if key.starts_with("SHAPES_") {
                cmd.env_remove(key);
            }
        }
        cmd
    }
}

#[allow(dead_code)]
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[allow(dead_code)]
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
