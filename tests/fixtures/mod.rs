// 統合テスト用のヘルパー
// 一時ディレクトリを HOME とカレントディレクトリにしてバイナリを実行する

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn alias_file(&self) -> PathBuf {
        self.dir.path().join("store").join("aliases.json")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_mantrid"));
        command
            .args(args)
            .current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env_remove("MANTRID_CONFIG")
            .env("MANTRID_ALIAS_FILE", self.alias_file())
            .env("MANTRID_STORAGE_TYPE", "json")
            .env("MANTRID_LOG_LEVEL", "error");
        command
    }

    /// 標準入力なしで実行
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .stdin(Stdio::null())
            .output()
            .expect("Failed to execute binary")
    }

    /// 環境変数を追加して実行
    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> Output {
        self.command(args)
            .envs(vars.iter().copied())
            .stdin(Stdio::null())
            .output()
            .expect("Failed to execute binary")
    }

    /// 標準入力に文字列を渡して実行
    pub fn run_with_input(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn binary");

        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
        child.wait_with_output().unwrap()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
