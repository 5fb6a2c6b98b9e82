// シェル経由のコマンド実行

use crate::domain::{AliasError, AliasResult};
use mockall::automock;
use std::process::{Command, Stdio};
use tracing::{info, warn};

/// 解決済みコマンドを実行するトレイト
#[automock]
pub trait CommandExecutor: Send + Sync {
    /// コマンドを実行して終了コードを返す
    ///
    /// 起動できなかった場合のみエラー。非ゼロ終了はエラーではなく終了コードとして返す。
    fn run(&self, command: &str) -> AliasResult<i32>;
}

/// システムシェル（Unix: `sh -c`, Windows: `cmd /C`）で実行する
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor;

impl ShellExecutor {
    pub fn new() -> Self {
        Self
    }

    fn build_command(command: &str) -> Command {
        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", command]);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }
}

impl CommandExecutor for ShellExecutor {
    fn run(&self, command: &str) -> AliasResult<i32> {
        info!(command, "executing alias command");

        let status = Self::build_command(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| AliasError::command_execution(command, e))?;

        // シグナルで終了した場合は終了コードがないので 1 とする
        let exit_code = status.code().unwrap_or(1);
        if exit_code != 0 {
            warn!(exit_code, "command exited with error");
        }
        Ok(exit_code)
    }
}
