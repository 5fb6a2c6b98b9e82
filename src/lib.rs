pub mod cli;
pub mod config;
pub mod domain;
pub mod executor;
pub mod invocation;
pub mod logging;
pub mod repository;
pub mod service;

use anyhow::Result;
use executor::CommandExecutor;
use repository::AliasRepository;
use service::{AliasService, ResolvedInvocation};
use tracing::info;

pub use crate::domain::{Alias, AliasError, AliasResult};

// DIコンテナの役割を果たすジェネリックなApp構造体
// リポジトリと実行器をコンストラクタで受け取り、CLIの各コマンドから共有する
pub struct App<R, E>
where
    R: AliasRepository,
    E: CommandExecutor,
{
    pub service: AliasService<R>,
    pub executor: E,
}

impl<R, E> App<R, E>
where
    R: AliasRepository,
    E: CommandExecutor,
{
    /// 新しいAppインスタンスを作成（コンストラクタインジェクション）
    pub fn new(repository: R, executor: E) -> Self {
        Self {
            service: AliasService::new(repository),
            executor,
        }
    }

    /// エイリアスを解決して実行し、子プロセスの終了コードを返す
    pub async fn invoke<S: AsRef<str> + Sync>(&self, tokens: &[S]) -> Result<i32> {
        let resolved = self.service.resolve(tokens).await?;
        log_resolution(&resolved);

        let exit_code = self.executor.run(&resolved.command)?;
        Ok(exit_code)
    }
}

fn log_resolution(resolved: &ResolvedInvocation) {
    info!(name = %resolved.alias_name, command = %resolved.template, "found alias");
    if !resolved.parameters.is_empty() {
        info!(
            original = %resolved.template,
            r#final = %resolved.command,
            "substituted parameters"
        );
    }
}
