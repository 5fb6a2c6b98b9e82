// サービス層 - エイリアスの作成・更新・削除と呼び出し解決
//
// リポジトリはコンストラクタで注入する。テストでは MockAliasRepository や
// MemoryAliasRepository を差し込む。

use crate::domain::{Alias, AliasError, AliasResult};
use crate::invocation::{classify, split, substitute, SubstitutionMode};
use crate::repository::AliasRepository;
use tracing::debug;

/// 呼び出し解決の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInvocation {
    pub alias_name: String,
    /// 保存されていたテンプレート
    pub template: String,
    pub parameters: Vec<String>,
    pub mode: SubstitutionMode,
    /// シェルに渡す最終コマンド
    pub command: String,
}

pub struct AliasService<R>
where
    R: AliasRepository,
{
    repo: R,
}

impl<R> AliasService<R>
where
    R: AliasRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub async fn create_alias(&self, name: &str, command: &str) -> AliasResult<()> {
        let alias = Alias::new(name, command)?;

        if self.repo.find_by_name(name).await.is_ok() {
            return Err(AliasError::exists(name));
        }

        self.repo.save(&alias).await
    }

    pub async fn get_alias(&self, name: &str) -> AliasResult<Alias> {
        self.repo.find_by_name(name).await
    }

    pub async fn list_aliases(&self) -> AliasResult<Vec<Alias>> {
        self.repo.list().await
    }

    pub async fn update_alias(&self, name: &str, new_command: &str) -> AliasResult<()> {
        if name.is_empty() {
            return Err(AliasError::EmptyAliasName);
        }
        if new_command.is_empty() {
            return Err(AliasError::EmptyAliasCommand);
        }

        let mut alias = self.repo.find_by_name(name).await?;
        alias.update_command(new_command)?;
        self.repo.update(&alias).await
    }

    pub async fn delete_alias(&self, name: &str) -> AliasResult<()> {
        if name.is_empty() {
            return Err(AliasError::EmptyAliasName);
        }
        self.repo.delete(name).await
    }

    /// 呼び出し引数からシェルに渡すコマンドを組み立てる
    ///
    /// 空のエイリアス名はそのまま検索に回り、`AliasNotFound` になる。
    pub async fn resolve<S: AsRef<str> + Sync>(&self, tokens: &[S]) -> AliasResult<ResolvedInvocation> {
        let parsed = split(tokens);
        let alias = self.repo.find_by_name(&parsed.alias_name).await?;

        let mode = classify(&alias.command, &parsed.parameters);
        let command = substitute(&alias.command, &parsed.parameters);
        debug!(name = %parsed.alias_name, ?mode, "resolved alias");

        Ok(ResolvedInvocation {
            alias_name: parsed.alias_name,
            template: alias.command,
            parameters: parsed.parameters,
            mode,
            command,
        })
    }
}
