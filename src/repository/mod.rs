use async_trait::async_trait;
use mockall::automock;

use crate::config::{Config, FileManager, StorageType};
use crate::domain::{Alias, AliasResult};

pub mod json;
pub mod memory;

/// エイリアスの保存先を抽象化するトレイト
#[automock]
#[async_trait]
pub trait AliasRepository: Send + Sync {
    /// 同名があれば置き換え、なければ追加する
    async fn save(&self, alias: &Alias) -> AliasResult<()>;

    /// 名前で検索する。見つからなければ `AliasNotFound`
    async fn find_by_name(&self, name: &str) -> AliasResult<Alias>;

    /// 保存順で全件取得する
    async fn list(&self) -> AliasResult<Vec<Alias>>;

    /// 既存のエイリアスを更新する
    async fn update(&self, alias: &Alias) -> AliasResult<()>;

    /// 名前で削除する
    async fn delete(&self, name: &str) -> AliasResult<()>;
}

// AliasRepository for Box<dyn AliasRepository>
#[async_trait]
impl AliasRepository for Box<dyn AliasRepository> {
    async fn save(&self, alias: &Alias) -> AliasResult<()> {
        self.as_ref().save(alias).await
    }

    async fn find_by_name(&self, name: &str) -> AliasResult<Alias> {
        self.as_ref().find_by_name(name).await
    }

    async fn list(&self) -> AliasResult<Vec<Alias>> {
        self.as_ref().list().await
    }

    async fn update(&self, alias: &Alias) -> AliasResult<()> {
        self.as_ref().update(alias).await
    }

    async fn delete(&self, name: &str) -> AliasResult<()> {
        self.as_ref().delete(name).await
    }
}

/// 設定の storage_type に応じたリポジトリを作成
pub fn create_repository(config: &Config) -> Box<dyn AliasRepository> {
    match config.storage_type {
        StorageType::Json => Box::new(json::JsonAliasRepository::new(
            FileManager::new(config).alias_file_path(),
        )),
        StorageType::Memory => Box::new(memory::MemoryAliasRepository::new()),
    }
}

/// 名前が一致する位置を探す（json / memory 共通）
pub(crate) fn position_of(aliases: &[Alias], name: &str) -> Option<usize> {
    aliases.iter().position(|a| a.name == name)
}
