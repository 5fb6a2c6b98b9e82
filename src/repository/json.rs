use super::{position_of, AliasRepository};
use crate::domain::{Alias, AliasError, AliasResult};
use anyhow::Context;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// JSONファイル1つに全エイリアスを保存するリポジトリ
///
/// 読み書きのたびにファイル全体を読み直す。プロセス内の同時アクセスは
/// RwLock で直列化する（プロセス間のロックは行わない）。
pub struct JsonAliasRepository {
    file_path: PathBuf,
    lock: RwLock<()>,
}

impl JsonAliasRepository {
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            lock: RwLock::new(()),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn storage_error(&self, source: anyhow::Error) -> AliasError {
        AliasError::storage(self.file_path.display().to_string(), source)
    }

    async fn read_aliases(&self) -> AliasResult<Vec<Alias>> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }

        let data = tokio::fs::read_to_string(&self.file_path)
            .await
            .context("Failed to read alias file")
            .map_err(|e| self.storage_error(e))?;

        serde_json::from_str(&data)
            .context("Failed to parse alias file")
            .map_err(|e| self.storage_error(e))
    }

    async fn write_aliases(&self, aliases: &[Alias]) -> AliasResult<()> {
        let data = serde_json::to_string_pretty(aliases)
            .context("Failed to serialize aliases")
            .map_err(|e| self.storage_error(e))?;

        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))
                    .map_err(|e| self.storage_error(e))?;
            }
        }

        tokio::fs::write(&self.file_path, data)
            .await
            .context("Failed to write alias file")
            .map_err(|e| self.storage_error(e))
    }
}

#[async_trait]
impl AliasRepository for JsonAliasRepository {
    async fn save(&self, alias: &Alias) -> AliasResult<()> {
        let _guard = self.lock.write().await;

        let mut aliases = self.read_aliases().await?;
        match position_of(&aliases, &alias.name) {
            Some(index) => aliases[index] = alias.clone(),
            None => aliases.push(alias.clone()),
        }
        self.write_aliases(&aliases).await
    }

    async fn find_by_name(&self, name: &str) -> AliasResult<Alias> {
        let _guard = self.lock.read().await;

        self.read_aliases()
            .await?
            .into_iter()
            .find(|a| a.name == name)
            .ok_or_else(|| AliasError::not_found(name))
    }

    async fn list(&self) -> AliasResult<Vec<Alias>> {
        let _guard = self.lock.read().await;
        self.read_aliases().await
    }

    async fn update(&self, alias: &Alias) -> AliasResult<()> {
        let _guard = self.lock.write().await;

        let mut aliases = self.read_aliases().await?;
        let index =
            position_of(&aliases, &alias.name).ok_or_else(|| AliasError::not_found(&alias.name))?;
        aliases[index] = alias.clone();
        self.write_aliases(&aliases).await
    }

    async fn delete(&self, name: &str) -> AliasResult<()> {
        let _guard = self.lock.write().await;

        let mut aliases = self.read_aliases().await?;
        let index = position_of(&aliases, name).ok_or_else(|| AliasError::not_found(name))?;
        aliases.remove(index);
        self.write_aliases(&aliases).await
    }
}
