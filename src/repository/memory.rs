use super::{position_of, AliasRepository};
use crate::domain::{Alias, AliasError, AliasResult};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// メモリ内保存のリポジトリ（`storage_type: memory` とテスト用）
#[derive(Debug, Clone, Default)]
pub struct MemoryAliasRepository {
    aliases: Arc<Mutex<Vec<Alias>>>,
}

impl MemoryAliasRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期データ付きで作成
    pub fn with_aliases(aliases: Vec<Alias>) -> Self {
        Self {
            aliases: Arc::new(Mutex::new(aliases)),
        }
    }

    /// テスト用：保存件数を取得
    pub fn stored_count(&self) -> usize {
        self.aliases.lock().unwrap().len()
    }
}

#[async_trait]
impl AliasRepository for MemoryAliasRepository {
    async fn save(&self, alias: &Alias) -> AliasResult<()> {
        let mut aliases = self.aliases.lock().unwrap();
        match position_of(&aliases, &alias.name) {
            Some(index) => aliases[index] = alias.clone(),
            None => aliases.push(alias.clone()),
        }
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> AliasResult<Alias> {
        let aliases = self.aliases.lock().unwrap();
        aliases
            .iter()
            .find(|a| a.name == name)
            .cloned()
            .ok_or_else(|| AliasError::not_found(name))
    }

    async fn list(&self) -> AliasResult<Vec<Alias>> {
        Ok(self.aliases.lock().unwrap().clone())
    }

    async fn update(&self, alias: &Alias) -> AliasResult<()> {
        let mut aliases = self.aliases.lock().unwrap();
        let index =
            position_of(&aliases, &alias.name).ok_or_else(|| AliasError::not_found(&alias.name))?;
        aliases[index] = alias.clone();
        Ok(())
    }

    async fn delete(&self, name: &str) -> AliasResult<()> {
        let mut aliases = self.aliases.lock().unwrap();
        let index = position_of(&aliases, name).ok_or_else(|| AliasError::not_found(name))?;
        aliases.remove(index);
        Ok(())
    }
}
