use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{AliasError, AliasResult};

/// 名前とコマンドテンプレートの組
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alias {
    /// 識別子（現在は未使用、ファイル互換のため保持）
    #[serde(default)]
    pub id: String,
    /// エイリアス名
    pub name: String,
    /// コマンドテンプレート（$1, $2, $@, $* を含み得る）
    pub command: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Alias {
    /// 検証済みのエイリアスを作成
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> AliasResult<Self> {
        let name = name.into();
        let command = command.into();
        validate(&name, &command)?;

        let now = Utc::now();
        Ok(Self {
            id: String::new(),
            name,
            command,
            created_at: now,
            updated_at: now,
        })
    }

    /// コマンドを差し替えて更新日時を進める
    pub fn update_command(&mut self, new_command: impl Into<String>) -> AliasResult<()> {
        let new_command = new_command.into();
        if new_command.is_empty() {
            return Err(AliasError::EmptyAliasCommand);
        }
        self.command = new_command;
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate(name: &str, command: &str) -> AliasResult<()> {
    if name.is_empty() {
        return Err(AliasError::EmptyAliasName);
    }
    if command.is_empty() {
        return Err(AliasError::EmptyAliasCommand);
    }
    Ok(())
}
