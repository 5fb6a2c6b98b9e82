// エイリアス管理のカスタムエラー型定義

use thiserror::Error;

/// エイリアス管理で発生するエラー
#[derive(Error, Debug)]
pub enum AliasError {
    #[error("alias name cannot be empty")]
    EmptyAliasName,

    #[error("alias command cannot be empty")]
    EmptyAliasCommand,

    #[error("alias '{name}' not found")]
    AliasNotFound { name: String },

    #[error("alias '{name}' already exists")]
    AliasExists { name: String },

    #[error("storage error: {path}")]
    Storage {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    #[error("failed to execute command: {command}")]
    CommandExecutionFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl AliasError {
    /// 未登録エラーの作成
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::AliasNotFound { name: name.into() }
    }

    /// 重複エラーの作成
    pub fn exists(name: impl Into<String>) -> Self {
        Self::AliasExists { name: name.into() }
    }

    /// ストレージエラーの作成
    pub fn storage(path: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// コマンド実行エラーの作成
    pub fn command_execution(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandExecutionFailed {
            command: command.into(),
            source,
        }
    }

    /// エイリアス未登録かどうか
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AliasNotFound { .. })
    }

    /// ユーザー向けの対処方法を取得
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::AliasNotFound { .. } => {
                Some("Use 'mantrid alias list' to see available aliases".to_string())
            }
            Self::AliasExists { name } => Some(format!(
                "Use 'mantrid alias edit {name} <command>' to change it"
            )),
            Self::Storage { path, .. } => {
                Some(format!("Check that {path} is readable and contains valid JSON"))
            }
            Self::Configuration { .. } => {
                Some("Run 'mantrid config example' to see a valid configuration".to_string())
            }
            _ => None,
        }
    }
}

/// エイリアス管理の結果型
pub type AliasResult<T> = Result<T, AliasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AliasError::EmptyAliasName.to_string(),
            "alias name cannot be empty"
        );
        assert_eq!(
            AliasError::EmptyAliasCommand.to_string(),
            "alias command cannot be empty"
        );
        assert_eq!(
            AliasError::not_found("deploy").to_string(),
            "alias 'deploy' not found"
        );
        assert_eq!(
            AliasError::exists("ls").to_string(),
            "alias 'ls' already exists"
        );
    }

    #[test]
    fn test_storage_error_keeps_source() {
        let error = AliasError::storage("/tmp/aliases.json", anyhow::anyhow!("expected value"));
        assert_eq!(error.to_string(), "storage error: /tmp/aliases.json");
        assert!(std::error::Error::source(&error).is_some());

        // 原因はエラーチェーンで1回だけ表示される
        let chained = format!("{:#}", anyhow::Error::from(error));
        assert_eq!(chained, "storage error: /tmp/aliases.json: expected value");
    }

    #[test]
    fn test_command_execution_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "sh missing");
        let error = AliasError::command_execution("echo hi", io_error);
        assert_eq!(error.to_string(), "failed to execute command: echo hi");
        assert!(error.suggestion().is_none());

        let chained = format!("{:#}", anyhow::Error::from(error));
        assert_eq!(chained, "failed to execute command: echo hi: sh missing");
    }

    #[test]
    fn test_is_not_found() {
        assert!(AliasError::not_found("x").is_not_found());
        assert!(!AliasError::EmptyAliasName.is_not_found());
    }

    #[test]
    fn test_suggestions() {
        assert!(AliasError::not_found("x")
            .suggestion()
            .unwrap()
            .contains("mantrid alias list"));
        assert!(AliasError::exists("x")
            .suggestion()
            .unwrap()
            .contains("mantrid alias edit x"));
        assert!(AliasError::configuration("bad level")
            .suggestion()
            .unwrap()
            .contains("config example"));
        assert!(AliasError::EmptyAliasCommand.suggestion().is_none());
    }
}
