// 設定管理
//
// デフォルト値 → YAML設定ファイル → MANTRID_* 環境変数 の順に上書きする。

pub mod paths;

use crate::domain::{AliasError, AliasResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub use paths::{default_config_dir, FileManager};

/// 環境変数のプレフィックス
pub const ENV_PREFIX: &str = "MANTRID_";

/// 設定ファイル名
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// エイリアスの保存方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    Json,
    Memory,
}

/// ログ出力レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl FromStr for StorageType {
    type Err = AliasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "memory" => Ok(Self::Memory),
            other => Err(AliasError::configuration(format!("invalid storage type: {other}"))),
        }
    }
}

impl FromStr for LogLevel {
    type Err = AliasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(AliasError::configuration(format!("invalid log level: {other}"))),
        }
    }
}

impl FromStr for LogFormat {
    type Err = AliasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => Err(AliasError::configuration(format!("invalid log format: {other}"))),
        }
    }
}

/// アプリケーション設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// エイリアスファイルのパス（`~` で始まる場合はホームに展開される）
    pub alias_file: String,
    pub storage_type: StorageType,
    pub log_level: LogLevel,
    pub log_format: LogFormat,
    /// クラウド同期（予約済み、現在は読み込むだけ）
    pub cloud_enabled: bool,
    pub cloud_url: String,
}

impl Config {
    /// 指定ディレクトリを基準にしたデフォルト設定
    pub fn defaults_in(config_dir: &Path) -> Self {
        Self {
            alias_file: config_dir.join("aliases.json").to_string_lossy().to_string(),
            storage_type: StorageType::Json,
            log_level: LogLevel::Info,
            log_format: LogFormat::Json,
            cloud_enabled: false,
            cloud_url: String::new(),
        }
    }

    /// 標準の探索順で設定を読み込む
    pub fn load() -> AliasResult<Self> {
        ConfigLoader::new().load()
    }

    /// 設定ファイルの記述例
    pub fn example() -> &'static str {
        r#"
# Storage configuration
alias_file: "~/.mantrid/aliases.json"
storage_type: "json"

# Logging configuration
log_level: "info"
log_format: "json"

# Cloud sync configuration
cloud_enabled: false
cloud_url: ""
"#
    }
}

/// 設定ファイルの内容（全項目省略可）
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    alias_file: Option<String>,
    storage_type: Option<String>,
    log_level: Option<String>,
    log_format: Option<String>,
    cloud_enabled: Option<bool>,
    cloud_url: Option<String>,
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// 設定の読み込み元を組み立てるローダー
pub struct ConfigLoader {
    config_dir: PathBuf,
    search_paths: Vec<PathBuf>,
    env: EnvLookup,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// `~/.mantrid` → カレントディレクトリの順で探索し、プロセスの環境変数を使う
    pub fn new() -> Self {
        let config_dir = default_config_dir();
        Self {
            search_paths: vec![config_dir.clone(), PathBuf::from(".")],
            config_dir,
            env: Box::new(|key| std::env::var(key).ok()),
        }
    }

    /// 設定ディレクトリを差し替える（探索パスもそのディレクトリのみになる）
    pub fn with_config_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.config_dir = dir.as_ref().to_path_buf();
        self.search_paths = vec![self.config_dir.clone()];
        self
    }

    /// 環境変数の参照方法を差し替える
    pub fn with_env<F>(mut self, env: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.env = Box::new(env);
        self
    }

    fn env_var(&self, key: &str) -> Option<String> {
        (self.env)(&format!("{ENV_PREFIX}{key}"))
    }

    /// 読み込む設定ファイルを決める。明示指定がなく見つからなければ None
    fn config_file_path(&self) -> AliasResult<Option<PathBuf>> {
        if let Some(explicit) = self.env_var("CONFIG").filter(|p| !p.is_empty()) {
            let path = PathBuf::from(explicit);
            if !path.exists() {
                return Err(AliasError::configuration(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Some(path));
        }

        Ok(self
            .search_paths
            .iter()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|path| path.is_file()))
    }

    fn read_config_file(path: &Path) -> AliasResult<ConfigFile> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AliasError::configuration(format!("failed to read config file {}: {e}", path.display()))
        })?;

        if content.trim().is_empty() {
            return Ok(ConfigFile::default());
        }

        serde_yml::from_str(&content).map_err(|e| {
            AliasError::configuration(format!("failed to parse config file {}: {e}", path.display()))
        })
    }

    pub fn load(&self) -> AliasResult<Config> {
        let mut config = Config::defaults_in(&self.config_dir);

        if let Some(path) = self.config_file_path()? {
            let file = Self::read_config_file(&path)?;
            apply_file(&mut config, file)?;
        }

        self.apply_env(&mut config)?;
        Ok(config)
    }

    fn apply_env(&self, config: &mut Config) -> AliasResult<()> {
        if let Some(value) = self.env_var("ALIAS_FILE") {
            config.alias_file = value;
        }
        if let Some(value) = self.env_var("STORAGE_TYPE") {
            config.storage_type = value.parse()?;
        }
        if let Some(value) = self.env_var("LOG_LEVEL") {
            config.log_level = value.parse()?;
        }
        if let Some(value) = self.env_var("LOG_FORMAT") {
            config.log_format = value.parse()?;
        }
        if let Some(value) = self.env_var("CLOUD_ENABLED") {
            config.cloud_enabled = parse_bool(&value)?;
        }
        if let Some(value) = self.env_var("CLOUD_URL") {
            config.cloud_url = value;
        }
        Ok(())
    }
}

fn apply_file(config: &mut Config, file: ConfigFile) -> AliasResult<()> {
    if let Some(value) = file.alias_file {
        config.alias_file = value;
    }
    if let Some(value) = file.storage_type {
        config.storage_type = value.parse()?;
    }
    if let Some(value) = file.log_level {
        config.log_level = value.parse()?;
    }
    if let Some(value) = file.log_format {
        config.log_format = value.parse()?;
    }
    if let Some(value) = file.cloud_enabled {
        config.cloud_enabled = value;
    }
    if let Some(value) = file.cloud_url {
        config.cloud_url = value;
    }
    Ok(())
}

fn parse_bool(value: &str) -> AliasResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(AliasError::configuration(format!("invalid boolean: {other}"))),
    }
}
