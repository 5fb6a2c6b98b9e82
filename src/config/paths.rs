use super::Config;
use std::path::{Path, PathBuf};

/// 設定ディレクトリ名
const APP_DIR_NAME: &str = ".mantrid";
const ALIAS_FILE_NAME: &str = "aliases.json";

/// 設定ディレクトリ（`~/.mantrid`、ホームが不明ならカレントディレクトリ）
pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// 先頭の `~` をホームディレクトリに展開する
fn expand_home(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// アプリケーションが扱うファイルパスの管理
#[derive(Debug, Clone)]
pub struct FileManager {
    alias_file: String,
}

impl FileManager {
    pub fn new(config: &Config) -> Self {
        Self {
            alias_file: config.alias_file.clone(),
        }
    }

    /// エイリアスファイルのパス
    pub fn alias_file_path(&self) -> PathBuf {
        if !self.alias_file.is_empty() {
            return expand_home(&self.alias_file);
        }

        match dirs::home_dir() {
            Some(home) => home.join(APP_DIR_NAME).join(ALIAS_FILE_NAME),
            None => Path::new(".").join(APP_DIR_NAME).join(ALIAS_FILE_NAME),
        }
    }

    /// エイリアスファイルの親ディレクトリを作成する
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        match self.alias_file_path().parent() {
            Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir),
            _ => Ok(()),
        }
    }
}
