//! 配置服务：加载并持有编辑器配置
//!
//! 配置文件是 JSON，缺失字段取默认值。文件不存在或解析失败时回退到默认配置。

use crate::kernel::services::ports::config::EditorConfig;
use std::io;
use std::path::Path;

use super::paths::get_settings_path;

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "读取配置失败: {}", e),
            ConfigError::Parse(e) => write!(f, "解析配置失败: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

pub fn load_config(path: &Path) -> Result<EditorConfig, ConfigError> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

pub struct ConfigService {
    editor: EditorConfig,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            editor: EditorConfig::default(),
        }
    }

    pub fn with_editor_config(editor: EditorConfig) -> Self {
        Self { editor }
    }

    /// 从指定文件加载；失败时记录警告并使用默认配置
    pub fn load_from(path: &Path) -> Self {
        match load_config(path) {
            Ok(editor) => {
                tracing::info!(path = %path.display(), "config loaded");
                Self { editor }
            }
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Self::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "config ignored");
                Self::new()
            }
        }
    }

    /// 从平台缓存目录下的 settings.json 加载
    pub fn load() -> Self {
        match get_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::new(),
        }
    }

    pub fn editor(&self) -> &EditorConfig {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorConfig {
        &mut self.editor
    }

    pub fn into_editor(self) -> EditorConfig {
        self.editor
    }

    pub fn set_tab_width(&mut self, width: u8) {
        self.editor.tab_width = width;
    }

    pub fn set_use_spaces(&mut self, use_spaces: bool) {
        self.editor.use_spaces = use_spaces;
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/config.rs"]
mod tests;
