use crate::models::{DEFAULT_LEAF_CAPACITY, DEFAULT_MAX_UNDO};
use serde::{Deserialize, Serialize};

/// 搜索框查询长度上限（字节）
pub const DEFAULT_SEARCH_QUERY_MAX: usize = 255;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub rope_leaf_capacity: usize,
    pub max_undo: usize,
    /// PageUp / PageDown 一次移动的行数
    pub page_lines: usize,
    #[serde(alias = "tab_size")]
    pub tab_width: u8,
    pub use_spaces: bool,
    pub search_case_sensitive: bool,
    pub search_query_max: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            rope_leaf_capacity: DEFAULT_LEAF_CAPACITY,
            max_undo: DEFAULT_MAX_UNDO,
            page_lines: 20,
            tab_width: 4,
            use_spaces: true,
            search_case_sensitive: false,
            search_query_max: DEFAULT_SEARCH_QUERY_MAX,
        }
    }
}

impl EditorConfig {
    /// Tab 键插入的内容
    pub fn tab_text(&self) -> Vec<u8> {
        if self.use_spaces {
            vec![b' '; self.tab_width as usize]
        } else {
            vec![b'\t']
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
