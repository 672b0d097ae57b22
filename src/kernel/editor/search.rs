//! 搜索索引：对文本快照做字面子串扫描，按文本版本号缓存结果
//!
//! 只有在查询非空、搜索框打开且文本版本前进时才需要重新扫描；
//! 单纯的时间流逝或重复调用不会触发扫描。

use crate::kernel::services::ports::config::DEFAULT_SEARCH_QUERY_MAX;

use super::state::TextEditorCore;

/// 朴素 O(n·m) 扫描，返回所有（可重叠的）匹配起点，升序
pub fn find_all(haystack: &[u8], needle: &[u8], case_sensitive: bool) -> Vec<usize> {
    let (n, m) = (haystack.len(), needle.len());
    if m == 0 || n < m {
        return Vec::new();
    }

    let eq = |a: u8, b: u8| {
        if case_sensitive {
            a == b
        } else {
            a.to_ascii_lowercase() == b.to_ascii_lowercase()
        }
    };

    (0..=n - m)
        .filter(|&start| {
            haystack[start..start + m]
                .iter()
                .zip(needle)
                .all(|(&a, &b)| eq(a, b))
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct SearchIndex {
    active: bool,
    query: String,
    case_sensitive: bool,
    matches: Vec<usize>,
    current_match_index: usize,
    version_at_search: Option<u64>,
    query_max: usize,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::with_query_max(DEFAULT_SEARCH_QUERY_MAX)
    }

    pub fn with_query_max(query_max: usize) -> Self {
        Self {
            active: false,
            query: String::new(),
            case_sensitive: false,
            matches: Vec::new(),
            current_match_index: 0,
            version_at_search: None,
            query_max,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn current_match_index(&self) -> Option<usize> {
        (!self.matches.is_empty()).then_some(self.current_match_index)
    }

    pub fn current_match(&self) -> Option<usize> {
        self.matches.get(self.current_match_index).copied()
    }

    pub fn version_at_search(&self) -> Option<u64> {
        self.version_at_search
    }

    /// 打开搜索框，保留已有查询
    pub fn open(&mut self) {
        self.active = true;
    }

    /// 关闭搜索框并清空匹配；保留查询，重新打开时会重扫
    pub fn close(&mut self) {
        self.active = false;
        self.matches.clear();
        self.current_match_index = 0;
        self.version_at_search = None;
    }

    /// 替换查询，超长部分在字符边界处截断；返回查询是否变化
    pub fn set_query(&mut self, query: &str) -> bool {
        let mut end = query.len().min(self.query_max);
        while !query.is_char_boundary(end) {
            end -= 1;
        }
        let query = &query[..end];
        if self.query == query {
            return false;
        }
        self.query.clear();
        self.query.push_str(query);
        true
    }

    /// 追加一个字符；超过长度上限时忽略
    pub fn push_query(&mut self, c: char) -> bool {
        if self.query.len() + c.len_utf8() > self.query_max {
            return false;
        }
        self.query.push(c);
        true
    }

    /// 删除最后一个字符
    pub fn pop_query(&mut self) -> bool {
        self.query.pop().is_some()
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.case_sensitive = case_sensitive;
    }

    pub fn toggle_case_sensitive(&mut self) -> bool {
        self.case_sensitive = !self.case_sensitive;
        self.case_sensitive
    }

    /// 设置查询并立即扫描，返回第一个匹配（调用方把光标移过去）
    pub fn update(
        &mut self,
        query: &str,
        case_sensitive: bool,
        snapshot: &[u8],
        version: u64,
    ) -> Option<usize> {
        self.set_query(query);
        self.case_sensitive = case_sensitive;
        self.rescan(snapshot, version)
    }

    /// 用当前查询重新扫描
    pub fn rescan(&mut self, snapshot: &[u8], version: u64) -> Option<usize> {
        self.current_match_index = 0;
        if self.query.is_empty() {
            self.matches.clear();
            return None;
        }

        self.matches = find_all(snapshot, self.query.as_bytes(), self.case_sensitive);
        self.version_at_search = Some(version);
        tracing::debug!(
            query_len = self.query.len(),
            matches = self.matches.len(),
            case_sensitive = self.case_sensitive,
            version,
            "search rescanned"
        );
        self.matches.first().copied()
    }

    pub fn needs_refresh(&self, version: u64) -> bool {
        self.active && !self.query.is_empty() && self.version_at_search != Some(version)
    }

    /// 循环前进到下一个匹配
    pub fn next_match(&mut self) -> Option<usize> {
        if self.matches.is_empty() {
            return None;
        }
        self.current_match_index = (self.current_match_index + 1) % self.matches.len();
        self.current_match()
    }

    /// 循环后退到上一个匹配
    pub fn prev_match(&mut self) -> Option<usize> {
        if self.matches.is_empty() {
            return None;
        }
        self.current_match_index = match self.current_match_index {
            0 => self.matches.len() - 1,
            i => i - 1,
        };
        self.current_match()
    }
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== 编辑器上的搜索动作 ====================

impl TextEditorCore {
    pub fn search_open(&mut self) {
        self.search.open();
        self.refresh_search();
    }

    pub fn search_close(&mut self) {
        self.search.close();
    }

    pub fn search_set_query(&mut self, query: &str) -> bool {
        self.search.set_query(query);
        self.rescan_and_jump()
    }

    pub fn search_push_char(&mut self, c: char) -> bool {
        if !self.search.push_query(c) {
            return false;
        }
        self.rescan_and_jump()
    }

    pub fn search_pop_char(&mut self) -> bool {
        if !self.search.pop_query() {
            return false;
        }
        self.rescan_and_jump()
    }

    pub fn search_toggle_case(&mut self) -> bool {
        self.search.toggle_case_sensitive();
        self.rescan_and_jump()
    }

    pub fn search_next(&mut self) -> bool {
        match self.search.next_match() {
            Some(pos) => {
                self.cursor.set_cursor(&self.rope, pos);
                true
            }
            None => false,
        }
    }

    pub fn search_prev(&mut self) -> bool {
        match self.search.prev_match() {
            Some(pos) => {
                self.cursor.set_cursor(&self.rope, pos);
                true
            }
            None => false,
        }
    }

    /// 文本版本前进后按需重扫；返回是否真的扫描了
    pub fn refresh_search(&mut self) -> bool {
        if !self.search.needs_refresh(self.version) {
            return false;
        }
        self.rescan_and_jump();
        true
    }

    /// 重新扫描，有匹配时光标跳到第一个；返回是否有匹配
    fn rescan_and_jump(&mut self) -> bool {
        let snapshot = self.rope.to_bytes();
        match self.search.rescan(&snapshot, self.version) {
            Some(pos) => {
                self.cursor.set_cursor(&self.rope, pos);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/search.rs"]
mod tests;
