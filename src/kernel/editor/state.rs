//! 编辑器核心状态：文本 + 编辑历史 + 光标 + 搜索
//!
//! 版本号在每次文本变更（编辑、撤销、重做、打开文件）后单调递增，
//! 外部缓存（布局、搜索）比较自己记录的版本号来决定是否重算。

use std::path::{Path, PathBuf};

use crate::kernel::services::ports::{EditorConfig, FileError, FileProvider, FileResult};
use crate::models::{CursorModel, EditCommandLog, RopeBuffer};

use super::search::SearchIndex;

#[derive(Debug, Clone)]
pub struct TextEditorCore {
    pub(super) rope: RopeBuffer,
    pub(super) log: EditCommandLog,
    pub(super) cursor: CursorModel,
    pub(super) search: SearchIndex,
    pub(super) config: EditorConfig,
    pub(super) version: u64,
    saved_version: u64,
    path: Option<PathBuf>,
}

impl TextEditorCore {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let mut search = SearchIndex::with_query_max(config.search_query_max);
        search.set_case_sensitive(config.search_case_sensitive);
        Self {
            rope: RopeBuffer::with_leaf_capacity(config.rope_leaf_capacity),
            log: EditCommandLog::with_max_undo(config.max_undo),
            cursor: CursorModel::new(),
            search,
            config,
            version: 0,
            saved_version: 0,
            path: None,
        }
    }

    /// 以给定文本开始，光标在开头，历史为空
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_bytes_with_config(bytes, EditorConfig::default())
    }

    pub fn from_bytes_with_config(bytes: &[u8], config: EditorConfig) -> Self {
        let mut core = Self::with_config(config);
        core.rope = RopeBuffer::from_bytes_with_capacity(bytes, core.config.rope_leaf_capacity);
        core
    }

    // ==================== 查询 ====================

    pub fn len(&self) -> usize {
        self.rope.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.is_empty()
    }

    pub fn text(&self) -> Vec<u8> {
        self.rope.to_bytes()
    }

    /// 非法 UTF-8 替换为 U+FFFD
    pub fn text_lossy(&self) -> String {
        self.rope.to_string_lossy()
    }

    pub fn substring(&self, pos: usize, len: usize) -> Vec<u8> {
        self.rope.copy(pos, len)
    }

    /// 偏移所在的 (行, 列)，都从 0 开始，列按字节计
    pub fn line_col(&self, pos: usize) -> (usize, usize) {
        let pos = pos.min(self.rope.len());
        (self.rope.line_number(pos), pos - self.rope.line_start(pos))
    }

    pub fn line_count(&self) -> usize {
        self.rope.line_count()
    }

    pub fn cursor(&self) -> usize {
        self.cursor.pos()
    }

    pub fn cursor_model(&self) -> &CursorModel {
        &self.cursor
    }

    pub fn has_selection(&self) -> bool {
        self.cursor.has_selection()
    }

    pub fn selection_range(&self) -> Option<(usize, usize)> {
        self.cursor.selection_range()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn rope(&self) -> &RopeBuffer {
        &self.rope
    }

    pub fn history(&self) -> &EditCommandLog {
        &self.log
    }

    pub fn can_undo(&self) -> bool {
        self.log.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.log.can_redo()
    }

    pub fn search(&self) -> &SearchIndex {
        &self.search
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 上次打开 / 保存之后是否有变更
    pub fn is_modified(&self) -> bool {
        self.version != self.saved_version
    }

    pub(super) fn bump_version(&mut self) {
        self.version += 1;
    }

    // ==================== 导航 ====================

    pub fn move_left(&mut self, shift: bool) {
        self.cursor.move_left(&self.rope, shift);
    }

    pub fn move_right(&mut self, shift: bool) {
        self.cursor.move_right(&self.rope, shift);
    }

    pub fn move_up(&mut self, shift: bool) {
        self.cursor.move_up(&self.rope, shift);
    }

    pub fn move_down(&mut self, shift: bool) {
        self.cursor.move_down(&self.rope, shift);
    }

    pub fn move_home(&mut self, shift: bool) {
        self.cursor.move_home(&self.rope, shift);
    }

    pub fn move_end(&mut self, shift: bool) {
        self.cursor.move_end(&self.rope, shift);
    }

    pub fn move_buffer_start(&mut self, shift: bool) {
        self.cursor.move_buffer_start(shift);
    }

    pub fn move_buffer_end(&mut self, shift: bool) {
        self.cursor.move_buffer_end(&self.rope, shift);
    }

    pub fn page_up(&mut self, shift: bool) {
        self.cursor
            .page_up(&self.rope, self.config.page_lines, shift);
    }

    pub fn page_down(&mut self, shift: bool) {
        self.cursor
            .page_down(&self.rope, self.config.page_lines, shift);
    }

    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor.set_cursor(&self.rope, pos);
    }

    pub fn begin_drag(&mut self, pos: usize) {
        self.cursor.begin_drag(&self.rope, pos);
    }

    pub fn drag_to(&mut self, pos: usize) {
        self.cursor.drag_to(&self.rope, pos);
    }

    pub fn end_drag(&mut self) {
        self.cursor.end_drag();
    }

    pub fn select_all(&mut self) {
        self.cursor.select_all(&self.rope);
    }

    pub fn clear_selection(&mut self) {
        self.cursor.clear_selection();
    }

    // ==================== 文件 ====================

    /// 读入整个文件替换当前文本；失败时当前文本保持不变
    pub fn open(&mut self, provider: &dyn FileProvider, path: &Path) -> FileResult<()> {
        let bytes = match provider.read_file_bytes(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "open failed");
                return Err(e);
            }
        };

        self.rope = RopeBuffer::from_bytes_with_capacity(&bytes, self.config.rope_leaf_capacity);
        self.cursor.reset();
        self.log.clear();
        self.bump_version();
        self.saved_version = self.version;
        self.path = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            bytes = self.rope.len(),
            lines = self.rope.line_count(),
            "file opened"
        );
        Ok(())
    }

    /// 写出整个文本；成功后该路径成为当前文件路径
    pub fn save(&mut self, provider: &dyn FileProvider, path: &Path) -> FileResult<()> {
        let bytes = self.rope.to_bytes();
        if let Err(e) = provider.write_file_bytes(path, &bytes) {
            tracing::warn!(path = %path.display(), error = %e, "save failed");
            return Err(e);
        }

        self.path = Some(path.to_path_buf());
        self.saved_version = self.version;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "file saved");
        Ok(())
    }

    /// 保存到当前文件路径
    pub fn save_current(&mut self, provider: &dyn FileProvider) -> FileResult<()> {
        let path = self.path.clone().ok_or(FileError::NoPath)?;
        self.save(provider, &path)
    }
}

impl Default for TextEditorCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/state.rs"]
mod tests;
