//! 内存剪贴板：无界面宿主和测试使用
//!
//! 超过上限的内容被拒绝（`ClipboardError::TooLarge`），原有内容保留。

use crate::kernel::services::ports::{Clipboard, ClipboardError};

const COPY_MAX_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    content: Option<Vec<u8>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            content: Some(bytes.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.as_ref().map_or(true, |c| c.is_empty())
    }

    pub fn clear(&mut self) {
        self.content = None;
    }
}

impl Clipboard for MemoryClipboard {
    fn get(&self) -> Option<Vec<u8>> {
        self.content.clone()
    }

    fn set(&mut self, bytes: Vec<u8>) -> Result<(), ClipboardError> {
        if bytes.len() > COPY_MAX_SIZE {
            return Err(ClipboardError::TooLarge(bytes.len()));
        }
        self.content = Some(bytes);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/clipboard.rs"]
mod tests;
