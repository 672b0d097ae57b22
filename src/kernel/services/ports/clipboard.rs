//! 剪贴板协作者：编辑器只交换原始字节，不接触系统剪贴板协议

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    NotAvailable,
    SetFailed(String),
    TooLarge(usize),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::NotAvailable => write!(f, "剪贴板不可用"),
            ClipboardError::SetFailed(e) => write!(f, "写入剪贴板失败: {}", e),
            ClipboardError::TooLarge(size) => {
                write!(f, "内容过大 ({} 字节)，超过 10MB 限制", size)
            }
        }
    }
}

impl std::error::Error for ClipboardError {}

pub trait Clipboard {
    fn get(&self) -> Option<Vec<u8>>;

    /// 写入失败时原有内容保持不变
    fn set(&mut self, bytes: Vec<u8>) -> Result<(), ClipboardError>;
}
