//! Kernel: 编辑器核心与服务层

pub mod editor;
pub mod services;

pub use editor::{SearchIndex, TextEditorCore};
