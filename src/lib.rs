//! zedit - 无界面文本编辑核心库
//!
//! 模块结构：
//! - models: 数据模型（RopeBuffer, EditCommandLog, CursorModel, Selection）
//! - core: 语义命令（Command）
//! - kernel: 编辑器核心（TextEditorCore, SearchIndex）与服务层（ports / adapters）

pub mod core;
pub mod kernel;
pub mod models;
