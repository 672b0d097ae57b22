//! 核心抽象
//!
//! - Command: 语义命令，宿主输入层与编辑器核心之间的唯一协议

pub mod command;

pub use command::Command;
