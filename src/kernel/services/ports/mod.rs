//! Service ports: traits + data contracts.

pub mod clipboard;
pub mod config;
pub mod file;

pub use clipboard::{Clipboard, ClipboardError};
pub use config::EditorConfig;
pub use file::{FileError, FileProvider, Result as FileResult};
