//! Service adapters: OS specific implementations (IO).

pub mod clipboard;
pub mod config;
pub mod file;
pub mod paths;

pub use clipboard::MemoryClipboard;
pub use config::{load_config, ConfigError, ConfigService};
pub use file::LocalFileProvider;
pub use paths::{
    ensure_log_dir, fallback_log_dir, get_app_dir, get_cache_dir, get_log_dir, get_settings_path,
};
