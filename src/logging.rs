//! 二进制的日志初始化：按天滚动的日志文件，级别由 `ZEDIT_LOG` 控制

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use zedit::kernel::services::adapters::{ensure_log_dir, fallback_log_dir};

const LOG_ENV: &str = "ZEDIT_LOG";
const LOG_FILE_PREFIX: &str = "zedit.log";
const DEFAULT_DIRECTIVES: &str = "zedit=info";

/// 持有后台写线程；drop 时刷出剩余日志
pub struct LoggingGuard {
    _worker: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

fn resolve_log_dir() -> Option<PathBuf> {
    if let Ok(dir) = ensure_log_dir() {
        return Some(dir);
    }
    let dir = fallback_log_dir();
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// 已有全局 subscriber 或日志目录不可写时返回 None，程序照常运行
pub fn init() -> Option<LoggingGuard> {
    let log_dir = resolve_log_dir()?;

    let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (writer, worker) = tracing_appender::non_blocking(appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .try_init()
        .ok()?;

    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), version = env!("CARGO_PKG_VERSION"), "logging ready");

    Some(LoggingGuard {
        _worker: worker,
        log_dir,
    })
}
