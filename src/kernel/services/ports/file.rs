//! 文件读写 Provider trait
//!
//! 编辑器只做整文件读写，所以接口只保留字节级的读、写和存在性检查。

use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug)]
pub enum FileError {
    Io(io::Error),
    NotFound(PathBuf),
    NotAFile(PathBuf),
    /// 写入字节数少于缓冲区长度
    ShortWrite {
        path: PathBuf,
        written: usize,
        expected: usize,
    },
    /// 没有可用的保存路径
    NoPath,
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::Io(e) => write!(f, "IO error: {}", e),
            FileError::NotFound(p) => write!(f, "Not found: {}", p.display()),
            FileError::NotAFile(p) => write!(f, "Not a file: {}", p.display()),
            FileError::ShortWrite {
                path,
                written,
                expected,
            } => write!(
                f,
                "Short write to {}: {} of {} bytes",
                path.display(),
                written,
                expected
            ),
            FileError::NoPath => write!(f, "No file path"),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FileError {
    fn from(e: io::Error) -> Self {
        FileError::Io(e)
    }
}

pub trait FileProvider {
    fn scheme(&self) -> &'static str;

    fn read_file_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    fn write_file_bytes(&self, path: &Path, content: &[u8]) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/file.rs"]
mod tests;
