use super::*;
use std::error::Error;

#[test]
fn test_file_error_display() {
    let err = FileError::NotFound(PathBuf::from("/tmp/missing.txt"));
    assert_eq!(err.to_string(), "Not found: /tmp/missing.txt");

    let err = FileError::ShortWrite {
        path: PathBuf::from("out.txt"),
        written: 3,
        expected: 10,
    };
    assert_eq!(err.to_string(), "Short write to out.txt: 3 of 10 bytes");
    assert_eq!(FileError::NoPath.to_string(), "No file path");
}

#[test]
fn test_from_io_error_keeps_source() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    let err: FileError = io_err.into();
    assert!(matches!(err, FileError::Io(_)));
    assert!(err.source().is_some());
    assert!(FileError::NoPath.source().is_none());
}
