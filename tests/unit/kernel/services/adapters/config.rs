use super::*;
use tempfile::tempdir;

#[test]
fn test_config_service() {
    let mut service = ConfigService::new();
    assert_eq!(service.editor().tab_width, 4);

    service.set_tab_width(2);
    service.set_use_spaces(false);
    assert_eq!(service.editor().tab_width, 2);
    assert_eq!(service.editor().tab_text(), b"\t");
}

#[test]
fn test_load_config_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "page_lines": 10, "use_spaces": false }"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.page_lines, 10);
    assert!(!config.use_spaces);
    assert_eq!(config.max_undo, 1000);

    let service = ConfigService::load_from(&path);
    assert_eq!(service.editor().page_lines, 10);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");

    assert!(matches!(load_config(&path), Err(ConfigError::Io(_))));
    let service = ConfigService::load_from(&path);
    assert_eq!(service.into_editor(), EditorConfig::default());
}

#[test]
fn test_invalid_json_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("解析配置失败"));

    let service = ConfigService::load_from(&path);
    assert_eq!(service.editor(), &EditorConfig::default());
}
