use super::*;

#[test]
fn test_default_config() {
    let config = EditorConfig::default();
    assert_eq!(config.rope_leaf_capacity, 512);
    assert_eq!(config.max_undo, 1000);
    assert_eq!(config.page_lines, 20);
    assert_eq!(config.tab_width, 4);
    assert!(config.use_spaces);
    assert!(!config.search_case_sensitive);
    assert_eq!(config.search_query_max, 255);
}

#[test]
fn test_tab_text() {
    let mut config = EditorConfig::default();
    assert_eq!(config.tab_text(), b"    ");

    config.tab_width = 2;
    assert_eq!(config.tab_text(), b"  ");

    config.use_spaces = false;
    assert_eq!(config.tab_text(), b"\t");
}

#[test]
fn test_partial_json_falls_back_to_defaults() {
    let config: EditorConfig = serde_json::from_str(r#"{ "max_undo": 50 }"#).unwrap();
    assert_eq!(config.max_undo, 50);
    assert_eq!(config.rope_leaf_capacity, 512);
    assert_eq!(config.tab_width, 4);
}

#[test]
fn test_tab_size_alias() {
    let config: EditorConfig = serde_json::from_str(r#"{ "tab_size": 8 }"#).unwrap();
    assert_eq!(config.tab_width, 8);
}
