use super::*;

#[test]
fn test_paths_live_under_app_dir() {
    let Some(app_dir) = get_app_dir() else {
        return;
    };
    assert!(app_dir.ends_with("zedit"));

    let settings = get_settings_path().unwrap();
    assert_eq!(settings.parent(), Some(app_dir.as_path()));
    assert!(settings.ends_with("settings.json"));

    let logs = get_log_dir().unwrap();
    assert!(logs.ends_with("zedit/logs"));
}

#[test]
fn test_fallback_log_dir_in_temp() {
    let dir = fallback_log_dir();
    assert!(dir.starts_with(std::env::temp_dir()));
    assert!(dir.ends_with("zedit/logs"));
}
