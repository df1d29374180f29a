use cbrowser::config::{BrowserConfig, EngineSettings, DEFAULT_URL, SPOOFED_USER_AGENT};

#[test]
fn default_window_matches_cbrowser_layout() {
    let config = BrowserConfig::default();
    assert_eq!(config.window.title, "CBrowser");
    assert_eq!(
        (config.window.x, config.window.y, config.window.width, config.window.height),
        (100, 100, 1200, 800)
    );
}

#[test]
fn default_start_page_and_user_agent() {
    let config = BrowserConfig::default();
    assert_eq!(config.default_url, "https://cbrowser.colebolebole.site/");
    assert_eq!(config.default_url, DEFAULT_URL);
    assert_eq!(config.new_tab_title, "New Tab");
    assert_eq!(
        config.user_agent,
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36"
    );
    assert_eq!(config.user_agent, SPOOFED_USER_AGENT);
}

#[test]
fn engine_flags_enable_everything_but_hyperlink_auditing() {
    let settings = EngineSettings::default();
    assert!(settings.local_storage);
    assert!(settings.plugins);
    assert!(settings.auto_load_images);
    assert!(settings.javascript);
    assert!(settings.full_screen_support);
    assert!(!settings.hyperlink_auditing);
}

#[test]
fn local_storage_does_not_imply_persistent_profile() {
    let settings = EngineSettings::default();
    assert!(settings.local_storage);
    assert!(settings.off_the_record);
}

#[test]
fn global_config_is_initialised_once() {
    let a = BrowserConfig::global();
    let b = BrowserConfig::global();
    assert!(std::ptr::eq(a, b));
    assert_eq!(*a, BrowserConfig::default());
}

#[test]
fn config_serializes_to_json() {
    let config = BrowserConfig::default();
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["window"]["width"], 1200);
    assert_eq!(json["engine"]["hyperlink_auditing"], false);
    let back: BrowserConfig = serde_json::from_value(json).unwrap();
    assert_eq!(back, config);
}
