use cbrowser::types::errors::*;

// === TabError Tests ===

#[test]
fn tab_error_not_found_display() {
    let err = TabError::NotFound("tab-123".to_string());
    assert_eq!(err.to_string(), "Tab not found: tab-123");
}

#[test]
fn tab_error_invalid_index_display() {
    let err = TabError::InvalidIndex(99);
    assert_eq!(err.to_string(), "Invalid tab index: 99");
}

#[test]
fn tab_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(TabError::InvalidIndex(0));
    assert!(err.source().is_none());
}

// === ShellError Tests ===

#[test]
fn shell_error_display_variants() {
    assert_eq!(
        ShellError::WindowBuild("no display".to_string()).to_string(),
        "Failed to build window: no display"
    );
    assert_eq!(
        ShellError::WebViewBuild("webview2 missing".to_string()).to_string(),
        "Failed to build web view: webview2 missing"
    );
    assert_eq!(
        ShellError::Engine("view destroyed".to_string()).to_string(),
        "Engine call failed: view destroyed"
    );
    assert_eq!(
        ShellError::InvalidHeader("bad\nvalue".to_string()).to_string(),
        "Invalid header value: bad\nvalue"
    );
}

#[test]
fn shell_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(ShellError::Engine("x".to_string()));
    assert!(err.source().is_none());
}
