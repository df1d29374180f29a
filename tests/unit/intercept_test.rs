use cbrowser::config::SPOOFED_USER_AGENT;
use cbrowser::engine::intercept::UserAgentOverride;
use http::header::{HeaderValue, ACCEPT, USER_AGENT};
use http::Request;
use rstest::rstest;

#[rstest]
#[case::no_header(None)]
#[case::native_engine(Some("Mozilla/5.0 (X11; Linux x86_64) QtWebEngine/6.5.0"))]
#[case::already_spoofed(Some(SPOOFED_USER_AGENT))]
fn overwrites_user_agent_whatever_the_caller_set(#[case] original: Option<&str>) {
    let hook = UserAgentOverride::new(SPOOFED_USER_AGENT).unwrap();
    let mut builder = Request::builder().uri("https://example.com/app.js");
    if let Some(ua) = original {
        builder = builder.header(USER_AGENT, ua);
    }
    let mut request = builder.body(()).unwrap();

    hook.intercept(&mut request);

    let values: Vec<&HeaderValue> = request.headers().get_all(USER_AGENT).iter().collect();
    assert_eq!(values, vec![&HeaderValue::from_static(SPOOFED_USER_AGENT)]);
}

#[test]
fn leaves_other_headers_alone() {
    let hook = UserAgentOverride::new(SPOOFED_USER_AGENT).unwrap();
    let mut request = Request::builder()
        .uri("https://example.com/")
        .header(ACCEPT, "text/html")
        .header(USER_AGENT, "a")
        .header(USER_AGENT, "b")
        .body(())
        .unwrap();

    hook.intercept(&mut request);

    assert_eq!(request.headers().get(ACCEPT).unwrap(), "text/html");
    assert_eq!(request.headers().get_all(USER_AGENT).iter().count(), 1);
}

#[test]
fn exposes_value_as_text() {
    let hook = UserAgentOverride::new(SPOOFED_USER_AGENT).unwrap();
    assert_eq!(hook.as_str(), SPOOFED_USER_AGENT);
}

#[test]
fn rejects_values_that_are_not_header_safe() {
    assert!(UserAgentOverride::new("line\nbreak").is_err());
}
