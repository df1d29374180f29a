//! Scripts run inside pages.
//!
//! - The post-load script runs once per completed navigation: it probes AAC support
//!   through `MediaSource` and masks `navigator.userAgent` when it does not look like
//!   Chrome.
//! - Initialization scripts run at document creation on every page: a ready-state
//!   progress reporter and, when hyperlink auditing is off, a `ping` attribute stripper.

use serde::Deserialize;

use crate::config::EngineSettings;
use crate::engine::ViewEvent;

/// Codec checked by the post-load probe.
pub const PROBED_CODEC: &str = r#"audio/mp4; codecs="mp4a.40.2""#;

const PROGRESS_REPORTER_JS: &str = r#"(function(){
  if (window.__cb_progress) return;
  window.__cb_progress = true;
  var levels = {loading: 10, interactive: 60, complete: 100};
  function report() {
    var v = levels[document.readyState];
    if (v !== undefined && window.ipc) {
      window.ipc.postMessage(JSON.stringify({cmd: 'progress', value: v}));
    }
  }
  report();
  document.addEventListener('readystatechange', report);
})();"#;

const PING_STRIPPER_JS: &str = r#"(function(){
  function strip(root) {
    if (!root.querySelectorAll) return;
    root.querySelectorAll('a[ping],area[ping]').forEach(function(a){ a.removeAttribute('ping'); });
  }
  document.addEventListener('DOMContentLoaded', function(){
    strip(document);
    new MutationObserver(function(records){
      records.forEach(function(r){
        r.addedNodes.forEach(function(n){
          if (n.nodeType !== 1) return;
          if (n.hasAttribute('ping')) n.removeAttribute('ping');
          strip(n);
        });
      });
    }).observe(document.documentElement, {childList: true, subtree: true});
  });
})();"#;

/// Builds the script executed after every completed load.
pub fn post_load_script(user_agent: &str) -> String {
    // JSON string literals are valid JS string literals.
    let ua = serde_json::to_string(user_agent).unwrap_or_else(|_| "\"\"".to_string());
    let codec = serde_json::to_string(PROBED_CODEC).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"(function(){{
  function checkMediaSupport() {{
    var mediaSource = new MediaSource();
    var supported = MediaSource.isTypeSupported({codec});
    if (!supported) {{
      console.warn('Media type not supported');
    }}
  }}
  checkMediaSupport();
  if (window.navigator.userAgent.indexOf('Chrome') === -1) {{
    window.navigator.__defineGetter__('userAgent', function(){{
      return {ua};
    }});
  }}
}})();"#
    )
}

/// Scripts installed on every view, according to its capability flags.
pub fn initialization_scripts(settings: &EngineSettings) -> Vec<String> {
    let mut scripts = vec![PROGRESS_REPORTER_JS.to_string()];
    if !settings.hyperlink_auditing {
        scripts.push(PING_STRIPPER_JS.to_string());
    }
    scripts
}

#[derive(Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
enum PageMessage {
    Progress { value: u32 },
}

/// Decodes an IPC message posted by a content page into a view event.
///
/// Anything a page posts that is not a known message is ignored.
pub fn parse_page_message(body: &str) -> Option<ViewEvent> {
    match serde_json::from_str::<PageMessage>(body).ok()? {
        PageMessage::Progress { value } => Some(ViewEvent::Progress(value.min(100) as u8)),
    }
}
