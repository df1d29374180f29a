//! HTML for the chrome view (tab strip, navigation buttons, address field, progress bar).

/// Scheme serving the chrome page.
pub const CHROME_SCHEME: &str = "cbrowser";

/// URL of the chrome page. WebView2 maps custom schemes onto `http://<scheme>.<host>`.
#[cfg(windows)]
pub const CHROME_URL: &str = "http://cbrowser.localhost/";
#[cfg(not(windows))]
pub const CHROME_URL: &str = "cbrowser://localhost/";

const CHROME_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font:13px -apple-system,BlinkMacSystemFont,"Segoe UI",Helvetica,Arial,sans-serif;background:#202124;color:#e8eaed;user-select:none;overflow:hidden}
#strip{display:flex;align-items:flex-end;height:34px;padding:4px 6px 0}
#tabs{display:flex;flex:1;min-width:0}
.tab{display:flex;align-items:center;max-width:220px;min-width:60px;flex:1;height:30px;padding:0 8px;margin-right:2px;border-radius:8px 8px 0 0;background:#2d2e31;cursor:default}
.tab.active{background:#35363a}
.tab .label{flex:1;overflow:hidden;white-space:nowrap;text-overflow:ellipsis}
.tab .close,#new-tab,.nav{border:0;background:transparent;color:inherit;border-radius:4px;cursor:pointer}
.tab .close{width:18px;height:18px;margin-left:4px}
#new-tab{width:28px;height:28px;font-size:18px}
.tab .close:hover,#new-tab:hover,.nav:hover{background:#4a4b4f}
#toolbar{display:flex;align-items:center;gap:4px;height:34px;padding:0 6px;background:#35363a}
.nav{width:28px;height:28px;font-size:15px}
#address{flex:1;height:26px;padding:0 10px;border:0;border-radius:13px;background:#202124;color:inherit;outline:none}
#progress{height:4px;background:#35363a}
#progress-fill{height:100%;width:0;background:#8ab4f8;transition:width 120ms linear}
"#;

const CHROME_JS: &str = r#"(function(){
  function send(cmd, extra) {
    var msg = {cmd: cmd};
    if (extra) { for (var k in extra) msg[k] = extra[k]; }
    window.ipc.postMessage(JSON.stringify(msg));
  }
  var tabs = document.getElementById('tabs');
  var address = document.getElementById('address');
  var bar = document.getElementById('progress');
  var fill = document.getElementById('progress-fill');

  document.getElementById('new-tab').onclick = function(){ send('new_tab'); };
  document.getElementById('back').onclick = function(){ send('back'); };
  document.getElementById('forward').onclick = function(){ send('forward'); };
  document.getElementById('reload').onclick = function(){ send('reload'); };
  address.addEventListener('input', function(){ send('address_input', {text: address.value}); });
  address.addEventListener('keydown', function(e){
    if (e.key === 'Enter') { send('submit_address', {text: address.value}); address.blur(); }
  });

  window.__cb_updateChrome = function(state) {
    tabs.innerHTML = '';
    state.tabs.forEach(function(t){
      var el = document.createElement('div');
      el.className = 'tab' + (t.index === state.active_index ? ' active' : '');
      var label = document.createElement('span');
      label.className = 'label';
      label.textContent = t.title;
      el.title = t.title;
      el.appendChild(label);
      var close = document.createElement('button');
      close.className = 'close';
      close.textContent = '×';
      close.onclick = function(e){ e.stopPropagation(); send('close_tab', {index: t.index}); };
      el.appendChild(close);
      el.onclick = function(){ send('activate_tab', {index: t.index}); };
      tabs.appendChild(el);
    });
    var active = state.active_index === null ? undefined : state.tabs[state.active_index];
    if (!active) return;
    if (document.activeElement !== address) address.value = active.address;
    bar.style.visibility = active.progress.visible ? 'visible' : 'hidden';
    fill.style.width = active.progress.value + '%';
  };

  send('ui_ready');
})();"#;

const CHROME_BODY: &str = r#"<div id="strip"><div id="tabs"></div><button id="new-tab" title="New tab">+</button></div>
<div id="toolbar">
<button class="nav" id="back" title="Back">&lt;</button>
<button class="nav" id="forward" title="Forward">&gt;</button>
<button class="nav" id="reload" title="Reload">&#x21bb;</button>
<input id="address" type="text" spellcheck="false" autocomplete="off" />
</div>
<div id="progress"><div id="progress-fill"></div></div>"#;

/// Full chrome document.
pub fn chrome_html() -> String {
    let mut html = String::with_capacity(CHROME_CSS.len() + CHROME_JS.len() + CHROME_BODY.len() + 128);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str(CHROME_CSS);
    html.push_str("</style></head><body>");
    html.push_str(CHROME_BODY);
    html.push_str("<script>");
    html.push_str(CHROME_JS);
    html.push_str("</script></body></html>");
    html
}
