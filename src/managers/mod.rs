// CBrowser state managers
// The window owns the tab list; each tab owns its rendering view.

pub mod browser_tab;
pub mod main_window;
