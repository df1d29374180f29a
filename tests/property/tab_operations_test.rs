//! Property-based tests for window tab operations.
//!
//! For any sequence of adds, closes and activations, the window keeps at least one tab,
//! keeps exactly one active tab, and every closed tab's view is released exactly once.

use cbrowser::config::BrowserConfig;
use cbrowser::engine::headless::{HeadlessFactory, Journal, ViewCall};
use cbrowser::managers::main_window::{MainWindow, MainWindowTrait};
use proptest::prelude::*;

/// Operations that can be performed on the window.
#[derive(Debug, Clone)]
enum TabOp {
    Add,
    AddBlank,
    Close(usize), // index into the current tab list, taken modulo its length
    Activate(usize),
}

fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => Just(TabOp::Add),
            1 => Just(TabOp::AddBlank),
            3 => (0..20usize).prop_map(TabOp::Close),
            1 => (0..20usize).prop_map(TabOp::Activate),
        ],
        1..60,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tab_count_never_drops_below_one(ops in arb_tab_ops()) {
        let journal = Journal::new();
        let mut window = MainWindow::new(BrowserConfig::default(), HeadlessFactory::new(journal.clone())).unwrap();
        window.add_blank_tab().unwrap();
        let mut expected_count: usize = 1;

        for op in &ops {
            match op {
                TabOp::Add => {
                    window.add_tab("https://example.com", "Example").unwrap();
                    expected_count += 1;
                }
                TabOp::AddBlank => {
                    window.add_blank_tab().unwrap();
                    expected_count += 1;
                }
                TabOp::Close(idx) => {
                    let pick = idx % window.tab_count();
                    window.close_tab(pick).unwrap();
                    if expected_count > 1 {
                        expected_count -= 1;
                    }
                }
                TabOp::Activate(idx) => {
                    let pick = idx % window.tab_count();
                    window.activate_tab(pick).unwrap();
                    prop_assert_eq!(window.active_index(), Some(pick));
                }
            }

            prop_assert!(window.tab_count() >= 1);
            prop_assert_eq!(window.tab_count(), expected_count);
            prop_assert!(window.active_index().is_some());
        }

        let released = journal
            .entries()
            .iter()
            .filter(|(_, call)| *call == ViewCall::Released)
            .count();
        let created = journal
            .entries()
            .iter()
            .filter(|(_, call)| matches!(call, ViewCall::Created { .. }))
            .count();
        prop_assert_eq!(created - released, window.tab_count());
    }
}
