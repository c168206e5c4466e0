//! Full banner sessions observed through the harness.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crumb_core::category::CHECKBOX_PREFIX;
use crumb_core::{Event, Selector, categories};
use crumb_harness::{SessionRecorder, checksum_view, framed, outline};
use crumb_runtime::{MemoryStorage, Program, StorageBackend};
use crumb_widgets::banner::DISMISS_SELECTOR;
use crumb_widgets::{BannerConfig, CookieBanner};

fn two_category_banner() -> CookieBanner {
    CookieBanner::new(BannerConfig::new(categories(["Analytics", "Marketing"])))
}

#[test]
fn banner_outline_matches_golden() {
    let storage = Arc::new(MemoryStorage::new());
    let mut program = Program::new(two_category_banner(), storage);
    program.mount();
    program.dispatch(Event::change(Selector::indexed(CHECKBOX_PREFIX, 1)));

    let lines = outline(program.view().unwrap());
    assert_eq!(
        lines,
        vec![
            "dialog [open] {position: fixed; bottom: 0; width: 100%}",
            "  div {max-width: 40rem; display: flex; flex-direction: column; gap: 0.5rem; padding-block: 0.5rem; margin-inline: auto}",
            "    p",
            "      \"This site uses a few cookies to improve your experience.\"",
            "    fieldset",
            "      div",
            "        \"Cookies accepted 1 / 2\"",
            "      div",
            "        label",
            "          \"Analytics\"",
            "          checkbox #cookie-checkbox-0 [ ]",
            "      div",
            "        label",
            "          \"Marketing\"",
            "          checkbox #cookie-checkbox-1 [x]",
            "    button #cookie-dismiss {background-color: red}",
            "      \"Reject some cookies\"",
        ]
    );
}

#[test]
fn framed_preview_stays_within_its_box() {
    let storage = Arc::new(MemoryStorage::new());
    let mut program = Program::new(two_category_banner(), storage);
    program.mount();

    let box_lines = framed(program.view().unwrap(), 40);
    assert_eq!(box_lines.len(), outline(program.view().unwrap()).len() + 2);
    assert!(box_lines[0].starts_with('┌'));
    assert!(box_lines.last().unwrap().starts_with('└'));
}

#[test]
fn recorded_session_tells_the_dismissal_story() {
    let storage = Arc::new(MemoryStorage::new());
    let recorder = Rc::new(RefCell::new(SessionRecorder::new()));

    let mut program = Program::new(two_category_banner(), storage.clone());
    let sink = recorder.clone();
    program.on_view(move |view| sink.borrow_mut().view(view));

    recorder.borrow_mut().mount(storage.name());
    program.mount();

    let click = Event::click(DISMISS_SELECTOR);
    recorder.borrow_mut().dispatch(&click);
    program.dispatch(click);

    let records: Vec<serde_json::Value> = recorder
        .borrow()
        .lines()
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    // mount, first view (open), dispatch, second view (closed)
    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["event"], "mount");
    assert_eq!(records[1]["event"], "view");
    assert_eq!(records[1]["open"], true);
    assert_eq!(records[2]["event"], "dispatch");
    assert_eq!(records[3]["event"], "view");
    assert_eq!(records[3]["open"], false);

    // The last recorded checksum is the checksum of the retained view.
    assert_eq!(
        records[3]["checksum"],
        checksum_view(program.view().unwrap())
    );
    assert_eq!(
        storage.get("showCookieDialog").unwrap().as_deref(),
        Some("false")
    );
}
