//! Controller behaviour driven through the headless engine.

use std::sync::mpsc::Receiver;

use nimbus::app::App;
use nimbus::engine::headless::HeadlessEngine;
use nimbus::engine::PageEvent;
use nimbus::managers::tab_manager::TabManagerTrait;
use nimbus::types::command::UiCommand;
use nimbus::types::settings::BrowserSettings;

const HOME: &str = "https://www.google.com";

fn app_with(setup: impl FnOnce(&HeadlessEngine)) -> (App<HeadlessEngine>, Receiver<PageEvent>) {
    let (engine, events) = HeadlessEngine::new();
    engine.add_page(HOME, "Google");
    setup(&engine);
    let mut app = App::new(engine, BrowserSettings::default()).unwrap();
    app.handle_page_events(events.try_iter());
    (app, events)
}

fn app() -> (App<HeadlessEngine>, Receiver<PageEvent>) {
    app_with(|_| {})
}

fn pump(app: &mut App<HeadlessEngine>, events: &Receiver<PageEvent>) {
    app.handle_page_events(events.try_iter());
}

fn last_request(app: &App<HeadlessEngine>) -> String {
    app.tabs()
        .active_page()
        .unwrap()
        .view()
        .requested_urls()
        .last()
        .cloned()
        .unwrap()
}

#[test]
fn test_initial_state() {
    let (app, _events) = app();
    let tabs = app.tabs();
    assert_eq!(tabs.tab_count(), 1);
    assert_eq!(tabs.active_index(), 0);
    assert_eq!(tabs.page(0).unwrap().current_url(), HOME);
    assert_eq!(app.url_bar(), HOME);
}

#[test]
fn test_initial_label_is_home_before_load_finishes() {
    let (engine, _events) = HeadlessEngine::new();
    let app = App::new(engine, BrowserSettings::default()).unwrap();
    assert_eq!(app.tabs().label(0), Some("Home"));
    assert_eq!(app.url_bar(), HOME);
}

#[test]
fn test_initial_label_follows_title() {
    let (app, _events) = app();
    assert_eq!(app.tabs().label(0), Some("Google"));
}

#[test]
fn test_navigate_text_with_space_searches() {
    let (mut app, events) = app();
    let url = app.navigate_to("rust lang").unwrap();
    assert_eq!(url, "https://www.google.com/search?q=rust+lang");
    assert_eq!(last_request(&app), url);
    pump(&mut app, &events);
    assert_eq!(app.url_bar(), url);
}

#[test]
fn test_navigate_bare_host_gets_scheme() {
    let (mut app, events) = app();
    let url = app.navigate_to("example.com").unwrap();
    assert_eq!(url, "http://example.com");
    assert_eq!(last_request(&app), "http://example.com");
    pump(&mut app, &events);
    assert_eq!(app.url_bar(), "http://example.com");
}

#[test]
fn test_navigate_full_url_unchanged() {
    let (mut app, _events) = app();
    let url = app.navigate_to("https://example.com/a?b=c").unwrap();
    assert_eq!(url, "https://example.com/a?b=c");
    assert_eq!(last_request(&app), url);
}

#[test]
fn test_url_bar_waits_for_engine() {
    let (mut app, events) = app();
    app.navigate_to("example.com").unwrap();
    assert_eq!(app.url_bar(), HOME);
    pump(&mut app, &events);
    assert_eq!(app.url_bar(), "http://example.com");
}

#[test]
fn test_redirect_shows_final_url() {
    let (mut app, events) = app_with(|engine| {
        engine.add_redirect("http://example.com", "https://example.com/");
        engine.add_page("https://example.com/", "Example Domain");
    });

    app.navigate_to("example.com").unwrap();
    pump(&mut app, &events);

    assert_eq!(app.url_bar(), "https://example.com/");
    let page = app.tabs().active_page().unwrap();
    assert_eq!(page.current_url(), "https://example.com/");
    assert_eq!(app.tabs().label(0), Some("Example Domain"));
}

#[test]
fn test_failed_load_still_updates_label() {
    let (mut app, events) = app_with(|engine| {
        engine.add_unreachable("http://nowhere.invalid", "Server not found");
    });

    app.navigate_to("nowhere.invalid").unwrap();
    pump(&mut app, &events);

    assert_eq!(app.tabs().label(0), Some("Server not found"));
    assert_eq!(app.url_bar(), "http://nowhere.invalid");
}

#[test]
fn test_navigate_home() {
    let (mut app, events) = app();
    app.navigate_to("https://a.test").unwrap();
    pump(&mut app, &events);

    app.navigate_home().unwrap();
    pump(&mut app, &events);

    assert_eq!(last_request(&app), HOME);
    assert_eq!(app.url_bar(), HOME);
}

#[test]
fn test_back_forward_reload() {
    let (mut app, events) = app();
    app.navigate_to("https://a.test").unwrap();
    pump(&mut app, &events);

    app.back().unwrap();
    pump(&mut app, &events);
    assert_eq!(app.url_bar(), HOME);

    app.forward().unwrap();
    pump(&mut app, &events);
    assert_eq!(app.url_bar(), "https://a.test");

    app.reload().unwrap();
    let reloaded: Vec<PageEvent> = events.try_iter().collect();
    let tab = app.tabs().active_id().unwrap();
    assert_eq!(
        reloaded,
        vec![
            PageEvent::url_changed(tab, "https://a.test"),
            PageEvent::load_finished(tab, true),
        ]
    );
}

#[test]
fn test_back_at_start_is_noop() {
    let (mut app, events) = app();
    app.back().unwrap();
    assert_eq!(events.try_iter().count(), 0);
    assert_eq!(app.url_bar(), HOME);
}

#[test]
fn test_open_tab_activates_home_tab() {
    let (mut app, events) = app();
    app.navigate_to("https://a.test").unwrap();
    pump(&mut app, &events);

    let index = app.open_tab().unwrap();

    assert_eq!(index, 1);
    assert_eq!(app.tabs().active_index(), 1);
    assert_eq!(app.tabs().label(1), Some("New Tab"));
    assert_eq!(app.url_bar(), HOME);
}

#[test]
fn test_switch_tab_resyncs_url_bar() {
    let (mut app, events) = app();
    app.navigate_to("https://a.test").unwrap();
    pump(&mut app, &events);
    app.open_tab().unwrap();
    pump(&mut app, &events);
    assert_eq!(app.url_bar(), HOME);

    assert!(app.switch_to(0));
    assert_eq!(app.url_bar(), "https://a.test");
}

#[test]
fn test_switch_out_of_range_keeps_url_bar() {
    let (mut app, _events) = app();
    assert!(!app.switch_to(5));
    assert_eq!(app.url_bar(), HOME);
}

#[test]
fn test_inactive_tab_url_change_does_not_touch_url_bar() {
    let (mut app, events) = app();
    let first = app.tabs().active_id().unwrap();
    app.open_tab().unwrap();
    pump(&mut app, &events);

    app.handle_page_event(PageEvent::url_changed(first, "https://background.test"));

    assert_eq!(app.url_bar(), HOME);
    assert_eq!(
        app.tabs().page(0).unwrap().current_url(),
        "https://background.test"
    );
}

#[test]
fn test_close_active_tab_resyncs_url_bar() {
    let (mut app, events) = app();
    app.navigate_to("https://a.test").unwrap();
    pump(&mut app, &events);
    app.open_tab().unwrap();
    pump(&mut app, &events);

    assert!(app.close_tab(1));
    assert_eq!(app.tabs().tab_count(), 1);
    assert_eq!(app.url_bar(), "https://a.test");
}

#[test]
fn test_close_last_tab_refused() {
    let (mut app, _events) = app();
    assert!(!app.close_tab(0));
    assert_eq!(app.tabs().tab_count(), 1);
    assert_eq!(app.url_bar(), HOME);
}

#[test]
fn test_events_for_closed_tab_ignored() {
    let (mut app, events) = app();
    app.open_tab().unwrap();
    pump(&mut app, &events);
    let closed = app.tabs().active_id().unwrap();

    app.navigate_to("https://late.test").unwrap();
    app.close_tab(1);
    pump(&mut app, &events);

    assert_eq!(app.tabs().tab_count(), 1);
    assert_ne!(app.tabs().active_id(), Some(closed));
    assert_eq!(app.url_bar(), HOME);
    assert_eq!(app.tabs().label(0), Some("Google"));
}

#[test]
fn test_double_click_on_empty_area_opens_tab() {
    let (mut app, _events) = app();
    app.on_tab_bar_double_clicked(None).unwrap();
    assert_eq!(app.tabs().tab_count(), 2);
    assert_eq!(app.tabs().active_index(), 1);
}

#[test]
fn test_double_click_on_tab_does_nothing() {
    let (mut app, _events) = app();
    app.on_tab_bar_double_clicked(Some(0)).unwrap();
    assert_eq!(app.tabs().tab_count(), 1);
}

#[test]
fn test_handle_command_dispatch() {
    let (mut app, events) = app();

    app.handle_command(UiCommand::Navigate {
        text: "cats and dogs".to_string(),
    })
    .unwrap();
    pump(&mut app, &events);
    assert_eq!(app.url_bar(), "https://www.google.com/search?q=cats+and+dogs");

    app.handle_command(UiCommand::NewTab).unwrap();
    assert_eq!(app.tabs().tab_count(), 2);

    app.handle_command(UiCommand::SwitchTab { index: 0, tab: None })
        .unwrap();
    assert_eq!(app.tabs().active_index(), 0);

    app.handle_command(UiCommand::CloseTab { index: 1, tab: None })
        .unwrap();
    assert_eq!(app.tabs().tab_count(), 1);

    app.handle_command(UiCommand::TabBarDoubleClick { index: None })
        .unwrap();
    assert_eq!(app.tabs().tab_count(), 2);

    app.handle_command(UiCommand::Home).unwrap();
    assert_eq!(last_request(&app), HOME);
}

#[test]
fn test_chrome_state_reflects_tabs() {
    let (mut app, events) = app();
    app.open_tab().unwrap();
    pump(&mut app, &events);

    let state = app.chrome_state();
    assert_eq!(state.tabs.len(), 2);
    assert_eq!(state.active, 1);
    assert_eq!(state.url_bar, HOME);
    assert_eq!(state.tabs[0].label, "Google");
    assert_eq!(state.tabs[1].label, "Google");
}

#[test]
fn test_repeated_close_by_id_closes_one_tab() {
    let (mut app, events) = app();
    app.open_tab().unwrap();
    app.open_tab().unwrap();
    pump(&mut app, &events);
    let middle = app.tabs().page(1).unwrap().id();
    let last = app.tabs().page(2).unwrap().id();
    let close = UiCommand::CloseTab {
        index: 1,
        tab: Some(middle),
    };

    app.handle_command(close.clone()).unwrap();
    app.handle_command(close).unwrap();

    assert_eq!(app.tabs().tab_count(), 2);
    assert_eq!(app.tabs().index_of(last), Some(1));
}

#[test]
fn test_close_by_id_uses_current_position() {
    let (mut app, events) = app();
    app.open_tab().unwrap();
    app.open_tab().unwrap();
    pump(&mut app, &events);
    let first = app.tabs().page(0).unwrap().id();
    let last = app.tabs().page(2).unwrap().id();
    app.close_tab(0);

    // Drawn at position 2 before the first tab went away.
    app.handle_command(UiCommand::CloseTab {
        index: 2,
        tab: Some(last),
    })
    .unwrap();

    assert_eq!(app.tabs().tab_count(), 1);
    assert_eq!(app.tabs().index_of(first), None);
    assert_eq!(app.tabs().index_of(last), None);
}

#[test]
fn test_switch_to_closed_tab_is_noop() {
    let (mut app, events) = app();
    app.open_tab().unwrap();
    app.open_tab().unwrap();
    pump(&mut app, &events);
    let gone = app.tabs().page(1).unwrap().id();
    app.close_tab(1);
    let active = app.tabs().active_id();

    app.handle_command(UiCommand::SwitchTab {
        index: 0,
        tab: Some(gone),
    })
    .unwrap();

    assert_eq!(app.tabs().active_id(), active);
}

#[test]
fn test_switch_by_id() {
    let (mut app, events) = app();
    app.open_tab().unwrap();
    pump(&mut app, &events);
    let first = app.tabs().page(0).unwrap().id();

    app.handle_command(UiCommand::SwitchTab {
        index: 1,
        tab: Some(first),
    })
    .unwrap();

    assert_eq!(app.tabs().active_index(), 0);
}

#[test]
fn test_title_change_after_load_relabels_tab() {
    let (mut app, events) = app();
    app.tabs_mut()
        .views_mut()
        .next()
        .unwrap()
        .set_document_title("(1) Inbox");
    pump(&mut app, &events);

    assert_eq!(app.tabs().label(0), Some("(1) Inbox"));
    assert_eq!(app.url_bar(), HOME);
}

#[test]
fn test_title_change_for_closed_tab_ignored() {
    let (mut app, events) = app();
    app.open_tab().unwrap();
    pump(&mut app, &events);
    let gone = app.tabs().page(1).unwrap().id();
    app.close_tab(1);

    app.handle_page_event(PageEvent::title_changed(gone, "Late"));

    assert_eq!(app.tabs().tab_count(), 1);
    assert_eq!(app.tabs().label(0), Some("Google"));
}
