//! Nimbus: a minimal tabbed browser shell around an embedded web engine.
//!
//! Entry point: opens the browser window on the platform webview.
//! When built without the `gui` feature, runs a console demo against the
//! headless engine.

#[cfg(feature = "gui")]
fn main() {
    if let Err(e) = nimbus::ui::webview_app::run() {
        tracing::error!(error = %e, "Nimbus failed to start");
        eprintln!("Nimbus failed to start: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    use nimbus::app::App;
    use nimbus::engine::headless::HeadlessEngine;
    use nimbus::managers::tab_manager::TabManagerTrait;
    use nimbus::types::settings::BrowserSettings;

    let settings = BrowserSettings::default();
    nimbus::logging::init(&settings.logging.level);

    println!();
    println!("Nimbus v{} (headless demo)", env!("CARGO_PKG_VERSION"));
    println!();

    let (engine, events) = HeadlessEngine::new();
    engine.add_page("https://www.google.com", "Google");
    engine.add_redirect("http://example.com", "https://example.com/");
    engine.add_page("https://example.com/", "Example Domain");
    engine.add_unreachable("http://nowhere.invalid", "Server not found");

    let mut app = match App::new(engine, settings) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Nimbus failed to start: {}", e);
            std::process::exit(1);
        }
    };
    app.handle_page_events(events.try_iter());
    print_state(&app, "startup");

    let steps: [(&str, &str); 4] = [
        ("navigate", "example.com"),
        ("navigate", "cats and dogs"),
        ("navigate", "nowhere.invalid"),
        ("new tab", ""),
    ];
    for (action, text) in steps {
        let result = match action {
            "navigate" => app.navigate_to(text).map(|url| println!("  dispatched {}", url)),
            _ => app.open_tab().map(|_| ()),
        };
        if let Err(e) = result {
            eprintln!("  {} failed: {}", action, e);
        }
        app.handle_page_events(events.try_iter());
        print_state(&app, &format!("{} {}", action, text));
    }

    app.switch_to(0);
    print_state(&app, "switch to first tab");
    app.close_tab(0);
    print_state(&app, "close first tab");
    app.close_tab(0);
    print_state(&app, "close last tab (refused)");
    println!("  tabs open: {}", app.tabs().tab_count());
}

#[cfg(not(feature = "gui"))]
fn print_state<E: nimbus::engine::WebEngine>(app: &nimbus::app::App<E>, step: &str) {
    let state = app.chrome_state();
    println!("── {}", step.trim());
    println!("  url bar: {}", state.url_bar);
    for (i, tab) in state.tabs.iter().enumerate() {
        let marker = if i == state.active { '*' } else { ' ' };
        println!("  {} [{}] {}", marker, i, tab.label);
    }
}
