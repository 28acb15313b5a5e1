//! Turns raw URL-field text into the URL that gets loaded.
//!
//! Rules, first match wins:
//! 1. text containing a space is a search query: spaces become `+` and the
//!    result is appended to the search endpoint
//! 2. text not starting with `http` gets `http://` prepended
//! 3. anything else is used as-is
//!
//! Nothing else is validated or escaped; the engine shows its own error page
//! for whatever it cannot load.

pub fn normalize(input: &str, search_url: &str) -> String {
    if input.contains(' ') {
        format!("{}{}", search_url, input.replace(' ', "+"))
    } else if !input.starts_with("http") {
        format!("http://{}", input)
    } else {
        input.to_string()
    }
}
