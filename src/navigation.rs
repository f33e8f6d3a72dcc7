//! Session Navigation
//!
//! The session selector reloads the page on the chosen session.

use percent_encoding::percent_decode_str;

use crate::page::Page;

/// `base` + `value`, percent-decoded as a whole.
/// Escapes decode as UTF-8; bytes that are not valid UTF-8 (Latin-1 `%E9`,
/// which `unescape` would map to `é`) become U+FFFD.
pub fn session_path(base: &str, value: &str) -> String {
    let joined = format!("{}{}", base, value);
    percent_decode_str(&joined).decode_utf8_lossy().into_owned()
}

pub fn select_session<P: Page>(page: &P, base: &str, value: &str) {
    let path = session_path(base, value);
    log::info!("[NAV] session selected, going to {}", path);
    page.navigate(&path);
}
