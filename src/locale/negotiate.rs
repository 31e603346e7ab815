// SPDX-License-Identifier: PMPL-1.0-or-later

//! Active-locale negotiation from a cookie header and a browser language.
//!
//! A stored cookie always wins; an unsupported cookie value collapses to
//! the caller's fallback code without rewriting the cookie. Without a cookie the
//! two-letter prefix of the browser language is tried, and the caller is
//! told to persist whatever was chosen.

use super::SupportedLocaleTable;

/// Cookie that remembers the user's locale choice.
pub const LOCALE_COOKIE: &str = "MYNEXTAPP_LOCALE";

/// Outcome of [`negotiate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Negotiation {
    pub code: String,
    /// The caller should write `locale_cookie(&code)` back to the client.
    pub persist: bool,
}

/// Value of the locale cookie in a `"; "`-separated cookie header.
///
/// Empty values count as absent. The name must match exactly, so a
/// `MYNEXTAPP_LOCALE_OLD=ko` cookie is ignored.
pub fn cookie_locale(cookie_header: &str) -> Option<&str> {
    cookie_header
        .split(';')
        .map(str::trim_start)
        .find_map(|row| row.strip_prefix(LOCALE_COOKIE)?.strip_prefix('='))
        .map(|value| value.split('=').next().unwrap_or_default().trim_end())
        .filter(|value| !value.is_empty())
}

/// Pick the active locale. `fallback` is used whenever neither source
/// names a code in `table`; it is expected to be one of the table's codes,
/// usually the configured default locale.
pub fn negotiate(
    table: &SupportedLocaleTable,
    fallback: &str,
    cookie_header: Option<&str>,
    browser_language: Option<&str>,
) -> Negotiation {
    if let Some(stored) = cookie_header.and_then(cookie_locale) {
        let code = if table.contains(stored) {
            stored
        } else {
            fallback
        };
        return Negotiation {
            code: code.to_string(),
            persist: false,
        };
    }

    let prefix: String = browser_language
        .unwrap_or_default()
        .chars()
        .take(2)
        .collect();
    let code = if table.contains(&prefix) {
        prefix
    } else {
        fallback.to_string()
    };
    Negotiation {
        code,
        persist: true,
    }
}

/// Cookie assignment that stores `code`.
pub fn locale_cookie(code: &str) -> String {
    format!("{}={};", LOCALE_COOKIE, code)
}
