// SPDX-License-Identifier: PMPL-1.0-or-later

//! Furigana markup rendering.
//!
//! Game text embeds phonetic guides as
//! `{RUBY_B#<annotation>}<base>{RUBY_E#}`. [`transform`] rewrites each
//! span into HTML `<ruby><base><rt><annotation></rt></ruby>`; [`strip`]
//! keeps only the base text. Both are structural substitutions: nothing
//! is escaped, and an unterminated span is left as-is.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Annotation runs to the first `}`; base runs to the nearest `{RUBY_E#}`.
static RUBY_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{RUBY_B#(.*?)\}(.*?)\{RUBY_E#\}").unwrap());

/// Render every ruby span as HTML ruby markup.
///
/// Returns the input borrowed when it contains no complete span.
///
/// # Examples
/// ```
/// use battle_lexicon::ruby::transform;
/// assert_eq!(
///     transform("{RUBY_B#かな}漢字{RUBY_E#}"),
///     "<ruby>漢字<rt>かな</rt></ruby>"
/// );
/// ```
pub fn transform(text: &str) -> Cow<'_, str> {
    RUBY_SPAN.replace_all(text, |caps: &Captures| {
        format!("<ruby>{}<rt>{}</rt></ruby>", &caps[2], &caps[1])
    })
}

/// Drop the annotations and keep the base text of every span.
pub fn strip(text: &str) -> Cow<'_, str> {
    RUBY_SPAN.replace_all(text, |caps: &Captures| caps[2].to_string())
}

/// Whether `text` holds at least one complete ruby span.
pub fn contains_markup(text: &str) -> bool {
    RUBY_SPAN.is_match(text)
}
