// SPDX-License-Identifier: PMPL-1.0-or-later

//! Battle-Lexicon: display text for battle-data tooling.
//!
//! Turns raw avatar/enemy dumps and dialogue strings into text ready for a
//! rendering layer. Everything in the core is a pure function over
//! already-loaded data.
//!
//! PILLARS:
//! 1. **Locale**: the supported `code -> label` table, plus cookie and
//!    browser-language negotiation of the active locale.
//! 2. **Names**: locale-chained name lookup with an English fallback and
//!    synthesized labels for player-insert characters.
//! 3. **Ruby**: rewrites `{RUBY_B#..}..{RUBY_E#}` furigana markup into
//!    HTML ruby annotations.

pub mod config;
pub mod error;
pub mod locale;
pub mod logging;
pub mod names;
pub mod records;
pub mod ruby;
pub mod types;

pub use error::{Error, Result};
pub use locale::SupportedLocaleTable;
pub use names::{resolve_avatar_name, resolve_enemy_name, NameResolver};
pub use types::{AvatarRecord, EnemyRecord, LocalizedRecord, RecordId};
