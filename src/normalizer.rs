//! Query text normalization.
//!
//! `prepare` is the shared canonical form used for item names and category
//! queries. Alias resolution goes through [`AliasMatcher`], a single
//! precompiled alternation built once per table and reused for the whole
//! process lifetime.

use crate::aliases::{STAT_ALIASES, WEAPON_ALIASES};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::trace;

/// Runs of anything that is not a letter, digit, apostrophe or hyphen.
static RE_NON_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}'-]+").expect("Invalid regex"));

static CATEGORY_MATCHER: LazyLock<AliasMatcher> =
    LazyLock::new(|| AliasMatcher::new(&[WEAPON_ALIASES]));

// Category aliases participate because stat text sometimes uses category shorthand
static STAT_MATCHER: LazyLock<AliasMatcher> =
    LazyLock::new(|| AliasMatcher::new(&[WEAPON_ALIASES, STAT_ALIASES]));

// `_` counts as a word character, as in the regex `\w` class
fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '-' || c == '_'
}

/// Lowercase, replace every run of disallowed characters (whitespace
/// included) with a single space, and trim.
pub fn prepare(text: &str) -> String {
    let lowered = text.to_lowercase();
    RE_NON_TOKEN.replace_all(&lowered, " ").trim().to_string()
}

/// Resolve weapon/armor shorthand ("1h", "bg", "md") to canonical category
/// names after [`prepare`].
pub fn normalize_category(text: &str) -> String {
    let prepared = prepare(text);
    CATEGORY_MATCHER.replace(&prepared).trim().to_string()
}

/// Resolve stat shorthand ("dtfire", "cr", "ampr") to canonical stat names.
///
/// Unlike [`normalize_category`] the text is not prepared first, so `%` and
/// other symbols that appear in stat names survive.
pub fn normalize_stat(text: &str) -> String {
    STAT_MATCHER.replace(text).trim().to_string()
}

pub struct AliasMatcher {
    pattern: Regex,
    table: HashMap<String, String>,
}

impl AliasMatcher {
    /// Later tables override earlier ones on key collisions. Every canonical
    /// value is also registered as an alias of itself so that canonical
    /// phrases survive a second pass untouched.
    pub fn new(tables: &[&[(&str, &str)]]) -> Self {
        let mut table: HashMap<String, String> = HashMap::new();
        for entries in tables {
            for (alias, canonical) in entries.iter() {
                table.insert(alias.to_lowercase(), canonical.to_string());
            }
        }
        let canonicals: Vec<String> = table.values().cloned().collect();
        for canonical in canonicals {
            table.entry(canonical.to_lowercase()).or_insert(canonical);
        }

        let mut keys: Vec<&String> = table.keys().collect();
        keys.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        let alternation = keys
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        // The trailing boundary is part of the pattern so a failed long alias
        // falls back to a shorter one at the same position.
        let pattern = Regex::new(&format!(r"(?i)({alternation})(?:[^\p{{L}}\p{{N}}'\-_]|$)"))
            .expect("Invalid alias pattern");

        Self { pattern, table }
    }

    pub fn replace(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut pos = 0;

        while pos <= text.len() {
            let Some(caps) = self.pattern.captures_at(text, pos) else {
                break;
            };
            let Some(m) = caps.get(1) else {
                break;
            };

            let leading_ok = text[..m.start()]
                .chars()
                .next_back()
                .map_or(true, |c| !is_token_char(c));

            if !leading_ok {
                // Inside a longer word, retry from the next character
                pos = m.start()
                    + text[m.start()..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
                continue;
            }

            match self.table.get(&m.as_str().to_lowercase()) {
                Some(canonical) => {
                    trace!(alias = m.as_str(), canonical = canonical.as_str(), "alias resolved");
                    out.push_str(&text[copied..m.start()]);
                    out.push_str(canonical);
                }
                None => out.push_str(&text[copied..m.end()]),
            }
            copied = m.end();
            pos = if m.end() > m.start() { m.end() } else { m.end() + 1 };
        }

        out.push_str(&text[copied..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_collapses_and_strips() {
        assert_eq!(prepare("  ASPD   %  "), "aspd");
        assert_eq!(prepare("Dragon's  Bow-X (Rare)"), "dragon's bow-x rare");
        assert_eq!(prepare(""), "");
        assert_eq!(prepare("!!!"), "");
    }

    #[test]
    fn test_prepare_is_idempotent() {
        let once = prepare("  Holy\tStaff -- EX!! ");
        assert_eq!(prepare(&once), once);
    }

    #[test]
    fn test_normalize_category_aliases() {
        assert_eq!(normalize_category("1H"), "1 handed sword");
        assert_eq!(normalize_category("bow gun"), "bowgun");
        assert_eq!(normalize_category("MD"), "magic device");
        assert_eq!(normalize_category("  Knuckle "), "knuckles");
    }

    #[test]
    fn test_normalize_category_keeps_longer_words() {
        // "arm" and "bow" must not fire inside other words
        assert_eq!(normalize_category("armory"), "armory");
        assert_eq!(normalize_category("rainbow"), "rainbow");
        assert_eq!(normalize_category("hatchet"), "hatchet");
    }

    #[test]
    fn test_normalize_stat_longest_alias_wins() {
        assert_eq!(normalize_stat("dtfire 10"), "% stronger against fire 10");
        assert_eq!(normalize_stat("dtf"), "% stronger against fire");
        assert_eq!(normalize_stat("dt"), "% stronger against");
    }

    #[test]
    fn test_normalize_stat_case_insensitive() {
        assert_eq!(normalize_stat("CR"), "critical rate");
        assert_eq!(normalize_stat("Cast Speed"), "cspd");
    }

    #[test]
    fn test_normalize_stat_single_pass() {
        // "ampr" expands to a phrase containing "mp"; it must not be re-expanded
        assert_eq!(normalize_stat("ampr"), "attack mp recovery");
        assert_eq!(normalize_stat("motion"), "motion speed %");
    }

    #[test]
    fn test_normalize_stat_is_idempotent() {
        for input in [
            "ampr",
            "motion",
            "natural mp",
            "dtfire 10",
            "gem dust drop rate",
            "cr and cd",
            "aspd",
        ] {
            let once = normalize_stat(input);
            assert_eq!(normalize_stat(&once), once, "input: {input}");
        }
    }

    #[test]
    fn test_normalize_stat_leaves_unknown_text() {
        assert_eq!(normalize_stat("  max hp  "), "max hp");
        assert_eq!(normalize_stat(""), "");
        assert_eq!(normalize_stat("crit"), "crit");
    }

    #[test]
    fn test_normalize_stat_adjacent_aliases() {
        assert_eq!(normalize_stat("cr cd"), "critical rate critical damage");
    }

    #[test]
    fn test_trailing_boundary_falls_back_to_shorter_alias() {
        let matcher = AliasMatcher::new(&[&[("motion", "m1"), ("motion %", "m2")]]);
        assert_eq!(matcher.replace("motion %x"), "m1 %x");
        assert_eq!(matcher.replace("motion % x"), "m2 x");
    }

    #[test]
    fn test_underscore_joins_words() {
        let matcher = AliasMatcher::new(&[&[("cr", "critical rate")]]);
        assert_eq!(matcher.replace("cr_x"), "cr_x");
        assert_eq!(matcher.replace("x_cr"), "x_cr");
        assert_eq!(matcher.replace("x cr"), "x critical rate");
    }
}
