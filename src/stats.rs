use crate::core::Item;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const DEFAULT_MIN_OCCURRENCE: usize = 6;

static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

static RE_STAT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([^:]+?)\s*:").expect("Invalid regex"));

fn squash(text: &str) -> String {
    RE_WHITESPACE.replace_all(&text.to_lowercase(), "").into_owned()
}

/// Compiled lookup for one stat name, reused across every item of a query.
pub struct StatProbe {
    pattern: Regex,
}

impl StatProbe {
    /// Returns `None` for a stat name that is empty once whitespace is removed.
    pub fn new(stat_name: &str) -> Option<Self> {
        let needle = squash(stat_name);
        if needle.is_empty() {
            return None;
        }
        let pattern = Regex::new(&format!(
            r"{}:\s*(-?[0-9]+(?:\.[0-9]+)?)",
            regex::escape(&needle)
        ))
        .ok()?;
        Some(Self { pattern })
    }

    pub fn extract(&self, stats_field: Option<&str>) -> Option<f64> {
        let field = squash(stats_field?);
        let caps = self.pattern.captures(&field)?;
        caps.get(1)?.as_str().parse().ok()
    }
}

/// First value recorded for `stat_name` in a `Name: value; ...` field.
pub fn extract_stat_value(stats_field: Option<&str>, stat_name: &str) -> Option<f64> {
    StatProbe::new(stat_name)?.extract(stats_field)
}

/// Distinct stat names seen at least `min_occurrence` times, alphabetically.
pub fn stat_names(items: &[Item], min_occurrence: usize) -> Vec<String> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    for stats in items.iter().filter_map(|item| item.stats.as_deref()) {
        for part in stats.split(';') {
            if let Some(caps) = RE_STAT_NAME.captures(part) {
                let name = caps[1].trim().to_string();
                *counts.entry(name).or_insert(0) += 1;
            }
        }
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count >= min_occurrence)
        .map(|(name, _)| name)
        .collect()
}

/// Rank stat names against a filter typed by the user. An empty filter
/// keeps the full list in its original order.
pub fn suggest_stats<'a>(names: &'a [String], filter: &str) -> Vec<&'a str> {
    let filter = filter.trim();
    if filter.is_empty() {
        return names.iter().map(String::as_str).collect();
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    let mut scored: Vec<(i64, &str)> = names
        .iter()
        .filter_map(|name| {
            matcher
                .fuzzy_match(name, filter)
                .map(|score| (score, name.as_str()))
        })
        .collect();

    // Stable, so equal scores keep alphabetical order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, name)| name).collect()
}
