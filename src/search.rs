use crate::config::SearchOptions;
use crate::core::{Category, CorynError, Item, MatchResult, Score};
use crate::fuzz::{token_set_ratio, wratio};
use crate::normalizer::{normalize_category, normalize_stat, prepare};
use crate::stats::StatProbe;
use tracing::debug;

const STAT_PREFIX: &str = "stat:";
const ALL_KEYWORD: &str = "all";

/// How a raw query is interpreted. Selection depends only on the query
/// prefix and is checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    Empty,
    /// Normalized stat name.
    Stat(String),
    /// `None` lists the whole collection; otherwise the normalized category text.
    Category(Option<String>),
    /// Raw query text; name ranking prepares it itself.
    Name(String),
}

pub fn classify(query: &str) -> QueryMode {
    let query = query.trim();
    if query.is_empty() {
        return QueryMode::Empty;
    }

    if let Some(head) = query.get(..STAT_PREFIX.len()) {
        if head.eq_ignore_ascii_case(STAT_PREFIX) {
            let stat = query[STAT_PREFIX.len()..].trim();
            return QueryMode::Stat(normalize_stat(stat));
        }
    }

    let mut parts = query.splitn(2, char::is_whitespace);
    if let Some(first) = parts.next() {
        if first.eq_ignore_ascii_case(ALL_KEYWORD) {
            let rest = parts.next().map(str::trim).unwrap_or_default();
            if rest.is_empty() {
                return QueryMode::Category(None);
            }
            return QueryMode::Category(Some(normalize_category(rest)));
        }
    }

    QueryMode::Name(query.to_string())
}

pub struct SearchEngine {
    options: SearchOptions,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchOptions::default())
    }
}

impl SearchEngine {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn search<'a>(
        &self,
        query: &str,
        items: &'a [Item],
        k: usize,
        ascending: bool,
    ) -> Result<Vec<MatchResult<'a>>, CorynError> {
        if k == 0 {
            return Err(CorynError::InvalidLimit(k));
        }

        let mode = classify(query);
        debug!(?mode, k, ascending, "query classified");

        let results = match mode {
            QueryMode::Empty => Vec::new(),
            QueryMode::Stat(stat) => self.rank_by_stat(&stat, items, k, ascending),
            QueryMode::Category(None) => items.iter().map(MatchResult::unscored).collect(),
            QueryMode::Category(Some(text)) => self.filter_by_category(&text, items),
            QueryMode::Name(text) => self.rank_by_name(&text, items, k),
        };

        debug!(count = results.len(), "search finished");
        Ok(results)
    }

    pub fn rank_by_name<'a>(
        &self,
        query: &str,
        items: &'a [Item],
        k: usize,
    ) -> Vec<MatchResult<'a>> {
        let query = prepare(query);
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &Item)> = items
            .iter()
            .map(|item| (token_set_ratio(&query, item.name_normalized()), item))
            .filter(|(score, _)| *score >= self.options.name_cutoff)
            .collect();
        debug!(
            candidates = scored.len(),
            cutoff = self.options.name_cutoff,
            "name ranking"
        );

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.truncate(k);

        scored
            .into_iter()
            .map(|(score, item)| MatchResult {
                item,
                score: Some(Score::Match(score)),
            })
            .collect()
    }

    /// Best category for already-normalized text, if it clears the cutoff.
    pub fn resolve_category(&self, text: &str) -> Option<(Category, f64)> {
        let mut best: Option<(Category, f64)> = None;
        for category in Category::ALL {
            let score = wratio(text, category.as_str());
            // Strictly greater: the first category wins ties
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((category, score));
            }
        }
        best.filter(|(_, score)| *score >= self.options.category_cutoff)
    }

    pub fn filter_by_category<'a>(&self, text: &str, items: &'a [Item]) -> Vec<MatchResult<'a>> {
        let Some((category, score)) = self.resolve_category(text) else {
            debug!(text, "no category cleared the cutoff");
            return Vec::new();
        };
        debug!(%category, score, "category resolved");

        items
            .iter()
            .filter(|item| category.matches(&item.kind))
            .map(MatchResult::unscored)
            .collect()
    }

    pub fn rank_by_stat<'a>(
        &self,
        stat: &str,
        items: &'a [Item],
        k: usize,
        ascending: bool,
    ) -> Vec<MatchResult<'a>> {
        let Some(probe) = StatProbe::new(stat) else {
            return Vec::new();
        };

        let mut valued: Vec<(f64, &Item)> = items
            .iter()
            .filter_map(|item| probe.extract(item.stats.as_deref()).map(|v| (v, item)))
            .collect();
        debug!(stat, candidates = valued.len(), "stat ranking");

        if ascending {
            valued.sort_by(|a, b| a.0.total_cmp(&b.0));
        } else {
            valued.sort_by(|a, b| b.0.total_cmp(&a.0));
        }
        valued.truncate(k);

        valued
            .into_iter()
            .map(|(value, item)| MatchResult {
                item,
                score: Some(Score::Stat(value)),
            })
            .collect()
    }
}

/// Search with the default cutoffs.
pub fn search<'a>(
    query: &str,
    items: &'a [Item],
    k: usize,
    ascending: bool,
) -> Result<Vec<MatchResult<'a>>, CorynError> {
    SearchEngine::default().search(query, items, k, ascending)
}
