//! String similarity scores in the 0..=100 range.
//!
//! Every scorer is built on the normalized indel similarity (`ratio`):
//! `100 * (1 - d / (|a| + |b|))` where `d` counts the insertions and
//! deletions needed to turn one string into the other (`rapidfuzz` indel
//! distance). Lengths are counted in Unicode scalar values.

use rapidfuzz::distance::indel;
use std::collections::BTreeSet;

const UNBASE_SCALE: f64 = 0.95;

fn indel_distance(a: &[char], b: &[char]) -> usize {
    indel::distance(a.iter().copied(), b.iter().copied())
}

fn norm_similarity(distance: usize, lensum: usize) -> f64 {
    if lensum == 0 {
        return 100.0;
    }
    100.0 * (1.0 - distance as f64 / lensum as f64)
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    norm_similarity(indel_distance(a, b), a.len() + b.len())
}

pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join_set(set: &BTreeSet<&str>) -> String {
    set.iter().copied().collect::<Vec<_>>().join(" ")
}

pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Order- and duplicate-insensitive token comparison.
///
/// Compares the shared tokens against each side's shared-plus-unique tokens
/// and the unique tokens against each other, keeping the best score. A side
/// whose tokens are all contained in the other scores 100.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersect: BTreeSet<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let diff_ab: BTreeSet<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let diff_ba: BTreeSet<&str> = tokens_b.difference(&tokens_a).copied().collect();

    if !intersect.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    let diff_ab_joined: Vec<char> = join_set(&diff_ab).chars().collect();
    let diff_ba_joined: Vec<char> = join_set(&diff_ba).chars().collect();
    let ab_len = diff_ab_joined.len();
    let ba_len = diff_ba_joined.len();
    let sect_len = join_set(&intersect).chars().count();

    // Lengths of "sect + ' ' + diff" without building the strings
    let sep = usize::from(sect_len != 0);
    let sect_ab_len = sect_len + sep + ab_len;
    let sect_ba_len = sect_len + sep + ba_len;

    let dist = indel_distance(&diff_ab_joined, &diff_ba_joined);
    let result = norm_similarity(dist, sect_ab_len + sect_ba_len);
    if sect_len == 0 {
        return result;
    }

    let sect_ab_ratio = norm_similarity(sep + ab_len, sect_len + sect_ab_len);
    let sect_ba_ratio = norm_similarity(sep + ba_len, sect_len + sect_ba_len);

    result.max(sect_ab_ratio).max(sect_ba_ratio)
}

fn partial_ratio_impl(shorter: &[char], longer: &[char]) -> f64 {
    let m = shorter.len();
    let n = longer.len();
    let mut best: f64 = 0.0;

    // Windows hanging off the left edge
    for i in 1..m {
        best = best.max(ratio_chars(shorter, &longer[..i]));
    }
    // Full windows
    for i in 0..=(n - m) {
        best = best.max(ratio_chars(shorter, &longer[i..i + m]));
        if best >= 100.0 {
            return best;
        }
    }
    // Windows hanging off the right edge
    for i in (n - m + 1)..n {
        best = best.max(ratio_chars(shorter, &longer[i..]));
    }
    best
}

/// Best alignment of the shorter string inside the longer one.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    if a.len() < b.len() {
        partial_ratio_impl(&a, &b)
    } else if a.len() > b.len() {
        partial_ratio_impl(&b, &a)
    } else {
        let score = partial_ratio_impl(&a, &b);
        if score >= 100.0 {
            return score;
        }
        score.max(partial_ratio_impl(&b, &a))
    }
}

pub fn partial_token_ratio(a: &str, b: &str) -> f64 {
    let split_a: Vec<&str> = a.split_whitespace().collect();
    let split_b: Vec<&str> = b.split_whitespace().collect();
    let tokens_a: BTreeSet<&str> = split_a.iter().copied().collect();
    let tokens_b: BTreeSet<&str> = split_b.iter().copied().collect();

    if tokens_a.intersection(&tokens_b).next().is_some() {
        return 100.0;
    }

    let result = partial_ratio(&sorted_tokens(a), &sorted_tokens(b));
    // Without duplicates the difference sets are the token lists themselves
    if split_a.len() == tokens_a.len() && split_b.len() == tokens_b.len() {
        return result;
    }

    result.max(partial_ratio(&join_set(&tokens_a), &join_set(&tokens_b)))
}

/// Weighted ratio: picks between whole-string, token and partial scores
/// depending on how different the two lengths are.
pub fn wratio(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let len_ratio = len_a.max(len_b) as f64 / len_a.min(len_b) as f64;
    let end_ratio = ratio(a, b);

    if len_ratio < 1.5 {
        let token_ratio = token_sort_ratio(a, b).max(token_set_ratio(a, b));
        return end_ratio.max(token_ratio * UNBASE_SCALE);
    }

    let partial_scale = if len_ratio <= 8.0 { 0.9 } else { 0.6 };
    let end_ratio = end_ratio.max(partial_ratio(a, b) * partial_scale);
    end_ratio.max(partial_token_ratio(a, b) * UNBASE_SCALE * partial_scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_ratio() {
        assert!(approx(ratio("bow", "bow"), 100.0));
        assert!(approx(ratio("", ""), 100.0));
        assert!(approx(ratio("abc", ""), 0.0));
        // lcs("bow", "bowgun") = 3 -> 200 * 3 / 9
        assert!(approx(ratio("bow", "bowgun"), 600.0 / 9.0));
    }

    #[test]
    fn test_ratio_counts_chars_not_bytes() {
        // one substitution = two indel edits over 22 chars
        assert!(approx(ratio("ruby katana", "ruby katena"), 100.0 * 20.0 / 22.0));
        assert!(approx(ratio("épée", "epee"), 50.0));
    }

    #[test]
    fn test_token_set_ratio_subset_scores_full() {
        assert!(approx(token_set_ratio("dragon bow", "bow of the dragon"), 100.0));
        assert!(approx(token_set_ratio("bow bow", "bow"), 100.0));
    }

    #[test]
    fn test_token_set_ratio_order_insensitive() {
        let ab = token_set_ratio("holy staff ex", "staff holy rare");
        let ba = token_set_ratio("rare holy staff", "ex staff holy");
        assert!(approx(ab, ba));
        assert!(ab > 50.0 && ab < 100.0);
    }

    #[test]
    fn test_token_set_ratio_empty() {
        assert!(approx(token_set_ratio("", "bow"), 0.0));
        assert!(approx(token_set_ratio("  ", ""), 0.0));
    }

    #[test]
    fn test_partial_ratio() {
        assert!(approx(partial_ratio("bow", "bowgun"), 100.0));
        assert!(approx(partial_ratio("staff", "magic staff"), 100.0));
        assert!(approx(partial_ratio("", "x"), 0.0));
    }

    #[test]
    fn test_wratio_prefers_exact_category() {
        assert!(approx(wratio("bow", "bow"), 100.0));
        // length ratio 2 -> partial match scaled by 0.9
        assert!(approx(wratio("bow", "bowgun"), 90.0));
        assert!(wratio("katana", "knuckles") < 60.0);
    }

    #[test]
    fn test_wratio_token_order() {
        assert!(approx(wratio("sword handed 1", "1 handed sword"), 95.0));
    }
}
