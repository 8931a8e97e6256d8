//! Score fusion and result-set policy.
//!
//! Combines text relevance and geographic proximity into one ordering,
//! applies exclusion rules and truncates to the requested count.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::Site;

/// Weight of content similarity in the hybrid score.
pub const TEXT_WEIGHT: f64 = 0.7;
/// Weight of geographic proximity in the hybrid score.
pub const PROXIMITY_WEIGHT: f64 = 0.3;

/// Combines text relevance and proximity into a single score.
///
/// When the requester supplied no coordinate the proximity term is omitted
/// entirely rather than zeroed, so pure-content queries are not diluted by a
/// meaningless weight. The 70/30 split mirrors the production tuning and is
/// a candidate for configuration if requirements evolve.
pub fn fuse(text_relevance: f64, proximity: f64, has_location: bool) -> f64 {
    if has_location {
        TEXT_WEIGHT * text_relevance + PROXIMITY_WEIGHT * proximity
    } else {
        text_relevance
    }
}

/// Orders scored candidates and applies the result-set policy.
///
/// `scored` pairs a corpus ordinal with its combined score. Candidates whose
/// `site_id` is in `exclude` are dropped, the rest are sorted by score
/// descending with ties broken by corpus ordinal ascending (a documented
/// total order, so equal-scoring results are stable run to run), and the
/// list is truncated to `limit`. An empty candidate set or `limit == 0`
/// yields an empty vec, never an error.
pub fn rank(
    sites: &[Site],
    scored: Vec<(usize, f64)>,
    exclude: &HashSet<String>,
    limit: usize,
) -> Vec<Site> {
    let mut candidates: Vec<(usize, f64)> = scored
        .into_iter()
        .filter(|(ordinal, _)| !exclude.contains(&sites[*ordinal].site_id))
        .collect();

    candidates.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    candidates
        .into_iter()
        .take(limit)
        .map(|(ordinal, _)| sites[ordinal].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(id: &str) -> Site {
        Site {
            site_id: id.to_string(),
            name: id.to_string(),
            category: String::new(),
            location_text: String::new(),
            era: String::new(),
            tags: vec![],
            geotag: None,
        }
    }

    fn corpus() -> Vec<Site> {
        vec![site("a"), site("b"), site("c"), site("d")]
    }

    #[test]
    fn test_fuse_with_location_blends_70_30() {
        assert!((fuse(1.0, 1.0, true) - 1.0).abs() < 1e-9);
        assert!((fuse(0.5, 1.0, true) - 0.65).abs() < 1e-9);
        assert!((fuse(0.0, 1.0, true) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_fuse_without_location_is_text_only() {
        // Proximity must be ignored, not merely scaled down.
        assert_eq!(fuse(0.5, 1.0, false), 0.5);
        assert_eq!(fuse(0.0, 1.0, false), 0.0);
    }

    #[test]
    fn test_rank_orders_by_score_descending() {
        let sites = corpus();
        let scored = vec![(0, 0.2), (1, 0.9), (2, 0.5), (3, 0.7)];

        let ranked = rank(&sites, scored, &HashSet::new(), 10);
        let ids: Vec<&str> = ranked.iter().map(|s| s.site_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn test_rank_breaks_ties_by_corpus_order() {
        let sites = corpus();
        let scored = vec![(2, 1.0), (0, 1.0), (3, 2.0), (1, 1.0)];

        let ranked = rank(&sites, scored, &HashSet::new(), 10);
        let ids: Vec<&str> = ranked.iter().map(|s| s.site_id.as_str()).collect();
        assert_eq!(ids, vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_rank_applies_exclusions_before_truncation() {
        let sites = corpus();
        let scored = vec![(0, 0.9), (1, 0.8), (2, 0.7), (3, 0.6)];
        let exclude: HashSet<String> = ["a".to_string(), "b".to_string()].into();

        let ranked = rank(&sites, scored, &exclude, 2);
        let ids: Vec<&str> = ranked.iter().map(|s| s.site_id.as_str()).collect();
        // Exclusion happens first, so the limit is filled from the survivors.
        assert_eq!(ids, vec!["c", "d"]);
    }

    #[test]
    fn test_rank_truncates_to_limit() {
        let sites = corpus();
        let scored = vec![(0, 0.1), (1, 0.2), (2, 0.3), (3, 0.4)];

        assert_eq!(rank(&sites, scored.clone(), &HashSet::new(), 2).len(), 2);
        assert!(rank(&sites, scored, &HashSet::new(), 0).is_empty());
    }

    #[test]
    fn test_rank_empty_after_exclusion_is_empty_not_error() {
        let sites = corpus();
        let scored = vec![(0, 1.0)];
        let exclude: HashSet<String> = ["a".to_string()].into();

        assert!(rank(&sites, scored, &exclude, 5).is_empty());
    }
}
