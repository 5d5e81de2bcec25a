use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::models::{CatalogEntry, CatalogRecord, RankedResult};
use crate::search::similarity::similarity;

/// Hard cap on any result list.
pub const RESULT_CAP: usize = 30;

/// How strict the similarity bar is for a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdPolicy {
    /// Short queries get a stricter bar: ≤3 chars → 0.35, ≤6 → 0.25, else 0.15
    #[default]
    Adaptive,
    /// Flat 0.10 regardless of query length
    Fixed,
}

impl ThresholdPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "adaptive" => Some(ThresholdPolicy::Adaptive),
            "fixed" => Some(ThresholdPolicy::Fixed),
            _ => None,
        }
    }

    /// Similarity must strictly exceed this value for a non-substring match.
    pub fn threshold(&self, normalized_query: &str) -> f32 {
        match self {
            ThresholdPolicy::Adaptive => match normalized_query.chars().count() {
                0..=3 => 0.35,
                4..=6 => 0.25,
                _ => 0.15,
            },
            ThresholdPolicy::Fixed => 0.10,
        }
    }
}

/// Score a record against a normalized query. Returns `None` when it
/// neither contains the query nor clears the threshold.
pub fn annotate(record: &CatalogRecord, normalized_query: &str, threshold: f32) -> Option<RankedResult> {
    let contains = record.name.to_lowercase().contains(normalized_query);
    let score = similarity(normalized_query, &record.name).max(0.0);

    if contains || score > threshold {
        Some(RankedResult {
            entry: CatalogEntry::from(record),
            contains,
            score,
        })
    } else {
        None
    }
}

/// Alphabetical by name: case-folded first, then raw, then id.
pub fn cmp_name_keys(a_name: &str, a_id: &Uuid, b_name: &str, b_id: &Uuid) -> Ordering {
    a_name
        .to_lowercase()
        .cmp(&b_name.to_lowercase())
        .then_with(|| a_name.cmp(b_name))
        .then_with(|| a_id.cmp(b_id))
}

pub fn cmp_by_name(a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
    cmp_name_keys(&a.name, &a.id, &b.name, &b.id)
}

/// Substring matches first, then higher score, then alphabetical.
pub fn cmp_ranked(a: &RankedResult, b: &RankedResult) -> Ordering {
    b.contains
        .cmp(&a.contains)
        .then_with(|| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal))
        .then_with(|| cmp_by_name(&a.entry, &b.entry))
}

/// Sort in place by the tie-break chain and cut to `limit`.
pub fn sort_ranked(results: &mut Vec<RankedResult>, limit: usize) {
    results.sort_by(cmp_ranked);
    results.truncate(limit);
}

/// Annotate every record, keep the qualifying ones, sort and cap.
pub fn rank<'a, I>(records: I, normalized_query: &str, threshold: f32, limit: usize) -> Vec<RankedResult>
where
    I: IntoIterator<Item = &'a CatalogRecord>,
{
    let mut results: Vec<RankedResult> = records
        .into_iter()
        .filter_map(|r| annotate(r, normalized_query, threshold))
        .collect();
    sort_ranked(&mut results, limit);
    results
}

/// Project ranked results to the public shape, dropping ranking keys.
pub fn strip_scores(results: Vec<RankedResult>) -> Vec<CatalogEntry> {
    results.into_iter().map(RankedResult::into_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(name: &str) -> CatalogRecord {
        CatalogRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            image_url: String::new(),
            price_eur: 1.0,
            cashback_percent: 0.0,
            platform: None,
            region: None,
            store: None,
            created_at: Utc::now(),
        }
    }

    fn names(results: &[RankedResult]) -> Vec<&str> {
        results.iter().map(|r| r.entry.name.as_str()).collect()
    }

    #[test]
    fn test_adaptive_thresholds() {
        let p = ThresholdPolicy::Adaptive;
        assert_eq!(p.threshold("gta"), 0.35);
        assert_eq!(p.threshold("elden"), 0.25);
        assert_eq!(p.threshold("fifa23"), 0.25);
        assert_eq!(p.threshold("cyberpunk"), 0.15);
    }

    #[test]
    fn test_fixed_threshold_ignores_length() {
        let p = ThresholdPolicy::Fixed;
        assert_eq!(p.threshold("a"), 0.10);
        assert_eq!(p.threshold("a much longer query"), 0.10);
    }

    #[test]
    fn test_threshold_counts_chars_not_bytes() {
        // 3 chars, 6 bytes
        assert_eq!(ThresholdPolicy::Adaptive.threshold("ééé"), 0.35);
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!(ThresholdPolicy::parse(" Fixed "), Some(ThresholdPolicy::Fixed));
        assert_eq!(ThresholdPolicy::parse("adaptive"), Some(ThresholdPolicy::Adaptive));
        assert_eq!(ThresholdPolicy::parse("both"), None);
    }

    #[test]
    fn test_red_matches_both_red_dead_titles_only() {
        let catalog = vec![
            record("Red Dead Redemption 2"),
            record("Red Dead Revolver"),
            record("FIFA 23"),
        ];
        let results = rank(&catalog, "red", ThresholdPolicy::Adaptive.threshold("red"), RESULT_CAP);
        let got = names(&results);
        assert_eq!(got.len(), 2);
        assert!(got.contains(&"Red Dead Redemption 2"));
        assert!(got.contains(&"Red Dead Revolver"));
        assert!(results.iter().all(|r| r.contains));
    }

    #[test]
    fn test_similarity_alone_qualifies() {
        // Contained by neither name, but close to both
        let catalog = vec![record("Cyberpunk 2077"), record("Cyberpunk")];
        let results = rank(&catalog, "cyberpunk 2078", 0.15, RESULT_CAP);
        assert_eq!(names(&results), vec!["Cyberpunk 2077", "Cyberpunk"]);
        assert!(results.iter().all(|r| !r.contains));
    }

    #[test]
    fn test_substring_matches_rank_above_similarity_only() {
        let catalog = vec![record("Punk Cyber Edition"), record("Cyberpunk 2077")];
        let results = rank(&catalog, "cyberpunk", 0.15, RESULT_CAP);
        assert_eq!(results[0].entry.name, "Cyberpunk 2077");
        assert!(results[0].contains);
    }

    #[test]
    fn test_contains_beats_higher_score() {
        let mut results = vec![
            RankedResult {
                entry: CatalogEntry::from(&record("Only Similar")),
                contains: false,
                score: 0.9,
            },
            RankedResult {
                entry: CatalogEntry::from(&record("Has Substring")),
                contains: true,
                score: 0.2,
            },
        ];
        sort_ranked(&mut results, RESULT_CAP);
        assert_eq!(names(&results), vec!["Has Substring", "Only Similar"]);
    }

    #[test]
    fn test_equal_keys_sort_alphabetically() {
        // Same words, so identical trigram sets and identical scores
        let catalog = vec![record("Red Dead Revolver"), record("Dead Red Revolver")];
        let results = rank(&catalog, "dead", 0.25, RESULT_CAP);
        assert_eq!(results[0].score, results[1].score);
        assert_eq!(names(&results), vec!["Dead Red Revolver", "Red Dead Revolver"]);
    }

    #[test]
    fn test_higher_score_first_within_same_contains() {
        let catalog = vec![record("Split Fiction Deluxe Bundle Edition"), record("Split Fiction")];
        let results = rank(&catalog, "split fiction", 0.15, RESULT_CAP);
        assert_eq!(results[0].entry.name, "Split Fiction");
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_score_equal_to_threshold_is_excluded() {
        let threshold = ThresholdPolicy::Adaptive.threshold("hade");
        assert_eq!(similarity("hade", "Halo"), threshold);
        assert!(rank(&[record("Halo")], "hade", threshold, RESULT_CAP).is_empty());

        // Just under the score it qualifies
        assert_eq!(rank(&[record("Halo")], "hade", threshold - 0.01, RESULT_CAP).len(), 1);
    }

    #[test]
    fn test_cap_respected() {
        let catalog: Vec<_> = (0..50).map(|i| record(&format!("Game {i:02}"))).collect();
        let results = rank(&catalog, "game", 0.25, RESULT_CAP);
        assert_eq!(results.len(), RESULT_CAP);
        assert_eq!(results[0].entry.name, "Game 00");
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = vec![record("FIFA 23")];
        assert!(rank(&catalog, "zelda", 0.25, RESULT_CAP).is_empty());
    }

    #[test]
    fn test_strip_scores_keeps_order() {
        let catalog = vec![record("B game"), record("A game")];
        let entries = strip_scores(rank(&catalog, "game", 0.25, RESULT_CAP));
        let json = serde_json::to_value(&entries).unwrap();
        assert_eq!(json[0]["name"], "A game");
        assert!(json[0].get("score").is_none());
        assert!(json[0].get("contains").is_none());
    }
}
