use std::cmp::Reverse;
use std::collections::HashMap;

use crate::models::{LanguageBytes, SkillEntry};
use crate::taxonomy::language_style;

pub const MAX_LANGUAGES: usize = 5;

/// Folds per-repository language byte counts into a percentage ranking.
pub struct LanguageAggregator {
    limit: usize,
}

impl LanguageAggregator {
    pub fn new() -> Self {
        Self {
            limit: MAX_LANGUAGES,
        }
    }

    pub fn aggregate(&self, per_repo: &[LanguageBytes]) -> LanguageBytes {
        let mut totals: LanguageBytes = HashMap::new();
        for languages in per_repo {
            for (language, bytes) in languages {
                *totals.entry(language.clone()).or_insert(0) += bytes;
            }
        }
        totals
    }

    /// Top languages by share of total bytes, as whole percentages.
    ///
    /// Returns an empty list when no bytes were counted.
    pub fn rank(&self, totals: &LanguageBytes) -> Vec<SkillEntry> {
        let total_bytes: u64 = totals.values().sum();
        if total_bytes == 0 {
            return Vec::new();
        }

        let mut shares: Vec<(&str, u64, f64)> = totals
            .iter()
            .map(|(name, &bytes)| (name.as_str(), bytes, percentage(bytes, total_bytes)))
            .collect();
        shares.sort_by_key(|&(name, bytes, exact)| (Reverse(exact.round() as u32), Reverse(bytes), name));
        shares.truncate(self.limit);

        let levels = rounded_percentages(&shares.iter().map(|s| s.2).collect::<Vec<_>>());

        shares
            .iter()
            .zip(levels)
            .map(|(&(name, _, _), level)| {
                let style = language_style(name);
                SkillEntry {
                    name: name.to_string(),
                    level,
                    icon: style.icon.to_string(),
                    color: style.color.to_string(),
                }
            })
            .collect()
    }
}

impl Default for LanguageAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Share of `whole` taken by `part`, in percent.
///
/// Divides before scaling. The order changes how values near `.5` round.
pub(crate) fn percentage(part: u64, whole: u64) -> f64 {
    part as f64 / whole as f64 * 100.0
}

/// Rounds each share to the nearest integer, then takes one point back from
/// the entries that gained most from rounding until the sum is at most 100.
fn rounded_percentages(exact: &[f64]) -> Vec<u32> {
    let mut levels: Vec<u32> = exact.iter().map(|p| p.round() as u32).collect();
    let mut excess = levels.iter().sum::<u32>().saturating_sub(100);

    if excess > 0 {
        let mut by_gain: Vec<usize> = (0..exact.len()).collect();
        by_gain.sort_by(|&a, &b| {
            let gain_a = levels[a] as f64 - exact[a];
            let gain_b = levels[b] as f64 - exact[b];
            gain_b.total_cmp(&gain_a)
        });
        for idx in by_gain {
            if excess == 0 {
                break;
            }
            if levels[idx] > 0 {
                levels[idx] -= 1;
                excess -= 1;
            }
        }
    }

    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(pairs: &[(&str, u64)]) -> LanguageBytes {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_percentages_from_bytes() {
        let aggregator = LanguageAggregator::new();
        let totals = aggregator.aggregate(&[bytes(&[("JavaScript", 300), ("Python", 100)])]);
        let ranked = aggregator.rank(&totals);

        assert_eq!(ranked.len(), 2);
        assert_eq!((ranked[0].name.as_str(), ranked[0].level), ("JavaScript", 75));
        assert_eq!((ranked[1].name.as_str(), ranked[1].level), ("Python", 25));
        assert_eq!(ranked[1].icon, "fab fa-python");
    }

    #[test]
    fn test_sums_across_repositories() {
        let aggregator = LanguageAggregator::new();
        let totals = aggregator.aggregate(&[
            bytes(&[("Rust", 600), ("Shell", 50)]),
            LanguageBytes::new(),
            bytes(&[("Rust", 200), ("Shell", 150)]),
        ]);

        assert_eq!(totals["Rust"], 800);
        assert_eq!(totals["Shell"], 200);

        let ranked = aggregator.rank(&totals);
        assert_eq!(ranked[0].level, 80);
        assert_eq!(ranked[1].level, 20);
    }

    #[test]
    fn test_zero_bytes_yields_empty_list() {
        let aggregator = LanguageAggregator::new();
        assert!(aggregator.rank(&LanguageBytes::new()).is_empty());
        assert!(aggregator.rank(&bytes(&[("Rust", 0), ("Go", 0)])).is_empty());
    }

    #[test]
    fn test_keeps_top_five() {
        let aggregator = LanguageAggregator::new();
        let totals = bytes(&[
            ("A", 400),
            ("B", 200),
            ("C", 150),
            ("D", 100),
            ("E", 80),
            ("F", 70),
        ]);

        let ranked = aggregator.rank(&totals);
        let names: Vec<_> = ranked.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_rounding_never_exceeds_one_hundred() {
        let aggregator = LanguageAggregator::new();
        let ranked = aggregator.rank(&bytes(&[("Go", 101), ("Rust", 99)]));

        let sum: u32 = ranked.iter().map(|e| e.level).sum();
        assert!(sum <= 100);
        assert_eq!(ranked[0].name, "Go");
    }

    #[test]
    fn test_divides_before_scaling() {
        assert_eq!(percentage(29, 200).round() as u32, 14);
        assert_eq!(percentage(171, 200).round() as u32, 86);

        let aggregator = LanguageAggregator::new();
        let ranked = aggregator.rank(&bytes(&[("A", 29), ("B", 171)]));

        let levels: Vec<_> = ranked.iter().map(|e| (e.name.as_str(), e.level)).collect();
        assert_eq!(levels, [("B", 86), ("A", 14)]);
    }

    #[test]
    fn test_thirds_round_down() {
        let aggregator = LanguageAggregator::new();
        let ranked = aggregator.rank(&bytes(&[("C", 1), ("Go", 1), ("Rust", 1)]));

        let levels: Vec<_> = ranked.iter().map(|e| e.level).collect();
        assert_eq!(levels, [33, 33, 33]);
        let names: Vec<_> = ranked.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["C", "Go", "Rust"]);
    }

    #[test]
    fn test_unknown_language_gets_generic_style() {
        let aggregator = LanguageAggregator::new();
        let ranked = aggregator.rank(&bytes(&[("Zig", 10)]));

        assert_eq!(ranked[0].level, 100);
        assert_eq!(ranked[0].icon, "fas fa-code");
        assert_eq!(ranked[0].color, "text-gray-400");
    }
}
