use std::collections::{BTreeMap, BTreeSet};

use crate::types::RankedPackage;

/// Count, for every package, the distinct roots whose reachability set
/// contains it. Pure aggregation over already-computed segments; every
/// package scores at least 1 because it sits in its own segment.
pub fn popularity_contest(
    segments: &BTreeMap<String, BTreeSet<String>>,
) -> BTreeMap<String, u64> {
    let mut scores: BTreeMap<String, u64> = BTreeMap::new();
    for segment in segments.values() {
        for name in segment {
            *scores.entry(name.clone()).or_insert(0) += 1;
        }
    }
    scores
}

/// Rank the qualifying packages and keep the first `n`.
///
/// Packages below `size_threshold` are filtered out. Ordering is score
/// descending with ascending name as the deterministic tie-break. Fewer
/// than `n` qualifying packages is not an error.
pub fn select_top(
    scores: &BTreeMap<String, u64>,
    sizes: &BTreeMap<String, u64>,
    n: usize,
    size_threshold: u64,
) -> Vec<RankedPackage> {
    let mut ranked: Vec<RankedPackage> = scores
        .iter()
        .filter_map(|(name, score)| {
            let size = sizes.get(name).copied()?;
            (size >= size_threshold).then(|| RankedPackage {
                name: name.clone(),
                score: *score,
                size,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(n);
    ranked
}
