use std::collections::BTreeMap;

use anyhow::Result;
use rpmrank_core::{validate_records, PackageRecord};

mod build;
mod contest;
mod cycles;
mod order;
mod segment;
mod types;

pub use build::build_graph;
pub use contest::{popularity_contest, select_top};
pub use cycles::break_cycles;
pub use order::topo_sort;
pub use segment::SegmentCache;
pub use types::{DependencyGraph, RankedPackage, TopoResult};

/// The `n` most popular installed packages with size at or above
/// `size_threshold`, most popular first.
///
/// A package's popularity is the number of installed packages whose
/// transitive dependency closure contains it, itself included. The whole
/// computation is synchronous and every intermediate structure (graph,
/// segment cache, scores) is discarded when this returns.
pub fn most_popular_packages<F>(
    records: &[PackageRecord],
    providers: F,
    n: usize,
    size_threshold: u64,
) -> Result<Vec<RankedPackage>>
where
    F: FnMut(&str) -> Result<Vec<String>>,
{
    validate_records(records)?;
    let graph = break_cycles(build_graph(records, providers)?);

    let mut cache = SegmentCache::new();
    for node in graph.nodes() {
        cache.ensure(node, &graph);
    }
    let segments = cache.into_segments();

    let scores = popularity_contest(&segments);
    let sizes: BTreeMap<String, u64> = records
        .iter()
        .map(|record| (record.name.clone(), record.size))
        .collect();
    Ok(select_top(&scores, &sizes, n, size_threshold))
}
