//! Build and lookup timings of the three structures on a whole dataset.

use crate::{
    config::AnalysisConfig,
    sample::{existing_sample, nonexisting_sample},
    util::{timed, Key},
    Bst, SearchIndex, Sequence, SortedSequence,
};
use log::info;
use std::{hint::black_box, time::Duration};

impl SearchIndex for Sequence<Key> {
    fn build(vals: &[Key]) -> Self {
        // No pre-allocation: growing the list is part of its build cost.
        let mut s = Sequence::new();
        s.append_all(vals);
        s
    }

    fn contains(&self, q: Key) -> bool {
        Sequence::contains(self, &q)
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

impl SearchIndex for Bst<Key> {
    fn build(vals: &[Key]) -> Self {
        vals.iter().copied().collect()
    }

    fn contains(&self, q: Key) -> bool {
        Bst::contains(self, &q)
    }

    fn name(&self) -> &'static str {
        "tree"
    }
}

impl SearchIndex for SortedSequence<Key> {
    fn build(vals: &[Key]) -> Self {
        let mut s = SortedSequence::new();
        s.append_all(vals);
        s.sort();
        s
    }

    fn contains(&self, q: Key) -> bool {
        self.binary_search(&q)
    }

    fn name(&self) -> &'static str {
        "sorted list"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexTimings {
    pub name: &'static str,
    pub build: Duration,
    /// Only set for the sorted list: the part of `build` spent sorting.
    pub sort: Option<Duration>,
    pub existing: Duration,
    pub missing: Duration,
    /// Number of existing queries that were found; equals the query count
    /// for a correct index.
    pub found: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetTimings {
    pub dataset: String,
    pub len: usize,
    pub queries: usize,
    pub indices: Vec<IndexTimings>,
}

/// Time `index` on both query sets.
pub fn bench_index<I: SearchIndex>(
    index: &I,
    build: Duration,
    existing: &[Key],
    missing: &[Key],
) -> IndexTimings {
    info!("Benching {}", index.name());
    let (found, t_existing) = timed(|| black_box(index.query(existing)));
    let (_, t_missing) = timed(|| black_box(index.query(missing)));
    IndexTimings {
        name: index.name(),
        build,
        sort: None,
        existing: t_existing,
        missing: t_missing,
        found,
    }
}

fn bench_built<I: SearchIndex>(vals: &[Key], existing: &[Key], missing: &[Key]) -> IndexTimings {
    let (index, build) = timed(|| I::build(vals));
    bench_index(&index, build, existing, missing)
}

/// Build every structure from `vals` and time `cfg.queries` existing and
/// `cfg.queries` missing lookups against each.
pub fn analyze(dataset: &str, vals: &[Key], cfg: &AnalysisConfig) -> DatasetTimings {
    info!("Analyzing {dataset} ({} keys)", vals.len());
    let existing = existing_sample(vals, cfg.queries);
    let missing = nonexisting_sample(vals, cfg.queries);

    let mut indices = vec![
        bench_built::<Bst<Key>>(vals, &existing, &missing),
        bench_built::<Sequence<Key>>(vals, &existing, &missing),
    ];

    // Split the sorted list's build into insertion and sorting.
    let (mut sorted, insert) = timed(|| {
        let mut s = SortedSequence::new();
        s.append_all(vals);
        s
    });
    let ((), sort) = timed(|| sorted.sort());
    let mut t = bench_index(&sorted, insert + sort, &existing, &missing);
    t.sort = Some(sort);
    indices.push(t);

    DatasetTimings {
        dataset: dataset.to_string(),
        len: vals.len(),
        queries: cfg.queries,
        indices,
    }
}
