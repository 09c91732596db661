//! Sweep over growing sample sizes to find where the tree starts beating the
//! list.
//!
//! Each iteration takes an evenly strided sample of `quantity` keys from the
//! dataset, builds a fresh [`Sequence`] and a fresh [`Bst`] from it, and times
//! lookups of keys that are present and keys that are absent. The first
//! sample size at which the tree is strictly faster is recorded per value
//! class and never revisited.

use crate::{
    bst::Bst,
    config::{CostModel, SweepConfig},
    sample::{existing_sample, nonexisting_sample},
    seq::Sequence,
    util::{timed, Key},
    SearchIndex,
};
use log::{debug, info};
use std::{fmt, hint::black_box, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueClass {
    /// Queries for keys present in the sample.
    Existing,
    /// Queries for keys above the sample's maximum.
    Missing,
}

impl fmt::Display for ValueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueClass::Existing => f.pad("EXISTING"),
            ValueClass::Missing => f.pad("MISSING"),
        }
    }
}

/// The first sample size at which the tree beat the list, with the two
/// costs measured there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossover {
    pub n: usize,
    pub tree: Duration,
    pub list: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Searching,
    Found(Crossover),
    /// The sweep ran out of samples before the tree won.
    Exhausted,
}

impl State {
    pub fn crossover(&self) -> Option<Crossover> {
        match self {
            State::Found(c) => Some(*c),
            _ => None,
        }
    }

    fn is_terminal(&self) -> bool {
        !matches!(self, State::Searching)
    }
}

/// Wall-clock durations of one sweep iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Measurement {
    pub build_list: Duration,
    pub build_tree: Duration,
    pub list_missing: Duration,
    pub tree_missing: Duration,
    pub list_existing: Duration,
    pub tree_existing: Duration,
}

impl Measurement {
    /// `(tree, list)` cost of one value class under `model`.
    pub fn cost(&self, model: CostModel, class: ValueClass) -> (Duration, Duration) {
        let (tree, list) = match class {
            ValueClass::Existing => (self.tree_existing, self.list_existing),
            ValueClass::Missing => (self.tree_missing, self.list_missing),
        };
        match model {
            CostModel::SearchOnly => (tree, list),
            CostModel::BuildAndSearch => (self.build_tree + tree, self.build_list + list),
        }
    }
}

/// Outcome of a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossoverReport {
    pub model: CostModel,
    pub existing: State,
    pub missing: State,
    /// Number of measured iterations.
    pub iterations: usize,
}

impl CrossoverReport {
    pub fn new(model: CostModel) -> Self {
        CrossoverReport {
            model,
            existing: State::Searching,
            missing: State::Searching,
            iterations: 0,
        }
    }

    pub fn state(&self, class: ValueClass) -> &State {
        match class {
            ValueClass::Existing => &self.existing,
            ValueClass::Missing => &self.missing,
        }
    }

    fn state_mut(&mut self, class: ValueClass) -> &mut State {
        match class {
            ValueClass::Existing => &mut self.existing,
            ValueClass::Missing => &mut self.missing,
        }
    }

    pub fn is_done(&self) -> bool {
        self.existing.is_terminal() && self.missing.is_terminal()
    }

    /// Feed one iteration's costs for `class`. Records a crossover the first
    /// time `tree < list`; later observations for a found class are ignored.
    /// Returns whether this call recorded the crossover.
    pub fn observe(
        &mut self,
        class: ValueClass,
        n: usize,
        tree: Duration,
        list: Duration,
    ) -> bool {
        let state = self.state_mut(class);
        if *state != State::Searching || tree >= list {
            return false;
        }
        *state = State::Found(Crossover { n, tree, list });
        info!("Crossover ({class}) detected at N = {n}: tree {tree:?} < list {list:?}");
        true
    }

    /// Feed a full [`Measurement`] for both classes.
    pub fn observe_all(&mut self, n: usize, m: &Measurement) {
        for class in [ValueClass::Missing, ValueClass::Existing] {
            let (tree, list) = m.cost(self.model, class);
            self.observe(class, n, tree, list);
        }
        self.iterations += 1;
    }

    fn exhaust(&mut self) {
        for class in [ValueClass::Missing, ValueClass::Existing] {
            let state = self.state_mut(class);
            if *state == State::Searching {
                *state = State::Exhausted;
            }
        }
    }
}

/// Build both structures from `sample` and time `queries` lookups per value
/// class against each.
///
/// Builds are only timed under [`CostModel::BuildAndSearch`]; under
/// [`CostModel::SearchOnly`] the build durations are left at zero.
pub fn measure(sample: &[Key], queries: usize, model: CostModel) -> Measurement {
    let missing = nonexisting_sample(sample, queries);
    let existing = existing_sample(sample, queries);

    let build_list = || <Sequence<Key> as SearchIndex>::build(sample);
    let build_tree = || <Bst<Key> as SearchIndex>::build(sample);
    let ((list, build_list), (tree, build_tree)) = match model {
        CostModel::BuildAndSearch => (timed(build_list), timed(build_tree)),
        CostModel::SearchOnly => (
            (build_list(), Duration::ZERO),
            (build_tree(), Duration::ZERO),
        ),
    };
    debug!(
        "n = {:>8}: tree has {} keys, depth {}",
        sample.len(),
        tree.len(),
        tree.depth()
    );

    let count_list = |qs: &[Key]| timed(|| black_box(list.query(qs))).1;
    let count_tree = |qs: &[Key]| timed(|| black_box(tree.query(qs))).1;

    let list_missing = count_list(&missing);
    let tree_missing = count_tree(&missing);
    let list_existing = count_list(&existing);
    let tree_existing = count_tree(&existing);

    Measurement {
        build_list,
        build_tree,
        list_missing,
        tree_missing,
        list_existing,
        tree_existing,
    }
}

/// Run the sweep described by `cfg` over `data`, timing each iteration
/// with [`measure`].
pub fn find_crossover(data: &[Key], cfg: &SweepConfig) -> CrossoverReport {
    find_crossover_with(data, cfg, |sample, queries| {
        measure(sample, queries, cfg.model)
    })
}

/// Run the sweep described by `cfg` over `data`.
///
/// `measure` is called once per iteration with the working sample of
/// `quantity` keys and the per-class query count. Iterations whose query
/// count is zero are skipped: with nothing to look up, the comparison would
/// only reflect timer noise.
///
/// Stops when both value classes have a crossover, or when the samples run
/// out: the dataset is empty, or `quantity` exceeds its length (beyond that
/// the strided sample degenerates into copies of `data[0]`).
pub fn find_crossover_with(
    data: &[Key],
    cfg: &SweepConfig,
    mut measure: impl FnMut(&[Key], usize) -> Measurement,
) -> CrossoverReport {
    let mut report = CrossoverReport::new(cfg.model);
    info!(
        "Searching crossover ({}) over {} keys, from {} in steps of {}",
        cfg.model,
        data.len(),
        cfg.seed,
        cfg.step
    );

    let mut quantity = cfg.seed;
    while !report.is_done() && quantity <= data.len() {
        let sample = existing_sample(data, quantity);
        let n = sample.len();
        if n == 0 {
            break;
        }

        let queries = cfg.queries.for_quantity(quantity);
        if queries > 0 {
            let m = measure(&sample, queries);
            debug!("n = {n:>8}: {m:?}");
            report.observe_all(n, &m);
        }

        match quantity.checked_add(cfg.step) {
            Some(q) if cfg.step > 0 => quantity = q,
            _ => break,
        }
    }

    report.exhaust();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QueryCount;

    fn ms(x: u64) -> Duration {
        Duration::from_millis(x)
    }

    fn search(tree: u64, list: u64) -> Measurement {
        Measurement {
            tree_missing: ms(tree),
            list_missing: ms(list),
            tree_existing: ms(tree),
            list_existing: ms(list),
            ..Default::default()
        }
    }

    fn cfg(seed: usize, step: usize, queries: QueryCount, model: CostModel) -> SweepConfig {
        SweepConfig {
            seed,
            step,
            queries,
            model,
        }
    }

    #[test]
    fn first_detection_wins() {
        let mut r = CrossoverReport::new(CostModel::SearchOnly);
        assert!(!r.observe(ValueClass::Missing, 10, ms(5), ms(5)));
        assert!(r.observe(ValueClass::Missing, 20, ms(4), ms(5)));
        assert!(!r.observe(ValueClass::Missing, 30, ms(1), ms(9)));
        assert_eq!(
            r.missing,
            State::Found(Crossover {
                n: 20,
                tree: ms(4),
                list: ms(5)
            })
        );
        assert_eq!(r.existing, State::Searching);
        assert!(!r.is_done());
        r.observe(ValueClass::Existing, 40, ms(1), ms(2));
        assert!(r.is_done());
    }

    #[test]
    fn cost_models() {
        let m = Measurement {
            build_list: ms(1),
            build_tree: ms(10),
            list_missing: ms(8),
            tree_missing: ms(2),
            list_existing: ms(4),
            tree_existing: ms(3),
        };
        assert_eq!(m.cost(CostModel::SearchOnly, ValueClass::Missing), (ms(2), ms(8)));
        assert_eq!(m.cost(CostModel::SearchOnly, ValueClass::Existing), (ms(3), ms(4)));
        assert_eq!(
            m.cost(CostModel::BuildAndSearch, ValueClass::Missing),
            (ms(12), ms(9))
        );

        let mut r = CrossoverReport::new(CostModel::BuildAndSearch);
        r.observe_all(100, &m);
        assert_eq!(r.missing, State::Searching);
        assert_eq!(r.existing, State::Searching);
        assert_eq!(r.iterations, 1);
    }

    #[test]
    fn sweep_passes_sample_and_half_queries() {
        let data: Vec<Key> = (0..100).collect();
        let mut calls = vec![];
        let r = find_crossover_with(
            &data,
            &cfg(10, 10, QueryCount::Half, CostModel::SearchOnly),
            |sample, queries| {
                calls.push((sample.len(), queries, sample[1] - sample[0]));
                search(5, 5)
            },
        );
        // Never crosses: runs until quantity passes the dataset length.
        assert_eq!(r.iterations, 10);
        assert_eq!(r.missing, State::Exhausted);
        assert_eq!(r.existing, State::Exhausted);
        let expected = (1..=10)
            .map(|i| (10 * i, 5 * i, (100 / (10 * i)) as Key))
            .collect::<Vec<_>>();
        assert_eq!(calls, expected);
    }

    #[test]
    fn sweep_stops_once_both_classes_cross() {
        let data: Vec<Key> = (0..1000).collect();
        let mut script = vec![
            search(5, 5),
            // Missing crosses here, existing does not.
            Measurement {
                tree_missing: ms(3),
                list_missing: ms(4),
                tree_existing: ms(6),
                list_existing: ms(4),
                ..Default::default()
            },
            // A faster missing result must not replace the first one.
            Measurement {
                tree_missing: ms(1),
                list_missing: ms(9),
                tree_existing: ms(2),
                list_existing: ms(7),
                ..Default::default()
            },
            search(0, 100),
        ]
        .into_iter();
        let r = find_crossover_with(
            &data,
            &cfg(100, 50, QueryCount::Fixed(7), CostModel::SearchOnly),
            |_, queries| {
                assert_eq!(queries, 7);
                script.next().expect("sweep ran past the crossover")
            },
        );
        assert_eq!(r.iterations, 3);
        assert_eq!(
            r.missing,
            State::Found(Crossover {
                n: 150,
                tree: ms(3),
                list: ms(4)
            })
        );
        assert_eq!(
            r.existing,
            State::Found(Crossover {
                n: 200,
                tree: ms(2),
                list: ms(7)
            })
        );
    }

    #[test]
    fn build_time_counts_only_in_total_model() {
        let data: Vec<Key> = (0..100).collect();
        // The tree searches faster but builds slower: 10 + 2 > 1 + 8.
        let m = Measurement {
            build_list: ms(1),
            build_tree: ms(10),
            list_missing: ms(8),
            tree_missing: ms(2),
            list_existing: ms(8),
            tree_existing: ms(2),
        };

        let r = find_crossover_with(
            &data,
            &cfg(10, 10, QueryCount::Half, CostModel::SearchOnly),
            |_, _| m,
        );
        assert_eq!(r.iterations, 1);
        assert_eq!(
            r.missing.crossover().map(|c| (c.n, c.tree, c.list)),
            Some((10, ms(2), ms(8)))
        );

        let r = find_crossover_with(
            &data,
            &cfg(10, 10, QueryCount::Half, CostModel::BuildAndSearch),
            |_, _| m,
        );
        assert_eq!(r.iterations, 10);
        assert_eq!(r.missing, State::Exhausted);
        assert_eq!(r.existing, State::Exhausted);
    }

    #[test]
    fn iterations_without_queries_are_skipped() {
        let mut called = false;
        let r = find_crossover_with(
            &[7],
            &cfg(1, 1, QueryCount::Half, CostModel::SearchOnly),
            |_, _| {
                called = true;
                search(0, 100)
            },
        );
        assert!(!called);
        assert_eq!(r.iterations, 0);
        assert_eq!(r.missing, State::Exhausted);
        assert_eq!(r.existing, State::Exhausted);
    }

    #[test]
    fn search_only_does_not_time_builds() {
        let sample: Vec<Key> = (0..500).rev().collect();
        let m = measure(&sample, 50, CostModel::SearchOnly);
        assert_eq!(m.build_list, Duration::ZERO);
        assert_eq!(m.build_tree, Duration::ZERO);
        let m = measure(&sample, 50, CostModel::BuildAndSearch);
        assert!(m.build_tree > Duration::ZERO);
    }

    #[test]
    fn empty_dataset() {
        let r = find_crossover(&[], &SweepConfig::search_only());
        assert_eq!(r.iterations, 0);
        assert_eq!(r.missing, State::Exhausted);
        assert_eq!(r.existing, State::Exhausted);
    }

    #[test]
    fn seed_larger_than_dataset() {
        let data: Vec<Key> = (0..50).collect();
        let r = find_crossover(&data, &SweepConfig::total_small());
        assert_eq!(r.iterations, 0);
        assert!(r.is_done());
    }

    #[test]
    fn zero_step_runs_once() {
        let data: Vec<Key> = (0..100).collect();
        let r = find_crossover_with(
            &data,
            &cfg(20, 0, QueryCount::Fixed(5), CostModel::BuildAndSearch),
            |_, _| search(5, 5),
        );
        assert_eq!(r.iterations, 1);
    }
}
