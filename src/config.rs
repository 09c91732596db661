use std::fmt;

/// Which durations are summed when comparing the tree against the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostModel {
    /// Only the time spent answering queries.
    SearchOnly,
    /// Time to build the structure plus time to answer the queries.
    BuildAndSearch,
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostModel::SearchOnly => write!(f, "search only"),
            CostModel::BuildAndSearch => write!(f, "build + search"),
        }
    }
}

/// Number of queries per value class in one sweep iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryCount {
    /// `quantity / 2`.
    Half,
    Fixed(usize),
}

impl QueryCount {
    pub fn for_quantity(self, quantity: usize) -> usize {
        match self {
            QueryCount::Half => quantity / 2,
            QueryCount::Fixed(k) => k,
        }
    }
}

/// Parameters of one crossover sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    /// Sample size of the first iteration.
    pub seed: usize,
    /// Increment of the sample size per iteration.
    pub step: usize,
    pub queries: QueryCount,
    pub model: CostModel,
}

impl SweepConfig {
    pub fn search_only() -> Self {
        SweepConfig {
            seed: 10,
            step: 10,
            queries: QueryCount::Half,
            model: CostModel::SearchOnly,
        }
    }

    pub fn total_small() -> Self {
        SweepConfig {
            seed: 100,
            step: 10,
            queries: QueryCount::Half,
            model: CostModel::BuildAndSearch,
        }
    }

    /// Very slow: each iteration scans a list of half a million keys per
    /// query.
    pub fn total_medium() -> Self {
        SweepConfig {
            seed: 500_000,
            step: 1000,
            queries: QueryCount::Fixed(1000),
            model: CostModel::BuildAndSearch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Existing and non-existing queries per dataset, each.
    pub queries: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig { queries: 500 }
    }
}
