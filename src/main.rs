use clap::Parser;
use log::{error, info};
use search_crossover::{
    config::{AnalysisConfig, SweepConfig},
    crossover::find_crossover,
    dataset::{read_dataset, LARGE, MEDIUM, SMALL},
    experiments::analyze,
    report::{crossover_summary, separator, timings_table},
    util::{init_trace, time},
    Key,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
struct Args {
    /// Directory holding the dataset files.
    #[clap(long, default_value = ".")]
    dir: PathBuf,

    /// Also run the build + search sweep on the medium dataset. Very slow.
    #[clap(long)]
    medium_total: bool,

    /// Include the large dataset in the timing analysis.
    #[clap(long)]
    large: bool,

    /// First sample size of the search-only sweep.
    #[clap(long, default_value_t = SweepConfig::search_only().seed)]
    search_from: usize,
    #[clap(long, default_value_t = SweepConfig::search_only().step)]
    search_step: usize,

    /// First sample size of the build + search sweep on the small dataset.
    #[clap(long, default_value_t = SweepConfig::total_small().seed)]
    total_from: usize,
    #[clap(long, default_value_t = SweepConfig::total_small().step)]
    total_step: usize,

    /// Existing and missing queries per dataset in the timing analysis.
    #[clap(short, long, default_value_t = AnalysisConfig::default().queries)]
    queries: usize,

    #[clap(short, default_value_t = 0, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// A dataset that cannot be parsed is reported and treated as absent.
fn load(path: &Path) -> Vec<Key> {
    match read_dataset(path) {
        Ok(vals) => vals,
        Err(e) => {
            error!("{e}; skipping this dataset");
            vec![]
        }
    }
}

fn sweep(name: &str, vals: &[Key], cfg: &SweepConfig) {
    if vals.is_empty() {
        info!("No data for the {name} dataset; skipping sweep");
        return;
    }
    let report = time(name, || find_crossover(vals, cfg));
    println!("{}", crossover_summary(&report));
}

fn main() {
    let args = Args::parse();
    init_trace(args.verbose);

    let small = load(&args.dir.join(SMALL.0));

    println!("{}", separator("Crossover (search time only)"));
    let cfg = SweepConfig {
        seed: args.search_from,
        step: args.search_step,
        ..SweepConfig::search_only()
    };
    sweep("small", &small, &cfg);

    println!("{}", separator("Crossover (build + search time)"));
    let cfg = SweepConfig {
        seed: args.total_from,
        step: args.total_step,
        ..SweepConfig::total_small()
    };
    sweep("small", &small, &cfg);

    let medium = load(&args.dir.join(MEDIUM.0));
    if args.medium_total {
        println!("{}", separator("Crossover (build + search time, medium)"));
        sweep("medium", &medium, &SweepConfig::total_medium());
    }

    println!("{}", separator("Build and search timings"));
    let cfg = AnalysisConfig {
        queries: args.queries,
    };
    let mut datasets = vec![(SMALL.0, small), (MEDIUM.0, medium)];
    if args.large {
        datasets.push((LARGE.0, load(&args.dir.join(LARGE.0))));
    }
    for (name, vals) in &datasets {
        if vals.is_empty() {
            continue;
        }
        println!("{}", timings_table(&analyze(name, vals, &cfg)));
    }
}
