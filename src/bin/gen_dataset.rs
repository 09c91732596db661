use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use search_crossover::{
    dataset::{generate_dataset, write_dataset, LARGE, MEDIUM, SMALL},
    util::{init_trace, time},
};
use std::path::PathBuf;

#[derive(Parser)]
struct Args {
    /// Output directory for the standard datasets.
    #[clap(long, default_value = ".")]
    dir: PathBuf,

    /// Also generate the large dataset.
    #[clap(long)]
    large: bool,

    /// Write a single dataset of this many keys to `--out` instead.
    #[clap(short = 'n', long, requires = "out")]
    count: Option<usize>,

    #[clap(long)]
    out: Option<PathBuf>,

    #[clap(long, default_value_t = 42)]
    seed: u64,

    #[clap(short, default_value_t = 0, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> search_crossover::Result<()> {
    let args = Args::parse();
    init_trace(args.verbose);

    // Get a fixed seeded rng.
    let rng = &mut ChaCha8Rng::seed_from_u64(args.seed);

    let jobs = match (args.count, args.out) {
        (Some(n), Some(out)) => vec![(out, n)],
        _ => {
            let mut jobs = vec![SMALL, MEDIUM];
            if args.large {
                jobs.push(LARGE);
            }
            jobs.into_iter()
                .map(|(name, n)| (args.dir.join(name), n))
                .collect()
        }
    };

    for (path, n) in jobs {
        info!("Generating {path:?} with {n} keys..");
        let vals = generate_dataset(n, rng);
        time("write", || write_dataset(&path, &vals))?;
    }
    Ok(())
}
