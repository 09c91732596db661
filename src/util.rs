use log::debug;
use std::time::{Duration, Instant};

/// The integer keys all benchmarks run on.
pub type Key = i64;

/// Run `f` and return its result together with the elapsed wall-clock time.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let r = f();
    (r, start.elapsed())
}

/// Like [`timed`], but log the duration under the name `t` and drop it.
pub fn time<T>(t: &str, f: impl FnOnce() -> T) -> T {
    debug!("{t}: Starting");
    let (r, elapsed) = timed(f);
    debug!("{t}: Elapsed: {:?}", elapsed);
    r
}

/// `(slow - fast) / slow` as a percentage.
pub fn advantage(fast: Duration, slow: Duration) -> f64 {
    let slow = slow.as_secs_f64();
    if slow == 0. {
        return 0.;
    }
    (slow - fast.as_secs_f64()) / slow * 100.
}

/// Install the stderr logger. `verbose` counts extra `-v` flags on top of
/// info level. Panics if a logger is already installed.
pub fn init_trace(verbose: u8) {
    stderrlog::new()
        .color(stderrlog::ColorChoice::Auto)
        .verbosity(2 + verbose as usize)
        .show_level(true)
        .init()
        .unwrap();
}
