use crate::{
    crossover::{CrossoverReport, State, ValueClass},
    experiments::DatasetTimings,
    util::advantage,
};
use std::fmt;

const WIDTH: usize = 60;

pub fn separator(title: &str) -> String {
    let bar = "=".repeat(WIDTH);
    format!("\n{bar}\n{title:^WIDTH$}\n{bar}")
}

pub fn crossover_summary(r: &CrossoverReport) -> String {
    CrossoverSummary(r).to_string()
}

pub fn timings_table(t: &DatasetTimings) -> String {
    TimingsTable(t).to_string()
}

/// Final report of a sweep: the crossover point and advantage per value
/// class.
pub struct CrossoverSummary<'a>(pub &'a CrossoverReport);

impl fmt::Display for CrossoverSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        let title = format!("CROSSOVER REPORT ({})", r.model);
        writeln!(f, "{title:^WIDTH$}")?;
        writeln!(f, "{}", "-".repeat(WIDTH))?;
        for class in [ValueClass::Missing, ValueClass::Existing] {
            match r.state(class) {
                State::Found(c) => {
                    writeln!(f, "\n>>> {class} VALUES")?;
                    writeln!(f, "    The tree beats the list from N = {} keys", c.n)?;
                    writeln!(f, "    Tree      : {:.6}s", c.tree.as_secs_f64())?;
                    writeln!(f, "    List      : {:.6}s", c.list.as_secs_f64())?;
                    writeln!(
                        f,
                        "    Advantage : tree was {:.1}% faster at this point",
                        advantage(c.tree, c.list)
                    )?;
                }
                State::Searching | State::Exhausted => {
                    writeln!(f, "[x] {class:<8} : no crossover found in this dataset")?;
                }
            }
        }
        write!(f, "{}", "-".repeat(WIDTH))
    }
}

/// Build and lookup times of every structure on one dataset, in seconds.
pub struct TimingsTable<'a>(pub &'a DatasetTimings);

impl fmt::Display for TimingsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.0;
        writeln!(
            f,
            "{} ({} keys, {} queries per class)",
            t.dataset, t.len, t.queries
        )?;
        writeln!(
            f,
            "{:<12} {:>12} {:>12} {:>12} {:>12}",
            "structure", "build", "sort", "existing", "missing"
        )?;
        for i in &t.indices {
            let sort = i
                .sort
                .map(|d| format!("{:.6}", d.as_secs_f64()))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:<12} {:>12.6} {:>12} {:>12.6} {:>12.6}",
                i.name,
                i.build.as_secs_f64(),
                sort,
                i.existing.as_secs_f64(),
                i.missing.as_secs_f64()
            )?;
        }
        Ok(())
    }
}
