pub mod bst;
pub mod config;
pub mod crossover;
pub mod dataset;
pub mod error;
pub mod experiments;
pub mod report;
pub mod sample;
pub mod seq;
pub mod sorted_seq;
pub mod util;

pub use bst::Bst;
pub use error::{Error, Result};
pub use seq::Sequence;
pub use sorted_seq::SortedSequence;
pub use util::Key;

#[ctor::ctor]
fn init_color_backtrace() {
    color_backtrace::install();
}

/// A membership structure built from a sequence of keys, in order.
pub trait SearchIndex: Sized {
    fn build(vals: &[Key]) -> Self;

    fn contains(&self, q: Key) -> bool;

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Number of queries that are present.
    fn query(&self, qs: &[Key]) -> usize {
        qs.iter().filter(|&&q| self.contains(q)).count()
    }
}
