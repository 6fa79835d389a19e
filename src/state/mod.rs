//! Per-run crawl state
//!
//! The only state a run keeps is the [`ResultSet`] accumulator, owned by the
//! crawl pass and handed to the output layer once the pass is done.

mod result_set;

pub use result_set::ResultSet;
