//! Benchmark module
//! Wall-clock timing primitives and sampled measurement

pub mod stats;
pub mod timing;

pub use stats::{run_sampled, SampleStats};
pub use timing::{round_secs, time, try_time, Timed};
