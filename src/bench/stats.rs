//! Repeated-measurement statistics
//! Warmup plus N timed samples, summarized with percentiles

use std::hint::black_box;
use std::time::Instant;

/// Summary of one sampled measurement run.
#[derive(Debug, Clone)]
pub struct SampleStats {
    pub name: String,
    pub iterations: u64,
    pub total_ns: u64,
    pub avg_ns: f64,
    pub min_ns: u64,
    pub max_ns: u64,
    pub p50_ns: u64,
    pub p99_ns: u64,
    pub throughput_ops: f64,
}

impl std::fmt::Display for SampleStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<12} | avg: {:>9.3}ms | min: {:>9.3}ms | p50: {:>9.3}ms | p99: {:>9.3}ms | throughput: {:>8.1} ops/s",
            self.name,
            self.avg_ns / 1e6,
            self.min_ns as f64 / 1e6,
            self.p50_ns as f64 / 1e6,
            self.p99_ns as f64 / 1e6,
            self.throughput_ops
        )
    }
}

/// Run `f` repeatedly and summarize the per-call latency.
///
/// `warmup` untimed calls precede the `iterations` timed ones.
pub fn run_sampled<T, F>(name: &str, iterations: u64, warmup: u64, mut f: F) -> SampleStats
where
    F: FnMut() -> T,
{
    for _ in 0..warmup {
        black_box(f());
    }

    let mut samples = Vec::with_capacity(iterations as usize);

    for _ in 0..iterations {
        let start = Instant::now();
        black_box(f());
        let elapsed = start.elapsed().as_nanos() as u64;
        samples.push(elapsed);
    }

    samples.sort_unstable();

    let total: u64 = samples.iter().sum();
    let avg = total as f64 / iterations as f64;
    let min = *samples.first().unwrap_or(&0);
    let max = *samples.last().unwrap_or(&0);
    let p50 = samples.get(samples.len() / 2).copied().unwrap_or(0);
    let p99 = samples.get(samples.len() * 99 / 100).copied().unwrap_or(0);
    let throughput = 1_000_000_000.0 / avg;

    SampleStats {
        name: name.to_string(),
        iterations,
        total_ns: total,
        avg_ns: avg,
        min_ns: min,
        max_ns: max,
        p50_ns: p50,
        p99_ns: p99,
        throughput_ops: throughput,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampling_framework() {
        let stats = run_sampled("noop", 1000, 10, || black_box(42));

        assert_eq!(stats.iterations, 1000);
        assert!(stats.avg_ns < 1_000_000.0); // Should be well under a millisecond
        assert!(stats.min_ns <= stats.p50_ns);
        assert!(stats.p50_ns <= stats.p99_ns);
        assert!(stats.p99_ns <= stats.max_ns);
    }

    #[test]
    fn test_display_contains_name() {
        let stats = run_sampled("label", 10, 0, || black_box(1));
        assert!(stats.to_string().contains("label"));
    }
}
