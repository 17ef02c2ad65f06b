//! Single-shot wall-clock timing
//! Wraps one callable invocation and pairs its return value with the elapsed time

use std::time::{Duration, Instant};

/// A return value paired with the wall-clock time its computation took.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed time in seconds, rounded to `precision` decimal places.
    pub fn elapsed_secs(&self, precision: u32) -> f64 {
        round_secs(self.elapsed.as_secs_f64(), precision)
    }
}

/// Invoke `f` exactly once and measure how long it took.
///
/// The wrapper adds nothing beyond the measurement: no logging, no retries,
/// no state. Panics from `f` unwind through unchanged.
pub fn time<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    Timed { value, elapsed }
}

/// Fallible form of [`time`].
///
/// On `Err` the error propagates untouched and no timing is produced.
pub fn try_time<T, E>(f: impl FnOnce() -> Result<T, E>) -> Result<Timed<T>, E> {
    let start = Instant::now();
    f().map(|value| Timed {
        value,
        elapsed: start.elapsed(),
    })
}

/// Round `secs` to `precision` decimal places.
pub fn round_secs(secs: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (secs * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::thread::sleep;

    #[test]
    fn test_value_passes_through() {
        let timed = time(|| "x");
        assert_eq!(timed.value, "x");
        assert!(timed.elapsed >= Duration::ZERO);
    }

    #[test]
    fn test_sleep_is_measured() {
        let timed = time(|| {
            sleep(Duration::from_millis(10));
            "x"
        });
        let secs = timed.elapsed_secs(3);
        assert_eq!(timed.value, "x");
        // 10ms sleep, ±50ms tolerance
        assert!(secs >= 0.01, "measured {secs}s, under the sleep duration");
        assert!(secs < 0.06, "measured {secs}s, far over the sleep duration");
    }

    #[test]
    fn test_sequential_calls_are_independent() {
        let first = time(|| sleep(Duration::from_millis(10)));
        let second = time(|| sleep(Duration::from_millis(10)));
        // No accumulation across calls
        assert!(second.elapsed < first.elapsed + Duration::from_millis(50));
        assert!(second.elapsed >= Duration::from_millis(10));
    }

    #[test]
    fn test_try_time_ok() {
        let timed = try_time(|| Ok::<_, String>(42)).unwrap();
        assert_eq!(timed.value, 42);
    }

    #[test]
    fn test_try_time_propagates_error() {
        let result: Result<Timed<()>, &str> = try_time(|| Err("template missing"));
        assert_eq!(result.unwrap_err(), "template missing");
    }

    #[test]
    fn test_round_secs() {
        assert_eq!(round_secs(0.0104, 3), 0.01);
        assert_eq!(round_secs(0.0106, 3), 0.011);
        assert_eq!(round_secs(1.23456, 2), 1.23);
        assert_eq!(round_secs(0.0, 3), 0.0);
    }

    proptest! {
        #[test]
        fn prop_any_value_returned_intact(v: i64) {
            let timed = time(move || v);
            prop_assert_eq!(timed.value, v);
            prop_assert!(timed.elapsed_secs(3) >= 0.0);
        }
    }
}
