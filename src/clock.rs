//! Monotonic tick source backing all latency measurements.
//!
//! Ticks are nanoseconds elapsed since a process-wide origin that is fixed
//! the first time the clock is read. The origin never moves afterwards, so
//! `now()` is monotonic and tick deltas taken anywhere in the process are
//! directly comparable.

use std::sync::OnceLock;
use std::time::Instant;

/// A reading of the monotonic clock, in ticks.
pub type Ticks = u64;

/// Ticks per second for this clock. Constant for the process lifetime.
pub const TICKS_PER_SECOND: Ticks = 1_000_000_000;

// One-time initialization of the clock origin (not thread-local).
static ORIGIN: OnceLock<Instant> = OnceLock::new();

/// Read the current tick count.
///
/// Monotonic and non-decreasing: the underlying source is [`Instant`], which
/// is guaranteed never to go backwards.
pub fn now() -> Ticks {
    let origin = ORIGIN.get_or_init(Instant::now);
    origin.elapsed().as_nanos() as Ticks
}

/// Ticks per second of the underlying clock source.
pub fn ticks_per_second() -> Ticks {
    TICKS_PER_SECOND
}

/// Convert a tick span to milliseconds.
pub fn elapsed_millis(start: Ticks, stop: Ticks) -> f64 {
    1000.0 * (stop.saturating_sub(start)) as f64 / ticks_per_second() as f64
}

/// Convert a tick span to seconds.
pub fn elapsed_seconds(start: Ticks, stop: Ticks) -> f64 {
    (stop.saturating_sub(start)) as f64 / ticks_per_second() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_non_decreasing() {
        let mut prev = now();
        for _ in 0..1000 {
            let t = now();
            assert!(t >= prev);
            prev = t;
        }
    }

    #[test]
    fn conversions_use_tick_frequency() {
        let half_second = ticks_per_second() / 2;
        assert!((elapsed_seconds(0, half_second) - 0.5).abs() < 1e-12);
        assert!((elapsed_millis(0, half_second) - 500.0).abs() < 1e-9);
    }

    #[test]
    fn reversed_span_is_zero_not_underflow() {
        assert_eq!(elapsed_millis(100, 50), 0.0);
    }
}
