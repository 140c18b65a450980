//! Solve stopwatch.
//!
//! The clock runs a single background ticker thread while active. Every
//! ~10 ms the ticker recomputes the elapsed time from the start instant
//! (never by accumulating tick intervals, so sampling jitter cannot drift
//! the total) and publishes a formatted report. The UI polls the shared
//! state once per frame; `stop()` joins the ticker so no late tick lands
//! after it returns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Ticker period. 10 ms gives hundredth-of-a-second resolution on the
/// readout without burning a core.
const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Readout for a zeroed clock.
pub const ZERO_DISPLAY: &str = "00.00";

/// Format a duration as `SS.CC` — whole seconds (zero-padded to two
/// digits, growing past 99) and hundredths.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:02}.{:02}", elapsed.as_secs(), elapsed.subsec_millis() / 10)
}

/// State shared between the ticker thread and the owning `Clock`.
struct ClockShared {
    elapsed: Duration,
    display: String,
}

impl ClockShared {
    fn zeroed() -> Self {
        Self {
            elapsed: Duration::ZERO,
            display: ZERO_DISPLAY.to_string(),
        }
    }

    fn publish(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
        self.display = format_elapsed(elapsed);
    }
}

/// A stopwatch backed by a background ticker thread.
pub struct Clock {
    running: Arc<AtomicBool>,
    shared: Arc<Mutex<ClockShared>>,
    started: Option<Instant>,
    ticker: Option<JoinHandle<()>>,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            shared: Arc::new(Mutex::new(ClockShared::zeroed())),
            started: None,
            ticker: None,
        }
    }

    /// Start the stopwatch and its ticker thread. A no-op when already
    /// running, so a toggle button cannot lose the start instant.
    pub fn start(&mut self) {
        if self.running.load(Ordering::Relaxed) {
            return;
        }
        self.running.store(true, Ordering::Relaxed);

        let running = Arc::clone(&self.running);
        let shared = Arc::clone(&self.shared);
        let started = Instant::now();
        self.started = Some(started);

        self.ticker = Some(thread::spawn(move || {
            while running.load(Ordering::Relaxed) {
                let elapsed = started.elapsed();
                if let Ok(mut state) = shared.lock() {
                    state.publish(elapsed);
                }
                thread::sleep(TICK_INTERVAL);
            }
        }));
    }

    /// Stop the stopwatch. Blocks until the ticker thread has exited, so
    /// no tick can land after this returns, then publishes one final
    /// reading taken at stop time. That reading stays readable.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.ticker.take() {
            let _ = handle.join();
        }
        if let Some(started) = self.started.take() {
            let elapsed = started.elapsed();
            if let Ok(mut state) = self.shared.lock() {
                state.publish(elapsed);
            }
        }
    }

    /// Zero the elapsed time and the readout. Does not touch the running
    /// state; a running ticker overwrites the zeroed readout on its next
    /// tick.
    pub fn reset(&mut self) {
        if let Ok(mut state) = self.shared.lock() {
            *state = ClockShared::zeroed();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Latest computed elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.shared
            .lock()
            .map(|state| state.elapsed)
            .unwrap_or(Duration::ZERO)
    }

    /// Latest `SS.CC` readout.
    pub fn display(&self) -> String {
        self.shared
            .lock()
            .map(|state| state.display.clone())
            .unwrap_or_else(|_| ZERO_DISPLAY.to_string())
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.ticker.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::ZERO), "00.00");
        assert_eq!(format_elapsed(Duration::from_millis(90)), "00.09");
        assert_eq!(format_elapsed(Duration::from_millis(7420)), "07.42");
        assert_eq!(format_elapsed(Duration::from_millis(59_990)), "59.99");
        // Seconds keep growing past the two-digit field
        assert_eq!(format_elapsed(Duration::from_millis(119_420)), "119.42");
    }

    #[test]
    fn test_new_clock_reads_zero() {
        let clock = Clock::new();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed(), Duration::ZERO);
        assert_eq!(clock.display(), "00.00");
    }

    #[test]
    fn test_start_wait_stop_measures_at_least_the_wait() {
        let mut clock = Clock::new();
        clock.start();
        assert!(clock.is_running());
        thread::sleep(Duration::from_millis(60));
        clock.stop();
        assert!(!clock.is_running());
        assert!(clock.elapsed() >= Duration::from_millis(60));
    }

    #[test]
    fn test_elapsed_is_monotonic_while_running() {
        let mut clock = Clock::new();
        clock.start();
        let mut previous = Duration::ZERO;
        for _ in 0..10 {
            thread::sleep(Duration::from_millis(5));
            let now = clock.elapsed();
            assert!(now >= previous);
            previous = now;
        }
        clock.stop();
    }

    #[test]
    fn test_stop_freezes_the_reading() {
        let mut clock = Clock::new();
        clock.start();
        thread::sleep(Duration::from_millis(30));
        clock.stop();
        let frozen = clock.elapsed();
        let display = clock.display();
        thread::sleep(Duration::from_millis(30));
        assert_eq!(clock.elapsed(), frozen);
        assert_eq!(clock.display(), display);
    }

    #[test]
    fn test_reset_reports_zero_regardless_of_prior_elapsed() {
        let mut clock = Clock::new();
        clock.start();
        thread::sleep(Duration::from_millis(30));
        clock.stop();
        assert_ne!(clock.display(), "00.00");
        clock.reset();
        assert_eq!(clock.display(), "00.00");
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_reset_does_not_stop_a_running_clock() {
        let mut clock = Clock::new();
        clock.start();
        clock.reset();
        assert!(clock.is_running());
        thread::sleep(Duration::from_millis(30));
        // Next ticks overwrite the zeroed readout
        assert!(clock.elapsed() > Duration::ZERO);
        clock.stop();
    }

    #[test]
    fn test_start_while_running_is_a_noop() {
        let mut clock = Clock::new();
        clock.start();
        thread::sleep(Duration::from_millis(40));
        let before = clock.elapsed();
        clock.start();
        thread::sleep(Duration::from_millis(20));
        clock.stop();
        // A second start must not rebase the start instant
        assert!(clock.elapsed() >= before);
    }

    #[test]
    fn test_clock_can_be_restarted_after_stop() {
        let mut clock = Clock::new();
        clock.start();
        thread::sleep(Duration::from_millis(20));
        clock.stop();
        clock.start();
        assert!(clock.is_running());
        thread::sleep(Duration::from_millis(20));
        clock.stop();
        assert!(clock.elapsed() >= Duration::from_millis(20));
    }
}
