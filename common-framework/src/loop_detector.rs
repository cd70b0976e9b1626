//! Infinite-loop safety net for rule actions.
//!
//! A [`Watchdog`] samples a [`CursorProbe`] on a fixed interval and feeds the
//! sampled offset to a [`LoopDetector`]. When the offset stays put for
//! `threshold` consecutive samples the probe is cancelled; the engine that owns
//! the cursor notices the flag and returns an error instead of hanging.
//!
//! This is a heuristic. A fast engine resets the counter on almost every tick,
//! and a loop that happens to straddle sampling boundaries can go unnoticed.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{trace, warn};

/// Default number of identical consecutive samples before a loop is declared.
pub const DEFAULT_THRESHOLD: u32 = 10;

/// Default sampling interval.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Counts how many consecutive observations saw the same offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopDetector {
    last: usize,
    repeats: u32,
    threshold: u32,
}

impl LoopDetector {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(threshold: u32) -> Self {
        Self {
            last: 0,
            repeats: 0,
            threshold,
        }
    }

    /// Records one sample of the cursor offset.
    pub fn observe(&mut self, offset: usize) {
        if offset == self.last {
            self.repeats = self.repeats.saturating_add(1);
        } else {
            self.repeats = 0;
            self.last = offset;
        }
    }

    pub fn is_looping(&self) -> bool {
        self.repeats >= self.threshold
    }

    pub fn repeats(&self) -> u32 {
        self.repeats
    }
}

impl Default for LoopDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Sampling cadence and sensitivity of a [`Watchdog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchdogConfig {
    pub interval: Duration,
    pub threshold: u32,
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// State shared between a cursor and the watchdog observing it.
///
/// The cursor publishes its offset after every move; the watchdog only ever
/// reads it, so both sides get by with atomics and no lock.
#[derive(Debug, Clone, Default)]
pub struct CursorProbe {
    offset: Arc<AtomicUsize>,
    cancelled: Arc<AtomicBool>,
}

impl CursorProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, offset: usize) {
        self.offset.store(offset, Ordering::Relaxed);
    }

    pub fn offset(&self) -> usize {
        self.offset.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// A background sampler owned by one lex call.
///
/// Dropping the watchdog stops and joins its thread, so every return path
/// out of the owning call tears it down.
#[derive(Debug)]
pub struct Watchdog {
    stop: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Watchdog {
    pub fn spawn(probe: CursorProbe, config: WatchdogConfig) -> Self {
        let (stop, stopped) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("parsekit-watchdog".into())
            .spawn(move || watch(probe, config, stopped));

        let handle = match handle {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn!(target: "parsekit::watchdog", error = %err, "could not start loop watchdog");
                None
            }
        };

        Self {
            stop: Some(stop),
            handle,
        }
    }
}

impl Drop for Watchdog {
    fn drop(&mut self) {
        // Disconnecting the channel wakes the sampler immediately.
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn watch(probe: CursorProbe, config: WatchdogConfig, stopped: mpsc::Receiver<()>) {
    let mut detector = LoopDetector::with_threshold(config.threshold);
    loop {
        match stopped.recv_timeout(config.interval) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
        }

        let offset = probe.offset();
        detector.observe(offset);
        if detector.is_looping() {
            warn!(
                target: "parsekit::watchdog",
                offset,
                samples = detector.repeats(),
                "detected a possible infinite loop"
            );
            probe.cancel();
            return;
        }
        trace!(target: "parsekit::watchdog", offset, "no loop detected");
    }
}
