#![forbid(unsafe_code)]

//! Time-based call suppression for high-frequency input.
//!
//! Pointer-move samples arrive far faster than a grid needs to re-resolve
//! its drop target. This module provides two schedulers:
//!
//! - [`Debounce`]: delivers a call only after `wait` has elapsed with no
//!   further calls (or, in immediate mode, delivers the first call of a
//!   burst and suppresses the rest).
//! - [`Throttle`]: delivers at most one call per `wait` window. The first
//!   call of a window is delivered immediately; calls suppressed inside the
//!   window coalesce into one trailing delivery at the window boundary.
//!
//! # Time model
//!
//! The schedulers never spawn timers. Every entry point takes `now`, and the
//! host drives deferred deliveries by calling `poll(now)` from its tick or
//! timer loop. This keeps behavior deterministic under a synthetic clock.
//!
//! # Latest wins
//!
//! Suppressed calls are not queued. Only the arguments of the most recent
//! suppressed call are kept for the trailing delivery.
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use grill_core::rate_limit::Throttle;
//! use web_time::Instant;
//!
//! let t0 = Instant::now();
//! let mut throttle = Throttle::new(Duration::from_millis(60));
//!
//! assert_eq!(throttle.call(t0, 1), Some(1));
//! assert_eq!(throttle.call(t0 + Duration::from_millis(10), 2), None);
//! assert_eq!(throttle.call(t0 + Duration::from_millis(20), 3), None);
//!
//! // Window boundary: the latest suppressed call is delivered once.
//! assert_eq!(throttle.poll(t0 + Duration::from_millis(60)), Some(3));
//! assert_eq!(throttle.poll(t0 + Duration::from_millis(500)), None);
//! ```

use std::time::Duration;

use web_time::Instant;

// ---------------------------------------------------------------------------
// Debounce
// ---------------------------------------------------------------------------

/// Delivers a call once the caller has been quiet for `wait`.
///
/// Each call restarts the timer. In trailing mode (`immediate == false`) the
/// arguments of the last call are delivered when the timer elapses. In
/// immediate mode the first call of a quiet period is delivered
/// synchronously and the trailing delivery is suppressed for that burst.
#[derive(Debug, Clone)]
pub struct Debounce<A> {
    wait: Duration,
    immediate: bool,
    deadline: Option<Instant>,
    pending: Option<A>,
}

impl<A> Debounce<A> {
    /// Create a debouncer.
    #[must_use]
    pub const fn new(wait: Duration, immediate: bool) -> Self {
        Self {
            wait,
            immediate,
            deadline: None,
            pending: None,
        }
    }

    /// Configured quiet period.
    #[inline]
    #[must_use]
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    /// Whether the leading edge fires synchronously.
    #[inline]
    #[must_use]
    pub const fn is_immediate(&self) -> bool {
        self.immediate
    }

    /// When the running timer elapses, if one is running.
    #[inline]
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether a timer is running.
    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Record a call at `now`.
    ///
    /// Returns the arguments to invoke now: the leading call in immediate
    /// mode, or, in trailing mode, a previous call whose timer elapsed before
    /// `now` but was never polled.
    pub fn call(&mut self, now: Instant, args: A) -> Option<A> {
        let overdue = self.poll(now);
        let fire_now = self.immediate && self.deadline.is_none();
        self.deadline = Some(now + self.wait);
        if fire_now {
            self.pending = None;
            return Some(args);
        }
        if !self.immediate {
            self.pending = Some(args);
        }
        overdue
    }

    /// Deliver the trailing call if its timer has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<A> {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Stop the timer and drop any pending call.
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.pending = None;
    }
}

// ---------------------------------------------------------------------------
// Throttle
// ---------------------------------------------------------------------------

/// Delivers at most one call per `wait` window.
///
/// The first call of a window is delivered immediately. Calls arriving while
/// throttling set a "more" flag; when the window timer elapses the latest
/// arguments are delivered once. End-of-throttling is detected by an
/// internal [`Debounce`] that every call and every window boundary restarts,
/// so throttling only ends after a full quiet `wait`.
#[derive(Debug, Clone)]
pub struct Throttle<A> {
    wait: Duration,
    window_deadline: Option<Instant>,
    when_done: Debounce<()>,
    throttling: bool,
    more: bool,
    latest: Option<A>,
}

impl<A: Clone> Throttle<A> {
    /// Create a throttle with the given window.
    #[must_use]
    pub const fn new(wait: Duration) -> Self {
        Self {
            wait,
            window_deadline: None,
            when_done: Debounce::new(wait, false),
            throttling: false,
            more: false,
            latest: None,
        }
    }

    /// Configured window length.
    #[inline]
    #[must_use]
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    /// Whether calls are currently being suppressed.
    #[inline]
    #[must_use]
    pub const fn is_throttling(&self) -> bool {
        self.throttling
    }

    /// Whether a suppressed call is waiting for the window boundary.
    #[inline]
    #[must_use]
    pub const fn has_trailing(&self) -> bool {
        self.more && self.window_deadline.is_some()
    }

    /// Earliest instant at which [`poll`](Self::poll) can change state.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.window_deadline, self.when_done.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Record a call at `now`.
    ///
    /// Returns the arguments to invoke now. That is the new call when it
    /// opens a window. When the new call is suppressed but an earlier window
    /// boundary elapsed unpolled, the overdue trailing arguments are returned
    /// instead.
    pub fn call(&mut self, now: Instant, args: A) -> Option<A> {
        let overdue = self.settle(now);

        self.latest = Some(args.clone());
        if self.window_deadline.is_none() {
            self.window_deadline = Some(now + self.wait);
        }
        let fired = if self.throttling {
            self.more = true;
            None
        } else {
            Some(args)
        };
        // Already settled, so the debouncer has nothing overdue to report.
        let _ = self.when_done.call(now, ());
        self.throttling = true;

        fired.or(overdue)
    }

    /// Deliver the trailing call if a window boundary elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<A> {
        self.settle(now)
    }

    /// Drop any pending trailing call and end throttling.
    pub fn cancel(&mut self) {
        self.window_deadline = None;
        self.when_done.cancel();
        self.throttling = false;
        self.more = false;
        self.latest = None;
    }

    /// Run every timer due by `now` in deadline order.
    ///
    /// The window timer fires at most once per window, so at most one
    /// trailing delivery comes out of a single settle.
    fn settle(&mut self, now: Instant) -> Option<A> {
        let mut fired = None;
        loop {
            let window = self.window_deadline.filter(|d| *d <= now);
            let done = self.when_done.deadline().filter(|d| *d <= now);
            match (window, done) {
                // On a tie the window timer was scheduled first.
                (Some(w), Some(d)) if w <= d => fired = self.fire_window(w).or(fired),
                (Some(w), None) => fired = self.fire_window(w).or(fired),
                (_, Some(d)) => {
                    let _ = self.when_done.poll(d);
                    self.more = false;
                    self.throttling = false;
                }
                (None, None) => break,
            }
        }
        fired
    }

    fn fire_window(&mut self, at: Instant) -> Option<A> {
        self.window_deadline = None;
        let fired = if self.more { self.latest.clone() } else { None };
        if fired.is_some() {
            tracing::trace!(wait_ms = self.wait.as_millis() as u64, "throttle trailing fire");
        }
        let _ = self.when_done.call(at, ());
        fired
    }
}

// ---------------------------------------------------------------------------
// Wrapped callables
// ---------------------------------------------------------------------------

/// A function bound to a [`Debounce`] scheduler.
pub struct Debounced<A, F> {
    debounce: Debounce<A>,
    func: F,
}

impl<A, F> std::fmt::Debug for Debounced<A, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.debounce.wait)
            .field("immediate", &self.debounce.immediate)
            .field("pending", &self.debounce.is_pending())
            .finish()
    }
}

impl<A, F: FnMut(A)> Debounced<A, F> {
    /// Wrap `func` so it runs only after `wait` of quiet.
    pub fn new(func: F, wait: Duration, immediate: bool) -> Self {
        Self {
            debounce: Debounce::new(wait, immediate),
            func,
        }
    }

    /// Invoke the wrapper at `now`.
    pub fn call(&mut self, now: Instant, args: A) {
        if let Some(args) = self.debounce.call(now, args) {
            (self.func)(args);
        }
    }

    /// Run the trailing invocation if it is due.
    pub fn poll(&mut self, now: Instant) {
        if let Some(args) = self.debounce.poll(now) {
            (self.func)(args);
        }
    }
}

/// A function bound to a [`Throttle`] scheduler.
///
/// [`call`](Self::call) returns the result of the most recent invocation,
/// whether that invocation happened just now or on an earlier call.
pub struct Throttled<A, R, F> {
    throttle: Throttle<A>,
    func: F,
    result: Option<R>,
}

impl<A, R, F> std::fmt::Debug for Throttled<A, R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttled")
            .field("wait", &self.throttle.wait)
            .field("throttling", &self.throttle.throttling)
            .field("has_result", &self.result.is_some())
            .finish()
    }
}

impl<A: Clone, R: Clone, F: FnMut(A) -> R> Throttled<A, R, F> {
    /// Wrap `func` so it runs at most once per `wait`.
    pub fn new(func: F, wait: Duration) -> Self {
        Self {
            throttle: Throttle::new(wait),
            func,
            result: None,
        }
    }

    /// Invoke the wrapper at `now`.
    pub fn call(&mut self, now: Instant, args: A) -> Option<R> {
        if let Some(args) = self.throttle.call(now, args) {
            self.result = Some((self.func)(args));
        }
        self.result.clone()
    }

    /// Run the trailing invocation if it is due.
    pub fn poll(&mut self, now: Instant) -> Option<R> {
        let args = self.throttle.poll(now)?;
        let result = (self.func)(args);
        self.result = Some(result.clone());
        Some(result)
    }
}
