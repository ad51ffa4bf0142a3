//! Cooldown / single-flight admission for outbound requests.
//!
//! A [`CooldownGate`] lets at most one request leave the process per cooldown
//! window, and never more than one at a time. A caller arriving inside the
//! window, or while a request is still in flight, is parked until that request
//! has returned and a full window has passed since. Only one caller may be
//! parked at a time: anyone arriving while that slot is taken is turned away
//! immediately instead of queueing further.
//!
//! # Example
//!
//! ```ignore
//! use starsearch::admission::CooldownGate;
//!
//! let gate = CooldownGate::default();
//! match gate.run(|| transport.get(request)).await {
//!     Some(response) => { /* dispatched */ }
//!     None => { /* rejected: another request is already waiting */ }
//! }
//! ```

use std::future::Future;
use std::pin::pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::time::Instant;

/// Minimum spacing between two dispatched requests.
///
/// GitHub allows 10 unauthenticated search requests per minute; a 2 second
/// cooldown keeps the average comfortably below that.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(2000);

/// Decision taken for a single caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The cooldown has elapsed and nothing is queued or in flight: dispatch now.
    Immediate,
    /// The caller holds the single queue slot and must wait at least `wait`
    /// (longer if a request is still in flight) before dispatching.
    Queued { wait: Duration },
    /// The queue slot is taken: do not dispatch.
    Rejected,
}

#[derive(Debug, Default)]
struct AdmissionState {
    /// Most recent dispatch start or finish; `None` means the cooldown has
    /// already elapsed.
    last_dispatch: Option<Instant>,
    /// Whether a delayed request currently holds the queue slot.
    pending: bool,
    /// Whether a dispatched request has not returned yet.
    in_flight: bool,
}

/// Shared admission state guarded by a single lock.
///
/// Cloning the gate shares the state, so every clone of a client observes the
/// same cooldown window.
#[derive(Debug, Clone)]
pub struct CooldownGate {
    cooldown: Duration,
    state: Arc<Mutex<AdmissionState>>,
    /// Signalled whenever an in-flight request returns.
    idle: Arc<Notify>,
}

impl Default for CooldownGate {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

impl CooldownGate {
    /// Create a gate whose cooldown is already elapsed.
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            state: Arc::new(Mutex::new(AdmissionState::default())),
            idle: Arc::new(Notify::new()),
        }
    }

    /// The configured cooldown window.
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Whether a delayed request currently holds the queue slot.
    pub fn is_pending(&self) -> bool {
        self.lock().pending
    }

    /// Whether a dispatched request has not returned yet.
    pub fn is_in_flight(&self) -> bool {
        self.lock().in_flight
    }

    fn lock(&self) -> MutexGuard<'_, AdmissionState> {
        // The state is plain flags; a panic elsewhere cannot leave it torn.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Time left in the window at `now`, or `None` once it has been exceeded.
    fn remaining(&self, state: &AdmissionState, now: Instant) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(state.last_dispatch?);
        (elapsed <= self.cooldown).then(|| self.cooldown - elapsed)
    }

    /// Decide how the current caller is admitted.
    ///
    /// An `Immediate` admission marks a request in flight; the caller must
    /// dispatch and then let [`run`](Self::run) (or its own bookkeeping) close
    /// it. A caller arriving while a request is in flight always queues, even
    /// once the window has passed.
    pub fn admit(&self) -> Admission {
        let mut state = self.lock();
        if state.pending {
            return Admission::Rejected;
        }

        let now = Instant::now();
        match self.remaining(&state, now) {
            Some(wait) => {
                state.pending = true;
                Admission::Queued { wait }
            }
            None if state.in_flight => {
                state.pending = true;
                Admission::Queued {
                    wait: Duration::ZERO,
                }
            }
            None => {
                state.last_dispatch = Some(now);
                state.in_flight = true;
                Admission::Immediate
            }
        }
    }

    /// Close the in-flight request and restart the window from now.
    fn finish_dispatch(&self) {
        {
            let mut state = self.lock();
            state.in_flight = false;
            state.last_dispatch = Some(Instant::now());
        }
        self.idle.notify_waiters();
    }

    /// Park the queued caller until nothing is in flight and the window
    /// measured from the last return has passed, then claim the dispatch.
    async fn claim_queued_dispatch(&self, slot: &mut QueuedSlot<'_>) {
        loop {
            let mut idle = pin!(self.idle.notified());
            idle.as_mut().enable();

            let wait = {
                let mut state = self.lock();
                let now = Instant::now();
                if state.in_flight {
                    None
                } else {
                    match self.remaining(&state, now) {
                        Some(wait) if !wait.is_zero() => Some(wait),
                        _ => {
                            state.pending = false;
                            state.in_flight = true;
                            state.last_dispatch = Some(now);
                            slot.claimed = true;
                            return;
                        }
                    }
                }
            };

            match wait {
                Some(wait) => tokio::time::sleep(wait).await,
                None => {
                    tracing::debug!("queued request waiting for in-flight request");
                    idle.await;
                }
            }
        }
    }

    /// Run `dispatch` under the admission policy.
    ///
    /// Returns `None` without calling `dispatch` when the caller is rejected.
    /// At most one `dispatch` runs at a time; the only suspension added by
    /// the gate is the wait of a queued caller.
    pub async fn run<F, Fut, T>(&self, dispatch: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self.admit() {
            Admission::Rejected => {
                tracing::debug!("admission rejected: a request is already queued");
                None
            }
            Admission::Immediate => {
                tracing::debug!("admission immediate");
                let _flight = InFlight { gate: self };
                Some(dispatch().await)
            }
            Admission::Queued { wait } => {
                tracing::debug!(wait_ms = wait.as_millis() as u64, "admission queued");
                let mut slot = QueuedSlot {
                    gate: self,
                    claimed: false,
                };
                tokio::time::sleep(wait).await;
                self.claim_queued_dispatch(&mut slot).await;
                drop(slot);
                let _flight = InFlight { gate: self };
                Some(dispatch().await)
            }
        }
    }
}

/// Holds the queue slot; releases it on drop if the caller's future is
/// dropped before it claimed the dispatch.
struct QueuedSlot<'a> {
    gate: &'a CooldownGate,
    claimed: bool,
}

impl Drop for QueuedSlot<'_> {
    fn drop(&mut self) {
        if !self.claimed {
            self.gate.lock().pending = false;
        }
    }
}

/// Marks a dispatch in flight; closes it on drop, including cancellation.
struct InFlight<'a> {
    gate: &'a CooldownGate,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.gate.finish_dispatch();
    }
}
