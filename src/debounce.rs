//! Trigger coalescing for layout passes.
//!
//! Drag-end and container-resize events arrive in bursts during continuous
//! user interaction. The [`Debouncer`] collapses each burst into a single
//! pulse: a trigger arms a timer, further triggers within the delay window
//! re-arm it, and the pulse is emitted once the window passes with no new
//! trigger (trailing edge). One pulse means one layout pass and at most one
//! persistence call per burst.
//!
//! The debouncer owns no UI or layout knowledge; it forwards pulses on a
//! plain channel for the caller to wire up.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

/// Coalesces bursts of triggers into single delayed pulses.
///
/// Dropping the `Debouncer` stops the timer task after it delivers any
/// pulse still pending for the current burst.
#[derive(Debug)]
pub struct Debouncer {
    trigger_tx: mpsc::UnboundedSender<()>,
}

impl Debouncer {
    /// Spawns the timer task and returns the debouncer plus the receiver on
    /// which coalesced pulses arrive.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<()>) {
        let (trigger_tx, mut trigger_rx) = mpsc::unbounded_channel::<()>();
        let (pulse_tx, pulse_rx) = mpsc::unbounded_channel::<()>();

        tokio::spawn(async move {
            while trigger_rx.recv().await.is_some() {
                // A burst started; keep re-arming until a full quiet window.
                loop {
                    match timeout(delay, trigger_rx.recv()).await {
                        Ok(Some(())) => continue,
                        Ok(None) => {
                            // Handle dropped mid-burst: deliver the pending
                            // pulse, then stop.
                            let _ = pulse_tx.send(());
                            return;
                        }
                        Err(_elapsed) => {
                            if pulse_tx.send(()).is_err() {
                                return;
                            }
                            break;
                        }
                    }
                }
            }
        });

        (Self { trigger_tx }, pulse_rx)
    }

    /// Records a trigger. Cheap and non-blocking; never fails while the
    /// timer task is alive.
    pub fn trigger(&self) {
        let _ = self.trigger_tx.send(());
    }
}
