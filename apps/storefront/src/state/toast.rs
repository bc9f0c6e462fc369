//! # Toast State
//!
//! The transient "added to cart" confirmation.
//!
//! ## Timer Lifecycle
//! ```text
//! show("A") ──► current = A, spawn sleep(duration) ─┐
//!                                                   │ (aborted)
//! show("B") ──► abort A's timer, current = B ───────┼─► spawn sleep(duration)
//!                                                   │            │
//!                                                   │            ▼
//!                                                   │   still B? current = None
//! ```
//!
//! Cosmetic only: nothing here touches the cart. Without a Tokio runtime
//! the toast simply stays up until the next `show` or `dismiss`.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// A visible toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    /// Increases with every `show`; the newest toast always has the highest id
    pub id: u64,
    pub message: String,
    pub shown_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct ToastSlot {
    current: Option<Toast>,
    next_id: u64,
    dismiss_timer: Option<JoinHandle<()>>,
}

/// Auto-dismissing toast with last-write-wins semantics.
#[derive(Debug, Clone)]
pub struct ToastState {
    slot: Arc<Mutex<ToastSlot>>,
    duration: Duration,
}

impl ToastState {
    pub fn new(duration: Duration) -> Self {
        ToastState {
            slot: Arc::new(Mutex::new(ToastSlot::default())),
            duration,
        }
    }

    /// Shows a toast, superseding any visible one.
    pub fn show(&self, message: impl Into<String>) -> Toast {
        let mut slot = self.lock();

        if let Some(timer) = slot.dismiss_timer.take() {
            timer.abort();
        }

        slot.next_id += 1;
        let toast = Toast {
            id: slot.next_id,
            message: message.into(),
            shown_at: Utc::now(),
        };
        debug!(id = toast.id, message = %toast.message, "toast shown");
        slot.current = Some(toast.clone());

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let shared = Arc::clone(&self.slot);
                let duration = self.duration;
                let id = toast.id;
                slot.dismiss_timer = Some(runtime.spawn(async move {
                    tokio::time::sleep(duration).await;
                    let mut slot = match shared.lock() {
                        Ok(slot) => slot,
                        Err(poisoned) => poisoned.into_inner(),
                    };
                    if slot.current.as_ref().is_some_and(|t| t.id == id) {
                        slot.current = None;
                        slot.dismiss_timer = None;
                        debug!(id, "toast expired");
                    }
                }));
            }
            Err(_) => warn!("No async runtime; toast will not auto-dismiss"),
        }

        toast
    }

    /// The visible toast, if any.
    pub fn current(&self) -> Option<Toast> {
        self.lock().current.clone()
    }

    /// Hides the toast immediately.
    pub fn dismiss(&self) {
        let mut slot = self.lock();
        if let Some(timer) = slot.dismiss_timer.take() {
            timer.abort();
        }
        slot.current = None;
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    // A poisoned slot only ever holds cosmetic state; keep using it.
    fn lock(&self) -> std::sync::MutexGuard<'_, ToastSlot> {
        match self.slot.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires() {
        let toast = ToastState::new(Duration::from_millis(2000));
        toast.show("Orange Wide Leg added to cart");
        assert!(toast.current().is_some());

        sleep(Duration::from_millis(1999)).await;
        assert!(toast.current().is_some());

        sleep(Duration::from_millis(2)).await;
        assert!(toast.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_toast_supersedes_timer() {
        let toast = ToastState::new(Duration::from_millis(2000));
        let first = toast.show("first");

        sleep(Duration::from_millis(1500)).await;
        let second = toast.show("second");
        assert!(second.id > first.id);

        // The first toast's deadline passes without hiding the second one.
        sleep(Duration::from_millis(1000)).await;
        assert_eq!(toast.current().map(|t| t.message), Some("second".to_string()));

        sleep(Duration::from_millis(1001)).await;
        assert!(toast.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss() {
        let toast = ToastState::new(Duration::from_millis(2000));
        toast.show("bye");
        toast.dismiss();
        assert!(toast.current().is_none());
    }

    #[test]
    fn test_without_runtime_toast_stays() {
        let toast = ToastState::new(Duration::from_millis(1));
        toast.show("sticky");
        assert_eq!(toast.current().map(|t| t.message), Some("sticky".to_string()));
        toast.dismiss();
        assert!(toast.current().is_none());
    }
}
