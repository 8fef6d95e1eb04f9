use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::AbortHandle;

/// At most this many toasts are visible; older ones are silently
/// dropped when the cap is exceeded.
pub const MAX_VISIBLE: usize = 3;

pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

struct Entry {
    toast: Toast,
    expiry: AbortHandle,
}

struct QueueState {
    entries: Vec<Entry>,
    next_id: u64,
}

/// Capped queue of transient notifications. Each toast carries an
/// abortable expiry task, so dropping or dismissing a toast cancels its
/// pending removal; an expiry that fires against an absent id is a
/// no-op either way.
///
/// Must be used inside a tokio runtime: `show` spawns the expiry timer.
#[derive(Clone)]
pub struct ToastQueue {
    inner: Arc<Mutex<QueueState>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(QueueState {
                entries: Vec::new(),
                next_id: 0,
            })),
        }
    }

    pub fn show(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> u64 {
        let mut state = self.inner.lock().unwrap();

        let id = state.next_id;
        state.next_id += 1;

        let queue = self.clone();
        let expiry = tokio::spawn(async move {
            tokio::time::sleep(AUTO_DISMISS).await;
            queue.dismiss(id);
        })
        .abort_handle();

        state.entries.push(Entry {
            toast: Toast {
                id,
                title: title.into(),
                description: description.into(),
                severity,
            },
            expiry,
        });

        while state.entries.len() > MAX_VISIBLE {
            let dropped = state.entries.remove(0);
            dropped.expiry.abort();
        }

        id
    }

    /// Removes a toast by id. A no-op if the id is absent.
    pub fn dismiss(&self, id: u64) {
        let mut state = self.inner.lock().unwrap();

        if let Some(pos) = state.entries.iter().position(|e| e.toast.id == id) {
            let entry = state.entries.remove(pos);
            entry.expiry.abort();
        }
    }

    /// Snapshot of the visible toasts in insertion order.
    pub fn visible(&self) -> Vec<Toast> {
        self.inner
            .lock()
            .unwrap()
            .entries
            .iter()
            .map(|e| e.toast.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}
