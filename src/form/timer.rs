use crate::app::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// One-shot timer that posts [`AppEvent::ResetElapsed`] into the event loop.
///
/// The task is aborted when the timer is dropped, so a pending reset never
/// outlives the controller that scheduled it.
#[derive(Debug)]
pub struct ResetTimer {
    generation: u64,
    deadline: Instant,
    handle: JoinHandle<()>,
}

impl ResetTimer {
    /// Must be called from within a tokio runtime.
    pub fn schedule(
        generation: u64,
        delay: Duration,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        // Deadline is fixed now, not when the task is first polled.
        let deadline = Instant::now() + delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = event_tx.send(AppEvent::ResetElapsed { generation });
        });
        Self {
            generation,
            deadline,
            handle,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }
}

impl Drop for ResetTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
