//! Fire-and-forget side-effect queue.
//!
//! Metric recording and other secondary telemetry writes must never be
//! able to fail the operation that triggered them. `emit` enqueues the
//! task onto a bounded channel serviced by one worker; when the queue is
//! full the task is dropped and counted rather than blocking the caller.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::BoxFuture;
use tokio::sync::{mpsc, oneshot};

enum Message {
    Task(BoxFuture<'static, ()>),
    Flush(oneshot::Sender<()>),
}

/// Handle onto the background task queue. Cheap to clone.
#[derive(Clone)]
pub struct Emitter {
    tx: mpsc::Sender<Message>,
    dropped: Arc<AtomicU64>,
}

impl Emitter {
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Spawns the worker on the current tokio runtime
    pub fn spawn(capacity: usize) -> Self {
        let (tx, mut rx) = mpsc::channel(capacity);

        tokio::spawn(async move {
            while let Some(message) = rx.recv().await {
                match message {
                    Message::Task(task) => task.await,
                    Message::Flush(ack) => {
                        let _ = ack.send(());
                    }
                }
            }
        });

        Self {
            tx,
            dropped: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Enqueue without waiting. A full queue drops the task and counts it.
    pub fn emit<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.tx.try_send(Message::Task(Box::pin(task))).is_err() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            log::warn!("Telemetry task queue full, dropping task");
        }
    }

    /// Wait until every task enqueued before this call has completed.
    /// Used by tests and by graceful shutdown.
    pub async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.tx.send(Message::Flush(ack_tx)).await.is_ok() {
            let _ = ack_rx.await;
        }
    }

    /// Number of tasks dropped because the queue was full
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}
