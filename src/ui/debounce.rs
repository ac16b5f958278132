// src/ui/debounce.rs
//! Latest-value-wins debouncing for interactive input.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;

/// Debounced receiver: a value sent into the paired sender is yielded only
/// after `delay` passes without a newer one arriving. Every newer value
/// replaces the pending one and restarts the window. Closing the sender
/// flushes whatever is pending.
///
/// The windowing runs on its own task, so `next` is a plain channel receive
/// and is safe to race against other branches in a `select!`.
pub struct Debouncer<T> {
    rx: mpsc::UnboundedReceiver<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// A sender/debouncer pair around an unbounded channel.
    pub fn channel(delay: Duration) -> (mpsc::UnboundedSender<T>, Debouncer<T>) {
        let (in_tx, mut in_rx) = mpsc::unbounded_channel();
        let (out_tx, out_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Some(mut newest) = in_rx.recv().await {
                loop {
                    match timeout(delay, in_rx.recv()).await {
                        Ok(Some(newer)) => newest = newer,
                        Ok(None) => {
                            let _ = out_tx.send(newest);
                            return;
                        }
                        Err(_) => break,
                    }
                }
                if out_tx.send(newest).is_err() {
                    return;
                }
            }
        });

        (in_tx, Debouncer { rx: out_rx })
    }

    /// The next settled value, or `None` once the sender is gone and nothing
    /// is pending.
    pub async fn next(&mut self) -> Option<T> {
        self.rx.recv().await
    }
}
