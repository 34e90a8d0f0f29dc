//! Success aggregation
//!
//! Units of work finish concurrently, so the success counter is never
//! touched by producers directly. Each success is a signal on a buffered
//! channel; exactly one consuming task owns the counter and drains the
//! channel. Dropping the last sender is the end-of-stream marker, and
//! `finish` awaits the consumer before the count is read, so the final
//! value is race-free by construction.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

/// Cloneable producer handle held by units of work.
///
/// Failures emit nothing; absence of a signal is how a failed identifier
/// is represented to the aggregator.
#[derive(Debug, Clone)]
pub struct SuccessSink {
    tx: mpsc::Sender<()>,
}

impl SuccessSink {
    /// Record one successful identifier
    pub async fn record(&self) {
        if self.tx.send(()).await.is_err() {
            // Only possible if the consumer died; the run keeps going.
            warn!("success signal dropped: aggregator is gone");
        }
    }
}

/// Run-scoped success counter fed by a signal channel
#[derive(Debug)]
pub struct SuccessAggregator {
    tx: mpsc::Sender<()>,
    consumer: JoinHandle<usize>,
}

impl SuccessAggregator {
    /// Spawn the single consuming task and hand back the aggregator
    pub fn new() -> Self {
        let (tx, mut rx) = mpsc::channel::<()>(1);

        let consumer = tokio::spawn(async move {
            let mut count: usize = 0;
            while rx.recv().await.is_some() {
                count += 1;
            }
            count
        });

        Self { tx, consumer }
    }

    /// Producer handle for units of work
    pub fn sink(&self) -> SuccessSink {
        SuccessSink {
            tx: self.tx.clone(),
        }
    }

    /// Close the stream and wait for the consumer to drain every pending
    /// signal, then return the final count.
    pub async fn finish(self) -> usize {
        drop(self.tx);
        match self.consumer.await {
            Ok(count) => count,
            Err(e) => {
                warn!("success counter task failed: {e}");
                0
            }
        }
    }
}

impl Default for SuccessAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counts_every_signal() {
        let aggregator = SuccessAggregator::new();
        let sink = aggregator.sink();

        for _ in 0..5 {
            sink.record().await;
        }
        drop(sink);

        assert_eq!(aggregator.finish().await, 5);
    }

    #[tokio::test]
    async fn test_zero_signals_counts_zero() {
        let aggregator = SuccessAggregator::new();
        let sink = aggregator.sink();
        drop(sink);
        assert_eq!(aggregator.finish().await, 0);
    }

    #[tokio::test]
    async fn test_concurrent_producers_never_lose_signals() {
        let aggregator = SuccessAggregator::new();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let sink = aggregator.sink();
            handles.push(tokio::spawn(async move {
                for _ in 0..25 {
                    sink.record().await;
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(aggregator.finish().await, 200);
    }
}
