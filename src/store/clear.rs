//! Parallel `clear()`
//!
//! Every indexed key is removed by a pool of scoped worker threads fed from
//! a crossbeam channel. Results flow back on a second channel; the first
//! failure (in completion order) becomes the return value and everything
//! after it is swallowed. Deletions already queued still run to completion,
//! and nothing is rolled back.

use crossbeam::channel;
use tracing::{debug, warn};

use super::Store;
use crate::codec::Codec;
use crate::error::{Result, StoreError};

impl<C: Codec> Store<C> {
    /// Remove every stored key
    ///
    /// Returns `Ok(())` immediately when the store is empty. On failure some
    /// files may already be gone and the index only partially drained.
    pub fn clear(&self) -> Result<()> {
        let keys = self.keys();
        if keys.is_empty() {
            return Ok(());
        }

        let total = keys.len();
        let workers = self.config.clear_workers.clamp(1, total);

        let (job_tx, job_rx) = channel::unbounded::<String>();
        for key in keys {
            if job_tx.send(key).is_err() {
                break;
            }
        }
        drop(job_tx);

        let (result_tx, result_rx) = channel::unbounded::<(String, Result<()>)>();

        let first_error = crossbeam::scope(|scope| {
            for _ in 0..workers {
                let jobs = job_rx.clone();
                let results = result_tx.clone();
                scope.spawn(move |_| {
                    for key in jobs.iter() {
                        let result = self.remove_item(&key);
                        if results.send((key, result)).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(result_tx);

            join_first_error(result_rx.iter())
        })
        .unwrap_or_else(|panic| std::panic::resume_unwind(panic));

        match first_error {
            Some(err) => Err(err),
            None => {
                debug!(removed = total, "cleared store");
                Ok(())
            }
        }
    }
}

/// Fan-in: keep the first failure, log and drop the rest
fn join_first_error<I>(results: I) -> Option<StoreError>
where
    I: IntoIterator<Item = (String, Result<()>)>,
{
    let mut first_error: Option<StoreError> = None;

    for (key, result) in results {
        match result {
            Ok(()) => {}
            Err(err) if first_error.is_none() => {
                warn!(key = %key, error = %err, "clear failed");
                first_error = Some(err);
            }
            Err(err) => {
                debug!(key = %key, error = %err, "clear failure suppressed");
            }
        }
    }

    first_error
}
