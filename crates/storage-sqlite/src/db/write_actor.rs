//! Single-writer actor for SQLite.
//!
//! SQLite allows one writer at a time; funnelling every mutation through one
//! dedicated connection serializes writes and lets multi-statement jobs (such
//! as the rating upsert + star recompute) run inside a single immediate
//! transaction. That serialization is what makes the score aggregator's
//! upsert-sum-write sequence atomic with respect to concurrent requests.

use super::DbPool;
use crate::errors::StorageError;
use diesel::SqliteConnection;
use starpool_core::errors::Result;
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// A job executed on the writer's connection. The return value is type-erased
// so jobs with different result types can share one channel.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type Reply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for submitting jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, Reply)>,
}

impl WriteHandle {
    /// Runs `job` on the writer's connection inside an immediate transaction
    /// and returns its result.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .expect("writer actor channel closed, the actor has stopped");

        ret_rx
            .await
            .expect("writer actor dropped the reply sender")
            .map(|boxed: Box<dyn Any + Send + 'static>| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("writer actor result had an unexpected type"))
            })
    }
}

/// Spawns the writer actor. It holds one pooled connection for its lifetime
/// and processes jobs serially, each wrapped in an immediate transaction.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, Reply)>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("failed to get a connection for the writer actor");

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| {
                    job(c).map_err(StorageError::from)
                })
                .map_err(|e: StorageError| e.into());

            // Receiver may have been dropped (request cancelled); that's fine.
            let _ = reply_tx.send(result);
        }
        // Channel closed: every WriteHandle is gone, shut down.
    });

    WriteHandle { tx }
}
