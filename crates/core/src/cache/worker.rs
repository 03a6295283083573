//! Sequential job queue backing the file store.
//!
//! Jobs are sent over a channel to one dedicated thread and run there in the
//! order they were queued. Each job reports back through its own one-shot
//! channel, so a caller that stops waiting simply never sees the result while
//! the job itself still runs to completion.

use std::sync::mpsc;
use std::thread;

use tokio::sync::oneshot;

use crate::Error;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Handle to the background thread. The thread exits once the handle is dropped
/// and the queue has drained.
#[derive(Debug)]
pub(crate) struct Worker {
    sender: mpsc::Sender<Job>,
}

impl Worker {
    pub(crate) fn spawn(name: &str) -> Result<Self, Error> {
        let (sender, receiver) = mpsc::channel::<Job>();

        thread::Builder::new().name(name.to_string()).spawn(move || {
            while let Ok(job) = receiver.recv() {
                job();
            }
        })?;

        Ok(Self { sender })
    }

    /// Queue `job` behind everything already queued and wait for its result.
    pub(crate) async fn call<F, T>(&self, job: F) -> Result<T, Error>
    where
        F: FnOnce() -> Result<T, Error> + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = oneshot::channel();

        self.sender
            .send(Box::new(move || {
                let _ = tx.send(job());
            }))
            .map_err(|_| Error::StoreClosed)?;

        rx.await.map_err(|_| Error::StoreClosed)?
    }
}
