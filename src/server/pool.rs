//! Fixed-size pool of connection worker threads.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver, Sender};
use log::{debug, error};

use crate::server::error::Error;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// A fixed number of named worker threads fed from a bounded FIFO queue.
///
/// [`execute`](WorkerPool::execute) blocks while the queue is full. Dropping
/// the pool closes the queue, lets the workers finish everything already
/// queued, and joins them.
pub struct WorkerPool {
    sender: Option<Sender<Job>>,
    workers: Vec<Worker>,
}

struct Worker {
    id: usize,
    thread: Option<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn `size` workers sharing a queue of `queue_capacity` jobs.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when `size` is zero, or the error from spawning a
    /// thread.
    pub fn new(size: usize, queue_capacity: usize) -> io::Result<Self> {
        if size == 0 {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "worker pool needs at least one thread"));
        }

        let (sender, receiver) = channel::bounded::<Job>(queue_capacity);
        let mut workers = Vec::with_capacity(size);
        for id in 0..size {
            workers.push(Worker::spawn(id, receiver.clone())?);
        }

        debug!("Started {size} workers");
        Ok(Self {
            sender: Some(sender),
            workers,
        })
    }

    /// Number of worker threads.
    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Queue a job, blocking while the queue is full.
    pub fn execute<F>(&self, job: F) -> Result<(), Error>
    where
        F: FnOnce() + Send + 'static,
    {
        let sender = self.sender.as_ref().ok_or(Error::PoolClosed)?;
        sender.send(Box::new(job)).map_err(|_| Error::PoolClosed)
    }

    /// Stop accepting jobs, drain the queue and join every worker.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        // Workers exit once the queue is closed and empty
        drop(self.sender.take());

        for worker in &mut self.workers {
            if let Some(thread) = worker.thread.take() {
                if thread.join().is_err() {
                    error!("Worker {} terminated abnormally", worker.id);
                }
            }
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Worker {
    fn spawn(id: usize, receiver: Receiver<Job>) -> io::Result<Self> {
        let thread = thread::Builder::new()
            .name(format!("worker-{id}"))
            .spawn(move || {
                for job in receiver.iter() {
                    if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
                        error!("Worker {id}: job panicked");
                    }
                }
                debug!("Worker {id} exiting");
            })?;

        Ok(Self {
            id,
            thread: Some(thread),
        })
    }
}
