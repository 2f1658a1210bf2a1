//! Coordinator.
//!
//! Owns the queue and the source for the duration of a run, lends them to
//! one producer thread and [CONSUMERS] worker threads, and joins all of
//! them. Thread ids: producer is [PRODUCER_ID], workers follow it.

use std::fmt;
use std::thread::{self, Scope, ScopedJoinHandle};
use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::message::{Message, Word};
use crate::queue::Queue;
use crate::source::ByteSource;
use crate::tokenizer::{Tokenizer, TokenizerReport};
use crate::worker::{Worker, WorkerReport};

pub const CONSUMERS  : usize = 2;
pub const PRODUCER_ID: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Producer,
    Worker,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Role::Producer => "producer",
            Role::Worker   => "worker",
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct PipelineReport {
    pub producer: TokenizerReport,
    /// `(thread id, report)`, ordered by id.
    pub workers: Vec<(usize, WorkerReport)>,
}

impl PipelineReport {
    /// Every word popped by any worker. Order between workers is arbitrary.
    pub fn consumed(&self) -> impl Iterator<Item = &Word> {
        self.workers.iter().flat_map(|(_, report)| report.words.iter())
    }

    pub fn detected(&self) -> impl Iterator<Item = &Word> {
        self.workers.iter().flat_map(|(_, report)| report.detected.iter())
    }
}

pub struct Pipeline<S> {
    source: S,
    consumers: usize,
    dictionary: Dictionary,
}

impl<S: ByteSource + Send> Pipeline<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            consumers: CONSUMERS,
            dictionary: Dictionary::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_consumers(mut self, consumers: usize) -> Self {
        self.consumers = consumers;
        self
    }

    /// Run producer and workers to completion.
    ///
    /// Blocks until every thread has finished. Nothing is cancelled.
    pub fn run(self) -> Result<PipelineReport> {
        let Self { source, consumers, dictionary } = self;
        let queue: Queue<Message> = Queue::new();
        let queue = &queue;

        thread::scope(|s| {
            let producer = spawn(s, PRODUCER_ID, Role::Producer, move || {
                Tokenizer::new(source, queue, consumers).run()
            })?;

            let mut workers = Vec::with_capacity(consumers);
            for id in (PRODUCER_ID + 1..).take(consumers) {
                let handle = spawn(s, id, Role::Worker, move || {
                    Worker::new(queue, dictionary).run()
                })?;
                workers.push((id, handle));
            }

            let producer = producer.join().map_err(|_| {
                tracing::error!(id = PRODUCER_ID, "producer panicked, releasing workers");
                // Workers would otherwise wait for markers that never come.
                queue.push_termination_burst(consumers);
                Error::Panicked { id: PRODUCER_ID, role: Role::Producer }
            });

            let mut reports = Vec::with_capacity(consumers);
            let mut worker_error = None;
            for (id, handle) in workers {
                match handle.join() {
                    Ok(report) => reports.push((id, report)),
                    Err(_) => {
                        tracing::error!(id, "worker panicked");
                        worker_error.get_or_insert(Error::Panicked { id, role: Role::Worker });
                    }
                }
            }

            let producer = producer?;
            if let Some(error) = worker_error {
                return Err(error);
            }
            Ok(PipelineReport { producer, workers: reports })
        })
    }
}

/// Spawn a named thread running `f` inside a span carrying its id and role.
fn spawn<'scope, 'env, T, F>(
    scope: &'scope Scope<'scope, 'env>,
    id: usize,
    role: Role,
    f: F,
) -> Result<ScopedJoinHandle<'scope, T>>
where
    F: FnOnce() -> T + Send + 'scope,
    T: Send + 'scope,
{
    let name = format!("hopper-{role}-{id}");
    thread::Builder::new()
        .name(name.clone())
        .spawn_scoped(scope, move || {
            let _span = tracing::info_span!("thread", id, %role).entered();
            tracing::info!("started");
            f()
        })
        .map_err(|source| Error::Spawn { name, source })
}
