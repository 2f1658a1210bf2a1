//! Single-producer, multi-consumer word pipeline.
//!
//! A [Tokenizer] reads a slow [ByteSource], splits it into [Word]s on
//! whitespace and pushes them into a shared [Queue]. [Worker]s pop words,
//! parking while the queue is empty, and report those found in the
//! [Dictionary].
//!
//! [ByteSource]: source::ByteSource
//! [Queue]: queue::Queue
//!
//! # Queue
//!
//! [Queue] is a plain `Mutex<VecDeque>` + `Condvar` monitor. Unbounded.
//! An ordinary push wakes one reader, a burst push wakes all of them.
//! Pop checks emptiness and removes the head under the same lock.
//!
//! # Order
//!
//! Fully ordered: words leave the queue in the order they were pushed.
//! Which worker gets a given word is unspecified.
//!
//! # Termination
//!
//! On end-of-stream the tokenizer pushes one [Message::Terminate] per worker,
//! as a single burst. Each worker exits on the first marker it pops.
//! Fewer markers than workers means some worker parks forever.
//!
//! ```
//! use hopper::{Pipeline, Word};
//! use hopper::source::ScriptedSource;
//!
//! let report = Pipeline::new(ScriptedSource::new("dead beef")).run()?;
//! assert_eq!(report.producer.words, ["dead", "beef"].map(Word::from));
//! assert_eq!(report.detected().count(), 1);
//! # Ok::<(), hopper::Error>(())
//! ```

mod config;
mod dictionary;
mod error;
mod message;
mod pipeline;
mod tokenizer;
mod worker;

pub mod queue;
pub mod source;

pub use config::*;
pub use dictionary::*;
pub use error::*;
pub use message::*;
pub use pipeline::*;
pub use tokenizer::*;
pub use worker::*;
