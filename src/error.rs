use thiserror::Error;
use crate::pipeline::Role;

#[derive(Error, Debug)]
pub enum Error {
    /// OS refused to start a thread.
    #[error("failed to spawn thread {name}")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Thread abandoned its loop by panicking.
    #[error("{role} thread #{id} panicked")]
    Panicked {
        id: usize,
        role: Role,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
