use std::path::PathBuf;
use thiserror::Error;

use crate::filmography::{PersonId, WorkId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontierError {
    #[error("cannot remove from an empty frontier")]
    Empty,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed row in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("unknown person id '{0}'")]
    UnknownPerson(PersonId),

    #[error("unknown work id '{0}'")]
    UnknownWork(WorkId),
}
