use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("member count must be at least 1")]
    EmptyRoster,

    #[error("cannot write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}
