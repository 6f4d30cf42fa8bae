use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The database could not be reached or introspected. Fatal: the whole
    /// generation aborts and the message is surfaced verbatim.
    #[error("schema unavailable: {0}")]
    SchemaUnavailable(String),

    /// The target file is already present. Recoverable: the caller asks for
    /// confirmation unless `--force` was given.
    #[error("destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
