pub mod admin;
pub mod groups;

#[cfg(test)]
pub(crate) mod testing;

use crate::probe::TransportError;
use std::io;
use thiserror::Error;

/// Internal result type for a probe sequence. Transport errors bubble
/// up to the flow boundary where they become a single printed line;
/// write errors on the report sink propagate to the caller.
#[derive(Debug, Error)]
pub(crate) enum FlowError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
