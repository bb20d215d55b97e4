use thiserror::Error;

use crate::rfc::iso8601::build::BuildError;
use crate::rfc::iso8601::parse::ParseError;

/// Grammar parsing and serialization errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Build error: {0}")]
    BuildError(#[from] BuildError),

    #[error(transparent)]
    CoreError(#[from] metronome_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
