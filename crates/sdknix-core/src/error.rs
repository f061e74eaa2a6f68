//! Domain-specific errors for the generation pass.

use sdknix_schema::checksum::UnknownAlgorithm;
use sdknix_schema::platform::PlatformError;
use thiserror::Error;

/// Errors that abort a generation pass.
///
/// There is no partial or degraded output mode: any of these terminates the
/// run with the offending value attached, and nothing is emitted.
#[derive(Error, Debug)]
pub enum GenError {
    /// An archive declared a host OS or architecture outside the recognized
    /// sets.
    #[error("platform classification failed: {0}")]
    Platform(#[from] PlatformError),

    /// A checksum declared an algorithm outside the recognized set.
    #[error("checksum normalization failed: {0}")]
    Checksum(#[from] UnknownAlgorithm),

    /// The external URL-resolution collaborator failed; its error is carried
    /// through unchanged.
    #[error("failed to resolve download URL for {id}: {source}")]
    Resolve {
        /// Raw path of the package whose archive could not be resolved.
        id: String,
        /// The collaborator's error.
        #[source]
        source: anyhow::Error,
    },
}
