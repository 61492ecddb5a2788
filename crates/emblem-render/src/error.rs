//! Render and export errors.

use std::path::PathBuf;

use emblem_core::DrawError;
use thiserror::Error;

/// Errors surfacing from an export pass.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The drawable tree refused to render; nothing was written.
    #[error("draw failed: {0}")]
    Draw(#[from] DrawError),
    /// Surface dimensions outside what the backend can allocate.
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    /// An export format name outside the declared option set.
    #[error("unknown export format '{0}', choose from png, svg")]
    UnknownFormat(String),
    #[error("png encoding failed: {0}")]
    PngEncode(#[from] png::EncodingError),
    #[error("write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
