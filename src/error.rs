use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that abort the plotting pipeline.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Missing or unreadable data file or background image
    #[error("Failed to read {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stream token that is not a decimal number
    #[error("Invalid numeric value {token:?}: {reason}")]
    Parse { token: String, reason: String },

    /// The data file has a header but no data rows
    #[error("No data rows for quadrant {quadrant}")]
    MissingData { quadrant: usize },

    /// Window, renderer or image decoder setup failure
    #[error("Graphics initialization failed: {0}")]
    GraphicsInit(String),
}

impl PlotError {
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Type alias for Results using PlotError
pub type Result<T> = std::result::Result<T, PlotError>;
