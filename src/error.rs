use std::path::PathBuf;

use thiserror::Error;

use crate::render::Figure;

pub type FigureResult<T> = Result<T, FigureError>;

#[derive(Debug, Error)]
pub enum FigureError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Export failed after the figure was fully assembled.
    ///
    /// The figure travels with the error so callers can still display it.
    #[error("failed to export figure to `{}`: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        figure: Box<Figure>,
    },
}

impl FigureError {
    /// Recovers the assembled figure from an export failure.
    #[must_use]
    pub fn into_figure(self) -> Option<Figure> {
        match self {
            Self::Export { figure, .. } => Some(*figure),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }
}
