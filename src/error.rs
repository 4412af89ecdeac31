use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RulerError {
    /// Zoom ratios are pixels per second and must be strictly positive.
    #[error("invalid zoom ratio {0}: must be finite and > 0")]
    InvalidZoomRatio(f64),

    #[error("invalid frame rate {num}/{den}: both parts must be > 0")]
    InvalidFrameRate { num: u32, den: u32 },

    #[error("unexpected color parameter: {0}")]
    UnrecognizedColor(String),

    #[error("invalid ruler configuration: {0}")]
    InvalidConfig(String),
}
