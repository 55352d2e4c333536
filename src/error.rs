use std::fmt;

/// Errors surfaced by window setup and presentation.
///
/// Everything after initialization is infallible except handing a frame
/// to the platform, which can fail if the device is lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// SDL or the window system could not be initialized.
    Platform(String),
    /// The renderer cannot do something the demo needs.
    Unsupported { renderer: String, reason: String },
    /// Uploading or presenting a frame failed.
    Present(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Platform(msg) => write!(f, "platform initialization failed: {msg}"),
            Error::Unsupported { renderer, reason } => {
                write!(f, "renderer '{renderer}' is not supported: {reason}")
            }
            Error::Present(msg) => write!(f, "failed to present frame: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
