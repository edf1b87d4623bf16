use std::path::PathBuf;

use thiserror::Error;

/// Result type returned from functions that can have our `Error`s.
pub type Result<T, E = BrightwatchError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BrightwatchError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error(
        "No backlight found from default set, try passing the specific backlight device path via {}",
        crate::consts::ENV_DEVICE_PATH
    )]
    NoDeviceFound,

    #[error("Error reading brightness from {}: {cause}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        cause: ReadCause,
    },

    #[error("Failed to watch backlight device: {0}")]
    WatchSetupFailure(#[source] notify::Error),

    #[error("Backlight watch failed: {0}")]
    WatchStreamFailure(#[source] WatchStreamCause),
}

/// Why a brightness file could not be turned into a number.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReadCause {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] std::num::ParseFloatError),

    #[error("max brightness must be greater than 0, got {0}")]
    NotPositive(f64),
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WatchStreamCause {
    #[error("{0}")]
    Notify(#[from] notify::Error),

    #[error("watch stream closed")]
    Closed,
}
