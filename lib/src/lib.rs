#![warn(clippy::match_same_arms)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::unnecessary_wraps)]

#[macro_use]
mod util;
mod consts;
mod device;
mod errors;
mod watcher;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use futures::StreamExt as _;
use smart_default::SmartDefault;

pub use crate::consts::{DEFAULT_DEVICES, DEVICES_PATH, ENV_DEVICE_PATH};
pub use crate::device::{default_candidates, resolve_device, resolve_device_from};
pub use crate::errors::{BrightwatchError, ReadCause, WatchStreamCause};
use crate::consts::*;
use crate::errors::*;
pub use crate::util::{brightness_percent, format_percent, read_scalar};
use crate::watcher::*;
pub use crate::watcher::WatchEvent;

make_log_macro!(debug, "brightwatch");

/// Used to construct [`Backlight`]
#[derive(Clone, Debug, SmartDefault)]
pub struct BacklightBuilder {
    device_path: Option<PathBuf>,
    #[default(_code = "default_candidates()")]
    candidates: Vec<PathBuf>,
}

impl BacklightBuilder {
    /// Create a new [`BacklightBuilder`].
    pub fn new() -> Self {
        BacklightBuilder::default()
    }

    /// Same as [`BacklightBuilder::new`], with the device path taken from
    /// `BACKLIGHT_DEVICE_PATH` if it is set.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var_os(ENV_DEVICE_PATH))
    }

    fn from_env_value(device_path: Option<OsString>) -> Self {
        let builder = Self::new();
        match device_path {
            Some(path) => builder.with_device_path(path),
            None => builder,
        }
    }

    /// Use this device directory instead of probing. An empty path is ignored.
    pub fn with_device_path(mut self, device_path: impl Into<PathBuf>) -> Self {
        self.device_path = Some(device_path.into());
        self
    }

    /// Defaults to [`default_candidates()`].
    pub fn with_candidates(mut self, candidates: Vec<PathBuf>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Returns the constructed [`Backlight`], with its initial brightness read.
    pub async fn build(self) -> Result<Backlight> {
        let device_path = resolve_device_from(self.device_path.as_deref(), &self.candidates)?;
        Backlight::new(device_path).await
    }
}

/// A backlight device and the subscription on its directory.
pub struct Backlight {
    device_path: PathBuf,
    brightness_file: PathBuf,
    max_brightness: f64,
    brightness: f64,
    _watcher: INotifyWatcher,
    rx: Receiver<WatchEvent>,
}

impl Backlight {
    pub(crate) async fn new(device_path: PathBuf) -> Result<Self> {
        let max_brightness_file = device_path.join(FILE_MAX_BRIGHTNESS);
        let max_brightness = read_scalar(&max_brightness_file).await?;
        if max_brightness.is_nan() || max_brightness <= 0.0 {
            return Err(BrightwatchError::ReadFailure {
                path: max_brightness_file,
                cause: ReadCause::NotPositive(max_brightness),
            });
        }
        debug!("max brightness {max_brightness}");

        let brightness_file = device_path.join(FILE_BRIGHTNESS);
        let brightness = read_scalar(&brightness_file).await?;

        let (_watcher, rx) =
            brightness_watcher(&device_path).map_err(BrightwatchError::WatchSetupFailure)?;

        Ok(Backlight {
            device_path,
            brightness_file,
            max_brightness,
            brightness,
            _watcher,
            rx,
        })
    }

    /// Wait for the brightness file to change, then read it again.
    ///
    /// Changes to any other file in the device directory are skipped.
    pub async fn next(&mut self) -> Result<()> {
        while let Some(event) = self.rx.next().await {
            match event {
                WatchEvent::Changed(path) if path == self.brightness_file => {
                    self.brightness = read_scalar(&self.brightness_file).await?;
                    debug!("brightness {}", self.brightness);
                    return Ok(());
                }
                WatchEvent::Changed(path) => {
                    debug!("ignoring {}", path.display());
                }
                WatchEvent::Failed(e) => {
                    return Err(BrightwatchError::WatchStreamFailure(e.into()));
                }
            }
        }
        Err(BrightwatchError::WatchStreamFailure(WatchStreamCause::Closed))
    }

    pub fn device_path(&self) -> &Path {
        &self.device_path
    }

    pub fn max_brightness(&self) -> f64 {
        self.max_brightness
    }

    /// Raw value of the last read.
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// Last read brightness as a percent of max, rounded up.
    pub fn percent(&self) -> i64 {
        brightness_percent(self.brightness, self.max_brightness)
    }

    /// [`Backlight::percent`] rendered as `"<percent>%"`.
    pub fn format_percent(&self) -> String {
        format_percent(self.brightness, self.max_brightness)
    }
}
