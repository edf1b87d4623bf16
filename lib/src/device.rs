use crate::consts::*;
use crate::errors::*;

use std::path::{Path, PathBuf};

make_log_macro!(debug, "device");

/// The directories probed when no device path is given, highest priority first.
pub fn default_candidates() -> Vec<PathBuf> {
    DEFAULT_DEVICES
        .iter()
        .map(|name| Path::new(DEVICES_PATH).join(name))
        .collect()
}

/// Pick the backlight device directory.
///
/// A non-empty `device_override` is returned as is, whether or not it exists.
/// Otherwise the first of [`default_candidates`] that exists is used.
pub fn resolve_device(device_override: Option<&Path>) -> Result<PathBuf> {
    resolve_device_from(device_override, &default_candidates())
}

pub fn resolve_device_from(
    device_override: Option<&Path>,
    candidates: &[PathBuf],
) -> Result<PathBuf> {
    if let Some(path) = device_override.filter(|p| !p.as_os_str().is_empty()) {
        debug!("using override {}", path.display());
        return Ok(path.to_path_buf());
    }

    for candidate in candidates {
        // Existence only, readability is checked when the files are read
        if candidate.exists() {
            debug!("found {}", candidate.display());
            return Ok(candidate.clone());
        }
        debug!("{} does not exist", candidate.display());
    }

    Err(BrightwatchError::NoDeviceFound)
}
