use std::path::Path;

use tokio::io::AsyncReadExt as _;

use crate::errors::*;

macro_rules! make_log_macro {
    (@wdoll $macro_name:ident, $block_name:literal, ($dol:tt)) => {
        #[allow(unused_macros)]
        macro_rules! $macro_name {
            ($dol($args:tt)+) => {
                ::log::$macro_name!(target: $block_name, $dol($args)+);
            };
        }
    };
    ($macro_name:ident, $block_name:literal) => {
        make_log_macro!(@wdoll $macro_name, $block_name, ($));
    };
}

pub async fn read_file(path: impl AsRef<Path>) -> std::io::Result<String> {
    let mut file = tokio::fs::File::open(path).await?;
    let mut content = String::new();
    file.read_to_string(&mut content).await?;
    Ok(content)
}

/// Read a single number from a sysfs style file, ignoring surrounding whitespace.
pub async fn read_scalar(path: impl AsRef<Path>) -> Result<f64> {
    let path = path.as_ref();
    let failure = |cause: ReadCause| BrightwatchError::ReadFailure {
        path: path.to_path_buf(),
        cause,
    };

    let content = read_file(path).await.map_err(|e| failure(e.into()))?;
    content.trim().parse().map_err(|e: std::num::ParseFloatError| failure(e.into()))
}

/// Brightness as a percent of `max`, rounded up. Not clamped, so a device
/// reporting more than its max gives a value above 100.
pub fn brightness_percent(current: f64, max: f64) -> i64 {
    (current / max * 100.0).ceil() as i64
}

pub fn format_percent(current: f64, max: f64) -> String {
    format!("{}%", brightness_percent(current, max))
}
