/// Location of backlight devices
pub const DEVICES_PATH: &str = "/sys/class/backlight";

/// Devices probed, in order, when no device path is given.
pub const DEFAULT_DEVICES: [&str; 3] = ["amdgpu_bl1", "intel_backlight", "acpi_video0"];

/// Filename for device's max brightness
pub const FILE_MAX_BRIGHTNESS: &str = "max_brightness";

/// Filename for current brightness.
///
/// `actual_brightness` would be closer to the hardware, but amdgpu reports it
/// on a different scale than [0, max_brightness].
pub const FILE_BRIGHTNESS: &str = "brightness";

/// Overrides device probing when set to a non-empty path.
pub const ENV_DEVICE_PATH: &str = "BACKLIGHT_DEVICE_PATH";
