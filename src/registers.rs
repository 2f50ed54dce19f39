//! Register addresses and constants for AXP192
//!
//! Only the registers the Core2 v1.0 board needs are mapped here. The bit
//! positions below index into [`AXP192_POWER_OUTPUT_CTRL`].

/// I2C Address
pub const AXP192_SLAVE_ADDRESS: u8 = 0x34;

/// Power output control register - Enable bits for the DCDC and LDO rails
pub const AXP192_POWER_OUTPUT_CTRL: u8 = 0x12;

/// DCDC3 voltage register - Drives the LCD backlight and the touch controller on Core2 v1.0
pub const AXP192_DC3_VOLTAGE: u8 = 0x27;

/// LDO1 rail (RTC and always-on domain)
pub const AXP192_LDO1_EN_BIT: u8 = 2;
/// LDO3 rail (vibration motor)
pub const AXP192_LDO3_EN_BIT: u8 = 3;
/// LDO2 rail (LCD logic and peripherals)
pub const AXP192_LDO2_EN_BIT: u8 = 4;

/// Highest value DCDC3 accepts
pub const AXP192_DC3_LEVEL_MAX: u8 = 127;

/// Lowest non-zero backlight level the driver will write.
///
/// Below this the shared DCDC3 rail no longer keeps the touch controller alive.
pub const BACKLIGHT_SAFETY_MINIMUM: u8 = 50;

/// Backlight level applied during init (~3.0V)
pub const BACKLIGHT_DEFAULT_LEVEL: u8 = 92;

/// Board label reported by `dump_config`
pub const BOARD_MODE_LABEL: &str = "Core2 v1.0";
