//! Diagnostic output
//!
//! The drivers never call the `log` macros directly. Everything goes through a
//! [`Diagnostics`] sink so firmware can route messages elsewhere and tests can
//! inspect them.

use core::fmt;

pub use log::Level;

/// `log` target used by [`LogDiagnostics`]
pub const LOG_TARGET: &str = "axp192";

/// Receiver for driver diagnostics
pub trait Diagnostics {
    fn record(&mut self, level: Level, message: fmt::Arguments<'_>);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn record(&mut self, level: Level, message: fmt::Arguments<'_>) {
        (**self).record(level, message);
    }
}

/// Forwards diagnostics to the `log` facade under [`LOG_TARGET`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn record(&mut self, level: Level, message: fmt::Arguments<'_>) {
        log::log!(target: LOG_TARGET, level, "{}", message);
    }
}

// Messages shared by the blocking and async drivers.

pub(crate) fn backlight_applied<D: Diagnostics>(sink: &mut D, level: crate::BacklightLevel) {
    if level.is_off() {
        sink.record(
            Level::Warn,
            format_args!("Backlight level 0 requested - this may power off the touch controller!"),
        );
        sink.record(
            Level::Warn,
            format_args!(
                "Device may become unresponsive. Consider using level >= {}",
                crate::BACKLIGHT_SAFETY_MINIMUM
            ),
        );
    }
    sink.record(
        Level::Debug,
        format_args!("Backlight set to level: {}", level.value()),
    );
}

pub(crate) fn vibration_changed<D: Diagnostics>(sink: &mut D, enable: bool) {
    sink.record(
        Level::Debug,
        format_args!("Vibration motor: {}", on_off(enable)),
    );
}

pub(crate) fn ldo2_changed<D: Diagnostics>(sink: &mut D, enable: bool) {
    if enable {
        sink.record(Level::Debug, format_args!("LDO2 (LCD logic) ON"));
    } else {
        sink.record(
            Level::Warn,
            format_args!(
                "LDO2 (LCD logic) turned OFF - it should normally stay ON for {}!",
                crate::BOARD_MODE_LABEL
            ),
        );
    }
}

pub(crate) fn setup_started<D: Diagnostics>(sink: &mut D) {
    sink.record(
        Level::Info,
        format_args!("AXP192 {} setup starting", crate::BOARD_MODE_LABEL),
    );
}

pub(crate) fn setup_finished<D: Diagnostics>(sink: &mut D, outputs: u8, backlight: u8) {
    sink.record(
        Level::Info,
        format_args!(
            "PMU reg 0x{:02X} (power enables): 0x{:02X}",
            crate::AXP192_POWER_OUTPUT_CTRL,
            outputs
        ),
    );
    sink.record(
        Level::Info,
        format_args!(
            "Backlight DCDC3 voltage (0x{:02X}): 0x{:02X}",
            crate::AXP192_DC3_VOLTAGE,
            backlight
        ),
    );
    sink.record(Level::Info, format_args!("AXP192 component initialized"));
}

pub(crate) fn setup_failed<D: Diagnostics, E: fmt::Debug>(sink: &mut D, err: &E) {
    sink.record(Level::Error, format_args!("AXP192 setup failed: {:?}", err));
}

pub(crate) fn dump_config<D: Diagnostics>(sink: &mut D, address: u8) {
    sink.record(Level::Info, format_args!("AXP192:"));
    sink.record(Level::Info, format_args!("  Address: 0x{:02X}", address));
    sink.record(
        Level::Info,
        format_args!("  {} mode", crate::BOARD_MODE_LABEL),
    );
}

fn on_off(enable: bool) -> &'static str {
    if enable {
        "ON"
    } else {
        "OFF"
    }
}
