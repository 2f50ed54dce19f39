//! Driver configuration

use crate::{registers::*, types::BusErrorPolicy};

/// Construction-time settings for [`Axp192`](crate::Axp192) and `AsyncAxp192`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// 7-bit I2C address of the PMU
    pub address: u8,
    /// Backlight level requested during init. Still subject to the backlight policy.
    pub initial_backlight: u8,
    /// Whether bus errors are swallowed or returned
    pub bus_errors: BusErrorPolicy,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            address: AXP192_SLAVE_ADDRESS,
            initial_backlight: BACKLIGHT_DEFAULT_LEVEL,
            bus_errors: BusErrorPolicy::Ignore,
        }
    }

    #[must_use]
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    #[must_use]
    pub const fn with_initial_backlight(mut self, level: u8) -> Self {
        self.initial_backlight = level;
        self
    }

    #[must_use]
    pub const fn with_bus_errors(mut self, policy: BusErrorPolicy) -> Self {
        self.bus_errors = policy;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_core2_board() {
        let config = Config::default();
        assert_eq!(config.address, 0x34);
        assert_eq!(config.initial_backlight, 92);
        assert_eq!(config.bus_errors, BusErrorPolicy::Ignore);
    }

    #[test]
    fn builder_overrides() {
        let config = Config::new()
            .with_address(0x35)
            .with_initial_backlight(120)
            .with_bus_errors(BusErrorPolicy::Propagate);
        assert_eq!(config.address, 0x35);
        assert_eq!(config.initial_backlight, 120);
        assert_eq!(config.bus_errors, BusErrorPolicy::Propagate);
    }
}
