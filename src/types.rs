//! Type definitions for AXP192 register contents
//!
//! The bit and level logic lives here so it can be exercised without a bus.
//! Both drivers read a register, hand the byte to one of these types, and
//! write back whatever comes out.

use crate::{error::Error, registers::*};

/// Switchable power rails in the power output control register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Rail {
    /// LDO1, kept on for the RTC
    AlwaysOn = AXP192_LDO1_EN_BIT,
    /// LDO3, vibration motor
    Vibration = AXP192_LDO3_EN_BIT,
    /// LDO2, LCD logic and peripherals
    LcdLogic = AXP192_LDO2_EN_BIT,
}

impl Rail {
    /// Bit mask of this rail inside the power output control register
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

/// Contents of the power output control register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PowerOutputs(u8);

impl PowerOutputs {
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check whether a rail's enable bit is set
    pub const fn is_enabled(self, rail: Rail) -> bool {
        self.0 & rail.mask() != 0
    }

    /// Return a copy with a single rail bit set or cleared, all other bits untouched
    #[must_use]
    pub const fn with(self, rail: Rail, enable: bool) -> Self {
        if enable {
            Self(self.0 | rail.mask())
        } else {
            Self(self.0 & !rail.mask())
        }
    }

    /// Apply the power-up defaults: always-on rail and LCD logic on, motor off
    #[must_use]
    pub const fn with_boot_defaults(self) -> Self {
        self.with(Rail::AlwaysOn, true)
            .with(Rail::Vibration, false)
            .with(Rail::LcdLogic, true)
    }
}

/// A DCDC3 level that has been through the clamp-and-floor policy
///
/// Values are always either 0 or inside
/// [`BACKLIGHT_SAFETY_MINIMUM`]..=[`AXP192_DC3_LEVEL_MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BacklightLevel(u8);

impl BacklightLevel {
    /// Rail fully off. Also removes power from the touch controller.
    pub const OFF: Self = Self(0);

    /// Build a level from a raw request.
    ///
    /// Anything above 127 is clamped to 127 and anything in 1..=49 is raised
    /// to the safety minimum. An exact 0 is honoured.
    pub const fn from_request(requested: u8) -> Self {
        if requested > AXP192_DC3_LEVEL_MAX {
            Self(AXP192_DC3_LEVEL_MAX)
        } else if requested != 0 && requested < BACKLIGHT_SAFETY_MINIMUM {
            Self(BACKLIGHT_SAFETY_MINIMUM)
        } else {
            Self(requested)
        }
    }

    /// Map a brightness percentage onto the DCDC3 range, then apply the policy.
    ///
    /// Percent values above 100 are treated as 100. Low percentages that round
    /// to a small non-zero level land on the safety minimum.
    pub const fn from_percent(percent: u8) -> Self {
        let percent = if percent > 100 { 100 } else { percent };
        let raw = (percent as u16 * AXP192_DC3_LEVEL_MAX as u16) / 100;
        Self::from_request(raw as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_off(self) -> bool {
        self.0 == 0
    }
}

impl From<BacklightLevel> for u8 {
    fn from(level: BacklightLevel) -> Self {
        level.0
    }
}

/// What the register primitives do when the bus reports an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BusErrorPolicy {
    /// Failed reads yield 0x00 and failed writes count as done
    #[default]
    Ignore,
    /// Return the bus error to the caller
    Propagate,
}

impl BusErrorPolicy {
    /// Turn a bus error into either nothing or an [`Error`], per policy
    pub(crate) fn resolve<E>(self, err: E) -> Result<(), Error<E>> {
        match self {
            BusErrorPolicy::Ignore => Ok(()),
            BusErrorPolicy::Propagate => Err(Error::I2c(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rail_masks_match_register_layout() {
        assert_eq!(Rail::AlwaysOn.mask(), 0x04);
        assert_eq!(Rail::Vibration.mask(), 0x08);
        assert_eq!(Rail::LcdLogic.mask(), 0x10);
    }

    #[test]
    fn toggling_a_rail_leaves_other_bits_alone() {
        let outputs = PowerOutputs::from_bits(0b1110_0011);

        let on = outputs.with(Rail::Vibration, true);
        assert_eq!(on.bits(), 0b1110_1011);
        assert!(on.is_enabled(Rail::Vibration));

        let off = on.with(Rail::Vibration, false);
        assert_eq!(off, outputs);

        let lcd_off = PowerOutputs::from_bits(0xFF).with(Rail::LcdLogic, false);
        assert_eq!(lcd_off.bits(), 0xEF);
    }

    #[test]
    fn boot_defaults() {
        assert_eq!(PowerOutputs::from_bits(0x00).with_boot_defaults().bits(), 0x14);
        assert_eq!(PowerOutputs::from_bits(0xFF).with_boot_defaults().bits(), 0xF7);
        assert_eq!(PowerOutputs::from_bits(0x08).with_boot_defaults().bits(), 0x14);
    }

    #[test]
    fn backlight_passes_safe_range_through() {
        for level in BACKLIGHT_SAFETY_MINIMUM..=AXP192_DC3_LEVEL_MAX {
            assert_eq!(BacklightLevel::from_request(level).value(), level);
        }
    }

    #[test]
    fn backlight_raises_near_zero_to_floor() {
        for level in 1..BACKLIGHT_SAFETY_MINIMUM {
            assert_eq!(BacklightLevel::from_request(level).value(), 50);
        }
    }

    #[test]
    fn backlight_clamps_above_range() {
        for level in 128..=u8::MAX {
            assert_eq!(BacklightLevel::from_request(level).value(), 127);
        }
    }

    #[test]
    fn backlight_zero_is_honoured() {
        let level = BacklightLevel::from_request(0);
        assert!(level.is_off());
        assert_eq!(level, BacklightLevel::OFF);
    }

    #[test]
    fn backlight_policy_is_idempotent() {
        for requested in 0..=u8::MAX {
            let once = BacklightLevel::from_request(requested);
            assert_eq!(BacklightLevel::from_request(once.value()), once);
        }
    }

    #[test]
    fn backlight_from_percent() {
        assert_eq!(BacklightLevel::from_percent(0).value(), 0);
        // 1% of 127 rounds down to 1, which the floor lifts
        assert_eq!(BacklightLevel::from_percent(1).value(), 50);
        assert_eq!(BacklightLevel::from_percent(50).value(), 63);
        assert_eq!(BacklightLevel::from_percent(100).value(), 127);
        assert_eq!(BacklightLevel::from_percent(250).value(), 127);
    }

    #[test]
    fn bus_error_policy() {
        assert_eq!(BusErrorPolicy::default(), BusErrorPolicy::Ignore);
        assert_eq!(BusErrorPolicy::Ignore.resolve(7u8), Ok(()));
        assert_eq!(BusErrorPolicy::Propagate.resolve(7u8), Err(Error::I2c(7u8)));
    }
}
