//! Synchronous AXP192 PMU driver implementation

use crate::{
    component::Component,
    config::Config,
    diagnostics::{self, Diagnostics, LogDiagnostics},
    error::Error,
    registers::*,
    types::*,
};
use embedded_hal::i2c::I2c;

/// AXP192 PMU driver
///
/// Nothing is cached: every operation reads the register it changes and
/// writes the whole byte back. Two operations that both touch
/// [`AXP192_POWER_OUTPUT_CTRL`] are therefore not atomic with respect to each
/// other. The `&mut self` receivers keep a single owner; if several tasks need
/// the PMU, put the driver behind a lock at that boundary.
pub struct Axp192<I, D = LogDiagnostics> {
    i2c: I,
    config: Config,
    diagnostics: D,
}

impl<I> Axp192<I>
where
    I: I2c,
{
    /// Create a new AXP192 driver instance
    ///
    /// # Arguments
    /// * `i2c` - I2C bus instance
    ///
    /// # Example
    /// ```no_run
    /// # use axp192::Axp192;
    /// # use embedded_hal::i2c::I2c;
    /// # fn example<I: I2c>(i2c: I) {
    /// let pmu = Axp192::new(i2c);
    /// # }
    /// ```
    pub fn new(i2c: I) -> Self {
        Self::with_config(i2c, Config::default())
    }

    /// Create a new AXP192 driver instance with custom I2C address
    pub fn with_address(i2c: I, addr: u8) -> Self {
        Self::with_config(i2c, Config::new().with_address(addr))
    }

    /// Create a driver that logs through the `log` facade
    pub fn with_config(i2c: I, config: Config) -> Self {
        Self::with_diagnostics(i2c, config, LogDiagnostics)
    }
}

impl<I, D> Axp192<I, D>
where
    I: I2c,
    D: Diagnostics,
{
    /// Create a driver with an explicit diagnostics sink
    pub fn with_diagnostics(i2c: I, config: Config, diagnostics: D) -> Self {
        Self {
            i2c,
            config,
            diagnostics,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Give back the bus and the diagnostics sink
    pub fn release(self) -> (I, D) {
        (self.i2c, self.diagnostics)
    }

    /// Put the PMU into its power-up state
    ///
    /// Turns the always-on rail and the LCD logic rail on, switches the
    /// vibration motor off, then applies the configured backlight level.
    /// The LCD logic rail must be on or the display stays dark.
    pub fn init(&mut self) -> Result<(), Error<I::Error>> {
        let outputs = self.power_outputs()?.with_boot_defaults();
        self.write_register(AXP192_POWER_OUTPUT_CTRL, outputs.bits())?;
        self.set_backlight_level(self.config.initial_backlight)
    }

    // ========================================
    // Low-level I2C operations
    // ========================================

    /// Read a single register
    ///
    /// With [`BusErrorPolicy::Ignore`] a failed read returns `0x00`.
    pub fn read_register(&mut self, reg: u8) -> Result<u8, Error<I::Error>> {
        let mut buf = [0u8];
        match self.i2c.write_read(self.config.address, &[reg], &mut buf) {
            Ok(()) => Ok(buf[0]),
            Err(e) => self.config.bus_errors.resolve(e).map(|()| 0),
        }
    }

    /// Write a single register
    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<I::Error>> {
        match self.i2c.write(self.config.address, &[reg, value]) {
            Ok(()) => Ok(()),
            Err(e) => self.config.bus_errors.resolve(e),
        }
    }

    /// Set or clear one rail bit, leaving the rest of the register as read
    fn update_rail(&mut self, rail: Rail, enable: bool) -> Result<(), Error<I::Error>> {
        let outputs = self.power_outputs()?.with(rail, enable);
        self.write_register(AXP192_POWER_OUTPUT_CTRL, outputs.bits())
    }

    // ========================================
    // Backlight (DCDC3)
    // ========================================

    /// Set the backlight level (0-127)
    ///
    /// Levels above 127 are clamped and levels 1-49 are raised to
    /// [`BACKLIGHT_SAFETY_MINIMUM`]. DCDC3 also feeds the touch controller,
    /// so 0 is written as asked but produces a warning: the touch panel will
    /// stop responding.
    pub fn set_backlight_level(&mut self, level: u8) -> Result<(), Error<I::Error>> {
        self.apply_backlight(BacklightLevel::from_request(level))
    }

    /// Set the backlight as a percentage (0-100) of the DCDC3 range
    pub fn set_backlight_percent(&mut self, percent: u8) -> Result<(), Error<I::Error>> {
        self.apply_backlight(BacklightLevel::from_percent(percent))
    }

    fn apply_backlight(&mut self, level: BacklightLevel) -> Result<(), Error<I::Error>> {
        self.write_register(AXP192_DC3_VOLTAGE, level.value())?;
        diagnostics::backlight_applied(&mut self.diagnostics, level);
        Ok(())
    }

    /// Get the current DCDC3 level
    pub fn backlight_level(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.read_register(AXP192_DC3_VOLTAGE)? & AXP192_DC3_LEVEL_MAX)
    }

    // ========================================
    // Power outputs
    // ========================================

    /// Get the power output control register
    pub fn power_outputs(&mut self) -> Result<PowerOutputs, Error<I::Error>> {
        self.read_register(AXP192_POWER_OUTPUT_CTRL)
            .map(PowerOutputs::from_bits)
    }

    /// Turn the vibration motor (LDO3) on or off
    pub fn set_vibration(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.update_rail(Rail::Vibration, enable)?;
        diagnostics::vibration_changed(&mut self.diagnostics, enable);
        Ok(())
    }

    /// Check if the vibration motor rail is on
    pub fn is_vibration_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.power_outputs()?.is_enabled(Rail::Vibration))
    }

    /// Switch the LCD logic rail (LDO2)
    ///
    /// [`init`](Self::init) already turns this on and the display needs it.
    /// Turning it off is logged as a warning.
    pub fn set_ldo2(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.update_rail(Rail::LcdLogic, enable)?;
        diagnostics::ldo2_changed(&mut self.diagnostics, enable);
        Ok(())
    }

    /// Check if the LCD logic rail is on
    pub fn is_ldo2_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.power_outputs()?.is_enabled(Rail::LcdLogic))
    }

    fn init_and_read_back(&mut self) -> Result<(u8, u8), Error<I::Error>> {
        self.init()?;
        let outputs = self.read_register(AXP192_POWER_OUTPUT_CTRL)?;
        let backlight = self.read_register(AXP192_DC3_VOLTAGE)?;
        Ok((outputs, backlight))
    }
}

impl<I, D> Component for Axp192<I, D>
where
    I: I2c,
    D: Diagnostics,
{
    fn setup(&mut self) {
        diagnostics::setup_started(&mut self.diagnostics);
        match self.init_and_read_back() {
            Ok((outputs, backlight)) => {
                diagnostics::setup_finished(&mut self.diagnostics, outputs, backlight)
            }
            Err(e) => diagnostics::setup_failed(&mut self.diagnostics, &e),
        }
    }

    fn dump_config(&mut self) {
        diagnostics::dump_config(&mut self.diagnostics, self.config.address);
    }
}
