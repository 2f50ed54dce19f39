//! Async AXP192 PMU driver implementation

use crate::{
    config::Config,
    diagnostics::{self, Diagnostics, LogDiagnostics},
    error::Error,
    registers::*,
    types::*,
};

use embedded_hal_async::i2c::I2c as AsyncI2c;

/// Async AXP192 PMU driver
///
/// Mirrors [`Axp192`](crate::Axp192) with async bus access. The same
/// read-modify-write caveat applies: do not run two operations on the power
/// output register concurrently.
///
/// # Example
/// ```no_run
/// # async fn example<I: embedded_hal_async::i2c::I2c>(i2c: I) -> Result<(), axp192::Error<I::Error>> {
/// use axp192::AsyncAxp192;
///
/// let mut pmu = AsyncAxp192::new(i2c);
/// pmu.init().await?;
/// pmu.set_backlight_level(110).await?;
/// pmu.set_vibration(true).await?;
/// # Ok(())
/// # }
/// ```
pub struct AsyncAxp192<I, D = LogDiagnostics> {
    i2c: I,
    config: Config,
    diagnostics: D,
}

impl<I> AsyncAxp192<I>
where
    I: AsyncI2c,
{
    /// Create a new async AXP192 driver instance
    pub fn new(i2c: I) -> Self {
        Self::with_config(i2c, Config::default())
    }

    /// Create a new async AXP192 driver instance with custom I2C address
    pub fn with_address(i2c: I, addr: u8) -> Self {
        Self::with_config(i2c, Config::new().with_address(addr))
    }

    pub fn with_config(i2c: I, config: Config) -> Self {
        Self::with_diagnostics(i2c, config, LogDiagnostics)
    }
}

impl<I, D> AsyncAxp192<I, D>
where
    I: AsyncI2c,
    D: Diagnostics,
{
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

    pub fn release(self) -> (I, D) {
        (self.i2c, self.diagnostics)
    }

    /// Put the PMU into its power-up state
    pub async fn init(&mut self) -> Result<(), Error<I::Error>> {
        let outputs = self.power_outputs().await?.with_boot_defaults();
        self.write_register(AXP192_POWER_OUTPUT_CTRL, outputs.bits())
            .await?;
        let level = self.config.initial_backlight;
        self.set_backlight_level(level).await
    }

    /// Boot hook: init, then report what the registers read back
    ///
    /// Bus failures are reported through diagnostics and never returned.
    pub async fn setup(&mut self) {
        diagnostics::setup_started(&mut self.diagnostics);
        match self.init_and_read_back().await {
            Ok((outputs, backlight)) => {
                diagnostics::setup_finished(&mut self.diagnostics, outputs, backlight)
            }
            Err(e) => diagnostics::setup_failed(&mut self.diagnostics, &e),
        }
    }

    /// Report the bus address and board mode. No bus traffic.
    pub fn dump_config(&mut self) {
        diagnostics::dump_config(&mut self.diagnostics, self.config.address);
    }

    async fn init_and_read_back(&mut self) -> Result<(u8, u8), Error<I::Error>> {
        self.init().await?;
        let outputs = self.read_register(AXP192_POWER_OUTPUT_CTRL).await?;
        let backlight = self.read_register(AXP192_DC3_VOLTAGE).await?;
        Ok((outputs, backlight))
    }

    // ========================================
    // Low-level I2C operations
    // ========================================

    /// Read a single register
    pub async fn read_register(&mut self, reg: u8) -> Result<u8, Error<I::Error>> {
        let mut buf = [0u8];
        match self
            .i2c
            .write_read(self.config.address, &[reg], &mut buf)
            .await
        {
            Ok(()) => Ok(buf[0]),
            Err(e) => self.config.bus_errors.resolve(e).map(|()| 0),
        }
    }

    /// Write a single register
    pub async fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<I::Error>> {
        match self.i2c.write(self.config.address, &[reg, value]).await {
            Ok(()) => Ok(()),
            Err(e) => self.config.bus_errors.resolve(e),
        }
    }

    async fn update_rail(&mut self, rail: Rail, enable: bool) -> Result<(), Error<I::Error>> {
        let outputs = self.power_outputs().await?.with(rail, enable);
        self.write_register(AXP192_POWER_OUTPUT_CTRL, outputs.bits())
            .await
    }

    // ========================================
    // Backlight (DCDC3)
    // ========================================

    /// Set the backlight level (0-127), see [`BacklightLevel::from_request`]
    pub async fn set_backlight_level(&mut self, level: u8) -> Result<(), Error<I::Error>> {
        self.apply_backlight(BacklightLevel::from_request(level))
            .await
    }

    /// Set the backlight as a percentage (0-100) of the DCDC3 range
    pub async fn set_backlight_percent(&mut self, percent: u8) -> Result<(), Error<I::Error>> {
        self.apply_backlight(BacklightLevel::from_percent(percent))
            .await
    }

    async fn apply_backlight(&mut self, level: BacklightLevel) -> Result<(), Error<I::Error>> {
        self.write_register(AXP192_DC3_VOLTAGE, level.value())
            .await?;
        diagnostics::backlight_applied(&mut self.diagnostics, level);
        Ok(())
    }

    pub async fn backlight_level(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.read_register(AXP192_DC3_VOLTAGE).await? & AXP192_DC3_LEVEL_MAX)
    }

    // ========================================
    // Power outputs
    // ========================================

    pub async fn power_outputs(&mut self) -> Result<PowerOutputs, Error<I::Error>> {
        self.read_register(AXP192_POWER_OUTPUT_CTRL)
            .await
            .map(PowerOutputs::from_bits)
    }

    /// Turn the vibration motor (LDO3) on or off
    pub async fn set_vibration(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.update_rail(Rail::Vibration, enable).await?;
        diagnostics::vibration_changed(&mut self.diagnostics, enable);
        Ok(())
    }

    pub async fn is_vibration_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.power_outputs().await?.is_enabled(Rail::Vibration))
    }

    /// Switch the LCD logic rail (LDO2). Turning it off is logged as a warning.
    pub async fn set_ldo2(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.update_rail(Rail::LcdLogic, enable).await?;
        diagnostics::ldo2_changed(&mut self.diagnostics, enable);
        Ok(())
    }

    pub async fn is_ldo2_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.power_outputs().await?.is_enabled(Rail::LcdLogic))
    }
}
