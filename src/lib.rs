#![cfg_attr(not(test), no_std)]
//! # AXP192 Power Management Unit Driver
//!
//! Driver for the AXP192 PMU as wired on the M5Stack Core2 v1.0. It covers
//! the pieces of the chip that board uses at runtime:
//! - LCD backlight through DCDC3, with a safety floor so the touch controller
//!   sharing that rail stays powered
//! - Vibration motor rail (LDO3)
//! - LCD logic rail (LDO2) and the always-on rail (LDO1)
//!
//! Bus errors are swallowed by default, the way the board firmware has always
//! behaved. Pass a [`Config`] with [`BusErrorPolicy::Propagate`] to get them back.
//!
//! ## Example
//!
//! ```no_run
//! use axp192::{Axp192, Component, Error};
//! # use embedded_hal::i2c::I2c;
//! # fn example<I: I2c>(i2c: I) -> Result<(), Error<I::Error>> {
//! let mut pmu = Axp192::new(i2c);
//!
//! // Rails on, motor off, backlight at 92
//! pmu.setup();
//!
//! pmu.set_backlight_level(110)?;
//! pmu.set_vibration(true)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Async Support
//!
//! When the `async` feature is enabled, the crate provides `AsyncAxp192`
//! with the same API but async/await support.

mod component;
mod config;
mod diagnostics;
mod driver;
#[cfg(feature = "async")]
mod driver_async;
mod error;
mod registers;
mod types;

pub use component::{setup_priority, Component};
pub use config::Config;
pub use diagnostics::{Diagnostics, Level, LogDiagnostics, LOG_TARGET};
pub use driver::Axp192;
#[cfg(feature = "async")]
pub use driver_async::AsyncAxp192;
pub use error::Error;
pub use registers::*;
pub use types::*;
