//! Error types for AXP192 operations
//!
//! Bus errors only reach the caller when the driver is configured with
//! [`BusErrorPolicy::Propagate`](crate::BusErrorPolicy::Propagate).

/// Error types for AXP192 operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// I2C communication error
    I2c(E),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::I2c(error)
    }
}
