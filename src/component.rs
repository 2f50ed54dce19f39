//! Host lifecycle hooks
//!
//! The board firmware owns a list of components and calls these once at boot
//! (in priority order) and again whenever it prints its configuration.

/// Setup priorities, higher runs first
pub mod setup_priority {
    /// Buses and other hardware the rest depends on
    pub const BUS: f32 = 1000.0;
    pub const IO: f32 = 900.0;
    pub const HARDWARE: f32 = 800.0;
    /// Sensors and drivers that produce or consume data
    pub const DATA: f32 = 600.0;
    pub const PROCESSOR: f32 = 400.0;
    pub const LATE: f32 = -100.0;
}

/// A driver the host scheduler can bring up and report on
pub trait Component {
    /// Bring the hardware into a known state. Must not panic on bus failure.
    fn setup(&mut self);

    /// Report static configuration. No hardware access.
    fn dump_config(&mut self);

    fn setup_priority(&self) -> f32 {
        setup_priority::DATA
    }
}
