//! Centralized constants for the randbattery crate
//!
//! Values shared by more than one module live here so the generators, the
//! battery driver and the tests agree on them.

/// Ambient source constants
pub mod source {
    /// Inclusive maximum of the default ambient source, matching the common
    /// C library `RAND_MAX` of `2^31 - 1`
    pub const DEFAULT_MAX: u32 = 0x7FFF_FFFF;
}

/// Generator labels used in report headers
pub mod labels {
    /// Modulo-reduction integer generator
    pub const MODULO: &str = "modulo (x % n)";

    /// Rejection/rescaling integer generator
    pub const UNIFORM: &str = "rescaled uniform";

    /// Box-Muller normal generator
    pub const NORMAL: &str = "box-muller normal";

    /// Fixed-sequence test double
    pub const SEQUENCE: &str = "fixed sequence";
}
