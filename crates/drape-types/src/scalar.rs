//! Scalar type alias for the simulation.
//!
//! The kernel works in double precision. Positions are in canvas units
//! (pixels) and can reach the thousands, where `f32` loses the
//! sub-millimetre contact offsets.

/// The floating-point type used throughout the simulation.
pub type Scalar = f64;
