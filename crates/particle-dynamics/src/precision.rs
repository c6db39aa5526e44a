//! Build-time floating-point precision for the whole simulation.
//!
//! Every vector component and scalar field in the crate uses [`Real`].
//! The precision is chosen once, at compile time, via the
//! `double-precision` cargo feature. Mixing precisions across linked
//! consumers corrupts the numerics, so there is deliberately no runtime
//! switch.

/// The floating-point type used throughout the simulation.
///
/// `f32` by default; `f64` when the `double-precision` feature is
/// enabled on this crate.
#[cfg(not(feature = "double-precision"))]
pub type Real = f32;

/// The floating-point type used throughout the simulation.
///
/// `f32` by default; `f64` when the `double-precision` feature is
/// enabled on this crate.
#[cfg(feature = "double-precision")]
pub type Real = f64;

/// Largest representable [`Real`].
///
/// Used as the sentinel returned by [`crate::Particle::mass`] for a
/// particle of infinite mass.
pub const REAL_MAX: Real = Real::MAX;
