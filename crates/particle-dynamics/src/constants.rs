//! Standing-acceleration presets for common simulation setups.

use crate::precision::Real;
use crate::vector::Vector3;

/// Earth-surface gravity, pointing down the y axis.
pub const GRAVITY: Vector3 = Vector3::new(0.0, -9.81, 0.0);

/// Exaggerated gravity, useful when a scene should feel heavier than
/// real-world values allow.
pub const HIGH_GRAVITY: Vector3 = Vector3::new(0.0, -19.62, 0.0);

/// A damping value close enough to 1 to read as "no drag" while still
/// bleeding off energy the integrator introduces.
pub const DEFAULT_DAMPING: Real = 0.995;
