//! Physical constants in cgs units, matching the engine's unit system.

/// Solar radius [cm].
pub const R_SUN: f64 = 6.957e10;

/// Mean Jupiter radius [cm].
pub const R_JUP_MEAN: f64 = 6.9911e9;
