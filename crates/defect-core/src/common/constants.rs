//! Physical and lattice-geometry constants shared by the rate kernels.
//!
//! Values are fixed at compile time so every `MaterialProperties` instance
//! reads the same numbers from any thread.

/// Boltzmann constant in eV/K (CODATA 2018).
pub const BOLTZMANN_EV_PER_K: f64 = 8.617_333_262_145e-5_f64;

/// Jump-site coordination factor in the reaction-frequency prefactor and the
/// `a0^2 / 48` diffusion scaling.
pub const JUMP_COORDINATION: f64 = 48.0;

/// Atoms per cubic cell; the atomic volume is `a0^3 / ATOMS_PER_CELL`.
pub const ATOMS_PER_CELL: f64 = 4.0;
