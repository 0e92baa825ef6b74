// trackfit_core/src/types.rs

use nalgebra::{DMatrix, Point3, Vector2};

// --- Core Type Aliases ---

/// A point in the detector's principal (global) frame, in mm.
pub type GlobalPoint = Point3<f64>;

/// A measurement vector in a surface's intrinsic 2D frame.
/// For a cylinder: `(r * phi, z)`.
pub type MeasVector = Vector2<f64>;

/// Per-axis standard deviations attached to a `MeasVector`,
/// `(sigma_rphi, sigma_z)`.
pub type MeasSigma = Vector2<f64>;

/// Jacobian of the global position with respect to the track parameters,
/// shape 3 x N with N the track-parameter dimension (5, or 6 with a
/// time-like term appended).
pub type TrackJacobian = DMatrix<f64>;

/// Projector matrix `H = d(meas)/d(a)`, shape 2 x N. Produced from a
/// `TrackJacobian` by a measurement surface.
pub type ProjectorMatrix = DMatrix<f64>;
