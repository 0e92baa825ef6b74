// trackfit_core/src/errors.rs

use thiserror::Error;

/// Failures a measurement surface can report to its immediate caller.
///
/// Note that a hit failing the on-surface membership test is NOT in this
/// list: rejection is a normal negative outcome and is reported as
/// `Ok(None)` by `convert_raw_hit`, not as an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasLayerError {
    /// The raw hit reference was absent. Fatal to this single conversion
    /// call only; other calls are unaffected.
    #[error("raw tracker hit reference is null")]
    NullInput,

    /// The point used for the projector matrix sits on (or numerically at)
    /// the cylinder axis, where `d(phi)/d(xy)` is undefined. The caller must
    /// branch on this instead of receiving silent NaNs.
    #[error("point lies on the cylinder axis (rho^2 = {rho2:e}), projector matrix is undefined")]
    DegenerateGeometry { rho2: f64 },

    /// The covariance attached to a raw hit is too short to carry the
    /// xx/yy/zz diagonal terms. Propagating a made-up uncertainty would
    /// corrupt the fit silently, so this fails loudly instead.
    #[error("covariance has {len} entries, need at least 6 (row-major upper triangle)")]
    UnsupportedUncertainty { len: usize },
}
