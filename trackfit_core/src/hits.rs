// trackfit_core/src/hits.rs

use crate::errors::MeasLayerError;
use crate::types::{GlobalPoint, MeasSigma, MeasVector};

// =========================================================================
// == Raw Hit Input ==
// =========================================================================

/// The uncertainty attached to a raw tracker hit.
///
/// Raw-hit sources deliver one of two shapes: detectors that measure
/// directly on a cylinder provide a decomposed `(d_rphi, d_z)` pair, while
/// generic sources only carry a full position covariance. The original
/// pipeline told them apart with a runtime downcast; here the distinction
/// is a plain tagged variant resolved once at the hit boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum HitUncertainty {
    /// Structured per-axis standard deviations in the cylinder's local
    /// measurement frame.
    ZCylinder { d_rphi: f64, d_z: f64 },
    /// Symmetric position covariance, row-major upper triangle convention:
    /// index 0 = xx, 2 = yy, 5 = zz. Must carry at least 6 entries.
    Covariance(Vec<f64>),
}

impl HitUncertainty {
    /// Collapses the uncertainty to a `(sigma_rphi, sigma_z)` pair.
    ///
    /// The covariance arm uses the diagonal-sum approximation,
    /// `sigma_rphi = sqrt(cov_xx + cov_yy)` and `sigma_z = sqrt(cov_zz)`;
    /// off-diagonal terms are discarded by design.
    pub fn to_sigma(&self) -> Result<MeasSigma, MeasLayerError> {
        match self {
            HitUncertainty::ZCylinder { d_rphi, d_z } => Ok(MeasSigma::new(*d_rphi, *d_z)),
            HitUncertainty::Covariance(cov) => {
                if cov.len() < 6 {
                    return Err(MeasLayerError::UnsupportedUncertainty { len: cov.len() });
                }
                Ok(MeasSigma::new((cov[0] + cov[2]).sqrt(), cov[5].sqrt()))
            }
        }
    }
}

/// A raw hit as delivered by the hit source: a global position plus an
/// uncertainty descriptor. The caller owns it; converted hits only borrow it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTrackerHit {
    pub position: GlobalPoint,
    pub uncertainty: HitUncertainty,
}

// =========================================================================
// == Validated Output ==
// =========================================================================

/// A raw hit that passed the on-surface test, expressed in the owning
/// cylinder's measurement frame. Only ever produced fully populated.
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderHit<'a> {
    /// Local measurement vector `(r * phi, z)`.
    pub meas: MeasVector,
    /// Standard deviations `(sigma_rphi, sigma_z)`.
    pub sigma: MeasSigma,
    /// Nominal axial magnetic field at the surface, in Tesla.
    pub bz: f64,
    /// Back-reference to the originating raw hit.
    pub raw: &'a RawTrackerHit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn structured_uncertainty_passes_through() {
        let u = HitUncertainty::ZCylinder {
            d_rphi: 0.01,
            d_z: 0.1,
        };
        let sigma = u.to_sigma().unwrap();
        assert_abs_diff_eq!(sigma[0], 0.01);
        assert_abs_diff_eq!(sigma[1], 0.1);
    }

    #[test]
    fn covariance_uses_diagonal_sum() {
        // diag(sx^2, sy^2, sz^2) with sx = sy = 0.3, sz = 0.5
        let u = HitUncertainty::Covariance(vec![0.09, 0.0, 0.09, 0.0, 0.0, 0.25]);
        let sigma = u.to_sigma().unwrap();
        assert_abs_diff_eq!(sigma[0], 0.3 * 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(sigma[1], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn short_covariance_is_rejected() {
        let u = HitUncertainty::Covariance(vec![1.0, 0.0, 1.0]);
        assert_eq!(
            u.to_sigma(),
            Err(MeasLayerError::UnsupportedUncertainty { len: 3 })
        );
    }
}
