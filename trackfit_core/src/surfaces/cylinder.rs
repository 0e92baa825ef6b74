// trackfit_core/src/surfaces/cylinder.rs

use crate::config::CylinderLayerConfig;
use crate::errors::MeasLayerError;
use crate::hits::{CylinderHit, RawTrackerHit};
use crate::surfaces::MeasurementSurface;
use crate::types::{GlobalPoint, MeasVector, ProjectorMatrix, TrackJacobian};
use nalgebra::{DMatrix, Vector2};
use std::f64::consts::PI;

/// Below this planar distance-squared from the cylinder axis the azimuth
/// derivative is numerically meaningless (rho under ~1e-8 mm).
const RHO2_MIN: f64 = 1e-16;

/// # CylinderMeasLayer
/// One cylindrical detector measurement surface, as seen by the Kalman
/// fitter. It owns the surface geometry (radius, axis offset, axial extent,
/// field value) and converts between the global frame and the surface's
/// intrinsic `(r * phi, z)` measurement frame.
///
/// All fields are set once at construction and never mutated, so a single
/// instance can be read concurrently by multiple fitting threads.
#[derive(Debug, Clone)]
pub struct CylinderMeasLayer {
    /// Cylinder radius in mm.
    r: f64,
    /// Offset of the cylinder axis in the plane perpendicular to it, in mm.
    center: Vector2<f64>,
    /// Axial extent of the sensitive surface, in mm.
    z_min: f64,
    z_max: f64,
    /// Radial tolerance band for the on-surface test, in mm.
    tolerance: f64,
    /// Nominal axial magnetic field at this surface, in Tesla.
    bz: f64,
}

impl CylinderMeasLayer {
    /// Creates a new cylindrical measurement surface.
    pub fn new(
        r: f64,
        center: Vector2<f64>,
        z_range: (f64, f64),
        tolerance: f64,
        bz: f64,
    ) -> Self {
        // Geometry that violates these is a configuration bug, not a
        // recoverable runtime condition.
        assert!(r > 0.0, "cylinder radius must be positive, got {r}");
        assert!(
            z_range.0 <= z_range.1,
            "z_range must be ordered, got {z_range:?}"
        );
        assert!(tolerance >= 0.0, "tolerance must be non-negative");

        Self {
            r,
            center,
            z_min: z_range.0,
            z_max: z_range.1,
            tolerance,
            bz,
        }
    }

    /// Builds the surface from an external geometry description.
    pub fn from_config(cfg: &CylinderLayerConfig) -> Self {
        Self::new(
            cfg.radius,
            Vector2::new(cfg.center[0], cfg.center[1]),
            (cfg.z_range[0], cfg.z_range[1]),
            cfg.tolerance,
            cfg.bz,
        )
    }

    // --- Plain accessors ---

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn center(&self) -> &Vector2<f64> {
        &self.center
    }

    pub fn z_range(&self) -> (f64, f64) {
        (self.z_min, self.z_max)
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn bz(&self) -> f64 {
        self.bz
    }

    /// Planar distance of a global point from the cylinder axis.
    fn perp(&self, xv: &GlobalPoint) -> f64 {
        let dx = xv.x - self.center.x;
        let dy = xv.y - self.center.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Converts a raw tracker hit into this layer's native measurement
    /// representation, validating that it actually lies on the surface.
    ///
    /// Returns `Ok(None)` when the hit fails the on-surface test — that is
    /// a normal negative outcome the caller must branch on, not an error.
    /// `Err` is reserved for a null input or an uncertainty shape this
    /// layer cannot interpret.
    pub fn convert_raw_hit<'a>(
        &self,
        raw: Option<&'a RawTrackerHit>,
    ) -> Result<Option<CylinderHit<'a>>, MeasLayerError> {
        let Some(raw) = raw else {
            tracing::error!("convert_raw_hit called with a null tracker hit");
            return Err(MeasLayerError::NullInput);
        };

        let meas = self.xv_to_mv(&raw.position);
        let sigma = raw.uncertainty.to_sigma()?;
        let on_surface = self.is_on_surface(&raw.position);

        // Advisory diagnostics only; never feeds back into control flow.
        tracing::debug!(
            hit_r = self.perp(&raw.position),
            layer_r = self.r,
            rphi = meas[0],
            z = meas[1],
            d_rphi = sigma[0],
            d_z = sigma[1],
            x = raw.position.x,
            y = raw.position.y,
            hit_z = raw.position.z,
            on_surface,
            "converted raw tracker hit"
        );

        if on_surface {
            Ok(Some(CylinderHit {
                meas,
                sigma,
                bz: self.bz,
                raw,
            }))
        } else {
            Ok(None)
        }
    }
}

impl MeasurementSurface for CylinderMeasLayer {
    /// Global to local coordinates:
    ///   mv[0] = r * phi, with phi normalized into (-pi, pi]
    ///   mv[1] = z, relative to the cylinder's local z-origin
    fn xv_to_mv(&self, xv: &GlobalPoint) -> MeasVector {
        // Account for the cylinder not being centered at x = 0, y = 0.
        let dx = xv.x - self.center.x;
        let dy = xv.y - self.center.y;

        // A point exactly on the axis has no defined azimuth; pin it to 0
        // rather than relying on whatever atan2(0, 0) happens to return.
        let mut phi = if dx == 0.0 && dy == 0.0 {
            0.0
        } else {
            dy.atan2(dx)
        };

        // Bring phi back into the (-pi, pi] range. atan2 output needs at
        // most one correction, but looping keeps this robust for arbitrary
        // inputs.
        while phi <= -PI {
            phi += 2.0 * PI;
        }
        while phi > PI {
            phi -= 2.0 * PI;
        }

        MeasVector::new(self.r * phi, xv.z)
    }

    /// Local to global coordinates, assuming the point sits exactly on the
    /// cylinder. The radial deviation is not part of the 2D measurement, so
    /// it cannot be (and is not) recovered here.
    fn hit_to_xv(&self, mv: &MeasVector) -> GlobalPoint {
        let phi = mv[0] / self.r;

        GlobalPoint::new(
            self.r * phi.cos() + self.center.x,
            self.r * phi.sin() + self.center.y,
            mv[1],
        )
    }

    /// Calculates the projector matrix
    ///    H = (dh/da) = (d(r*phi)/da, dz/da)^t
    /// where
    ///    h(a) = (r*phi, z)^t: expected measurement vector
    ///    a    = (drho, phi0, kappa, dz, tanl [, t0]): track parameters
    fn calc_dh_da(
        &self,
        xv: &GlobalPoint,
        dxda: &TrackJacobian,
    ) -> Result<ProjectorMatrix, MeasLayerError> {
        let sdim = dxda.ncols();
        assert_eq!(
            dxda.nrows(),
            3,
            "dxda must be a 3 x N global-position Jacobian"
        );
        assert!(
            sdim == 5 || sdim == 6,
            "track-parameter dimension must be 5 or 6, got {sdim}"
        );
        let hdim = 5.max(sdim - 1);

        // Account for the cylinder not being centered at x = 0, y = 0.
        let dx = xv.x - self.center.x;
        let dy = xv.y - self.center.y;
        let xxyy = dx * dx + dy * dy;

        // A track through the cylinder axis makes d(phi)/d(xy) undefined.
        // Report it instead of letting the division produce inf/NaN that
        // would corrupt the covariance propagation silently.
        if xxyy < RHO2_MIN {
            return Err(MeasLayerError::DegenerateGeometry { rho2: xxyy });
        }

        let mut h = DMatrix::zeros(2, sdim);

        for i in 0..hdim {
            h[(0, i)] = self.r * (-(dy / xxyy) * dxda[(0, i)] + (dx / xxyy) * dxda[(1, i)]);
            h[(1, i)] = dxda[(2, i)];
        }

        // The time-like sixth parameter does not couple to the azimuthal
        // measurement through this surface.
        if sdim == 6 {
            h[(0, sdim - 1)] = 0.0;
        }

        Ok(h)
    }

    /// Membership test: radial distance within the tolerance band of the
    /// cylinder radius, and z within the surface's axial extent.
    fn is_on_surface(&self, xv: &GlobalPoint) -> bool {
        (self.perp(xv) - self.r).abs() <= self.tolerance
            && xv.z >= self.z_min
            && xv.z <= self.z_max
    }
}
