// trackfit_core/src/surfaces/mod.rs

use crate::errors::MeasLayerError;
use crate::types::{GlobalPoint, MeasVector, ProjectorMatrix, TrackJacobian};
use dyn_clone::DynClone;
use std::fmt::Debug;

// --- MEASUREMENT SURFACE TRAIT ---
// Represents one detector surface the fitter can take measurements on.
// All operations are pure functions of the call inputs plus the surface's
// immutable geometry, so implementors are safe to share across fitting
// threads without synchronization.
pub trait MeasurementSurface: DynClone + Debug + Send + Sync {
    /// Projects a global point into the surface's intrinsic 2D measurement
    /// frame.
    fn xv_to_mv(&self, xv: &GlobalPoint) -> MeasVector;

    /// Reconstructs the global point for a local measurement vector,
    /// assuming the point lies exactly on the surface. Exact inverse of
    /// `xv_to_mv` restricted to on-surface points.
    fn hit_to_xv(&self, mv: &MeasVector) -> GlobalPoint;

    /// Builds the 2 x N projector matrix `H = d(meas)/d(a)` from the
    /// 3 x N Jacobian `dxda = d(global xyz)/d(a)` evaluated at `xv`.
    fn calc_dh_da(
        &self,
        xv: &GlobalPoint,
        dxda: &TrackJacobian,
    ) -> Result<ProjectorMatrix, MeasLayerError>;

    /// Tolerance-based membership test: does this global point lie on the
    /// physical surface?
    fn is_on_surface(&self, xv: &GlobalPoint) -> bool;
}

// This macro automatically generates the implementation of `Clone` for
// `Box<dyn MeasurementSurface>`.
dyn_clone::clone_trait_object!(MeasurementSurface);

pub mod cylinder;
