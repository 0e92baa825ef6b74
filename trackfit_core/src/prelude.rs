// trackfit_core/src/prelude.rs

// --- Core Abstractions (The main contracts of the library) ---
pub use crate::errors::MeasLayerError;
pub use crate::surfaces::MeasurementSurface;

// --- Core Data Structures (The "nouns" of the library) ---
pub use crate::config::CylinderLayerConfig;
pub use crate::hits::{CylinderHit, HitUncertainty, RawTrackerHit};
pub use crate::types::{GlobalPoint, MeasSigma, MeasVector, ProjectorMatrix, TrackJacobian};

// --- Concrete Surface Implementations ---
pub use crate::surfaces::cylinder::CylinderMeasLayer;
