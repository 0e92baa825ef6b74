// trackfit_core/src/config.rs

use serde::{Deserialize, Serialize};

// =========================================================================
// == Surface Geometry Configuration ==
// =========================================================================

/// # CylinderLayerConfig
/// Plain-data description of one cylindrical measurement surface, as handed
/// over by the external geometry description (e.g. parsed from a detector
/// TOML/JSON file). Turned into an immutable `CylinderMeasLayer` once, at
/// construction time; no global geometry registry exists in this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CylinderLayerConfig {
    /// Cylinder radius in mm. Must be > 0.
    pub radius: f64,

    /// Offset of the cylinder axis from the global origin, in the plane
    /// perpendicular to the axis, in mm.
    #[serde(default)]
    pub center: [f64; 2],

    /// Axial extent `[z_min, z_max]` of the sensitive surface, in mm.
    pub z_range: [f64; 2],

    /// Nominal axial magnetic field at the surface, in Tesla.
    pub bz: f64,

    /// Radial tolerance band for the on-surface test, in mm.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_tolerance() -> f64 {
    // 10 microns covers float noise from upstream geometry transforms
    // without accepting hits from a neighbouring layer.
    1e-2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_filled_in() {
        let json = r#"{ "radius": 50.0, "z_range": [-200.0, 200.0], "bz": 3.5 }"#;
        let cfg: CylinderLayerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.center, [0.0, 0.0]);
        assert_eq!(cfg.tolerance, 1e-2);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = r#"{ "radius": 50.0, "z_range": [0.0, 1.0], "bz": 3.5, "colour": "red" }"#;
        assert!(serde_json::from_str::<CylinderLayerConfig>(json).is_err());
    }
}
