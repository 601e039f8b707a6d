use serde::{Deserialize, Serialize};

use crate::common::Position;
use crate::config::{Config, finite};
use crate::errors::Result;
use crate::geometry::GeometryOptions;

/// Parameters for the sphere factory.
///
/// Every field is optional; the factory fills in its own defaults for
/// absent ones. The angular fields carve a partial sphere and are given
/// in radians, matching the underlying geometry builder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SphereOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_segments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_segments: Option<u32>,
    /// Horizontal starting angle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phi_start: Option<f32>,
    /// Horizontal sweep angle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phi_length: Option<f32>,
    /// Vertical starting angle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theta_start: Option<f32>,
    /// Vertical sweep angle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theta_length: Option<f32>,
    #[serde(flatten)]
    pub position: Position,
    #[serde(flatten)]
    pub geometry: GeometryOptions,
}

impl SphereOptions {
    #[must_use]
    pub fn new(radius: f32) -> Self {
        Self {
            radius: Some(radius),
            ..Self::default()
        }
    }
}

impl Config for SphereOptions {
    const KIND: &'static str = "sphere";

    fn validate(&self) -> Result<()> {
        finite(Self::KIND, "radius", self.radius)?;
        finite(Self::KIND, "phi_start", self.phi_start)?;
        finite(Self::KIND, "phi_length", self.phi_length)?;
        finite(Self::KIND, "theta_start", self.theta_start)?;
        finite(Self::KIND, "theta_length", self.theta_length)?;
        self.position.check(Self::KIND)?;
        self.geometry.check(Self::KIND)
    }
}
