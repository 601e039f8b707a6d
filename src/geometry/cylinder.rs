use serde::{Deserialize, Serialize};

use crate::common::Position;
use crate::config::{Config, finite};
use crate::errors::Result;
use crate::geometry::GeometryOptions;

/// Parameters for the cylinder factory.
///
/// Distinct top and bottom radii allow cones and truncated cones; the
/// angular fields (radians) carve a partial barrel. The shared 2D extent
/// is folded into the record directly — `height` doubles as the barrel
/// height along Y, so the field exists only once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CylinderOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Barrel height along Y.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_segments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_segments: Option<u32>,
    /// Leave the end caps off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_ended: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theta_start: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theta_length: Option<f32>,
    #[serde(flatten)]
    pub position: Position,
    #[serde(flatten)]
    pub geometry: GeometryOptions,
}

impl Config for CylinderOptions {
    const KIND: &'static str = "cylinder";

    fn validate(&self) -> Result<()> {
        finite(Self::KIND, "radius_top", self.radius_top)?;
        finite(Self::KIND, "radius_bottom", self.radius_bottom)?;
        finite(Self::KIND, "width", self.width)?;
        finite(Self::KIND, "height", self.height)?;
        finite(Self::KIND, "theta_start", self.theta_start)?;
        finite(Self::KIND, "theta_length", self.theta_length)?;
        self.position.check(Self::KIND)?;
        self.geometry.check(Self::KIND)
    }
}
