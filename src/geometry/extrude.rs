use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::common::Position;
use crate::config::{Config, finite};
use crate::errors::{PrefabError, Result};
use crate::geometry::GeometryOptions;

/// A closed 2D polygon outline, wound in declaration order.
///
/// The closing edge from the last point back to the first is implicit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Outline {
    pub points: Vec<Vec2>,
}

impl Outline {
    #[must_use]
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// An axis-aligned rectangle centered on the origin.
    #[must_use]
    pub fn rect(width: f32, height: f32) -> Self {
        let w = width / 2.0;
        let h = height / 2.0;
        Self::new(vec![
            Vec2::new(-w, -h),
            Vec2::new(w, -h),
            Vec2::new(w, h),
            Vec2::new(-w, h),
        ])
    }

    pub fn validate(&self) -> Result<()> {
        if self.points.len() < 3 {
            return Err(PrefabError::DegenerateOutline {
                count: self.points.len(),
            });
        }
        for point in &self.points {
            if !point.is_finite() {
                return Err(PrefabError::NonFiniteField {
                    kind: "outline",
                    field: "points",
                });
            }
        }
        Ok(())
    }
}

/// Parameters for the extruded-shape factory.
///
/// The outline is the one required field; the rest tune the sweep and the
/// bevel applied along it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtrudeOptions {
    /// The 2D outline to sweep.
    pub shape: Outline,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve_segments: Option<u32>,
    /// Subdivisions along the sweep depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    /// Sweep depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bevel_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bevel_thickness: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bevel_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bevel_offset: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bevel_segments: Option<u32>,
    /// Re-center the solid on its bounding box after extrusion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_center: Option<bool>,
    #[serde(flatten)]
    pub position: Position,
    #[serde(flatten)]
    pub geometry: GeometryOptions,
}

impl ExtrudeOptions {
    #[must_use]
    pub fn new(shape: Outline) -> Self {
        Self {
            shape,
            curve_segments: None,
            steps: None,
            depth: None,
            bevel_enabled: None,
            bevel_thickness: None,
            bevel_size: None,
            bevel_offset: None,
            bevel_segments: None,
            auto_center: None,
            position: Position::default(),
            geometry: GeometryOptions::default(),
        }
    }
}

impl Config for ExtrudeOptions {
    const KIND: &'static str = "extrude";

    fn validate(&self) -> Result<()> {
        self.shape.validate()?;
        finite(Self::KIND, "depth", self.depth)?;
        finite(Self::KIND, "bevel_thickness", self.bevel_thickness)?;
        finite(Self::KIND, "bevel_size", self.bevel_size)?;
        finite(Self::KIND, "bevel_offset", self.bevel_offset)?;
        self.position.check(Self::KIND)?;
        self.geometry.check(Self::KIND)
    }
}
