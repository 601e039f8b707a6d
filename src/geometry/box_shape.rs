use serde::{Deserialize, Serialize};

use crate::common::{Dimensions, Position};
use crate::config::{Config, finite};
use crate::errors::Result;
use crate::geometry::GeometryOptions;

/// Parameters for the box factory.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_segments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_segments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth_segments: Option<u32>,
    #[serde(flatten)]
    pub position: Position,
    #[serde(flatten)]
    pub dimensions: Dimensions,
    #[serde(flatten)]
    pub geometry: GeometryOptions,
}

impl Config for BoxOptions {
    const KIND: &'static str = "box";

    fn validate(&self) -> Result<()> {
        finite(Self::KIND, "depth", self.depth)?;
        self.position.check(Self::KIND)?;
        self.dimensions.check(Self::KIND)?;
        self.geometry.check(Self::KIND)
    }
}

/// Parameters for the ground factory: a box whose footprint is mandatory.
///
/// `width` and `height` are the only fields promoted from optional to
/// required relative to [`BoxOptions`]; everything else keeps its
/// box-optionality. The record converts losslessly into a `BoxOptions`
/// for factories that treat ground as a thin box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundOptions {
    /// Footprint extent along X.
    pub width: f32,
    /// Footprint extent along Z.
    pub height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_segments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_segments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth_segments: Option<u32>,
    #[serde(flatten)]
    pub position: Position,
    #[serde(flatten)]
    pub geometry: GeometryOptions,
}

impl GroundOptions {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            depth: None,
            width_segments: None,
            height_segments: None,
            depth_segments: None,
            position: Position::default(),
            geometry: GeometryOptions::default(),
        }
    }
}

impl Config for GroundOptions {
    const KIND: &'static str = "ground";

    fn validate(&self) -> Result<()> {
        finite(Self::KIND, "width", Some(self.width))?;
        finite(Self::KIND, "height", Some(self.height))?;
        finite(Self::KIND, "depth", self.depth)?;
        self.position.check(Self::KIND)?;
        self.geometry.check(Self::KIND)
    }
}

impl From<GroundOptions> for BoxOptions {
    fn from(ground: GroundOptions) -> Self {
        Self {
            depth: ground.depth,
            width_segments: ground.width_segments,
            height_segments: ground.height_segments,
            depth_segments: ground.depth_segments,
            position: ground.position,
            dimensions: Dimensions::new(ground.width, ground.height),
            geometry: ground.geometry,
        }
    }
}
