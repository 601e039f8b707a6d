//! Primitive geometry configuration records.
//!
//! One record per factory call, holding the construction parameters the
//! external factory reads once:
//! - [`SphereOptions`], [`BoxOptions`], [`CylinderOptions`]: parametric
//!   primitives
//! - [`GroundOptions`]: a box variant whose footprint is mandatory
//! - [`ExtrudeOptions`]: a 2D outline swept into a solid
//! - [`HeightMapOptions`]: terrain built from a height texture
//!
//! All records flatten [`GeometryOptions`], the traits every primitive
//! shares, and most flatten [`Position`](crate::common::Position) so a
//! caller can place the object inline.

mod box_shape;
mod cylinder;
mod extrude;
mod height_map;
mod sphere;

pub use box_shape::{BoxOptions, GroundOptions};
pub use cylinder::CylinderOptions;
pub use extrude::{ExtrudeOptions, Outline};
pub use height_map::{ColorScale, HeightMapOptions};
pub use sphere::SphereOptions;

use serde::{Deserialize, Serialize};

use crate::config::{Config, finite};
use crate::errors::Result;

/// Traits shared by every primitive: scene naming, mesh layout, and the
/// body parameters forwarded to the collision layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeometryOptions {
    /// Scene-object name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Friction coefficient of the body surface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friction: Option<f32>,
    /// Raw collision flag of the physics backend
    /// (`1` static, `2` kinematic, `4` ghost).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collision_flag: Option<u32>,
    /// Whether the body may fracture on impact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakable: Option<bool>,
    /// Body mass in kilograms; zero makes the body static.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass: Option<f32>,
    /// Build the mesh with an indexed vertex buffer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_indexed_buffer: Option<bool>,
}

impl GeometryOptions {
    pub(crate) fn check(&self, kind: &'static str) -> Result<()> {
        finite(kind, "friction", self.friction)?;
        finite(kind, "mass", self.mass)
    }
}

impl Config for GeometryOptions {
    const KIND: &'static str = "geometry";

    fn validate(&self) -> Result<()> {
        self.check(Self::KIND)
    }
}
