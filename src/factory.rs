//! The seam between configuration records and the host engine.

use crate::errors::Result;
use crate::geometry::{
    BoxOptions, CylinderOptions, ExtrudeOptions, GroundOptions, HeightMapOptions, SphereOptions,
};
use crate::material::MaterialConfig;

/// Implemented by the host layer that owns the renderer and the physics
/// world.
///
/// Each method takes one configuration record, reads it once, and returns
/// an opaque scene object; the records are never retained or mutated.
/// Callers run [`Config::validate`](crate::config::Config::validate) (or
/// arrive through [`Config::from_value`](crate::config::Config::from_value),
/// which does) before dispatching, so implementations may assume the
/// record is well-formed.
pub trait SceneFactory {
    /// Scene object handle produced by the host.
    type Object;
    /// Height-texture type of the host's asset layer.
    type Texture;

    fn create_sphere(
        &mut self,
        config: SphereOptions,
        material: Option<MaterialConfig>,
    ) -> Result<Self::Object>;

    fn create_box(
        &mut self,
        config: BoxOptions,
        material: Option<MaterialConfig>,
    ) -> Result<Self::Object>;

    fn create_ground(
        &mut self,
        config: GroundOptions,
        material: Option<MaterialConfig>,
    ) -> Result<Self::Object>;

    fn create_cylinder(
        &mut self,
        config: CylinderOptions,
        material: Option<MaterialConfig>,
    ) -> Result<Self::Object>;

    fn create_extruded_shape(
        &mut self,
        config: ExtrudeOptions,
        material: Option<MaterialConfig>,
    ) -> Result<Self::Object>;

    fn create_height_map_terrain(
        &mut self,
        texture: Self::Texture,
        config: HeightMapOptions,
    ) -> Result<Self::Object>;
}
