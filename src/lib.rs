#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod camera;
pub mod common;
pub mod config;
pub mod errors;
pub mod factory;
pub mod geometry;
pub mod material;

pub use camera::{
    CameraOptions, CameraProjection, OrthographicCameraOptions, PerspectiveCameraOptions,
};
pub use common::{Color, Dimensions, Position};
pub use config::Config;
pub use errors::{PrefabError, Result};
pub use factory::SceneFactory;
pub use geometry::{
    BoxOptions, ColorScale, CylinderOptions, ExtrudeOptions, GeometryOptions, GroundOptions,
    HeightMapOptions, Outline, SphereOptions,
};
pub use material::{
    BasicMaterialParams, CustomMaterialParams, LambertMaterialParams, LineMaterialParams,
    MaterialConfig, MaterialKind, NormalMaterialParams, PhongMaterialParams, PointsMaterialParams,
    StandardMaterialParams,
};
