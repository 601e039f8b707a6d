use super::macros::material_params;
use crate::common::Color;

material_params!(
    /// Point-sprite cloud.
    PointsMaterialParams, "points material",
    fields: [
        (color, Color, "Point color."),
        (size, f32, "Point size in world units."),
        (size_attenuation, bool, "Shrink points with camera distance."),
    ],
    finite: [size]
);
