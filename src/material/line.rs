use super::macros::material_params;
use crate::common::Color;

material_params!(
    /// Solid-colored line segments.
    LineMaterialParams, "line material",
    fields: [
        (color, Color, "Line color."),
        (line_width, f32, "Line width in world units, where supported."),
    ],
    finite: [line_width]
);
