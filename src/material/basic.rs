use super::macros::material_params;
use crate::common::Color;

material_params!(
    /// Flat-colored surface, unaffected by scene lighting.
    ///
    /// The cheapest mesh family; the usual pick for debug geometry and
    /// UI-like overlays.
    BasicMaterialParams, "basic material",
    fields: [
        (color, Color, "Surface color."),
        (map, String, "Color texture, referenced by asset path or key."),
        (wireframe, bool, "Draw edges only."),
    ],
    finite: []
);
