use super::macros::material_params;

material_params!(
    /// Colors each fragment by its surface normal.
    ///
    /// Mostly a debugging aid; takes no color of its own.
    NormalMaterialParams, "normal material",
    fields: [
        (flat_shading, bool, "Shade each face with its geometric normal."),
        (wireframe, bool, "Draw edges only."),
    ],
    finite: []
);
