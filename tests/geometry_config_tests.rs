//! Geometry Configuration Tests
//!
//! Tests for:
//! - Empty-mapping acceptance for fully optional records
//! - Required-field enforcement on ground and extrude records
//! - Validation of non-finite numbers and degenerate outlines
//! - Ground → box conversion
//! - Round-tripping records through plain JSON mappings

use glam::Vec2;
use serde_json::json;

use prefab3d::{
    BoxOptions, ColorScale, Config, CylinderOptions, ExtrudeOptions, GroundOptions,
    HeightMapOptions, Outline, Position, PrefabError, SphereOptions,
};

// ============================================================================
// Empty-Mapping Acceptance
// ============================================================================

#[test]
fn sphere_accepts_empty_mapping() {
    let sphere = SphereOptions::from_value(json!({})).unwrap();
    assert_eq!(sphere, SphereOptions::default());
    assert!(sphere.radius.is_none());
    assert!(sphere.position.x.is_none());
    assert!(sphere.geometry.mass.is_none());
}

#[test]
fn box_accepts_empty_mapping() {
    let options = BoxOptions::from_value(json!({})).unwrap();
    assert_eq!(options, BoxOptions::default());
}

#[test]
fn cylinder_accepts_empty_mapping() {
    let options = CylinderOptions::from_value(json!({})).unwrap();
    assert_eq!(options, CylinderOptions::default());
}

#[test]
fn sphere_accepts_partial_fields() {
    let sphere = SphereOptions::from_value(json!({
        "radius": 2.5,
        "width_segments": 16,
        "x": 1.0,
        "y": -4.0,
        "mass": 10.0,
        "name": "ball"
    }))
    .unwrap();

    assert_eq!(sphere.radius, Some(2.5));
    assert_eq!(sphere.width_segments, Some(16));
    assert_eq!(sphere.position.x, Some(1.0));
    assert_eq!(sphere.position.y, Some(-4.0));
    assert_eq!(sphere.geometry.mass, Some(10.0));
    assert_eq!(sphere.geometry.name.as_deref(), Some("ball"));
}

// ============================================================================
// Ground Required Fields
// ============================================================================

#[test]
fn ground_requires_height() {
    let err = GroundOptions::from_value(json!({"width": 10.0})).unwrap_err();
    let message = err.to_string();
    assert!(
        message.contains("height"),
        "error should name the missing field: {message}"
    );
}

#[test]
fn ground_requires_width() {
    let err = GroundOptions::from_value(json!({"height": 10.0})).unwrap_err();
    assert!(err.to_string().contains("width"));
}

#[test]
fn ground_accepts_footprint() {
    let ground = GroundOptions::from_value(json!({"width": 40.0, "height": 28.0})).unwrap();
    assert_eq!(ground.width, 40.0);
    assert_eq!(ground.height, 28.0);
    assert!(ground.depth.is_none());
}

#[test]
fn ground_converts_to_box() {
    let mut ground = GroundOptions::new(40.0, 28.0);
    ground.depth = Some(1.0);
    ground.position = Position::new(0.0, -0.5, 0.0);
    ground.geometry.mass = Some(0.0);

    let boxed = BoxOptions::from(ground);
    assert_eq!(boxed.dimensions.width, Some(40.0));
    assert_eq!(boxed.dimensions.height, Some(28.0));
    assert_eq!(boxed.depth, Some(1.0));
    assert_eq!(boxed.position.y, Some(-0.5));
    assert_eq!(boxed.geometry.mass, Some(0.0));
}

// ============================================================================
// Extrude Required Outline
// ============================================================================

#[test]
fn extrude_requires_shape() {
    let err = ExtrudeOptions::from_value(json!({})).unwrap_err();
    let message = err.to_string();
    assert!(
        message.contains("shape"),
        "error should name the missing field: {message}"
    );
}

#[test]
fn extrude_accepts_outline() {
    let extrude = ExtrudeOptions::from_value(json!({
        "shape": {"points": [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]},
        "depth": 2.0
    }))
    .unwrap();

    assert_eq!(extrude.shape.points.len(), 3);
    assert_eq!(extrude.shape.points[1], Vec2::new(1.0, 0.0));
    assert_eq!(extrude.depth, Some(2.0));
}

#[test]
fn extrude_rejects_degenerate_outline() {
    let err = ExtrudeOptions::from_value(json!({
        "shape": {"points": [[0.0, 0.0], [1.0, 0.0]]}
    }))
    .unwrap_err();

    assert!(matches!(err, PrefabError::DegenerateOutline { count: 2 }));
}

#[test]
fn outline_rect_is_valid() {
    let outline = Outline::rect(4.0, 2.0);
    assert_eq!(outline.points.len(), 4);
    outline.validate().unwrap();
    assert_eq!(outline.points[0], Vec2::new(-2.0, -1.0));
}

// ============================================================================
// Validation Beyond Shape
// ============================================================================

#[test]
fn sphere_rejects_non_finite_radius() {
    let sphere = SphereOptions {
        radius: Some(f32::NAN),
        ..SphereOptions::default()
    };
    let err = sphere.validate().unwrap_err();
    assert!(matches!(
        err,
        PrefabError::NonFiniteField {
            kind: "sphere",
            field: "radius"
        }
    ));
}

#[test]
fn geometry_traits_reject_infinite_mass() {
    let mut options = BoxOptions::default();
    options.geometry.mass = Some(f32::INFINITY);
    assert!(options.validate().is_err());
}

#[test]
fn height_map_rejects_single_stop_scale() {
    let options = HeightMapOptions {
        material: None,
        color_scale: Some(ColorScale::new(vec![0x11_2233.into()])),
    };
    let err = options.validate().unwrap_err();
    assert!(matches!(err, PrefabError::DegenerateColorScale { count: 1 }));
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn default_sphere_serializes_to_empty_mapping() {
    let value = SphereOptions::default().to_value().unwrap();
    assert_eq!(value, json!({}));
}

#[test]
fn sphere_round_trips() {
    let sphere = SphereOptions {
        radius: Some(3.0),
        width_segments: Some(24),
        height_segments: Some(12),
        phi_start: Some(0.0),
        phi_length: Some(std::f32::consts::PI),
        position: Position::new(1.0, 2.0, 3.0),
        ..SphereOptions::default()
    };

    let restored = SphereOptions::from_value(sphere.to_value().unwrap()).unwrap();
    assert_eq!(restored, sphere);
}

#[test]
fn box_round_trips() {
    let options = BoxOptions {
        depth: Some(2.0),
        depth_segments: Some(4),
        dimensions: prefab3d::Dimensions::new(3.0, 1.5),
        ..BoxOptions::default()
    };

    let restored = BoxOptions::from_value(options.to_value().unwrap()).unwrap();
    assert_eq!(restored, options);
}

#[test]
fn cylinder_round_trips() {
    let cylinder = CylinderOptions {
        radius_top: Some(0.0),
        radius_bottom: Some(2.0),
        height: Some(5.0),
        open_ended: Some(true),
        radius_segments: Some(32),
        ..CylinderOptions::default()
    };

    let restored = CylinderOptions::from_value(cylinder.to_value().unwrap()).unwrap();
    assert_eq!(restored, cylinder);
}

#[test]
fn ground_round_trips() {
    let mut ground = GroundOptions::new(100.0, 100.0);
    ground.geometry.friction = Some(0.8);
    ground.geometry.collision_flag = Some(1);

    let restored = GroundOptions::from_value(ground.to_value().unwrap()).unwrap();
    assert_eq!(restored, ground);
}

#[test]
fn extrude_round_trips() {
    let mut extrude = ExtrudeOptions::new(Outline::rect(2.0, 1.0));
    extrude.bevel_enabled = Some(true);
    extrude.bevel_segments = Some(3);
    extrude.auto_center = Some(true);

    let restored = ExtrudeOptions::from_value(extrude.to_value().unwrap()).unwrap();
    assert_eq!(restored, extrude);
}

#[test]
fn height_map_round_trips() {
    let options = HeightMapOptions {
        material: None,
        color_scale: Some(ColorScale::new(vec![
            0x00_4400.into(),
            0x88_7755.into(),
            0xff_ffff.into(),
        ])),
    };

    let restored = HeightMapOptions::from_value(options.to_value().unwrap()).unwrap();
    assert_eq!(restored, options);
}
