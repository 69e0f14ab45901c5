//! End-to-end checks of the adapter's pure surface: the triangle builder
//! and the constant catalogue, exercised through the public API without
//! touching the native library.

use glam::{Vec2, Vec3};

use libsm64::{
    build_surfaces, ActionFlags, MarioInput, SeqId, SeqPlayer, SoundBits, SurfaceProperties,
    SurfaceType, TerrainType, AUDIO_BATCH_FRAMES, TICK_DELTA_TIME,
};

fn triangle(a: (f32, f32, f32), b: (f32, f32, f32), c: (f32, f32, f32)) -> [Vec3; 3] {
    [
        Vec3::new(a.0, a.1, a.2),
        Vec3::new(b.0, b.1, b.2),
        Vec3::new(c.0, c.1, c.2),
    ]
}

#[test]
fn unit_triangle_builds_one_scaled_record() {
    let vertices = triangle((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0));

    let surfaces = build_surfaces(&vertices, &[], 100.0);

    assert_eq!(surfaces.len(), 1);
    let record = &surfaces[0];
    assert_eq!(record.type_, SurfaceType::Default as i16);
    assert_eq!(record.terrain, TerrainType::Grass as u16);
    assert_eq!(record.force, 0);
    // First two vertices swapped for winding, then scaled into library axes.
    assert_eq!(record.vertices[0], [0, 0, -100]);
    assert_eq!(record.vertices[1], [0, 0, 0]);
    assert_eq!(record.vertices[2], [0, 100, 0]);
}

#[test]
fn out_of_range_triangles_drop_without_disturbing_neighbors() {
    let mut vertices = Vec::new();
    vertices.extend(triangle((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0)));
    // Middle triangle has one corner past the 16-bit range at scale 100.
    vertices.extend(triangle((0.0, 400.0, 0.0), (1.0, 0.0, 0.0), (0.0, 0.0, 1.0)));
    vertices.extend(triangle((2.0, 0.0, 0.0), (3.0, 0.0, 0.0), (2.0, 1.0, 0.0)));

    let properties: Vec<_> = (1..=3)
        .map(|force| SurfaceProperties {
            force,
            ..SurfaceProperties::default()
        })
        .collect();

    let surfaces = build_surfaces(&vertices, &properties, 100.0);

    let forces: Vec<i16> = surfaces.iter().map(|s| s.force).collect();
    assert_eq!(forces, [1, 3]);
}

#[test]
fn property_lists_pad_with_defaults_and_ignore_extras() {
    let mut vertices = Vec::new();
    vertices.extend(triangle((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0)));
    vertices.extend(triangle((0.0, 0.0, 0.0), (0.0, 0.0, 1.0), (0.0, 1.0, 0.0)));

    let slide = SurfaceProperties {
        surface_type: SurfaceType::VerySlippery,
        terrain_type: TerrainType::Slide,
        force: -3,
    };

    let padded = build_surfaces(&vertices, &[slide], 100.0);
    assert_eq!(padded.len(), 2);
    assert_eq!(padded[0].type_, SurfaceType::VerySlippery as i16);
    assert_eq!(padded[0].terrain, TerrainType::Slide as u16);
    assert_eq!(padded[0].force, -3);
    assert_eq!(padded[1].type_, SurfaceType::Default as i16);
    assert_eq!(padded[1].force, 0);

    let extras = build_surfaces(&vertices[..3], &[slide, slide, slide], 100.0);
    assert_eq!(extras.len(), 1);
    assert_eq!(extras[0].terrain, TerrainType::Slide as u16);
}

#[test]
fn catalogue_values_match_library_headers() {
    assert_eq!(SurfaceType::Hangable as i16, 0x0005);
    assert_eq!(SurfaceType::DeathPlane as i16, 0x000A);
    assert_eq!(SurfaceType::Ice as i16, 0x002E);
    assert_eq!(TerrainType::Spooky as u16, 0x0004);

    assert_eq!(SeqPlayer::Sfx as u8, 2);
    assert_eq!(SeqId::Count as u8, 0x23);

    assert_eq!(ActionFlags::WALKING.bits(), 0x0400_0440);
    assert_eq!(ActionFlags::WALKING.group(), ActionFlags::GROUP_MOVING.bits());

    assert_eq!(SoundBits::MENU_PAUSE.bits(), 0x7002_FF81);
    assert_eq!(SoundBits::MENU_PAUSE.bank(), 7);
}

#[test]
fn tick_and_audio_constants_line_up() {
    assert!((TICK_DELTA_TIME * 30.0 - 1.0).abs() < 1e-6);
    assert_eq!(AUDIO_BATCH_FRAMES, 544);
}

#[test]
fn mario_input_defaults_to_neutral() {
    let input = MarioInput::default();

    assert_eq!(input.stick, Vec2::ZERO);
    assert_eq!(input.cam_look, Vec2::ZERO);
    assert!(!input.button_a && !input.button_b && !input.button_z);

    let steering = MarioInput {
        stick: Vec2::new(0.0, 1.0),
        cam_look: Vec2::new(1.0, 0.0),
        button_a: true,
        ..MarioInput::default()
    };
    assert!(steering.button_a);
}
