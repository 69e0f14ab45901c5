//! Conversion between engine space and library space.
//!
//! Engine space is Y-up, right-handed, floating point, radians. Library
//! space swaps the horizontal axes and negates one of them: a point maps as
//! `(x, y, z) -> (z, y, -x)`, multiplied by the scale factor going in and
//! divided coming back out. Surface vertices additionally truncate to the
//! library's integer grid.

use glam::Vec3;

/// Length of one simulation tick in seconds. The library steps at 30 Hz.
pub const TICK_DELTA_TIME: f32 = 1.0 / 30.0;

const BOUNDS: f32 = 0x7FFF as f32;

/// Scaled integer vertex for surface records.
pub fn to_library_vertex(v: Vec3, scale: f32) -> [i32; 3] {
    [
        (v.z * scale) as i32,
        (v.y * scale) as i32,
        (-v.x * scale) as i32,
    ]
}

/// Scaled float position for Mario calls.
pub fn to_library_position(v: Vec3, scale: f32) -> [f32; 3] {
    [v.z * scale, v.y * scale, -v.x * scale]
}

pub fn to_engine_position(p: [f32; 3], scale: f32) -> Vec3 {
    Vec3::new(-p[2] / scale, p[1] / scale, p[0] / scale)
}

/// Normals permute like positions but carry no scale.
pub fn to_engine_normal(p: [f32; 3]) -> Vec3 {
    Vec3::new(-p[2], p[1], p[0])
}

/// Mario rotation, engine radians to library degrees.
pub fn to_library_rotation(rotation: Vec3) -> [f32; 3] {
    [
        rotation.z.to_degrees(),
        rotation.y.to_degrees(),
        -rotation.x.to_degrees(),
    ]
}

/// Surface object rotation, engine radians to library euler degrees. The
/// library spins objects the opposite way around the mapped axes.
pub fn to_object_rotation(rotation: Vec3) -> [f32; 3] {
    [
        -rotation.z.to_degrees(),
        -rotation.y.to_degrees(),
        rotation.x.to_degrees(),
    ]
}

/// True when every component of an already-scaled vector fits the library's
/// fixed-point range.
pub fn check_in_bounds(v: Vec3) -> bool {
    v.x > -BOUNDS
        && v.x < BOUNDS
        && v.y > -BOUNDS
        && v.y < BOUNDS
        && v.z > -BOUNDS
        && v.z < BOUNDS
}

/// Swaps the first two vertices of every triangle, flipping the winding
/// order. Self-inverse. Works on any per-vertex element (positions, colors,
/// uvs).
pub fn invert_winding<T>(vertices: &mut [T]) {
    for triangle in vertices.chunks_exact_mut(3) {
        triangle.swap(0, 1);
    }
}

/// Duration in seconds to whole simulation ticks, rounded.
pub fn ticks_from_seconds(seconds: f32) -> u16 {
    (seconds / TICK_DELTA_TIME).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_round_trip_within_grid_resolution() {
        let scale = 100.0;
        let original = Vec3::new(1.25, -3.5, 2.0);

        let lib = to_library_vertex(original, scale);
        let back = to_engine_position([lib[0] as f32, lib[1] as f32, lib[2] as f32], scale);

        let tolerance = 1.0 / scale;
        assert!((back.x - original.x).abs() <= tolerance);
        assert!((back.y - original.y).abs() <= tolerance);
        assert!((back.z - original.z).abs() <= tolerance);
    }

    #[test]
    fn position_round_trip_is_exact_for_float_path() {
        let scale = 50.0;
        let original = Vec3::new(-4.0, 12.5, 0.25);

        let back = to_engine_position(to_library_position(original, scale), scale);

        assert!((back - original).abs().max_element() < 1e-5);
    }

    #[test]
    fn axis_mapping_matches_fixture() {
        assert_eq!(to_library_vertex(Vec3::new(1.0, 0.0, 0.0), 100.0), [0, 0, -100]);
        assert_eq!(to_library_vertex(Vec3::new(0.0, 1.0, 0.0), 100.0), [0, 100, 0]);
        assert_eq!(to_library_vertex(Vec3::new(0.0, 0.0, 1.0), 100.0), [100, 0, 0]);
    }

    #[test]
    fn normal_permutes_without_scale() {
        let n = to_engine_normal([0.0, 0.0, 1.0]);
        assert_eq!(n, Vec3::new(-1.0, 0.0, 0.0));
        let n = to_engine_normal([0.0, 1.0, 0.0]);
        assert_eq!(n, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn winding_inversion_is_self_inverse() {
        let original = [1, 2, 3, 4, 5, 6];
        let mut buffer = original;

        invert_winding(&mut buffer);
        assert_eq!(buffer, [2, 1, 3, 5, 4, 6]);

        invert_winding(&mut buffer);
        assert_eq!(buffer, original);
    }

    #[test]
    fn bounds_check_is_strict() {
        assert!(check_in_bounds(Vec3::new(32766.0, 0.0, 0.0)));
        assert!(!check_in_bounds(Vec3::new(32767.0, 0.0, 0.0)));
        assert!(!check_in_bounds(Vec3::new(0.0, -32767.0, 0.0)));
        assert!(!check_in_bounds(Vec3::new(0.0, 0.0, 40000.0)));
    }

    #[test]
    fn rotations_convert_to_degrees() {
        let rot = Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, -std::f32::consts::PI);

        let mario = to_library_rotation(rot);
        assert!((mario[0] - -180.0).abs() < 1e-4);
        assert!((mario[1] - 0.0).abs() < 1e-4);
        assert!((mario[2] - -90.0).abs() < 1e-4);

        let object = to_object_rotation(rot);
        assert!((object[0] - 180.0).abs() < 1e-4);
        assert!((object[1] - 0.0).abs() < 1e-4);
        assert!((object[2] - 90.0).abs() < 1e-4);
    }

    #[test]
    fn seconds_round_to_ticks() {
        assert_eq!(ticks_from_seconds(0.0), 0);
        assert_eq!(ticks_from_seconds(1.0), 30);
        assert_eq!(ticks_from_seconds(0.5), 15);
        assert_eq!(ticks_from_seconds(0.02), 1);
    }
}
