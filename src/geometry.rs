//! Mario's per-tick triangle mesh: the fixed-capacity scratch buffers the
//! library writes into, interpolation between captured snapshots, and the
//! conversion into engine-space render arrays.

use glam::{Vec2, Vec3};

use libsm64_sys::{SM64MarioGeometryBuffers, SM64_GEO_MAX_TRIANGLES};

use crate::convert;

const VERTEX_CAPACITY: usize = SM64_GEO_MAX_TRIANGLES as usize * 3;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl From<Point3> for [f32; 3] {
    fn from(p: Point3) -> [f32; 3] {
        [p.x, p.y, p.z]
    }
}

/// One tick's worth of the library's mesh output, kept in library space
/// exactly as written. Capacity never changes; `triangles_used` says how much
/// of it is meaningful this tick.
#[derive(Clone)]
pub struct MarioGeometry {
    position: Vec<Point3>,
    normal: Vec<Point3>,
    color: Vec<Color>,
    uv: Vec<Point2>,
    triangles_used: u16,
}

impl MarioGeometry {
    pub(crate) fn new() -> Self {
        Self {
            position: vec![Point3::default(); VERTEX_CAPACITY],
            normal: vec![Point3::default(); VERTEX_CAPACITY],
            color: vec![Color::default(); VERTEX_CAPACITY],
            uv: vec![Point2::default(); VERTEX_CAPACITY],
            triangles_used: 0,
        }
    }

    pub fn triangles_used(&self) -> usize {
        self.triangles_used as usize
    }

    pub(crate) fn set_triangles_used(&mut self, count: u16) {
        self.triangles_used = count.min(SM64_GEO_MAX_TRIANGLES as u16);
    }

    pub fn positions(&self) -> &[Point3] {
        &self.position
    }

    pub fn normals(&self) -> &[Point3] {
        &self.normal
    }

    pub fn colors(&self) -> &[Color] {
        &self.color
    }

    pub fn uvs(&self) -> &[Point2] {
        &self.uv
    }

    /// Linear interpolation between two captured snapshots, written in place.
    ///
    /// Positions and normals blend per component; colors and uvs step
    /// straight to `current`. When the two snapshots disagree on triangle
    /// count (the mesh topology changed between ticks) the result truncates
    /// to the smaller count, which can pop visually. Accepted limitation.
    pub fn lerp(&mut self, last: &MarioGeometry, current: &MarioGeometry, amount: f32) {
        let count = last.triangles_used.min(current.triangles_used);
        let vertices = count as usize * 3;

        for i in 0..vertices {
            self.position[i] = lerp_point(last.position[i], current.position[i], amount);
            self.normal[i] = lerp_point(last.normal[i], current.normal[i], amount);
        }
        self.color[..vertices].copy_from_slice(&current.color[..vertices]);
        self.uv[..vertices].copy_from_slice(&current.uv[..vertices]);

        self.triangles_used = count;
    }
}

fn lerp_point(a: Point3, b: Point3, t: f32) -> Point3 {
    Point3 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
        z: a.z + (b.z - a.z) * t,
    }
}

impl<'a> From<&'a mut MarioGeometry> for SM64MarioGeometryBuffers {
    fn from(geo: &'a mut MarioGeometry) -> SM64MarioGeometryBuffers {
        SM64MarioGeometryBuffers {
            position: geo.position.as_mut_ptr() as *mut _,
            normal: geo.normal.as_mut_ptr() as *mut _,
            color: geo.color.as_mut_ptr() as *mut _,
            uv: geo.uv.as_mut_ptr() as *mut _,
            // Out parameter, the library writes the real count.
            numTrianglesUsed: 0,
        }
    }
}

/// Engine-space render arrays rebuilt from a snapshot. Buffers are sized to
/// exactly the used vertex count and resize only when that count changes, so
/// steady-state ticks reuse the allocations.
#[derive(Debug, Default, Clone)]
pub struct MeshArrays {
    position: Vec<Vec3>,
    normal: Vec<Vec3>,
    color: Vec<Color>,
    uv: Vec<Vec2>,
}

impl MeshArrays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_from(&mut self, geometry: &MarioGeometry, scale: f32) {
        let vertices = geometry.triangles_used() * 3;
        if self.position.len() != vertices {
            self.position.resize(vertices, Vec3::ZERO);
            self.normal.resize(vertices, Vec3::ZERO);
            self.color.resize(vertices, Color::default());
            self.uv.resize(vertices, Vec2::ZERO);
        }

        // Engine front faces wind the opposite way, so the first two
        // vertices of every triangle land transposed.
        for triangle in 0..geometry.triangles_used() {
            let base = triangle * 3;
            for (dst, src) in [(0usize, 1usize), (1, 0), (2, 2)] {
                let from = base + src;
                let to = base + dst;
                self.position[to] =
                    convert::to_engine_position(geometry.position[from].into(), scale);
                self.normal[to] = convert::to_engine_normal(geometry.normal[from].into());
                self.color[to] = geometry.color[from];
                self.uv[to] = Vec2::new(geometry.uv[from].x, geometry.uv[from].y);
            }
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.position
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normal
    }

    pub fn colors(&self) -> &[Color] {
        &self.color
    }

    pub fn uvs(&self) -> &[Vec2] {
        &self.uv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(triangles: u16, seed: f32) -> MarioGeometry {
        let mut geo = MarioGeometry::new();
        for i in 0..triangles as usize * 3 {
            let v = seed + i as f32;
            geo.position[i] = Point3 { x: v, y: v + 0.5, z: -v };
            geo.normal[i] = Point3 { x: 0.0, y: 1.0, z: 0.0 };
            geo.color[i] = Color { r: seed, g: 0.5, b: 0.25 };
            geo.uv[i] = Point2 { x: v, y: -v };
        }
        geo.triangles_used = triangles;
        geo
    }

    #[test]
    fn lerp_endpoints_reproduce_inputs() {
        let last = snapshot(2, 1.0);
        let current = snapshot(2, 9.0);
        let mut out = MarioGeometry::new();

        out.lerp(&last, &current, 0.0);
        assert_eq!(out.triangles_used(), 2);
        assert_eq!(out.position[..6], last.position[..6]);
        // Colors and uvs always come from the newer snapshot.
        assert_eq!(out.color[..6], current.color[..6]);
        assert_eq!(out.uv[..6], current.uv[..6]);

        out.lerp(&last, &current, 1.0);
        assert_eq!(out.position[..6], current.position[..6]);
        assert_eq!(out.normal[..6], current.normal[..6]);
    }

    #[test]
    fn lerp_truncates_to_smaller_count() {
        let last = snapshot(3, 1.0);
        let current = snapshot(1, 2.0);
        let mut out = MarioGeometry::new();

        out.lerp(&last, &current, 0.5);

        assert_eq!(out.triangles_used(), 1);
    }

    #[test]
    fn lerp_blends_midpoint() {
        let last = snapshot(1, 0.0);
        let current = snapshot(1, 10.0);
        let mut out = MarioGeometry::new();

        out.lerp(&last, &current, 0.5);

        assert!((out.position[0].x - 5.0).abs() < 1e-6);
        assert!((out.position[2].y - 7.5).abs() < 1e-6);
    }

    #[test]
    fn mesh_converts_winding_and_axes() {
        let mut geo = MarioGeometry::new();
        geo.position[0] = Point3 { x: 100.0, y: 0.0, z: 0.0 };
        geo.position[1] = Point3 { x: 0.0, y: 100.0, z: 0.0 };
        geo.position[2] = Point3 { x: 0.0, y: 0.0, z: 100.0 };
        geo.normal[0] = Point3 { x: 0.0, y: 1.0, z: 0.0 };
        geo.normal[1] = Point3 { x: 0.0, y: 1.0, z: 0.0 };
        geo.normal[2] = Point3 { x: 0.0, y: 1.0, z: 0.0 };
        geo.triangles_used = 1;

        let mut mesh = MeshArrays::new();
        mesh.update_from(&geo, 100.0);

        assert_eq!(mesh.positions().len(), 3);
        // Vertex 0 of the mesh is the snapshot's vertex 1.
        assert_eq!(mesh.positions()[0], Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(mesh.positions()[1], Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(mesh.positions()[2], Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(mesh.normals()[0], Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn mesh_resizes_only_on_count_change() {
        let mut mesh = MeshArrays::new();

        mesh.update_from(&snapshot(2, 1.0), 100.0);
        assert_eq!(mesh.positions().len(), 6);
        let capacity = mesh.position.capacity();

        mesh.update_from(&snapshot(2, 3.0), 100.0);
        assert_eq!(mesh.position.capacity(), capacity);

        mesh.update_from(&snapshot(1, 3.0), 100.0);
        assert_eq!(mesh.positions().len(), 3);
    }

    #[test]
    fn buffer_handoff_points_at_snapshot_storage() {
        let mut geo = MarioGeometry::new();
        let buffers: SM64MarioGeometryBuffers = (&mut geo).into();

        assert_eq!(buffers.position as usize, geo.position.as_ptr() as usize);
        assert_eq!(buffers.numTrianglesUsed, 0);
    }
}
