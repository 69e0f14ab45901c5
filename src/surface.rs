//! Collision surfaces: the type/terrain catalogue, conversion of triangle
//! soups into the library's surface records, and dynamic surface objects.

use glam::Vec3;

use libsm64_sys::{SM64ObjectTransform, SM64Surface};

use crate::convert;
use crate::Sm64;

/// Surface behavior, from the library's `surface_terrains.h`.
#[repr(i16)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum SurfaceType {
    #[default]
    Default = 0x0000, // Environment default
    Burning = 0x0001,                // Lava / Frostbite (in SL), but is used mostly for Lava
    Surface0004 = 0x0004,            // Unused, has no function and has parameters
    Hangable = 0x0005,               // Ceiling that Mario can climb on
    Slow = 0x0009,                   // Slow down Mario, unused
    DeathPlane = 0x000A,             // Death floor
    CloseCamera = 0x000B,            // Close camera
    Water = 0x000D,                  // Water, has no action, used on some waterboxes below
    FlowingWater = 0x000E,           // Water (flowing), has parameters
    Intangible = 0x0012,             // Intangible (Separates BBH mansion from merry-go-round, for room usage)
    VerySlippery = 0x0013,           // Very slippery, mostly used for slides
    Slippery = 0x0014,               // Slippery
    NotSlippery = 0x0015,            // Non-slippery, climbable
    TtmVines = 0x0016,               // TTM vines, has no action defined
    MgrMusic = 0x001A,               // Plays the Merry go round music, see handle_merry_go_round_music in bbh_merry_go_round.inc.c for more details
    InstantWarp1B = 0x001B,          // Instant warp to another area, used to warp between areas in WDW and the endless stairs to warp back
    InstantWarp1C = 0x001C,          // Instant warp to another area, used to warp between areas in WDW
    InstantWarp1D = 0x001D,          // Instant warp to another area, used to warp between areas in DDD, SSL and TTM
    InstantWarp1E = 0x001E,          // Instant warp to another area, used to warp between areas in DDD, SSL and TTM
    ShallowQuicksand = 0x0021,       // Shallow Quicksand (depth of 10 units)
    DeepQuicksand = 0x0022,          // Quicksand (lethal, slow, depth of 160 units)
    InstantQuicksand = 0x0023,       // Quicksand (lethal, instant)
    DeepMovingQuicksand = 0x0024,    // Moving quicksand (flowing, depth of 160 units)
    ShallowMovingQuicksand = 0x0025, // Moving quicksand (flowing, depth of 25 units)
    Quicksand = 0x0026,              // Moving quicksand (60 units)
    MovingQuicksand = 0x0027,        // Moving quicksand (flowing, depth of 60 units)
    WallMisc = 0x0028,               // Used for some walls, Cannon to adjust the camera, and some objects like Warp Pipe
    NoiseDefault = 0x0029,           // Default floor with noise
    NoiseSlippery = 0x002A,          // Slippery floor with noise
    HorizontalWind = 0x002C,         // Horizontal wind, has parameters
    InstantMovingQuicksand = 0x002D, // Quicksand (lethal, flowing)
    Ice = 0x002E,                    // Slippery Ice, in snow levels and THI's water floor
    LookUpWarp = 0x002F,             // Look up and warp (Wing cap entrance)
    Hard = 0x0030,                   // Hard floor (Always has fall damage)
    Warp = 0x0032,                   // Surface warp
    TimerStart = 0x0033,             // Timer start (Peach's secret slide)
    TimerEnd = 0x0034,               // Timer stop (Peach's secret slide)
    HardSlippery = 0x0035,           // Hard and slippery (Always has fall damage)
    HardVerySlippery = 0x0036,       // Hard and very slippery (Always has fall damage)
    HardNotSlippery = 0x0037,        // Hard and Non-slippery (Always has fall damage)
    VerticalWind = 0x0038,           // Death at bottom with vertical wind
    BossFightCamera = 0x0065,        // Wide camera for BOB and WF bosses
    CameraFreeRoam = 0x0066,         // Free roam camera for THI and TTC
    Thi3Wallkick = 0x0068,           // Surface where there's a wall kick section in THI 3rd area, has no action defined
    Camera8Dir = 0x0069,             // Surface that enables far camera for platforms, used in THI
    CameraMiddle = 0x006E,           // Surface camera that returns to the middle, used on the 4 pillars of SSL
    CameraRotateRight = 0x006F,      // Surface camera that rotates to the right (Bowser 1 & THI)
    CameraRotateLeft = 0x0070,       // Surface camera that rotates to the left (BOB & TTM)
    CameraBoundary = 0x0072,         // Intangible Area, only used to restrict camera movement
    NoiseVerySlippery73 = 0x0073,    // Very slippery floor with noise, unused
    NoiseVerySlippery74 = 0x0074,    // Very slippery floor with noise, unused
    NoiseVerySlippery = 0x0075,      // Very slippery floor with noise, used in CCM
    NoCamCollision = 0x0076,         // Surface with no cam collision flag
    NoCamCollision77 = 0x0077,       // Surface with no cam collision flag, unused
    NoCamColVerySlippery = 0x0078,   // Surface with no cam collision flag, very slippery with noise (THI)
    NoCamColSlippery = 0x0079,       // Surface with no cam collision flag, slippery with noise (CCM, PSS and TTM slides)
    Switch = 0x007A,                 // Surface with no cam collision flag, non-slippery with noise, used by switches and Dorrie
    VanishCapWalls = 0x007B,         // Vanish cap walls, pass through them with Vanish Cap
    PaintingWobbleA6 = 0x00A6,       // Painting wobble (BOB Left)
    PaintingWobbleA7 = 0x00A7,       // Painting wobble (BOB Middle)
    PaintingWobbleA8 = 0x00A8,       // Painting wobble (BOB Right)
    PaintingWobbleA9 = 0x00A9,       // Painting wobble (CCM Left)
    PaintingWobbleAA = 0x00AA,       // Painting wobble (CCM Middle)
    PaintingWobbleAB = 0x00AB,       // Painting wobble (CCM Right)
    PaintingWobbleAC = 0x00AC,       // Painting wobble (WF Left)
    PaintingWobbleAD = 0x00AD,       // Painting wobble (WF Middle)
    PaintingWobbleAE = 0x00AE,       // Painting wobble (WF Right)
    PaintingWobbleAF = 0x00AF,       // Painting wobble (JRB Left)
    PaintingWobbleB0 = 0x00B0,       // Painting wobble (JRB Middle)
    PaintingWobbleB1 = 0x00B1,       // Painting wobble (JRB Right)
    PaintingWobbleB2 = 0x00B2,       // Painting wobble (LLL Left)
    PaintingWobbleB3 = 0x00B3,       // Painting wobble (LLL Middle)
    PaintingWobbleB4 = 0x00B4,       // Painting wobble (LLL Right)
    PaintingWobbleB5 = 0x00B5,       // Painting wobble (SSL Left)
    PaintingWobbleB6 = 0x00B6,       // Painting wobble (SSL Middle)
    PaintingWobbleB7 = 0x00B7,       // Painting wobble (SSL Right)
    PaintingWobbleB8 = 0x00B8,       // Painting wobble (Unused - Left)
    PaintingWobbleB9 = 0x00B9,       // Painting wobble (Unused - Middle)
    PaintingWobbleBA = 0x00BA,       // Painting wobble (Unused - Right)
    PaintingWobbleBB = 0x00BB,       // Painting wobble (DDD - Left), makes the painting wobble if touched
    PaintingWobbleBC = 0x00BC,       // Painting wobble (Unused, DDD - Middle)
    PaintingWobbleBD = 0x00BD,       // Painting wobble (Unused, DDD - Right)
    PaintingWobbleBE = 0x00BE,       // Painting wobble (WDW Left)
    PaintingWobbleBF = 0x00BF,       // Painting wobble (WDW Middle)
    PaintingWobbleC0 = 0x00C0,       // Painting wobble (WDW Right)
    PaintingWobbleC1 = 0x00C1,       // Painting wobble (THI Tiny - Left)
    PaintingWobbleC2 = 0x00C2,       // Painting wobble (THI Tiny - Middle)
    PaintingWobbleC3 = 0x00C3,       // Painting wobble (THI Tiny - Right)
    PaintingWobbleC4 = 0x00C4,       // Painting wobble (TTM Left)
    PaintingWobbleC5 = 0x00C5,       // Painting wobble (TTM Middle)
    PaintingWobbleC6 = 0x00C6,       // Painting wobble (TTM Right)
    PaintingWobbleC7 = 0x00C7,       // Painting wobble (Unused, TTC - Left)
    PaintingWobbleC8 = 0x00C8,       // Painting wobble (Unused, TTC - Middle)
    PaintingWobbleC9 = 0x00C9,       // Painting wobble (Unused, TTC - Right)
    PaintingWobbleCA = 0x00CA,       // Painting wobble (Unused, SL - Left)
    PaintingWobbleCB = 0x00CB,       // Painting wobble (Unused, SL - Middle)
    PaintingWobbleCC = 0x00CC,       // Painting wobble (Unused, SL - Right)
    PaintingWobbleCD = 0x00CD,       // Painting wobble (THI Huge - Left)
    PaintingWobbleCE = 0x00CE,       // Painting wobble (THI Huge - Middle)
    PaintingWobbleCF = 0x00CF,       // Painting wobble (THI Huge - Right)
    PaintingWobbleD0 = 0x00D0,       // Painting wobble (HMC & COTMC - Left), makes the painting wobble if touched
    PaintingWobbleD1 = 0x00D1,       // Painting wobble (Unused, HMC & COTMC - Middle)
    PaintingWobbleD2 = 0x00D2,       // Painting wobble (Unused, HMC & COTMC - Right)
    PaintingWarpD3 = 0x00D3,         // Painting warp (BOB Left)
    PaintingWarpD4 = 0x00D4,         // Painting warp (BOB Middle)
    PaintingWarpD5 = 0x00D5,         // Painting warp (BOB Right)
    PaintingWarpD6 = 0x00D6,         // Painting warp (CCM Left)
    PaintingWarpD7 = 0x00D7,         // Painting warp (CCM Middle)
    PaintingWarpD8 = 0x00D8,         // Painting warp (CCM Right)
    PaintingWarpD9 = 0x00D9,         // Painting warp (WF Left)
    PaintingWarpDA = 0x00DA,         // Painting warp (WF Middle)
    PaintingWarpDB = 0x00DB,         // Painting warp (WF Right)
    PaintingWarpDC = 0x00DC,         // Painting warp (JRB Left)
    PaintingWarpDD = 0x00DD,         // Painting warp (JRB Middle)
    PaintingWarpDE = 0x00DE,         // Painting warp (JRB Right)
    PaintingWarpDF = 0x00DF,         // Painting warp (LLL Left)
    PaintingWarpE0 = 0x00E0,         // Painting warp (LLL Middle)
    PaintingWarpE1 = 0x00E1,         // Painting warp (LLL Right)
    PaintingWarpE2 = 0x00E2,         // Painting warp (SSL Left)
    PaintingWarpE3 = 0x00E3,         // Painting warp (SSL Medium)
    PaintingWarpE4 = 0x00E4,         // Painting warp (SSL Right)
    PaintingWarpE5 = 0x00E5,         // Painting warp (Unused - Left)
    PaintingWarpE6 = 0x00E6,         // Painting warp (Unused - Medium)
    PaintingWarpE7 = 0x00E7,         // Painting warp (Unused - Right)
    PaintingWarpE8 = 0x00E8,         // Painting warp (DDD - Left)
    PaintingWarpE9 = 0x00E9,         // Painting warp (DDD - Middle)
    PaintingWarpEA = 0x00EA,         // Painting warp (DDD - Right)
    PaintingWarpEB = 0x00EB,         // Painting warp (WDW Left)
    PaintingWarpEC = 0x00EC,         // Painting warp (WDW Middle)
    PaintingWarpED = 0x00ED,         // Painting warp (WDW Right)
    PaintingWarpEE = 0x00EE,         // Painting warp (THI Tiny - Left)
    PaintingWarpEF = 0x00EF,         // Painting warp (THI Tiny - Middle)
    PaintingWarpF0 = 0x00F0,         // Painting warp (THI Tiny - Right)
    PaintingWarpF1 = 0x00F1,         // Painting warp (TTM Left)
    PaintingWarpF2 = 0x00F2,         // Painting warp (TTM Middle)
    PaintingWarpF3 = 0x00F3,         // Painting warp (TTM Right)
    TtcPainting1 = 0x00F4,           // Painting warp (TTC Left)
    TtcPainting2 = 0x00F5,           // Painting warp (TTC Medium)
    TtcPainting3 = 0x00F6,           // Painting warp (TTC Right)
    PaintingWarpF7 = 0x00F7,         // Painting warp (SL Left)
    PaintingWarpF8 = 0x00F8,         // Painting warp (SL Middle)
    PaintingWarpF9 = 0x00F9,         // Painting warp (SL Right)
    PaintingWarpFA = 0x00FA,         // Painting warp (THI Tiny - Left)
    PaintingWarpFB = 0x00FB,         // Painting warp (THI Tiny - Middle)
    PaintingWarpFC = 0x00FC,         // Painting warp (THI Tiny - Right)
    WobblingWarp = 0x00FD,           // Pool warp (HMC & DDD)
    Trapdoor = 0x00FF,               // Bowser Left trapdoor, has no action defined
}

/// Footstep sound set for a surface.
#[repr(u16)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum TerrainType {
    #[default]
    Grass = 0x0000,
    Stone = 0x0001,
    Snow = 0x0002,
    Sand = 0x0003,
    Spooky = 0x0004,
    Water = 0x0005,
    Slide = 0x0006,
    Mask = 0x0007,
}

/// Per-triangle surface metadata. Defaults describe plain grass-sounding
/// ground with no push force.
#[derive(Debug, Default, Copy, Clone)]
pub struct SurfaceProperties {
    pub surface_type: SurfaceType,
    pub terrain_type: TerrainType,
    pub force: i16,
}

/// Converts an engine-space triangle list into library surface records.
///
/// `vertices` holds three corners per triangle; a trailing partial triangle
/// is ignored. `properties` pairs up with triangles by index, missing entries
/// fall back to defaults and extras are ignored. Triangles with any corner
/// outside the library's fixed-point range after scaling are dropped, so the
/// returned count can be lower than the input count; callers must pass the
/// returned length to the library, never the input triangle count.
pub fn build_surfaces(
    vertices: &[Vec3],
    properties: &[SurfaceProperties],
    scale: f32,
) -> Vec<SM64Surface> {
    let mut swapped = vertices.to_vec();
    convert::invert_winding(&mut swapped);

    let mut surfaces = Vec::with_capacity(swapped.len() / 3);
    for (triangle, corners) in swapped.chunks_exact(3).enumerate() {
        if !corners.iter().all(|v| convert::check_in_bounds(*v * scale)) {
            continue;
        }

        let props = properties.get(triangle).copied().unwrap_or_default();
        surfaces.push(SM64Surface {
            type_: props.surface_type as i16,
            force: props.force,
            terrain: props.terrain_type as u16,
            vertices: [
                convert::to_library_vertex(corners[0], scale),
                convert::to_library_vertex(corners[1], scale),
                convert::to_library_vertex(corners[2], scale),
            ],
        });
    }

    surfaces
}

pub(crate) fn object_transform(position: Vec3, rotation: Vec3, scale: f32) -> SM64ObjectTransform {
    SM64ObjectTransform {
        position: convert::to_library_position(position, scale),
        eulerRotation: convert::to_object_rotation(rotation),
    }
}

/// A dynamic collision mesh registered with the library. Deleting the handle
/// removes the mesh from the simulation.
pub struct SurfaceObject<'ctx> {
    id: u32,
    ctx: &'ctx Sm64,
}

impl<'ctx> SurfaceObject<'ctx> {
    pub(crate) fn new(ctx: &'ctx Sm64, id: u32) -> Self {
        Self { id, ctx }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Repositions the object. Loaded surface data is not rebuilt, so the
    /// same scale factor as at creation applies.
    pub fn move_to(&mut self, position: Vec3, rotation: Vec3) {
        let transform = object_transform(position, rotation, self.ctx.scale_factor());
        unsafe { libsm64_sys::sm64_surface_object_move(self.id, &transform as *const _) }
    }
}

impl<'ctx> Drop for SurfaceObject<'ctx> {
    fn drop(&mut self) {
        unsafe { libsm64_sys::sm64_surface_object_delete(self.id) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_triangle_fixture() {
        let vertices = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];

        let surfaces = build_surfaces(&vertices, &[], 100.0);

        assert_eq!(surfaces.len(), 1);
        let record = &surfaces[0];
        assert_eq!(record.type_, SurfaceType::Default as i16);
        assert_eq!(record.terrain, TerrainType::Grass as u16);
        assert_eq!(record.force, 0);
        // Winding swap puts the engine's second vertex first.
        assert_eq!(record.vertices[0], [0, 0, -100]);
        assert_eq!(record.vertices[1], [0, 0, 0]);
        assert_eq!(record.vertices[2], [0, 100, 0]);
    }

    #[test]
    fn out_of_range_triangle_is_dropped() {
        let vertices = [
            // In range.
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            // One corner blows past the fixed-point range at scale 100.
            Vec3::new(0.0, 400.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];

        let surfaces = build_surfaces(&vertices, &[], 100.0);

        assert_eq!(surfaces.len(), 1);
        assert_eq!(surfaces[0].vertices[1], [0, 0, 0]);
    }

    #[test]
    fn short_property_list_pads_with_defaults() {
        let vertices = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let properties = [SurfaceProperties {
            surface_type: SurfaceType::Ice,
            terrain_type: TerrainType::Snow,
            force: 7,
        }];

        let surfaces = build_surfaces(&vertices, &properties, 100.0);

        assert_eq!(surfaces.len(), 2);
        assert_eq!(surfaces[0].type_, SurfaceType::Ice as i16);
        assert_eq!(surfaces[0].terrain, TerrainType::Snow as u16);
        assert_eq!(surfaces[0].force, 7);
        assert_eq!(surfaces[1].type_, SurfaceType::Default as i16);
        assert_eq!(surfaces[1].terrain, TerrainType::Grass as u16);
        assert_eq!(surfaces[1].force, 0);
    }

    #[test]
    fn trailing_partial_triangle_is_ignored() {
        let vertices = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(5.0, 5.0, 5.0),
        ];

        let surfaces = build_surfaces(&vertices, &[], 100.0);

        assert_eq!(surfaces.len(), 1);
    }

    #[test]
    fn catalogue_values_match_headers() {
        assert_eq!(SurfaceType::Burning as i16, 0x0001);
        assert_eq!(SurfaceType::DeathPlane as i16, 0x000A);
        assert_eq!(SurfaceType::VanishCapWalls as i16, 0x007B);
        assert_eq!(SurfaceType::WobblingWarp as i16, 0x00FD);
        assert_eq!(SurfaceType::Trapdoor as i16, 0x00FF);
        assert_eq!(TerrainType::Spooky as u16, 0x0004);
        assert_eq!(TerrainType::Mask as u16, 0x0007);
    }

    #[test]
    fn object_transform_maps_position_and_rotation() {
        let transform = object_transform(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.0, std::f32::consts::PI, 0.0),
            100.0,
        );

        assert_eq!(transform.position, [300.0, 200.0, -100.0]);
        assert!((transform.eulerRotation[1] - -180.0).abs() < 1e-4);
    }
}
