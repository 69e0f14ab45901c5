//! Raw FFI surface of the native `libsm64` library.
//!
//! Declarations mirror `libsm64/src/libsm64.h` of the vendored revision.
//! Field and parameter names are kept as the C headers spell them.

#![allow(non_snake_case)]

use std::os::raw::{c_char, c_int};

pub const SM64_TEXTURE_WIDTH: u32 = 64 * 11;
pub const SM64_TEXTURE_HEIGHT: u32 = 64;
pub const SM64_GEO_MAX_TRIANGLES: u32 = 1024;
pub const SM64_MAX_HEALTH: u16 = 8;

pub type SM64DebugPrintFunctionPtr = Option<unsafe extern "C" fn(msg: *const c_char)>;
pub type SM64PlaySoundFunctionPtr = Option<unsafe extern "C" fn(soundBits: u32, pos: *mut f32)>;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct SM64Surface {
    pub type_: i16,
    pub force: i16,
    pub terrain: u16,
    pub vertices: [[i32; 3]; 3],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct SM64MarioInputs {
    pub camLookX: f32,
    pub camLookZ: f32,
    pub stickX: f32,
    pub stickY: f32,
    pub buttonA: u8,
    pub buttonB: u8,
    pub buttonZ: u8,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct SM64ObjectTransform {
    pub position: [f32; 3],
    pub eulerRotation: [f32; 3],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SM64SurfaceObject {
    pub transform: SM64ObjectTransform,
    pub surfaceCount: u32,
    pub surfaces: *mut SM64Surface,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct SM64MarioState {
    pub position: [f32; 3],
    pub velocity: [f32; 3],
    pub faceAngle: f32,
    pub health: i16,
    pub action: u32,
    pub flags: u32,
    pub particleFlags: u32,
    pub invincTimer: i16,
}

#[repr(C)]
#[derive(Debug)]
pub struct SM64MarioGeometryBuffers {
    pub position: *mut f32,
    pub normal: *mut f32,
    pub color: *mut f32,
    pub uv: *mut f32,
    pub numTrianglesUsed: u16,
}

extern "C" {
    pub fn sm64_register_debug_print_function(debugPrintFunction: SM64DebugPrintFunctionPtr);
    pub fn sm64_register_play_sound_function(playSoundFunction: SM64PlaySoundFunctionPtr);

    pub fn sm64_global_init(rom: *const u8, outTexture: *mut u8);
    pub fn sm64_global_terminate();

    pub fn sm64_audio_init(rom: *const u8);
    pub fn sm64_audio_tick(
        numQueuedSamples: u32,
        numDesiredSamples: u32,
        audio_buffer: *mut i16,
    ) -> u32;

    pub fn sm64_static_surfaces_load(surfaceArray: *const SM64Surface, numSurfaces: u32);

    pub fn sm64_mario_create(
        x: f32,
        y: f32,
        z: f32,
        rx: i16,
        ry: i16,
        rz: i16,
        unused: u32,
    ) -> i32;
    pub fn sm64_mario_tick(
        marioId: i32,
        inputs: *const SM64MarioInputs,
        outState: *mut SM64MarioState,
        outBuffers: *mut SM64MarioGeometryBuffers,
    );
    pub fn sm64_mario_delete(marioId: i32);

    pub fn sm64_set_mario_action(marioId: i32, action: u32);
    pub fn sm64_set_mario_action_arg(marioId: i32, action: u32, actionArg: u32);
    pub fn sm64_set_mario_animation(marioId: i32, animID: i32);
    pub fn sm64_set_mario_anim_frame(marioId: i32, animFrame: i16);
    pub fn sm64_set_mario_state(marioId: i32, flags: u32);
    pub fn sm64_set_mario_position(marioId: i32, x: f32, y: f32, z: f32);
    pub fn sm64_set_mario_angle(marioId: i32, x: f32, y: f32, z: f32);
    pub fn sm64_set_mario_faceangle(marioId: i32, y: f32);
    pub fn sm64_set_mario_velocity(marioId: i32, x: f32, y: f32, z: f32);
    pub fn sm64_set_mario_forward_velocity(marioId: i32, vel: f32);
    pub fn sm64_set_mario_invincibility(marioId: i32, timer: i16);
    pub fn sm64_set_mario_water_level(marioId: i32, level: c_int);
    pub fn sm64_set_mario_gas_level(marioId: i32, level: c_int);
    pub fn sm64_set_mario_health(marioId: i32, health: u16);
    pub fn sm64_mario_take_damage(
        marioId: i32,
        damage: u32,
        subtype: u32,
        x: f32,
        y: f32,
        z: f32,
    );
    pub fn sm64_mario_heal(marioId: i32, healCounter: u8);
    pub fn sm64_mario_kill(marioId: i32);
    pub fn sm64_mario_interact_cap(marioId: i32, capFlag: u32, capTime: u16, playMusic: u8);
    pub fn sm64_mario_extend_cap(marioId: i32, capTime: u16);
    pub fn sm64_mario_attack(marioId: i32, x: f32, y: f32, z: f32, hitboxHeight: f32) -> bool;

    pub fn sm64_surface_object_create(surfaceObject: *const SM64SurfaceObject) -> u32;
    pub fn sm64_surface_object_move(objectId: u32, transform: *const SM64ObjectTransform);
    pub fn sm64_surface_object_delete(objectId: u32);

    pub fn sm64_seq_player_play_sequence(player: u8, seqId: u8, arg2: u16);
    pub fn sm64_play_music(player: u8, seqArgs: u16, fadeTimer: u16);
    pub fn sm64_stop_background_music(seqId: u16);
    pub fn sm64_fadeout_background_music(arg0: u16, fadeOut: u16);
    pub fn sm64_get_current_background_music() -> u16;
    pub fn sm64_play_sound(soundBits: i32, pos: *mut f32);
    pub fn sm64_play_sound_global(soundBits: i32);
    pub fn sm64_set_sound_volume(vol: f32);
}
