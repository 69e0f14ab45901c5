//! Safe adapter around the native `libsm64` simulation: context lifetime,
//! surface loading, Mario instances, audio and sound control, with engine
//! coordinates (Z-up style axes, meter scale) converted at every boundary.

use std::ffi::CStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::os::raw::c_char;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use glam::Vec3;
use once_cell::sync::Lazy;
use sha::sha1;
use sha::utils::{Digest, DigestExt};

mod audio;
mod convert;
mod geometry;
mod mario;
mod sound;
mod surface;

pub use audio::{AudioFrame, AUDIO_BATCH_FRAMES};
pub use convert::TICK_DELTA_TIME;
pub use geometry::{Color, MarioGeometry, MeshArrays, Point2, Point3};
pub use mario::{
    ActionFlags, Mario, MarioFlags, MarioInput, MarioState, ParticleFlags,
    INT_SUBTYPE_BIG_KNOCKBACK, INT_SUBTYPE_DELAY_INVINCIBILITY,
};
pub use sound::*;
pub use surface::{build_surfaces, SurfaceObject, SurfaceProperties, SurfaceType, TerrainType};

const EXPECTED_ROM_HASH: &str = "9bef1128717f958171a4afac3ed78ee2bb4e86ce";

/// Library units per engine unit. Mario is roughly 1.5 engine units tall at
/// this scale.
pub const DEFAULT_SCALE_FACTOR: f32 = 100.0;

// The native library is a process-wide singleton, so the context guard and
// the scale used by the sound callback live in statics.
static CONTEXT_ACTIVE: AtomicBool = AtomicBool::new(false);
static SCALE_FACTOR: AtomicU32 = AtomicU32::new(DEFAULT_SCALE_FACTOR.to_bits());

type PlaySoundHook = Box<dyn Fn(SoundBits, Vec3) + Send + Sync>;

static PLAY_SOUND_HOOK: Lazy<Mutex<Option<PlaySoundHook>>> = Lazy::new(|| Mutex::new(None));

fn current_scale_factor() -> f32 {
    f32::from_bits(SCALE_FACTOR.load(Ordering::Relaxed))
}

unsafe extern "C" fn debug_print_trampoline(msg: *const c_char) {
    if msg.is_null() {
        return;
    }
    let msg = CStr::from_ptr(msg).to_string_lossy();
    log::debug!(target: "libsm64", "{msg}");
}

unsafe extern "C" fn play_sound_trampoline(sound_bits: u32, pos: *mut f32) {
    if pos.is_null() {
        return;
    }
    let lib_pos = [*pos, *pos.add(1), *pos.add(2)];
    let position = convert::to_engine_position(lib_pos, current_scale_factor());

    let Ok(hook) = PLAY_SOUND_HOOK.lock() else {
        return;
    };
    if let Some(hook) = hook.as_ref() {
        hook(SoundBits::from_bits_retain(sound_bits), position);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Invalid Super Mario 64 rom: found hash '{0}', expected hash '9bef1128717f958171a4afac3ed78ee2bb4e86ce'")]
    InvalidRom(String),
    #[error("The native library is already initialized, only one context may exist per process")]
    AlreadyInitialized,
    #[error("Mario position is out of range, scaled coordinates must stay within the library's world bounds")]
    PositionOutOfRange,
    #[error("Invalid Mario position, ensure coordinates are above ground")]
    InvalidMarioPosition,
}

/// The initialized native library. At most one context exists per process;
/// Mario and surface object handles borrow it and are released on drop.
pub struct Sm64 {
    texture_data: Vec<u8>,
    rom_data: Vec<u8>,
}

impl Sm64 {
    /// Loads and verifies the US rom at `rom_path`, then initializes the
    /// native library and registers its callbacks.
    pub fn new<P: AsRef<Path>>(rom_path: P) -> Result<Self, Error> {
        if CONTEXT_ACTIVE.swap(true, Ordering::SeqCst) {
            return Err(Error::AlreadyInitialized);
        }

        match Self::init(rom_path.as_ref()) {
            Ok(ctx) => Ok(ctx),
            Err(err) => {
                CONTEXT_ACTIVE.store(false, Ordering::SeqCst);
                Err(err)
            }
        }
    }

    fn init(rom_path: &Path) -> Result<Self, Error> {
        let mut rom_file = BufReader::new(File::open(rom_path)?);
        let mut rom_data = Vec::new();
        rom_file.read_to_end(&mut rom_data)?;

        let rom_hash = sha1::Sha1::default().digest(&*rom_data).to_hex();

        if rom_hash != EXPECTED_ROM_HASH {
            return Err(Error::InvalidRom(rom_hash));
        }

        SCALE_FACTOR.store(DEFAULT_SCALE_FACTOR.to_bits(), Ordering::Relaxed);

        let mut texture_data =
            vec![
                0;
                (libsm64_sys::SM64_TEXTURE_WIDTH * libsm64_sys::SM64_TEXTURE_HEIGHT) as usize * 4
            ];

        unsafe {
            libsm64_sys::sm64_register_debug_print_function(Some(debug_print_trampoline));
            libsm64_sys::sm64_register_play_sound_function(Some(play_sound_trampoline));
            libsm64_sys::sm64_global_init(rom_data.as_ptr(), texture_data.as_mut_ptr());
        }

        Ok(Self {
            texture_data,
            rom_data,
        })
    }

    /// Mario's texture atlas, written by the library at init. RGBA8, mostly
    /// transparent; sample it with the uv channel of the render mesh.
    pub fn texture(&self) -> Texture<'_> {
        Texture {
            data: &*self.texture_data,
            width: libsm64_sys::SM64_TEXTURE_WIDTH,
            height: libsm64_sys::SM64_TEXTURE_HEIGHT,
        }
    }

    pub fn scale_factor(&self) -> f32 {
        current_scale_factor()
    }

    /// Library units per engine unit for every later conversion. Surfaces
    /// already loaded are not rescaled.
    pub fn set_scale_factor(&self, scale: f32) {
        SCALE_FACTOR.store(scale.to_bits(), Ordering::Relaxed);
    }

    /// Replaces the level's static collision mesh. Triangles outside the
    /// library's coordinate range after scaling are dropped.
    pub fn load_static_surfaces(&self, vertices: &[Vec3], properties: &[SurfaceProperties]) {
        let surfaces = surface::build_surfaces(vertices, properties, self.scale_factor());

        let dropped = vertices.len() / 3 - surfaces.len();
        if dropped > 0 {
            log::debug!(target: "libsm64", "dropped {dropped} out-of-range static triangles");
        }

        unsafe { libsm64_sys::sm64_static_surfaces_load(surfaces.as_ptr(), surfaces.len() as u32) }
    }

    /// Spawns a Mario at an engine-space position with the given orientation
    /// in radians. There must be static ground under the position.
    pub fn create_mario<'ctx>(
        &'ctx self,
        position: Vec3,
        rotation: Vec3,
    ) -> Result<Mario<'ctx>, Error> {
        let scale = self.scale_factor();
        if !convert::check_in_bounds(position * scale) {
            return Err(Error::PositionOutOfRange);
        }

        let p = convert::to_library_position(position, scale);
        let r = convert::to_library_rotation(rotation);

        let mario_id = unsafe {
            libsm64_sys::sm64_mario_create(
                p[0],
                p[1],
                p[2],
                r[0] as i16,
                r[1] as i16,
                r[2] as i16,
                0,
            )
        };

        if mario_id < 0 {
            Err(Error::InvalidMarioPosition)
        } else {
            Ok(Mario::new(self, mario_id))
        }
    }

    /// Registers a movable collision mesh. The triangle list is in object
    /// space; `position` and `rotation` place it in the world.
    pub fn create_surface_object<'ctx>(
        &'ctx self,
        position: Vec3,
        rotation: Vec3,
        vertices: &[Vec3],
        properties: &[SurfaceProperties],
    ) -> SurfaceObject<'ctx> {
        let scale = self.scale_factor();
        let mut surfaces = surface::build_surfaces(vertices, properties, scale);

        let dropped = vertices.len() / 3 - surfaces.len();
        if dropped > 0 {
            log::debug!(target: "libsm64", "dropped {dropped} out-of-range object triangles");
        }

        let object = libsm64_sys::SM64SurfaceObject {
            transform: surface::object_transform(position, rotation, scale),
            surfaceCount: surfaces.len() as u32,
            surfaces: surfaces.as_mut_ptr(),
        };

        let id = unsafe { libsm64_sys::sm64_surface_object_create(&object as *const _) };

        SurfaceObject::new(self, id)
    }

    /// Starts the library's audio mixer. Call once, after `new`.
    pub fn init_audio(&self) {
        unsafe { libsm64_sys::sm64_audio_init(self.rom_data.as_ptr()) }
    }

    /// Produces the next two batches of mixed stereo audio at 32 kHz, paced
    /// by how many frames the caller still has queued.
    pub fn tick_audio(&self, queued_frames: u32, desired_frames: u32) -> Vec<AudioFrame> {
        let mut buffer = [0i16; AUDIO_BATCH_FRAMES * 2 * 2];

        let batch_frames = unsafe {
            libsm64_sys::sm64_audio_tick(queued_frames, desired_frames, buffer.as_mut_ptr())
        };

        // The return value counts frames per batch and the library writes
        // two batches, interleaved left/right.
        let samples = (batch_frames as usize * 2 * 2).min(buffer.len());
        audio::frames_from_interleaved(&buffer[..samples])
    }

    pub fn play_sequence(&self, player: SeqPlayer, seq_id: SeqId, fade_in_seconds: f32) {
        let ticks = convert::ticks_from_seconds(fade_in_seconds);
        unsafe { libsm64_sys::sm64_seq_player_play_sequence(player as u8, seq_id as u8, ticks) }
    }

    /// `seq_args` is a sequence id, optionally with `SEQ_VARIATION` set.
    pub fn play_music(&self, player: SeqPlayer, seq_args: u16, fade_in_seconds: f32) {
        let ticks = convert::ticks_from_seconds(fade_in_seconds);
        unsafe { libsm64_sys::sm64_play_music(player as u8, seq_args, ticks) }
    }

    pub fn stop_background_music(&self, seq_id: SeqId) {
        unsafe { libsm64_sys::sm64_stop_background_music(seq_id as u16) }
    }

    pub fn fadeout_background_music(&self, seq_id: SeqId, fade_out_seconds: f32) {
        let ticks = convert::ticks_from_seconds(fade_out_seconds);
        unsafe { libsm64_sys::sm64_fadeout_background_music(seq_id as u16, ticks) }
    }

    pub fn current_background_music(&self) -> u16 {
        unsafe { libsm64_sys::sm64_get_current_background_music() }
    }

    /// Plays a positional sound effect at an engine-space position.
    pub fn play_sound(&self, sound: SoundBits, position: Vec3) {
        let mut p = convert::to_library_position(position, self.scale_factor());
        unsafe { libsm64_sys::sm64_play_sound(sound.bits() as i32, p.as_mut_ptr()) }
    }

    pub fn play_sound_global(&self, sound: SoundBits) {
        unsafe { libsm64_sys::sm64_play_sound_global(sound.bits() as i32) }
    }

    pub fn set_sound_volume(&self, volume: f32) {
        unsafe { libsm64_sys::sm64_set_sound_volume(volume) }
    }

    /// Installs a callback for sound effects the simulation triggers on its
    /// own, with the emitter position already converted back to engine
    /// space. Must not be replaced from inside the callback.
    pub fn set_play_sound_hook<F>(&self, hook: F)
    where
        F: Fn(SoundBits, Vec3) + Send + Sync + 'static,
    {
        if let Ok(mut slot) = PLAY_SOUND_HOOK.lock() {
            *slot = Some(Box::new(hook));
        }
    }

    pub fn clear_play_sound_hook(&self) {
        if let Ok(mut slot) = PLAY_SOUND_HOOK.lock() {
            *slot = None;
        }
    }
}

impl Drop for Sm64 {
    fn drop(&mut self) {
        unsafe {
            libsm64_sys::sm64_global_terminate();
            libsm64_sys::sm64_register_debug_print_function(None);
            libsm64_sys::sm64_register_play_sound_function(None);
        }
        if let Ok(mut slot) = PLAY_SOUND_HOOK.lock() {
            *slot = None;
        }
        CONTEXT_ACTIVE.store(false, Ordering::SeqCst);
    }
}

/// Borrowed view of the texture atlas. Valid while the context lives.
pub struct Texture<'data> {
    pub data: &'data [u8],
    pub width: u32,
    pub height: u32,
}
