//! Music sequencing and sound effect constants, mirrored from the
//! `seq_ids.h` and `sounds.h` headers bundled with the library.

/// Sequence player channels.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SeqPlayer {
    Level = 0, // Level background music
    Env = 1,   // Misc music like the puzzle jingle
    Sfx = 2,   // Sound effects
}

/// OR into a sequence id to select the level's alternate arrangement.
pub const SEQ_VARIATION: u16 = 0x80;

/// Music sequences.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SeqId {
    SoundPlayer,              // 0x00
    EventCutsceneCollectStar, // 0x01
    MenuTitleScreen,          // 0x02
    LevelGrass,               // 0x03
    LevelInsideCastle,        // 0x04
    LevelWater,               // 0x05
    LevelHot,                 // 0x06
    LevelBossKoopa,           // 0x07
    LevelSnow,                // 0x08
    LevelSlide,               // 0x09
    LevelSpooky,              // 0x0A
    EventPiranhaPlant,        // 0x0B
    LevelUnderground,         // 0x0C
    MenuStarSelect,           // 0x0D
    EventPowerup,             // 0x0E
    EventMetalCap,            // 0x0F
    EventKoopaMessage,        // 0x10
    LevelKoopaRoad,           // 0x11
    EventHighScore,           // 0x12
    EventMerryGoRound,        // 0x13
    EventRace,                // 0x14
    EventCutsceneStarSpawn,   // 0x15
    EventBoss,                // 0x16
    EventCutsceneCollectKey,  // 0x17
    EventEndlessStairs,       // 0x18
    LevelBossKoopaFinal,      // 0x19
    EventCutsceneCredits,     // 0x1A
    EventSolvePuzzle,         // 0x1B
    EventToadMessage,         // 0x1C
    EventPeachMessage,        // 0x1D
    EventCutsceneIntro,       // 0x1E
    EventCutsceneVictory,     // 0x1F
    EventCutsceneEnding,      // 0x20
    MenuFileSelect,           // 0x21
    EventCutsceneLakitu,      // 0x22 (not in JP)
    Count,                    // 0x23
}

/// Terrain sound classes. The library derives a value in this range from the
/// floor Mario stands on and adds it to the sound id of the `TERRAIN_*`
/// entries.
#[repr(u32)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum SoundTerrain {
    #[default]
    Default = 0, // e.g. air
    Grass = 1,
    Water = 2,
    Stone = 3,
    Spooky = 4, // squeaky floor
    Snow = 5,
    Ice = 6,
    Sand = 7,
}

/* Sound banks (not the same as audio banks) */
pub const SOUND_BANK_ACTION: u32 = 0;
pub const SOUND_BANK_MOVING: u32 = 1;
pub const SOUND_BANK_VOICE: u32 = 2;
pub const SOUND_BANK_GENERAL: u32 = 3;
pub const SOUND_BANK_ENV: u32 = 4;
pub const SOUND_BANK_OBJ: u32 = 5;
pub const SOUND_BANK_AIR: u32 = 6;
pub const SOUND_BANK_MENU: u32 = 7;
pub const SOUND_BANK_GENERAL2: u32 = 8;
pub const SOUND_BANK_OBJ2: u32 = 9;
pub const SOUND_BANK_COUNT: u32 = 10;

pub const SOUND_BANKS_ALL_BITS: u32 = 0xffff;
pub const SOUND_BANKS_ALL: u32 = (1 << SOUND_BANK_COUNT) - 1;
pub const SOUND_BANKS_FOREGROUND: u32 =
    (1 << SOUND_BANK_ACTION) | (1 << SOUND_BANK_VOICE) | (1 << SOUND_BANK_MENU);
pub const SOUND_BANKS_BACKGROUND: u32 = SOUND_BANKS_ALL & !SOUND_BANKS_FOREGROUND;
pub const SOUND_BANKS_DISABLED_DURING_INTRO_CUTSCENE: u32 = (1 << SOUND_BANK_ENV)
    | (1 << SOUND_BANK_OBJ)
    | (1 << SOUND_BANK_GENERAL2)
    | (1 << SOUND_BANK_OBJ2);
pub const SOUND_BANKS_DISABLED_AFTER_CREDITS: u32 = (1 << SOUND_BANK_ACTION)
    | (1 << SOUND_BANK_MOVING)
    | (1 << SOUND_BANK_VOICE)
    | (1 << SOUND_BANK_GENERAL);

/* Audio playback bitflags */
pub const SOUND_NO_VOLUME_LOSS: u32 = 0x1000000; // No volume loss with distance
pub const SOUND_VIBRATO: u32 = 0x2000000; // Randomly alter frequency each audio frame
pub const SOUND_NO_PRIORITY_LOSS: u32 = 0x4000000; // Do not prioritize closer sounds
pub const SOUND_CONSTANT_FREQUENCY: u32 = 0x8000000; // Frequency not affected by distance or speed

/* Audio lower bitflags */
pub const SOUND_LOWER_BACKGROUND_MUSIC: u32 = 0x10; // Lower volume of background music while playing
pub const SOUND_NO_ECHO: u32 = 0x20; // Disable level reverb. Not in JP
pub const SOUND_DISCRETE: u32 = 0x80; // Every play restarts the sound; else it is continuous

/* Audio status, low nibble of the encoding */
pub const SOUND_STATUS_STOPPED: u32 = 0;
pub const SOUND_STATUS_WAITING: u32 = 1;
pub const SOUND_STATUS_PLAYING: u32 = 2;

pub const SOUNDARGS_MASK_BANK: u32 = 0xF0000000;
pub const SOUNDARGS_MASK_SOUNDID: u32 = 0x00FF0000;
pub const SOUNDARGS_MASK_PRIORITY: u32 = 0x0000FF00;
pub const SOUNDARGS_MASK_STATUS: u32 = 0x0000000F;

pub const SOUNDARGS_SHIFT_BANK: u32 = 28;
pub const SOUNDARGS_SHIFT_SOUNDID: u32 = 16;
pub const SOUNDARGS_SHIFT_PRIORITY: u32 = 8;

/// Silence.
pub const NO_SOUND: u32 = 0;

/// Packs a sound effect encoding the way the headers' `SOUND_ARG_LOAD` macro
/// does: bank in the top nibble, sound id in the second byte, priority in the
/// third, playback flags and the waiting status in the last.
pub const fn sound_arg(bank: u32, sound_id: u32, priority: u32, flags: u32) -> u32 {
    (bank << 28) | (sound_id << 16) | (priority << 8) | flags | SOUND_STATUS_WAITING
}

bitflags::bitflags! {
    /// Every named sound effect in the game, encoded with [`sound_arg`]. Names
    /// keep the headers' suffix conventions: entries used with several flag or
    /// priority sets get distinguishing suffixes, and a `_2` suffix means the
    /// same sound under a different id.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SoundBits: u32 {
        /* Terrain sounds */
        // Terrain-dependent moving sounds; a terrain value 0-7 is added to the
        // sound id before playing.
        const ACTION_TERRAIN_JUMP = sound_arg(SOUND_BANK_ACTION, 0x00, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04008081
        const ACTION_TERRAIN_LANDING = sound_arg(SOUND_BANK_ACTION, 0x08, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04088081
        const ACTION_TERRAIN_STEP = sound_arg(SOUND_BANK_ACTION, 0x10, 0x80, SOUND_VIBRATO | SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x06108081
        const ACTION_TERRAIN_BODY_HIT_GROUND = sound_arg(SOUND_BANK_ACTION, 0x18, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04188081
        const ACTION_TERRAIN_STEP_TIPTOE = sound_arg(SOUND_BANK_ACTION, 0x20, 0x80, SOUND_VIBRATO | SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x06208081
        const ACTION_TERRAIN_STUCK_IN_GROUND = sound_arg(SOUND_BANK_ACTION, 0x48, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04488081
        const ACTION_TERRAIN_HEAVY_LANDING = sound_arg(SOUND_BANK_ACTION, 0x60, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04608081

        const ACTION_METAL_JUMP = sound_arg(SOUND_BANK_ACTION, 0x28, 0x90, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04289081
        const ACTION_METAL_LANDING = sound_arg(SOUND_BANK_ACTION, 0x29, 0x90, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04299081
        const ACTION_METAL_STEP = sound_arg(SOUND_BANK_ACTION, 0x2A, 0x90, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x042A9081
        const ACTION_METAL_HEAVY_LANDING = sound_arg(SOUND_BANK_ACTION, 0x2B, 0x90, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x042B9081
        const ACTION_CLAP_HANDS_COLD = sound_arg(SOUND_BANK_ACTION, 0x2C, 0x00, SOUND_VIBRATO | SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x062C0081
        const ACTION_HANGING_STEP = sound_arg(SOUND_BANK_ACTION, 0x2D, 0xA0, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x042DA081
        const ACTION_QUICKSAND_STEP = sound_arg(SOUND_BANK_ACTION, 0x2E, 0x00, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x042E0081
        const ACTION_METAL_STEP_TIPTOE = sound_arg(SOUND_BANK_ACTION, 0x2F, 0x90, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x042F9081
        const ACTION_UNKNOWN430 = sound_arg(SOUND_BANK_ACTION, 0x30, 0xC0, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x0430C081
        const ACTION_UNKNOWN431 = sound_arg(SOUND_BANK_ACTION, 0x31, 0x60, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04316081
        const ACTION_UNKNOWN432 = sound_arg(SOUND_BANK_ACTION, 0x32, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04328081
        const ACTION_SWIM = sound_arg(SOUND_BANK_ACTION, 0x33, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04338081
        const ACTION_UNKNOWN434 = sound_arg(SOUND_BANK_ACTION, 0x34, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04348081
        const ACTION_THROW = sound_arg(SOUND_BANK_ACTION, 0x35, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04358081
        const ACTION_KEY_SWISH = sound_arg(SOUND_BANK_ACTION, 0x36, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04368081
        const ACTION_SPIN = sound_arg(SOUND_BANK_ACTION, 0x37, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04378081
        const ACTION_TWIRL = sound_arg(SOUND_BANK_ACTION, 0x38, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04388081, same sound as spin
        const ACTION_CLIMB_UP_TREE = sound_arg(SOUND_BANK_ACTION, 0x3A, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x043A8081
        const ACTION_CLIMB_DOWN_TREE = sound_arg(SOUND_BANK_ACTION, 0x3B, 0x00, 0); // 0x003B0001, unused
        const ACTION_UNK3C = sound_arg(SOUND_BANK_ACTION, 0x3C, 0x00, 0); // 0x003C0001, unused
        const ACTION_UNKNOWN43D = sound_arg(SOUND_BANK_ACTION, 0x3D, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x043D8081
        const ACTION_UNKNOWN43E = sound_arg(SOUND_BANK_ACTION, 0x3E, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x043E8081
        const ACTION_PAT_BACK = sound_arg(SOUND_BANK_ACTION, 0x3F, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x043F8081
        const ACTION_BRUSH_HAIR = sound_arg(SOUND_BANK_ACTION, 0x40, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04408081
        const ACTION_CLIMB_UP_POLE = sound_arg(SOUND_BANK_ACTION, 0x41, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04418081
        const ACTION_METAL_BONK = sound_arg(SOUND_BANK_ACTION, 0x42, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04428081
        const ACTION_UNSTUCK_FROM_GROUND = sound_arg(SOUND_BANK_ACTION, 0x43, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04438081
        const ACTION_HIT = sound_arg(SOUND_BANK_ACTION, 0x44, 0xC0, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x0444C081
        const ACTION_HIT_2 = sound_arg(SOUND_BANK_ACTION, 0x44, 0xB0, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x0444B081
        const ACTION_HIT_3 = sound_arg(SOUND_BANK_ACTION, 0x44, 0xA0, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x0444A081
        const ACTION_BONK = sound_arg(SOUND_BANK_ACTION, 0x45, 0xA0, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x0445A081
        const ACTION_SHRINK_INTO_BBH = sound_arg(SOUND_BANK_ACTION, 0x46, 0xA0, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x0446A081
        const ACTION_SWIM_FAST = sound_arg(SOUND_BANK_ACTION, 0x47, 0xA0, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x0447A081
        const ACTION_METAL_JUMP_WATER = sound_arg(SOUND_BANK_ACTION, 0x50, 0x90, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04509081
        const ACTION_METAL_LAND_WATER = sound_arg(SOUND_BANK_ACTION, 0x51, 0x90, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04519081
        const ACTION_METAL_STEP_WATER = sound_arg(SOUND_BANK_ACTION, 0x52, 0x90, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04529081
        const ACTION_UNK53 = sound_arg(SOUND_BANK_ACTION, 0x53, 0x00, 0); // 0x00530001, unused
        const ACTION_UNK54 = sound_arg(SOUND_BANK_ACTION, 0x54, 0x00, 0); // 0x00540001, unused
        const ACTION_UNK55 = sound_arg(SOUND_BANK_ACTION, 0x55, 0x00, 0); // 0x00550001, unused
        const ACTION_FLYING_FAST = sound_arg(SOUND_BANK_ACTION, 0x56, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x04568081
        const ACTION_TELEPORT = sound_arg(SOUND_BANK_ACTION, 0x57, 0xC0, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x0457C081
        const ACTION_UNKNOWN458 = sound_arg(SOUND_BANK_ACTION, 0x58, 0xA0, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x0458A081
        const ACTION_BOUNCE_OFF_OBJECT = sound_arg(SOUND_BANK_ACTION, 0x59, 0xB0, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x0459B081
        const ACTION_SIDE_FLIP_UNK = sound_arg(SOUND_BANK_ACTION, 0x5A, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x045A8081
        const ACTION_READ_SIGN = sound_arg(SOUND_BANK_ACTION, 0x5B, 0xFF, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x045BFF81
        const ACTION_UNKNOWN45C = sound_arg(SOUND_BANK_ACTION, 0x5C, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x045C8081
        const ACTION_UNK5D = sound_arg(SOUND_BANK_ACTION, 0x5D, 0x00, 0); // 0x005D0001, unused
        const ACTION_INTRO_UNK45E = sound_arg(SOUND_BANK_ACTION, 0x5E, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x045E8081
        const ACTION_INTRO_UNK45F = sound_arg(SOUND_BANK_ACTION, 0x5F, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x045F8081

        /* Moving sound effects */
        // Terrain-dependent moving sounds; a terrain value 0-7 is added to the
        // sound id before playing.
        const MOVING_TERRAIN_SLIDE = sound_arg(SOUND_BANK_MOVING, 0x00, 0x00, SOUND_NO_PRIORITY_LOSS); // 0x14000001
        const MOVING_TERRAIN_RIDING_SHELL = sound_arg(SOUND_BANK_MOVING, 0x20, 0x00, SOUND_NO_PRIORITY_LOSS); // 0x14200001

        const MOVING_LAVA_BURN = sound_arg(SOUND_BANK_MOVING, 0x10, 0x00, SOUND_NO_PRIORITY_LOSS); // 0x14100001
        const MOVING_SLIDE_DOWN_POLE = sound_arg(SOUND_BANK_MOVING, 0x11, 0x00, SOUND_NO_PRIORITY_LOSS); // 0x14110001
        const MOVING_SLIDE_DOWN_TREE = sound_arg(SOUND_BANK_MOVING, 0x12, 0x80, SOUND_NO_PRIORITY_LOSS); // 0x14128001
        const MOVING_QUICKSAND_DEATH = sound_arg(SOUND_BANK_MOVING, 0x14, 0x00, SOUND_NO_PRIORITY_LOSS); // 0x14140001
        const MOVING_SHOCKED = sound_arg(SOUND_BANK_MOVING, 0x16, 0x00, SOUND_NO_PRIORITY_LOSS); // 0x14160001
        const MOVING_FLYING = sound_arg(SOUND_BANK_MOVING, 0x17, 0x00, SOUND_NO_PRIORITY_LOSS); // 0x14170001
        const MOVING_ALMOST_DROWNING = sound_arg(SOUND_BANK_MOVING, 0x18, 0x00, SOUND_NO_PRIORITY_LOSS | SOUND_CONSTANT_FREQUENCY); // 0x1C180001
        const MOVING_AIM_CANNON = sound_arg(SOUND_BANK_MOVING, 0x19, 0x20, SOUND_NO_VOLUME_LOSS | SOUND_NO_PRIORITY_LOSS | SOUND_CONSTANT_FREQUENCY); // 0x1D192001
        const MOVING_UNK1A = sound_arg(SOUND_BANK_MOVING, 0x1A, 0x00, 0); // 0x101A0001, unused
        const MOVING_RIDING_SHELL_LAVA = sound_arg(SOUND_BANK_MOVING, 0x28, 0x00, SOUND_NO_PRIORITY_LOSS); // 0x14280001

        /* Mario sound effects */
        // A random number 0-2 is added to the sound id before playing,
        // producing Yah/Wah/Hoo.
        const MARIO_YAH_WAH_HOO = sound_arg(SOUND_BANK_VOICE, 0x00, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x24008081
        const MARIO_HOOHOO = sound_arg(SOUND_BANK_VOICE, 0x03, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x24038081
        const MARIO_YAHOO = sound_arg(SOUND_BANK_VOICE, 0x04, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x24048081
        const MARIO_UH = sound_arg(SOUND_BANK_VOICE, 0x05, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x24058081
        const MARIO_HRMM = sound_arg(SOUND_BANK_VOICE, 0x06, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x24068081
        const MARIO_WAH2 = sound_arg(SOUND_BANK_VOICE, 0x07, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x24078081
        const MARIO_WHOA = sound_arg(SOUND_BANK_VOICE, 0x08, 0xC0, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x2408C081
        const MARIO_EEUH = sound_arg(SOUND_BANK_VOICE, 0x09, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x24098081
        const MARIO_ATTACKED = sound_arg(SOUND_BANK_VOICE, 0x0A, 0xFF, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x240AFF81
        const MARIO_OOOF = sound_arg(SOUND_BANK_VOICE, 0x0B, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x240B8081
        const MARIO_OOOF2 = sound_arg(SOUND_BANK_VOICE, 0x0B, 0xD0, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x240BD081
        const MARIO_HERE_WE_GO = sound_arg(SOUND_BANK_VOICE, 0x0C, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x240C8081
        const MARIO_YAWNING = sound_arg(SOUND_BANK_VOICE, 0x0D, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x240D8081
        const MARIO_SNORING1 = sound_arg(SOUND_BANK_VOICE, 0x0E, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x240E8081
        const MARIO_SNORING2 = sound_arg(SOUND_BANK_VOICE, 0x0F, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x240F8081
        const MARIO_WAAAOOOW = sound_arg(SOUND_BANK_VOICE, 0x10, 0xC0, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x2410C081
        const MARIO_HAHA = sound_arg(SOUND_BANK_VOICE, 0x11, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x24118081
        const MARIO_HAHA_2 = sound_arg(SOUND_BANK_VOICE, 0x11, 0xF0, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x2411F081
        const MARIO_UH2 = sound_arg(SOUND_BANK_VOICE, 0x13, 0xD0, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x2413D081
        const MARIO_UH2_2 = sound_arg(SOUND_BANK_VOICE, 0x13, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x24138081
        const MARIO_ON_FIRE = sound_arg(SOUND_BANK_VOICE, 0x14, 0xA0, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x2414A081
        const MARIO_DYING = sound_arg(SOUND_BANK_VOICE, 0x15, 0xFF, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x2415FF81
        const MARIO_PANTING_COLD = sound_arg(SOUND_BANK_VOICE, 0x16, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x24168081

        // A random number 0-2 is added to the sound id before playing.
        const MARIO_PANTING = sound_arg(SOUND_BANK_VOICE, 0x18, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x24188081

        const MARIO_COUGHING1 = sound_arg(SOUND_BANK_VOICE, 0x1B, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x241B8081
        const MARIO_COUGHING2 = sound_arg(SOUND_BANK_VOICE, 0x1C, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x241C8081
        const MARIO_COUGHING3 = sound_arg(SOUND_BANK_VOICE, 0x1D, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x241D8081
        const MARIO_PUNCH_YAH = sound_arg(SOUND_BANK_VOICE, 0x1E, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x241E8081
        const MARIO_PUNCH_HOO = sound_arg(SOUND_BANK_VOICE, 0x1F, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x241F8081
        const MARIO_MAMA_MIA = sound_arg(SOUND_BANK_VOICE, 0x20, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x24208081
        const MARIO_OKEY_DOKEY = sound_arg(SOUND_BANK_VOICE, 0x21, 0x00, 0); // 0x20210001, unused
        const MARIO_GROUND_POUND_WAH = sound_arg(SOUND_BANK_VOICE, 0x22, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x24228081
        const MARIO_DROWNING = sound_arg(SOUND_BANK_VOICE, 0x23, 0xF0, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x2423F081
        const MARIO_PUNCH_WAH = sound_arg(SOUND_BANK_VOICE, 0x24, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x24248081

        /* Mario sound effects (US/EU only) */
        const PEACH_DEAR_MARIO = sound_arg(SOUND_BANK_VOICE, 0x28, 0xFF, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x2428FF81

        // A random number 0-4 is added to the sound id before playing,
        // producing one of Yahoo! (60% chance), Waha! (20%) or Yippee! (20%).
        const MARIO_YAHOO_WAHA_YIPPEE = sound_arg(SOUND_BANK_VOICE, 0x2B, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x242B8081

        const MARIO_DOH = sound_arg(SOUND_BANK_VOICE, 0x30, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x24308081
        const MARIO_GAME_OVER = sound_arg(SOUND_BANK_VOICE, 0x31, 0xFF, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x2431FF81
        const MARIO_HELLO = sound_arg(SOUND_BANK_VOICE, 0x32, 0xFF, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x2432FF81
        const MARIO_PRESS_START_TO_PLAY = sound_arg(SOUND_BANK_VOICE, 0x33, 0xFF, SOUND_NO_PRIORITY_LOSS | SOUND_NO_ECHO | SOUND_DISCRETE); // 0x2433FFA1
        const MARIO_TWIRL_BOUNCE = sound_arg(SOUND_BANK_VOICE, 0x34, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x24348081
        const MARIO_SNORING3 = sound_arg(SOUND_BANK_VOICE, 0x35, 0xFF, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x2435FF81
        const MARIO_SO_LONGA_BOWSER = sound_arg(SOUND_BANK_VOICE, 0x36, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x24368081
        const MARIO_IMA_TIRED = sound_arg(SOUND_BANK_VOICE, 0x37, 0x80, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x24378081

        /* Princess Peach sound effects (US/EU only) */
        const PEACH_MARIO = sound_arg(SOUND_BANK_VOICE, 0x38, 0xFF, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x2438FF81
        const PEACH_POWER_OF_THE_STARS = sound_arg(SOUND_BANK_VOICE, 0x39, 0xFF, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x2439FF81
        const PEACH_THANKS_TO_YOU = sound_arg(SOUND_BANK_VOICE, 0x3A, 0xFF, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x243AFF81
        const PEACH_THANK_YOU_MARIO = sound_arg(SOUND_BANK_VOICE, 0x3B, 0xFF, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x243BFF81
        const PEACH_SOMETHING_SPECIAL = sound_arg(SOUND_BANK_VOICE, 0x3C, 0xFF, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x243CFF81
        const PEACH_BAKE_A_CAKE = sound_arg(SOUND_BANK_VOICE, 0x3D, 0xFF, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x243DFF81
        const PEACH_FOR_MARIO = sound_arg(SOUND_BANK_VOICE, 0x3E, 0xFF, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x243EFF81
        const PEACH_MARIO2 = sound_arg(SOUND_BANK_VOICE, 0x3F, 0xFF, SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE); // 0x243FFF81

        /* General sound effects */
        const GENERAL_ACTIVATE_CAP_SWITCH = sound_arg(SOUND_BANK_GENERAL, 0x00, 0x80, SOUND_DISCRETE); // 0x30008081
        const GENERAL_FLAME_OUT = sound_arg(SOUND_BANK_GENERAL, 0x03, 0x80, SOUND_DISCRETE); // 0x30038081
        const GENERAL_OPEN_WOOD_DOOR = sound_arg(SOUND_BANK_GENERAL, 0x04, 0xC0, SOUND_DISCRETE); // 0x3004C081
        const GENERAL_CLOSE_WOOD_DOOR = sound_arg(SOUND_BANK_GENERAL, 0x05, 0xC0, SOUND_DISCRETE); // 0x3005C081
        const GENERAL_OPEN_IRON_DOOR = sound_arg(SOUND_BANK_GENERAL, 0x06, 0xC0, SOUND_DISCRETE); // 0x3006C081
        const GENERAL_CLOSE_IRON_DOOR = sound_arg(SOUND_BANK_GENERAL, 0x07, 0xC0, SOUND_DISCRETE); // 0x3007C081
        const GENERAL_BUBBLES = sound_arg(SOUND_BANK_GENERAL, 0x08, 0x00, 0); // 0x30080001, unused
        const GENERAL_MOVING_WATER = sound_arg(SOUND_BANK_GENERAL, 0x09, 0x00, SOUND_DISCRETE); // 0x30090081
        const GENERAL_SWISH_WATER = sound_arg(SOUND_BANK_GENERAL, 0x0A, 0x00, SOUND_DISCRETE); // 0x300A0081
        const GENERAL_QUIET_BUBBLE = sound_arg(SOUND_BANK_GENERAL, 0x0B, 0x00, SOUND_DISCRETE); // 0x300B0081
        const GENERAL_VOLCANO_EXPLOSION = sound_arg(SOUND_BANK_GENERAL, 0x0C, 0x80, SOUND_DISCRETE); // 0x300C8081
        const GENERAL_QUIET_BUBBLE2 = sound_arg(SOUND_BANK_GENERAL, 0x0D, 0x00, SOUND_DISCRETE); // 0x300D0081
        const GENERAL_CASTLE_TRAP_OPEN = sound_arg(SOUND_BANK_GENERAL, 0x0E, 0x80, SOUND_DISCRETE); // 0x300E8081
        const GENERAL_WALL_EXPLOSION = sound_arg(SOUND_BANK_GENERAL, 0x0F, 0x00, SOUND_DISCRETE); // 0x300F0081
        const GENERAL_COIN = sound_arg(SOUND_BANK_GENERAL, 0x11, 0x80, SOUND_CONSTANT_FREQUENCY | SOUND_DISCRETE); // 0x38118081
        const GENERAL_COIN_WATER = sound_arg(SOUND_BANK_GENERAL, 0x12, 0x80, SOUND_CONSTANT_FREQUENCY | SOUND_DISCRETE); // 0x38128081
        const GENERAL_SHORT_STAR = sound_arg(SOUND_BANK_GENERAL, 0x16, 0x00, SOUND_LOWER_BACKGROUND_MUSIC | SOUND_DISCRETE); // 0x30160091
        const GENERAL_BIG_CLOCK = sound_arg(SOUND_BANK_GENERAL, 0x17, 0x00, SOUND_DISCRETE); // 0x30170081
        const GENERAL_LOUD_POUND = sound_arg(SOUND_BANK_GENERAL, 0x18, 0x00, 0); // 0x30180001, unused
        const GENERAL_LOUD_POUND2 = sound_arg(SOUND_BANK_GENERAL, 0x19, 0x00, 0); // 0x30190001, unused
        const GENERAL_SHORT_POUND1 = sound_arg(SOUND_BANK_GENERAL, 0x1A, 0x00, 0); // 0x301A0001, unused
        const GENERAL_SHORT_POUND2 = sound_arg(SOUND_BANK_GENERAL, 0x1B, 0x00, 0); // 0x301B0001, unused
        const GENERAL_SHORT_POUND3 = sound_arg(SOUND_BANK_GENERAL, 0x1C, 0x00, 0); // 0x301C0001, unused
        const GENERAL_SHORT_POUND4 = sound_arg(SOUND_BANK_GENERAL, 0x1D, 0x00, 0); // 0x301D0001, unused
        const GENERAL_SHORT_POUND5 = sound_arg(SOUND_BANK_GENERAL, 0x1E, 0x00, 0); // 0x301E0001, unused
        const GENERAL_SHORT_POUND6 = sound_arg(SOUND_BANK_GENERAL, 0x1F, 0x00, 0); // 0x301F0001, unused
        const GENERAL_OPEN_CHEST = sound_arg(SOUND_BANK_GENERAL, 0x20, 0x80, SOUND_NO_VOLUME_LOSS | SOUND_DISCRETE); // 0x31208081
        const GENERAL_CLAM_SHELL1 = sound_arg(SOUND_BANK_GENERAL, 0x22, 0x80, SOUND_NO_VOLUME_LOSS | SOUND_DISCRETE); // 0x31228081
        const GENERAL_BOX_LANDING = sound_arg(SOUND_BANK_GENERAL, 0x24, 0x00, SOUND_DISCRETE); // 0x30240081
        const GENERAL_BOX_LANDING_2 = sound_arg(SOUND_BANK_GENERAL, 0x24, 0x00, SOUND_VIBRATO | SOUND_DISCRETE); // 0x32240081
        const GENERAL_UNKNOWN1 = sound_arg(SOUND_BANK_GENERAL, 0x25, 0x00, SOUND_DISCRETE); // 0x30250081
        const GENERAL_UNKNOWN1_2 = sound_arg(SOUND_BANK_GENERAL, 0x25, 0x00, SOUND_VIBRATO | SOUND_DISCRETE); // 0x32250081
        const GENERAL_CLAM_SHELL2 = sound_arg(SOUND_BANK_GENERAL, 0x26, 0x40, SOUND_DISCRETE); // 0x30264081
        const GENERAL_CLAM_SHELL3 = sound_arg(SOUND_BANK_GENERAL, 0x27, 0x40, SOUND_DISCRETE); // 0x30274081
        const GENERAL_PAINTING_EJECT = sound_arg(SOUND_BANK_GENERAL, 0x28, 0x00, SOUND_NO_VOLUME_LOSS | SOUND_CONSTANT_FREQUENCY | SOUND_DISCRETE); // 0x39280081
        const GENERAL_LEVEL_SELECT_CHANGE = sound_arg(SOUND_BANK_GENERAL, 0x2B, 0x00, SOUND_DISCRETE); // 0x302B0081
        const GENERAL_PLATFORM = sound_arg(SOUND_BANK_GENERAL, 0x2D, 0x80, SOUND_DISCRETE); // 0x302D8081
        const GENERAL_DONUT_PLATFORM_EXPLOSION = sound_arg(SOUND_BANK_GENERAL, 0x2E, 0x20, SOUND_DISCRETE); // 0x302E2081
        const GENERAL_BOWSER_BOMB_EXPLOSION = sound_arg(SOUND_BANK_GENERAL, 0x2F, 0x00, SOUND_NO_VOLUME_LOSS | SOUND_DISCRETE); // 0x312F0081
        const GENERAL_COIN_SPURT = sound_arg(SOUND_BANK_GENERAL, 0x30, 0x00, SOUND_CONSTANT_FREQUENCY | SOUND_DISCRETE); // 0x38300081
        const GENERAL_EXPLOSION6 = sound_arg(SOUND_BANK_GENERAL, 0x31, 0x00, 0); // 0x30310001, unused
        const GENERAL_UNK32 = sound_arg(SOUND_BANK_GENERAL, 0x32, 0x00, 0); // 0x30320001, unused
        const GENERAL_BOAT_TILT1 = sound_arg(SOUND_BANK_GENERAL, 0x34, 0x40, SOUND_DISCRETE); // 0x30344081
        const GENERAL_BOAT_TILT2 = sound_arg(SOUND_BANK_GENERAL, 0x35, 0x40, SOUND_DISCRETE); // 0x30354081
        const GENERAL_COIN_DROP = sound_arg(SOUND_BANK_GENERAL, 0x36, 0x40, SOUND_DISCRETE); // 0x30364081
        const GENERAL_UNKNOWN3 = sound_arg(SOUND_BANK_GENERAL, 0x37, 0x80, SOUND_CONSTANT_FREQUENCY | SOUND_DISCRETE); // 0x38378081
        const GENERAL_PENDULUM_SWING = sound_arg(SOUND_BANK_GENERAL, 0x38, 0x00, SOUND_DISCRETE); // 0x30380081
        const GENERAL_CHAIN_CHOMP1 = sound_arg(SOUND_BANK_GENERAL, 0x39, 0x00, SOUND_DISCRETE); // 0x30390081
        const GENERAL_CHAIN_CHOMP2 = sound_arg(SOUND_BANK_GENERAL, 0x3A, 0x00, SOUND_DISCRETE); // 0x303A0081
        const GENERAL_DOOR_TURN_KEY = sound_arg(SOUND_BANK_GENERAL, 0x3B, 0x00, SOUND_DISCRETE); // 0x303B0081
        const GENERAL_MOVING_IN_SAND = sound_arg(SOUND_BANK_GENERAL, 0x3C, 0x00, SOUND_DISCRETE); // 0x303C0081
        const GENERAL_UNKNOWN4_LOWPRIO = sound_arg(SOUND_BANK_GENERAL, 0x3D, 0x00, SOUND_DISCRETE); // 0x303D0081
        const GENERAL_UNKNOWN4 = sound_arg(SOUND_BANK_GENERAL, 0x3D, 0x80, SOUND_DISCRETE); // 0x303D8081
        const GENERAL_MOVING_PLATFORM_SWITCH = sound_arg(SOUND_BANK_GENERAL, 0x3E, 0x00, SOUND_DISCRETE); // 0x303E0081
        const GENERAL_CAGE_OPEN = sound_arg(SOUND_BANK_GENERAL, 0x3F, 0xA0, SOUND_DISCRETE); // 0x303FA081
        const GENERAL_QUIET_POUND1_LOWPRIO = sound_arg(SOUND_BANK_GENERAL, 0x40, 0x00, SOUND_DISCRETE); // 0x30400081
        const GENERAL_QUIET_POUND1 = sound_arg(SOUND_BANK_GENERAL, 0x40, 0x40, SOUND_DISCRETE); // 0x30404081
        const GENERAL_BREAK_BOX = sound_arg(SOUND_BANK_GENERAL, 0x41, 0xC0, SOUND_DISCRETE); // 0x3041C081
        const GENERAL_DOOR_INSERT_KEY = sound_arg(SOUND_BANK_GENERAL, 0x42, 0x00, SOUND_DISCRETE); // 0x30420081
        const GENERAL_QUIET_POUND2 = sound_arg(SOUND_BANK_GENERAL, 0x43, 0x00, SOUND_DISCRETE); // 0x30430081
        const GENERAL_BIG_POUND = sound_arg(SOUND_BANK_GENERAL, 0x44, 0x00, SOUND_DISCRETE); // 0x30440081
        const GENERAL_UNK45 = sound_arg(SOUND_BANK_GENERAL, 0x45, 0x00, SOUND_DISCRETE); // 0x30450081
        const GENERAL_UNK46 = sound_arg(SOUND_BANK_GENERAL, 0x46, 0x80, SOUND_DISCRETE); // 0x30468081
        const GENERAL_CANNON_UP = sound_arg(SOUND_BANK_GENERAL, 0x47, 0x80, SOUND_DISCRETE); // 0x30478081
        const GENERAL_GRINDEL_ROLL = sound_arg(SOUND_BANK_GENERAL, 0x48, 0x00, SOUND_DISCRETE); // 0x30480081
        const GENERAL_EXPLOSION7 = sound_arg(SOUND_BANK_GENERAL, 0x49, 0x00, 0); // 0x30490001, unused
        const GENERAL_SHAKE_COFFIN = sound_arg(SOUND_BANK_GENERAL, 0x4A, 0x00, 0); // 0x304A0001, unused
        const GENERAL_RACE_GUN_SHOT = sound_arg(SOUND_BANK_GENERAL, 0x4D, 0x40, SOUND_NO_VOLUME_LOSS | SOUND_DISCRETE); // 0x314D4081
        const GENERAL_STAR_DOOR_OPEN = sound_arg(SOUND_BANK_GENERAL, 0x4E, 0xC0, SOUND_DISCRETE); // 0x304EC081
        const GENERAL_STAR_DOOR_CLOSE = sound_arg(SOUND_BANK_GENERAL, 0x4F, 0xC0, SOUND_DISCRETE); // 0x304FC081
        const GENERAL_POUND_ROCK = sound_arg(SOUND_BANK_GENERAL, 0x56, 0x00, SOUND_DISCRETE); // 0x30560081
        const GENERAL_STAR_APPEARS = sound_arg(SOUND_BANK_GENERAL, 0x57, 0xFF, SOUND_LOWER_BACKGROUND_MUSIC | SOUND_DISCRETE); // 0x3057FF91
        const GENERAL_COLLECT_1UP = sound_arg(SOUND_BANK_GENERAL, 0x58, 0xFF, SOUND_DISCRETE); // 0x3058FF81
        const GENERAL_BUTTON_PRESS_LOWPRIO = sound_arg(SOUND_BANK_GENERAL, 0x5A, 0x00, SOUND_DISCRETE); // 0x305A0081
        const GENERAL_BUTTON_PRESS = sound_arg(SOUND_BANK_GENERAL, 0x5A, 0x40, SOUND_DISCRETE); // 0x305A4081
        const GENERAL_BUTTON_PRESS_2_LOWPRIO = sound_arg(SOUND_BANK_GENERAL, 0x5A, 0x00, SOUND_NO_VOLUME_LOSS | SOUND_DISCRETE); // 0x315A0081
        const GENERAL_BUTTON_PRESS_2 = sound_arg(SOUND_BANK_GENERAL, 0x5A, 0x40, SOUND_NO_VOLUME_LOSS | SOUND_DISCRETE); // 0x315A4081
        const GENERAL_ELEVATOR_MOVE = sound_arg(SOUND_BANK_GENERAL, 0x5B, 0x00, SOUND_DISCRETE); // 0x305B0081
        const GENERAL_ELEVATOR_MOVE_2 = sound_arg(SOUND_BANK_GENERAL, 0x5B, 0x00, SOUND_NO_VOLUME_LOSS | SOUND_DISCRETE); // 0x315B0081
        const GENERAL_SWISH_AIR = sound_arg(SOUND_BANK_GENERAL, 0x5C, 0x00, SOUND_DISCRETE); // 0x305C0081
        const GENERAL_SWISH_AIR_2 = sound_arg(SOUND_BANK_GENERAL, 0x5C, 0x00, SOUND_NO_VOLUME_LOSS | SOUND_DISCRETE); // 0x315C0081
        const GENERAL_HAUNTED_CHAIR = sound_arg(SOUND_BANK_GENERAL, 0x5D, 0x00, SOUND_DISCRETE); // 0x305D0081
        const GENERAL_SOFT_LANDING = sound_arg(SOUND_BANK_GENERAL, 0x5E, 0x00, SOUND_DISCRETE); // 0x305E0081
        const GENERAL_HAUNTED_CHAIR_MOVE = sound_arg(SOUND_BANK_GENERAL, 0x5F, 0x00, SOUND_DISCRETE); // 0x305F0081
        const GENERAL_BOWSER_PLATFORM = sound_arg(SOUND_BANK_GENERAL, 0x62, 0x80, SOUND_DISCRETE); // 0x30628081
        const GENERAL_BOWSER_PLATFORM_2 = sound_arg(SOUND_BANK_GENERAL, 0x62, 0x80, SOUND_NO_VOLUME_LOSS | SOUND_DISCRETE); // 0x31628081
        const GENERAL_HEART_SPIN = sound_arg(SOUND_BANK_GENERAL, 0x64, 0xC0, SOUND_DISCRETE); // 0x3064C081
        const GENERAL_POUND_WOOD_POST = sound_arg(SOUND_BANK_GENERAL, 0x65, 0xC0, SOUND_DISCRETE); // 0x3065C081
        const GENERAL_WATER_LEVEL_TRIG = sound_arg(SOUND_BANK_GENERAL, 0x66, 0x80, SOUND_DISCRETE); // 0x30668081
        const GENERAL_SWITCH_DOOR_OPEN = sound_arg(SOUND_BANK_GENERAL, 0x67, 0xA0, SOUND_DISCRETE); // 0x3067A081
        const GENERAL_RED_COIN = sound_arg(SOUND_BANK_GENERAL, 0x68, 0x90, SOUND_DISCRETE); // 0x30689081
        const GENERAL_BIRDS_FLY_AWAY = sound_arg(SOUND_BANK_GENERAL, 0x69, 0x00, SOUND_DISCRETE); // 0x30690081
        const GENERAL_METAL_POUND = sound_arg(SOUND_BANK_GENERAL, 0x6B, 0x80, SOUND_DISCRETE); // 0x306B8081
        const GENERAL_BOING1 = sound_arg(SOUND_BANK_GENERAL, 0x6C, 0x40, SOUND_DISCRETE); // 0x306C4081
        const GENERAL_BOING2_LOWPRIO = sound_arg(SOUND_BANK_GENERAL, 0x6D, 0x20, SOUND_DISCRETE); // 0x306D2081
        const GENERAL_BOING2 = sound_arg(SOUND_BANK_GENERAL, 0x6D, 0x40, SOUND_DISCRETE); // 0x306D4081
        const GENERAL_YOSHI_WALK = sound_arg(SOUND_BANK_GENERAL, 0x6E, 0x20, SOUND_DISCRETE); // 0x306E2081
        const GENERAL_ENEMY_ALERT1 = sound_arg(SOUND_BANK_GENERAL, 0x6F, 0x30, SOUND_DISCRETE); // 0x306F3081
        const GENERAL_YOSHI_TALK = sound_arg(SOUND_BANK_GENERAL, 0x70, 0x30, SOUND_DISCRETE); // 0x30703081
        const GENERAL_SPLATTERING = sound_arg(SOUND_BANK_GENERAL, 0x71, 0x30, SOUND_DISCRETE); // 0x30713081
        const GENERAL_BOING3 = sound_arg(SOUND_BANK_GENERAL, 0x72, 0x00, 0); // 0x30720001, unused
        const GENERAL_GRAND_STAR = sound_arg(SOUND_BANK_GENERAL, 0x73, 0x00, SOUND_DISCRETE); // 0x30730081
        const GENERAL_GRAND_STAR_JUMP = sound_arg(SOUND_BANK_GENERAL, 0x74, 0x00, SOUND_DISCRETE); // 0x30740081
        const GENERAL_BOAT_ROCK = sound_arg(SOUND_BANK_GENERAL, 0x75, 0x00, SOUND_DISCRETE); // 0x30750081
        const GENERAL_VANISH_SFX = sound_arg(SOUND_BANK_GENERAL, 0x76, 0x20, SOUND_DISCRETE); // 0x30762081

        /* Environment sound effects */
        const ENV_WATERFALL1 = sound_arg(SOUND_BANK_ENV, 0x00, 0x00, 0); // 0x40000001
        const ENV_WATERFALL2 = sound_arg(SOUND_BANK_ENV, 0x01, 0x00, 0); // 0x40010001
        const ENV_ELEVATOR1 = sound_arg(SOUND_BANK_ENV, 0x02, 0x00, 0); // 0x40020001
        const ENV_DRONING1 = sound_arg(SOUND_BANK_ENV, 0x03, 0x00, SOUND_NO_VOLUME_LOSS); // 0x41030001
        const ENV_DRONING2 = sound_arg(SOUND_BANK_ENV, 0x04, 0x00, 0); // 0x40040001
        const ENV_WIND1 = sound_arg(SOUND_BANK_ENV, 0x05, 0x00, 0); // 0x40050001
        const ENV_MOVING_SAND_SNOW = sound_arg(SOUND_BANK_ENV, 0x06, 0x00, 0); // 0x40060001, unused
        const ENV_UNK07 = sound_arg(SOUND_BANK_ENV, 0x07, 0x00, 0); // 0x40070001, unused
        const ENV_ELEVATOR2 = sound_arg(SOUND_BANK_ENV, 0x08, 0x00, 0); // 0x40080001
        const ENV_WATER = sound_arg(SOUND_BANK_ENV, 0x09, 0x00, 0); // 0x40090001
        const ENV_UNKNOWN2 = sound_arg(SOUND_BANK_ENV, 0x0A, 0x00, 0); // 0x400A0001
        const ENV_BOAT_ROCKING1 = sound_arg(SOUND_BANK_ENV, 0x0B, 0x00, 0); // 0x400B0001
        const ENV_ELEVATOR3 = sound_arg(SOUND_BANK_ENV, 0x0C, 0x00, 0); // 0x400C0001
        const ENV_ELEVATOR4 = sound_arg(SOUND_BANK_ENV, 0x0D, 0x00, 0); // 0x400D0001
        const ENV_ELEVATOR4_2 = sound_arg(SOUND_BANK_ENV, 0x0D, 0x00, SOUND_NO_VOLUME_LOSS); // 0x410D0001
        const ENV_MOVINGSAND = sound_arg(SOUND_BANK_ENV, 0x0E, 0x00, 0); // 0x400E0001
        const ENV_MERRY_GO_ROUND_CREAKING = sound_arg(SOUND_BANK_ENV, 0x0F, 0x40, 0); // 0x400F4001
        const ENV_WIND2 = sound_arg(SOUND_BANK_ENV, 0x10, 0x80, 0); // 0x40108001
        const ENV_UNK12 = sound_arg(SOUND_BANK_ENV, 0x12, 0x00, 0); // 0x40120001, unused
        const ENV_SLIDING = sound_arg(SOUND_BANK_ENV, 0x13, 0x00, 0); // 0x40130001
        const ENV_STAR = sound_arg(SOUND_BANK_ENV, 0x14, 0x00, SOUND_LOWER_BACKGROUND_MUSIC); // 0x40140011
        const ENV_MOVING_BIG_PLATFORM = sound_arg(SOUND_BANK_ENV, 0x15, 0x00, SOUND_NO_VOLUME_LOSS); // 0x41150001
        const ENV_WATER_DRAIN = sound_arg(SOUND_BANK_ENV, 0x16, 0x00, SOUND_NO_VOLUME_LOSS); // 0x41160001
        const ENV_METAL_BOX_PUSH = sound_arg(SOUND_BANK_ENV, 0x17, 0x80, 0); // 0x40178001
        const ENV_SINK_QUICKSAND = sound_arg(SOUND_BANK_ENV, 0x18, 0x80, 0); // 0x40188001

        /* Object sound effects */
        const OBJ_SUSHI_SHARK_WATER_SOUND = sound_arg(SOUND_BANK_OBJ, 0x00, 0x80, SOUND_DISCRETE); // 0x50008081
        const OBJ_MRI_SHOOT = sound_arg(SOUND_BANK_OBJ, 0x01, 0x00, SOUND_DISCRETE); // 0x50010081
        const OBJ_BABY_PENGUIN_WALK = sound_arg(SOUND_BANK_OBJ, 0x02, 0x00, SOUND_DISCRETE); // 0x50020081
        const OBJ_BOWSER_WALK = sound_arg(SOUND_BANK_OBJ, 0x03, 0x00, SOUND_DISCRETE); // 0x50030081
        const OBJ_BOWSER_TAIL_PICKUP = sound_arg(SOUND_BANK_OBJ, 0x05, 0x00, SOUND_DISCRETE); // 0x50050081
        const OBJ_BOWSER_DEFEATED = sound_arg(SOUND_BANK_OBJ, 0x06, 0x00, SOUND_DISCRETE); // 0x50060081
        const OBJ_BOWSER_SPINNING = sound_arg(SOUND_BANK_OBJ, 0x07, 0x00, SOUND_DISCRETE); // 0x50070081
        const OBJ_BOWSER_INHALING = sound_arg(SOUND_BANK_OBJ, 0x08, 0x00, SOUND_DISCRETE); // 0x50080081
        const OBJ_BIG_PENGUIN_WALK = sound_arg(SOUND_BANK_OBJ, 0x09, 0x80, SOUND_DISCRETE); // 0x50098081
        const OBJ_BOO_BOUNCE_TOP = sound_arg(SOUND_BANK_OBJ, 0x0A, 0x00, SOUND_DISCRETE); // 0x500A0081
        const OBJ_BOO_LAUGH_SHORT = sound_arg(SOUND_BANK_OBJ, 0x0B, 0x00, SOUND_DISCRETE); // 0x500B0081
        const OBJ_THWOMP = sound_arg(SOUND_BANK_OBJ, 0x0C, 0xA0, SOUND_DISCRETE); // 0x500CA081
        const OBJ_CANNON1 = sound_arg(SOUND_BANK_OBJ, 0x0D, 0xF0, SOUND_DISCRETE); // 0x500DF081
        const OBJ_CANNON2 = sound_arg(SOUND_BANK_OBJ, 0x0E, 0xF0, SOUND_DISCRETE); // 0x500EF081
        const OBJ_CANNON3 = sound_arg(SOUND_BANK_OBJ, 0x0F, 0xF0, SOUND_DISCRETE); // 0x500FF081
        const OBJ_JUMP_WALK_WATER = sound_arg(SOUND_BANK_OBJ, 0x12, 0x00, 0); // 0x50120001, unused
        const OBJ_UNKNOWN2 = sound_arg(SOUND_BANK_OBJ, 0x13, 0x00, SOUND_DISCRETE); // 0x50130081
        const OBJ_MRI_DEATH = sound_arg(SOUND_BANK_OBJ, 0x14, 0x00, SOUND_DISCRETE); // 0x50140081
        const OBJ_POUNDING1 = sound_arg(SOUND_BANK_OBJ, 0x15, 0x50, SOUND_DISCRETE); // 0x50155081
        const OBJ_POUNDING1_HIGHPRIO = sound_arg(SOUND_BANK_OBJ, 0x15, 0x80, SOUND_DISCRETE); // 0x50158081
        const OBJ_WHOMP = sound_arg(SOUND_BANK_OBJ, 0x16, 0x60, SOUND_DISCRETE); // 0x50166081
        const OBJ_KING_BOBOMB = sound_arg(SOUND_BANK_OBJ, 0x16, 0x80, SOUND_DISCRETE); // 0x50168081
        const OBJ_BULLY_METAL = sound_arg(SOUND_BANK_OBJ, 0x17, 0x80, SOUND_DISCRETE); // 0x50178081
        const OBJ_BULLY_EXPLODE = sound_arg(SOUND_BANK_OBJ, 0x18, 0xA0, SOUND_DISCRETE); // 0x5018A081
        const OBJ_BULLY_EXPLODE_2 = sound_arg(SOUND_BANK_OBJ, 0x18, 0xA0, SOUND_NO_VOLUME_LOSS | SOUND_DISCRETE); // 0x5118A081
        const OBJ_POUNDING_CANNON = sound_arg(SOUND_BANK_OBJ, 0x1A, 0x50, SOUND_DISCRETE); // 0x501A5081
        const OBJ_BULLY_WALK = sound_arg(SOUND_BANK_OBJ, 0x1B, 0x30, SOUND_DISCRETE); // 0x501B3081
        const OBJ_UNKNOWN3 = sound_arg(SOUND_BANK_OBJ, 0x1D, 0x80, SOUND_DISCRETE); // 0x501D8081
        const OBJ_UNKNOWN4 = sound_arg(SOUND_BANK_OBJ, 0x1E, 0xA0, SOUND_DISCRETE); // 0x501EA081
        const OBJ_BABY_PENGUIN_DIVE = sound_arg(SOUND_BANK_OBJ, 0x1F, 0x40, SOUND_DISCRETE); // 0x501F4081
        const OBJ_GOOMBA_WALK = sound_arg(SOUND_BANK_OBJ, 0x20, 0x00, SOUND_DISCRETE); // 0x50200081
        const OBJ_UKIKI_CHATTER_LONG = sound_arg(SOUND_BANK_OBJ, 0x21, 0x00, SOUND_DISCRETE); // 0x50210081
        const OBJ_MONTY_MOLE_ATTACK = sound_arg(SOUND_BANK_OBJ, 0x22, 0x00, SOUND_DISCRETE); // 0x50220081
        const OBJ_EVIL_LAKITU_THROW = sound_arg(SOUND_BANK_OBJ, 0x22, 0x20, SOUND_DISCRETE); // 0x50222081
        const OBJ_UNK23 = sound_arg(SOUND_BANK_OBJ, 0x23, 0x00, 0); // 0x50230001, unused
        const OBJ_DYING_ENEMY1 = sound_arg(SOUND_BANK_OBJ, 0x24, 0x40, SOUND_DISCRETE); // 0x50244081
        const OBJ_CANNON4 = sound_arg(SOUND_BANK_OBJ, 0x25, 0x40, SOUND_DISCRETE); // 0x50254081
        const OBJ_DYING_ENEMY2 = sound_arg(SOUND_BANK_OBJ, 0x26, 0x00, 0); // 0x50260001, unused
        const OBJ_BOBOMB_WALK = sound_arg(SOUND_BANK_OBJ, 0x27, 0x00, SOUND_DISCRETE); // 0x50270081
        const OBJ_SOMETHING_LANDING = sound_arg(SOUND_BANK_OBJ, 0x28, 0x80, SOUND_DISCRETE); // 0x50288081
        const OBJ_DIVING_IN_WATER = sound_arg(SOUND_BANK_OBJ, 0x29, 0xA0, SOUND_DISCRETE); // 0x5029A081
        const OBJ_SNOW_SAND1 = sound_arg(SOUND_BANK_OBJ, 0x2A, 0x00, SOUND_DISCRETE); // 0x502A0081
        const OBJ_SNOW_SAND2 = sound_arg(SOUND_BANK_OBJ, 0x2B, 0x00, SOUND_DISCRETE); // 0x502B0081
        const OBJ_DEFAULT_DEATH = sound_arg(SOUND_BANK_OBJ, 0x2C, 0x80, SOUND_DISCRETE); // 0x502C8081
        const OBJ_BIG_PENGUIN_YELL = sound_arg(SOUND_BANK_OBJ, 0x2D, 0x00, SOUND_DISCRETE); // 0x502D0081
        const OBJ_WATER_BOMB_BOUNCING = sound_arg(SOUND_BANK_OBJ, 0x2E, 0x80, SOUND_DISCRETE); // 0x502E8081
        const OBJ_GOOMBA_ALERT = sound_arg(SOUND_BANK_OBJ, 0x2F, 0x00, SOUND_DISCRETE); // 0x502F0081
        const OBJ_WIGGLER_JUMP = sound_arg(SOUND_BANK_OBJ, 0x2F, 0x60, SOUND_DISCRETE); // 0x502F6081
        const OBJ_STOMPED = sound_arg(SOUND_BANK_OBJ, 0x30, 0x80, SOUND_DISCRETE); // 0x50308081
        const OBJ_UNKNOWN6 = sound_arg(SOUND_BANK_OBJ, 0x31, 0x00, SOUND_DISCRETE); // 0x50310081
        const OBJ_DIVING_INTO_WATER = sound_arg(SOUND_BANK_OBJ, 0x32, 0x40, SOUND_DISCRETE); // 0x50324081
        const OBJ_PIRANHA_PLANT_SHRINK = sound_arg(SOUND_BANK_OBJ, 0x33, 0x40, SOUND_DISCRETE); // 0x50334081
        const OBJ_KOOPA_THE_QUICK_WALK = sound_arg(SOUND_BANK_OBJ, 0x34, 0x20, SOUND_DISCRETE); // 0x50342081
        const OBJ_KOOPA_WALK = sound_arg(SOUND_BANK_OBJ, 0x35, 0x00, SOUND_DISCRETE); // 0x50350081
        const OBJ_BULLY_WALKING = sound_arg(SOUND_BANK_OBJ, 0x36, 0x60, SOUND_DISCRETE); // 0x50366081
        const OBJ_DORRIE = sound_arg(SOUND_BANK_OBJ, 0x37, 0x60, SOUND_DISCRETE); // 0x50376081
        const OBJ_BOWSER_LAUGH = sound_arg(SOUND_BANK_OBJ, 0x38, 0x80, SOUND_DISCRETE); // 0x50388081
        const OBJ_UKIKI_CHATTER_SHORT = sound_arg(SOUND_BANK_OBJ, 0x39, 0x00, SOUND_DISCRETE); // 0x50390081
        const OBJ_UKIKI_CHATTER_IDLE = sound_arg(SOUND_BANK_OBJ, 0x3A, 0x00, SOUND_DISCRETE); // 0x503A0081
        const OBJ_UKIKI_STEP_DEFAULT = sound_arg(SOUND_BANK_OBJ, 0x3B, 0x00, SOUND_DISCRETE); // 0x503B0081
        const OBJ_UKIKI_STEP_LEAVES = sound_arg(SOUND_BANK_OBJ, 0x3C, 0x00, SOUND_DISCRETE); // 0x503C0081
        const OBJ_KOOPA_TALK = sound_arg(SOUND_BANK_OBJ, 0x3D, 0xA0, SOUND_DISCRETE); // 0x503DA081
        const OBJ_KOOPA_DAMAGE = sound_arg(SOUND_BANK_OBJ, 0x3E, 0xA0, SOUND_DISCRETE); // 0x503EA081
        const OBJ_KLEPTO1 = sound_arg(SOUND_BANK_OBJ, 0x3F, 0x40, SOUND_DISCRETE); // 0x503F4081
        const OBJ_KLEPTO2 = sound_arg(SOUND_BANK_OBJ, 0x40, 0x60, SOUND_DISCRETE); // 0x50406081
        const OBJ_KING_BOBOMB_TALK = sound_arg(SOUND_BANK_OBJ, 0x41, 0x00, SOUND_DISCRETE); // 0x50410081
        const OBJ_KING_BOBOMB_JUMP = sound_arg(SOUND_BANK_OBJ, 0x46, 0x80, SOUND_DISCRETE); // 0x50468081
        const OBJ_KING_WHOMP_DEATH = sound_arg(SOUND_BANK_OBJ, 0x47, 0xC0, SOUND_NO_VOLUME_LOSS | SOUND_DISCRETE); // 0x5147C081
        const OBJ_BOO_LAUGH_LONG = sound_arg(SOUND_BANK_OBJ, 0x48, 0x00, SOUND_DISCRETE); // 0x50480081
        const OBJ_EEL = sound_arg(SOUND_BANK_OBJ, 0x4A, 0x00, SOUND_DISCRETE); // 0x504A0081
        const OBJ_EEL_2 = sound_arg(SOUND_BANK_OBJ, 0x4A, 0x00, SOUND_VIBRATO | SOUND_DISCRETE); // 0x524A0081
        const OBJ_EYEROK_SHOW_EYE = sound_arg(SOUND_BANK_OBJ, 0x4B, 0x00, SOUND_VIBRATO | SOUND_DISCRETE); // 0x524B0081
        const OBJ_MR_BLIZZARD_ALERT = sound_arg(SOUND_BANK_OBJ, 0x4C, 0x00, SOUND_DISCRETE); // 0x504C0081
        const OBJ_SNUFIT_SHOOT = sound_arg(SOUND_BANK_OBJ, 0x4D, 0x00, SOUND_DISCRETE); // 0x504D0081
        const OBJ_SKEETER_WALK = sound_arg(SOUND_BANK_OBJ, 0x4E, 0x00, SOUND_DISCRETE); // 0x504E0081
        const OBJ_WALKING_WATER = sound_arg(SOUND_BANK_OBJ, 0x4F, 0x00, SOUND_DISCRETE); // 0x504F0081
        const OBJ_BIRD_CHIRP3 = sound_arg(SOUND_BANK_OBJ, 0x51, 0x40, 0); // 0x50514001
        const OBJ_PIRANHA_PLANT_APPEAR = sound_arg(SOUND_BANK_OBJ, 0x54, 0x20, SOUND_DISCRETE); // 0x50542081
        const OBJ_FLAME_BLOWN = sound_arg(SOUND_BANK_OBJ, 0x55, 0x80, SOUND_DISCRETE); // 0x50558081
        const OBJ_MAD_PIANO_CHOMPING = sound_arg(SOUND_BANK_OBJ, 0x56, 0x40, SOUND_VIBRATO | SOUND_DISCRETE); // 0x52564081
        const OBJ_BOBOMB_BUDDY_TALK = sound_arg(SOUND_BANK_OBJ, 0x58, 0x40, SOUND_DISCRETE); // 0x50584081
        const OBJ_SPINY_UNK59 = sound_arg(SOUND_BANK_OBJ, 0x59, 0x10, SOUND_DISCRETE); // 0x50591081
        const OBJ_WIGGLER_HIGH_PITCH = sound_arg(SOUND_BANK_OBJ, 0x5C, 0x40, SOUND_DISCRETE); // 0x505C4081
        const OBJ_HEAVEHO_TOSSED = sound_arg(SOUND_BANK_OBJ, 0x5D, 0x40, SOUND_DISCRETE); // 0x505D4081
        const OBJ_WIGGLER_DEATH = sound_arg(SOUND_BANK_OBJ, 0x5E, 0x00, 0); // 0x505E0001, unused
        const OBJ_BOWSER_INTRO_LAUGH = sound_arg(SOUND_BANK_OBJ, 0x5F, 0x80, SOUND_LOWER_BACKGROUND_MUSIC | SOUND_DISCRETE); // 0x505F8091
        const OBJ_ENEMY_DEATH_HIGH = sound_arg(SOUND_BANK_OBJ, 0x60, 0xB0, SOUND_DISCRETE); // 0x5060B081
        const OBJ_ENEMY_DEATH_LOW = sound_arg(SOUND_BANK_OBJ, 0x61, 0xB0, SOUND_DISCRETE); // 0x5061B081
        const OBJ_SWOOP_DEATH = sound_arg(SOUND_BANK_OBJ, 0x62, 0xB0, SOUND_DISCRETE); // 0x5062B081
        const OBJ_KOOPA_FLYGUY_DEATH = sound_arg(SOUND_BANK_OBJ, 0x63, 0xB0, SOUND_DISCRETE); // 0x5063B081
        const OBJ_POKEY_DEATH = sound_arg(SOUND_BANK_OBJ, 0x63, 0xC0, SOUND_DISCRETE); // 0x5063C081
        const OBJ_SNOWMAN_BOUNCE = sound_arg(SOUND_BANK_OBJ, 0x64, 0xC0, SOUND_DISCRETE); // 0x5064C081
        const OBJ_SNOWMAN_EXPLODE = sound_arg(SOUND_BANK_OBJ, 0x65, 0xD0, SOUND_DISCRETE); // 0x5065D081
        const OBJ_POUNDING_LOUD = sound_arg(SOUND_BANK_OBJ, 0x68, 0x40, SOUND_DISCRETE); // 0x50684081
        const OBJ_MIPS_RABBIT = sound_arg(SOUND_BANK_OBJ, 0x6A, 0x00, SOUND_DISCRETE); // 0x506A0081
        const OBJ_MIPS_RABBIT_WATER = sound_arg(SOUND_BANK_OBJ, 0x6C, 0x00, SOUND_DISCRETE); // 0x506C0081
        const OBJ_EYEROK_EXPLODE = sound_arg(SOUND_BANK_OBJ, 0x6D, 0x00, SOUND_DISCRETE); // 0x506D0081
        const OBJ_CHUCKYA_DEATH = sound_arg(SOUND_BANK_OBJ, 0x6E, 0x00, SOUND_NO_VOLUME_LOSS | SOUND_DISCRETE); // 0x516E0081
        const OBJ_WIGGLER_TALK = sound_arg(SOUND_BANK_OBJ, 0x6F, 0x00, SOUND_DISCRETE); // 0x506F0081
        const OBJ_WIGGLER_ATTACKED = sound_arg(SOUND_BANK_OBJ, 0x70, 0x60, SOUND_DISCRETE); // 0x50706081
        const OBJ_WIGGLER_LOW_PITCH = sound_arg(SOUND_BANK_OBJ, 0x71, 0x20, SOUND_DISCRETE); // 0x50712081
        const OBJ_SNUFIT_SKEETER_DEATH = sound_arg(SOUND_BANK_OBJ, 0x72, 0xC0, SOUND_DISCRETE); // 0x5072C081
        const OBJ_BUBBA_CHOMP = sound_arg(SOUND_BANK_OBJ, 0x73, 0x40, SOUND_DISCRETE); // 0x50734081
        const OBJ_ENEMY_DEFEAT_SHRINK = sound_arg(SOUND_BANK_OBJ, 0x74, 0x40, SOUND_DISCRETE); // 0x50744081

        /* Air sound effects */
        const AIR_BOWSER_SPIT_FIRE = sound_arg(SOUND_BANK_AIR, 0x00, 0x00, 0); // 0x60000001
        const AIR_UNK01 = sound_arg(SOUND_BANK_AIR, 0x01, 0x00, 0); // 0x60010001, unused
        const AIR_LAKITU_FLY = sound_arg(SOUND_BANK_AIR, 0x02, 0x80, 0); // 0x60028001
        const AIR_LAKITU_FLY_HIGHPRIO = sound_arg(SOUND_BANK_AIR, 0x02, 0xFF, 0); // 0x6002FF01
        const AIR_AMP_BUZZ = sound_arg(SOUND_BANK_AIR, 0x03, 0x40, 0); // 0x60034001
        const AIR_BLOW_FIRE = sound_arg(SOUND_BANK_AIR, 0x04, 0x80, 0); // 0x60048001
        const AIR_BLOW_WIND = sound_arg(SOUND_BANK_AIR, 0x04, 0x40, 0); // 0x60044001
        const AIR_ROUGH_SLIDE = sound_arg(SOUND_BANK_AIR, 0x05, 0x00, 0); // 0x60050001
        const AIR_HEAVEHO_MOVE = sound_arg(SOUND_BANK_AIR, 0x06, 0x40, 0); // 0x60064001
        const AIR_UNK07 = sound_arg(SOUND_BANK_AIR, 0x07, 0x00, 0); // 0x60070001, unused
        const AIR_BOBOMB_LIT_FUSE = sound_arg(SOUND_BANK_AIR, 0x08, 0x60, 0); // 0x60086001
        const AIR_HOWLING_WIND = sound_arg(SOUND_BANK_AIR, 0x09, 0x80, 0); // 0x60098001
        const AIR_CHUCKYA_MOVE = sound_arg(SOUND_BANK_AIR, 0x0A, 0x40, 0); // 0x600A4001
        const AIR_PEACH_TWINKLE = sound_arg(SOUND_BANK_AIR, 0x0B, 0x40, 0); // 0x600B4001
        const AIR_CASTLE_OUTDOORS_AMBIENT = sound_arg(SOUND_BANK_AIR, 0x10, 0x40, 0); // 0x60104001

        /* Menu sound effects */
        const MENU_CHANGE_SELECT = sound_arg(SOUND_BANK_MENU, 0x00, 0xF8, SOUND_DISCRETE); // 0x7000F881
        const MENU_REVERSE_PAUSE = sound_arg(SOUND_BANK_MENU, 0x01, 0x00, 0); // 0x70010001, unused
        const MENU_PAUSE = sound_arg(SOUND_BANK_MENU, 0x02, 0xFF, SOUND_DISCRETE); // 0x7002FF81
        const MENU_PAUSE_2 = sound_arg(SOUND_BANK_MENU, 0x03, 0xFF, SOUND_DISCRETE); // 0x7003FF81
        const MENU_MESSAGE_APPEAR = sound_arg(SOUND_BANK_MENU, 0x04, 0x00, SOUND_DISCRETE); // 0x70040081
        const MENU_MESSAGE_DISAPPEAR = sound_arg(SOUND_BANK_MENU, 0x05, 0x00, SOUND_DISCRETE); // 0x70050081
        const MENU_CAMERA_ZOOM_IN = sound_arg(SOUND_BANK_MENU, 0x06, 0x00, SOUND_DISCRETE); // 0x70060081
        const MENU_CAMERA_ZOOM_OUT = sound_arg(SOUND_BANK_MENU, 0x07, 0x00, SOUND_DISCRETE); // 0x70070081
        const MENU_PINCH_MARIO_FACE = sound_arg(SOUND_BANK_MENU, 0x08, 0x00, SOUND_DISCRETE); // 0x70080081
        const MENU_LET_GO_MARIO_FACE = sound_arg(SOUND_BANK_MENU, 0x09, 0x00, SOUND_DISCRETE); // 0x70090081
        const MENU_HAND_APPEAR = sound_arg(SOUND_BANK_MENU, 0x0A, 0x00, SOUND_DISCRETE); // 0x700A0081
        const MENU_HAND_DISAPPEAR = sound_arg(SOUND_BANK_MENU, 0x0B, 0x00, SOUND_DISCRETE); // 0x700B0081
        const MENU_UNK0C = sound_arg(SOUND_BANK_MENU, 0x0C, 0x00, SOUND_DISCRETE); // 0x700C0081
        const MENU_POWER_METER = sound_arg(SOUND_BANK_MENU, 0x0D, 0x00, SOUND_DISCRETE); // 0x700D0081
        const MENU_CAMERA_BUZZ = sound_arg(SOUND_BANK_MENU, 0x0E, 0x00, SOUND_DISCRETE); // 0x700E0081
        const MENU_CAMERA_TURN = sound_arg(SOUND_BANK_MENU, 0x0F, 0x00, SOUND_DISCRETE); // 0x700F0081
        const MENU_UNK10 = sound_arg(SOUND_BANK_MENU, 0x10, 0x00, 0); // 0x70100001, unused
        const MENU_CLICK_FILE_SELECT = sound_arg(SOUND_BANK_MENU, 0x11, 0x00, SOUND_DISCRETE); // 0x70110081
        const MENU_MESSAGE_NEXT_PAGE = sound_arg(SOUND_BANK_MENU, 0x13, 0x00, SOUND_DISCRETE); // 0x70130081
        const MENU_COIN_ITS_A_ME_MARIO = sound_arg(SOUND_BANK_MENU, 0x14, 0x00, SOUND_DISCRETE); // 0x70140081
        const MENU_YOSHI_GAIN_LIVES = sound_arg(SOUND_BANK_MENU, 0x15, 0x00, SOUND_DISCRETE); // 0x70150081
        const MENU_ENTER_PIPE = sound_arg(SOUND_BANK_MENU, 0x16, 0xA0, SOUND_DISCRETE); // 0x7016A081
        const MENU_EXIT_PIPE = sound_arg(SOUND_BANK_MENU, 0x17, 0xA0, SOUND_DISCRETE); // 0x7017A081
        const MENU_BOWSER_LAUGH = sound_arg(SOUND_BANK_MENU, 0x18, 0x80, SOUND_DISCRETE); // 0x70188081
        const MENU_ENTER_HOLE = sound_arg(SOUND_BANK_MENU, 0x19, 0x80, SOUND_NO_VOLUME_LOSS | SOUND_DISCRETE); // 0x71198081
        const MENU_CLICK_CHANGE_VIEW = sound_arg(SOUND_BANK_MENU, 0x1A, 0x80, SOUND_DISCRETE); // 0x701A8081
        const MENU_CAMERA_UNUSED1 = sound_arg(SOUND_BANK_MENU, 0x1B, 0x00, 0); // 0x701B0001, unused
        const MENU_CAMERA_UNUSED2 = sound_arg(SOUND_BANK_MENU, 0x1C, 0x00, 0); // 0x701C0001, unused
        const MENU_MARIO_CASTLE_WARP = sound_arg(SOUND_BANK_MENU, 0x1D, 0xB0, SOUND_DISCRETE); // 0x701DB081
        const MENU_STAR_SOUND = sound_arg(SOUND_BANK_MENU, 0x1E, 0xFF, SOUND_DISCRETE); // 0x701EFF81
        const MENU_THANK_YOU_PLAYING_MY_GAME = sound_arg(SOUND_BANK_MENU, 0x1F, 0xFF, SOUND_DISCRETE); // 0x701FFF81
        const MENU_READ_A_SIGN = sound_arg(SOUND_BANK_MENU, 0x20, 0x00, 0); // 0x70200001, unused
        const MENU_EXIT_A_SIGN = sound_arg(SOUND_BANK_MENU, 0x21, 0x00, 0); // 0x70210001, unused
        const MENU_MARIO_CASTLE_WARP2 = sound_arg(SOUND_BANK_MENU, 0x22, 0x20, SOUND_DISCRETE); // 0x70222081
        const MENU_STAR_SOUND_OKEY_DOKEY = sound_arg(SOUND_BANK_MENU, 0x23, 0xFF, SOUND_DISCRETE); // 0x7023FF81
        const MENU_STAR_SOUND_LETS_A_GO = sound_arg(SOUND_BANK_MENU, 0x24, 0xFF, SOUND_DISCRETE); // 0x7024FF81

        // US/EU only; an index 0-7 or 0-4 is added to the sound id before
        // playing, producing the same sound at different pitches.
        const MENU_COLLECT_RED_COIN = sound_arg(SOUND_BANK_MENU, 0x28, 0x90, SOUND_CONSTANT_FREQUENCY | SOUND_DISCRETE); // 0x78289081
        const MENU_COLLECT_SECRET = sound_arg(SOUND_BANK_MENU, 0x30, 0x20, SOUND_DISCRETE); // 0x70302081

        // Channel 8 loads sounds from the same place as channel 3, making it
        // possible to play two channel 3 sounds at once.
        const GENERAL2_BOBOMB_EXPLOSION = sound_arg(SOUND_BANK_GENERAL2, 0x2E, 0x20, SOUND_DISCRETE); // 0x802E2081
        const GENERAL2_PURPLE_SWITCH = sound_arg(SOUND_BANK_GENERAL2, 0x3E, 0xC0, SOUND_DISCRETE); // 0x803EC081
        const GENERAL2_ROTATING_BLOCK_CLICK = sound_arg(SOUND_BANK_GENERAL2, 0x40, 0x00, SOUND_DISCRETE); // 0x80400081
        const GENERAL2_SPINDEL_ROLL = sound_arg(SOUND_BANK_GENERAL2, 0x48, 0x20, SOUND_DISCRETE); // 0x80482081
        const GENERAL2_PYRAMID_TOP_SPIN = sound_arg(SOUND_BANK_GENERAL2, 0x4B, 0xE0, SOUND_NO_VOLUME_LOSS | SOUND_DISCRETE); // 0x814BE081
        const GENERAL2_PYRAMID_TOP_EXPLOSION = sound_arg(SOUND_BANK_GENERAL2, 0x4C, 0xF0, SOUND_NO_VOLUME_LOSS | SOUND_DISCRETE); // 0x814CF081
        const GENERAL2_BIRD_CHIRP2 = sound_arg(SOUND_BANK_GENERAL2, 0x50, 0x40, 0); // 0x80504001
        const GENERAL2_SWITCH_TICK_FAST = sound_arg(SOUND_BANK_GENERAL2, 0x54, 0xF0, SOUND_LOWER_BACKGROUND_MUSIC); // 0x8054F011
        const GENERAL2_SWITCH_TICK_SLOW = sound_arg(SOUND_BANK_GENERAL2, 0x55, 0xF0, SOUND_LOWER_BACKGROUND_MUSIC); // 0x8055F011
        const GENERAL2_STAR_APPEARS = sound_arg(SOUND_BANK_GENERAL2, 0x57, 0xFF, SOUND_LOWER_BACKGROUND_MUSIC | SOUND_DISCRETE); // 0x8057FF91
        const GENERAL2_ROTATING_BLOCK_ALERT = sound_arg(SOUND_BANK_GENERAL2, 0x59, 0x00, SOUND_DISCRETE); // 0x80590081
        const GENERAL2_BOWSER_EXPLODE = sound_arg(SOUND_BANK_GENERAL2, 0x60, 0x00, SOUND_DISCRETE); // 0x80600081
        const GENERAL2_BOWSER_KEY = sound_arg(SOUND_BANK_GENERAL2, 0x61, 0x00, SOUND_DISCRETE); // 0x80610081
        const GENERAL2_1UP_APPEAR = sound_arg(SOUND_BANK_GENERAL2, 0x63, 0xD0, SOUND_DISCRETE); // 0x8063D081
        const GENERAL2_RIGHT_ANSWER = sound_arg(SOUND_BANK_GENERAL2, 0x6A, 0xA0, SOUND_DISCRETE); // 0x806AA081

        // Channel 9 loads sounds from the same place as channel 5.
        const OBJ2_BOWSER_ROAR = sound_arg(SOUND_BANK_OBJ2, 0x04, 0x00, SOUND_DISCRETE); // 0x90040081
        const OBJ2_PIRANHA_PLANT_BITE = sound_arg(SOUND_BANK_OBJ2, 0x10, 0x50, SOUND_DISCRETE); // 0x90105081
        const OBJ2_PIRANHA_PLANT_DYING = sound_arg(SOUND_BANK_OBJ2, 0x11, 0x60, SOUND_DISCRETE); // 0x90116081
        const OBJ2_BOWSER_PUZZLE_PIECE_MOVE = sound_arg(SOUND_BANK_OBJ2, 0x19, 0x20, SOUND_DISCRETE); // 0x90192081
        const OBJ2_BULLY_ATTACKED = sound_arg(SOUND_BANK_OBJ2, 0x1C, 0x00, SOUND_DISCRETE); // 0x901C0081
        const OBJ2_KING_BOBOMB_DAMAGE = sound_arg(SOUND_BANK_OBJ2, 0x42, 0x40, SOUND_NO_VOLUME_LOSS | SOUND_DISCRETE); // 0x91424081
        const OBJ2_SCUTTLEBUG_WALK = sound_arg(SOUND_BANK_OBJ2, 0x43, 0x40, SOUND_DISCRETE); // 0x90434081
        const OBJ2_SCUTTLEBUG_ALERT = sound_arg(SOUND_BANK_OBJ2, 0x44, 0x40, SOUND_DISCRETE); // 0x90444081
        const OBJ2_BABY_PENGUIN_YELL = sound_arg(SOUND_BANK_OBJ2, 0x45, 0x00, SOUND_DISCRETE); // 0x90450081
        const OBJ2_SWOOP = sound_arg(SOUND_BANK_OBJ2, 0x49, 0x00, SOUND_DISCRETE); // 0x90490081
        const OBJ2_BIRD_CHIRP1 = sound_arg(SOUND_BANK_OBJ2, 0x52, 0x40, 0); // 0x90524001
        const OBJ2_LARGE_BULLY_ATTACKED = sound_arg(SOUND_BANK_OBJ2, 0x57, 0x00, SOUND_DISCRETE); // 0x90570081
        const OBJ2_EYEROK_SOUND_SHORT = sound_arg(SOUND_BANK_OBJ2, 0x5A, 0x00, SOUND_NO_VOLUME_LOSS | SOUND_VIBRATO | SOUND_DISCRETE); // 0x935A0081
        const OBJ2_WHOMP_SOUND_SHORT = sound_arg(SOUND_BANK_OBJ2, 0x5A, 0xC0, SOUND_NO_VOLUME_LOSS | SOUND_VIBRATO | SOUND_DISCRETE); // 0x935AC081
        const OBJ2_EYEROK_SOUND_LONG = sound_arg(SOUND_BANK_OBJ2, 0x5B, 0x00, SOUND_VIBRATO | SOUND_DISCRETE); // 0x925B0081
        const OBJ2_BOWSER_TELEPORT = sound_arg(SOUND_BANK_OBJ2, 0x66, 0x80, SOUND_DISCRETE); // 0x90668081
        const OBJ2_MONTY_MOLE_APPEAR = sound_arg(SOUND_BANK_OBJ2, 0x67, 0x80, SOUND_DISCRETE); // 0x90678081
        const OBJ2_BOSS_DIALOG_GRUNT = sound_arg(SOUND_BANK_OBJ2, 0x69, 0x40, SOUND_DISCRETE); // 0x90694081
        const OBJ2_MRI_SPINNING = sound_arg(SOUND_BANK_OBJ2, 0x6B, 0x00, SOUND_DISCRETE); // 0x906B0081
    }
}

impl SoundBits {
    /// Sound bank, the top nibble of the encoding.
    pub const fn bank(self) -> u32 {
        (self.bits() & SOUNDARGS_MASK_BANK) >> SOUNDARGS_SHIFT_BANK
    }

    /// Sound id within the bank.
    pub const fn sound_id(self) -> u32 {
        (self.bits() & SOUNDARGS_MASK_SOUNDID) >> SOUNDARGS_SHIFT_SOUNDID
    }

    pub const fn priority(self) -> u32 {
        (self.bits() & SOUNDARGS_MASK_PRIORITY) >> SOUNDARGS_SHIFT_PRIORITY
    }

    /// Applies the terrain addend to one of the `*_TERRAIN_*` entries.
    pub const fn with_terrain(self, terrain: SoundTerrain) -> SoundBits {
        SoundBits::from_bits_retain(self.bits() + ((terrain as u32) << SOUNDARGS_SHIFT_SOUNDID))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoder_packs_fields() {
        assert_eq!(
            sound_arg(
                SOUND_BANK_ACTION,
                0x00,
                0x80,
                SOUND_NO_PRIORITY_LOSS | SOUND_DISCRETE
            ),
            0x0400_8081
        );
        assert_eq!(sound_arg(SOUND_BANK_MENU, 0x02, 0xFF, SOUND_DISCRETE), 0x7002_FF81);
        assert_eq!(
            sound_arg(
                SOUND_BANK_GENERAL,
                0x11,
                0x80,
                SOUND_CONSTANT_FREQUENCY | SOUND_DISCRETE
            ),
            0x3811_8081
        );
    }

    #[test]
    fn catalogue_matches_header_encodings() {
        assert_eq!(SoundBits::ACTION_TERRAIN_JUMP.bits(), 0x0400_8081);
        assert_eq!(SoundBits::MARIO_YAHOO.bits(), 0x2404_8081);
        assert_eq!(SoundBits::PEACH_DEAR_MARIO.bits(), 0x2428_FF81);
        assert_eq!(SoundBits::ENV_STAR.bits(), 0x4014_0011);
        assert_eq!(SoundBits::OBJ_THWOMP.bits(), 0x500C_A081);
        assert_eq!(SoundBits::AIR_AMP_BUZZ.bits(), 0x6003_4001);
        assert_eq!(SoundBits::MENU_PAUSE.bits(), 0x7002_FF81);
        assert_eq!(SoundBits::GENERAL2_STAR_APPEARS.bits(), 0x8057_FF91);
        assert_eq!(SoundBits::OBJ2_KING_BOBOMB_DAMAGE.bits(), 0x9142_4081);
    }

    #[test]
    fn field_accessors_unpack() {
        let pipe = SoundBits::MENU_ENTER_PIPE;
        assert_eq!(pipe.bank(), SOUND_BANK_MENU);
        assert_eq!(pipe.sound_id(), 0x16);
        assert_eq!(pipe.priority(), 0xA0);
        assert_eq!(pipe.bits() & SOUNDARGS_MASK_STATUS, SOUND_STATUS_WAITING);
    }

    #[test]
    fn terrain_addend_shifts_sound_id() {
        let step = SoundBits::ACTION_TERRAIN_STEP.with_terrain(SoundTerrain::Snow);
        assert_eq!(step.bank(), SOUND_BANK_ACTION);
        assert_eq!(step.sound_id(), 0x15);
        let unchanged = SoundBits::ACTION_TERRAIN_STEP.with_terrain(SoundTerrain::Default);
        assert_eq!(unchanged, SoundBits::ACTION_TERRAIN_STEP);
    }

    #[test]
    fn bank_bitsets_cover_expected_banks() {
        assert_eq!(SOUND_BANKS_ALL, 0x3FF);
        assert_eq!(SOUND_BANKS_FOREGROUND, 0x085);
        assert_eq!(SOUND_BANKS_BACKGROUND, 0x37A);
        assert_eq!(SOUND_BANKS_DISABLED_DURING_INTRO_CUTSCENE, 0x330);
        assert_eq!(SOUND_BANKS_DISABLED_AFTER_CREDITS, 0x00F);
    }

    #[test]
    fn sequence_ids_are_sequential() {
        assert_eq!(SeqId::SoundPlayer as u8, 0x00);
        assert_eq!(SeqId::LevelGrass as u8, 0x03);
        assert_eq!(SeqId::LevelKoopaRoad as u8, 0x11);
        assert_eq!(SeqId::EventCutsceneLakitu as u8, 0x22);
        assert_eq!(SeqId::Count as u8, 0x23);
        assert_eq!(SeqPlayer::Sfx as u8, 2);
    }
}
