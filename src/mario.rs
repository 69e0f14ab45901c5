//! Mario instances: per-tick input and state, the render mesh refresh, and
//! the library's control surface for a live Mario.

use glam::{Vec2, Vec3};

use libsm64_sys::{SM64MarioGeometryBuffers, SM64MarioInputs, SM64MarioState};

use crate::convert::{self, TICK_DELTA_TIME};
use crate::geometry::{MarioGeometry, MeshArrays};
use crate::Sm64;

bitflags::bitflags! {
    /// Mario's action word. Bits 0-8 are the action id, with the group in
    /// bits 6-8; the upper bits are behavior flags shared across actions.
    /// The named actions are complete encoded words, not single bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ActionFlags: u32 {
        const ID_MASK = 0x000001FF;

        const GROUP_MASK = 0x000001C0;
        const GROUP_STATIONARY = 0 << 6; // 0x00000000
        const GROUP_MOVING = 1 << 6;     // 0x00000040
        const GROUP_AIRBORNE = 2 << 6;   // 0x00000080
        const GROUP_SUBMERGED = 3 << 6;  // 0x000000C0
        const GROUP_CUTSCENE = 4 << 6;   // 0x00000100
        const GROUP_AUTOMATIC = 5 << 6;  // 0x00000140
        const GROUP_OBJECT = 6 << 6;     // 0x00000180

        const FLAG_STATIONARY = 1 << 9;                  // 0x00000200
        const FLAG_MOVING = 1 << 10;                     // 0x00000400
        const FLAG_AIR = 1 << 11;                        // 0x00000800
        const FLAG_INTANGIBLE = 1 << 12;                 // 0x00001000
        const FLAG_SWIMMING = 1 << 13;                   // 0x00002000
        const FLAG_METAL_WATER = 1 << 14;                // 0x00004000
        const FLAG_SHORT_HITBOX = 1 << 15;               // 0x00008000
        const FLAG_RIDING_SHELL = 1 << 16;               // 0x00010000
        const FLAG_INVULNERABLE = 1 << 17;               // 0x00020000
        const FLAG_BUTT_OR_STOMACH_SLIDE = 1 << 18;      // 0x00040000
        const FLAG_DIVING = 1 << 19;                     // 0x00080000
        const FLAG_ON_POLE = 1 << 20;                    // 0x00100000
        const FLAG_HANGING = 1 << 21;                    // 0x00200000
        const FLAG_IDLE = 1 << 22;                       // 0x00400000
        const FLAG_ATTACKING = 1 << 23;                  // 0x00800000
        const FLAG_ALLOW_VERTICAL_WIND_ACTION = 1 << 24; // 0x01000000
        const FLAG_CONTROL_JUMP_HEIGHT = 1 << 25;        // 0x02000000
        const FLAG_ALLOW_FIRST_PERSON = 1 << 26;         // 0x04000000
        const FLAG_PAUSE_EXIT = 1 << 27;                 // 0x08000000
        const FLAG_SWIMMING_OR_FLYING = 1 << 28;         // 0x10000000
        const FLAG_WATER_OR_TEXT = 1 << 29;              // 0x20000000
        const FLAG_THROWING = 1 << 31;                   // 0x80000000

        const UNINITIALIZED = 0x00000000; // 0x000

        // group 0x000: stationary actions
        const IDLE = 0x0C400201;                       // 0x001 | FLAG_STATIONARY | FLAG_IDLE | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const START_SLEEPING = 0x0C400202;             // 0x002 | FLAG_STATIONARY | FLAG_IDLE | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const SLEEPING = 0x0C000203;                   // 0x003 | FLAG_STATIONARY | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const WAKING_UP = 0x0C000204;                  // 0x004 | FLAG_STATIONARY | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const PANTING = 0x0C400205;                    // 0x005 | FLAG_STATIONARY | FLAG_IDLE | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const HOLD_PANTING_UNUSED = 0x08000206;        // 0x006 | FLAG_STATIONARY | FLAG_PAUSE_EXIT
        const HOLD_IDLE = 0x08000207;                  // 0x007 | FLAG_STATIONARY | FLAG_PAUSE_EXIT
        const HOLD_HEAVY_IDLE = 0x08000208;            // 0x008 | FLAG_STATIONARY | FLAG_PAUSE_EXIT
        const STANDING_AGAINST_WALL = 0x0C400209;      // 0x009 | FLAG_STATIONARY | FLAG_IDLE | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const COUGHING = 0x0C40020A;                   // 0x00A | FLAG_STATIONARY | FLAG_IDLE | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const SHIVERING = 0x0C40020B;                  // 0x00B | FLAG_STATIONARY | FLAG_IDLE | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const IN_QUICKSAND = 0x0002020D;               // 0x00D | FLAG_STATIONARY | FLAG_INVULNERABLE
        const UNKNOWN_0002020E = 0x0002020E;           // 0x00E | FLAG_STATIONARY | FLAG_INVULNERABLE
        const CROUCHING = 0x0C008220;                  // 0x020 | FLAG_STATIONARY | FLAG_SHORT_HITBOX | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const START_CROUCHING = 0x0C008221;            // 0x021 | FLAG_STATIONARY | FLAG_SHORT_HITBOX | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const STOP_CROUCHING = 0x0C008222;             // 0x022 | FLAG_STATIONARY | FLAG_SHORT_HITBOX | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const START_CRAWLING = 0x0C008223;             // 0x023 | FLAG_STATIONARY | FLAG_SHORT_HITBOX | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const STOP_CRAWLING = 0x0C008224;              // 0x024 | FLAG_STATIONARY | FLAG_SHORT_HITBOX | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const SLIDE_KICK_SLIDE_STOP = 0x08000225;      // 0x025 | FLAG_STATIONARY | FLAG_PAUSE_EXIT
        const SHOCKWAVE_BOUNCE = 0x00020226;           // 0x026 | FLAG_STATIONARY | FLAG_INVULNERABLE
        const FIRST_PERSON = 0x0C000227;               // 0x027 | FLAG_STATIONARY | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const BACKFLIP_LAND_STOP = 0x0800022F;         // 0x02F | FLAG_STATIONARY | FLAG_PAUSE_EXIT
        const JUMP_LAND_STOP = 0x0C000230;             // 0x030 | FLAG_STATIONARY | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const DOUBLE_JUMP_LAND_STOP = 0x0C000231;      // 0x031 | FLAG_STATIONARY | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const FREEFALL_LAND_STOP = 0x0C000232;         // 0x032 | FLAG_STATIONARY | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const SIDE_FLIP_LAND_STOP = 0x0C000233;        // 0x033 | FLAG_STATIONARY | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const HOLD_JUMP_LAND_STOP = 0x08000234;        // 0x034 | FLAG_STATIONARY | FLAG_PAUSE_EXIT
        const HOLD_FREEFALL_LAND_STOP = 0x08000235;    // 0x035 | FLAG_STATIONARY | FLAG_PAUSE_EXIT
        const AIR_THROW_LAND = 0x80000A36;             // 0x036 | FLAG_STATIONARY | FLAG_AIR | FLAG_THROWING
        const TWIRL_LAND = 0x18800238;                 // 0x038 | FLAG_STATIONARY | FLAG_ATTACKING | FLAG_PAUSE_EXIT | FLAG_SWIMMING_OR_FLYING
        const LAVA_BOOST_LAND = 0x08000239;            // 0x039 | FLAG_STATIONARY | FLAG_PAUSE_EXIT
        const TRIPLE_JUMP_LAND_STOP = 0x0800023A;      // 0x03A | FLAG_STATIONARY | FLAG_PAUSE_EXIT
        const LONG_JUMP_LAND_STOP = 0x0800023B;        // 0x03B | FLAG_STATIONARY | FLAG_PAUSE_EXIT
        const GROUND_POUND_LAND = 0x0080023C;          // 0x03C | FLAG_STATIONARY | FLAG_ATTACKING
        const BRAKING_STOP = 0x0C00023D;               // 0x03D | FLAG_STATIONARY | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const BUTT_SLIDE_STOP = 0x0C00023E;            // 0x03E | FLAG_STATIONARY | FLAG_ALLOW_FIRST_PERSON | FLAG_PAUSE_EXIT
        const HOLD_BUTT_SLIDE_STOP = 0x0800043F;       // 0x03F | FLAG_MOVING | FLAG_PAUSE_EXIT

        // group 0x040: moving (ground) actions
        const WALKING = 0x04000440;                    // 0x040 | FLAG_MOVING | FLAG_ALLOW_FIRST_PERSON
        const HOLD_WALKING = 0x00000442;               // 0x042 | FLAG_MOVING
        const TURNING_AROUND = 0x00000443;             // 0x043 | FLAG_MOVING
        const FINISH_TURNING_AROUND = 0x00000444;      // 0x044 | FLAG_MOVING
        const BRAKING = 0x04000445;                    // 0x045 | FLAG_MOVING | FLAG_ALLOW_FIRST_PERSON
        const RIDING_SHELL_GROUND = 0x20810446;        // 0x046 | FLAG_MOVING | FLAG_RIDING_SHELL | FLAG_ATTACKING | FLAG_WATER_OR_TEXT
        const HOLD_HEAVY_WALKING = 0x00000447;         // 0x047 | FLAG_MOVING
        const CRAWLING = 0x04008448;                   // 0x048 | FLAG_MOVING | FLAG_SHORT_HITBOX | FLAG_ALLOW_FIRST_PERSON
        const BURNING_GROUND = 0x00020449;             // 0x049 | FLAG_MOVING | FLAG_INVULNERABLE
        const DECELERATING = 0x0400044A;               // 0x04A | FLAG_MOVING | FLAG_ALLOW_FIRST_PERSON
        const HOLD_DECELERATING = 0x0000044B;          // 0x04B | FLAG_MOVING
        const BEGIN_SLIDING = 0x00000050;              // 0x050
        const HOLD_BEGIN_SLIDING = 0x00000051;         // 0x051
        const BUTT_SLIDE = 0x00840452;                 // 0x052 | FLAG_MOVING | FLAG_BUTT_OR_STOMACH_SLIDE | FLAG_ATTACKING
        const STOMACH_SLIDE = 0x008C0453;              // 0x053 | FLAG_MOVING | FLAG_BUTT_OR_STOMACH_SLIDE | FLAG_DIVING | FLAG_ATTACKING
        const HOLD_BUTT_SLIDE = 0x00840454;            // 0x054 | FLAG_MOVING | FLAG_BUTT_OR_STOMACH_SLIDE | FLAG_ATTACKING
        const HOLD_STOMACH_SLIDE = 0x008C0455;         // 0x055 | FLAG_MOVING | FLAG_BUTT_OR_STOMACH_SLIDE | FLAG_DIVING | FLAG_ATTACKING
        const DIVE_SLIDE = 0x00880456;                 // 0x056 | FLAG_MOVING | FLAG_DIVING | FLAG_ATTACKING
        const MOVE_PUNCHING = 0x00800457;              // 0x057 | FLAG_MOVING | FLAG_ATTACKING
        const CROUCH_SLIDE = 0x04808459;               // 0x059 | FLAG_MOVING | FLAG_SHORT_HITBOX | FLAG_ATTACKING | FLAG_ALLOW_FIRST_PERSON
        const SLIDE_KICK_SLIDE = 0x0080045A;           // 0x05A | FLAG_MOVING | FLAG_ATTACKING
        const HARD_BACKWARD_GROUND_KB = 0x00020460;    // 0x060 | FLAG_MOVING | FLAG_INVULNERABLE
        const HARD_FORWARD_GROUND_KB = 0x00020461;     // 0x061 | FLAG_MOVING | FLAG_INVULNERABLE
        const BACKWARD_GROUND_KB = 0x00020462;         // 0x062 | FLAG_MOVING | FLAG_INVULNERABLE
        const FORWARD_GROUND_KB = 0x00020463;          // 0x063 | FLAG_MOVING | FLAG_INVULNERABLE
        const SOFT_BACKWARD_GROUND_KB = 0x00020464;    // 0x064 | FLAG_MOVING | FLAG_INVULNERABLE
        const SOFT_FORWARD_GROUND_KB = 0x00020465;     // 0x065 | FLAG_MOVING | FLAG_INVULNERABLE
        const GROUND_BONK = 0x00020466;                // 0x066 | FLAG_MOVING | FLAG_INVULNERABLE
        const DEATH_EXIT_LAND = 0x00020467;            // 0x067 | FLAG_MOVING | FLAG_INVULNERABLE
        const JUMP_LAND = 0x04000470;                  // 0x070 | FLAG_MOVING | FLAG_ALLOW_FIRST_PERSON
        const FREEFALL_LAND = 0x04000471;              // 0x071 | FLAG_MOVING | FLAG_ALLOW_FIRST_PERSON
        const DOUBLE_JUMP_LAND = 0x04000472;           // 0x072 | FLAG_MOVING | FLAG_ALLOW_FIRST_PERSON
        const SIDE_FLIP_LAND = 0x04000473;             // 0x073 | FLAG_MOVING | FLAG_ALLOW_FIRST_PERSON
        const HOLD_JUMP_LAND = 0x00000474;             // 0x074 | FLAG_MOVING
        const HOLD_FREEFALL_LAND = 0x00000475;         // 0x075 | FLAG_MOVING
        const QUICKSAND_JUMP_LAND = 0x00000476;        // 0x076 | FLAG_MOVING
        const HOLD_QUICKSAND_JUMP_LAND = 0x00000477;   // 0x077 | FLAG_MOVING
        const TRIPLE_JUMP_LAND = 0x04000478;           // 0x078 | FLAG_MOVING | FLAG_ALLOW_FIRST_PERSON
        const LONG_JUMP_LAND = 0x00000479;             // 0x079 | FLAG_MOVING
        const BACKFLIP_LAND = 0x0400047A;              // 0x07A | FLAG_MOVING | FLAG_ALLOW_FIRST_PERSON

        // group 0x080: airborne actions
        const JUMP = 0x03000880;                       // 0x080 | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION | FLAG_CONTROL_JUMP_HEIGHT
        const DOUBLE_JUMP = 0x03000881;                // 0x081 | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION | FLAG_CONTROL_JUMP_HEIGHT
        const TRIPLE_JUMP = 0x01000882;                // 0x082 | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const BACKFLIP = 0x01000883;                   // 0x083 | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const STEEP_JUMP = 0x03000885;                 // 0x085 | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION | FLAG_CONTROL_JUMP_HEIGHT
        const WALL_KICK_AIR = 0x03000886;              // 0x086 | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION | FLAG_CONTROL_JUMP_HEIGHT
        const SIDE_FLIP = 0x01000887;                  // 0x087 | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const LONG_JUMP = 0x03000888;                  // 0x088 | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION | FLAG_CONTROL_JUMP_HEIGHT
        const WATER_JUMP = 0x01000889;                 // 0x089 | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const DIVE = 0x0188088A;                       // 0x08A | FLAG_AIR | FLAG_DIVING | FLAG_ATTACKING | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const FREEFALL = 0x0100088C;                   // 0x08C | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const TOP_OF_POLE_JUMP = 0x0300088D;           // 0x08D | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION | FLAG_CONTROL_JUMP_HEIGHT
        const BUTT_SLIDE_AIR = 0x0300088E;             // 0x08E | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION | FLAG_CONTROL_JUMP_HEIGHT
        const FLYING_TRIPLE_JUMP = 0x03000894;         // 0x094 | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION | FLAG_CONTROL_JUMP_HEIGHT
        const SHOT_FROM_CANNON = 0x00880898;           // 0x098 | FLAG_AIR | FLAG_DIVING | FLAG_ATTACKING
        const FLYING = 0x10880899;                     // 0x099 | FLAG_AIR | FLAG_DIVING | FLAG_ATTACKING | FLAG_SWIMMING_OR_FLYING
        const RIDING_SHELL_JUMP = 0x0281089A;          // 0x09A | FLAG_AIR | FLAG_RIDING_SHELL | FLAG_ATTACKING | FLAG_CONTROL_JUMP_HEIGHT
        const RIDING_SHELL_FALL = 0x0081089B;          // 0x09B | FLAG_AIR | FLAG_RIDING_SHELL | FLAG_ATTACKING
        const VERTICAL_WIND = 0x1008089C;              // 0x09C | FLAG_AIR | FLAG_DIVING | FLAG_SWIMMING_OR_FLYING
        const HOLD_JUMP = 0x030008A0;                  // 0x0A0 | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION | FLAG_CONTROL_JUMP_HEIGHT
        const HOLD_FREEFALL = 0x010008A1;              // 0x0A1 | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const HOLD_BUTT_SLIDE_AIR = 0x010008A2;        // 0x0A2 | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const HOLD_WATER_JUMP = 0x010008A3;            // 0x0A3 | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const TWIRLING = 0x108008A4;                   // 0x0A4 | FLAG_AIR | FLAG_ATTACKING | FLAG_SWIMMING_OR_FLYING
        const FORWARD_ROLLOUT = 0x010008A6;            // 0x0A6 | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const AIR_HIT_WALL = 0x000008A7;               // 0x0A7 | FLAG_AIR
        const RIDING_HOOT = 0x000004A8;                // 0x0A8 | FLAG_MOVING
        const GROUND_POUND = 0x008008A9;               // 0x0A9 | FLAG_AIR | FLAG_ATTACKING
        const SLIDE_KICK = 0x018008AA;                 // 0x0AA | FLAG_AIR | FLAG_ATTACKING | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const AIR_THROW = 0x830008AB;                  // 0x0AB | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION | FLAG_CONTROL_JUMP_HEIGHT | FLAG_THROWING
        const JUMP_KICK = 0x018008AC;                  // 0x0AC | FLAG_AIR | FLAG_ATTACKING | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const BACKWARD_ROLLOUT = 0x010008AD;           // 0x0AD | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const CRAZY_BOX_BOUNCE = 0x000008AE;           // 0x0AE | FLAG_AIR
        const SPECIAL_TRIPLE_JUMP = 0x030008AF;        // 0x0AF | FLAG_AIR | FLAG_ALLOW_VERTICAL_WIND_ACTION | FLAG_CONTROL_JUMP_HEIGHT
        const BACKWARD_AIR_KB = 0x010208B0;            // 0x0B0 | FLAG_AIR | FLAG_INVULNERABLE | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const FORWARD_AIR_KB = 0x010208B1;             // 0x0B1 | FLAG_AIR | FLAG_INVULNERABLE | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const HARD_FORWARD_AIR_KB = 0x010208B2;        // 0x0B2 | FLAG_AIR | FLAG_INVULNERABLE | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const HARD_BACKWARD_AIR_KB = 0x010208B3;       // 0x0B3 | FLAG_AIR | FLAG_INVULNERABLE | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const BURNING_JUMP = 0x010208B4;               // 0x0B4 | FLAG_AIR | FLAG_INVULNERABLE | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const BURNING_FALL = 0x010208B5;               // 0x0B5 | FLAG_AIR | FLAG_INVULNERABLE | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const SOFT_BONK = 0x010208B6;                  // 0x0B6 | FLAG_AIR | FLAG_INVULNERABLE | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const LAVA_BOOST = 0x010208B7;                 // 0x0B7 | FLAG_AIR | FLAG_INVULNERABLE | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const GETTING_BLOWN = 0x010208B8;              // 0x0B8 | FLAG_AIR | FLAG_INVULNERABLE | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const THROWN_FORWARD = 0x010208BD;             // 0x0BD | FLAG_AIR | FLAG_INVULNERABLE | FLAG_ALLOW_VERTICAL_WIND_ACTION
        const THROWN_BACKWARD = 0x010208BE;            // 0x0BE | FLAG_AIR | FLAG_INVULNERABLE | FLAG_ALLOW_VERTICAL_WIND_ACTION

        // group 0x0C0: submerged actions
        const WATER_IDLE = 0x380022C0;                 // 0x0C0 | FLAG_STATIONARY | FLAG_SWIMMING | FLAG_PAUSE_EXIT | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const HOLD_WATER_IDLE = 0x380022C1;            // 0x0C1 | FLAG_STATIONARY | FLAG_SWIMMING | FLAG_PAUSE_EXIT | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const WATER_ACTION_END = 0x300022C2;           // 0x0C2 | FLAG_STATIONARY | FLAG_SWIMMING | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const HOLD_WATER_ACTION_END = 0x300022C3;      // 0x0C3 | FLAG_STATIONARY | FLAG_SWIMMING | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const DROWNING = 0x300032C4;                   // 0x0C4 | FLAG_STATIONARY | FLAG_INTANGIBLE | FLAG_SWIMMING | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const BACKWARD_WATER_KB = 0x300222C5;          // 0x0C5 | FLAG_STATIONARY | FLAG_SWIMMING | FLAG_INVULNERABLE | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const FORWARD_WATER_KB = 0x300222C6;           // 0x0C6 | FLAG_STATIONARY | FLAG_SWIMMING | FLAG_INVULNERABLE | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const WATER_DEATH = 0x300032C7;                // 0x0C7 | FLAG_STATIONARY | FLAG_INTANGIBLE | FLAG_SWIMMING | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const WATER_SHOCKED = 0x300222C8;              // 0x0C8 | FLAG_STATIONARY | FLAG_SWIMMING | FLAG_INVULNERABLE | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const BREASTSTROKE = 0x300024D0;               // 0x0D0 | FLAG_MOVING | FLAG_SWIMMING | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const SWIMMING_END = 0x300024D1;               // 0x0D1 | FLAG_MOVING | FLAG_SWIMMING | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const FLUTTER_KICK = 0x300024D2;               // 0x0D2 | FLAG_MOVING | FLAG_SWIMMING | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const HOLD_BREASTSTROKE = 0x300024D3;          // 0x0D3 | FLAG_MOVING | FLAG_SWIMMING | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const HOLD_SWIMMING_END = 0x300024D4;          // 0x0D4 | FLAG_MOVING | FLAG_SWIMMING | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const HOLD_FLUTTER_KICK = 0x300024D5;          // 0x0D5 | FLAG_MOVING | FLAG_SWIMMING | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const WATER_SHELL_SWIMMING = 0x300024D6;       // 0x0D6 | FLAG_MOVING | FLAG_SWIMMING | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const WATER_THROW = 0x300024E0;                // 0x0E0 | FLAG_MOVING | FLAG_SWIMMING | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const WATER_PUNCH = 0x300024E1;                // 0x0E1 | FLAG_MOVING | FLAG_SWIMMING | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const WATER_PLUNGE = 0x300022E2;               // 0x0E2 | FLAG_STATIONARY | FLAG_SWIMMING | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const CAUGHT_IN_WHIRLPOOL = 0x300222E3;        // 0x0E3 | FLAG_STATIONARY | FLAG_SWIMMING | FLAG_INVULNERABLE | FLAG_SWIMMING_OR_FLYING | FLAG_WATER_OR_TEXT
        const METAL_WATER_STANDING = 0x080042F0;       // 0x0F0 | FLAG_STATIONARY | FLAG_METAL_WATER | FLAG_PAUSE_EXIT
        const HOLD_METAL_WATER_STANDING = 0x080042F1;  // 0x0F1 | FLAG_STATIONARY | FLAG_METAL_WATER | FLAG_PAUSE_EXIT
        const METAL_WATER_WALKING = 0x000044F2;        // 0x0F2 | FLAG_MOVING | FLAG_METAL_WATER
        const HOLD_METAL_WATER_WALKING = 0x000044F3;   // 0x0F3 | FLAG_MOVING | FLAG_METAL_WATER
        const METAL_WATER_FALLING = 0x000042F4;        // 0x0F4 | FLAG_STATIONARY | FLAG_METAL_WATER
        const HOLD_METAL_WATER_FALLING = 0x000042F5;   // 0x0F5 | FLAG_STATIONARY | FLAG_METAL_WATER
        const METAL_WATER_FALL_LAND = 0x000042F6;      // 0x0F6 | FLAG_STATIONARY | FLAG_METAL_WATER
        const HOLD_METAL_WATER_FALL_LAND = 0x000042F7; // 0x0F7 | FLAG_STATIONARY | FLAG_METAL_WATER
        const METAL_WATER_JUMP = 0x000044F8;           // 0x0F8 | FLAG_MOVING | FLAG_METAL_WATER
        const HOLD_METAL_WATER_JUMP = 0x000044F9;      // 0x0F9 | FLAG_MOVING | FLAG_METAL_WATER
        const METAL_WATER_JUMP_LAND = 0x000044FA;      // 0x0FA | FLAG_MOVING | FLAG_METAL_WATER
        const HOLD_METAL_WATER_JUMP_LAND = 0x000044FB; // 0x0FB | FLAG_MOVING | FLAG_METAL_WATER

        // group 0x100: cutscene actions
        const DISAPPEARED = 0x00001300;                // 0x100 | FLAG_STATIONARY | FLAG_INTANGIBLE
        const INTRO_CUTSCENE = 0x04001301;             // 0x101 | FLAG_STATIONARY | FLAG_INTANGIBLE | FLAG_ALLOW_FIRST_PERSON
        const STAR_DANCE_EXIT = 0x00001302;            // 0x102 | FLAG_STATIONARY | FLAG_INTANGIBLE
        const STAR_DANCE_WATER = 0x00001303;           // 0x103 | FLAG_STATIONARY | FLAG_INTANGIBLE
        const FALL_AFTER_STAR_GRAB = 0x00001904;       // 0x104 | FLAG_AIR | FLAG_INTANGIBLE
        const READING_AUTOMATIC_DIALOG = 0x20001305;   // 0x105 | FLAG_STATIONARY | FLAG_INTANGIBLE | FLAG_WATER_OR_TEXT
        const READING_NPC_DIALOG = 0x20001306;         // 0x106 | FLAG_STATIONARY | FLAG_INTANGIBLE | FLAG_WATER_OR_TEXT
        const STAR_DANCE_NO_EXIT = 0x00001307;         // 0x107 | FLAG_STATIONARY | FLAG_INTANGIBLE
        const READING_SIGN = 0x00001308;               // 0x108 | FLAG_STATIONARY | FLAG_INTANGIBLE
        const JUMBO_STAR_CUTSCENE = 0x00001909;        // 0x109 | FLAG_AIR | FLAG_INTANGIBLE
        const WAITING_FOR_DIALOG = 0x0000130A;         // 0x10A | FLAG_STATIONARY | FLAG_INTANGIBLE
        const DEBUG_FREE_MOVE = 0x0000130F;            // 0x10F | FLAG_STATIONARY | FLAG_INTANGIBLE
        const STANDING_DEATH = 0x00021311;             // 0x111 | FLAG_STATIONARY | FLAG_INTANGIBLE | FLAG_INVULNERABLE
        const QUICKSAND_DEATH = 0x00021312;            // 0x112 | FLAG_STATIONARY | FLAG_INTANGIBLE | FLAG_INVULNERABLE
        const ELECTROCUTION = 0x00021313;              // 0x113 | FLAG_STATIONARY | FLAG_INTANGIBLE | FLAG_INVULNERABLE
        const SUFFOCATION = 0x00021314;                // 0x114 | FLAG_STATIONARY | FLAG_INTANGIBLE | FLAG_INVULNERABLE
        const DEATH_ON_STOMACH = 0x00021315;           // 0x115 | FLAG_STATIONARY | FLAG_INTANGIBLE | FLAG_INVULNERABLE
        const DEATH_ON_BACK = 0x00021316;              // 0x116 | FLAG_STATIONARY | FLAG_INTANGIBLE | FLAG_INVULNERABLE
        const EATEN_BY_BUBBA = 0x00021317;             // 0x117 | FLAG_STATIONARY | FLAG_INTANGIBLE | FLAG_INVULNERABLE
        const END_PEACH_CUTSCENE = 0x00001918;         // 0x118 | FLAG_AIR | FLAG_INTANGIBLE
        const CREDITS_CUTSCENE = 0x00001319;           // 0x119 | FLAG_STATIONARY | FLAG_INTANGIBLE
        const END_WAVING_CUTSCENE = 0x0000131A;        // 0x11A | FLAG_STATIONARY | FLAG_INTANGIBLE
        const PULLING_DOOR = 0x00001320;               // 0x120 | FLAG_STATIONARY | FLAG_INTANGIBLE
        const PUSHING_DOOR = 0x00001321;               // 0x121 | FLAG_STATIONARY | FLAG_INTANGIBLE
        const WARP_DOOR_SPAWN = 0x00001322;            // 0x122 | FLAG_STATIONARY | FLAG_INTANGIBLE
        const EMERGE_FROM_PIPE = 0x00001923;           // 0x123 | FLAG_AIR | FLAG_INTANGIBLE
        const SPAWN_SPIN_AIRBORNE = 0x00001924;        // 0x124 | FLAG_AIR | FLAG_INTANGIBLE
        const SPAWN_SPIN_LANDING = 0x00001325;         // 0x125 | FLAG_STATIONARY | FLAG_INTANGIBLE
        const EXIT_AIRBORNE = 0x00001926;              // 0x126 | FLAG_AIR | FLAG_INTANGIBLE
        const EXIT_LAND_SAVE_DIALOG = 0x00001327;      // 0x127 | FLAG_STATIONARY | FLAG_INTANGIBLE
        const DEATH_EXIT = 0x00001928;                 // 0x128 | FLAG_AIR | FLAG_INTANGIBLE
        const UNUSED_DEATH_EXIT = 0x00001929;          // 0x129 | FLAG_AIR | FLAG_INTANGIBLE
        const FALLING_DEATH_EXIT = 0x0000192A;         // 0x12A | FLAG_AIR | FLAG_INTANGIBLE
        const SPECIAL_EXIT_AIRBORNE = 0x0000192B;      // 0x12B | FLAG_AIR | FLAG_INTANGIBLE
        const SPECIAL_DEATH_EXIT = 0x0000192C;         // 0x12C | FLAG_AIR | FLAG_INTANGIBLE
        const FALLING_EXIT_AIRBORNE = 0x0000192D;      // 0x12D | FLAG_AIR | FLAG_INTANGIBLE
        const UNLOCKING_KEY_DOOR = 0x0000132E;         // 0x12E | FLAG_STATIONARY | FLAG_INTANGIBLE
        const UNLOCKING_STAR_DOOR = 0x0000132F;        // 0x12F | FLAG_STATIONARY | FLAG_INTANGIBLE
        const ENTERING_STAR_DOOR = 0x00001331;         // 0x131 | FLAG_STATIONARY | FLAG_INTANGIBLE
        const SPAWN_NO_SPIN_AIRBORNE = 0x00001932;     // 0x132 | FLAG_AIR | FLAG_INTANGIBLE
        const SPAWN_NO_SPIN_LANDING = 0x00001333;      // 0x133 | FLAG_STATIONARY | FLAG_INTANGIBLE
        const BBH_ENTER_JUMP = 0x00001934;             // 0x134 | FLAG_AIR | FLAG_INTANGIBLE
        const BBH_ENTER_SPIN = 0x00001535;             // 0x135 | FLAG_MOVING | FLAG_INTANGIBLE
        const TELEPORT_FADE_OUT = 0x00001336;          // 0x136 | FLAG_STATIONARY | FLAG_INTANGIBLE
        const TELEPORT_FADE_IN = 0x00001337;           // 0x137 | FLAG_STATIONARY | FLAG_INTANGIBLE
        const SHOCKED = 0x00020338;                    // 0x138 | FLAG_STATIONARY | FLAG_INVULNERABLE
        const SQUISHED = 0x00020339;                   // 0x139 | FLAG_STATIONARY | FLAG_INVULNERABLE
        const HEAD_STUCK_IN_GROUND = 0x0002033A;       // 0x13A | FLAG_STATIONARY | FLAG_INVULNERABLE
        const BUTT_STUCK_IN_GROUND = 0x0002033B;       // 0x13B | FLAG_STATIONARY | FLAG_INVULNERABLE
        const FEET_STUCK_IN_GROUND = 0x0002033C;       // 0x13C | FLAG_STATIONARY | FLAG_INVULNERABLE
        const PUTTING_ON_CAP = 0x0000133D;             // 0x13D | FLAG_STATIONARY | FLAG_INTANGIBLE

        // group 0x140: "automatic" actions
        const HOLDING_POLE = 0x08100340;               // 0x140 | FLAG_STATIONARY | FLAG_ON_POLE | FLAG_PAUSE_EXIT
        const GRAB_POLE_SLOW = 0x00100341;             // 0x141 | FLAG_STATIONARY | FLAG_ON_POLE
        const GRAB_POLE_FAST = 0x00100342;             // 0x142 | FLAG_STATIONARY | FLAG_ON_POLE
        const CLIMBING_POLE = 0x00100343;              // 0x143 | FLAG_STATIONARY | FLAG_ON_POLE
        const TOP_OF_POLE_TRANSITION = 0x00100344;     // 0x144 | FLAG_STATIONARY | FLAG_ON_POLE
        const TOP_OF_POLE = 0x00100345;                // 0x145 | FLAG_STATIONARY | FLAG_ON_POLE
        const START_HANGING = 0x08200348;              // 0x148 | FLAG_STATIONARY | FLAG_HANGING | FLAG_PAUSE_EXIT
        const HANGING = 0x00200349;                    // 0x149 | FLAG_STATIONARY | FLAG_HANGING
        const HANG_MOVING = 0x0020054A;                // 0x14A | FLAG_MOVING | FLAG_HANGING
        const LEDGE_GRAB = 0x0800034B;                 // 0x14B | FLAG_STATIONARY | FLAG_PAUSE_EXIT
        const LEDGE_CLIMB_SLOW_1 = 0x0000054C;         // 0x14C | FLAG_MOVING
        const LEDGE_CLIMB_SLOW_2 = 0x0000054D;         // 0x14D | FLAG_MOVING
        const LEDGE_CLIMB_DOWN = 0x0000054E;           // 0x14E | FLAG_MOVING
        const LEDGE_CLIMB_FAST = 0x0000054F;           // 0x14F | FLAG_MOVING
        const GRABBED = 0x00020370;                    // 0x170 | FLAG_STATIONARY | FLAG_INVULNERABLE
        const IN_CANNON = 0x00001371;                  // 0x171 | FLAG_STATIONARY | FLAG_INTANGIBLE
        const TORNADO_TWIRLING = 0x10020372;           // 0x172 | FLAG_STATIONARY | FLAG_INVULNERABLE | FLAG_SWIMMING_OR_FLYING

        // group 0x180: object actions
        const PUNCHING = 0x00800380;                   // 0x180 | FLAG_STATIONARY | FLAG_ATTACKING
        const PICKING_UP = 0x00000383;                 // 0x183 | FLAG_STATIONARY
        const DIVE_PICKING_UP = 0x00000385;            // 0x185 | FLAG_STATIONARY
        const STOMACH_SLIDE_STOP = 0x00000386;         // 0x186 | FLAG_STATIONARY
        const PLACING_DOWN = 0x00000387;               // 0x187 | FLAG_STATIONARY
        const THROWING = 0x80000588;                   // 0x188 | FLAG_MOVING | FLAG_THROWING
        const HEAVY_THROW = 0x80000589;                // 0x189 | FLAG_MOVING | FLAG_THROWING
        const PICKING_UP_BOWSER = 0x00000390;          // 0x190 | FLAG_STATIONARY
        const HOLDING_BOWSER = 0x00000391;             // 0x191 | FLAG_STATIONARY
        const RELEASING_BOWSER = 0x00000392;           // 0x192 | FLAG_STATIONARY
    }
}

impl ActionFlags {
    /// Action id including the group bits.
    pub const fn action_id(self) -> u32 {
        self.bits() & Self::ID_MASK.bits()
    }

    /// Group the action belongs to, one of the `GROUP_*` values.
    pub const fn group(self) -> u32 {
        self.bits() & Self::GROUP_MASK.bits()
    }
}

bitflags::bitflags! {
    /// Mario's persistent state flags: worn caps and transient markers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MarioFlags: u32 {
        const NORMAL_CAP = 0x00000001;
        const VANISH_CAP = 0x00000002;
        const METAL_CAP = 0x00000004;
        const WING_CAP = 0x00000008;
        const CAP_ON_HEAD = 0x00000010;
        const CAP_IN_HAND = 0x00000020;
        const METAL_SHOCK = 0x00000040;
        const TELEPORTING = 0x00000080;
        const UNKNOWN_08 = 0x00000100;
        const UNKNOWN_13 = 0x00002000;
        const ACTION_SOUND_PLAYED = 0x00010000;
        const MARIO_SOUND_PLAYED = 0x00020000;
        const UNKNOWN_18 = 0x00040000;
        const PUNCHING = 0x00100000;
        const KICKING = 0x00200000;
        const TRIPPING = 0x00400000;
        const UNKNOWN_25 = 0x02000000;
        const UNKNOWN_30 = 0x40000000;
        const UNKNOWN_31 = 0x80000000;

        const SPECIAL_CAPS = Self::VANISH_CAP.bits() | Self::METAL_CAP.bits() | Self::WING_CAP.bits();
        const CAPS = Self::NORMAL_CAP.bits() | Self::SPECIAL_CAPS.bits();
    }
}

bitflags::bitflags! {
    /// Particle effects Mario spawned this tick.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParticleFlags: u32 {
        const DUST = 1 << 0;                 // 0x00000001
        const VERTICAL_STAR = 1 << 1;        // 0x00000002
        const PARTICLE_2 = 1 << 2;           // 0x00000004
        const SPARKLES = 1 << 3;             // 0x00000008
        const HORIZONTAL_STAR = 1 << 4;      // 0x00000010
        const BUBBLE = 1 << 5;               // 0x00000020
        const WATER_SPLASH = 1 << 6;         // 0x00000040
        const IDLE_WATER_WAVE = 1 << 7;      // 0x00000080
        const SHALLOW_WATER_WAVE = 1 << 8;   // 0x00000100
        const PLUNGE_BUBBLE = 1 << 9;        // 0x00000200
        const WAVE_TRAIL = 1 << 10;          // 0x00000400
        const FIRE = 1 << 11;                // 0x00000800
        const SHALLOW_WATER_SPLASH = 1 << 12; // 0x00001000
        const LEAF = 1 << 13;                // 0x00002000
        const SNOW = 1 << 14;                // 0x00004000
        const DIRT = 1 << 15;                // 0x00008000
        const MIST_CIRCLE = 1 << 16;         // 0x00010000
        const BREATH = 1 << 17;              // 0x00020000
        const TRIANGLE = 1 << 18;            // 0x00040000
        const PARTICLE_19 = 1 << 19;         // 0x00080000
    }
}

/* Damage subtypes for take_damage, from the decomp's interaction.h */
pub const INT_SUBTYPE_DELAY_INVINCIBILITY: u32 = 0x00000002;
pub const INT_SUBTYPE_BIG_KNOCKBACK: u32 = 0x00000008; // Used by Bowser, sets Mario's forward velocity to 40 on hit

/// Controller state for one tick. Stick axes live in `[-1, 1]`; `cam_look`
/// is the camera's horizontal facing direction in engine space (x and z).
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct MarioInput {
    pub stick: Vec2,
    pub cam_look: Vec2,
    pub button_a: bool,
    pub button_b: bool,
    pub button_z: bool,
}

impl MarioInput {
    fn to_library(self) -> SM64MarioInputs {
        SM64MarioInputs {
            camLookX: self.cam_look.y,
            camLookZ: -self.cam_look.x,
            stickX: self.stick.x,
            stickY: self.stick.y,
            buttonA: self.button_a as u8,
            buttonB: self.button_b as u8,
            buttonZ: self.button_z as u8,
        }
    }
}

/// Snapshot of Mario after a tick, converted back to engine space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarioState {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Heading around the vertical axis, radians.
    pub face_angle: f32,
    /// Eight health wedges live in the upper byte; dead at zero.
    pub health: i16,
    pub action: ActionFlags,
    pub flags: MarioFlags,
    pub particle_flags: ParticleFlags,
    /// Remaining invincibility in seconds.
    pub invincibility_time: f32,
}

impl MarioState {
    fn from_library(state: &SM64MarioState, scale: f32) -> Self {
        Self {
            position: convert::to_engine_position(state.position, scale),
            velocity: convert::to_engine_position(state.velocity, scale),
            face_angle: state.faceAngle,
            health: state.health,
            action: ActionFlags::from_bits_retain(state.action),
            flags: MarioFlags::from_bits_retain(state.flags),
            particle_flags: ParticleFlags::from_bits_retain(state.particleFlags),
            invincibility_time: state.invincTimer as f32 * TICK_DELTA_TIME,
        }
    }
}

/// A Mario registered with the library. Dropping the handle removes him from
/// the simulation.
pub struct Mario<'ctx> {
    id: i32,
    geometry: MarioGeometry,
    mesh: MeshArrays,
    ctx: &'ctx Sm64,
}

impl<'ctx> Mario<'ctx> {
    pub(crate) fn new(ctx: &'ctx Sm64, id: i32) -> Self {
        Self {
            id,
            geometry: MarioGeometry::new(),
            mesh: MeshArrays::new(),
            ctx,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    /// Advances this Mario by one 30 Hz tick and refreshes the render mesh.
    pub fn tick(&mut self, input: MarioInput) -> MarioState {
        let inputs = input.to_library();
        let mut state = SM64MarioState::default();
        let mut buffers = SM64MarioGeometryBuffers::from(&mut self.geometry);

        unsafe { libsm64_sys::sm64_mario_tick(self.id, &inputs, &mut state, &mut buffers) }

        self.geometry.set_triangles_used(buffers.numTrianglesUsed);
        let scale = self.ctx.scale_factor();
        self.mesh.update_from(&self.geometry, scale);

        MarioState::from_library(&state, scale)
    }

    /// Library-space mesh snapshot from the latest tick, e.g. for
    /// interpolation between ticks.
    pub fn geometry(&self) -> &MarioGeometry {
        &self.geometry
    }

    /// Engine-space render arrays from the latest tick.
    pub fn mesh(&self) -> &MeshArrays {
        &self.mesh
    }

    pub fn set_action(&mut self, action: ActionFlags) {
        unsafe { libsm64_sys::sm64_set_mario_action(self.id, action.bits()) }
    }

    pub fn set_action_arg(&mut self, action: ActionFlags, arg: u32) {
        unsafe { libsm64_sys::sm64_set_mario_action_arg(self.id, action.bits(), arg) }
    }

    pub fn set_animation(&mut self, anim_id: i32) {
        unsafe { libsm64_sys::sm64_set_mario_animation(self.id, anim_id) }
    }

    pub fn set_anim_frame(&mut self, frame: i16) {
        unsafe { libsm64_sys::sm64_set_mario_anim_frame(self.id, frame) }
    }

    pub fn set_state(&mut self, flags: MarioFlags) {
        unsafe { libsm64_sys::sm64_set_mario_state(self.id, flags.bits()) }
    }

    pub fn set_position(&mut self, position: Vec3) {
        let p = convert::to_library_position(position, self.ctx.scale_factor());
        unsafe { libsm64_sys::sm64_set_mario_position(self.id, p[0], p[1], p[2]) }
    }

    /// Full orientation, engine radians.
    pub fn set_angle(&mut self, rotation: Vec3) {
        let r = convert::to_library_rotation(rotation);
        unsafe { libsm64_sys::sm64_set_mario_angle(self.id, r[0], r[1], r[2]) }
    }

    /// Heading around the vertical axis, engine radians.
    pub fn set_face_angle(&mut self, yaw: f32) {
        unsafe { libsm64_sys::sm64_set_mario_faceangle(self.id, yaw.to_degrees()) }
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        let v = convert::to_library_position(velocity, self.ctx.scale_factor());
        unsafe { libsm64_sys::sm64_set_mario_velocity(self.id, v[0], v[1], v[2]) }
    }

    /// Speed along the facing direction, in engine units.
    pub fn set_forward_velocity(&mut self, velocity: f32) {
        let v = velocity * self.ctx.scale_factor();
        unsafe { libsm64_sys::sm64_set_mario_forward_velocity(self.id, v) }
    }

    /// Invincibility duration in seconds, truncated to whole ticks.
    pub fn set_invincibility(&mut self, seconds: f32) {
        let timer = (seconds / TICK_DELTA_TIME) as i16;
        unsafe { libsm64_sys::sm64_set_mario_invincibility(self.id, timer) }
    }

    /// Water surface height in engine units. Send the level far below the
    /// floor to remove water.
    pub fn set_water_level(&mut self, level: f32) {
        let scaled = (level * self.ctx.scale_factor()) as i32;
        unsafe { libsm64_sys::sm64_set_mario_water_level(self.id, scaled) }
    }

    /// Poison gas ceiling height in engine units.
    pub fn set_gas_level(&mut self, level: f32) {
        let scaled = (level * self.ctx.scale_factor()) as i32;
        unsafe { libsm64_sys::sm64_set_mario_gas_level(self.id, scaled) }
    }

    /// Health wedges occupy the upper byte: `0x0880` is full, `0x0000` dead.
    pub fn set_health(&mut self, health: u16) {
        unsafe { libsm64_sys::sm64_set_mario_health(self.id, health) }
    }

    /// Knocks Mario back from `source`, taking `damage` wedges. `subtype`
    /// is zero or a combination of the `INT_SUBTYPE_*` values.
    pub fn take_damage(&mut self, damage: u32, subtype: u32, source: Vec3) {
        let p = convert::to_library_position(source, self.ctx.scale_factor());
        unsafe { libsm64_sys::sm64_mario_take_damage(self.id, damage, subtype, p[0], p[1], p[2]) }
    }

    /// Heals quarter wedges; four units restore one health wedge.
    pub fn heal(&mut self, heal_counter: u8) {
        unsafe { libsm64_sys::sm64_mario_heal(self.id, heal_counter) }
    }

    pub fn kill(&mut self) {
        unsafe { libsm64_sys::sm64_mario_kill(self.id) }
    }

    /// Gives a cap as if collected in game, with pickup animation and music
    /// when `play_music` is set. `cap` must be one of the cap flags.
    pub fn interact_cap(&mut self, cap: MarioFlags, cap_time: f32, play_music: bool) {
        let ticks = convert::ticks_from_seconds(cap_time);
        unsafe {
            libsm64_sys::sm64_mario_interact_cap(self.id, cap.bits(), ticks, play_music as u8)
        }
    }

    /// Extends the running cap timer without the pickup ceremony.
    pub fn extend_cap(&mut self, cap_time: f32) {
        let ticks = convert::ticks_from_seconds(cap_time);
        unsafe { libsm64_sys::sm64_mario_extend_cap(self.id, ticks) }
    }

    /// Attack check against a target at `position` with the given hitbox
    /// height. Returns whether the attack connected.
    pub fn attack(&mut self, position: Vec3, hitbox_height: f32) -> bool {
        let scale = self.ctx.scale_factor();
        let p = convert::to_library_position(position, scale);
        unsafe { libsm64_sys::sm64_mario_attack(self.id, p[0], p[1], p[2], hitbox_height * scale) }
    }
}

impl<'ctx> Drop for Mario<'ctx> {
    fn drop(&mut self) {
        unsafe { libsm64_sys::sm64_mario_delete(self.id) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_words_match_known_encodings() {
        assert_eq!(ActionFlags::IDLE.bits(), 0x0C40_0201);
        assert_eq!(ActionFlags::WALKING.bits(), 0x0400_0440);
        assert_eq!(ActionFlags::JUMP.bits(), 0x0300_0880);
        assert_eq!(ActionFlags::WATER_IDLE.bits(), 0x3800_22C0);
    }

    #[test]
    fn action_id_and_group_unpack() {
        assert_eq!(ActionFlags::IDLE.action_id(), 0x001);
        assert_eq!(ActionFlags::IDLE.group(), ActionFlags::GROUP_STATIONARY.bits());
        assert_eq!(ActionFlags::WALKING.group(), ActionFlags::GROUP_MOVING.bits());
        assert_eq!(ActionFlags::JUMP.group(), ActionFlags::GROUP_AIRBORNE.bits());
        assert_eq!(ActionFlags::DROWNING.group(), ActionFlags::GROUP_SUBMERGED.bits());
        assert_eq!(ActionFlags::GRABBED.group(), ActionFlags::GROUP_AUTOMATIC.bits());
    }

    #[test]
    fn action_flag_bits_compose_the_words() {
        assert!(ActionFlags::JUMP.contains(ActionFlags::FLAG_AIR));
        assert!(ActionFlags::JUMP.contains(ActionFlags::FLAG_CONTROL_JUMP_HEIGHT));
        assert!(ActionFlags::FLYING.contains(ActionFlags::FLAG_SWIMMING_OR_FLYING));
        assert!(ActionFlags::THROWING.contains(ActionFlags::FLAG_THROWING));
        assert!(!ActionFlags::WALKING.contains(ActionFlags::FLAG_AIR));
    }

    #[test]
    fn cap_composites_cover_the_caps() {
        let caps = MarioFlags::CAPS;
        assert!(caps.contains(MarioFlags::NORMAL_CAP));
        assert!(caps.contains(MarioFlags::WING_CAP));
        assert!(!MarioFlags::SPECIAL_CAPS.contains(MarioFlags::NORMAL_CAP));
        assert_eq!(MarioFlags::CAPS.bits(), 0x0000_000F);
    }

    #[test]
    fn input_converts_to_library_layout() {
        let input = MarioInput {
            stick: Vec2::new(0.5, -0.25),
            cam_look: Vec2::new(1.0, 0.0),
            button_a: true,
            button_b: false,
            button_z: true,
        };

        let raw = input.to_library();

        assert_eq!(raw.stickX, 0.5);
        assert_eq!(raw.stickY, -0.25);
        // Camera look permutes like any horizontal vector.
        assert_eq!(raw.camLookX, 0.0);
        assert_eq!(raw.camLookZ, -1.0);
        assert_eq!(raw.buttonA, 1);
        assert_eq!(raw.buttonB, 0);
        assert_eq!(raw.buttonZ, 1);
    }

    #[test]
    fn state_converts_to_engine_space() {
        let raw = SM64MarioState {
            position: [100.0, 200.0, 300.0],
            velocity: [0.0, -50.0, 0.0],
            faceAngle: 1.5,
            health: 0x0880,
            action: ActionFlags::WALKING.bits(),
            flags: MarioFlags::NORMAL_CAP.bits() | MarioFlags::CAP_ON_HEAD.bits(),
            particleFlags: ParticleFlags::DUST.bits(),
            invincTimer: 45,
        };

        let state = MarioState::from_library(&raw, 100.0);

        assert_eq!(state.position, Vec3::new(-3.0, 2.0, 1.0));
        assert_eq!(state.velocity, Vec3::new(0.0, -0.5, 0.0));
        assert_eq!(state.face_angle, 1.5);
        assert_eq!(state.action, ActionFlags::WALKING);
        assert!(state.flags.contains(MarioFlags::CAP_ON_HEAD));
        assert!(state.particle_flags.contains(ParticleFlags::DUST));
        assert!((state.invincibility_time - 1.5).abs() < 1e-6);
    }
}
