// Frame timing
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0; // 60 Hz physics/input

// Kart physics constants
pub const MAX_SPEED: f32 = 0.4;
pub const ACCEL_RATE: f32 = 0.8;
pub const DECEL_RATE: f32 = 1.2;
pub const FRICTION: f32 = 0.96;
pub const REVERSE_SPEED_CAP: f32 = 0.6 * MAX_SPEED;
pub const MAX_TURN_SPEED: f32 = 0.08;
pub const TURN_ACCEL: f32 = 0.15;
pub const TURN_FRICTION: f32 = 0.9;

// Track geometry
pub const TRACK_POINTS: usize = 32;
pub const TRACK_RADIUS_X: f32 = 40.0;
pub const TRACK_RADIUS_Z: f32 = 25.0;
pub const TRACK_WIDTH: f32 = 12.0;
pub const KART_RADIUS: f32 = 0.8;
pub const RIDE_HEIGHT: f32 = 0.5; // karts sit this far above the surface

// Contact and recovery rules
pub const COLLISION_RADIUS: f32 = 1.5;
pub const WALL_PAUSE_SECONDS: f32 = 3.0;
pub const HIT_STUN_SECONDS: f32 = 0.1;
pub const MAX_HEALTH: i32 = 10;

// Lap accounting
pub const CHECKPOINT_COUNT: usize = 4;
pub const TOTAL_LAPS: u32 = 3;

// AI steering
pub const WAYPOINT_ADVANCE_RADIUS: f32 = 3.0;
