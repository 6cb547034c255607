// Relay server
pub const SERVER_ADDR: &str = "0.0.0.0:8080";
// Fixed growth per reported pellet, independent of the pellet payload.
pub const GROW_AMOUNT: u32 = 5;

// Client socket target
pub const DEFAULT_SERVER_URL: &str = "ws://127.0.0.1:8080";

// World (square, origin at top-left)
pub const WORLD_SIZE: f32 = 2000.0;
pub const PELLET_COUNT: usize = 120;
pub const PELLET_RADIUS: f32 = 5.0;
// Extra reach added to the pellet radius for the head-to-pellet check.
pub const PELLET_PICKUP_MARGIN: f32 = 10.0;

// Snake
pub const INITIAL_SNAKE_LENGTH: usize = 10;
// World units per frame.
pub const SNAKE_SPEED: f32 = 5.0;
pub const SNAKE_SEGMENT_RADIUS: f32 = 5.0;
// Below this distance to the target the head stays put.
pub const MOVE_EPSILON: f32 = 1.0;

// Frames between two `move` reports sent to the relay.
pub const MOVE_REPORT_INTERVAL: u64 = 6;
