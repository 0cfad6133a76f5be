// Tuning constants for the background animations. Distances are CSS pixels,
// speeds are pixels per second, phases are radians.

use std::time::Duration;

// Random node network
pub const NODE_AREA_PX: f32 = 80_000.0; // one node per this many square pixels
pub const NODE_SIZE_MIN: f32 = 1.0;
pub const NODE_SIZE_SPAN: f32 = 2.0; // size in [MIN, MIN + SPAN)
pub const CONNECTION_DISTANCE: f32 = 120.0; // connect pairs closer than this
pub const GLOW_RADIUS_FACTOR: f32 = 4.0; // outer glow radius = size * factor
pub const CONNECTION_ALPHA_SCALE: f32 = 0.15; // trace alpha = opacity * scale
pub const CONNECTION_LINE_WIDTH: f32 = 1.0;

// Line rain
pub const DROP_SPACING_PX: f32 = 24.0; // one drop per this many horizontal pixels
pub const DROP_SPEED_MIN: f32 = 90.0;
pub const DROP_SPEED_SPAN: f32 = 150.0;
pub const DROP_LENGTH_MIN: f32 = 8.0;
pub const DROP_LENGTH_SPAN: f32 = 28.0;
pub const DROP_EXIT_MARGIN: f32 = 20.0; // wrap once the tail is this far below the viewport
pub const DROP_LINE_WIDTH: f32 = 1.2;
pub const FADE_ALPHA: f32 = 0.18; // overlay alpha used instead of a hard clear

// Glyph rain
pub const RAIN_COLUMN_SPACING: f32 = 40.0;
pub const STARTUP_COLUMN_STAGGER: Duration = Duration::from_millis(100);
pub const COLUMN_SPAWN_INTERVAL: Duration = Duration::from_millis(300);
pub const SYMBOL_STAGGER: Duration = Duration::from_millis(80);
pub const SYMBOLS_PER_COLUMN_MIN: usize = 5;
pub const SYMBOLS_PER_COLUMN_MAX: usize = 12; // inclusive
pub const GLYPH_X_JITTER: f32 = 10.0; // +/- around the column x
pub const GLYPH_START_Y: f32 = -50.0;
pub const GLYPH_DURATION_MIN_SEC: f32 = 6.0;
pub const GLYPH_DURATION_SPAN_SEC: f32 = 8.0;
pub const GLYPH_DELAY_MAX_SEC: f32 = 0.5;
pub const GLYPH_FONT_MIN_PX: f32 = 12.0;
pub const GLYPH_FONT_SPAN_PX: f32 = 10.0;
pub const GLYPH_REMOVAL_GRACE: Duration = Duration::from_secs(1);
pub const BINARY_GLYPH_PROBABILITY: f64 = 0.8;

pub const BINARY_SYMBOLS: &[&str] = &["0", "1", "0", "1", "0", "1", "01", "10", "11", "00"];
pub const OPERATOR_SYMBOLS: &[&str] = &["+", "-", "*", "/", "&", "|", "^", "~", "<", ">", "="];

// Lattice pulse
pub const LATTICE_SPACING: f32 = 60.0;
pub const LATTICE_ACTIVE_PROBABILITY: f64 = 0.3;
pub const LATTICE_LINK_PROBABILITY: f64 = 0.7;
pub const LATTICE_NEIGHBOR_RADIUS: f32 = 1.5; // grid units; admits diagonals (~1.41)
pub const LATTICE_SPEED_MIN: f32 = 0.8; // rad/s
pub const LATTICE_SPEED_SPAN: f32 = 1.6;
pub const LATTICE_NODE_RADIUS: f32 = 2.0;
pub const LATTICE_NODE_PULSE: f32 = 0.6; // radius grows by this fraction at full brightness
pub const LATTICE_IDLE_ALPHA: f32 = 0.12; // inactive lattice points
pub const LATTICE_LINK_ALPHA_BASE: f32 = 0.08;
pub const LATTICE_LINK_ALPHA_SPAN: f32 = 0.4;
pub const LATTICE_LINK_WIDTH_BASE: f32 = 0.5;
pub const LATTICE_LINK_WIDTH_SPAN: f32 = 1.0;

// Frame pacing
pub const MAX_FRAME_DT: Duration = Duration::from_millis(100);
