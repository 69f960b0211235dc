// Tunables for the animated portfolio effects. Distances and sizes are CSS
// pixels; velocities are pixels per frame. These values define the look and
// are shared by the simulation and the renderer so they live in one place.

use crate::color::Color;

// Particle field
pub const PARTICLE_COUNT: usize = 80;
pub const MAX_DRIFT: f64 = 0.25; // per-axis velocity magnitude bound
pub const MIN_RADIUS: f64 = 1.0;
pub const MAX_RADIUS: f64 = 3.0;

// Connective lines
pub const LINK_DISTANCE: f64 = 150.0;
pub const LINK_ALPHA_BASE: f64 = 0.15;
pub const LINK_ALPHA_FALLOFF: f64 = 1000.0; // alpha drops 1/1000 per pixel of separation
pub const POINTER_LINK_DISTANCE: f64 = 200.0;
pub const POINTER_LINK_ALPHA_BASE: f64 = 0.3;
pub const POINTER_LINK_ALPHA_FALLOFF: f64 = 700.0;
pub const LINK_LINE_WIDTH: f64 = 0.5;
pub const POINTER_LINE_WIDTH: f64 = 1.0;

// Painting
pub const PARTICLE_COLOR: Color = Color::from_u32(0x00ff88ff);
pub const POINTER_LINK_COLOR: Color = Color::from_u32(0xff0066ff);
pub const BACKDROP_COLOR: Color = Color::from_u32(0x0a0a0fff);
pub const PARTICLE_ALPHA: f64 = 0.8;
pub const TRAIL_ALPHA: f64 = 0.1; // low-alpha fill leaves short motion trails instead of a hard clear

// Page effects
pub const CAROUSEL_RADIUS: f64 = 340.0;
pub const CHAR_STAGGER_MS: u32 = 100;
pub const REVEAL_OFFSET_PX: f64 = 60.0;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_TRANSITION: &str = "0.8s cubic-bezier(0.16, 1, 0.3, 1)";
pub const CURSOR_RING_SIZE: f64 = 20.0;
pub const CURSOR_DOT_SIZE: f64 = 6.0;
