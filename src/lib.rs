//! Animated behavior layer for a single-page portfolio site, compiled to
//! WebAssembly. The host page owns all markup, styling, and content; this
//! crate owns the moving parts: the particle-field canvas backdrop, scroll
//! reveals, the staggered name reveal, the custom cursor, and carousel card
//! placement.
//!
//! Everything mounts onto elements the host passes in, and everything that
//! registers a timer or listener hands back a handle whose `cancel` releases
//! all of it again.

mod utils;

pub mod backdrop;
pub mod carousel;
pub mod color;
pub mod constants;
pub mod cursor;
pub mod field;
pub mod frame_loop;
pub mod listener;
pub mod name_reveal;
pub mod particle;
pub mod renderer;
pub mod reveal;

pub use backdrop::ParticleBackdrop;
pub use carousel::arrange_carousel;
pub use cursor::CursorFollower;
pub use name_reveal::animate_name;
pub use reveal::{RevealDirection, ScrollReveal};

use wasm_bindgen::prelude::*;
use web_sys::console;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// One-time setup: panic messages and leveled logging routed to the browser
/// console. Call once before mounting anything.
#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Scoped console.time span; the measurement ends when the value drops.
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
