//! Browser-side tests for the DOM-facing surfaces: mount and teardown
//! lifecycles, canvas sizing, and the inline styles each effect writes.
//! The frame-by-frame simulation rules are covered by native unit tests
//! beside each module.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

use rust_canvas_portfolio_backend::{
    animate_name, arrange_carousel, CursorFollower, ParticleBackdrop, RevealDirection,
    ScrollReveal,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mounted_canvas() -> HtmlCanvasElement {
    let canvas: HtmlCanvasElement = document()
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    document().body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn mounted_element(tag: &str) -> HtmlElement {
    let element: HtmlElement = document().create_element(tag).unwrap().dyn_into().unwrap();
    document().body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn backdrop_mounts_with_full_population() {
    let mut backdrop = ParticleBackdrop::mount(mounted_canvas()).unwrap();

    assert!(backdrop.is_active());
    assert_eq!(backdrop.particle_count(), 80);
    assert_eq!(backdrop.listener_count(), 2);

    backdrop.cancel();
}

#[wasm_bindgen_test]
fn backdrop_sizes_canvas_to_the_window() {
    let canvas = mounted_canvas();
    let mut backdrop = ParticleBackdrop::mount(canvas.clone()).unwrap();

    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    let height = window.inner_height().unwrap().as_f64().unwrap() as u32;
    assert_eq!(canvas.width(), width);
    assert_eq!(canvas.height(), height);

    backdrop.cancel();
}

#[wasm_bindgen_test]
fn backdrop_cancel_is_total_and_idempotent() {
    let mut backdrop = ParticleBackdrop::mount(mounted_canvas()).unwrap();

    backdrop.cancel();
    assert!(!backdrop.is_active());
    assert_eq!(backdrop.listener_count(), 0);

    // A second cancel finds nothing left to release.
    backdrop.cancel();
    assert!(!backdrop.is_active());
    assert_eq!(backdrop.listener_count(), 0);
}

#[wasm_bindgen_test]
fn name_reveal_builds_staggered_spans() {
    let host = mounted_element("h1");
    host.set_text_content(Some("THOMAS"));

    let count = animate_name(&host).unwrap();
    assert_eq!(count, 6);
    assert_eq!(host.children().length(), 6);

    let third: HtmlElement = host.children().item(2).unwrap().dyn_into().unwrap();
    assert_eq!(third.class_name(), "char");
    assert_eq!(third.text_content().unwrap(), "O");
    assert_eq!(
        third.style().get_property_value("animation-delay").unwrap(),
        "200ms"
    );
}

#[wasm_bindgen_test]
fn name_reveal_keeps_word_gaps() {
    let host = mounted_element("h1");
    host.set_text_content(Some("A B"));

    assert_eq!(animate_name(&host).unwrap(), 3);
    let gap: HtmlElement = host.children().item(1).unwrap().dyn_into().unwrap();
    assert_eq!(gap.text_content().unwrap(), "\u{a0}");
}

#[wasm_bindgen_test]
fn carousel_places_each_card_on_the_ring() {
    let host = mounted_element("div");
    for _ in 0..3 {
        let card = document().create_element("div").unwrap();
        host.append_child(&card).unwrap();
    }

    assert_eq!(arrange_carousel(&host).unwrap(), 3);

    let second: HtmlElement = host.children().item(1).unwrap().dyn_into().unwrap();
    assert_eq!(
        second.style().get_property_value("transform").unwrap(),
        "rotateY(120deg) translateZ(340px)"
    );
}

#[wasm_bindgen_test]
fn empty_carousel_is_a_no_op() {
    let host = mounted_element("div");
    assert_eq!(arrange_carousel(&host).unwrap(), 0);
}

#[wasm_bindgen_test]
fn reveal_starts_hidden_and_cancels_cleanly() {
    let element = mounted_element("section");
    let mut reveal = ScrollReveal::mount(element.clone(), RevealDirection::Up, 100).unwrap();

    assert_eq!(element.style().get_property_value("opacity").unwrap(), "0");
    assert_eq!(
        element.style().get_property_value("transform").unwrap(),
        "translateY(60px)"
    );
    assert!(reveal.is_active());

    reveal.cancel();
    assert!(!reveal.is_active());
    reveal.cancel();
}

#[wasm_bindgen_test]
fn cursor_follower_detaches_all_listeners() {
    let ring = mounted_element("div");
    let dot = mounted_element("div");
    let mut cursor = CursorFollower::mount(ring, dot).unwrap();

    assert_eq!(cursor.listener_count(), 3);

    cursor.cancel();
    assert_eq!(cursor.listener_count(), 0);
    cursor.cancel();
}
