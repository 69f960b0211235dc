// Ring placement for the project carousel. Card i of n sits rotated
// (360/n)*i degrees around the Y axis and pushed out to the ring radius.
// The continuous spin and its hover pause are host CSS animations on the
// parent; this side only places the cards.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::constants::CAROUSEL_RADIUS;

/// Ring angle in degrees for card `index` of `count`.
pub fn card_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    360.0 / count as f64 * index as f64
}

/// Inline transform placing card `index` of `count` on the ring.
pub fn card_transform(index: usize, count: usize) -> String {
    format!(
        "rotateY({}deg) translateZ({}px)",
        card_angle(index, count),
        CAROUSEL_RADIUS
    )
}

/// Arrange the host's children around the carousel ring. Returns the number
/// of cards placed; an empty host is a no-op.
#[wasm_bindgen]
pub fn arrange_carousel(host: &Element) -> Result<u32, JsValue> {
    let cards = host.children();
    let count = cards.length();

    for index in 0..count {
        let card = match cards.item(index) {
            Some(card) => card,
            None => continue,
        };
        if let Ok(card) = card.dyn_into::<HtmlElement>() {
            card.style().set_property(
                "transform",
                &card_transform(index as usize, count as usize),
            )?;
        }
    }

    Ok(count)
}
