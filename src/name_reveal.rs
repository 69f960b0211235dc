// Per-character reveal for the hero name. The text is split into one span
// per character, each entering on a fixed stagger. The entrance keyframes
// themselves live in the host stylesheet under the `char` class; this side
// only builds the spans and sets their delays.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::constants::CHAR_STAGGER_MS;

/// Animation delay for the character at `index`.
pub fn char_delay_ms(index: usize) -> u32 {
    index as u32 * CHAR_STAGGER_MS
}

/// Replace `element`'s text with one `char` span per character, each with
/// its staggered `animation-delay`. Returns the number of spans created.
#[wasm_bindgen]
pub fn animate_name(element: &Element) -> Result<u32, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let text = element.text_content().unwrap_or_default();
    element.set_text_content(None);

    let mut count = 0;
    for (index, ch) in text.chars().enumerate() {
        let span: HtmlElement = document.create_element("span")?.dyn_into()?;
        span.set_class_name("char");
        span.style()
            .set_property("animation-delay", &format!("{}ms", char_delay_ms(index)))?;
        // Whitespace collapses inside the spans; keep the gap visible.
        if ch.is_whitespace() {
            span.set_text_content(Some("\u{a0}"));
        } else {
            span.set_text_content(Some(&ch.to_string()));
        }
        element.append_child(&span)?;
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_delays_grow_by_the_stagger() {
        assert_eq!(char_delay_ms(0), 0);
        assert_eq!(char_delay_ms(1), 100);
        assert_eq!(char_delay_ms(5), 500);
    }
}
