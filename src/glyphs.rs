use circuit_core::{Glyph, GlyphEvent, GlyphId};
use fnv::FnvHashMap;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;

/// Mirrors live glyphs as `div.logic-symbol` children of the glyph container.
/// The stylesheet's keyframes do the falling; this layer only inserts nodes
/// and removes them when the animator says they have expired.
pub struct GlyphLayer {
    document: web::Document,
    container: web::Element,
    nodes: FnvHashMap<GlyphId, web::HtmlElement>,
}

impl GlyphLayer {
    pub fn new(document: web::Document, container: web::Element) -> Self {
        Self {
            document,
            container,
            nodes: FnvHashMap::default(),
        }
    }

    pub fn apply(&mut self, events: &[GlyphEvent]) {
        for ev in events {
            match ev {
                GlyphEvent::Spawn(glyph) => {
                    if let Some(el) = self.create_node(glyph) {
                        self.nodes.insert(glyph.id, el);
                    }
                }
                GlyphEvent::Expire(id) => {
                    if let Some(el) = self.nodes.remove(id) {
                        el.remove();
                    }
                }
            }
        }
    }

    fn create_node(&self, glyph: &Glyph) -> Option<web::HtmlElement> {
        let el = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        el.set_class_name(GLYPH_CLASS);
        el.set_text_content(Some(glyph.text));
        let style = el.style();
        _ = style.set_property("left", &css_px(glyph.x));
        _ = style.set_property("top", GLYPH_TOP_CSS);
        _ = style.set_property("font-size", &css_px(glyph.font_px));
        _ = style.set_property(
            "animation-duration",
            &css_seconds(glyph.duration.as_secs_f32()),
        );
        _ = style.set_property("animation-delay", &css_seconds(glyph.delay.as_secs_f32()));
        if let Err(e) = self.container.append_child(&el) {
            log::warn!("[glyphs] append failed: {:?}", e);
            return None;
        }
        Some(el)
    }
}
