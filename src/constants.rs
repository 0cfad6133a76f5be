// DOM hooks and canvas styling used by the web front-end.

// Element lookup
pub const CANVAS_ID: &str = "circuitCanvas";
pub const GLYPH_CONTAINER_SELECTOR: &str = ".logic-symbols-container";
pub const GLYPH_CLASS: &str = "logic-symbol";
pub const VARIANT_ATTRIBUTE: &str = "data-variant";

// Glyph nodes start this far above the top edge; CSS animates the fall.
pub const GLYPH_TOP_CSS: &str = "-50px";

// Canvas text
pub const GLYPH_FONT_FAMILY: &str = "'Courier New', monospace";

// Backing-store scale is capped so 4K/retina screens don't blow the fill rate.
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

/// `document.readyState` is anything past "loading".
pub fn dom_is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// CSS font shorthand for a glyph of `px` pixels.
pub fn glyph_font(px: f32) -> String {
    format!("{:.0}px {}", px, GLYPH_FONT_FAMILY)
}

/// `"<n>px"` for inline style properties.
pub fn css_px(v: f32) -> String {
    format!("{:.1}px", v)
}

/// `"<n>s"` for CSS animation timings.
pub fn css_seconds(secs: f32) -> String {
    format!("{:.2}s", secs)
}
