#![cfg(target_arch = "wasm32")]
use circuit_core::{AnimatorConfig, BackgroundAnimator};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod frame;
mod glyphs;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("circuit-web starting");

    let Some(document) = dom::window_document() else {
        log::warn!("no document; background disabled");
        return Ok(());
    };
    let doc = document.clone();
    dom::on_dom_ready(&document, move || {
        if let Err(e) = init(doc) {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init(document: web::Document) -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    // A page without the canvas simply has no animated background.
    let Some(canvas) = dom::find_canvas(&document) else {
        log::info!("#{} not found; skipping background", constants::CANVAS_ID);
        return Ok(());
    };
    let painter = canvas::CanvasPainter::from_canvas(&canvas)?;
    let (viewport, dpr) = dom::sync_canvas_to_window(&canvas)
        .ok_or_else(|| anyhow::anyhow!("no window"))?;
    painter.set_scale(dpr);
    if let Err(e) = viewport.drawable() {
        log::info!("{e}; background waits for a resize");
    }

    let variant = dom::read_variant(&canvas);
    let mut animator = BackgroundAnimator::new(AnimatorConfig::with_variant(variant), viewport);

    let glyph_layer = if variant == circuit_core::Variant::GlyphRain {
        match dom::find_glyph_container(&document) {
            Some(container) => Some(glyphs::GlyphLayer::new(document.clone(), container)),
            None => {
                log::warn!(
                    "{} not found; drawing glyphs on the canvas",
                    constants::GLYPH_CONTAINER_SELECTOR
                );
                animator.set_paint_glyphs(true);
                None
            }
        }
    } else {
        None
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        animator,
        painter,
        glyph_layer,
        events: Vec::new(),
        last_instant: Instant::now(),
    }));
    frame::wire_resize(frame_ctx.clone());
    frame::start_loop(frame_ctx);
    Ok(())
}
