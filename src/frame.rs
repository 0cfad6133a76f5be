use circuit_core::{BackgroundAnimator, GlyphEvent};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::canvas::CanvasPainter;
use crate::dom;
use crate::glyphs::GlyphLayer;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub animator: BackgroundAnimator,
    pub painter: CanvasPainter,
    /// DOM glyph host; `None` means glyphs are painted on the canvas.
    pub glyph_layer: Option<GlyphLayer>,
    pub events: Vec<GlyphEvent>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        self.events.clear();
        self.animator.frame(dt, &mut self.painter, &mut self.events);
        if let Some(layer) = &mut self.glyph_layer {
            layer.apply(&self.events);
        }
    }

    /// Match the canvas to the window and regenerate the population.
    pub fn resize(&mut self) {
        if let Some((viewport, dpr)) = dom::sync_canvas_to_window(&self.canvas) {
            self.painter.set_scale(dpr);
            self.animator.resize(viewport);
        }
    }
}

pub fn wire_resize(frame_ctx: Rc<RefCell<FrameContext>>) {
    dom::add_window_listener("resize", move || {
        frame_ctx.borrow_mut().resize();
    });
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
