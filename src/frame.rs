use crate::core::{FrameClock, LoopToken, ParticleField};
use crate::input;
use crate::render::FieldPainter;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: ParticleField,
    pub painter: FieldPainter,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub clock: FrameClock,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let pointer = self.pointer.borrow().position;
        self.field.step(pointer);
        self.painter.paint(&self.field, self.clock.elapsed_sec());
    }

    /// New canvas size: the whole field is thrown away and rebuilt.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.field.reset(Vec2::new(width as f32, height as f32));
        log::info!(
            "[particles] reset {} particles for {}x{}",
            self.field.len(),
            width,
            height
        );
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` until `token` is stopped.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, token: LoopToken) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !token.tick() {
            log::info!("[particles] loop stopped after {} frames", token.frames());
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
