use crate::audio::AudioOut;
use crate::core::{RippleEngine, VoiceRequest};
use crate::input;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<RippleEngine>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub audio: Option<Rc<AudioOut>>,
    pub last_instant: Instant,
    pub voices: Vec<VoiceRequest>,
}

impl FrameContext {
    /// One animation frame: engine pipeline, then audio for this frame's
    /// triggers, then drawing from the freshly resolved amplitudes.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        self.voices.clear();
        let fired = self.engine.borrow_mut().tick(dt, &mut self.voices).len();
        if fired > 0 {
            log::trace!("[frame] {} triggers", fired);
        }

        if let Some(audio) = &self.audio {
            for v in &self.voices {
                audio.play(v);
            }
        }

        let eng = self.engine.borrow();
        let geometry = input::geometry_for(&self.canvas, eng.cols(), eng.rows());
        render::draw_scene(
            &self.ctx2d,
            &self.canvas,
            &geometry,
            eng.cells(),
            eng.field().origin,
            eng.is_playing(),
        );
    }
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
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame error: {:?}", e);
        }
    }
}
