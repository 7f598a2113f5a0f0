//! Radial Ripple Lab: a grid of glyphs swept by a radial ripple that sounds
//! each cell as the wavefront reaches it.
//!
//! `core` is plain Rust and builds on any target. Everything else is the
//! browser frontend and only builds for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod input;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_start::start;

#[cfg(target_arch = "wasm32")]
mod web_start {
    use crate::constants::{CANVAS_ID, START_BUTTON_ID};
    use crate::core::{RippleEngine, RippleParams};
    use crate::{audio, dom, events, frame, input, overlay};
    use instant::Instant;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
        dom::sync_canvas_backing_size(canvas);
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            _ = window
                .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
        }
        resize_closure.forget();
    }

    // Browsers only allow audio after a gesture, so playback starts from the overlay button.
    fn wire_start_button(
        document: &web::Document,
        engine: &Rc<RefCell<RippleEngine>>,
        audio: Option<Rc<audio::AudioOut>>,
    ) {
        let engine = engine.clone();
        dom::add_click_listener(document, START_BUTTON_ID, move || {
            if let Some(a) = &audio {
                a.resume();
            }
            engine.borrow_mut().set_playing(true);
            if let Some(doc) = dom::window_document() {
                overlay::hide(&doc);
                overlay::update_hud(&doc, &engine.borrow());
            }
            log::info!("[start] playing");
        });
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("ripple-lab starting");

        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
        Ok(())
    }

    fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        wire_canvas_resize(&canvas);
        let ctx2d = dom::context_2d(&canvas)?;

        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let engine = Rc::new(RefCell::new(RippleEngine::new(RippleParams {
            seed,
            ..RippleParams::default()
        })?));
        let audio = audio::build_audio().map(Rc::new);

        wire_start_button(&document, &engine, audio.clone());
        events::wire_global_keydown(engine.clone(), audio.clone());
        events::wire_input_handlers(events::InputWiring {
            canvas: canvas.clone(),
            engine: engine.clone(),
            press: Rc::new(RefCell::new(None::<input::PressState>)),
        });
        overlay::update_hud(&document, &engine.borrow());

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            engine,
            canvas,
            ctx2d,
            audio,
            last_instant: Instant::now(),
            voices: Vec::new(),
        }));
        frame::start_loop(frame_ctx);
        Ok(())
    }
}
