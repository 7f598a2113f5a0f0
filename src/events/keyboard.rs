use crate::audio::AudioOut;
use crate::core::constants::{BPM_STEP, SPEED_STEP_RATIO};
use crate::core::{command_for_key, KeyCommand, RippleEngine};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn export_snapshot(engine: &RippleEngine) {
    match engine.snapshot().to_json() {
        Ok(json) => log::info!("[export] {}", json),
        Err(e) => log::error!("[export] serialize error: {}", e),
    }
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    engine: &Rc<RefCell<RippleEngine>>,
    audio: Option<&AudioOut>,
) {
    let Some(cmd) = command_for_key(&ev.key()) else {
        return;
    };
    let document = crate::dom::window_document();
    {
        let mut eng = engine.borrow_mut();
        match cmd {
            KeyCommand::TogglePlay => {
                let playing = eng.toggle_playing();
                if playing {
                    if let Some(a) = audio {
                        a.resume();
                    }
                }
                log::info!("[keys] playing={}", playing);
            }
            KeyCommand::TempoUp => eng.adjust_bpm(BPM_STEP),
            KeyCommand::TempoDown => eng.adjust_bpm(-BPM_STEP),
            KeyCommand::SpeedUp => {
                let s = eng.params.speed_multiplier * SPEED_STEP_RATIO;
                eng.set_speed_multiplier(s);
            }
            KeyCommand::SpeedDown => {
                let s = eng.params.speed_multiplier / SPEED_STEP_RATIO;
                eng.set_speed_multiplier(s);
            }
            KeyCommand::Reseed => eng.reseed(None),
            KeyCommand::Export => export_snapshot(&eng),
            KeyCommand::ToggleOverlay => {
                if let Some(doc) = &document {
                    overlay::toggle(doc);
                }
            }
            KeyCommand::CenterOrigin => eng.center_origin(),
        }
    }
    if matches!(
        cmd,
        KeyCommand::TogglePlay | KeyCommand::TempoUp | KeyCommand::TempoDown
    ) {
        // keep arrows and space from scrolling the page
        ev.prevent_default();
    }
    if let Some(doc) = &document {
        overlay::update_hud(doc, &engine.borrow());
    }
}

pub fn wire_global_keydown(engine: Rc<RefCell<RippleEngine>>, audio: Option<Rc<AudioOut>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &engine, audio.as_deref());
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
