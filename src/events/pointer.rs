use crate::core::{action_for_press, classify_press, CellAction, RippleEngine};
use crate::input::{self, PressState};
use crate::overlay;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub engine: Rc<RefCell<RippleEngine>>,
    pub press: Rc<RefCell<Option<PressState>>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointerup(&w);
}

fn current_cell(w: &InputWiring, ev: &web::PointerEvent) -> Option<(u32, u32)> {
    let (cols, rows) = {
        let eng = w.engine.borrow();
        (eng.cols(), eng.rows())
    };
    input::pointer_cell(ev, &w.canvas, cols, rows)
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let cell = current_cell(&w, &ev);
        *w.press.borrow_mut() = Some(PressState {
            started: Instant::now(),
            cell,
        });
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(press) = w.press.borrow_mut().take() else {
            return;
        };
        let up_cell = current_cell(&w, &ev);
        // a press only counts if it starts and ends on the same cell
        if let (Some((col, row)), true) = (press.cell, press.cell == up_cell) {
            let held_ms = press.started.elapsed().as_secs_f64() * 1000.0;
            let action = action_for_press(classify_press(held_ms), ev.shift_key(), ev.alt_key());
            let result = w.engine.borrow_mut().apply_action(col, row, action);
            match result {
                Ok(()) if action == CellAction::SetOrigin => {
                    log::info!("[pointer] origin -> ({}, {})", col, row);
                    if let Some(doc) = crate::dom::window_document() {
                        overlay::update_hud(&doc, &w.engine.borrow());
                    }
                }
                Ok(()) => log::debug!("[pointer] {:?} on ({}, {})", action, col, row),
                Err(e) => log::warn!("[pointer] {}", e),
            }
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
