use crate::constants::{HUD_ID, START_OVERLAY_ID};
use crate::core::RippleEngine;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Refresh the status line with tempo, speed, origin and play state.
pub fn update_hud(document: &web::Document, engine: &RippleEngine) {
    if let Some(el) = document.get_element_by_id(HUD_ID) {
        let (oc, or) = engine.field().origin;
        let text = format!(
            "{} • BPM: {:.0} • Speed: {:.2}× • Origin: ({}, {}) • Grid: {}×{}",
            if engine.is_playing() { "Playing" } else { "Paused" },
            engine.params.bpm,
            engine.params.speed_multiplier,
            oc,
            or,
            engine.cols(),
            engine.rows(),
        );
        el.set_text_content(Some(&text));
    }
}
