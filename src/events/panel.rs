use crate::actions;
use crate::constants::{
    BRUSH_SIZE_ID, CANVAS_LENGTH_ID, CLEAR_BUTTON_ID, EXPORT_BUTTON_ID, RECORD_BUTTON_ID,
    SCROLL_SPEED_ID,
};
use crate::dom;
use crate::overlay;
use canvas_core::{BrushSize, CanvasLength, Command, ScrollSpeed, Session};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Settings panel and action buttons.
pub fn wire_panel(document: &web::Document, session: Rc<RefCell<Session>>) {
    overlay::sync_settings(document, session.borrow().settings());

    for (id, command) in [
        (RECORD_BUTTON_ID, Command::ToggleRecording),
        (CLEAR_BUTTON_ID, Command::Clear),
        (EXPORT_BUTTON_ID, Command::Export),
    ] {
        let s = session.clone();
        dom::add_listener(document, id, "click", move |ev| {
            // keep Space from re-activating a focused button
            if let Some(el) = ev
                .current_target()
                .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
            {
                _ = el.blur();
            }
            actions::dispatch(&s, command);
        });
    }

    let s = session.clone();
    dom::add_listener(document, BRUSH_SIZE_ID, "change", move |ev| {
        match select_value(&ev).parse::<BrushSize>() {
            Ok(size) => actions::dispatch(&s, Command::SetBrush(size)),
            Err(e) => log::warn!("[panel] {}", e),
        }
    });

    let s = session.clone();
    dom::add_listener(document, SCROLL_SPEED_ID, "change", move |ev| {
        match select_value(&ev).parse::<ScrollSpeed>() {
            Ok(speed) => actions::dispatch(&s, Command::SetSpeed(speed)),
            Err(e) => log::warn!("[panel] {}", e),
        }
    });

    // while typing only valid lengths are taken; leaving the field clamps
    let s = session.clone();
    dom::add_listener(document, CANVAS_LENGTH_ID, "input", move |ev| {
        if let Some(length) = input_of(&ev).and_then(|i| CanvasLength::accept_live(&i.value())) {
            s.borrow_mut().set_canvas_length(length);
        }
    });

    dom::add_listener(document, CANVAS_LENGTH_ID, "blur", move |ev| {
        let Some(input) = input_of(&ev) else {
            return;
        };
        let length = CanvasLength::clamp_input(&input.value());
        input.set_value(&length.to_string());
        session.borrow_mut().set_canvas_length(length);
    });
}

fn select_value(ev: &web::Event) -> String {
    ev.current_target()
        .and_then(|t| t.dyn_into::<web::HtmlSelectElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default()
}

fn input_of(ev: &web::Event) -> Option<web::HtmlInputElement> {
    ev.current_target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
}
