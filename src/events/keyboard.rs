use crate::actions;
use crate::keymap::{keydown_action, keyup_action, swallows_default, KeyAction};
use canvas_core::Session;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_keyboard(session: Rc<RefCell<Session>>) {
    let Some(window) = web::window() else {
        return;
    };

    let down_session = session.clone();
    let keydown = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if typing_in_field(&ev) {
            return;
        }
        let code = ev.code();
        if swallows_default(&code) {
            ev.prevent_default();
        }
        if let Some(action) = keydown_action(&code, ev.repeat()) {
            apply(&down_session, action);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let up_session = session.clone();
    let keyup = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if let Some(action) = keyup_action(&ev.code()) {
            apply(&up_session, action);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());
    keyup.forget();

    // a released Shift is never seen once the page loses focus
    let blur = Closure::wrap(Box::new(move || {
        session.borrow_mut().set_modifier(false);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref());
    blur.forget();
}

fn apply(session: &RefCell<Session>, action: KeyAction) {
    match action {
        KeyAction::Command(command) => actions::dispatch(session, command),
        KeyAction::Modifier(held) => session.borrow_mut().set_modifier(held),
    }
}

fn typing_in_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .map(|t| t.has_type::<web::HtmlInputElement>() || t.has_type::<web::HtmlSelectElement>())
        .unwrap_or(false)
}
