use crate::layout;
use canvas_core::{Session, Vec2};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<Session>>,
    pub epoch: Instant,
}

pub fn wire_pointer(canvas: web::HtmlCanvasElement, session: Rc<RefCell<Session>>) {
    let w = PointerWiring {
        canvas,
        session,
        epoch: Instant::now(),
    };
    listen(&w, "pointerdown", |w, ev| {
        if ev.button() == 0 {
            w.session.borrow_mut().pointer_down(pointer_canvas_px(ev, &w.canvas));
        }
    });
    listen(&w, "pointermove", |w, ev| {
        let now = w.epoch.elapsed();
        w.session
            .borrow_mut()
            .pointer_move(pointer_canvas_px(ev, &w.canvas), now);
    });
    listen(&w, "pointerup", |w, _| w.session.borrow_mut().pointer_up());
    listen(&w, "pointercancel", |w, _| w.session.borrow_mut().pointer_up());
    listen(&w, "pointerleave", |w, _| w.session.borrow_mut().pointer_leave());
}

fn listen(w: &PointerWiring, event: &str, handler: fn(&PointerWiring, &web::PointerEvent)) {
    let w2 = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        handler(&w2, &ev);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let (x, y) = layout::client_to_canvas(
        (ev.client_x() as f64, ev.client_y() as f64),
        (rect.left(), rect.top()),
        (rect.width(), rect.height()),
        (canvas.width(), canvas.height()),
    );
    Vec2::new(x, y)
}
