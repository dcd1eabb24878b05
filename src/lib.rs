#![cfg(target_arch = "wasm32")]
use canvas_core::{Session, Settings};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod actions;
mod constants;
mod dom;
mod events;
mod frame;
mod keymap;
mod layout;
mod overlay;
mod render;

use constants::CANVAS_ID;

/// Keep the canvas sized to the window and tell the session about it.
fn wire_viewport_resize(canvas: &web::HtmlCanvasElement, session: &Rc<RefCell<Session>>) {
    let canvas_resize = canvas.clone();
    let session_resize = session.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = layout::viewport_size(dom::inner_width());
        if (canvas_resize.width(), canvas_resize.height()) == (w, h) {
            return;
        }
        dom::fit_canvas(&canvas_resize, w, h);
        session_resize.borrow_mut().resize_viewport(w, h);
        log::debug!("[viewport] {}x{}", w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("canvas-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let (width, height) = layout::viewport_size(dom::inner_width());
    dom::fit_canvas(&canvas, width, height);
    log::info!("[viewport] {}x{}", width, height);

    let session = Rc::new(RefCell::new(Session::new(
        Settings::default(),
        width,
        height,
    )));

    wire_viewport_resize(&canvas, &session);
    events::wire_panel(&document, session.clone());
    events::wire_keyboard(session.clone());
    events::wire_pointer(canvas.clone(), session.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        session,
        render::Presenter::new(canvas),
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
