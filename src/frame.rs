use crate::dom;
use crate::overlay::StatusOverlay;
use crate::render::Presenter;
use canvas_core::{Session, Surface, BACKGROUND};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub presenter: Presenter,
    pub surface: Surface,
    pub overlay: StatusOverlay,
}

impl FrameContext {
    pub fn new(session: Rc<RefCell<Session>>, presenter: Presenter) -> Self {
        let (w, h) = session.borrow().viewport();
        Self {
            session,
            presenter,
            surface: Surface::new(w, h, BACKGROUND),
            overlay: StatusOverlay::default(),
        }
    }

    pub fn frame(&mut self) {
        // no context: skip before ticking so the scroll does not advance unseen
        if self.presenter.acquire().is_none() {
            log::debug!("[frame] 2d context unavailable; skipping");
            return;
        }

        let status = {
            let mut session = self.session.borrow_mut();
            let (w, h) = session.viewport();
            if (self.surface.width(), self.surface.height()) != (w, h) {
                self.surface.reset(w, h, BACKGROUND);
            }
            session.frame(&mut self.surface);
            session.status()
        };

        if let Err(e) = self.presenter.present(&self.surface) {
            log::warn!("[frame] present failed: {:?}", e);
        }
        if let Some(document) = dom::window_document() {
            self.overlay.update(&document, status);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
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
