use crate::dom;
use crate::overlay;
use canvas_core::{export_file_name, Command, CommandOutcome, ExportImage, Session};
use std::cell::RefCell;

/// Apply `command` and carry out its page-side effects.
pub fn dispatch(session: &RefCell<Session>, command: Command) {
    let outcome = session.borrow_mut().apply(command);
    match outcome {
        CommandOutcome::Ignored => log::debug!("[cmd] {:?} ignored", command),
        CommandOutcome::Applied => {
            if let Some(document) = dom::window_document() {
                overlay::sync_settings(&document, session.borrow().settings());
            }
        }
        CommandOutcome::Export(image) => download_png(&image),
    }
}

fn download_png(image: &ExportImage) {
    let file_name = export_file_name(js_sys::Date::now() as u64);
    let result = image
        .encode_png()
        .map_err(anyhow::Error::from)
        .and_then(|bytes| dom::download_bytes(&bytes, &file_name, "image/png"));
    match result {
        Ok(()) => log::info!("[export] downloaded {}", file_name),
        Err(e) => log::error!("[export] {} failed: {:?}", file_name, e),
    }
}
