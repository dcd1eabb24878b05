use crate::constants::{
    BRUSH_SIZE_ID, CANVAS_LENGTH_ID, FULL_PAINT_INDICATOR_ID, HIDDEN_CLASS, RECORDING_CLASS,
    RECORD_BUTTON_ID, RECORD_LABEL_ID, RECORD_PROGRESS_ID, SCROLL_SPEED_ID, START_LABEL,
    STOP_LABEL,
};
use crate::dom;
use canvas_core::{SessionStatus, Settings};
use web_sys as web;

/// Last status pushed to the DOM, so unchanged frames touch nothing.
#[derive(Default)]
pub struct StatusOverlay {
    last: Option<SessionStatus>,
}

impl StatusOverlay {
    pub fn update(&mut self, document: &web::Document, status: SessionStatus) {
        if self.last == Some(status) {
            return;
        }
        let was_recording = self.last.map(|s| s.recording);
        self.last = Some(status);

        if let Some(el) = document.get_element_by_id(RECORD_PROGRESS_ID) {
            el.set_text_content(Some(&status.to_string()));
            set_hidden(&el, !status.recording);
        }
        if let Some(el) = document.get_element_by_id(FULL_PAINT_INDICATOR_ID) {
            set_hidden(&el, !status.full_paint_mode);
        }
        if was_recording != Some(status.recording) {
            set_recording(document, status.recording);
        }
    }
}

fn set_recording(document: &web::Document, recording: bool) {
    if let Some(el) = document.get_element_by_id(RECORD_LABEL_ID) {
        el.set_text_content(Some(if recording { STOP_LABEL } else { START_LABEL }));
    }
    if let Some(el) = document.get_element_by_id(RECORD_BUTTON_ID) {
        let cl = el.class_list();
        _ = if recording {
            cl.add_1(RECORDING_CLASS)
        } else {
            cl.remove_1(RECORDING_CLASS)
        };
    }
    // settings are locked for the whole recording
    if let Some(el) = dom::element_by_id::<web::HtmlSelectElement>(document, BRUSH_SIZE_ID) {
        el.set_disabled(recording);
    }
    if let Some(el) = dom::element_by_id::<web::HtmlSelectElement>(document, SCROLL_SPEED_ID) {
        el.set_disabled(recording);
    }
    if let Some(el) = dom::element_by_id::<web::HtmlInputElement>(document, CANVAS_LENGTH_ID) {
        el.set_disabled(recording);
    }
}

#[inline]
fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    _ = if hidden {
        cl.add_1(HIDDEN_CLASS)
    } else {
        cl.remove_1(HIDDEN_CLASS)
    };
}

/// Reflect `settings` in the panel controls (after keyboard changes).
pub fn sync_settings(document: &web::Document, settings: Settings) {
    if let Some(el) = dom::element_by_id::<web::HtmlSelectElement>(document, BRUSH_SIZE_ID) {
        el.set_value(settings.brush_size.name());
    }
    if let Some(el) = dom::element_by_id::<web::HtmlSelectElement>(document, SCROLL_SPEED_ID) {
        el.set_value(settings.scroll_speed.name());
    }
    if let Some(el) = dom::element_by_id::<web::HtmlInputElement>(document, CANVAS_LENGTH_ID) {
        el.set_value(&settings.canvas_length.to_string());
    }
}
