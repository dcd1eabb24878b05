use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Attach `handler` for `event` on the element with `element_id`; the closure
/// lives for the page lifetime.
pub fn add_listener(
    document: &web::Document,
    element_id: &str,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("[dom] missing #{}", element_id);
        return;
    };
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Set the canvas backing store and CSS box to exactly `width x height`.
pub fn fit_canvas(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    canvas.set_width(width);
    canvas.set_height(height);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{width}px"));
    _ = style.set_property("height", &format!("{height}px"));
}

pub fn inner_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Offer `bytes` to the user as a file download.
pub fn download_bytes(bytes: &[u8], file_name: &str, mime: &str) -> anyhow::Result<()> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes).into());
    let options = web::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let url = web::Url::create_object_url_with_blob(&blob).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let anchor: web::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    _ = web::Url::revoke_object_url(&url);
    Ok(())
}
