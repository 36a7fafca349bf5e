use wasm_bindgen::JsCast;
use wave_core::Viewport;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once on the next animation frame.
pub fn next_frame(f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = wasm_bindgen::closure::Closure::once_into_js(f);
        _ = w.request_animation_frame(cb.unchecked_ref());
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn after_ms(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = wasm_bindgen::closure::Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

/// Current window size and device pixel ratio.
pub fn measure_viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Viewport::measure(width, height, w.device_pixel_ratio()))
}

pub fn is_coarse_pointer(query: &str) -> bool {
    web::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

/// Canvas created for offscreen use; never attached to the document.
pub fn detached_canvas(document: &web::Document) -> Option<web::HtmlCanvasElement> {
    document
        .create_element("canvas")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

pub fn for_each_match(
    document: &web::Document,
    selector: &str,
    mut f: impl FnMut(web::HtmlElement),
) {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector}");
        return;
    };
    for i in 0..list.length() {
        if let Some(el) = list
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        {
            f(el);
        }
    }
}
