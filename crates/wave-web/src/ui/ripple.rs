use crate::constants::{RIPPLE_CLASS, RIPPLE_SELECTOR};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn ensure_style(el: &web::HtmlElement, prop: &str, value: &str) {
    let style = el.style();
    if style.get_property_value(prop).unwrap_or_default().is_empty() {
        _ = style.set_property(prop, value);
    }
}

fn spawn(host: &web::HtmlElement, ev: &web::MouseEvent) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    let rect = host.get_bounding_client_rect();
    let x = ev.client_x() as f64 - rect.left();
    let y = ev.client_y() as f64 - rect.top();
    ripple.set_class_name(RIPPLE_CLASS);
    _ = ripple.set_attribute("style", &format!("left:{x}px;top:{y}px"));
    if host.append_child(&ripple).is_err() {
        return;
    }
    let r = ripple.clone();
    let cb = wasm_bindgen::closure::Closure::once_into_js(move || r.remove());
    _ = ripple.add_event_listener_with_callback("animationend", cb.unchecked_ref());
}

/// Click ripple on buttons and link-like elements.
pub fn wire(document: &web::Document) {
    dom::for_each_match(document, RIPPLE_SELECTOR, |el| {
        ensure_style(&el, "position", "relative");
        ensure_style(&el, "overflow", "hidden");
        let host = el.clone();
        dom::add_listener(&el, "click", move |ev: web::MouseEvent| spawn(&host, &ev));
    });
}
