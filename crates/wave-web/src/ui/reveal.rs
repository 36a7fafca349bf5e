use crate::constants::{
    REVEAL_CLASS, REVEAL_ROOT_MARGIN, REVEAL_SELECTORS, REVEAL_THRESHOLD, REVEAL_VISIBLE_CLASS,
};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn supports_intersection_observer() -> bool {
    web::window()
        .and_then(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).ok())
        .unwrap_or(false)
}

/// One-shot scroll reveal: each element gets the visible class the first
/// time it crosses the threshold and is then unobserved.
pub fn wire(document: &web::Document) {
    let mut targets = Vec::new();
    for sel in REVEAL_SELECTORS {
        dom::for_each_match(document, sel, |el| {
            _ = el.class_list().add_1(REVEAL_CLASS);
            targets.push(el);
        });
    }
    if targets.is_empty() {
        return;
    }

    if !supports_intersection_observer() {
        for el in &targets {
            _ = el.class_list().add_1(REVEAL_VISIBLE_CLASS);
        }
        return;
    }

    let callback = Closure::wrap(Box::new(
        |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    _ = target.class_list().add_1(REVEAL_VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for el in &targets {
                observer.observe(el);
            }
        }
        Err(e) => {
            log::warn!("[reveal] observer unavailable: {:?}", e);
            for el in &targets {
                _ = el.class_list().add_1(REVEAL_VISIBLE_CLASS);
            }
        }
    }
    callback.forget();
}
