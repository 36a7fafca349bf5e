//! Page-transition overlay: fades in on internal link clicks, navigates
//! after a short delay and is hidden again once the next page shows.

use crate::constants::{OVERLAY_CLASS, OVERLAY_HIDDEN_CLASS, TRANSITION_DELAY_MS};
use crate::dom;
use crate::links::is_internal_link;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(overlay: &web::Element) {
    _ = overlay.class_list().remove_1(OVERLAY_HIDDEN_CLASS);
}

#[inline]
pub fn hide(overlay: &web::Element) {
    _ = overlay.class_list().add_1(OVERLAY_HIDDEN_CLASS);
}

#[inline]
pub fn is_hidden(overlay: &web::Element) -> bool {
    overlay.class_list().contains(OVERLAY_HIDDEN_CLASS)
}

fn resolved_origin(href: &str, base: &str) -> Option<String> {
    web::Url::new_with_base(href, base).ok().map(|u| u.origin())
}

fn intercept_target(ev: &web::MouseEvent) -> Option<String> {
    let anchor = ev
        .target()?
        .dyn_into::<web::Element>()
        .ok()?
        .closest("a")
        .ok()??
        .dyn_into::<web::HtmlAnchorElement>()
        .ok()?;
    let location = web::window()?.location();
    let page_href = location.href().ok()?;
    let page_origin = location.origin().ok()?;
    let href_attr = anchor.get_attribute("href");
    let resolved = anchor.href();
    let target = anchor.target();
    let internal = !resolved.is_empty()
        && is_internal_link(
            href_attr.as_deref(),
            Some(target.as_str()).filter(|t| !t.is_empty()),
            resolved_origin(&resolved, &page_href).as_deref(),
            &page_origin,
        );
    internal.then_some(href_attr).flatten()
}

pub fn wire(document: &web::Document) {
    let Ok(overlay) = document.create_element("div") else {
        return;
    };
    overlay.set_class_name(OVERLAY_CLASS);
    match document.body() {
        Some(body) => {
            _ = body.append_child(&overlay);
            let ov = overlay.clone();
            dom::next_frame(move || hide(&ov));
        }
        None => {
            let ov = overlay.clone();
            let doc = document.clone();
            dom::add_listener(document, "DOMContentLoaded", move |_: web::Event| {
                if let Some(body) = doc.body() {
                    _ = body.append_child(&ov);
                }
                let ov = ov.clone();
                dom::next_frame(move || hide(&ov));
            });
        }
    }

    let ov = overlay.clone();
    let on_click = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(href) = intercept_target(&ev) else {
            return;
        };
        ev.prevent_default();
        show(&ov);
        log::debug!("[overlay] navigating to {href}");
        dom::after_ms(TRANSITION_DELAY_MS, move || {
            if let Some(w) = web::window() {
                _ = w.location().assign(&href);
            }
        });
    }) as Box<dyn FnMut(web::MouseEvent)>);
    _ = document.add_event_listener_with_callback_and_bool(
        "click",
        on_click.as_ref().unchecked_ref(),
        true,
    );
    on_click.forget();

    if let Some(w) = web::window() {
        let ov = overlay.clone();
        dom::add_listener(&w, "pageshow", move |_: web::Event| {
            if !is_hidden(&ov) {
                hide(&ov);
            }
        });
    }
}
