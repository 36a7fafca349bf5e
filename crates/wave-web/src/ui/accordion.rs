use crate::constants::{
    ACCORDION_CLOSE_MS, ACCORDION_OPEN_CLASS, ACCORDION_PANEL_ID, ACCORDION_SELECTOR,
};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn set_max_height(panel: &web::HtmlElement, px: i32) {
    _ = panel.style().set_property("max-height", &format!("{px}px"));
}

fn open(panel: &web::HtmlElement) {
    panel.set_hidden(false);
    set_max_height(panel, panel.scroll_height());
    _ = panel.class_list().add_1(ACCORDION_OPEN_CLASS);
}

/// Collapse from the natural height so the transition has a start value,
/// then hide once it has run.
fn close(panel: &web::HtmlElement) {
    _ = panel.class_list().remove_1(ACCORDION_OPEN_CLASS);
    set_max_height(panel, panel.scroll_height());
    let panel = panel.clone();
    dom::next_frame(move || {
        set_max_height(&panel, 0);
        dom::after_ms(ACCORDION_CLOSE_MS, move || panel.set_hidden(true));
    });
}

pub fn wire(document: &web::Document) {
    let Ok(Some(button)) = document.query_selector(ACCORDION_SELECTOR) else {
        return;
    };
    let Some(panel) = document
        .get_element_by_id(ACCORDION_PANEL_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::debug!("[accordion] #{ACCORDION_PANEL_ID} missing; skipping");
        return;
    };
    let btn = button.clone();
    dom::add_listener(&button, "click", move |_: web::MouseEvent| {
        let expanded = btn.get_attribute("aria-expanded").as_deref() == Some("true");
        _ = btn.set_attribute("aria-expanded", if expanded { "false" } else { "true" });
        if expanded {
            close(&panel);
        } else {
            open(&panel);
        }
    });
}
