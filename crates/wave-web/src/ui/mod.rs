//! Page interaction helpers. Each one no-ops when its elements are missing.

pub mod accordion;
pub mod overlay;
pub mod reveal;
pub mod ripple;

use web_sys as web;

pub fn wire_all(document: &web::Document) {
    overlay::wire(document);
    ripple::wire(document);
    reveal::wire(document);
    accordion::wire(document);
}
