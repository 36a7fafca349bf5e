// Page wiring constants: element ids, selectors, class names and timings.
//
// Kept free of browser types so host-side tests can include this file.

// Canvases
pub const WAVE_CANVAS_ID: &str = "wave-canvas";
pub const TEXT_CANVAS_ID: &str = "text-canvas";
pub const PRESET_ATTR: &str = "data-wave-preset";
pub const LABEL_ATTR: &str = "data-wave-label";
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

// Page transition overlay
pub const OVERLAY_CLASS: &str = "page-overlay";
pub const OVERLAY_HIDDEN_CLASS: &str = "hide";
pub const TRANSITION_DELAY_MS: i32 = 260;

// Accordion
pub const ACCORDION_SELECTOR: &str = ".accordion";
pub const ACCORDION_PANEL_ID: &str = "faq-panel";
pub const ACCORDION_OPEN_CLASS: &str = "open";
pub const ACCORDION_CLOSE_MS: i32 = 420;

// Ripple
pub const RIPPLE_SELECTOR: &str = ".btn, .app-link, .accordion, .back, .reviews";
pub const RIPPLE_CLASS: &str = "ripple";

// Scroll reveal
pub const REVEAL_SELECTORS: [&str; 3] = [".plan", ".tiers li", ".about-card"];
pub const REVEAL_CLASS: &str = "reveal-up";
pub const REVEAL_VISIBLE_CLASS: &str = "is-visible";
pub const REVEAL_THRESHOLD: f64 = 0.05;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";
