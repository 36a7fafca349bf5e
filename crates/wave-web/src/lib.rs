#![cfg(target_arch = "wasm32")]
use std::str::FromStr;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use wave_core::{Preset, RenderContext, WaveConfig, WaveRenderer};
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod links;
mod ui;

use constants::{COARSE_POINTER_QUERY, LABEL_ATTR, PRESET_ATTR, TEXT_CANVAS_ID, WAVE_CANVAS_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wave-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Preset and label from the canvas data attributes; unknown presets fall
/// back to the default with a warning.
fn page_config(canvas: &web::HtmlCanvasElement) -> WaveConfig {
    let preset = match canvas.get_attribute(PRESET_ATTR) {
        Some(raw) => Preset::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("[config] {e}; using default preset");
            Preset::default()
        }),
        None => Preset::default(),
    };
    let config = WaveConfig::for_preset(preset);
    match canvas.get_attribute(LABEL_ATTR) {
        Some(label) if !label.trim().is_empty() => config.with_label(label.trim()),
        _ => config,
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    ui::wire_all(&document);

    // The background is optional page decoration: no canvas, no renderer.
    let Some(canvas) = dom::canvas_by_id(&document, WAVE_CANVAS_ID) else {
        log::info!("[wave] #{WAVE_CANVAS_ID} not found; background disabled");
        return Ok(());
    };

    let config = page_config(&canvas);
    let preset = config.preset();
    let renderer = WaveRenderer::new(config).map_err(|e| anyhow::anyhow!("invalid config: {e}"))?;

    let surface = canvas::CanvasSurface::new(canvas)?;
    let mask = match preset {
        Preset::Layered => dom::canvas_by_id(&document, TEXT_CANVAS_ID)
            .or_else(|| dom::detached_canvas(&document))
            .and_then(|c| match canvas::CanvasSurface::new(c) {
                Ok(s) => Some(s),
                Err(e) => {
                    log::warn!("[wave] mask surface unavailable: {e}");
                    None
                }
            }),
        Preset::Columns => None,
    };

    let viewport =
        dom::measure_viewport().ok_or_else(|| anyhow::anyhow!("cannot measure viewport"))?;
    let mut ctx = RenderContext::new(viewport);
    ctx.coarse_pointer = dom::is_coarse_pointer(COARSE_POINTER_QUERY);
    log::info!(
        "[wave] preset={:?} viewport={}x{} dpr={} coarse={}",
        preset,
        viewport.width,
        viewport.height,
        viewport.dpr,
        ctx.coarse_pointer
    );

    let frame_ctx = frame::start_loop(renderer, ctx, surface, mask);
    events::wire_pointer(&window, &frame_ctx);
    events::wire_resize(&window, &frame_ctx);
    Ok(())
}
