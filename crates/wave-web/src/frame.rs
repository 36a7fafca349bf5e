use crate::canvas::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wave_core::{FrameScheduler, LoopDriver, RenderContext, Surface, Viewport, WaveRenderer};
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` behind the core scheduler trait.
pub struct RafScheduler {
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request(&mut self) -> i32 {
        let Some(w) = web::window() else {
            return 0;
        };
        let cb = self.callback.borrow();
        let Some(cb) = cb.as_ref() else {
            return 0;
        };
        w.request_animation_frame(cb.as_ref().unchecked_ref()).unwrap_or_else(|e| {
            log::error!("[loop] requestAnimationFrame failed: {:?}", e);
            0
        })
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle);
        }
    }
}

pub struct FrameContext {
    pub renderer: WaveRenderer,
    pub ctx: RenderContext,
    pub surface: CanvasSurface,
    pub mask: Option<CanvasSurface>,
    pub driver: LoopDriver<RafScheduler>,
}

impl FrameContext {
    pub fn frame(&mut self, timestamp_ms: f64) {
        if !self.driver.on_frame() {
            return;
        }
        self.renderer.frame(
            &mut self.ctx,
            timestamp_ms,
            &mut self.surface,
            self.mask.as_mut(),
        );
    }

    /// Remeasure the surfaces, then cancel and reschedule the pending frame.
    pub fn resize(&mut self, viewport: Viewport, coarse_pointer: bool) {
        let (bw, bh) = viewport.backing_size();
        log::debug!(
            "[resize] css={}x{} dpr={} backing={}x{}",
            viewport.width,
            viewport.height,
            viewport.dpr,
            bw,
            bh
        );
        self.ctx.viewport = viewport;
        self.ctx.coarse_pointer = coarse_pointer;
        self.surface.resize(&viewport);
        if let Some(mask) = &mut self.mask {
            mask.resize(&viewport);
        }
        self.driver.on_resize();
    }
}

/// Build the frame context around a rAF callback and enter the running state.
pub fn start_loop(
    renderer: WaveRenderer,
    ctx: RenderContext,
    surface: CanvasSurface,
    mask: Option<CanvasSurface>,
) -> Rc<RefCell<FrameContext>> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        renderer,
        ctx,
        surface,
        mask,
        driver: LoopDriver::new(RafScheduler {
            callback: callback.clone(),
        }),
    }));
    let frame_ctx_tick = frame_ctx.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        frame_ctx_tick.borrow_mut().frame(ts);
    }) as Box<dyn FnMut(f64)>));

    {
        let mut fc = frame_ctx.borrow_mut();
        let viewport = fc.ctx.viewport;
        fc.surface.resize(&viewport);
        if let Some(mask) = &mut fc.mask {
            mask.resize(&viewport);
        }
        fc.driver.start();
    }
    frame_ctx
}
