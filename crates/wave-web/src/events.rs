use crate::constants::COARSE_POINTER_QUERY;
use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Pointer move/enter/leave on the window feed the render context.
pub fn wire_pointer(window: &web::Window, frame_ctx: &Rc<RefCell<FrameContext>>) {
    let fc = frame_ctx.clone();
    dom::add_listener(window, "pointermove", move |ev: web::PointerEvent| {
        fc.borrow_mut()
            .ctx
            .pointer
            .on_move(ev.client_x() as f64, ev.client_y() as f64);
    });

    let fc = frame_ctx.clone();
    dom::add_listener(window, "pointerenter", move |_: web::PointerEvent| {
        fc.borrow_mut().ctx.pointer.on_enter();
    });

    let fc = frame_ctx.clone();
    dom::add_listener(window, "pointerleave", move |_: web::PointerEvent| {
        fc.borrow_mut().ctx.pointer.on_leave();
    });
}

pub fn wire_resize(window: &web::Window, frame_ctx: &Rc<RefCell<FrameContext>>) {
    let fc = frame_ctx.clone();
    dom::add_listener(window, "resize", move |_: web::Event| {
        let Some(viewport) = dom::measure_viewport() else {
            return;
        };
        let coarse = dom::is_coarse_pointer(COARSE_POINTER_QUERY);
        fc.borrow_mut().resize(viewport, coarse);
    });
}
