use crate::constants::SPOTLIGHT_SELECTOR;
use crate::dom;
use crate::frame::FrameContext;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole page so particles under it scatter.
pub fn wire_pointer_tracking(
    canvas: &web::HtmlCanvasElement,
    pointer: &Rc<RefCell<input::PointerState>>,
) {
    let Some(window) = web::window() else {
        return;
    };

    let canvas_move = canvas.clone();
    let pointer_move = pointer.clone();
    dom::add_listener(&window, "pointermove", move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_move);
        pointer_move.borrow_mut().moved_to(pos);
    });

    // relatedTarget is null only when the pointer leaves the window itself
    let pointer_out = pointer.clone();
    dom::add_listener(&window, "pointerout", move |ev: web::PointerEvent| {
        if ev.related_target().is_none() {
            pointer_out.borrow_mut().left();
        }
    });
}

/// Rebuild the particle field whenever the viewport changes size.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, frame_ctx: &Rc<RefCell<FrameContext>>) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let frame_ctx = frame_ctx.clone();
    dom::add_listener(&window, "resize", move |_ev: web::Event| {
        let (w, h) = dom::sync_canvas_to_viewport(&canvas);
        match frame_ctx.try_borrow_mut() {
            Ok(mut ctx) => ctx.resize(w, h),
            Err(_) => log::warn!("[particles] resize skipped: frame in progress"),
        }
    });
}

/// Cards light up under the pointer through `--mouse-x` / `--mouse-y`.
pub fn wire_card_spotlight(document: &web::Document) {
    for card in dom::query_all(document, SPOTLIGHT_SELECTOR) {
        let Some(html_el) = card.dyn_ref::<web::HtmlElement>().cloned() else {
            continue;
        };
        dom::add_listener(&card, "mousemove", move |ev: web::MouseEvent| {
            let offset = input::pointer_offset_in(&ev, &html_el);
            let style = html_el.style();
            _ = style.set_property("--mouse-x", &format!("{}px", offset.x));
            _ = style.set_property("--mouse-y", &format!("{}px", offset.y));
        });
    }
}
