use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Replace the content of `#id`. A missing mount point is not an error.
#[inline]
pub fn mount_html(document: &web::Document, id: &str, html: &str) -> bool {
    match document.get_element_by_id(id) {
        Some(el) => {
            el.set_inner_html(html);
            true
        }
        None => false,
    }
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let list = match document.query_selector_all(selector) {
        Ok(l) => l,
        Err(_) => return Vec::new(),
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn add_listener<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::Element, handler: impl FnMut(web::MouseEvent) + 'static) {
    add_listener::<web::MouseEvent>(el, "click", handler);
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

pub fn scroll_to_top_smooth() {
    if let Some(w) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Size the canvas backing store to the viewport; returns the new size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (w_px, h_px) = web::window()
        .map(|w| {
            let iw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let ih = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (iw as u32, ih as u32)
        })
        .unwrap_or((0, 0));
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    (canvas.width(), canvas.height())
}
