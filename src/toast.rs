use crate::constants::{CLASS_SHOW, TOAST_DURATION_MS, TOAST_ID};
use crate::dom;
use web_sys as web;

/// Show `message` in the toast for a few seconds. No toast element, no toast.
pub fn show(document: &web::Document, message: &str) {
    let Some(el) = document.get_element_by_id(TOAST_ID) else {
        return;
    };
    if let Ok(Some(span)) = el.query_selector("span") {
        span.set_text_content(Some(message));
    }
    _ = el.class_list().add_1(CLASS_SHOW);
    dom::set_timeout(TOAST_DURATION_MS, move || {
        _ = el.class_list().remove_1(CLASS_SHOW);
    });
}
