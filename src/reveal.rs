use crate::constants::{
    CLASS_ACTIVE, INITIAL_REVEAL_DELAY_MS, INITIAL_REVEAL_SELECTOR, REVEAL_SELECTOR,
    REVEAL_THRESHOLD,
};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Fades `.reveal` elements in as they scroll into view.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl RevealObserver {
    pub fn new() -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(
            |entries: js_sys::Array, _obs: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        _ = entry.target().class_list().add_1(CLASS_ACTIVE);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
        .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Hide every reveal element again and watch it from scratch; called after
    /// each section swap so the new section animates in.
    pub fn rearm(&self, document: &web::Document) {
        self.observer.disconnect();
        let elements = dom::query_all(document, REVEAL_SELECTOR);
        for el in &elements {
            _ = el.class_list().remove_1(CLASS_ACTIVE);
            self.observer.observe(el);
        }
        log::debug!("[reveal] observing {} elements", elements.len());
    }

    /// Start watching freshly mounted elements. Marks already set on the rest
    /// of the page are left alone.
    pub fn observe(&self, document: &web::Document, selector: &str) {
        let elements = dom::query_all(document, selector);
        for el in &elements {
            self.observer.observe(el);
        }
        log::debug!("[reveal] observing {} new elements ({})", elements.len(), selector);
    }
}

/// Kick the landing section's entrance animation shortly after load.
pub fn schedule_initial_reveal(document: &web::Document) {
    let document = document.clone();
    dom::set_timeout(INITIAL_REVEAL_DELAY_MS, move || {
        for el in dom::query_all(&document, INITIAL_REVEAL_SELECTOR) {
            _ = el.class_list().add_1(CLASS_ACTIVE);
        }
    });
}
