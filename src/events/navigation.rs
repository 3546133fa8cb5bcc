use crate::constants::{
    CLASS_ACTIVE, CLASS_FADE_OUT, INITIAL_SECTION, SECTION_ID_PREFIX, SECTION_SELECTOR,
    TRANSITION_DELAY_MS,
};
use crate::core::{
    section_from_dom_id, SectionCoordinator, SectionMark, Settled, TransitionRequest,
};
use crate::dom;
use crate::reveal::RevealObserver;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared handles for page switching.
#[derive(Clone)]
pub struct Navigator {
    pub document: web::Document,
    pub sections: Rc<RefCell<SectionCoordinator>>,
    pub reveal: Rc<RevealObserver>,
}

impl Navigator {
    /// Build a coordinator over every `page-*` section present in the page.
    pub fn discover(document: &web::Document, reveal: Rc<RevealObserver>) -> Self {
        let ids: Vec<String> = dom::query_all(document, SECTION_SELECTOR)
            .iter()
            .filter_map(|el| section_from_dom_id(&el.id(), SECTION_ID_PREFIX).map(str::to_string))
            .collect();
        log::info!("[nav] sections: {:?}", ids);
        Self {
            document: document.clone(),
            sections: Rc::new(RefCell::new(SectionCoordinator::new(ids, INITIAL_SECTION))),
            reveal,
        }
    }

    #[inline]
    pub fn current_section(&self) -> String {
        self.sections.borrow().current_section().to_string()
    }

    fn section_el(&self, id: &str) -> Option<web::Element> {
        self.document
            .get_element_by_id(&format!("{SECTION_ID_PREFIX}{id}"))
    }

    pub fn navigate(&self, target: &str) {
        let request = self.sections.borrow_mut().request_transition(target);
        match request {
            TransitionRequest::NoOp => {}
            TransitionRequest::Unknown => log::warn!("[nav] no section named '{}'", target),
            TransitionRequest::Busy => {
                log::debug!("[nav] transition in flight, ignoring '{}'", target)
            }
            TransitionRequest::Started { from, to } => {
                log::info!("[nav] {} -> {}", from, to);
                self.apply_marks();
                let nav = self.clone();
                dom::set_timeout(TRANSITION_DELAY_MS, move || nav.settle());
            }
        }
    }

    fn settle(&self) {
        let Some(Settled { from, to }) = self.sections.borrow_mut().complete() else {
            return;
        };
        log::debug!("[nav] settled {} -> {}", from, to);
        self.apply_marks();
        self.highlight_nav();
        self.reveal.rearm(&self.document);
        dom::scroll_to_top_smooth();
    }

    /// Bring every section's classes in line with the coordinator.
    fn apply_marks(&self) {
        let sections = self.sections.borrow();
        for id in sections.sections() {
            let Some(el) = self.section_el(id) else {
                continue;
            };
            let classes = el.class_list();
            match sections.mark(id) {
                SectionMark::Active => {
                    _ = classes.add_1(CLASS_ACTIVE);
                    _ = classes.remove_1(CLASS_FADE_OUT);
                }
                SectionMark::Fading => {
                    _ = classes.add_2(CLASS_ACTIVE, CLASS_FADE_OUT);
                }
                SectionMark::Hidden => {
                    _ = classes.remove_2(CLASS_ACTIVE, CLASS_FADE_OUT);
                }
            }
        }
    }

    /// Mark the nav link for the current section and unmark every other one.
    pub fn highlight_nav(&self) {
        let sections = self.sections.borrow();
        for link in dom::query_all(&self.document, ".nav-link") {
            let is_current = link
                .get_attribute("data-page")
                .map(|page| sections.is_nav_active(&page))
                .unwrap_or(false);
            _ = link.class_list().toggle_with_force(CLASS_ACTIVE, is_current);
        }
    }
}

/// Any element carrying `data-page` (nav links and call-to-action buttons)
/// switches to that section on click.
pub fn wire_navigation(nav: &Navigator) {
    for el in dom::query_all(&nav.document, "[data-page]") {
        let Some(target) = el.get_attribute("data-page") else {
            continue;
        };
        let nav = nav.clone();
        dom::add_click_listener(&el, move |ev: web::MouseEvent| {
            ev.prevent_default();
            nav.navigate(&target);
        });
    }
    log::info!("[nav] showing '{}'", nav.current_section());
    nav.apply_marks();
    nav.highlight_nav();
}
