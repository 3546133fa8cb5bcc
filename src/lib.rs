#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::content::{CONTACT, PROJECTS, SKILLS, STATS};
use crate::core::markup;
use crate::core::{FrameClock, LoopToken, ParticleField, ParticleParams};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contact;
mod core;
mod dom;
mod events;
mod feed;
mod frame;
mod input;
mod render;
mod reveal;
mod toast;

thread_local! {
    static BACKGROUND_LOOP: RefCell<Option<LoopToken>> = const { RefCell::new(None) };
}

/// Stop the particle background; the canvas keeps its last frame.
#[wasm_bindgen]
pub fn stop_background() {
    BACKGROUND_LOOP.with(|slot| {
        if let Some(token) = slot.borrow_mut().take() {
            token.stop();
        }
    });
}

fn mount_content(document: &web::Document) {
    dom::mount_html(document, STATS_MOUNT, &markup::render_stats(STATS));
    dom::mount_html(document, PROJECTS_MOUNT, &markup::render_projects(PROJECTS));
    dom::mount_html(document, SKILLS_MOUNT, &markup::render_skills(SKILLS));
    dom::mount_html(document, CONTACT_MOUNT, &markup::render_contact(&CONTACT));
}

fn start_background(document: &web::Document) -> anyhow::Result<()> {
    // no canvas on this page: nothing to animate
    let Some(canvas_el) = document.get_element_by_id(CANVAS_ID) else {
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let (w, h) = dom::sync_canvas_to_viewport(&canvas);
    let seed = PARTICLE_SEED ^ (js_sys::Date::now() as u64);
    let field = ParticleField::new(
        ParticleParams::default(),
        Vec2::new(w as f32, h as f32),
        seed,
    );
    log::info!("[particles] {} particles on {}x{}", field.len(), w, h);

    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        painter: render::FieldPainter::new(&canvas)?,
        pointer: pointer.clone(),
        clock: FrameClock::new(),
    }));

    events::wire_pointer_tracking(&canvas, &pointer);
    events::wire_resize(&canvas, &frame_ctx);

    let token = LoopToken::new();
    BACKGROUND_LOOP.with(|slot| *slot.borrow_mut() = Some(token.clone()));
    frame::start_loop(frame_ctx, token);
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if let Err(e) = start_background(&document) {
        log::error!("[particles] background disabled: {:?}", e);
    }

    mount_content(&document);
    contact::wire_contact(&document);

    let reveal = Rc::new(reveal::RevealObserver::new()?);
    let nav = events::Navigator::discover(&document, reveal.clone());
    events::wire_navigation(&nav);
    reveal.rearm(&document);
    events::wire_card_spotlight(&document);
    reveal::schedule_initial_reveal(&document);

    log::info!("portfolio loaded");

    feed::load_news(document, reveal).await;
    Ok(())
}
