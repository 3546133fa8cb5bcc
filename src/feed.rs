use crate::constants::{
    NEWS_AUDIO_MOUNT, NEWS_CARD_SELECTOR, NEWS_DATA_URL, NEWS_FEED_MOUNT, NEWS_META_MOUNT,
    NEWS_SCRIPT_MOUNT,
};
use crate::core::news::{feed_view, parse_feed, FeedError, Lang, NewsFeed};
use crate::dom;
use crate::reveal::RevealObserver;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_feed(url: &str) -> Result<NewsFeed, FeedError> {
    let window = web::window().ok_or_else(|| FeedError::Network("no window".into()))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| FeedError::Network(js_message(&e)))?
        .dyn_into::<web::Response>()
        .map_err(|e| FeedError::Network(js_message(&e)))?;
    if !resp.ok() {
        return Err(FeedError::Status(resp.status()));
    }
    let text = resp.text().map_err(|e| FeedError::Network(js_message(&e)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| FeedError::Network(js_message(&e)))?
        .as_string()
        .unwrap_or_default();
    parse_feed(&body)
}

// `TypeError: Failed to fetch` reads better than the Debug dump
fn js_message(v: &wasm_bindgen::JsValue) -> String {
    v.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", v))
}

/// Fetch the news document once and fill the news mounts. Pages without a
/// news panel skip the request entirely.
pub async fn load_news(document: web::Document, reveal: Rc<RevealObserver>) {
    if document.get_element_by_id(NEWS_FEED_MOUNT).is_none() {
        return;
    }
    let result = fetch_feed(NEWS_DATA_URL).await;
    match &result {
        Ok(feed) => log::info!(
            "[news] {} articles, generated {}",
            feed.articles.len(),
            feed.generated_at
        ),
        Err(e) => log::error!("[news] load failed: {}", e),
    }

    let view = feed_view(&result, Lang::Fr);
    dom::mount_html(&document, NEWS_FEED_MOUNT, &view.articles);
    if let Some(meta) = &view.meta {
        dom::mount_html(&document, NEWS_META_MOUNT, meta);
    }
    if let Some(script) = &view.script {
        dom::mount_html(&document, NEWS_SCRIPT_MOUNT, script);
    }
    if let Some(audio) = &view.audio {
        dom::mount_html(&document, NEWS_AUDIO_MOUNT, audio);
    }
    if view.card_count > 0 {
        reveal.observe(&document, NEWS_CARD_SELECTOR);
    }
}
