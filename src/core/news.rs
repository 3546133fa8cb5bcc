// Daily cyber news panel: the `data.json` document written by the briefing
// generator, and the markup shown for it (or for the failure to load it).

use super::markup::escape_html;
use serde::Deserialize;
use std::fmt::Write;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub title_fr: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub summary_fr: Option<String>,
    pub url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lang {
    Fr,
    En,
}

impl Article {
    pub fn title_in(&self, lang: Lang) -> &str {
        match (lang, &self.title_fr) {
            (Lang::Fr, Some(t)) if !t.is_empty() => t,
            _ => &self.title,
        }
    }

    pub fn summary_in(&self, lang: Lang) -> &str {
        match (lang, &self.summary_fr) {
            (Lang::Fr, Some(s)) if !s.is_empty() => s,
            _ => &self.summary,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewsFeed {
    pub generated_at: String,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub script: Option<String>,
    #[serde(default)]
    pub audio_file: Option<String>,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("erreur réseau ({0})")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("données invalides ({0})")]
    Parse(String),
}

pub fn parse_feed(json: &str) -> Result<NewsFeed, FeedError> {
    serde_json::from_str(json).map_err(|e| FeedError::Parse(e.to_string()))
}

pub const NO_NEWS_TEXT: &str = "Aucune actualité disponible pour le moment.";
pub const ERROR_PREFIX: &str = "Impossible de charger les actualités";

/// Markup for each news mount point. `None` leaves that mount empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedView {
    pub articles: String,
    pub meta: Option<String>,
    pub script: Option<String>,
    pub audio: Option<String>,
    pub card_count: usize,
}

pub fn feed_view(result: &Result<NewsFeed, FeedError>, lang: Lang) -> FeedView {
    match result {
        Err(e) => FeedView {
            articles: error_placeholder(e),
            ..FeedView::default()
        },
        Ok(feed) => {
            let (articles, card_count) = if feed.articles.is_empty() {
                (placeholder("news-empty", "fas fa-inbox", NO_NEWS_TEXT), 0)
            } else {
                (render_articles(&feed.articles, lang), feed.articles.len())
            };
            FeedView {
                articles,
                meta: Some(format!(
                    r#"<i class="fas fa-clock"></i> Mis à jour : {}"#,
                    escape_html(&format_timestamp(&feed.generated_at))
                )),
                script: feed
                    .script
                    .as_deref()
                    .filter(|s| !s.trim().is_empty())
                    .map(render_script),
                audio: feed
                    .audio_file
                    .as_deref()
                    .filter(|s| !s.is_empty())
                    .map(render_audio),
                card_count,
            }
        }
    }
}

pub fn error_placeholder(err: &FeedError) -> String {
    placeholder(
        "news-error",
        "fas fa-exclamation-triangle",
        &format!("{ERROR_PREFIX} : {err}"),
    )
}

fn placeholder(class: &str, icon: &str, text: &str) -> String {
    format!(
        r#"<div class="{}"><i class="{}"></i><p>{}</p></div>"#,
        class,
        icon,
        escape_html(text)
    )
}

pub fn render_articles(articles: &[Article], lang: Lang) -> String {
    let mut html = String::new();
    for (i, a) in articles.iter().enumerate() {
        _ = write!(
            html,
            concat!(
                r#"<article class="news-card reveal" style="transition-delay: {:.1}s">"#,
                r#"<h3 class="news-title"><a href="{}" target="_blank" rel="noopener">{}</a></h3>"#,
                r#"<p class="news-summary">{}</p>"#,
                "</article>"
            ),
            i as f32 * 0.1,
            escape_html(&a.url),
            escape_html(a.title_in(lang)),
            escape_html(a.summary_in(lang))
        );
    }
    html
}

fn render_script(script: &str) -> String {
    let paragraphs: String = script
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", escape_html(p)))
        .collect();
    format!(r#"<div class="news-script-text">{paragraphs}</div>"#)
}

fn render_audio(src: &str) -> String {
    format!(
        concat!(
            r#"<div class="news-player"><i class="fas fa-headphones"></i>"#,
            r#"<audio controls preload="none" src="{}"></audio></div>"#
        ),
        escape_html(src)
    )
}

/// `2026-01-05T08:30:12.345Z` becomes `2026-01-05 08:30 UTC`; anything else
/// is shown as-is.
pub fn format_timestamp(ts: &str) -> String {
    match ts.split_once('T').and_then(|(date, time)| Some((date, time.get(..5)?))) {
        Some((date, hm)) => format!("{} {} UTC", date, hm),
        None => ts.to_string(),
    }
}
