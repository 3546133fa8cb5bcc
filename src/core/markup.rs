// HTML fragments for the content sections.
//
// Each `render_*` is a pure function of its data; mounting the string into
// the page is left to `dom::mount_html`.

use super::content::{ContactInfo, Project, SkillCategory, Stat};
use std::fmt::Write;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// Cards enter one after the other, 100ms apart.
#[inline]
fn stagger(i: usize) -> String {
    format!("transition-delay: {:.1}s", i as f32 * 0.1)
}

pub fn render_stats(stats: &[Stat]) -> String {
    let mut html = String::new();
    for stat in stats {
        _ = write!(
            html,
            r#"<div class="hero-stat"><span class="stat-value">{}</span><span class="stat-label">{}</span></div>"#,
            escape_html(stat.value),
            escape_html(stat.label)
        );
    }
    html
}

pub fn render_projects(projects: &[Project]) -> String {
    let mut html = String::new();
    for (i, project) in projects.iter().enumerate() {
        let tags: String = project
            .tags
            .iter()
            .map(|t| format!(r#"<span class="tag">{}</span>"#, escape_html(t)))
            .collect();
        _ = write!(
            html,
            concat!(
                r#"<div class="project-card reveal" style="{}">"#,
                r#"<div class="project-icon"><i class="{}"></i></div>"#,
                r#"<h3 class="project-title">{}</h3>"#,
                r#"<p class="project-description">{}</p>"#,
                r#"<div class="project-tags">{}</div>"#,
                r#"<a href="{}" target="_blank" rel="noopener" class="project-link">"#,
                r#"<i class="fab fa-github"></i> Code Source <i class="fas fa-arrow-right"></i></a>"#,
                "</div>"
            ),
            stagger(i),
            escape_html(project.icon),
            escape_html(project.title),
            escape_html(project.description),
            tags,
            escape_html(project.link)
        );
    }
    html
}

pub fn render_skills(categories: &[SkillCategory]) -> String {
    let mut html = String::new();
    for (i, cat) in categories.iter().enumerate() {
        let items: String = cat
            .items
            .iter()
            .map(|item| format!(r#"<span class="skill-item">{}</span>"#, escape_html(item)))
            .collect();
        _ = write!(
            html,
            concat!(
                r#"<div class="skill-category reveal" style="{}">"#,
                r#"<div class="skill-header"><div class="skill-icon"><i class="{}"></i></div>"#,
                r#"<h3 class="skill-title">{}</h3></div>"#,
                r#"<div class="skill-items">{}</div>"#,
                "</div>"
            ),
            stagger(i),
            escape_html(cat.icon),
            escape_html(cat.title),
            items
        );
    }
    html
}

pub fn render_contact(info: &ContactInfo) -> String {
    let socials: String = info
        .socials
        .iter()
        .map(|s| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener" class="social-btn" title="{}"><i class="{}"></i></a>"#,
                escape_html(s.url),
                escape_html(s.name),
                escape_html(s.icon)
            )
        })
        .collect();
    let ctf: String = info
        .ctf
        .iter()
        .map(|c| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener" class="ctf-link" title="{}"><i class="{}"></i><span>{}</span><i class="fas fa-arrow-right arrow"></i></a>"#,
                escape_html(c.url),
                escape_html(c.name),
                escape_html(c.icon),
                escape_html(c.text)
            )
        })
        .collect();

    let mut html = String::new();
    _ = write!(
        html,
        concat!(
            r#"<div class="contact-info reveal">"#,
            r#"<h2 class="contact-title">Restons en contact</h2>"#,
            r#"<p class="contact-intro">{intro}</p>"#,
            r#"<div class="contact-details">"#,
            r#"<div class="contact-item"><i class="fas fa-envelope"></i><span>{email}</span>"#,
            r#"<button type="button" class="copy-email" title="Copier"><i class="fas fa-copy"></i></button></div>"#,
            r#"<div class="contact-item"><i class="fas fa-map-marker-alt"></i><span>{location}</span></div>"#,
            r#"<div class="contact-item"><i class="fas fa-briefcase"></i><span>{availability}</span></div>"#,
            "</div>",
            r#"<div class="social-links">{socials}</div>"#,
            r#"<div class="ctf-section"><h4>CTF &amp; Profils</h4><div class="ctf-links">{ctf}</div></div>"#,
            "</div>",
            r#"<div class="contact-form-card reveal reveal-delay-1">"#,
            r#"<form id="contact-form">"#,
            r#"<div class="form-group"><input type="text" name="name" placeholder="Nom complet" required></div>"#,
            r#"<div class="form-group"><input type="email" name="email" placeholder="Email" required></div>"#,
            r#"<div class="form-group"><input type="text" name="subject" placeholder="Sujet" required></div>"#,
            r#"<div class="form-group"><textarea name="message" placeholder="Votre message..." rows="5" required></textarea></div>"#,
            r#"<button type="submit" class="form-btn"><i class="fas fa-paper-plane"></i> Envoyer le message</button>"#,
            "</form>",
            r#"<div class="form-footer"><i class="fas fa-shield-alt"></i><span>Vos données ne seront jamais partagées avec des tiers.</span></div>"#,
            "</div>"
        ),
        intro = escape_html(info.intro),
        email = escape_html(info.email),
        location = escape_html(info.location),
        availability = escape_html(info.availability),
        socials = socials,
        ctf = ctf
    );
    html
}
