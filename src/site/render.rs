//! HTML rendering for the landing page and the error page.

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::site::content::*;
use crate::site::json_ld;
use crate::site::SiteMeta;

const FONT_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Inter:ital,opsz,wght@0,14..32,100..900;1,14..32,100..900&display=swap";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize structured data: {0}")]
    JsonLd(#[from] serde_json::Error),
}

/// Render the full landing page.
///
/// `modified` becomes the WebSite `dateModified`.
pub fn render_home(meta: &SiteMeta, modified: DateTime<Utc>) -> Result<String, RenderError> {
    let faq_ld = json_ld::to_script_json(&json_ld::faq_page(FAQS))?;
    let website_ld = json_ld::to_script_json(&json_ld::website(meta, modified))?;

    let mut body = String::with_capacity(32 * 1024);
    site_header(&mut body, meta);
    body.push_str("<main>");
    hero(&mut body, meta);
    body.push_str(r#"<div class="container">"#);
    trust_bar(&mut body);
    grade_grid(&mut body);
    subject_grid(&mut body);
    how_it_works(&mut body);
    quality_promise(&mut body);
    library(&mut body);
    faq(&mut body, &[faq_ld.as_str(), website_ld.as_str()]);
    body.push_str("</div></main>");
    site_footer(&mut body, meta);

    Ok(document(meta, TITLE, &body))
}

/// Render the error page for `status`.
pub fn render_error(meta: &SiteMeta, status: StatusCode) -> String {
    let (heading, details) = if status == StatusCode::NOT_FOUND {
        ("404", "The requested page could not be found.")
    } else {
        (
            "Error",
            status
                .canonical_reason()
                .unwrap_or("An unexpected error occurred."),
        )
    };

    let mut body = String::new();
    body.push_str(r#"<main class="error">"#);
    element(&mut body, "h1", heading);
    element(&mut body, "p", details);
    body.push_str("</main>");

    document(meta, &format!("{heading} | {}", meta.name), &body)
}

fn document(meta: &SiteMeta, title: &str, body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 2048);
    out.push_str("<!DOCTYPE html><html lang=\"en\"><head>");
    out.push_str(r#"<meta charset="utf-8">"#);
    out.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    element(&mut out, "title", title);
    meta_tag(&mut out, "name", "description", DESCRIPTION);
    meta_tag(&mut out, "name", "theme-color", &meta.theme_color);
    meta_tag(&mut out, "property", "og:title", title);
    meta_tag(&mut out, "property", "og:description", DESCRIPTION);
    meta_tag(&mut out, "property", "og:type", "website");
    out.push_str(r#"<link rel="preconnect" href="https://fonts.googleapis.com">"#);
    out.push_str(r#"<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous">"#);
    out.push_str(&format!(r#"<link rel="stylesheet" href="{}">"#, escape(FONT_STYLESHEET)));
    out.push_str(&format!(r#"<link rel="canonical" href="{}">"#, escape(&meta.canonical_url)));
    out.push_str("</head><body>");
    out.push_str(body);
    out.push_str("</body></html>");
    out
}

fn site_header(out: &mut String, meta: &SiteMeta) {
    out.push_str(r#"<header class="site-header"><div class="brand">"#);
    out.push_str(&escape(&meta.name));
    out.push_str(r#"</div><nav aria-label="Primary"><ul>"#);
    for (href, label) in NAV {
        out.push_str(&format!(
            r#"<li><a class="nav-pill" href="{}">{}</a></li>"#,
            escape(href),
            escape(label)
        ));
    }
    out.push_str("</ul></nav></header>");
}

fn hero(out: &mut String, meta: &SiteMeta) {
    out.push_str(r#"<section class="hero"><div class="hero-copy">"#);
    element_with_class(out, "p", "kicker", HERO_KICKER);
    out.push_str(&format!(
        r#"<h1>{}<span class="subhead">{}</span></h1>"#,
        escape(&meta.name),
        escape(HERO_HEADLINE)
    ));
    element(out, "p", HERO_LEAD);

    out.push_str(r#"<div class="chips">"#);
    for chip in HERO_CHIPS {
        pill(out, chip.text, chip.accent);
    }
    out.push_str(r#"</div><div class="actions">"#);
    for label in HERO_BUTTONS {
        out.push_str(&format!(
            r#"<button type="button" aria-disabled="true" tabindex="-1" title="Placeholder button">{}</button>"#,
            escape(label)
        ));
    }
    element_with_class(out, "div", "note", HERO_NOTE);
    out.push_str("</div></div>");

    out.push_str(r#"<div class="hero-cards">"#);
    for card in HERO_CARDS {
        card_block(out, "card", card);
    }
    out.push_str(r#"<div class="can-do">"#);
    element_with_class(out, "div", "title", HERO_CAN_DO.title);
    list(out, Some("grades"), HERO_CAN_DO.items);
    out.push_str("</div></div></section>");
}

fn trust_bar(out: &mut String) {
    out.push_str(r#"<section class="trust-bar">"#);
    for item in TRUST_BAR {
        card_block(out, "trust-item", item);
    }
    out.push_str("</section>");
}

fn grade_grid(out: &mut String) {
    out.push_str(r#"<section class="grades">"#);
    element(out, "h2", GRADES_HEADING);
    element(out, "p", GRADES_LEAD);
    out.push_str(r#"<div class="grid">"#);
    for grade in GRADES {
        out.push_str(r#"<div class="tile">"#);
        element_with_class(out, "div", "title", grade.title);
        element_with_class(out, "div", "body", grade.body);
        out.push_str(r#"<div class="pills">"#);
        for p in GRADE_PILLS {
            pill(out, p.text, p.accent);
        }
        out.push_str("</div></div>");
    }
    out.push_str("</div></section>");
}

fn subject_grid(out: &mut String) {
    out.push_str(r#"<section class="subjects"><h2 id="subjects">"#);
    out.push_str(&escape(SUBJECTS_HEADING));
    out.push_str("</h2>");
    element(out, "p", SUBJECTS_LEAD);
    out.push_str(r#"<div class="grid">"#);
    for subject in SUBJECTS {
        out.push_str(r#"<div class="tile"><div class="tile-head">"#);
        element_with_class(out, "div", "title", subject.title);
        pill(out, subject.tag, subject.accent);
        out.push_str("</div>");
        element(out, "p", subject.body);
        out.push_str(r#"<div class="pills">"#);
        for p in SUBJECT_PILLS {
            pill(out, p, "slate");
        }
        out.push_str("</div></div>");
    }
    out.push_str("</div></section>");
}

fn how_it_works(out: &mut String) {
    out.push_str(r#"<section class="how-it-works">"#);
    element(out, "h2", HOW_IT_WORKS_HEADING);
    element(out, "p", HOW_IT_WORKS_LEAD);
    out.push_str("<ol>");
    for (i, step) in STEPS.iter().enumerate() {
        out.push_str(&format!(r#"<li><span class="step">{}</span>"#, i + 1));
        element_with_class(out, "div", "title", step.title);
        element_with_class(out, "div", "body", step.body);
        out.push_str("</li>");
    }
    out.push_str("</ol></section>");
}

fn quality_promise(out: &mut String) {
    out.push_str(r#"<section class="quality">"#);
    element(out, "h2", QUALITY_HEADING);
    element(out, "p", QUALITY_LEAD);
    out.push_str(r#"<div class="badges">"#);
    for badge in BADGES {
        card_block(out, "badge", badge);
    }
    out.push_str("</div></section>");
}

fn library(out: &mut String) {
    out.push_str(r#"<section id="worksheets" class="library"><article><header>"#);
    element_with_class(out, "p", "kicker", LIBRARY_KICKER);
    element(out, "h2", LIBRARY_HEADING);
    element(out, "p", LIBRARY_LEAD);
    out.push_str(r#"</header><div class="lists">"#);
    for block in LIBRARY_LISTS {
        topic_list(out, block);
    }
    out.push_str(r#"</div><section class="topics">"#);
    element(out, "h3", TOPICS_HEADING);
    element(out, "p", TOPICS_LEAD);
    out.push_str(r#"<div class="grid">"#);
    for block in TOPIC_BLOCKS {
        topic_list(out, block);
    }
    out.push_str("</div></section></article></section>");
}

fn faq(out: &mut String, structured_data: &[&str]) {
    out.push_str(r#"<section id="faq" class="faq" aria-label="FAQ">"#);
    element(out, "h2", FAQ_HEADING);
    element(out, "p", FAQ_LEAD);
    out.push_str(r#"<div class="questions">"#);
    for item in FAQS {
        out.push_str("<article>");
        element(out, "h3", item.question);
        element(out, "p", item.answer);
        out.push_str("</article>");
    }
    out.push_str("</div>");
    // Already JSON with "</" escaped, must not be HTML-escaped.
    for block in structured_data {
        out.push_str(r#"<script type="application/ld+json">"#);
        out.push_str(block);
        out.push_str("</script>");
    }
    out.push_str("</section>");
}

fn site_footer(out: &mut String, meta: &SiteMeta) {
    out.push_str(r#"<footer class="site-footer"><div class="brand">"#);
    out.push_str(&escape(&meta.name));
    out.push_str("</div>");
    element(out, "div", FOOTER_TAGLINE);
    out.push_str(r#"<div aria-label="Footer" class="chips">"#);
    for chip in FOOTER_CHIPS {
        pill(out, chip, "slate");
    }
    out.push_str("</div>");
    element_with_class(out, "div", "note", FOOTER_NOTE);
    out.push_str("</footer>");
}

fn card_block(out: &mut String, class: &str, card: &Card) {
    out.push_str(&format!(r#"<div class="{}">"#, escape(class)));
    element_with_class(out, "div", "title", card.title);
    element_with_class(out, "div", "body", card.body);
    out.push_str("</div>");
}

fn topic_list(out: &mut String, block: &TopicList) {
    out.push_str(r#"<div class="topic-list">"#);
    element_with_class(out, "div", "title", block.title);
    list(out, None, block.items);
    out.push_str("</div>");
}

fn list(out: &mut String, id: Option<&str>, items: &[&str]) {
    match id {
        Some(id) => out.push_str(&format!(r#"<ul id="{}">"#, escape(id))),
        None => out.push_str("<ul>"),
    }
    for item in items {
        element(out, "li", item);
    }
    out.push_str("</ul>");
}

fn pill(out: &mut String, text: &str, accent: &str) {
    out.push_str(&format!(
        r#"<span class="pill pill-{}">{}</span>"#,
        escape(accent),
        escape(text)
    ));
}

fn meta_tag(out: &mut String, attr: &str, key: &str, content: &str) {
    out.push_str(&format!(
        r#"<meta {attr}="{}" content="{}">"#,
        escape(key),
        escape(content)
    ));
}

fn element(out: &mut String, tag: &str, text: &str) {
    out.push_str(&format!("<{tag}>{}</{tag}>", escape(text)));
}

fn element_with_class(out: &mut String, tag: &str, class: &str, text: &str) {
    out.push_str(&format!(
        r#"<{tag} class="{}">{}</{tag}>"#,
        escape(class),
        escape(text)
    ));
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
