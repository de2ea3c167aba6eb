//! schema.org structured data blocks.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::site::content::{Faq, WEBSITE_DESCRIPTION};
use crate::site::SiteMeta;

const SCHEMA_ORG: &str = "https://schema.org";

#[derive(Debug, Serialize)]
pub struct FaqPage<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "mainEntity")]
    pub main_entity: Vec<Question<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Question<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: Answer<'a>,
}

#[derive(Debug, Serialize)]
pub struct Answer<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSite<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
    pub url: &'a str,
    pub description: &'a str,
    pub in_language: &'static str,
    pub date_modified: String,
}

pub fn faq_page(faqs: &[Faq]) -> FaqPage<'_> {
    FaqPage {
        context: SCHEMA_ORG,
        kind: "FAQPage",
        main_entity: faqs
            .iter()
            .map(|f| Question {
                kind: "Question",
                name: f.question,
                accepted_answer: Answer {
                    kind: "Answer",
                    text: f.answer,
                },
            })
            .collect(),
    }
}

pub fn website<'a>(meta: &'a SiteMeta, modified: DateTime<Utc>) -> WebSite<'a> {
    WebSite {
        context: SCHEMA_ORG,
        kind: "WebSite",
        name: &meta.name,
        url: &meta.canonical_url,
        description: WEBSITE_DESCRIPTION,
        in_language: "en",
        date_modified: modified.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Serialize for embedding in a `<script type="application/ld+json">`.
///
/// `</` is escaped so the payload cannot close the script element.
pub fn to_script_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::content::FAQS;
    use chrono::TimeZone;
    use serde_json::{json, Value};

    #[test]
    fn test_faq_page_shape() {
        let value = serde_json::to_value(faq_page(&FAQS[..1])).unwrap();
        assert_eq!(
            value,
            json!({
                "@context": "https://schema.org",
                "@type": "FAQPage",
                "mainEntity": [{
                    "@type": "Question",
                    "name": "Are these worksheets free to print?",
                    "acceptedAnswer": {
                        "@type": "Answer",
                        "text": FAQS[0].answer,
                    },
                }],
            })
        );
    }

    #[test]
    fn test_faq_page_has_every_question() {
        let value = serde_json::to_value(faq_page(FAQS)).unwrap();
        let entities = value["mainEntity"].as_array().unwrap();
        assert_eq!(entities.len(), FAQS.len());
        for (entity, faq) in entities.iter().zip(FAQS) {
            assert_eq!(entity["name"], faq.question);
            assert_eq!(entity["acceptedAnswer"]["text"], faq.answer);
        }
    }

    #[test]
    fn test_website_shape() {
        let meta = SiteMeta::default();
        let modified = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();
        let value: Value = serde_json::to_value(website(&meta, modified)).unwrap();
        assert_eq!(value["@type"], "WebSite");
        assert_eq!(value["name"], "i🩷Worksheets");
        assert_eq!(value["url"], "https://iloveworksheets.com");
        assert_eq!(value["inLanguage"], "en");
        assert_eq!(value["dateModified"], "2025-03-01T12:30:00.000Z");
        assert_eq!(value["description"], WEBSITE_DESCRIPTION);
    }

    #[test]
    fn test_script_json_cannot_close_the_tag() {
        let faqs = [Faq {
            question: "x</script><b>",
            answer: "ok",
        }];
        let out = to_script_json(&faq_page(&faqs)).unwrap();
        assert!(!out.contains("</"));
        assert!(out.contains("x<\\/script>"));
    }
}
