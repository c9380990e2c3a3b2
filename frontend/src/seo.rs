//! Document head metadata: title, meta tags, canonical link and JSON-LD.
//!
//! `PageMeta` is a plain record built from page props. `apply` writes it
//! into the live document, creating tags the first time and overwriting
//! them afterwards, so rendering the same page twice leaves one tag per key.

use serde_json::{json, Value};
use web_sys::{Document, Element};
use yew::prelude::*;

use crate::config::{self, BASE_URL, SITE_NAME};

pub const DEFAULT_TITLE: &str = "Hampshire Roof Care | Expert Roofing Services in Hampshire";
pub const DEFAULT_DESCRIPTION: &str = "Professional roof repairs, replacements, and maintenance across Hampshire. Free site surveys, honest advice, and quality workmanship. Serving Southampton, Winchester, New Forest, and surrounding areas.";
pub const DEFAULT_IMAGE: &str = "/og-image.jpg";

const ROBOTS_INDEX: &str = "index, follow, max-image-preview:large, max-snippet:-1, max-video-preview:-1";
const ROBOTS_NOINDEX: &str = "noindex, nofollow";

pub const AREAS_SERVED: &[&str] = &[
    "Southampton",
    "Winchester",
    "New Forest",
    "Chandler's Ford",
    "Eastleigh",
    "Hampshire",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OgType {
    #[default]
    Website,
    Article,
    LocalBusiness,
}

impl OgType {
    fn as_str(self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Article => "article",
            OgType::LocalBusiness => "business.business",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleMeta {
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeoProps {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Site-relative path, e.g. `/areas/winchester`.
    pub canonical: Option<String>,
    pub og_image: Option<String>,
    pub og_type: OgType,
    pub article: Option<ArticleMeta>,
    pub noindex: bool,
}

impl SeoProps {
    pub fn page(title: &str, description: &str, canonical: &str) -> Self {
        SeoProps {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            canonical: Some(canonical.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    fn as_str(self) -> &'static str {
        match self {
            MetaAttr::Name => "name",
            MetaAttr::Property => "property",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical_url: Option<String>,
    pub tags: Vec<MetaTag>,
}

pub fn absolute_url(path_or_url: &str) -> String {
    if path_or_url.starts_with("http") {
        path_or_url.to_string()
    } else {
        format!("{}{}", BASE_URL, path_or_url)
    }
}

impl PageMeta {
    pub fn from_props(props: &SeoProps) -> Self {
        let title = match &props.title {
            Some(title) => format!("{} | {}", title, SITE_NAME),
            None => DEFAULT_TITLE.to_string(),
        };
        let description = props
            .description
            .clone()
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());
        let image = absolute_url(props.og_image.as_deref().unwrap_or(DEFAULT_IMAGE));
        let canonical_url = props.canonical.as_deref().map(absolute_url);

        let mut tags = Vec::new();
        let mut push = |attr: MetaAttr, key: &'static str, content: &str| {
            tags.push(MetaTag { attr, key, content: content.to_string() });
        };

        push(MetaAttr::Name, "description", &description);
        push(
            MetaAttr::Name,
            "robots",
            if props.noindex { ROBOTS_NOINDEX } else { ROBOTS_INDEX },
        );

        push(MetaAttr::Property, "og:title", &title);
        push(MetaAttr::Property, "og:description", &description);
        push(MetaAttr::Property, "og:type", props.og_type.as_str());
        push(MetaAttr::Property, "og:site_name", SITE_NAME);
        push(MetaAttr::Property, "og:image", &image);
        push(MetaAttr::Property, "og:image:width", "1200");
        push(MetaAttr::Property, "og:image:height", "630");
        push(MetaAttr::Property, "og:locale", "en_GB");
        if let Some(url) = &canonical_url {
            push(MetaAttr::Property, "og:url", url);
        }

        push(MetaAttr::Name, "twitter:card", "summary_large_image");
        push(MetaAttr::Name, "twitter:title", &title);
        push(MetaAttr::Name, "twitter:description", &description);
        push(MetaAttr::Name, "twitter:image", &image);

        if let (OgType::Article, Some(article)) = (props.og_type, &props.article) {
            if let Some(published) = &article.published_time {
                push(MetaAttr::Property, "article:published_time", published);
            }
            if let Some(modified) = &article.modified_time {
                push(MetaAttr::Property, "article:modified_time", modified);
            }
            if let Some(author) = &article.author {
                push(MetaAttr::Property, "article:author", author);
            }
        }

        push(MetaAttr::Name, "geo.region", "GB-HAM");
        push(MetaAttr::Name, "geo.placename", "Hampshire");

        PageMeta { title, description, canonical_url, tags }
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.iter().find(|t| t.key == key).map(|t| t.content.as_str())
    }
}

/// A JSON-LD block, keyed so re-renders replace rather than append.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonLd {
    pub id: &'static str,
    pub value: Value,
}

fn cities(areas: &[&str]) -> Vec<Value> {
    areas.iter().map(|name| json!({ "@type": "City", "name": name })).collect()
}

pub fn local_business_schema() -> JsonLd {
    JsonLd {
        id: "local-business",
        value: json!({
            "@context": "https://schema.org",
            "@type": "RoofingContractor",
            "name": "Hampshire Roof Care Company",
            "description": DEFAULT_DESCRIPTION,
            "telephone": config::phone_international(),
            "email": config::EMAIL,
            "url": BASE_URL,
            "image": absolute_url(DEFAULT_IMAGE),
            "priceRange": "££",
            "areaServed": cities(AREAS_SERVED),
            "address": {
                "@type": "PostalAddress",
                "addressLocality": "Southampton",
                "addressRegion": "Hampshire",
                "addressCountry": "GB",
            },
            "geo": {
                "@type": "GeoCoordinates",
                "latitude": 50.9097,
                "longitude": -1.4044,
            },
            "openingHoursSpecification": [{
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
                "opens": "08:00",
                "closes": "18:00",
            }],
            "aggregateRating": {
                "@type": "AggregateRating",
                "ratingValue": "5",
                "ratingCount": "100",
                "bestRating": "5",
                "worstRating": "1",
            },
        }),
    }
}

pub fn service_schema(name: &str, description: &str, image: Option<&str>, path: Option<&str>) -> JsonLd {
    let mut value = json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "name": name,
        "description": description,
        "provider": {
            "@type": "RoofingContractor",
            "name": "Hampshire Roof Care Company",
            "url": BASE_URL,
        },
        "areaServed": cities(AREAS_SERVED),
    });
    if let Some(image) = image {
        value["image"] = json!(absolute_url(image));
    }
    if let Some(path) = path {
        value["url"] = json!(absolute_url(path));
    }
    JsonLd { id: "service", value }
}

pub fn faq_schema<'a>(faqs: impl IntoIterator<Item = (&'a str, &'a str)>) -> JsonLd {
    let entities: Vec<Value> = faqs
        .into_iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": { "@type": "Answer", "text": answer },
            })
        })
        .collect();
    JsonLd {
        id: "faq",
        value: json!({
            "@context": "https://schema.org",
            "@type": "FAQPage",
            "mainEntity": entities,
        }),
    }
}

pub fn article_schema(
    headline: &str,
    description: &str,
    image: Option<&str>,
    path: Option<&str>,
    published: &str,
) -> JsonLd {
    JsonLd {
        id: "article",
        value: json!({
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": headline,
            "description": description,
            "image": absolute_url(image.unwrap_or(DEFAULT_IMAGE)),
            "url": path.map(absolute_url),
            "datePublished": published,
            "dateModified": published,
            "author": { "@type": "Organization", "name": SITE_NAME, "url": BASE_URL },
            "publisher": {
                "@type": "Organization",
                "name": "Hampshire Roof Care Company",
                "url": BASE_URL,
                "logo": { "@type": "ImageObject", "url": absolute_url("/logo-dark.png") },
            },
        }),
    }
}

pub fn breadcrumb_schema(items: &[(&str, &str)]) -> JsonLd {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, (name, path))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": name,
                "item": absolute_url(path),
            })
        })
        .collect();
    JsonLd {
        id: "breadcrumb",
        value: json!({
            "@context": "https://schema.org",
            "@type": "BreadcrumbList",
            "itemListElement": elements,
        }),
    }
}

fn find_or_create(document: &Document, selector: &str, tag: &str, attrs: &[(&str, &str)]) -> Option<Element> {
    if let Ok(Some(existing)) = document.query_selector(selector) {
        return Some(existing);
    }
    let element = document.create_element(tag).ok()?;
    for (name, value) in attrs {
        let _ = element.set_attribute(name, value);
    }
    let head = document.head()?;
    head.append_child(&element).ok()?;
    Some(element)
}

/// Writes `meta` and `schemas` into the current document head.
pub fn apply(meta: &PageMeta, schemas: &[JsonLd]) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    document.set_title(&meta.title);

    for tag in &meta.tags {
        let attr = tag.attr.as_str();
        let selector = format!("meta[{}=\"{}\"]", attr, tag.key);
        if let Some(el) = find_or_create(&document, &selector, "meta", &[(attr, tag.key)]) {
            let _ = el.set_attribute("content", &tag.content);
        }
    }

    if let Some(url) = &meta.canonical_url {
        if let Some(el) = find_or_create(&document, "link[rel=\"canonical\"]", "link", &[("rel", "canonical")]) {
            let _ = el.set_attribute("href", url);
        }
    }

    for schema in schemas {
        let selector = format!("script[data-seo=\"{}\"]", schema.id);
        let attrs = [("type", "application/ld+json"), ("data-seo", schema.id)];
        if let Some(el) = find_or_create(&document, &selector, "script", &attrs) {
            el.set_text_content(Some(&schema.value.to_string()));
        }
    }
}

/// Drops the JSON-LD blocks with the given ids from the document head.
pub fn remove_schemas<'a>(ids: impl IntoIterator<Item = &'a str>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    for id in ids {
        let selector = format!("script[data-seo=\"{}\"]", id);
        if let Ok(Some(el)) = document.query_selector(&selector) {
            el.remove();
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SeoComponentProps {
    pub meta: SeoProps,
    #[prop_or_default]
    pub schemas: Vec<JsonLd>,
}

/// Renders nothing; keeps the document head in sync with its props.
/// A page's JSON-LD leaves the head with it.
#[function_component(Seo)]
pub fn seo(props: &SeoComponentProps) -> Html {
    use_effect_with_deps(
        move |(meta, schemas)| {
            apply(&PageMeta::from_props(meta), schemas);
            let ids: Vec<&'static str> = schemas.iter().map(|schema| schema.id).collect();
            move || remove_schemas(ids)
        },
        (props.meta.clone(), props.schemas.clone()),
    );
    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn defaults_when_props_are_empty() {
        let meta = PageMeta::from_props(&SeoProps::default());
        assert_eq!(meta.title, DEFAULT_TITLE);
        assert_eq!(meta.description, DEFAULT_DESCRIPTION);
        assert!(meta.canonical_url.is_none());
        assert!(meta.tag("og:url").is_none());
        assert_eq!(meta.tag("og:image"), Some("https://hampshireroofcare.co.uk/og-image.jpg"));
    }

    #[test]
    fn page_props_fill_title_and_canonical() {
        let meta = PageMeta::from_props(&SeoProps::page("Roof Repairs", "Fixing roofs", "/services/roof-repairs"));
        assert_eq!(meta.title, "Roof Repairs | Hampshire Roof Care");
        assert_eq!(
            meta.canonical_url.as_deref(),
            Some("https://hampshireroofcare.co.uk/services/roof-repairs")
        );
        assert_eq!(meta.tag("twitter:title"), Some(meta.title.as_str()));
        assert_eq!(meta.tag("description"), Some("Fixing roofs"));
    }

    #[test]
    fn one_tag_per_key() {
        let props = SeoProps {
            canonical: Some("/guides/x".into()),
            og_type: OgType::Article,
            article: Some(ArticleMeta {
                published_time: Some("2024-01-01".into()),
                modified_time: None,
                author: Some("Hampshire Roof Care".into()),
            }),
            ..Default::default()
        };
        let meta = PageMeta::from_props(&props);
        let keys: HashSet<_> = meta.tags.iter().map(|t| t.key).collect();
        assert_eq!(keys.len(), meta.tags.len());
        assert_eq!(meta.tag("og:type"), Some("article"));
        assert_eq!(meta.tag("article:published_time"), Some("2024-01-01"));
        assert!(meta.tag("article:modified_time").is_none());
    }

    #[test]
    fn article_tags_need_article_type() {
        let props = SeoProps {
            article: Some(ArticleMeta { author: Some("x".into()), ..Default::default() }),
            ..Default::default()
        };
        assert!(PageMeta::from_props(&props).tag("article:author").is_none());
    }

    #[test]
    fn noindex_and_business_type() {
        let props = SeoProps { noindex: true, og_type: OgType::LocalBusiness, ..Default::default() };
        let meta = PageMeta::from_props(&props);
        assert_eq!(meta.tag("robots"), Some("noindex, nofollow"));
        assert_eq!(meta.tag("og:type"), Some("business.business"));
    }

    #[test]
    fn absolute_images_are_left_alone() {
        let props = SeoProps { og_image: Some("https://cdn.example/x.jpg".into()), ..Default::default() };
        assert_eq!(PageMeta::from_props(&props).tag("og:image"), Some("https://cdn.example/x.jpg"));
    }

    #[test]
    fn breadcrumb_positions_start_at_one() {
        let crumbs = breadcrumb_schema(&[("Home", "/"), ("Areas", "/areas")]);
        let items = crumbs.value["itemListElement"].as_array().unwrap();
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[1]["item"], "https://hampshireroofcare.co.uk/areas");
    }

    #[test]
    fn business_schema_uses_international_phone() {
        let schema = local_business_schema();
        assert_eq!(schema.value["telephone"], "+447538284300");
        assert_eq!(schema.value["areaServed"].as_array().unwrap().len(), AREAS_SERVED.len());
    }

    #[test]
    fn service_schema_optional_fields() {
        let bare = service_schema("Leadwork", "Lead", None, None);
        assert!(bare.value.get("image").is_none());
        let full = service_schema("Leadwork", "Lead", Some("/a.jpg"), Some("/services/leadwork"));
        assert_eq!(full.value["url"], "https://hampshireroofcare.co.uk/services/leadwork");
    }

    #[test]
    fn faq_schema_lists_questions() {
        let schema = faq_schema([("Q1", "A1"), ("Q2", "A2")]);
        assert_eq!(schema.value["mainEntity"].as_array().unwrap().len(), 2);
        assert_eq!(schema.value["mainEntity"][0]["acceptedAnswer"]["text"], "A1");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn count(selector: &str) -> u32 {
        let document = web_sys::window().and_then(|w| w.document()).unwrap();
        document.query_selector_all(selector).unwrap().length()
    }

    #[wasm_bindgen_test]
    fn applying_twice_leaves_one_element_per_key() {
        let meta = PageMeta::from_props(&SeoProps::page("FAQs", "Answers", "/faqs"));
        let schemas = vec![faq_schema([("Q", "A")]), breadcrumb_schema(&[("Home", "/")])];

        apply(&meta, &schemas);
        apply(&meta, &schemas);

        assert_eq!(count("meta[name=\"description\"]"), 1);
        assert_eq!(count("meta[property=\"og:title\"]"), 1);
        assert_eq!(count("link[rel=\"canonical\"]"), 1);
        assert_eq!(count("script[data-seo=\"faq\"]"), 1);
        assert_eq!(count("script[data-seo=\"breadcrumb\"]"), 1);

        let document = web_sys::window().and_then(|w| w.document()).unwrap();
        assert_eq!(document.title(), "FAQs | Hampshire Roof Care");
    }

    #[wasm_bindgen_test]
    fn removed_schemas_leave_the_head() {
        let meta = PageMeta::from_props(&SeoProps::page("Leadwork", "Lead", "/services/leadwork"));
        apply(&meta, &[service_schema("Leadwork", "Lead", None, None), faq_schema([("Q", "A")])]);
        assert_eq!(count("script[data-seo=\"service\"]"), 1);

        remove_schemas(["service", "faq"]);
        apply(&PageMeta::from_props(&SeoProps::page("About", "Us", "/about")), &[]);

        assert_eq!(count("script[data-seo=\"service\"]"), 0);
        assert_eq!(count("script[data-seo=\"faq\"]"), 0);
        assert_eq!(count("link[rel=\"canonical\"]"), 1);
    }
}
