use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{ContentKind, Entry};
use crate::seo::SeoProps;
use crate::Route;

pub fn detail_route(kind: ContentKind, slug: &str) -> Route {
    let slug = slug.to_string();
    match kind {
        ContentKind::Services => Route::ServiceDetail { slug },
        ContentKind::Areas => Route::AreaDetail { slug },
        ContentKind::Guides => Route::GuideDetail { slug },
    }
}

pub fn hub_route(kind: ContentKind) -> Route {
    match kind {
        ContentKind::Services => Route::Services,
        ContentKind::Areas => Route::Areas,
        ContentKind::Guides => Route::Guides,
    }
}

#[derive(Properties, PartialEq)]
pub struct EntryCardProps {
    pub kind: ContentKind,
    pub entry: &'static Entry,
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(EntryCard)]
pub fn entry_card(props: &EntryCardProps) -> Html {
    let entry = props.entry;
    let (heading, cta) = match props.kind {
        ContentKind::Services => (entry.title, "Learn More"),
        ContentKind::Areas => (entry.area_name(), "View Local Info"),
        ContentKind::Guides => (entry.title, "Read Guide"),
    };

    if props.compact {
        return html! {
            <Link<Route> to={detail_route(props.kind, entry.slug)} classes="entry-card compact">
                <img src={entry.image} alt={entry.title} loading="lazy" />
                <span>{heading}</span>
            </Link<Route>>
        };
    }

    html! {
        <Link<Route> to={detail_route(props.kind, entry.slug)} classes="entry-card">
            <img src={entry.image} alt={entry.title} loading="lazy" class="entry-card-image" />
            <div class="entry-card-body">
                <h3>{heading}</h3>
                <p>{entry.subtitle}</p>
                <span class="entry-card-cta">{cta}{" →"}</span>
            </div>
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub kind: ContentKind,
}

pub fn not_found_meta(kind: ContentKind) -> SeoProps {
    SeoProps {
        title: Some(kind.not_found_title().to_string()),
        canonical: Some(kind.hub_path().to_string()),
        noindex: true,
        ..SeoProps::default()
    }
}

/// Shown for a detail route whose slug isn't in the catalog.
#[function_component(ContentNotFound)]
pub fn content_not_found(props: &NotFoundProps) -> Html {
    html! {
        <div class="not-found-page">
            <h1>{props.kind.not_found_title()}</h1>
            <Link<Route> to={hub_route(props.kind)} classes="back-link">
                {props.kind.back_label()}
            </Link<Route>>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CatalogPageProps {
    #[prop_or_default]
    pub slug: Option<String>,
    pub on_quote: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct SidebarCtaProps {
    pub on_quote: Callback<()>,
    #[prop_or("Need a roofer?")]
    pub heading: &'static str,
}

#[function_component(SidebarCta)]
pub fn sidebar_cta(props: &SidebarCtaProps) -> Html {
    let onclick = {
        let on_quote = props.on_quote.clone();
        Callback::from(move |_: MouseEvent| on_quote.emit(()))
    };
    html! {
        <div class="sidebar-cta">
            <h3>{props.heading}</h3>
            <p>{"Free, no-obligation survey and a written quote."}</p>
            <button class="sidebar-cta-button" {onclick}>{"Book Free Survey"}</button>
            <a href={crate::config::tel_href()} class="sidebar-cta-phone">
                {format!("Or call {}", crate::config::PHONE_DISPLAY)}
            </a>
        </div>
    }
}

/// Layout shared by the hub and detail pages of every catalog.
pub const CATALOG_STYLE: &str = r#"
.catalog-page {
    padding-top: 74px;
    color: #0f172a;
}

.page-hero {
    padding: 6rem 1.5rem 4rem;
    background-color: #0f172a;
    background-size: cover;
    background-position: center;
    color: #ffffff;
    text-align: center;
}

.page-hero-eyebrow {
    color: #fdba74;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    font-size: 0.8rem;
}

.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 1.5rem;
    max-width: 1200px;
    margin: 3rem auto;
    padding: 0 1.5rem;
}

.entry-card {
    display: block;
    border-radius: 1rem;
    overflow: hidden;
    background: #ffffff;
    box-shadow: 0 4px 20px rgba(15, 23, 42, 0.08);
    color: inherit;
    text-decoration: none;
    transition: transform 0.2s ease;
}

.entry-card:hover {
    transform: translateY(-4px);
}

.entry-card-image {
    width: 100%;
    height: 200px;
    object-fit: cover;
}

.entry-card-body {
    padding: 1.25rem;
}

.entry-card-cta {
    color: #f97316;
    font-weight: 600;
}

.entry-card.compact {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.5rem;
    box-shadow: none;
}

.entry-card.compact img {
    width: 56px;
    height: 56px;
    border-radius: 0.5rem;
    object-fit: cover;
}

.detail-layout {
    display: grid;
    grid-template-columns: 2fr 1fr;
    gap: 3rem;
    max-width: 1200px;
    margin: 3rem auto;
    padding: 0 1.5rem;
}

.detail-content h2 {
    margin-top: 2rem;
}

.detail-sidebar {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.sidebar-cta {
    padding: 1.5rem;
    border-radius: 1rem;
    background: #0f172a;
    color: #ffffff;
}

.sidebar-cta-button {
    width: 100%;
    padding: 0.85rem;
    border: none;
    border-radius: 0.75rem;
    background: #f97316;
    color: #ffffff;
    font-weight: 700;
    cursor: pointer;
}

.sidebar-cta-phone {
    display: block;
    margin-top: 0.75rem;
    color: #cbd5e1;
}

.not-found-page {
    min-height: 60vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 1rem;
}

.back-link {
    color: #f97316;
}

@media (max-width: 900px) {
    .detail-layout {
        grid-template-columns: 1fr;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use yew_router::Routable;

    #[test]
    fn card_routes_match_catalog_paths() {
        for kind in [ContentKind::Services, ContentKind::Areas, ContentKind::Guides] {
            assert_eq!(hub_route(kind).to_path(), kind.hub_path());
            for entry in kind.entries() {
                assert_eq!(detail_route(kind, entry.slug).to_path(), kind.detail_path(entry.slug));
            }
        }
    }

    #[test]
    fn unknown_slug_meta_points_back_to_the_hub() {
        let meta = not_found_meta(ContentKind::Areas);
        assert!(meta.noindex);
        assert_eq!(meta.title.as_deref(), Some("Area not found"));
        assert_eq!(meta.canonical.as_deref(), Some("/areas"));
    }
}
