use yew::prelude::*;

use crate::components::cards::{not_found_meta, CatalogPageProps, ContentNotFound, EntryCard, SidebarCta, CATALOG_STYLE};
use crate::components::content_html::ContentHtml;
use crate::components::sections::{FinalCta, PageHero};
use crate::content::{ContentKind, Entry, Lookup};
use crate::seo::{article_schema, breadcrumb_schema, ArticleMeta, OgType, Seo, SeoProps};

const KIND: ContentKind = ContentKind::Guides;
const PUBLISHED: &str = "2024-01-15";

#[function_component(GuidePage)]
pub fn guide_page(props: &CatalogPageProps) -> Html {
    let body = match props.slug.as_deref() {
        None => hub(),
        Some(slug) => match KIND.lookup(slug) {
            Lookup::Found(entry) => detail(entry, &props.on_quote),
            Lookup::NotFound { kind } => html! {
                <>
                    <Seo meta={not_found_meta(kind)} />
                    <ContentNotFound {kind} />
                </>
            },
        },
    };

    html! {
        <div class="catalog-page guides-page">
            { body }
            <style>{CATALOG_STYLE}</style>
        </div>
    }
}

fn hub() -> Html {
    let meta = SeoProps::page(
        "Roofing Guides",
        "Plain-English guides to roof problems, repairs and replacements from Hampshire roofers.",
        KIND.hub_path(),
    );
    html! {
        <>
            <Seo {meta} schemas={vec![breadcrumb_schema(&[("Home", "/"), (KIND.hub_label(), KIND.hub_path())])]} />
            <PageHero
                title="Roofing Guides"
                subtitle="Honest answers to the questions homeowners ask us most."
                eyebrow={Some(KIND.hub_label())}
            />
            <div class="card-grid">
                { for KIND.entries().iter().map(|entry| html! {
                    <EntryCard kind={KIND} {entry} />
                }) }
            </div>
        </>
    }
}

fn detail(entry: &'static Entry, on_quote: &Callback<()>) -> Html {
    let path = KIND.detail_path(entry.slug);
    let meta = SeoProps {
        og_image: Some(entry.image.to_string()),
        og_type: OgType::Article,
        article: Some(ArticleMeta {
            published_time: Some(PUBLISHED.to_string()),
            modified_time: None,
            author: Some(crate::config::SITE_NAME.to_string()),
        }),
        ..SeoProps::page(entry.title, entry.subtitle, &path)
    };
    let schemas = vec![
        article_schema(entry.title, entry.subtitle, Some(entry.image), Some(path.as_str()), PUBLISHED),
        breadcrumb_schema(&[("Home", "/"), (KIND.hub_label(), KIND.hub_path()), (entry.title, path.as_str())]),
    ];

    html! {
        <>
            <Seo {meta} {schemas} />
            <PageHero title={entry.title} subtitle={entry.subtitle} image={Some(entry.image)} eyebrow={Some("Guide")} />
            <div class="detail-layout">
                <article>
                    <ContentHtml html={entry.content} class={classes!("detail-content", "guide-article")} />
                </article>
                <aside class="detail-sidebar">
                    <SidebarCta on_quote={on_quote.clone()} heading={"Worried about your roof?"} />
                    <div class="sidebar-related">
                        <h3>{"More guides"}</h3>
                        { for KIND.others(entry.slug).map(|other| html! {
                            <EntryCard kind={KIND} entry={other} compact={true} />
                        }) }
                    </div>
                </aside>
            </div>
            <FinalCta on_quote={on_quote.clone()} />
        </>
    }
}
