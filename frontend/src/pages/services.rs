use yew::prelude::*;

use crate::components::cards::{not_found_meta, CatalogPageProps, ContentNotFound, EntryCard, SidebarCta, CATALOG_STYLE};
use crate::components::content_html::ContentHtml;
use crate::components::sections::{FinalCta, PageHero, Process};
use crate::content::{ContentKind, Entry, Lookup};
use crate::seo::{breadcrumb_schema, service_schema, Seo, SeoProps};

const KIND: ContentKind = ContentKind::Services;

/// Services hub, or a single service when a slug is given.
#[function_component(ServicePage)]
pub fn service_page(props: &CatalogPageProps) -> Html {
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
        <div class="catalog-page services-page">
            { body }
            <style>{CATALOG_STYLE}</style>
        </div>
    }
}

fn hub() -> Html {
    let meta = SeoProps::page(
        "Roofing Services",
        "Roof repairs, pitched and flat roof replacement, leadwork and cement work across Hampshire.",
        KIND.hub_path(),
    );
    html! {
        <>
            <Seo {meta} schemas={vec![breadcrumb_schema(&[("Home", "/"), (KIND.hub_label(), KIND.hub_path())])]} />
            <PageHero
                title="Our Roofing Services"
                subtitle="Every job starts with a proper survey. Here is what we can help with."
                eyebrow={Some(KIND.hub_label())}
            />
            <div class="card-grid">
                { for KIND.entries().iter().map(|entry| html! {
                    <EntryCard kind={KIND} {entry} />
                }) }
            </div>
            <Process />
        </>
    }
}

fn detail(entry: &'static Entry, on_quote: &Callback<()>) -> Html {
    let path = KIND.detail_path(entry.slug);
    let meta = SeoProps {
        og_image: Some(entry.image.to_string()),
        ..SeoProps::page(entry.title, entry.subtitle, &path)
    };
    let schemas = vec![
        service_schema(entry.title, entry.subtitle, Some(entry.image), Some(path.as_str())),
        breadcrumb_schema(&[("Home", "/"), (KIND.hub_label(), KIND.hub_path()), (entry.title, path.as_str())]),
    ];

    html! {
        <>
            <Seo {meta} {schemas} />
            <PageHero title={entry.title} subtitle={entry.subtitle} image={Some(entry.image)} eyebrow={Some(KIND.hub_label())} />
            <div class="detail-layout">
                <ContentHtml html={entry.content} class={classes!("detail-content")} />
                <aside class="detail-sidebar">
                    <SidebarCta on_quote={on_quote.clone()} />
                    <div class="sidebar-related">
                        <h3>{"Other services"}</h3>
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
