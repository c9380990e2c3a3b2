use yew::prelude::*;

use crate::components::cards::{not_found_meta, CatalogPageProps, ContentNotFound, EntryCard, SidebarCta, CATALOG_STYLE};
use crate::components::content_html::ContentHtml;
use crate::components::sections::{FinalCta, PageHero, WhyChooseUs};
use crate::content::{ContentKind, Entry, Lookup};
use crate::seo::{breadcrumb_schema, local_business_schema, Seo, SeoProps};

const KIND: ContentKind = ContentKind::Areas;

#[function_component(AreaPage)]
pub fn area_page(props: &CatalogPageProps) -> Html {
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
        <div class="catalog-page areas-page">
            { body }
            <style>{CATALOG_STYLE}</style>
        </div>
    }
}

fn hub() -> Html {
    let meta = SeoProps::page(
        "Areas We Cover",
        "Local roofers covering Southampton, Winchester, the New Forest, Chandler's Ford, Eastleigh and the surrounding villages.",
        KIND.hub_path(),
    );
    html! {
        <>
            <Seo {meta} schemas={vec![breadcrumb_schema(&[("Home", "/"), (KIND.hub_label(), KIND.hub_path())])]} />
            <PageHero
                title="Areas We Cover"
                subtitle="Based in Hampshire and working across the county. If your town isn't listed, ask anyway."
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
        ..SeoProps::page(entry.title, entry.subtitle, &path)
    };
    let schemas = vec![
        local_business_schema(),
        breadcrumb_schema(&[("Home", "/"), (KIND.hub_label(), KIND.hub_path()), (entry.area_name(), path.as_str())]),
    ];

    html! {
        <>
            <Seo {meta} {schemas} />
            <PageHero title={entry.title} subtitle={entry.subtitle} image={Some(entry.image)} eyebrow={Some("Local Roofers")} />
            <div class="detail-layout">
                <div>
                    <ContentHtml html={entry.content} class={classes!("detail-content")} />
                    <h2>{format!("Services in {}", entry.area_name())}</h2>
                    <div class="card-grid">
                        { for ContentKind::Services.entries().iter().map(|service| html! {
                            <EntryCard kind={ContentKind::Services} entry={service} compact={true} />
                        }) }
                    </div>
                </div>
                <aside class="detail-sidebar">
                    <SidebarCta on_quote={on_quote.clone()} heading={"Roofer near you"} />
                    <div class="sidebar-related">
                        <h3>{"Nearby areas"}</h3>
                        { for KIND.others(entry.slug).map(|other| html! {
                            <EntryCard kind={KIND} entry={other} compact={true} />
                        }) }
                    </div>
                </aside>
            </div>
            <WhyChooseUs />
            <FinalCta on_quote={on_quote.clone()} />
        </>
    }
}
