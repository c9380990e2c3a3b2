use yew::prelude::*;

use crate::components::sections::{FinalCta, PageHero, Process, QuoteCtaProps, WhyChooseUs};
use crate::components::stat_counter::{StatCounterProps, StatsGrid};
use crate::seo::{Seo, SeoProps};

fn stat(end: u32, label: &str, suffix: &str) -> StatCounterProps {
    StatCounterProps {
        end,
        label: label.to_string(),
        prefix: String::new(),
        suffix: suffix.to_string(),
        duration_ms: 2000,
    }
}

#[function_component(About)]
pub fn about(props: &QuoteCtaProps) -> Html {
    let meta = SeoProps::page(
        "About Us",
        "A local Hampshire roofing company built on honest surveys, fair quotes and careful workmanship.",
        "/about",
    );
    let stats = vec![
        stat(15, "Years on the tools", "+"),
        stat(1200, "Jobs completed", "+"),
        stat(98, "Would recommend us", "%"),
    ];

    html! {
        <div class="catalog-page about-page">
            <Seo {meta} />
            <PageHero
                title="Local Roofers Who Tell You the Truth"
                subtitle="We started Hampshire Roof Care because too many homeowners were sold work they didn't need."
                eyebrow={Some("About Us")}
            />
            <section class="about-story">
                <h2>{"Our Story"}</h2>
                <p>
                    {"We're a small, family-run team based in Hampshire. Every job starts with a proper look at the roof, \
                      and every quote explains what we found and why the work is needed."}
                </p>
                <p>
                    {"If a repair will do, we'll say so. If the roof has reached the end of its life, we'll show you the \
                      evidence and talk you through the options. No pressure, no scare tactics."}
                </p>
            </section>
            <section class="about-stats">
                <StatsGrid {stats} />
            </section>
            <WhyChooseUs />
            <Process />
            <FinalCta on_quote={props.on_quote.clone()} />
            <style>
                {r#"
                .about-story,
                .about-stats {
                    max-width: 900px;
                    margin: 3rem auto;
                    padding: 0 1.5rem;
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1.5rem;
                    text-align: center;
                }

                .stat-number {
                    font-size: 2.5rem;
                    font-weight: 800;
                    color: #ea580c;
                }
                "#}
            </style>
            <style>{crate::components::cards::CATALOG_STYLE}</style>
        </div>
    }
}
