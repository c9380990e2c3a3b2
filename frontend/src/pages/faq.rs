use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::components::faq_item::FaqItem;
use crate::components::sections::{FinalCta, PageHero, QuoteCtaProps};
use crate::content::{search_faqs, FAQ_CATEGORIES};
use crate::seo::{faq_schema, Seo, SeoProps};

#[function_component(Faqs)]
pub fn faqs(props: &QuoteCtaProps) -> Html {
    let search = use_state(String::new);

    let meta = SeoProps::page(
        "Frequently Asked Questions",
        "Answers to common questions about roof repairs, replacements, surveys and pricing in Hampshire.",
        "/faqs",
    );
    let schema = faq_schema(
        FAQ_CATEGORIES
            .iter()
            .flat_map(|category| category.faqs.iter())
            .map(|faq| (faq.question, faq.answer)),
    );

    let oninput = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let matches = search_faqs(&search);

    html! {
        <div class="faq-page">
            <Seo {meta} schemas={vec![schema]} />
            <PageHero
                title="Frequently Asked Questions"
                subtitle="Straight answers about roofs, surveys and what things cost."
                eyebrow={Some("FAQs")}
            />
            <section class="faq-section">
                <input
                    type="search"
                    class="faq-search"
                    placeholder="Search questions..."
                    value={(*search).clone()}
                    {oninput}
                />
                if matches.is_empty() {
                    <p class="faq-empty">{format!("No questions match \"{}\". Give us a call and ask us directly.", search.trim())}</p>
                }
                { for matches.iter().map(|category| html! {
                    <div class="faq-category">
                        <h2>{category.title}</h2>
                        { for category.faqs.iter().map(|faq| html! {
                            <FaqItem question={faq.question} answer={faq.answer} />
                        }) }
                    </div>
                }) }
            </section>
            <FinalCta on_quote={props.on_quote.clone()} />
            <style>
                {r#"
                .faq-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #0f172a;
                }

                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem 1.5rem 4rem;
                }

                .faq-search {
                    width: 100%;
                    padding: 0.9rem 1.25rem;
                    border-radius: 999px;
                    border: 1px solid #cbd5e1;
                    font-size: 1rem;
                    margin-bottom: 2rem;
                }

                .faq-category h2 {
                    font-size: 1.5rem;
                    margin: 2rem 0 1rem;
                }

                .faq-item {
                    border-bottom: 1px solid #e2e8f0;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    text-align: left;
                    font-size: 1.05rem;
                    font-weight: 600;
                    cursor: pointer;
                    color: inherit;
                }

                .toggle-icon {
                    color: #f97316;
                    font-size: 1.5rem;
                }

                .faq-answer {
                    padding-bottom: 1.25rem;
                    color: #475569;
                    line-height: 1.6;
                }

                .faq-empty {
                    color: #64748b;
                    text-align: center;
                }
                "#}
            </style>
            <style>{crate::components::cards::CATALOG_STYLE}</style>
        </div>
    }
}
