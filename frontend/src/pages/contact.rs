use yew::prelude::*;

use crate::components::sections::{PageHero, QuoteCtaProps};
use crate::config;
use crate::content::ContentKind;
use crate::seo::{local_business_schema, Seo, SeoProps};

#[function_component(Contact)]
pub fn contact(props: &QuoteCtaProps) -> Html {
    let meta = SeoProps::page(
        "Contact Us",
        "Book a free roof survey in Hampshire. Call 07538 284300 or send us a quick quote request.",
        "/contact",
    );
    let open_quote = {
        let on_quote = props.on_quote.clone();
        Callback::from(move |_: MouseEvent| on_quote.emit(()))
    };

    html! {
        <div class="catalog-page contact-page">
            <Seo {meta} schemas={vec![local_business_schema()]} />
            <PageHero
                title="Book Your Free Survey"
                subtitle="Get honest advice and a clear quote with no obligation. We'll inspect your roof properly and explain exactly what we find."
                eyebrow={Some("Get In Touch")}
            />
            <p class="contact-badge">{"We typically respond within 2 hours"}</p>
            <div class="contact-grid">
                <div class="contact-options">
                    <h2>{"Contact Options"}</h2>
                    <a href={config::tel_href()} class="contact-option">
                        <h3>{"Call Us"}</h3>
                        <p>{"Mon-Fri, 8am - 6pm"}</p>
                        <span>{config::PHONE_DISPLAY}</span>
                    </a>
                    <a href={config::mailto_href("Roofing enquiry")} class="contact-option">
                        <h3>{"Email"}</h3>
                        <p>{"For general enquiries"}</p>
                        <span>{config::EMAIL}</span>
                    </a>
                    <div class="contact-option">
                        <h3>{"Areas Covered"}</h3>
                        <p>
                            { ContentKind::Areas.entries().iter().map(|a| a.area_name()).collect::<Vec<_>>().join(", ") }
                            {" and surrounding areas"}
                        </p>
                    </div>
                </div>
                <div class="contact-quote">
                    <h2>{"Request a Quote Online"}</h2>
                    <p>{"Answer a few quick questions about your roof and we'll get back to you within 24 hours."}</p>
                    <button class="sidebar-cta-button" onclick={open_quote}>{"Start Your Quote"}</button>
                </div>
            </div>
            <style>
                {r#"
                .contact-badge {
                    text-align: center;
                    margin: 2rem auto 0;
                    color: #c2410c;
                    font-weight: 600;
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    max-width: 1100px;
                    margin: 3rem auto;
                    padding: 0 1.5rem;
                }

                .contact-option {
                    display: block;
                    padding: 1rem;
                    border-radius: 1rem;
                    color: inherit;
                    text-decoration: none;
                }

                .contact-option:hover {
                    background: #f8fafc;
                }

                .contact-option span {
                    color: #ea580c;
                    font-weight: 700;
                }

                .contact-quote {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: #0f172a;
                    color: #ffffff;
                }

                @media (max-width: 900px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <style>{crate::components::cards::CATALOG_STYLE}</style>
        </div>
    }
}
