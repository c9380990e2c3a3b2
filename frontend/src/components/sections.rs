use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::{detail_route, EntryCard};
use crate::components::faq_item::FaqItem;
use crate::components::stat_counter::{StatCounterProps, StatsGrid};
use crate::config;
use crate::content::{ContentKind, Faq, Review, COMMON_PROBLEMS};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct QuoteCtaProps {
    pub on_quote: Callback<()>,
}

fn open_quote(on_quote: &Callback<()>) -> Callback<MouseEvent> {
    let on_quote = on_quote.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_quote.emit(());
    })
}

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub title: String,
    #[prop_or_default]
    pub subtitle: String,
    #[prop_or_default]
    pub image: Option<&'static str>,
    #[prop_or_default]
    pub eyebrow: Option<&'static str>,
}

/// Banner at the top of every inner page.
#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    let style = props
        .image
        .map(|src| format!("background-image: linear-gradient(rgba(15, 23, 42, 0.7), rgba(15, 23, 42, 0.7)), url('{}');", src))
        .unwrap_or_default();
    html! {
        <section class="page-hero" {style}>
            <div class="page-hero-content">
                if let Some(eyebrow) = props.eyebrow {
                    <span class="page-hero-eyebrow">{eyebrow}</span>
                }
                <h1>{&props.title}</h1>
                if !props.subtitle.is_empty() {
                    <p>{&props.subtitle}</p>
                }
            </div>
        </section>
    }
}

#[function_component(Hero)]
pub fn hero(props: &QuoteCtaProps) -> Html {
    html! {
        <section class="hero">
            <div class="hero-background"></div>
            <div class="hero-content">
                <span class="hero-badge">{"Trusted Roofers Across Hampshire"}</span>
                <h1>{"Honest Roofing. Surveyed First, Quoted Properly."}</h1>
                <p class="hero-subtitle">
                    {"Roof repairs, replacements and leadwork for homes in Southampton, Winchester, the New Forest and beyond."}
                </p>
                <div class="hero-actions">
                    <button class="hero-cta" onclick={open_quote(&props.on_quote)}>
                        {"Book Free Survey"}
                    </button>
                    <a class="hero-call" href={config::tel_href()}>
                        {format!("Call {}", config::PHONE_DISPLAY)}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(TrustStrip)]
pub fn trust_strip() -> Html {
    let stats = vec![
        StatCounterProps { end: 500, label: "Roofs surveyed".into(), prefix: String::new(), suffix: "+".into(), duration_ms: 2000 },
        StatCounterProps { end: 15, label: "Years' experience".into(), prefix: String::new(), suffix: String::new(), duration_ms: 2000 },
        StatCounterProps { end: 100, label: "Five-star reviews".into(), prefix: String::new(), suffix: "+".into(), duration_ms: 2000 },
        StatCounterProps { end: 24, label: "Hour response".into(), prefix: "<".into(), suffix: "h".into(), duration_ms: 2000 },
    ];
    html! {
        <section class="trust-strip">
            <StatsGrid {stats} />
        </section>
    }
}

#[function_component(ServicesBento)]
pub fn services_bento() -> Html {
    html! {
        <section class="services-bento">
            <h2>{"What We Do"}</h2>
            <div class="card-grid">
                { for ContentKind::Services.entries().iter().map(|entry| html! {
                    <EntryCard kind={ContentKind::Services} {entry} />
                }) }
            </div>
        </section>
    }
}

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    let points = [
        ("Honest Advice", "We don't push extra work. We explain what your roof needs and why."),
        ("High Standards", "We take pride in careful workmanship and a professional service."),
        ("Survey First", "We don't guess pricing. We inspect the roof first, always."),
    ];
    html! {
        <section class="why-choose-us">
            <h2>{"Why Homeowners Choose Us"}</h2>
            <div class="feature-grid">
                { for points.iter().map(|(title, desc)| html! {
                    <div class="feature-item">
                        <h3>{*title}</h3>
                        <p>{*desc}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(CommonProblems)]
pub fn common_problems(props: &QuoteCtaProps) -> Html {
    html! {
        <section class="common-problems">
            <div class="common-problems-header">
                <div>
                    <span class="section-eyebrow">{"Warning Signs"}</span>
                    <h2>{"Roof Problems That Need Attention"}</h2>
                </div>
                <div>
                    <p>{"Spotting issues early can save you a lot in repairs. These are the problems we see most, and what they mean for your home."}</p>
                    <Link<Route> to={Route::Guides} classes="section-link">{"View All Guides"}</Link<Route>>
                </div>
            </div>
            <div class="problem-grid">
                { for COMMON_PROBLEMS.iter().map(|problem| {
                    let (kind, slug) = problem.link;
                    html! {
                        <Link<Route> to={detail_route(kind, slug)} classes="problem-card">
                            <h3>{problem.title}</h3>
                            <p>{problem.description}</p>
                            <span class="problem-urgency">{problem.urgency}</span>
                            <span class="problem-more">{"Learn more"}</span>
                        </Link<Route>>
                    }
                }) }
            </div>
            <div class="problem-cta">
                <h3>{"Not Sure What's Wrong?"}</h3>
                <p>{"We offer a free survey. We'll get up on the roof, inspect it properly and explain exactly what we find."}</p>
                <div class="final-cta-actions">
                    <button class="cta-quote" onclick={open_quote(&props.on_quote)}>{"Book Free Survey"}</button>
                    <a class="cta-call" href={config::tel_href()}>{format!("Call {}", config::PHONE_DISPLAY)}</a>
                </div>
            </div>
        </section>
    }
}

#[function_component(Process)]
pub fn process() -> Html {
    let steps = [
        ("Get in touch", "Call or send the quote form. Tell us what you've noticed."),
        ("Free survey", "We inspect the roof properly and show you what we find."),
        ("Clear quote", "A written, fixed quote. No pressure to go ahead."),
        ("Quality work", "Tidy, careful work, finished when we said it would be."),
    ];
    html! {
        <section class="process">
            <h2>{"How It Works"}</h2>
            <ol class="process-steps">
                { for steps.iter().enumerate().map(|(i, (title, desc))| html! {
                    <li class="process-step">
                        <span class="process-number">{i + 1}</span>
                        <h3>{*title}</h3>
                        <p>{*desc}</p>
                    </li>
                }) }
            </ol>
        </section>
    }
}

pub fn stars(rating: u8) -> String {
    "★".repeat(rating.min(5) as usize)
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub reviews: &'static [Review],
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    html! {
        <section class="testimonials">
            <h2>{"What Our Customers Say"}</h2>
            <div class="testimonial-grid">
                { for props.reviews.iter().map(|review| html! {
                    <blockquote class="testimonial">
                        <div class="stars">{stars(review.rating)}</div>
                        <p>{format!("\"{}\"", review.text)}</p>
                        <footer>{format!("{}, {}", review.author, review.location)}</footer>
                    </blockquote>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeFaqsProps {
    pub faqs: &'static [Faq],
    pub on_quote: Callback<()>,
}

#[function_component(HomeFaqs)]
pub fn home_faqs(props: &HomeFaqsProps) -> Html {
    html! {
        <section class="home-faqs">
            <div class="home-faqs-intro">
                <h2>{"Questions You Might Have"}</h2>
                <p>{"Here are answers to the questions we hear most often from homeowners."}</p>
                <Link<Route> to={Route::Faqs} classes="text-link">{"View All FAQs →"}</Link<Route>>
                <button class="text-button" onclick={open_quote(&props.on_quote)}>{"Contact Us"}</button>
            </div>
            <div class="home-faqs-list">
                { for props.faqs.iter().enumerate().map(|(i, faq)| html! {
                    <FaqItem question={faq.question} answer={faq.answer} open={i == 0} />
                }) }
            </div>
        </section>
    }
}

#[function_component(AreasStrip)]
pub fn areas_strip() -> Html {
    html! {
        <section class="areas-strip">
            <h2>{"Areas We Cover"}</h2>
            <div class="areas-strip-list">
                { for ContentKind::Areas.entries().iter().map(|entry| html! {
                    <Link<Route> to={Route::AreaDetail { slug: entry.slug.to_string() }} classes="area-pill">
                        {entry.area_name()}
                    </Link<Route>>
                }) }
            </div>
        </section>
    }
}

#[function_component(FinalCta)]
pub fn final_cta(props: &QuoteCtaProps) -> Html {
    html! {
        <section class="final-cta">
            <h2>{"Ready to Sort Your Roof Out?"}</h2>
            <p>{"Book your free site survey today. Honest, no-obligation advice."}</p>
            <div class="final-cta-actions">
                <a class="cta-call" href={config::tel_href()}>{format!("Call {}", config::PHONE_DISPLAY)}</a>
                <button class="cta-quote" onclick={open_quote(&props.on_quote)}>{"Book Free Survey"}</button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::stars;

    #[test]
    fn stars_cap_at_five() {
        assert_eq!(stars(3), "★★★");
        assert_eq!(stars(9).chars().count(), 5);
    }
}
