use yew::prelude::*;

use crate::components::before_after::{BeforeAfterGrid, BeforeAfterSlider, Comparison};
use crate::components::sections::{
    AreasStrip, CommonProblems, FinalCta, Hero, HomeFaqs, Process, QuoteCtaProps, ServicesBento,
    Testimonials, TrustStrip, WhyChooseUs,
};
use crate::content::{HOME_FAQS, REVIEWS};
use crate::seo::{local_business_schema, Seo, SeoProps};

fn recent_projects() -> Vec<Comparison> {
    vec![
        Comparison {
            before_image: Some("/projects/chimney-before.jpg".into()),
            after_image: Some("/projects/chimney-after.jpg".into()),
            title: "Chimney rebuild, Winchester".into(),
        },
        Comparison {
            before_image: Some("/projects/flat-roof-before.jpg".into()),
            after_image: Some("/projects/flat-roof-after.jpg".into()),
            title: "GRP flat roof, Eastleigh".into(),
        },
        Comparison {
            before_image: None,
            after_image: None,
            title: "Ridge repointing, Chandler's Ford".into(),
        },
    ]
}

#[function_component(Home)]
pub fn home(props: &QuoteCtaProps) -> Html {
    // No page title: the default already leads with the business name.
    let meta = SeoProps {
        canonical: Some("/".to_string()),
        ..SeoProps::default()
    };

    html! {
        <div class="home-page">
            <Seo {meta} schemas={vec![local_business_schema()]} />
            <Hero on_quote={props.on_quote.clone()} />
            <TrustStrip />
            <ServicesBento />
            <WhyChooseUs />
            <CommonProblems on_quote={props.on_quote.clone()} />
            <section class="home-showcase">
                <h2>{"See the Difference"}</h2>
                <p>{"Drag the slider to compare a roof before and after we worked on it."}</p>
                <BeforeAfterSlider
                    before_image={Some("/projects/roof-before.jpg".to_string())}
                    after_image={Some("/projects/roof-after.jpg".to_string())}
                />
                <BeforeAfterGrid items={recent_projects()} />
            </section>
            <Process />
            <Testimonials reviews={REVIEWS.get(..3).unwrap_or(REVIEWS)} />
            <AreasStrip />
            <HomeFaqs faqs={HOME_FAQS} on_quote={props.on_quote.clone()} />
            <FinalCta on_quote={props.on_quote.clone()} />
            <style>
                {r#"
                .home-page {
                    color: #0f172a;
                    background: #ffffff;
                }

                .home-page section {
                    padding: 4rem 1.5rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .home-page h2 {
                    font-size: 2.25rem;
                    text-align: center;
                    margin-bottom: 2rem;
                }

                .hero {
                    position: relative;
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    max-width: none !important;
                    background: linear-gradient(rgba(15, 23, 42, 0.65), rgba(15, 23, 42, 0.65)),
                        url('/hero-roof.jpg') center / cover no-repeat;
                    color: #ffffff;
                }

                .hero-content {
                    max-width: 760px;
                    margin: 0 auto;
                    text-align: center;
                }

                .hero-badge {
                    display: inline-block;
                    padding: 0.4rem 1rem;
                    border-radius: 999px;
                    background: rgba(249, 115, 22, 0.2);
                    color: #fdba74;
                    font-size: 0.85rem;
                }

                .hero h1 {
                    font-size: 3rem;
                    line-height: 1.1;
                    margin: 1.5rem 0 1rem;
                }

                .hero-actions,
                .final-cta-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                    margin-top: 2rem;
                }

                .hero-cta,
                .cta-quote {
                    background: #f97316;
                    color: #ffffff;
                    border: none;
                    padding: 1rem 2rem;
                    border-radius: 0.75rem;
                    font-weight: 700;
                    cursor: pointer;
                }

                .hero-call,
                .cta-call {
                    padding: 1rem 2rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    color: inherit;
                    text-decoration: none;
                }

                .feature-grid,
                .testimonial-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }

                .common-problems-header {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    align-items: end;
                    margin-bottom: 2.5rem;
                }

                .common-problems-header h2 {
                    text-align: left;
                    margin-bottom: 0;
                }

                .section-eyebrow,
                .problem-urgency {
                    display: inline-block;
                    padding: 0.3rem 0.9rem;
                    border-radius: 999px;
                    background: #fef3c7;
                    color: #b45309;
                    font-size: 0.8rem;
                    font-weight: 600;
                }

                .problem-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }

                .problem-card {
                    display: block;
                    padding: 1.75rem;
                    border-radius: 1rem;
                    border: 1px solid #e2e8f0;
                    background: #f8fafc;
                    color: inherit;
                    text-decoration: none;
                }

                .problem-card:hover {
                    border-color: #fdba74;
                }

                .problem-more,
                .section-link {
                    display: block;
                    margin-top: 1rem;
                    color: #ea580c;
                    font-weight: 600;
                    text-decoration: none;
                }

                .problem-cta {
                    margin-top: 3rem;
                    padding: 2.5rem;
                    border-radius: 1.5rem;
                    background: #0f172a;
                    color: #ffffff;
                    text-align: center;
                }

                .process-steps {
                    list-style: none;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                    padding: 0;
                }

                .process-number {
                    display: inline-flex;
                    width: 2.5rem;
                    height: 2.5rem;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: #f97316;
                    color: #ffffff;
                    font-weight: 700;
                }

                .testimonial {
                    margin: 0;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: #f8fafc;
                }

                .stars {
                    color: #f59e0b;
                }

                .areas-strip-list {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    justify-content: center;
                }

                .area-pill {
                    padding: 0.5rem 1.25rem;
                    border-radius: 999px;
                    background: #f1f5f9;
                    color: #0f172a;
                    text-decoration: none;
                }

                .home-faqs {
                    display: grid;
                    grid-template-columns: 1fr 2fr;
                    gap: 3rem;
                }

                .final-cta {
                    text-align: center;
                    background: #0f172a;
                    color: #ffffff;
                    border-radius: 1.5rem;
                    margin-bottom: 4rem !important;
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.1rem;
                    }

                    .home-faqs,
                    .common-problems-header {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::recent_projects;

    #[test]
    fn projects_have_titles() {
        let projects = recent_projects();
        assert!(!projects.is_empty());
        assert!(projects.iter().all(|p| !p.title.is_empty()));
    }
}
